mod report;

use dialex::{LexError, Registry, Session, registry};
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

fn main() {
    init_tracing();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let registry = registry::builtin();
    if config.list {
        report::print_dialects(registry, config.color);
        return;
    }

    match run(registry, &config) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

struct CliConfig {
    lang: Option<String>,
    file: Option<PathBuf>,
    list: bool,
    color: bool,
}

fn run(registry: &Registry, config: &CliConfig) -> Result<(), LexError> {
    let mut session = Session::new(registry);

    let source = match (&config.file, &config.lang) {
        (Some(path), None) => {
            session.read_file(path)?;
            path.display().to_string()
        }
        (Some(path), Some(lang)) => {
            let text = std::fs::read_to_string(path).map_err(|source| LexError::Io { path: path.clone(), source })?;
            session.parse_as(lang, &text)?;
            path.display().to_string()
        }
        (None, lang) => {
            let text = read_stdin_input().map_err(|source| LexError::Io { path: PathBuf::from("<stdin>"), source })?;
            match lang {
                Some(lang) => session.parse_as(lang, &text)?,
                None => session.parse_text(&text)?,
            };
            "<stdin>".to_string()
        }
    };

    report::print_tokens(&source, session.language(), session.tokens(), config.color);
    Ok(())
}

/// Install a `RUST_LOG`-filtered subscriber; stays silent when it is unset.
fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(io::stderr))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn parse_args() -> Result<CliConfig, String> {
    let mut config = CliConfig { lang: None, file: None, list: false, color: io::stdout().is_terminal() };
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("dialex {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => config.color = true,
            "--no-color" => config.color = false,
            "--list" => config.list = true,
            "--lang" | "-l" => {
                let value = args.next().ok_or_else(|| "error: --lang expects a value".to_string())?;
                config.lang = Some(value);
            }
            _ if arg.starts_with("--lang=") => {
                config.lang = Some(arg.trim_start_matches("--lang=").to_string());
            }
            _ if arg.starts_with('-') && arg != "-" => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if config.file.is_some() {
                    return Err("error: more than one input file given".to_string());
                }
                if arg != "-" {
                    config.file = Some(PathBuf::from(arg));
                }
            }
        }
    }

    Ok(config)
}

fn read_stdin_input() -> io::Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "dialex {version}

Tokenize a source file and print its classified tokens.

Usage:
  dialex [OPTIONS] [FILE]

When FILE is omitted (or is `-`), input is read from stdin. Without --lang the
dialect is chosen from the file extension; stdin without --lang is plaintext.

Options:
  -l, --lang <name>          Dialect to use (case-insensitive), e.g. Javascript.
  --list                     List the built-in dialects and exit.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Logging:
  RUST_LOG=dialex=debug      Trace dialect resolution and scanning on stderr.

Exit codes:
  0  Success.
  1  Classification or I/O error.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
