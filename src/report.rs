use dialex::{Tag, TokenSequence};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

fn tag_color(tag: Tag) -> &'static str {
    match tag {
        Tag::Comment | Tag::Docstring => ansi::GRAY,
        Tag::String => ansi::GREEN,
        Tag::Hex => ansi::YELLOW,
        Tag::Keyword => ansi::MAGENTA,
        Tag::Operator => ansi::CYAN,
        Tag::Decorator | Tag::Symbol | Tag::Ident => ansi::BLUE,
        Tag::BlockStart | Tag::BlockEnd | Tag::ArgStart | Tag::ArgEnd | Tag::ArrayStart | Tag::ArrayEnd | Tag::End => {
            ansi::RED
        }
        Tag::Word | Tag::Whitespace | Tag::Char => ansi::RESET,
    }
}

/// One line per token: offset, tag, quoted lexeme. Whitespace is skipped.
pub fn print_tokens(source: &str, dialect: &str, tokens: &TokenSequence, color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.bold(palette.paint(format!("⚙  {source} as {dialect}"), ansi::CYAN)));
    println!("{}", palette.paint("━━━ Tokens ━━━", ansi::GRAY));

    for (offset, token) in tokens.with_offsets().filter(|(_, t)| t.tag != Tag::Whitespace) {
        println!(
            "  {} {} {}",
            palette.dim(format!("{offset:>6}")),
            palette.paint(format!("{:<10}", token.tag), tag_color(token.tag)),
            palette.bold(format!("{:?}", token.lexeme)),
        );
    }

    println!("\n{}", palette.paint("━━━ Summary ━━━", ansi::GRAY));
    println!("  {} tokens  │  {} bytes", palette.paint(tokens.len().to_string(), ansi::GREEN), tokens.text().len());
    println!();
}

pub fn print_dialects(registry: &dialex::Registry, color: bool) {
    let palette = ansi::Palette::new(color);
    for dialect in registry.iter() {
        let exts = dialect.extensions().iter().map(|e| format!(".{e}")).collect::<Vec<_>>().join(" ");
        println!(
            "  {} {}  {}",
            palette.paint(format!("{:<12}", dialect.name()), ansi::BLUE),
            palette.dim(exts),
            palette.dim(format!("{} patterns, {} rewrites", dialect.patterns().len(), dialect.rewrites().len())),
        );
    }
}
