use crate::{Registry, Session, Tag, Token, TokenSequence};
use pretty_assertions::assert_eq;

fn classify(dialect: &str, input: &str) -> TokenSequence {
    let registry = Registry::standard();
    let mut session = Session::new(&registry);
    session.parse_as(dialect, input).unwrap().clone()
}

/// Non-whitespace tokens only, to keep expectations readable.
fn significant(dialect: &str, input: &str) -> Vec<(Tag, String)> {
    classify(dialect, input)
        .into_iter()
        .filter(|t| t.tag != Tag::Whitespace)
        .map(|t| (t.tag, t.lexeme))
        .collect()
}

fn pairs(expected: &[(Tag, &str)]) -> Vec<(Tag, String)> {
    expected.iter().map(|&(tag, lexeme)| (tag, lexeme.to_string())).collect()
}

#[test]
fn hex_scenario_holds_for_every_dialect() {
    let registry = Registry::standard();
    let expected = vec![
        Token::new(Tag::Hex, "0x00"),
        Token::new(Tag::Whitespace, " "),
        Token::new(Tag::Hex, "0xFF"),
        Token::new(Tag::Whitespace, " "),
        Token::new(Tag::Word, "0xFFZZ"),
    ];

    for name in registry.names() {
        let mut session = Session::new(&registry);
        let tokens = session.parse_as(name, "0x00 0xFF 0xFFZZ").unwrap();
        assert_eq!(tokens.clone().into_vec(), expected, "dialect {name}");
    }
}

#[test]
fn brace_is_structural_only_where_the_dialect_says_so() {
    for name in ["Javascript", "Node", "Go", "Java", "Ruby"] {
        assert_eq!(classify(name, "{").into_vec(), vec![Token::new(Tag::BlockStart, "{")], "dialect {name}");
    }
    assert_eq!(classify("Python", "{").into_vec(), vec![Token::new(Tag::Char, "{")]);
}

#[test]
fn keyword_needs_an_exact_lexeme() {
    assert_eq!(
        significant("Javascript", "for forEach iffy if"),
        pairs(&[(Tag::Keyword, "for"), (Tag::Word, "forEach"), (Tag::Word, "iffy"), (Tag::Keyword, "if")])
    );
}

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(significant("Python", "None none"), pairs(&[(Tag::Keyword, "None"), (Tag::Word, "none")]));
}

#[test]
fn keywords_inside_strings_and_comments_stay_put() {
    assert_eq!(
        significant("Java", "\"return\" // while\nreturn;"),
        pairs(&[(Tag::String, "\"return\""), (Tag::Comment, "// while"), (Tag::Keyword, "return"), (Tag::End, ";")])
    );
}

#[test]
fn javascript_statement() {
    assert_eq!(
        significant("Javascript", "let xs = [a, b]; x === `t${y}`;"),
        pairs(&[
            (Tag::Keyword, "let"),
            (Tag::Word, "xs"),
            (Tag::Operator, "="),
            (Tag::ArrayStart, "["),
            (Tag::Word, "a"),
            (Tag::Char, ","),
            (Tag::Word, "b"),
            (Tag::ArrayEnd, "]"),
            (Tag::End, ";"),
            (Tag::Word, "x"),
            (Tag::Operator, "==="),
            (Tag::String, "`t${y}`"),
            (Tag::End, ";"),
        ])
    );
}

#[test]
fn node_retags_runtime_globals() {
    assert_eq!(
        significant("Node", "const fs = require('fs');"),
        pairs(&[
            (Tag::Keyword, "const"),
            (Tag::Word, "fs"),
            (Tag::Operator, "="),
            (Tag::Ident, "require"),
            (Tag::ArgStart, "("),
            (Tag::String, "'fs'"),
            (Tag::ArgEnd, ")"),
            (Tag::End, ";"),
        ])
    );
    assert_eq!(significant("Javascript", "require"), pairs(&[(Tag::Word, "require")]));
    assert_eq!(significant("Node", "setTimeout"), pairs(&[(Tag::Ident, "setTimeout")]));
}

#[test]
fn go_operators() {
    assert_eq!(
        significant("Go", "x := <-ch &^ mask"),
        pairs(&[
            (Tag::Word, "x"),
            (Tag::Operator, ":="),
            (Tag::Operator, "<-"),
            (Tag::Word, "ch"),
            (Tag::Operator, "&^"),
            (Tag::Word, "mask"),
        ])
    );
}

#[test]
fn go_raw_strings_and_keywords() {
    assert_eq!(
        significant("Go", "go func() { goto `a\nb` }"),
        pairs(&[
            (Tag::Keyword, "go"),
            (Tag::Keyword, "func"),
            (Tag::ArgStart, "("),
            (Tag::ArgEnd, ")"),
            (Tag::BlockStart, "{"),
            (Tag::Keyword, "goto"),
            (Tag::String, "`a\nb`"),
            (Tag::BlockEnd, "}"),
        ])
    );
}

#[test]
fn go_leaves_brackets_and_semicolons_alone() {
    assert_eq!(significant("Go", "[;]"), pairs(&[(Tag::Char, "["), (Tag::Char, ";"), (Tag::Char, "]")]));
}

#[test]
fn python_docstrings_decorators_and_comments() {
    let src = "@app.route\ndef f():\n    \"\"\"Doc\n    string\"\"\"\n    return 2 ** 8 # power\n";
    assert_eq!(
        significant("Python", src),
        pairs(&[
            (Tag::Decorator, "@app.route"),
            (Tag::Keyword, "def"),
            (Tag::Word, "f"),
            (Tag::Char, "("),
            (Tag::Char, ")"),
            (Tag::Char, ":"),
            (Tag::Docstring, "\"\"\"Doc\n    string\"\"\""),
            (Tag::Keyword, "return"),
            (Tag::Word, "2"),
            (Tag::Operator, "**"),
            (Tag::Word, "8"),
            (Tag::Comment, "# power"),
        ])
    );
}

#[test]
fn python_shorthand_keywords_expand() {
    assert_eq!(significant("Python", "elif if"), pairs(&[(Tag::Keyword, "elif"), (Tag::Keyword, "if")]));
}

#[test]
fn java_annotations_and_operators() {
    assert_eq!(
        significant("Java", "@Override public int f() { return a ?: b; }"),
        pairs(&[
            (Tag::Decorator, "@Override"),
            (Tag::Keyword, "public"),
            (Tag::Keyword, "int"),
            (Tag::Word, "f"),
            (Tag::ArgStart, "("),
            (Tag::ArgEnd, ")"),
            (Tag::BlockStart, "{"),
            (Tag::Keyword, "return"),
            (Tag::Word, "a"),
            (Tag::Operator, "?:"),
            (Tag::Word, "b"),
            (Tag::End, ";"),
            (Tag::BlockEnd, "}"),
        ])
    );
    assert_eq!(significant("Java", "throws throw"), pairs(&[(Tag::Keyword, "throws"), (Tag::Keyword, "throw")]));
}

#[test]
fn ruby_symbols_globals_and_operators() {
    assert_eq!(
        significant("Ruby", "Foo::Bar <=> :baz $stdout $! $1 $FOO"),
        pairs(&[
            (Tag::Word, "Foo"),
            (Tag::Operator, "::"),
            (Tag::Word, "Bar"),
            (Tag::Operator, "<=>"),
            (Tag::Symbol, ":baz"),
            (Tag::Ident, "$stdout"),
            (Tag::Ident, "$!"),
            (Tag::Ident, "$1"),
            (Tag::Char, "$"),
            (Tag::Word, "FOO"),
        ])
    );
}

#[test]
fn ruby_blocks_and_keywords() {
    assert_eq!(
        significant("Ruby", "[1].each { |x| puts x } unless __FILE__"),
        pairs(&[
            (Tag::ArrayStart, "["),
            (Tag::Word, "1"),
            (Tag::ArrayEnd, "]"),
            (Tag::Operator, "."),
            (Tag::Word, "each"),
            (Tag::BlockStart, "{"),
            (Tag::Operator, "|"),
            (Tag::Word, "x"),
            (Tag::Operator, "|"),
            (Tag::Word, "puts"),
            (Tag::Word, "x"),
            (Tag::BlockEnd, "}"),
            (Tag::Keyword, "unless"),
            (Tag::Keyword, "__FILE__"),
        ])
    );
}

#[test]
fn every_dialect_is_lossless_on_mixed_input() {
    let registry = Registry::standard();
    let input = "/* c */ # h\n'a' \"b\" `c` x := 0x1F; @d ::e $0 «ünï» \u{1F600}\r\n\t}";

    for name in registry.names() {
        let mut session = Session::new(&registry);
        let tokens = session.parse_as(name, input).unwrap();
        assert_eq!(tokens.text(), input, "dialect {name}");
    }
}
