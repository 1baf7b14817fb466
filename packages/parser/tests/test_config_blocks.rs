use ariaconf_parser::{
    parse_block, tokenize, Expected, ItemKind, LexError, ParseError, Parser, Statement, ValueKind,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::TRACE)
        .try_init();
}

/// Exhaust a parser the way callers do: skip `{{`, read until `}}`
fn drain(source: &str) -> Result<Vec<Statement>, ParseError> {
    let mut parser = Parser::new(source);
    parser.parse()?;

    let mut stmts = Vec::new();
    while let Some(stmt) = parser.parse()? {
        stmts.push(stmt);
    }
    Ok(stmts)
}

#[test]
fn test_statements_in_source_order() {
    init_tracing();
    let source = r#"{{
        aria = "cute"
        u = "gay"
        on = true
        escaped = "wew \"lad\""
        hex1 = 0xFF7700
        hex2 = 0xFF
        float = 0.56
    }}"#;

    let block = parse_block(source).unwrap();
    let keys: Vec<&str> = block.keys().collect();
    assert_eq!(keys, vec!["aria", "u", "on", "escaped", "hex1", "hex2", "float"]);

    let kinds: Vec<ValueKind> = block.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ValueKind::String,
            ValueKind::String,
            ValueKind::Bool,
            ValueKind::String,
            ValueKind::Number,
            ValueKind::Number,
            ValueKind::Number,
        ]
    );
}

#[test]
fn test_closing_meta_yields_none_once() {
    let mut parser = Parser::new("{{ a = 1 }}");
    assert_eq!(parser.parse().unwrap(), None);
    assert!(parser.parse().unwrap().is_some());
    assert_eq!(parser.parse().unwrap(), None);
}

#[test]
fn test_escaped_quotes_kept_verbatim() {
    let stmts = drain(r#"{{ escaped = "wew \"lad\"" }}"#).unwrap();
    assert_eq!(stmts[0].kind, ValueKind::String);
    assert_eq!(stmts[0].value, r#""wew \"lad\"""#);
}

#[test]
fn test_hex_literal() {
    let stmts = drain("{{ hex1 = 0xFF7700 }}").unwrap();
    assert_eq!(stmts[0].kind, ValueKind::Number);
    assert_eq!(stmts[0].value, "0xFF7700");
}

#[test]
fn test_boolean_literal() {
    let stmts = drain("{{ on = true }}").unwrap();
    assert_eq!(stmts[0].kind, ValueKind::Bool);
    assert_eq!(stmts[0].value, "true");

    let items = tokenize("{{ True trueish }}").unwrap();
    assert_eq!(items[1].kind, ItemKind::Identifier);
    assert_eq!(items[2].kind, ItemKind::Identifier);
}

#[test]
fn test_malformed_number_stops_parsing() {
    let mut parser = Parser::new("{{ bad = 12x3 next = 1 }}");
    parser.parse().unwrap();

    let err = parser.parse().unwrap_err();
    assert!(err.to_string().contains("bad number syntax"));
    assert!(parser.parse().is_err());
}

#[test]
fn test_unterminated_string() {
    let err = drain("{{ s = \"abc").unwrap_err();
    assert!(matches!(err, ParseError::Lex(LexError::UnterminatedString { .. })));
    assert!(err.to_string().contains("unterminated quoted string"));
}

#[test]
fn test_missing_equals_on_second_attempt() {
    let mut parser = Parser::new("{{ a b }}");
    assert!(parser.parse().unwrap().is_none());

    let err = parser.parse().unwrap_err();
    assert!(matches!(
        err,
        ParseError::Syntax {
            expected: Expected::Equals,
            ..
        }
    ));
    assert!(err.to_string().contains("expected equals"));
}

#[test]
fn test_statements_before_error_remain_valid() {
    let mut parser = Parser::new("{{ first = 1 second = }}");
    parser.parse().unwrap();

    let first = parser.parse().unwrap().unwrap();
    assert_eq!(first.key, "first");
    assert!(parser.parse().is_err());
}

#[test]
fn test_reparse_is_idempotent() {
    let source = "{{ name = \"aria\" size = 12 ratio = 1.5e3 enabled = false }}";
    let first = drain(source).unwrap();
    let second = drain(source).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.len(), 4);
}

#[test]
fn test_multiline_block_with_surrounding_text() {
    let source = "preamble\n{{\n  width = 640\n  title = \"main\"\n}}\nepilogue\n";
    let block = parse_block(source).unwrap();
    assert_eq!(block.len(), 2);
    assert_eq!(block.get("width").unwrap().value, "640");

    let span = block.get("title").unwrap().span;
    assert_eq!(&source[span.start..span.end], "title = \"main\"");
}

#[test]
fn test_statements_serialize() {
    let block = parse_block("{{ on = true }}").unwrap();
    let json = serde_json::to_value(&block).unwrap();
    assert_eq!(json["statements"][0]["key"], "on");
    assert_eq!(json["statements"][0]["kind"], "bool");
}

#[test]
fn test_parser_walks_into_second_block() {
    let mut parser = Parser::new("{{ a = 1 }} {{ b = 2 }}");

    assert_eq!(parser.parse().unwrap(), None);
    assert_eq!(parser.parse().unwrap().unwrap().key, "a");
    assert_eq!(parser.parse().unwrap(), None);
    assert_eq!(parser.parse().unwrap(), None);
    assert_eq!(parser.parse().unwrap().unwrap().key, "b");
    assert_eq!(parser.parse().unwrap(), None);
}
