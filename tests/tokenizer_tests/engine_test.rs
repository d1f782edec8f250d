use enlighter::{
    config::{EngineConfig, TokenizerConfig},
    tokenizer::{
        error::TokenizerError,
        micro::MicroTokenizer,
        rule::{Refinement, RuleTable},
        token::join_text,
    },
    tokenize, Token, TokenType, Tokenizer,
};
use pretty_assertions::assert_eq;

fn pairs(tokens: &[Token]) -> Vec<(&str, TokenType)> {
    tokens.iter().map(|t| (t.text(), t.kind())).collect()
}

fn let_table() -> RuleTable {
    let escapes = MicroTokenizer::uniform(r"\\.", TokenType::Escape).unwrap();
    RuleTable::builder("let")
        .refined("string", r"'(?:[^'\\]|\\.)*'", TokenType::String, escapes)
        .rule("keyword", r"\blet\b", TokenType::Keyword)
        .rule("identifier", r"\b[a-z_]\w*\b", TokenType::Text)
        .build()
        .unwrap()
}

#[test]
fn test_let_statement() {
    let input = r"let x = 'a\n'";
    let tokens = tokenize(input, &let_table());

    assert_eq!(
        pairs(&tokens),
        vec![
            ("let", TokenType::Keyword),
            (" ", TokenType::Text),
            ("x", TokenType::Text),
            (" = ", TokenType::Text),
            ("'a", TokenType::String),
            (r"\n", TokenType::Escape),
            ("'", TokenType::String),
        ]
    );
    assert_eq!(join_text(&tokens), input);
}

#[test]
fn test_empty_table_yields_single_text_token() {
    let table = RuleTable::empty("none");
    assert_eq!(
        tokenize("anything at all", &table),
        vec![Token::plain("anything at all")]
    );
    assert!(tokenize("", &table).is_empty());
}

#[test]
fn test_escape_never_crosses_delimiters() {
    let tokens = tokenize(r"'\t'", &let_table());
    assert_eq!(
        pairs(&tokens),
        vec![
            ("'", TokenType::String),
            (r"\t", TokenType::Escape),
            ("'", TokenType::String),
        ]
    );
}

#[test]
fn test_zero_width_rule_terminates() {
    let table = RuleTable::builder("zero")
        .rule("nothing", r"\b", TokenType::Keyword)
        .rule("maybe", r"y*", TokenType::Keyword)
        .build()
        .unwrap();
    let tokens = tokenize("x yy z", &table);
    assert_eq!(
        pairs(&tokens),
        vec![
            ("x ", TokenType::Text),
            ("yy", TokenType::Keyword),
            (" z", TokenType::Text),
        ]
    );
}

#[test]
fn test_invalid_pattern_fails_at_construction() {
    let result = RuleTable::builder("broken")
        .rule("unclosed", r"(abc", TokenType::Keyword)
        .build();
    match result {
        Err(TokenizerError::InvalidPattern { rule, .. }) => assert_eq!(rule, "unclosed"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_validation_mode_reports_broken_refinement() {
    let shout = Refinement::custom(|token| {
        vec![Token::new(token.text().to_uppercase(), token.kind())]
    });
    let table = RuleTable::builder("shout")
        .refined("word", r"[a-z]+", TokenType::Keyword, shout)
        .build()
        .unwrap();
    let tokenizer = Tokenizer::new(
        table,
        TokenizerConfig {
            validate_refinements: true,
        },
    );

    match tokenizer.tokenize("say hi") {
        Err(TokenizerError::RefinementMismatch {
            rule,
            expected,
            actual,
        }) => {
            assert_eq!(rule, "word");
            assert_eq!(expected, "say");
            assert_eq!(actual, "SAY");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_tokenizer_spans_are_contiguous() {
    let tokenizer = Tokenizer::from(let_table());
    let input = "let a = 'b'\nlet c = 'd\\e'";
    let spans = tokenizer.tokenize_spans(input).unwrap();

    let mut offset = 0;
    for span in &spans {
        assert_eq!(span.start, offset);
        assert_eq!(&input[span.start..span.end], span.token.text());
        offset = span.end;
    }
    assert_eq!(offset, input.len());

    let second_let = spans.iter().filter(|s| s.token.text() == "let").nth(1).unwrap();
    assert_eq!((second_let.line, second_let.column), (2, 1));
}

#[test]
fn test_token_json_shape() {
    let tokens = tokenize("let", &let_table());
    let json = serde_json::to_string(&tokens).unwrap();
    assert_eq!(json, r#"[{"text":"let","type":"k0"}]"#);
}

#[test]
fn test_config_file_is_loaded() {
    let path = std::env::temp_dir().join(format!("enlighter-config-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"default_language": "solidity", "tokenizer": {"validate_refinements": true}}"#,
    )
    .unwrap();

    let config = EngineConfig::from_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(config.default_language, "solidity");
    assert!(config.tokenizer.validate_refinements);
    assert!(!config.pretty_json);
}
