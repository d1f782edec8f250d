use enlighter::{
    language::{javascript, solidity},
    tokenize, Error, LanguageRegistry, Token, TokenType,
};
use pretty_assertions::assert_eq;

use crate::{GENERIC, JAVASCRIPT, LIBRARY, SOLIDITY};

fn pairs(tokens: &[Token]) -> Vec<(&str, TokenType)> {
    tokens.iter().map(|t| (t.text(), t.kind())).collect()
}

fn kind_of(tokens: &[Token], text: &str) -> Option<TokenType> {
    tokens.iter().find(|t| t.text() == text).map(Token::kind)
}

#[test]
fn test_property_wins_over_keyword() {
    assert_eq!(
        pairs(&tokenize("obj.if", &JAVASCRIPT)),
        vec![
            ("obj", TokenType::Text),
            (".", TokenType::Operator),
            ("if", TokenType::Property),
        ]
    );
    assert_eq!(
        pairs(&tokenize("obj.if", &SOLIDITY)),
        vec![("obj.", TokenType::Text), ("if", TokenType::Property)]
    );
}

#[test]
fn test_javascript_keywords_as_properties() {
    let classes = [
        javascript::CONTROL_KEYWORDS,
        javascript::DECLARATION_KEYWORDS,
        javascript::OPERATOR_KEYWORDS,
        javascript::GLOBAL_KEYWORDS,
    ];
    for keyword in classes.iter().flat_map(|c| c.iter()) {
        let tokens = tokenize(&format!("x.{}", keyword), &JAVASCRIPT);
        assert_eq!(
            kind_of(&tokens, keyword),
            Some(TokenType::Property),
            "x.{} should be a property",
            keyword
        );
    }
}

#[test]
fn test_solidity_keywords_as_properties() {
    let classes = [
        solidity::TYPE_KEYWORDS,
        solidity::GLOBAL_KEYWORDS,
        solidity::CONTROL_KEYWORDS,
        solidity::DECLARATION_KEYWORDS,
        solidity::INHERITANCE_KEYWORDS,
        solidity::OPERATOR_KEYWORDS,
        solidity::UNIT_KEYWORDS,
    ];
    for keyword in classes.iter().flat_map(|c| c.iter()) {
        let tokens = tokenize(&format!("x.{}", keyword), &SOLIDITY);
        assert_eq!(
            kind_of(&tokens, keyword),
            Some(TokenType::Property),
            "x.{} should be a property",
            keyword
        );
    }
}

#[test]
fn test_javascript_keyword_classes() {
    let classes = [
        (javascript::CONTROL_KEYWORDS, TokenType::ControlKeyword),
        (javascript::DECLARATION_KEYWORDS, TokenType::Keyword),
        (javascript::OPERATOR_KEYWORDS, TokenType::OperatorKeyword),
        (javascript::GLOBAL_KEYWORDS, TokenType::GlobalKeyword),
    ];
    for (words, kind) in classes {
        for word in words {
            let tokens = tokenize(word, &JAVASCRIPT);
            assert_eq!(pairs(&tokens), vec![(*word, kind)], "keyword {}", word);
        }
    }
}

#[test]
fn test_solidity_keyword_classes() {
    let classes = [
        (solidity::TYPE_KEYWORDS, TokenType::TypeKeyword),
        (solidity::GLOBAL_KEYWORDS, TokenType::GlobalKeyword),
        (solidity::CONTROL_KEYWORDS, TokenType::ControlKeyword),
        (solidity::INHERITANCE_KEYWORDS, TokenType::GlobalKeyword),
        (solidity::OPERATOR_KEYWORDS, TokenType::OperatorKeyword),
        (solidity::UNIT_KEYWORDS, TokenType::OperatorKeyword),
    ];
    for (words, kind) in classes {
        for word in words {
            let tokens = tokenize(word, &SOLIDITY);
            assert_eq!(pairs(&tokens), vec![(*word, kind)], "keyword {}", word);
        }
    }

    // literals are claimed before the declaration keywords that list them
    assert_eq!(
        pairs(&tokenize("true", &SOLIDITY)),
        vec![("true", TokenType::Boolean)]
    );
    assert_eq!(
        pairs(&tokenize("contract", &SOLIDITY)),
        vec![("contract", TokenType::Keyword)]
    );
}

#[test]
fn test_template_literal() {
    assert_eq!(
        pairs(&tokenize("`a${b}c`", &JAVASCRIPT)),
        vec![
            ("`a", TokenType::Template),
            ("${b}", TokenType::Interpolation),
            ("c`", TokenType::Template),
        ]
    );
}

#[test]
fn test_string_escapes_in_javascript() {
    assert_eq!(
        pairs(&tokenize(r#"log("\é\x41!")"#, &JAVASCRIPT)),
        vec![
            ("log", TokenType::FunctionCall),
            ("(", TokenType::Bracket),
            ("\"", TokenType::String),
            (r"\é", TokenType::Escape),
            (r"\x41", TokenType::Escape),
            ("!\"", TokenType::String),
            (")", TokenType::Bracket),
        ]
    );
}

#[test]
fn test_solidity_function() {
    let source = "function deposit() external payable {\n    balances[msg.sender] += msg.value;\n}";
    let tokens = tokenize(source, &SOLIDITY);

    assert_eq!(kind_of(&tokens, "function"), Some(TokenType::Keyword));
    assert_eq!(kind_of(&tokens, "deposit"), Some(TokenType::FunctionCall));
    assert_eq!(kind_of(&tokens, "external"), Some(TokenType::Keyword));
    assert_eq!(kind_of(&tokens, "payable"), Some(TokenType::TypeKeyword));
    assert_eq!(kind_of(&tokens, "msg"), Some(TokenType::GlobalKeyword));
    assert_eq!(kind_of(&tokens, "sender"), Some(TokenType::Property));
    assert_eq!(kind_of(&tokens, "value"), Some(TokenType::Property));
}

#[test]
fn test_comment_hides_keywords() {
    let tokens = tokenize("/** @dev if */ /* return */ x // while", &SOLIDITY);
    assert_eq!(
        pairs(&tokens),
        vec![
            ("/** @dev if */", TokenType::DocComment),
            (" ", TokenType::Text),
            ("/* return */", TokenType::BlockComment),
            (" x ", TokenType::Text),
            ("// while", TokenType::Comment),
        ]
    );
}

#[test]
fn test_line_comments_stop_at_quoted_word() {
    for marker in ["//", "#"] {
        let source = format!("a {} it's 'x' ok", marker);
        let comment = format!("{} it", marker);
        assert_eq!(
            pairs(&tokenize(&source, &GENERIC)),
            vec![
                ("a ", TokenType::Text),
                (comment.as_str(), TokenType::Comment),
                ("'s '", TokenType::String),
                ("x' ok", TokenType::Text),
            ]
        );
    }
}

#[test]
fn test_registry_aliases() {
    let registry = LanguageRegistry::builtin();
    let table = registry.build("SOL", &LIBRARY).unwrap();
    assert_eq!(table.language(), "solidity");
    let table = registry.build("js", &LIBRARY).unwrap();
    assert_eq!(table.language(), "javascript");
}

#[test]
fn test_registry_unknown_language() {
    let registry = LanguageRegistry::builtin();
    match registry.build("brainfuck", &LIBRARY) {
        Err(Error::UnknownLanguage(name)) => assert_eq!(name, "brainfuck"),
        other => panic!("unexpected result: {:?}", other.map(|t| t.language().to_string())),
    }
}
