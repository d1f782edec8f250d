//! # JavaScript
//!
//! Strings are refined for escape sequences and template literals for `${...}`
//! markers. Method calls and property accesses are matched before any keyword
//! class so that `obj.if` or `obj.delete()` keep their member classification.

use crate::tokenizer::{error::TokenizerResult, rule::RuleTable, token::TokenType};

use super::{keyword_pattern, library::RuleLibrary};

pub const CONTROL_KEYWORDS: &[&str] = &[
    "if", "else", "for", "while", "do", "switch", "case", "default", "break", "continue",
    "return", "throw", "try", "catch", "finally", "yield", "await",
];

pub const DECLARATION_KEYWORDS: &[&str] = &[
    "var", "let", "const", "function", "class", "extends", "import", "export", "async", "static",
];

pub const OPERATOR_KEYWORDS: &[&str] = &["new", "delete", "typeof", "instanceof", "void", "in", "of"];

pub const GLOBAL_KEYWORDS: &[&str] = &["this", "super", "window", "document", "console"];

/// Regex literals only where an expression may start, so `a / b / c` stays arithmetic.
const REGEX_LITERAL: &str =
    r"(?m)(?:^|[=(,:;!&|?{}\[]|\breturn)[ \t]*(/(?:[^/\\\n\[]|\\.|\[(?:[^\]\\\n]|\\.)*\])+/[dgimsuy]*)";

pub fn javascript(lib: &RuleLibrary) -> TokenizerResult<RuleTable> {
    RuleTable::builder("javascript")
        .push(lib.get("sq_strings")?.with_refinement(lib.escapes()))
        .push(lib.get("dq_strings")?.with_refinement(lib.escapes()))
        .push(lib.get("bq_strings")?.with_refinement(lib.interpolation()))
        .push(lib.get("doc_comments")?)
        .push(lib.get("block_comments")?)
        .push(lib.get("slash_comments")?)
        .rule("regex", REGEX_LITERAL, TokenType::Regex)
        .push(lib.get("boolean")?)
        .push(lib.get("null")?)
        .rule("undefined", r"\b(undefined|NaN|Infinity)\b", TokenType::Null)
        // members before keywords
        .push(lib.get("method_calls")?)
        .push(lib.get("prop")?)
        .rule("control", &keyword_pattern(CONTROL_KEYWORDS), TokenType::ControlKeyword)
        .rule("declarations", &keyword_pattern(DECLARATION_KEYWORDS), TokenType::Keyword)
        .rule("operators_kw", &keyword_pattern(OPERATOR_KEYWORDS), TokenType::OperatorKeyword)
        .rule("globals", &keyword_pattern(GLOBAL_KEYWORDS), TokenType::GlobalKeyword)
        .push(lib.get("function_calls")?)
        .push(lib.get("brackets")?)
        .push(lib.get("octal")?)
        .push(lib.get("bin")?)
        .push(lib.get("hex")?)
        .push(lib.get("floats")?)
        .push(lib.get("int")?)
        .push(lib.get("punctuation")?)
        .push(lib.get("operators")?)
        .build()
}
