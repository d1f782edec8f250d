//! # Solidity
//!
//! Keyword classes follow the usual Solidity highlighting: storage and type
//! modifiers (`k2`), globals and built-in functions (`k9`), control flow (`k1`),
//! declarations (`k0`) and word operators including ether units (`k3`).
//! Property accesses are matched before literals and every keyword class so that
//! members such as `msg.value` or `x.call` are never mistaken for keywords.

use crate::tokenizer::{error::TokenizerResult, rule::RuleTable, token::TokenType};

use super::{keyword_pattern, library::RuleLibrary};

pub const TYPE_KEYWORDS: &[&str] = &[
    "enum", "memory", "storage", "calldata", "pure", "view", "payable", "address",
];

pub const GLOBAL_KEYWORDS: &[&str] = &[
    "abi", "block", "msg", "now", "tx", "assert", "require", "revert", "blockhash", "keccak256",
    "sha256", "ripemd160", "ecrecover",
];

pub const CONTROL_KEYWORDS: &[&str] = &[
    "if", "while", "else", "do", "continue", "break", "return", "throw", "emit",
];

pub const DECLARATION_KEYWORDS: &[&str] = &[
    "import", "contract", "library", "interface", "is", "public", "internal", "private",
    "constant", "using", "struct", "function", "external", "event", "anonymous", "assembly",
    "selfdestruct", "true", "false",
];

pub const INHERITANCE_KEYWORDS: &[&str] = &["super", "this"];

pub const OPERATOR_KEYWORDS: &[&str] = &["instanceof", "new", "delete", "typeof", "void", "in"];

pub const UNIT_KEYWORDS: &[&str] = &["wei", "szabo", "finney", "ether"];

pub fn solidity(lib: &RuleLibrary) -> TokenizerResult<RuleTable> {
    RuleTable::builder("solidity")
        .push(lib.get("sq_strings")?.with_refinement(lib.escapes()))
        .push(lib.get("dq_strings")?.with_refinement(lib.escapes()))
        .push(
            lib.get("bq_strings")?
                .renamed("template")
                .with_refinement(lib.interpolation()),
        )
        .push(lib.get("doc_comments")?)
        .push(lib.get("block_comments")?)
        .push(lib.get("slash_comments")?)
        // properties before literals and keywords
        .push(lib.get("prop")?)
        .push(lib.get("boolean")?)
        .push(lib.get("null")?)
        .rule("types", &keyword_pattern(TYPE_KEYWORDS), TokenType::TypeKeyword)
        .rule("globals", &keyword_pattern(GLOBAL_KEYWORDS), TokenType::GlobalKeyword)
        .rule("control", &keyword_pattern(CONTROL_KEYWORDS), TokenType::ControlKeyword)
        .rule("keywords", &keyword_pattern(DECLARATION_KEYWORDS), TokenType::Keyword)
        .rule("inheritance", &keyword_pattern(INHERITANCE_KEYWORDS), TokenType::GlobalKeyword)
        .rule("operators_kw", &keyword_pattern(OPERATOR_KEYWORDS), TokenType::OperatorKeyword)
        .rule("units", &keyword_pattern(UNIT_KEYWORDS), TokenType::OperatorKeyword)
        .push(lib.get("method_calls")?)
        .push(lib.get("function_calls")?)
        .push(lib.get("brackets")?)
        .push(lib.get("octal")?)
        .push(lib.get("bin")?)
        .push(lib.get("hex")?)
        .push(lib.get("floats")?)
        .push(lib.get("int")?)
        .build()
}
