//! Fallback language for sources without a dedicated definition.

use crate::tokenizer::{error::TokenizerResult, rule::RuleTable, token::TokenType};

use super::library::RuleLibrary;

pub fn generic(lib: &RuleLibrary) -> TokenizerResult<RuleTable> {
    RuleTable::builder("generic")
        .push(lib.get("dq_strings")?.with_refinement(lib.escapes()))
        .push(lib.get("sq_strings")?.with_refinement(lib.escapes()))
        // raw strings rather than templates outside javascript
        .push(lib.get("bq_strings")?.retyped(TokenType::StringAlt))
        .push(lib.get("doc_comments")?)
        .push(lib.get("block_comments")?)
        .push(lib.get("slash_comments")?)
        .push(lib.get("pound_comments")?)
        .push(lib.get("boolean")?)
        .push(lib.get("null")?)
        .push(lib.get("method_calls")?)
        .push(lib.get("function_calls")?)
        .push(lib.get("brackets")?)
        .push(lib.get("hex")?)
        .push(lib.get("floats")?)
        .push(lib.get("int")?)
        .build()
}
