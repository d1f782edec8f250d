use enlighter::{
    tokenize,
    tokenizer::{rule::RuleTable, token::locate},
};
use proptest::prelude::*;

use crate::builtin_tables;

fn source_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        // code-like input with quotes, comments and escapes
        "[a-z0-9_ .,;:=+*/(){}\\[\\]'\"`$\\\\\n\t-]{0,80}",
        "(if|x|\\.|'|\"|`|//|/\\*|\\*/|\\\\|\\$\\{|\\}|0x1f|-2\\.5|é| |\n){0,40}",
    ]
}

fn check_invariants(input: &str, table: &RuleTable) -> Result<(), TestCaseError> {
    let tokens = tokenize(input, table);

    let joined: String = tokens.iter().map(|t| t.text()).collect();
    prop_assert_eq!(&joined, input, "round trip failed for {}", table.language());
    prop_assert!(tokens.iter().all(|t| !t.is_empty()), "empty token");

    let spans = locate(tokens);
    let mut offset = 0;
    for span in &spans {
        prop_assert_eq!(span.start, offset);
        prop_assert!(span.end > span.start);
        offset = span.end;
    }
    prop_assert_eq!(offset, input.len());
    Ok(())
}

proptest! {
    #[test]
    fn test_builtin_tables_are_lossless(input in source_strategy()) {
        for table in builtin_tables() {
            check_invariants(&input, table)?;
        }
    }

    #[test]
    fn test_empty_table_is_plain(input in any::<String>()) {
        let tokens = tokenize(&input, &RuleTable::empty("none"));
        if input.is_empty() {
            prop_assert!(tokens.is_empty());
        } else {
            prop_assert_eq!(tokens.len(), 1);
            prop_assert!(tokens[0].kind().is_plain());
            prop_assert_eq!(tokens[0].text(), input.as_str());
        }
    }
}
