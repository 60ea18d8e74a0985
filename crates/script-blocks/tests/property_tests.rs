use proptest::prelude::*;
use regex::Regex;
use script_blocks::{ScriptMetadata, is_valid_block_name};

fn comment_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "# [a-z =\"0-9\\[\\]]{0,20}\n",
        Just("#\n".to_string()),
        Just("# ///\n".to_string()),
        "# /// [a-z_.$-]{1,10}\n",
        "[a-z =]{0,10}\n",
        Just("\n".to_string()),
    ]
}

proptest! {
    #[test]
    fn test_validator_agrees_with_character_class(name in "\\PC{0,12}") {
        let pattern = Regex::new(r"^[A-Za-z0-9-]+$").unwrap();
        prop_assert_eq!(is_valid_block_name(&name), pattern.is_match(&name));
    }

    #[test]
    fn test_parse_is_deterministic(lines in prop::collection::vec(comment_line(), 0..30)) {
        let source: String = lines.concat();
        let first = ScriptMetadata::from_string(&source);
        let second = ScriptMetadata::from_string(&source);
        match (first, second) {
            (Ok(a), Ok(b)) => prop_assert_eq!(a, b),
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            _ => prop_assert!(false, "parses disagree"),
        }
    }

    #[test]
    fn test_keys_are_always_valid_names(lines in prop::collection::vec(comment_line(), 0..30)) {
        let source: String = lines.concat();
        if let Ok(metadata) = ScriptMetadata::from_string(&source) {
            for name in metadata.block_names() {
                prop_assert!(is_valid_block_name(name), "{:?} is not a valid name", name);
            }
        }
    }

    #[test]
    fn test_plain_code_yields_nothing(lines in prop::collection::vec("[a-z =()]{0,20}\n", 0..20)) {
        let source: String = lines.concat();
        let metadata = ScriptMetadata::from_string(&source).unwrap();
        prop_assert!(metadata.blocks.is_empty());
        prop_assert!(metadata.warnings.is_empty());
    }

    #[test]
    fn test_well_formed_payload_round_trips(body in prop::collection::vec("[a-z =\"0-9]{0,20}", 0..10)) {
        let mut source = String::from("# /// script\n");
        for line in &body {
            if line.is_empty() {
                source.push_str("#\n");
            } else {
                source.push_str(&format!("# {line}\n"));
            }
        }
        source.push_str("# ///\n");

        let metadata = ScriptMetadata::from_string(&source).unwrap();
        let expected: String = body.iter().map(|l| format!("{l}\n")).collect();
        prop_assert_eq!(metadata.block("script"), Some(expected.as_str()));
        prop_assert!(metadata.warnings.is_empty());
    }
}
