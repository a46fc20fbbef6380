//! Parameterized scenario tables for duplicate-key policies and
//! indentation/syntax errors.

use nestedtext::{DuplicateKeyPolicy, ParseOptions};
use rstest::rstest;

#[rstest]
#[case::error_policy_rejects_second_occurrence(DuplicateKeyPolicy::Error, None)]
#[case::use_first_keeps_earliest_value(DuplicateKeyPolicy::UseFirst, Some("1"))]
#[case::use_last_keeps_latest_value(DuplicateKeyPolicy::UseLast, Some("2"))]
fn duplicate_key_policies(
    #[case] policy: DuplicateKeyPolicy,
    #[case] expected: Option<&str>,
) {
    let options = ParseOptions::new().with_duplicate_key_policy(policy.clone());
    let result = nestedtext::parse_string("a: 1\na: 2\n", &options);
    match expected {
        Some(value) => {
            let map = result.unwrap().unwrap();
            assert_eq!(
                map.as_mapping().unwrap().get("a").unwrap().as_str(),
                Some(value)
            );
        }
        None => {
            assert_eq!(policy, DuplicateKeyPolicy::Error);
            let err = result.unwrap_err();
            assert_eq!(err.message(), "duplicate key");
        }
    }
}

#[rstest]
#[case::tab_in_list_item_indent("- a\n\t- b\n", "invalid indentation")]
#[case::mismatched_list_depth("- a\n   - b\n", "invalid indentation")]
#[case::string_fragment_shallower_than_first("a:\n    > line1\n  > line2\n", "invalid indentation")]
#[case::bare_bracket_line("[a, b]\n", "unrecognized line")]
#[case::mapping_item_missing_after_multiline_key(": key\n", "expected value after multiline object key")]
#[case::list_item_expected_but_object_seen("- a\nb: c\n", "expected list item")]
fn syntax_errors(#[case] input: &str, #[case] expected_message: &str) {
    let err = nestedtext::parse_string(input, &ParseOptions::new()).unwrap_err();
    assert_eq!(err.message(), expected_message);
}

#[rstest]
#[case("- a\n- b\n- c\n")]
#[case("k: v\n")]
#[case("k:\n  - a\n  - b\n")]
#[case("> a\n> b\n")]
#[case(": k1\n: k2\n  > v\n")]
fn well_formed_documents_parse_without_error(#[case] input: &str) {
    nestedtext::parse_string(input, &ParseOptions::new()).unwrap();
}
