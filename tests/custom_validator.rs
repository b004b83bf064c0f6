//! End-to-end coverage of the custom rule engine: wire documents in, decided
//! characters out.

use oskbridge::{
    CharacterAction, CharacterValidator, LineType, TextValidator, ValidationMode,
};

fn driver(validator: CharacterValidator) -> TextValidator {
    TextValidator::with_custom(ValidationMode::Custom, LineType::SingleLine, validator)
}

#[test]
fn block_rule_with_allow_fallback() {
    // One rule: block 'x' (VALUE_EQUALS 120); everything else allowed.
    let validator = CharacterValidator::from_json(
        r#"{
            "rules": [{
                "conditions": [{
                    "conditionOperator": 0,
                    "conditionIntValue1": 120,
                    "conditionIntValue2": 0,
                    "conditionStringValue": ""
                }],
                "action": 1,
                "actionIntValue": 0
            }],
            "otherCharacterAction": 0,
            "otherCharacterActionIntValue": 0
        }"#,
    )
    .unwrap();

    let result = driver(validator).validate("", "axbxc", 0, None);
    assert_eq!(result.text, "abc");
    assert_eq!(result.caret, 3);
}

#[test]
fn digits_only_via_range_and_block_fallback() {
    // Allow '0'..='9' (VALUE_BETWEEN_INCLUSIVE 48..57), block the rest.
    let validator = CharacterValidator::from_json(
        r#"{
            "rules": [{
                "conditions": [{
                    "conditionOperator": 5,
                    "conditionIntValue1": 48,
                    "conditionIntValue2": 57,
                    "conditionStringValue": ""
                }],
                "action": 0,
                "actionIntValue": 0
            }],
            "otherCharacterAction": 1,
            "otherCharacterActionIntValue": 0
        }"#,
    )
    .unwrap();

    let result = driver(validator).validate("", "a1b2c3", 0, None);
    assert_eq!(result.text, "123");
    assert_eq!(result.caret, 3);
}

#[test]
fn uppercase_first_character_via_index_rule() {
    // INDEX_EQUALS 0 -> TO_UPPERCASE, fallback TO_LOWERCASE.
    let validator = CharacterValidator::from_json(
        r#"{
            "rules": [{
                "conditions": [{
                    "conditionOperator": 8,
                    "conditionIntValue1": 0,
                    "conditionIntValue2": 0,
                    "conditionStringValue": ""
                }],
                "action": 2,
                "actionIntValue": 0
            }],
            "otherCharacterAction": 3,
            "otherCharacterActionIntValue": 0
        }"#,
    )
    .unwrap();

    let result = driver(validator).validate("", "hELLO", 0, None);
    assert_eq!(result.text, "Hello");
}

#[test]
fn occurrence_cap_via_rule_chain() {
    // Rule 1: 'a' already present twice (OCCURRENCES_GREATER_THAN_OR_EQUALS,
    // threshold in operand 2) -> BLOCK. Rule 2: 'a' -> ALLOW. Fallback BLOCK.
    let validator = CharacterValidator::from_json(
        r#"{
            "rules": [
                {
                    "conditions": [
                        {"conditionOperator": 0, "conditionIntValue1": 97, "conditionIntValue2": 0, "conditionStringValue": ""},
                        {"conditionOperator": 18, "conditionIntValue1": 0, "conditionIntValue2": 2, "conditionStringValue": ""}
                    ],
                    "action": 1,
                    "actionIntValue": 0
                },
                {
                    "conditions": [{"conditionOperator": 0, "conditionIntValue1": 97, "conditionIntValue2": 0, "conditionStringValue": ""}],
                    "action": 0,
                    "actionIntValue": 0
                }
            ],
            "otherCharacterAction": 1,
            "otherCharacterActionIntValue": 0
        }"#,
    )
    .unwrap();

    let result = driver(validator).validate("", "aaaab", 0, None);
    assert_eq!(result.text, "aa");
}

#[test]
fn replace_action_rewrites_matches() {
    // Replace any vowel (VALUE_IN_STRING) with '*' (42).
    let validator = CharacterValidator::from_json(
        r#"{
            "rules": [{
                "conditions": [{
                    "conditionOperator": 7,
                    "conditionIntValue1": 0,
                    "conditionIntValue2": 0,
                    "conditionStringValue": "aeiou"
                }],
                "action": 4,
                "actionIntValue": 42
            }],
            "otherCharacterAction": 0,
            "otherCharacterActionIntValue": 0
        }"#,
    )
    .unwrap();

    let result = driver(validator).validate("", "banana", 0, None);
    assert_eq!(result.text, "b*n*n*");
}

#[test]
fn no_doubled_characters_via_same_as_previous() {
    let validator = CharacterValidator::from_json(
        r#"{
            "rules": [{
                "conditions": [{
                    "conditionOperator": 19,
                    "conditionIntValue1": 0,
                    "conditionIntValue2": 0,
                    "conditionStringValue": ""
                }],
                "action": 1,
                "actionIntValue": 0
            }],
            "otherCharacterAction": 0,
            "otherCharacterActionIntValue": 0
        }"#,
    )
    .unwrap();

    let result = driver(validator).validate("", "aabbcc", 0, None);
    assert_eq!(result.text, "abc");
}

#[test]
fn rule_with_no_conditions_never_fires() {
    // The first rule would block everything if an empty conjunction matched;
    // instead every character falls through to the ALLOW fallback.
    let validator = CharacterValidator::from_json(
        r#"{
            "rules": [{"conditions": [], "action": 1, "actionIntValue": 0}],
            "otherCharacterAction": 0,
            "otherCharacterActionIntValue": 0
        }"#,
    )
    .unwrap();

    let result = driver(validator).validate("", "abc", 0, None);
    assert_eq!(result.text, "abc");
}

#[test]
fn line_breaks_are_stripped_before_custom_rules() {
    // Fallback ALLOW would keep a newline; the line-type strip runs first.
    let validator = CharacterValidator::from_json(
        r#"{
            "rules": [],
            "otherCharacterAction": 0,
            "otherCharacterActionIntValue": 0
        }"#,
    )
    .unwrap();

    let result = driver(validator).validate("", "a\nb", 0, None);
    assert_eq!(result.text, "ab");
}

#[test]
fn round_trip_preserves_rules_exactly() {
    let json = r#"{
        "rules": [
            {
                "conditions": [
                    {"conditionOperator": 5, "conditionIntValue1": 48, "conditionIntValue2": 57, "conditionStringValue": ""},
                    {"conditionOperator": 11, "conditionIntValue1": 3, "conditionIntValue2": 0, "conditionStringValue": ""}
                ],
                "action": 1,
                "actionIntValue": 0
            },
            {
                "conditions": [{"conditionOperator": 7, "conditionIntValue1": 0, "conditionIntValue2": 0, "conditionStringValue": "xyz"}],
                "action": 4,
                "actionIntValue": 95
            }
        ],
        "otherCharacterAction": 2,
        "otherCharacterActionIntValue": 0
    }"#;

    let validator = CharacterValidator::from_json(json).unwrap();
    let reparsed = CharacterValidator::from_json(&validator.to_json().unwrap()).unwrap();
    assert_eq!(reparsed, validator);

    assert_eq!(reparsed.rules.len(), 2);
    assert_eq!(reparsed.rules[0].conditions.len(), 2);
    assert_eq!(reparsed.rules[1].action, CharacterAction::Replace);
    assert_eq!(reparsed.rules[1].action_value, 95);
    assert_eq!(reparsed.other_action, CharacterAction::ToUppercase);
}
