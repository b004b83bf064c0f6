//! Wire-format coverage for configuration documents: ordinal mappings,
//! exact round-trips, and loud failures on malformed input.

use oskbridge::{
    AutofillType, CharacterValidator, Error, KeyboardConfig, KeyboardType, LineType,
    ReturnKeyType, ValidationMode,
};

const FULL_DOCUMENT: &str = r#"{
    "keyboardType": 4,
    "characterValidation": 1,
    "lineType": 0,
    "autocapitalizationType": 0,
    "autofillType": 17,
    "returnKeyType": 1,
    "autocorrection": false,
    "secure": false,
    "richTextEditing": false,
    "emojisAllowed": false,
    "hasNext": true,
    "characterLimit": 10,
    "characterValidatorJSON": ""
}"#;

#[test]
fn parses_ordinals_in_declaration_order() {
    let config = KeyboardConfig::from_json(FULL_DOCUMENT).unwrap();
    assert_eq!(config.keyboard_type, KeyboardType::NumberPad);
    assert_eq!(config.character_validation, ValidationMode::Integer);
    assert_eq!(config.line_type, LineType::SingleLine);
    assert_eq!(config.autofill_type, AutofillType::PostalCode);
    assert_eq!(config.return_key_type, ReturnKeyType::Go);
    assert_eq!(config.character_limit, 10);
}

#[test]
fn serializes_back_to_the_wire_shape() {
    let config = KeyboardConfig::from_json(FULL_DOCUMENT).unwrap();
    insta::assert_json_snapshot!(config, @r###"
    {
      "keyboardType": 4,
      "characterValidation": 1,
      "lineType": 0,
      "autocapitalizationType": 0,
      "autofillType": 17,
      "returnKeyType": 1,
      "autocorrection": false,
      "secure": false,
      "richTextEditing": false,
      "emojisAllowed": false,
      "hasNext": true,
      "characterLimit": 10,
      "characterValidatorJSON": ""
    }
    "###);
}

#[test]
fn nested_validator_string_round_trips_exactly() {
    let nested =
        r#"{"rules":[{"conditions":[{"conditionOperator":0,"conditionIntValue1":120,"conditionIntValue2":0,"conditionStringValue":""}],"action":1,"actionIntValue":0}],"otherCharacterAction":0,"otherCharacterActionIntValue":0}"#;
    let document = FULL_DOCUMENT.replace(
        "\"characterValidatorJSON\": \"\"",
        &format!(
            "\"characterValidatorJSON\": {}",
            serde_json::to_string(nested).unwrap()
        ),
    );

    let config = KeyboardConfig::from_json(&document).unwrap();
    assert_eq!(config.character_validator_json(), nested);
    assert_eq!(config.custom_validator().unwrap().rules.len(), 1);

    // Outer round-trip preserves the raw nested string byte for byte.
    let reparsed = KeyboardConfig::from_json(&config.to_json().unwrap()).unwrap();
    assert_eq!(reparsed.character_validator_json(), nested);
    assert_eq!(reparsed, config);
}

#[test]
fn custom_validator_round_trip_preserves_operands() {
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

    insta::assert_json_snapshot!(validator, @r###"
    {
      "rules": [
        {
          "conditions": [
            {
              "conditionOperator": 0,
              "conditionIntValue1": 120,
              "conditionIntValue2": 0,
              "conditionStringValue": ""
            }
          ],
          "action": 1,
          "actionIntValue": 0
        }
      ],
      "otherCharacterAction": 0,
      "otherCharacterActionIntValue": 0
    }
    "###);
}

#[test]
fn out_of_range_ordinals_fail_loudly() {
    for (field, bad) in [
        ("\"keyboardType\": 4", "\"keyboardType\": 8"),
        ("\"characterValidation\": 1", "\"characterValidation\": 10"),
        ("\"lineType\": 0", "\"lineType\": 3"),
        ("\"autocapitalizationType\": 0", "\"autocapitalizationType\": 4"),
        ("\"autofillType\": 17", "\"autofillType\": 19"),
        ("\"returnKeyType\": 1", "\"returnKeyType\": 4"),
    ] {
        let document = FULL_DOCUMENT.replace(field, bad);
        let err = KeyboardConfig::from_json(&document).unwrap_err();
        assert!(matches!(err, Error::Config(_)), "field {field} should fail");
    }
}

#[test]
fn missing_fields_fail_loudly() {
    let document = FULL_DOCUMENT.replace("\"secure\": false,", "");
    assert!(matches!(
        KeyboardConfig::from_json(&document),
        Err(Error::Config(_))
    ));
}

#[test]
fn negative_character_limit_is_rejected() {
    let document = FULL_DOCUMENT.replace("\"characterLimit\": 10", "\"characterLimit\": -1");
    assert!(matches!(
        KeyboardConfig::from_json(&document),
        Err(Error::Config(_))
    ));
}

#[test]
fn malformed_nested_document_is_a_distinct_error() {
    let document = FULL_DOCUMENT.replace(
        "\"characterValidatorJSON\": \"\"",
        "\"characterValidatorJSON\": \"{\\\"rules\\\":\"",
    );
    assert!(matches!(
        KeyboardConfig::from_json(&document),
        Err(Error::CustomValidator(_))
    ));
}
