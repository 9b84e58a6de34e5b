//! End-to-end scenarios driving the full engine: nested objects, wildcard
//! sequences, callback constraints and discriminator variants.

use serde_json::{json, Map, Value};
use treeval_engine::{RuleError, Validator};

fn person_rules() -> Map<String, Value> {
    json!({
        "name": {
            "name": "Name",
            "required": true,
            "type": "string",
            "constraints": {
                "length": [1, null],
                "callback": "two_words"
            }
        },
        "age": {
            "name": "Age",
            "required": false,
            "type": "number",
            "constraints": { "integer": true }
        },
        "address": {
            "name": "Address",
            "required": false,
            "type": "object",
            "properties": {
                "line1": {
                    "required": true,
                    "type": "string",
                    "constraints": { "length": [1, null] }
                },
                "line2": {
                    "required": false,
                    "type": "string"
                },
                "postCode": {
                    "required": true,
                    "type": "string",
                    "constraints": { "length": [3, 12] }
                }
            }
        },
        "nickNames": {
            "name": "Nick Names",
            "required": false,
            "type": "array",
            "items": {
                "*": {
                    "type": "string",
                    "constraints": { "length": [1, null] }
                }
            }
        }
    })
    .as_object()
    .cloned()
    .expect("rules fixture is an object")
}

fn person_validator() -> Validator {
    let mut validator = Validator::new();
    validator.register_callback("two_words", |value, _label| {
        let words = value.as_str().map_or(0, |text| text.split_whitespace().count());
        if words == 2 {
            Ok(())
        } else {
            Err("This value must have two words".to_string())
        }
    });
    validator
}

fn assert_report(validator: &Validator, expected: Value) {
    let report = serde_json::to_value(validator.errors()).unwrap();
    assert_eq!(report, expected);
}

#[test]
fn person_scenarios() {
    let rules = person_rules();
    let cases: Vec<(Value, bool, Value)> = vec![
        (json!({}), false, json!({ "name": ["Name is required"] })),
        (
            json!({ "name": null }),
            false,
            json!({ "name": ["Name must be a string"] }),
        ),
        (
            json!({ "name": 1 }),
            false,
            json!({ "name": ["Name must be a string"] }),
        ),
        (
            json!({ "name": "" }),
            false,
            json!({ "name": ["Name must have a length of at least 1"] }),
        ),
        (
            json!({ "name": "Ken" }),
            false,
            json!({ "name": ["This value must have two words"] }),
        ),
        (json!({ "name": "Ken Lalobo" }), true, json!({})),
        (
            json!({ "name": "Ken Lalobo", "age": "test" }),
            false,
            json!({ "age": ["Age must be a number"] }),
        ),
        (
            json!({ "name": "Ken Lalobo", "age": 0.1 }),
            false,
            json!({ "age": ["Age must be an integer"] }),
        ),
        (json!({ "name": "Ken Lalobo", "age": 102 }), true, json!({})),
        (
            json!({ "name": "Ken Lalobo", "age": 102, "address": null }),
            false,
            json!({ "address": ["Address must be an object"] }),
        ),
        (
            json!({ "name": "Ken Lalobo", "age": 102, "address": {} }),
            false,
            json!({
                "address.line1": ["This value is required"],
                "address.postCode": ["This value is required"]
            }),
        ),
        (
            json!({
                "name": "Ken Lalobo",
                "age": 102,
                "address": {
                    "line1": "test",
                    "postCode": "This is a really long postcode"
                }
            }),
            false,
            json!({
                "address.postCode": ["This value must have a length of at most 12"]
            }),
        ),
        (
            json!({
                "name": "Ken Lalobo",
                "age": 102,
                "address": { "line1": "test", "postCode": "BR12 2NN" }
            }),
            true,
            json!({}),
        ),
        (
            json!({
                "name": "Ken Lalobo",
                "age": 102,
                "address": { "line1": "test", "line2": 1, "postCode": "BR12 2NN" }
            }),
            false,
            json!({ "address.line2": ["This value must be a string"] }),
        ),
        (
            json!({ "name": "Ken Lalobo", "nickNames": ["Kenny", "K-man"] }),
            true,
            json!({}),
        ),
        (
            json!({ "name": "Ken Lalobo", "nickNames": [] }),
            true,
            json!({}),
        ),
        (
            json!({ "name": "Ken Lalobo", "nickNames": "Kenny" }),
            false,
            json!({ "nickNames": ["Nick Names must be a sequential array"] }),
        ),
    ];

    for (data, valid, report) in cases {
        let mut validator = person_validator();
        let verdict = validator.is_valid(&rules, &data).unwrap();
        assert_eq!(verdict, valid, "verdict mismatch for {data}");
        assert_report(&validator, report);
    }
}

#[test]
fn wildcard_failure_is_fail_fast_within_the_sequence() {
    let rules = person_rules();
    let mut validator = person_validator();

    // Element 0 would also fail the length constraint, but the type failure
    // at element 1 must be the only reported one if it came first — here the
    // first failure is the empty string at index 1.
    let data = json!({ "name": "Ken Lalobo", "nickNames": ["Kenny", 1, ""] });
    assert!(!validator.is_valid(&rules, &data).unwrap());
    assert_report(
        &validator,
        json!({ "nickNames.*": ["Item[1]: This value must be a string"] }),
    );
}

#[test]
fn wildcard_reports_the_first_failing_index_only() {
    let rules = json!({
        "*": {
            "type": "string",
            "constraints": { "length": [2, null] }
        }
    })
    .as_object()
    .cloned()
    .unwrap();

    let mut validator = Validator::new();
    assert!(!validator.is_valid(&rules, &json!(["ok", "x", "y"])).unwrap());
    assert_report(
        &validator,
        json!({ "*": ["Item[1]: This value must have a length of at least 2"] }),
    );
}

#[test]
fn repeated_calls_are_deterministic() {
    let rules = person_rules();
    let data = json!({ "name": "Ken", "age": 0.5 });

    let mut validator = person_validator();
    let first = validator.is_valid(&rules, &data).unwrap();
    let first_report = serde_json::to_value(validator.errors()).unwrap();

    let second = validator.is_valid(&rules, &data).unwrap();
    let second_report = serde_json::to_value(validator.errors()).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_report, second_report);
}

fn animal_rules() -> Map<String, Value> {
    json!({
        "animal": {
            "name": "Animal",
            "required": true,
            "type": "object",
            "properties": {
                "type": {
                    "required": true,
                    "type": "string",
                    "constraints": { "enum": ["cat", "dog", "mouse"] }
                },
                "age": {
                    "required": true,
                    "type": "number",
                    "constraints": { "integer": true }
                }
            },
            "inheritance": {
                "discriminator": "type",
                "properties": {
                    "cat": {
                        "miceCaught": {
                            "required": true,
                            "type": "number",
                            "constraints": { "integer": true }
                        }
                    },
                    "dog": {
                        "carsChased": {
                            "required": true,
                            "type": "number",
                            "constraints": { "integer": true }
                        },
                        "collar": {
                            "required": true,
                            "type": "object",
                            "properties": {
                                "colour": { "required": true, "type": "string" }
                            }
                        }
                    },
                    "mouse": {}
                }
            }
        }
    })
    .as_object()
    .cloned()
    .expect("rules fixture is an object")
}

#[test]
fn variant_scenarios() {
    let rules = animal_rules();
    let cases: Vec<(Value, bool, Value)> = vec![
        (json!({}), false, json!({ "animal": ["Animal is required"] })),
        (
            json!({ "animal": {} }),
            false,
            json!({
                "animal.type": ["This value is required"],
                "animal.age": ["This value is required"]
            }),
        ),
        (
            // The enum on the base property fails, so variants are never
            // consulted and only one error appears.
            json!({ "animal": { "type": "aardvark", "age": 2 } }),
            false,
            json!({
                "animal.type": [
                    "aardvark is not an allowed value for This value. Allowed values are: cat, dog, mouse"
                ]
            }),
        ),
        (
            json!({ "animal": { "type": "cat", "age": 2 } }),
            false,
            json!({ "animal.miceCaught": ["This value is required"] }),
        ),
        (
            json!({ "animal": { "type": "cat", "age": 2, "miceCaught": 3 } }),
            true,
            json!({}),
        ),
        (
            json!({ "animal": { "type": "dog", "age": 3 } }),
            false,
            json!({
                "animal.carsChased": ["This value is required"],
                "animal.collar": ["This value is required"]
            }),
        ),
        (
            json!({
                "animal": { "type": "dog", "age": 3, "carsChased": 3, "collar": {} }
            }),
            false,
            json!({ "animal.collar.colour": ["This value is required"] }),
        ),
        (
            json!({
                "animal": {
                    "type": "dog",
                    "age": 3,
                    "carsChased": 3,
                    "collar": { "colour": "red" }
                }
            }),
            true,
            json!({}),
        ),
        (
            json!({ "animal": { "type": "mouse", "age": 1 } }),
            true,
            json!({}),
        ),
    ];

    for (data, valid, report) in cases {
        let mut validator = Validator::new();
        let verdict = validator.is_valid(&rules, &data).unwrap();
        assert_eq!(verdict, valid, "verdict mismatch for {data}");
        assert_report(&validator, report);
    }
}

#[test]
fn unmatched_discriminator_names_the_allowed_values() {
    // Without an enum on the discriminator property, the variant lookup
    // itself must reject unknown values.
    let rules = json!({
        "animal": {
            "name": "Animal",
            "required": true,
            "type": "object",
            "properties": {
                "type": { "required": true, "type": "string" }
            },
            "inheritance": {
                "discriminator": "type",
                "properties": {
                    "cat": {},
                    "dog": {}
                }
            }
        }
    })
    .as_object()
    .cloned()
    .unwrap();

    let mut validator = Validator::new();
    let data = json!({ "animal": { "type": "fish" } });
    assert!(!validator.is_valid(&rules, &data).unwrap());
    assert_report(
        &validator,
        json!({
            "animal": [
                "fish is not an allowed discriminator value for Animal. Allowed values are: cat, dog"
            ]
        }),
    );
}

#[test]
fn absent_discriminator_skips_variants() {
    let rules = json!({
        "animal": {
            "required": true,
            "type": "object",
            "properties": {
                "type": { "required": false, "type": "string" }
            },
            "inheritance": {
                "discriminator": "type",
                "properties": { "cat": {} }
            }
        }
    })
    .as_object()
    .cloned()
    .unwrap();

    let mut validator = Validator::new();
    assert!(validator.is_valid(&rules, &json!({ "animal": {} })).unwrap());
}

#[test]
fn malformed_constraints_abort_the_call() {
    let mut validator = Validator::new();

    let one_member_length = json!({
        "name": {
            "type": "string",
            "required": true,
            "constraints": { "length": [1] }
        }
    })
    .as_object()
    .cloned()
    .unwrap();
    assert!(matches!(
        validator.is_valid(&one_member_length, &json!({ "name": "x" })),
        Err(RuleError::BadConstraint { .. })
    ));

    let empty_enum = json!({
        "name": {
            "type": "string",
            "required": true,
            "constraints": { "enum": [] }
        }
    })
    .as_object()
    .cloned()
    .unwrap();
    assert!(matches!(
        validator.is_valid(&empty_enum, &json!({ "name": "x" })),
        Err(RuleError::BadConstraint { .. })
    ));

    let broken_regex = json!({
        "name": {
            "type": "string",
            "required": true,
            "constraints": { "regex": "([oops" }
        }
    })
    .as_object()
    .cloned()
    .unwrap();
    assert!(matches!(
        validator.is_valid(&broken_regex, &json!({ "name": "x" })),
        Err(RuleError::BadPattern { .. })
    ));
}
