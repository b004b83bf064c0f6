//! Fuzz target for the validation driver.
//!
//! Tests that a validation pass handles arbitrary text, insertions, carets
//! and selections without panicking, for every mode and line type. The
//! engine's contract is that malformed input text is classified (worst case
//! rejected), never a crash.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use oskbridge::{LineType, TextValidator, ValidationMode};

#[derive(Arbitrary, Debug)]
struct Input {
    mode: u8,
    line_type: u8,
    text: String,
    insertion: String,
    caret: usize,
    selection_start: Option<usize>,
}

fuzz_target!(|input: Input| {
    // Out-of-range ordinals are the config layer's problem; here we map into
    // range to exercise every mode.
    let mode = ValidationMode::try_from(input.mode % 10).expect("mode ordinal in range");
    let line_type = LineType::try_from(input.line_type % 3).expect("line type ordinal in range");

    let validator = TextValidator::new(mode, line_type);
    let result = validator.validate(
        &input.text,
        &input.insertion,
        input.caret,
        input.selection_start,
    );

    // The caret always lands inside the result.
    assert!(result.caret <= result.text.chars().count());

    // A full revalidation (everything streamed through the mode) reaches a
    // fixed point: running it twice changes nothing. The pass above is not
    // necessarily one — the pre-caret prefix is taken as-is.
    let full = validator.validate("", &result.text, 0, None);
    let again = validator.validate("", &full.text, 0, None);
    assert_eq!(again.text, full.text);
});
