//! Atomic predicates for custom validation rules.

use serde::{Deserialize, Serialize};

use crate::error::OrdinalError;
use crate::validate::CharContext;

/// Comparison applied by a single [`Condition`].
///
/// Ordinals are part of the configuration wire format and must not be
/// reordered. `Value*` operators compare the candidate's code point, `Index*`
/// operators compare the insertion position, and `Occurrences*` operators
/// compare how often the candidate already appears in the accepted output
/// (against operand 2).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ConditionOperator {
    ValueEquals,
    ValueSmallerThan,
    ValueSmallerThanOrEquals,
    ValueGreaterThan,
    ValueGreaterThanOrEquals,
    ValueBetweenInclusive,
    ValueBetweenExclusive,
    /// Candidate occurs in the string operand.
    ValueInString,
    IndexEquals,
    IndexSmallerThan,
    IndexSmallerThanOrEquals,
    IndexGreaterThan,
    IndexGreaterThanOrEquals,
    IndexBetweenInclusive,
    IndexBetweenExclusive,
    OccurrencesSmallerThan,
    OccurrencesSmallerThanOrEquals,
    OccurrencesGreaterThan,
    OccurrencesGreaterThanOrEquals,
    /// Candidate equals the accepted character immediately before the
    /// insertion position. False at position 0.
    ValueSameAsPrevious,
}

impl TryFrom<u8> for ConditionOperator {
    type Error = OrdinalError;

    fn try_from(value: u8) -> Result<Self, OrdinalError> {
        Ok(match value {
            0 => Self::ValueEquals,
            1 => Self::ValueSmallerThan,
            2 => Self::ValueSmallerThanOrEquals,
            3 => Self::ValueGreaterThan,
            4 => Self::ValueGreaterThanOrEquals,
            5 => Self::ValueBetweenInclusive,
            6 => Self::ValueBetweenExclusive,
            7 => Self::ValueInString,
            8 => Self::IndexEquals,
            9 => Self::IndexSmallerThan,
            10 => Self::IndexSmallerThanOrEquals,
            11 => Self::IndexGreaterThan,
            12 => Self::IndexGreaterThanOrEquals,
            13 => Self::IndexBetweenInclusive,
            14 => Self::IndexBetweenExclusive,
            15 => Self::OccurrencesSmallerThan,
            16 => Self::OccurrencesSmallerThanOrEquals,
            17 => Self::OccurrencesGreaterThan,
            18 => Self::OccurrencesGreaterThanOrEquals,
            19 => Self::ValueSameAsPrevious,
            _ => {
                return Err(OrdinalError {
                    name: "ConditionOperator",
                    value,
                });
            }
        })
    }
}

impl From<ConditionOperator> for u8 {
    fn from(operator: ConditionOperator) -> Self {
        match operator {
            ConditionOperator::ValueEquals => 0,
            ConditionOperator::ValueSmallerThan => 1,
            ConditionOperator::ValueSmallerThanOrEquals => 2,
            ConditionOperator::ValueGreaterThan => 3,
            ConditionOperator::ValueGreaterThanOrEquals => 4,
            ConditionOperator::ValueBetweenInclusive => 5,
            ConditionOperator::ValueBetweenExclusive => 6,
            ConditionOperator::ValueInString => 7,
            ConditionOperator::IndexEquals => 8,
            ConditionOperator::IndexSmallerThan => 9,
            ConditionOperator::IndexSmallerThanOrEquals => 10,
            ConditionOperator::IndexGreaterThan => 11,
            ConditionOperator::IndexGreaterThanOrEquals => 12,
            ConditionOperator::IndexBetweenInclusive => 13,
            ConditionOperator::IndexBetweenExclusive => 14,
            ConditionOperator::OccurrencesSmallerThan => 15,
            ConditionOperator::OccurrencesSmallerThanOrEquals => 16,
            ConditionOperator::OccurrencesGreaterThan => 17,
            ConditionOperator::OccurrencesGreaterThanOrEquals => 18,
            ConditionOperator::ValueSameAsPrevious => 19,
        }
    }
}

/// One atomic predicate of a custom validation rule.
///
/// Immutable once parsed. Evaluation is pure and total: it never fails, a
/// malformed operator/operand combination simply evaluates to false.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Comparison to apply.
    #[serde(rename = "conditionOperator")]
    pub operator: ConditionOperator,
    /// First integer operand: a character code, index, or lower range bound.
    #[serde(rename = "conditionIntValue1")]
    pub int_value1: i32,
    /// Second integer operand: upper range bound or occurrence threshold.
    #[serde(rename = "conditionIntValue2")]
    pub int_value2: i32,
    /// String operand, used only by [`ConditionOperator::ValueInString`].
    #[serde(rename = "conditionStringValue")]
    pub string_value: String,
}

impl Condition {
    /// Evaluate this condition against a candidate character.
    #[must_use]
    pub fn is_met(&self, ch: char, ctx: &CharContext<'_>) -> bool {
        let code = i64::from(u32::from(ch));
        let pos = ctx.pos as i64;
        let v1 = i64::from(self.int_value1);
        let v2 = i64::from(self.int_value2);

        match self.operator {
            ConditionOperator::ValueEquals => code == v1,
            ConditionOperator::ValueSmallerThan => code < v1,
            ConditionOperator::ValueSmallerThanOrEquals => code <= v1,
            ConditionOperator::ValueGreaterThan => code > v1,
            ConditionOperator::ValueGreaterThanOrEquals => code >= v1,
            ConditionOperator::ValueBetweenInclusive => code >= v1 && code <= v2,
            ConditionOperator::ValueBetweenExclusive => code > v1 && code < v2,
            ConditionOperator::ValueInString => self.string_value.contains(ch),
            ConditionOperator::IndexEquals => pos == v1,
            ConditionOperator::IndexSmallerThan => pos < v1,
            ConditionOperator::IndexSmallerThanOrEquals => pos <= v1,
            ConditionOperator::IndexGreaterThan => pos > v1,
            ConditionOperator::IndexGreaterThanOrEquals => pos >= v1,
            ConditionOperator::IndexBetweenInclusive => pos >= v1 && pos <= v2,
            ConditionOperator::IndexBetweenExclusive => pos > v1 && pos < v2,
            ConditionOperator::OccurrencesSmallerThan => (ctx.occurrences(ch) as i64) < v2,
            ConditionOperator::OccurrencesSmallerThanOrEquals => (ctx.occurrences(ch) as i64) <= v2,
            ConditionOperator::OccurrencesGreaterThan => (ctx.occurrences(ch) as i64) > v2,
            ConditionOperator::OccurrencesGreaterThanOrEquals => (ctx.occurrences(ch) as i64) >= v2,
            ConditionOperator::ValueSameAsPrevious => ctx.pos > 0 && ctx.prev() == Some(ch),
        }
    }
}
