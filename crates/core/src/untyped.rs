//! Bid arguments from dynamically typed callers.
//!
//! Bindings classify each argument by its runtime type and hand it over as
//! an [`UntypedArg`]; [`UntypedArg::into_value`] turns that into the JSON
//! form checked by [`Auction::bid_value`](crate::Auction::bid_value).

use crate::types::Amount;
use serde_json::{Number, Value};

/// A bid argument whose type is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum UntypedArg {
    /// A string.
    Str(String),
    /// An integer (booleans included). `approx` is `None` when the value is
    /// too large in magnitude for an `f64`.
    Int { approx: Option<Amount>, negative: bool },
    /// A float, possibly NaN or infinite.
    Float(Amount),
    /// Anything else.
    Other,
}

impl UntypedArg {
    /// Integers out of `f64` range saturate to the largest finite amount of
    /// the same sign. Non-finite floats become `Null`, which fails the
    /// amount type check.
    pub fn into_value(self) -> Value {
        match self {
            UntypedArg::Str(s) => Value::String(s),
            UntypedArg::Int { approx, negative } => {
                let amount = approx.unwrap_or(if negative { Amount::MIN } else { Amount::MAX });
                number_or_null(amount)
            }
            UntypedArg::Float(amount) => number_or_null(amount),
            UntypedArg::Other => Value::Null,
        }
    }
}

impl From<bool> for UntypedArg {
    fn from(b: bool) -> Self {
        UntypedArg::Int {
            approx: Some(if b { 1.0 } else { 0.0 }),
            negative: false,
        }
    }
}

fn number_or_null(amount: Amount) -> Value {
    Number::from_f64(amount).map_or(Value::Null, Value::Number)
}
