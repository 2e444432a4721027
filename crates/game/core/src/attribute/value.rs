//! Tagged numeric attribute values.

use core::fmt;

/// Numeric value of an attribute.
///
/// Integer-based attributes keep integer arithmetic (growth is truncated),
/// float-based attributes use exact floating arithmetic. The kind of a value
/// is fixed by the definition's `base_value`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AttributeValue {
    Int(i64),
    Float(f64),
}

/// Numeric kind of an [`AttributeValue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
pub enum ValueKind {
    Int,
    Float,
}

impl AttributeValue {
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
        }
    }

    /// Lossy view used by presentation and battle setup.
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// Adds `delta` when both values share a kind.
    ///
    /// Returns `None` for mixed kinds; the caller decides whether that is an
    /// overwrite or a rejection.
    pub fn checked_add(self, delta: AttributeValue) -> Option<AttributeValue> {
        match (self, delta) {
            (Self::Int(a), Self::Int(b)) => Some(Self::Int(a.saturating_add(b))),
            (Self::Float(a), Self::Float(b)) => Some(Self::Float(a + b)),
            _ => None,
        }
    }

    /// Applies `levels * growth_rate` on top of this base value.
    ///
    /// Integer bases truncate the growth term toward zero.
    pub fn grown(self, levels: u32, growth_rate: f64) -> AttributeValue {
        let growth = f64::from(levels) * growth_rate;
        match self {
            Self::Int(base) => Self::Int(base.saturating_add(growth.trunc() as i64)),
            Self::Float(base) => Self::Float(base + growth),
        }
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}
