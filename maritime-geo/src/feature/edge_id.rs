use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{feature::EDGE_ID_PROPERTY, GeoConversionError};

/// caller-assigned identifier of a route edge. stored in an `integer` column,
/// so it must be a positive 32-bit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EdgeId(pub i32);

impl EdgeId {
    pub fn as_i32(&self) -> i32 {
        self.0
    }
}

impl Display for EdgeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for EdgeId {
    type Error = GeoConversionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 1 || value > i32::MAX as i64 {
            return Err(GeoConversionError::ValueError(
                String::from(EDGE_ID_PROPERTY),
                format!("{value} is not a positive 32-bit integer"),
            ));
        }
        Ok(EdgeId(value as i32))
    }
}

impl FromStr for EdgeId {
    type Err = GeoConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<i64>().map_err(|e| {
            GeoConversionError::ValueError(
                String::from(EDGE_ID_PROPERTY),
                format!("'{s}' is not an integer: {e}"),
            )
        })?;
        EdgeId::try_from(value)
    }
}

/// accepts a JSON integer, a JSON float (truncated toward zero) or a string
/// holding a base-10 integer.
impl TryFrom<&Value> for EdgeId {
    type Error = GeoConversionError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    EdgeId::try_from(i)
                } else {
                    match n.as_f64() {
                        Some(f) if f.is_finite() && f.trunc().abs() <= i64::MAX as f64 => {
                            EdgeId::try_from(f.trunc() as i64)
                        }
                        _ => Err(GeoConversionError::ValueError(
                            String::from(EDGE_ID_PROPERTY),
                            format!("{n} is out of integer range"),
                        )),
                    }
                }
            }
            Value::String(s) => s.parse(),
            other => Err(GeoConversionError::ValueError(
                String::from(EDGE_ID_PROPERTY),
                format!("expected integer, found {other}"),
            )),
        }
    }
}
