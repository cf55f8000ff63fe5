use serde::{Deserialize, Serialize};
use std::fmt;
use crate::error::{Result, ValidationError};
use crate::record::WeightRecord;

/// Cost of traversing an edge, bounded to `[Weight::MIN, Weight::MAX]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "WeightRecord", into = "WeightRecord")]
pub struct Weight(u32);

impl Weight {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 1000;

    pub fn new(value: i64) -> Result<Self> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "Weight",
                value,
                min: Self::MIN,
                max: Self::MAX,
            }
            .into());
        }
        // the range check keeps this within u32
        Ok(Self(value as u32))
    }

    #[inline]
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Weight> for u64 {
    fn from(weight: Weight) -> Self {
        u64::from(weight.0)
    }
}

impl TryFrom<WeightRecord> for Weight {
    type Error = crate::Error;

    fn try_from(record: WeightRecord) -> Result<Self> {
        Self::new(record.value)
    }
}

impl From<Weight> for WeightRecord {
    fn from(weight: Weight) -> Self {
        WeightRecord { value: i64::from(weight.0) }
    }
}
