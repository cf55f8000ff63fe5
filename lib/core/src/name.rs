use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use crate::error::{Result, ValidationError};

/// Shared rule for every user supplied name: not blank, at most `max` characters.
pub(crate) fn validate_name(value: &str, field: &'static str, max: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field }.into());
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max }.into());
    }
    Ok(())
}

/// Name of a stored graph. Compared and hashed case-insensitively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GraphName {
    value: String,
    key: String,
}

impl GraphName {
    pub const NAME_MAX_LENGTH: usize = 255;

    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        validate_name(&value, "Graph name", Self::NAME_MAX_LENGTH)?;
        let key = value.to_lowercase();
        Ok(Self { value, key })
    }

    /// The name as it was given.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Lower-cased form, used as the storage key.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for GraphName {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for GraphName {}

impl Hash for GraphName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for GraphName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl TryFrom<String> for GraphName {
    type Error = crate::Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<GraphName> for String {
    fn from(name: GraphName) -> Self {
        name.value
    }
}
