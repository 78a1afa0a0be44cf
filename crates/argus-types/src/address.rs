use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_ADDRESS_LEN: usize = 26;
pub const MAX_ADDRESS_LEN: usize = 60;

/// Why a candidate address was rejected. Rules are applied in declaration order of
/// [`validate`], first failure wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, thiserror::Error)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationError {
    #[error("address is empty")]
    Empty,
    #[error("address contains whitespace or non-alphanumeric characters")]
    MalformedCharacters,
    #[error("address length must be between 26 and 60 characters")]
    LengthOutOfRange,
}

impl ValidationError {
    /// Stable rule code, see [`crate::ids`].
    pub fn code(self) -> &'static str {
        match self {
            ValidationError::Empty => crate::ids::RULE_EMPTY,
            ValidationError::MalformedCharacters => crate::ids::RULE_MALFORMED_CHARACTERS,
            ValidationError::LengthOutOfRange => crate::ids::RULE_LENGTH_OUT_OF_RANGE,
        }
    }
}

/// A wallet or issuer address that passed [`validate`].
///
/// Case is preserved and no chain-specific checksum is verified: the shape check is a
/// deliberate simplification, not a format guarantee.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Identifier {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate(&value)
    }
}

impl From<Identifier> for String {
    fn from(value: Identifier) -> Self {
        value.0
    }
}

/// Validate a raw candidate address.
///
/// 1. empty or whitespace-only -> `Empty`
/// 2. any whitespace anywhere -> `MalformedCharacters`
/// 3. length outside `[26, 60]` -> `LengthOutOfRange`
/// 4. anything outside `[A-Za-z0-9]` -> `MalformedCharacters`
pub fn validate(raw: &str) -> Result<Identifier, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::Empty);
    }
    if raw.chars().any(char::is_whitespace) {
        return Err(ValidationError::MalformedCharacters);
    }

    let trimmed = raw.trim();
    let len = trimmed.chars().count();
    if !(MIN_ADDRESS_LEN..=MAX_ADDRESS_LEN).contains(&len) {
        return Err(ValidationError::LengthOutOfRange);
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::MalformedCharacters);
    }

    Ok(Identifier(trimmed.to_string()))
}
