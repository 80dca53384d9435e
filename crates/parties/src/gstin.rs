//! GSTIN value object and registration state code.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use gstbill_core::{DomainError, DomainResult};

/// Two-digit GST registration state code (e.g. "07" for Delhi).
///
/// The seller side is always constructed through the checked parser. Buyer
/// identifiers are read as raw prefixes by transaction classification and
/// never pass through here; see `gstbill-tax`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StateCode([u8; 2]);

impl StateCode {
    /// Delhi ("07"), the historical fallback registration state when a
    /// business profile carries none.
    pub const DELHI: StateCode = StateCode(*b"07");

    pub fn parse(s: &str) -> DomainResult<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
            return Err(DomainError::validation(format!(
                "state code must be two digits, got {s:?}"
            )));
        }
        Ok(Self([bytes[0], bytes[1]]))
    }

    pub fn as_str(&self) -> &str {
        // Constructor guarantees ASCII digits.
        core::str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StateCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StateCode> for String {
    fn from(value: StateCode) -> Self {
        value.as_str().to_owned()
    }
}

/// Validated 15-character GSTIN.
///
/// Format (the upstream validation layer's rule): two state digits, five
/// uppercase letters, four digits, one uppercase letter, one entity code in
/// `[1-9A-Z]`, a literal `Z`, and one checksum character in `[0-9A-Z]`.
/// The checksum character is shape-checked only; checksum verification is a
/// registry concern, not a format concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Gstin(String);

impl Gstin {
    pub fn parse(s: &str) -> DomainResult<Self> {
        let b = s.as_bytes();
        let well_formed = b.len() == 15
            && b[0..2].iter().all(u8::is_ascii_digit)
            && b[2..7].iter().all(u8::is_ascii_uppercase)
            && b[7..11].iter().all(u8::is_ascii_digit)
            && b[11].is_ascii_uppercase()
            && (b[12].is_ascii_uppercase() || (b'1'..=b'9').contains(&b[12]))
            && b[13] == b'Z'
            && (b[14].is_ascii_uppercase() || b[14].is_ascii_digit());
        if !well_formed {
            return Err(DomainError::validation(format!(
                "malformed GSTIN {s:?}"
            )));
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Registration state: the first two digits of the GSTIN.
    pub fn state_code(&self) -> StateCode {
        let b = self.0.as_bytes();
        StateCode([b[0], b[1]])
    }
}

impl fmt::Display for Gstin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Gstin {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Gstin {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Gstin> for String {
    fn from(value: Gstin) -> Self {
        value.0
    }
}
