//! Seller-side business configuration.

use serde::{Deserialize, Serialize};

use gstbill_core::{DomainError, DomainResult};
use gstbill_parties::{Gstin, StateCode};

/// The selling business as configured once per installation.
///
/// Deserializable from the JSON settings blob the application keeps. A
/// missing state code falls back to Delhi ("07"), matching the long-standing
/// settings default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerProfile {
    pub legal_name: String,
    #[serde(default = "default_state_code")]
    pub state_code: StateCode,
    #[serde(default)]
    pub gstin: Option<Gstin>,
}

fn default_state_code() -> StateCode {
    StateCode::DELHI
}

impl SellerProfile {
    pub fn new(legal_name: impl Into<String>, state_code: StateCode) -> Self {
        Self {
            legal_name: legal_name.into(),
            state_code,
            gstin: None,
        }
    }

    pub fn with_gstin(mut self, gstin: Gstin) -> DomainResult<Self> {
        if gstin.state_code() != self.state_code {
            return Err(DomainError::invariant(format!(
                "seller GSTIN is registered in state {}, profile says {}",
                gstin.state_code(),
                self.state_code
            )));
        }
        self.gstin = Some(gstin);
        Ok(self)
    }
}
