use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Which record shape a lookup asks the API for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    #[default]
    Domain,
    Contact,
}

impl LookupMode {
    /// Value of the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            LookupMode::Domain => "domain",
            LookupMode::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LookupMode::Domain => "Domain Information",
            LookupMode::Contact => "Contact Information",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            LookupMode::Domain => LookupMode::Contact,
            LookupMode::Contact => LookupMode::Domain,
        }
    }
}

impl fmt::Display for LookupMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LookupMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "domain" => Ok(LookupMode::Domain),
            "contact" => Ok(LookupMode::Contact),
            other => Err(format!("unknown lookup type: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    #[serde(default)]
    pub domain_name: Option<String>,
    #[serde(default)]
    pub registrar: Option<String>,
    #[serde(default)]
    pub registration_date: Option<String>,
    #[serde(default)]
    pub expiration_date: Option<String>,
    #[serde(default, rename = "estimatedDomainAge", alias = "estimatedAge")]
    pub estimated_age: Option<String>,
    #[serde(default)]
    pub hostnames: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    #[serde(default)]
    pub registrant_name: Option<String>,
    #[serde(default)]
    pub technical_contact_name: Option<String>,
    #[serde(default)]
    pub administrative_contact_name: Option<String>,
    #[serde(default)]
    pub contact_email: Option<String>,
}

/// Snapshot of everything the presentation layer reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupState {
    pub is_loading: bool,
    pub domain_record: Option<DomainRecord>,
    pub contact_record: Option<ContactRecord>,
    pub error: Option<String>,
}

impl LookupState {
    pub fn has_results(&self) -> bool {
        self.domain_record.is_some() || self.contact_record.is_some()
    }
}

/// One entry of the server-side lookup history.
///
/// `type` is whatever query value the server was sent; it is not validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub domain: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub result: serde_json::Value,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub api_base: String,
    /// `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: None,
        }
    }
}
