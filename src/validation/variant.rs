//! Form variants: which inputs the form shows and which rules apply

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormVariant {
    /// Name and e-mail, any domain
    Basic,
    /// Name, domain-restricted e-mail and password
    Credentials,
    /// Everything in `Credentials` plus the technology list
    #[default]
    Full,
}

impl FormVariant {
    pub fn has_password(&self) -> bool {
        matches!(self, Self::Credentials | Self::Full)
    }

    pub fn restricts_domain(&self) -> bool {
        matches!(self, Self::Credentials | Self::Full)
    }

    pub fn has_techs(&self) -> bool {
        matches!(self, Self::Full)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Credentials => "credentials",
            Self::Full => "full",
        }
    }
}

impl fmt::Display for FormVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown form variant `{0}` (expected basic, credentials or full)")]
pub struct UnknownVariant(String);

impl FromStr for FormVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "credentials" => Ok(Self::Credentials),
            "full" => Ok(Self::Full),
            _ => Err(UnknownVariant(s.to_string())),
        }
    }
}
