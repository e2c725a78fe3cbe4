use std::fmt::{Display, Formatter};
use std::str::FromStr;

use memberlens_core::AppError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Tenant Directory projection of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryUserRecord {
    /// Tenant Directory object id.
    pub id: String,
    /// Display name.
    pub display_name: Option<String>,
    /// Primary mail address.
    pub mail: Option<String>,
    /// User principal name.
    pub user_principal_name: Option<String>,
}

/// Tenant Directory group object id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantGroupId(Uuid);

impl TenantGroupId {
    /// Creates a group id from an existing UUID value.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for TenantGroupId {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim()).map(Self).map_err(|error| {
            AppError::MalformedResponse(format!("invalid tenant group id '{value}': {error}"))
        })
    }
}

impl Display for TenantGroupId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0.hyphenated())
    }
}
