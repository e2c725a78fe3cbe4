use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Site principal id reserved for "whoever is calling".
pub const CALLING_CONTEXT_ID: u32 = 0;

/// Identity whose memberships are resolved.
///
/// `id` is a Site Directory principal id, or [`CALLING_CONTEXT_ID`] for the
/// identity of the calling context. `email` is used for explicit Tenant
/// Directory lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserIdentity {
    id: u32,
    email: String,
}

impl UserIdentity {
    /// Creates an identity for an explicit site principal.
    #[must_use]
    pub fn new(id: u32, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }

    /// Creates the identity of the calling context.
    #[must_use]
    pub fn calling_context(email: impl Into<String>) -> Self {
        Self::new(CALLING_CONTEXT_ID, email)
    }

    /// Returns the Site Directory principal id.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the email used for Tenant Directory lookups.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Returns whether this identity stands for the calling context.
    #[must_use]
    pub fn is_calling_context(&self) -> bool {
        self.id == CALLING_CONTEXT_ID
    }
}

impl Display for UserIdentity {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_calling_context() {
            write!(formatter, "calling context")
        } else {
            write!(formatter, "site principal {} ({})", self.id, self.email)
        }
    }
}
