use crate::TenantGroupId;

/// Separator between the claims prefix and the identity part of a login name.
pub const CLAIMS_SEPARATOR: char = '|';

/// Returns the identity part of a claims login name, i.e. everything after the
/// last separator. Login names without a separator are returned unchanged.
#[must_use]
pub fn identity_from_login_name(login_name: &str) -> &str {
    login_name
        .rsplit_once(CLAIMS_SEPARATOR)
        .map_or(login_name, |(_, identity)| identity)
}

/// OR-combined "login name contains" filter used to find the site principals
/// that shadow Tenant Directory groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginNameFilter {
    needles: Vec<String>,
}

impl LoginNameFilter {
    /// Builds a filter matching `"|<id>"` for each tenant group id.
    #[must_use]
    pub fn for_tenant_groups(group_ids: &[TenantGroupId]) -> Self {
        Self {
            needles: group_ids
                .iter()
                .map(|group_id| format!("{CLAIMS_SEPARATOR}{group_id}"))
                .collect(),
        }
    }

    /// Returns the substrings any of which must be contained in a login name.
    #[must_use]
    pub fn needles(&self) -> &[String] {
        &self.needles
    }

    /// Returns whether the filter has no alternatives and so matches nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needles.is_empty()
    }

    /// Returns whether `login_name` contains any of the needles, ignoring ASCII case.
    #[must_use]
    pub fn matches(&self, login_name: &str) -> bool {
        let login_name = login_name.to_ascii_lowercase();
        self.needles
            .iter()
            .any(|needle| login_name.contains(needle.to_ascii_lowercase().as_str()))
    }
}
