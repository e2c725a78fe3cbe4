use memberlens_core::AppResult;
use memberlens_domain::{GroupMembership, SiteUserRecord};

/// Turns an expanded site principal into its direct site group memberships.
///
/// A principal in no site group yields exactly one record without a group,
/// so principals known to the site are never silently dropped. The same rule
/// applies whether the principal is the requested user or a shadow-principal.
pub fn extract_site_memberships(principal: &SiteUserRecord) -> AppResult<Vec<GroupMembership>> {
    let groups = principal.groups()?;
    if groups.is_empty() {
        return Ok(vec![GroupMembership::without_group(principal)]);
    }

    Ok(groups
        .iter()
        .map(|group| GroupMembership::in_group(group, principal))
        .collect())
}
