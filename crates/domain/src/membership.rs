use serde::{Deserialize, Serialize};

use crate::{PrincipalTypeFlags, SiteGroupRecord, SiteUserRecord};

/// Site group reached by a membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteGroupRef {
    /// Site group id.
    pub id: u32,
    /// Site group title.
    pub name: String,
}

/// Principal through which a membership is held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViaPrincipal {
    /// Principal display name.
    pub name: String,
    /// Principal kind.
    pub principal_type: PrincipalTypeFlags,
    /// Site principal id.
    pub id: u32,
}

impl From<&SiteUserRecord> for ViaPrincipal {
    fn from(value: &SiteUserRecord) -> Self {
        Self {
            name: value.title.clone(),
            principal_type: value.principal_type,
            id: value.id,
        }
    }
}

/// One resolved membership.
///
/// The site group name and id are either both present or both absent. When
/// absent the record only states that the principal is known to the site
/// without belonging to any site group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembership {
    site_group: Option<SiteGroupRef>,
    via: ViaPrincipal,
}

impl GroupMembership {
    /// Creates a membership of `group` held through `principal`.
    #[must_use]
    pub fn in_group(group: &SiteGroupRecord, principal: &SiteUserRecord) -> Self {
        Self {
            site_group: Some(SiteGroupRef {
                id: group.id,
                name: group.title.clone(),
            }),
            via: ViaPrincipal::from(principal),
        }
    }

    /// Creates a reachability record for a principal that is in no site group.
    #[must_use]
    pub fn without_group(principal: &SiteUserRecord) -> Self {
        Self {
            site_group: None,
            via: ViaPrincipal::from(principal),
        }
    }

    /// Returns the site group name, if any.
    #[must_use]
    pub fn site_group_name(&self) -> Option<&str> {
        self.site_group.as_ref().map(|group| group.name.as_str())
    }

    /// Returns the site group id, if any.
    #[must_use]
    pub fn site_group_id(&self) -> Option<u32> {
        self.site_group.as_ref().map(|group| group.id)
    }

    /// Returns the principal the membership is held through.
    #[must_use]
    pub fn via(&self) -> &ViaPrincipal {
        &self.via
    }
}

#[cfg(test)]
mod tests {
    use super::GroupMembership;
    use crate::{PrincipalTypeFlags, SiteGroupRecord, SiteUserRecord};

    fn security_group() -> SiteUserRecord {
        SiteUserRecord {
            id: 31,
            title: "Finance Team".to_owned(),
            email: String::new(),
            login_name: "c:0t.c|tenant|0f4a".to_owned(),
            principal_type: PrincipalTypeFlags::SECURITY_GROUP,
            expanded_groups: Some(Vec::new()),
        }
    }

    #[test]
    fn group_membership_carries_name_and_id_together() {
        let group = SiteGroupRecord {
            id: 4,
            title: "Site Members".to_owned(),
        };
        let membership = GroupMembership::in_group(&group, &security_group());

        assert_eq!(membership.site_group_name(), Some("Site Members"));
        assert_eq!(membership.site_group_id(), Some(4));
        assert_eq!(membership.via().id, 31);
        assert_eq!(membership.via().name, "Finance Team");
    }

    #[test]
    fn reachability_record_has_neither_name_nor_id() {
        let membership = GroupMembership::without_group(&security_group());

        assert_eq!(membership.site_group_name(), None);
        assert_eq!(membership.site_group_id(), None);
        assert!(
            membership
                .via()
                .principal_type
                .contains(PrincipalTypeFlags::SECURITY_GROUP)
        );
    }
}
