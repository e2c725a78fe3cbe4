use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use memberlens_application::{SiteDirectory, TenantDirectory};
use memberlens_core::{AppError, AppResult, CALLING_CONTEXT_ID, UserIdentity};
use memberlens_domain::{
    DirectoryUserRecord, LoginNameFilter, PrincipalTypeFlags, SiteGroupRecord, SiteUserRecord,
    TenantGroupId,
};

mod fixture;

pub use fixture::{DirectoryFixture, DirectoryUserFixture, SiteGroupFixture, SiteUserFixture};

#[derive(Debug, Clone)]
struct DirectoryUserEntry {
    record: DirectoryUserRecord,
    is_current_user: bool,
    member_group_ids: Vec<TenantGroupId>,
}

impl DirectoryUserEntry {
    fn answers_to(&self, email: &str) -> bool {
        [&self.record.mail, &self.record.user_principal_name]
            .into_iter()
            .flatten()
            .any(|address| address.eq_ignore_ascii_case(email))
    }
}

/// In-memory implementation of both directories, loaded from a fixture.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    current_site_user_id: Option<u32>,
    site_users: Vec<SiteUserRecord>,
    directory_users: Vec<DirectoryUserEntry>,
}

impl InMemoryDirectory {
    /// Builds a directory from a fixture, validating its cross references.
    pub fn from_fixture(fixture: DirectoryFixture) -> AppResult<Self> {
        let groups: HashMap<u32, SiteGroupRecord> = fixture
            .site_groups
            .into_iter()
            .map(|group| {
                (
                    group.id,
                    SiteGroupRecord {
                        id: group.id,
                        title: group.title,
                    },
                )
            })
            .collect();

        let site_users = fixture
            .site_users
            .into_iter()
            .map(|user| {
                if user.id == CALLING_CONTEXT_ID {
                    return Err(AppError::Validation(
                        "fixture site user id 0 is reserved for the calling context".to_owned(),
                    ));
                }

                let expanded_groups = user
                    .group_ids
                    .iter()
                    .map(|group_id| {
                        groups.get(group_id).cloned().ok_or_else(|| {
                            AppError::Validation(format!(
                                "fixture site user {} references unknown site group {group_id}",
                                user.id
                            ))
                        })
                    })
                    .collect::<AppResult<Vec<_>>>()?;

                Ok(SiteUserRecord {
                    id: user.id,
                    title: user.title,
                    email: user.email,
                    login_name: user.login_name,
                    principal_type: PrincipalTypeFlags::from_bits(user.principal_type),
                    expanded_groups: Some(expanded_groups),
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        if let Some(current_id) = fixture.current_site_user_id
            && !site_users.iter().any(|user| user.id == current_id)
        {
            return Err(AppError::Validation(format!(
                "fixture current site user {current_id} does not exist"
            )));
        }

        let directory_users = fixture
            .directory_users
            .into_iter()
            .map(|user| {
                let member_group_ids = user
                    .member_group_ids
                    .iter()
                    .map(|value| {
                        TenantGroupId::from_str(value).map_err(|_| {
                            AppError::Validation(format!(
                                "fixture directory user '{}' has invalid group id '{value}'",
                                user.id
                            ))
                        })
                    })
                    .collect::<AppResult<Vec<_>>>()?;

                Ok(DirectoryUserEntry {
                    record: DirectoryUserRecord {
                        id: user.id,
                        display_name: user.display_name,
                        mail: user.mail,
                        user_principal_name: user.user_principal_name,
                    },
                    is_current_user: user.is_current_user,
                    member_group_ids,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self {
            current_site_user_id: fixture.current_site_user_id,
            site_users,
            directory_users,
        })
    }

    /// Parses a fixture from JSON text.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let fixture: DirectoryFixture = serde_json::from_str(json)
            .map_err(|error| AppError::Validation(format!("invalid directory fixture: {error}")))?;
        Self::from_fixture(fixture)
    }

    /// Reads and parses a fixture file.
    pub async fn from_json_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|error| {
            AppError::Validation(format!(
                "failed to read directory fixture '{}': {error}",
                path.display()
            ))
        })?;
        Self::from_json(contents.as_str())
    }

    fn directory_user_entry(&self, identity: &UserIdentity) -> AppResult<&DirectoryUserEntry> {
        let entry = if identity.is_calling_context() {
            self.directory_users.iter().find(|user| user.is_current_user)
        } else {
            self.directory_users
                .iter()
                .find(|user| user.answers_to(identity.email()))
        };

        entry.ok_or_else(|| {
            AppError::NotFound(format!("tenant directory user for identity {identity}"))
        })
    }
}

#[async_trait]
impl SiteDirectory for InMemoryDirectory {
    async fn get_expanded_site_user(&self, id: u32) -> AppResult<SiteUserRecord> {
        let id = if id == CALLING_CONTEXT_ID {
            self.current_site_user_id.ok_or_else(|| {
                AppError::NotFound("fixture has no current site user".to_owned())
            })?
        } else {
            id
        };

        self.site_users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("site principal {id} does not exist")))
    }

    async fn find_site_users_by_login_substring(
        &self,
        filter: &LoginNameFilter,
    ) -> AppResult<Vec<SiteUserRecord>> {
        Ok(self
            .site_users
            .iter()
            .filter(|user| filter.matches(user.login_name.as_str()))
            .map(|user| SiteUserRecord {
                expanded_groups: None,
                ..user.clone()
            })
            .collect())
    }

    async fn list_site_users(&self) -> AppResult<Vec<SiteUserRecord>> {
        Ok(self
            .site_users
            .iter()
            .map(|user| SiteUserRecord {
                expanded_groups: None,
                ..user.clone()
            })
            .collect())
    }

    async fn find_site_user_by_login_name(
        &self,
        login_name: &str,
    ) -> AppResult<Option<SiteUserRecord>> {
        Ok(self
            .site_users
            .iter()
            .find(|user| user.login_name.eq_ignore_ascii_case(login_name))
            .map(|user| SiteUserRecord {
                expanded_groups: None,
                ..user.clone()
            }))
    }
}

#[async_trait]
impl TenantDirectory for InMemoryDirectory {
    async fn get_directory_user(&self, identity: &UserIdentity) -> AppResult<DirectoryUserRecord> {
        self.directory_user_entry(identity)
            .map(|entry| entry.record.clone())
    }

    async fn get_member_group_ids(
        &self,
        identity: &UserIdentity,
    ) -> AppResult<Vec<TenantGroupId>> {
        self.directory_user_entry(identity)
            .map(|entry| entry.member_group_ids.clone())
    }
}
