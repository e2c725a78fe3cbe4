use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use memberlens_core::{AppError, AppResult, UserIdentity};
use memberlens_domain::{
    DirectoryUserRecord, LoginNameFilter, PrincipalTypeFlags, SiteGroupRecord, SiteUserRecord,
    TenantGroupId,
};
use tokio::sync::Mutex;

use crate::{SiteDirectory, TenantDirectory};

pub(crate) fn site_group(id: u32, title: &str) -> SiteGroupRecord {
    SiteGroupRecord {
        id,
        title: title.to_owned(),
    }
}

pub(crate) fn site_user(
    id: u32,
    title: &str,
    groups: Option<Vec<SiteGroupRecord>>,
) -> SiteUserRecord {
    SiteUserRecord {
        id,
        title: title.to_owned(),
        email: format!("user{id}@contoso.com"),
        login_name: format!("i:0#.f|membership|user{id}@contoso.com"),
        principal_type: PrincipalTypeFlags::USER,
        expanded_groups: groups,
    }
}

pub(crate) fn shadow_principal(
    id: u32,
    group_id: TenantGroupId,
    groups: Vec<SiteGroupRecord>,
) -> SiteUserRecord {
    SiteUserRecord {
        id,
        title: format!("Tenant group {id}"),
        email: String::new(),
        login_name: format!("c:0t.c|tenant|{group_id}"),
        principal_type: PrincipalTypeFlags::SECURITY_GROUP,
        expanded_groups: Some(groups),
    }
}

/// In-memory site directory that records every call it receives.
#[derive(Default)]
pub(crate) struct FakeSiteDirectory {
    users: Vec<SiteUserRecord>,
    current_user_id: Option<u32>,
    failing_ids: HashSet<u32>,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl FakeSiteDirectory {
    pub(crate) fn with_user(mut self, user: SiteUserRecord) -> Self {
        self.users.push(user);
        self
    }

    pub(crate) fn with_current_user(mut self, id: u32) -> Self {
        self.current_user_id = Some(id);
        self
    }

    pub(crate) fn failing_for(mut self, id: u32) -> Self {
        self.failing_ids.insert(id);
        self
    }

    pub(crate) async fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }
}

#[async_trait]
impl SiteDirectory for FakeSiteDirectory {
    async fn get_expanded_site_user(&self, id: u32) -> AppResult<SiteUserRecord> {
        self.calls.lock().await.push(format!("expanded:{id}"));
        tokio::task::yield_now().await;

        let id = if id == 0 {
            self.current_user_id
                .ok_or_else(|| AppError::NotFound("no calling context".to_owned()))?
        } else {
            id
        };

        if self.failing_ids.contains(&id) {
            return Err(AppError::TransportFailure(format!(
                "site directory unavailable for {id}"
            )));
        }

        self.users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("site principal {id}")))
    }

    async fn find_site_users_by_login_substring(
        &self,
        filter: &LoginNameFilter,
    ) -> AppResult<Vec<SiteUserRecord>> {
        self.calls
            .lock()
            .await
            .push(format!("substring:{}", filter.needles().len()));

        Ok(self
            .users
            .iter()
            .filter(|user| filter.matches(user.login_name.as_str()))
            .map(|user| SiteUserRecord {
                expanded_groups: None,
                ..user.clone()
            })
            .collect())
    }

    async fn list_site_users(&self) -> AppResult<Vec<SiteUserRecord>> {
        self.calls.lock().await.push("list".to_owned());
        Ok(self.users.clone())
    }

    async fn find_site_user_by_login_name(
        &self,
        login_name: &str,
    ) -> AppResult<Option<SiteUserRecord>> {
        self.calls.lock().await.push(format!("login:{login_name}"));
        Ok(self
            .users
            .iter()
            .find(|user| user.login_name == login_name)
            .cloned())
    }
}

/// In-memory tenant directory keyed by site principal id.
#[derive(Default)]
pub(crate) struct FakeTenantDirectory {
    member_groups: HashMap<u32, Vec<TenantGroupId>>,
    failing_ids: HashSet<u32>,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl FakeTenantDirectory {
    pub(crate) fn with_member_groups(mut self, id: u32, group_ids: Vec<TenantGroupId>) -> Self {
        self.member_groups.insert(id, group_ids);
        self
    }

    pub(crate) fn failing_for(mut self, id: u32) -> Self {
        self.failing_ids.insert(id);
        self
    }

    pub(crate) async fn call_count(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .await
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }
}

#[async_trait]
impl TenantDirectory for FakeTenantDirectory {
    async fn get_directory_user(&self, identity: &UserIdentity) -> AppResult<DirectoryUserRecord> {
        self.calls
            .lock()
            .await
            .push(format!("directory_user:{}", identity.id()));

        Ok(DirectoryUserRecord {
            id: format!("object-{}", identity.id()),
            display_name: None,
            mail: Some(identity.email().to_owned()),
            user_principal_name: Some(identity.email().to_owned()),
        })
    }

    async fn get_member_group_ids(
        &self,
        identity: &UserIdentity,
    ) -> AppResult<Vec<TenantGroupId>> {
        self.calls
            .lock()
            .await
            .push(format!("member_groups:{}", identity.id()));
        tokio::task::yield_now().await;

        if self.failing_ids.contains(&identity.id()) {
            return Err(AppError::TransportFailure(
                "tenant directory unavailable".to_owned(),
            ));
        }

        Ok(self
            .member_groups
            .get(&identity.id())
            .cloned()
            .unwrap_or_default())
    }
}
