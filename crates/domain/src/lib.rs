//! Directory records and membership invariants.

#![forbid(unsafe_code)]

mod directory_user;
mod login_name;
mod membership;
mod principal_type;
mod site_user;

pub use directory_user::{DirectoryUserRecord, TenantGroupId};
pub use login_name::{CLAIMS_SEPARATOR, LoginNameFilter, identity_from_login_name};
pub use membership::{GroupMembership, SiteGroupRef, ViaPrincipal};
pub use principal_type::PrincipalTypeFlags;
pub use site_user::{SiteGroupRecord, SiteUserRecord};
