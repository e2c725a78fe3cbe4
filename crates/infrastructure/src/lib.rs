//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod directory_http_client;
mod graph_tenant_directory;
mod in_memory_directory;
mod rest_site_directory;

#[cfg(test)]
mod test_support;

pub use graph_tenant_directory::GraphTenantDirectory;
pub use in_memory_directory::{
    DirectoryFixture, DirectoryUserFixture, InMemoryDirectory, SiteGroupFixture, SiteUserFixture,
};
pub use rest_site_directory::RestSiteDirectory;
