mod site;
mod tenant;

pub use site::SiteDirectory;
pub use tenant::TenantDirectory;
