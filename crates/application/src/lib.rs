//! Application services and ports.

#![forbid(unsafe_code)]

mod directory_lookups;
mod directory_ports;
mod membership_extractor;
mod membership_resolver;
mod single_flight;
mod site_user_lookup_service;
mod tenant_group_mapper;

#[cfg(test)]
mod test_fakes;

pub use directory_ports::{SiteDirectory, TenantDirectory};
pub use membership_extractor::extract_site_memberships;
pub use membership_resolver::MembershipResolver;
pub use site_user_lookup_service::{SiteUserLookupService, SiteUserSelection};
