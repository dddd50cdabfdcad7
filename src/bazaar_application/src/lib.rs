pub mod account_provisioning_service;
pub mod category_resolver;
pub mod profile_loader;
pub mod use_cases;

#[cfg(test)]
mod test_support;

pub use account_provisioning_service::{AccountProvisioning, AccountProvisioningService};
pub use category_resolver::{CategoryResolver, ResolveCategoryError};
pub use profile_loader::{ProfileLoader, ProjectionError};
pub use use_cases::*;
