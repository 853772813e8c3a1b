mod default_sites;
pub mod error;
pub mod site_registry;
