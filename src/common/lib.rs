#[cfg(feature = "db")]
pub mod db;
#[cfg(feature = "factory")]
pub mod factory;
#[cfg(feature = "settings")]
pub mod settings;
