pub mod analysis;
pub mod config;
pub mod inspect;
pub mod reports;
