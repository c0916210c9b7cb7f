pub mod asset;
pub mod config;
pub mod error;
pub mod ruleset;

pub use asset::*;
pub use config::Config;
pub use error::*;
pub use ruleset::*;
