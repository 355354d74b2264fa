//! Configuration module for SocialFin
//!
//! - XDG-compliant path resolution
//! - User display settings

pub mod paths;
pub mod settings;

pub use paths::SocialFinPaths;
pub use settings::{BalanceScope, Settings};
