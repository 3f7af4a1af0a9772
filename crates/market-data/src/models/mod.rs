//! Market data models
//!
//! - `quote` - Daily quote bars (Quote)
//! - `profile` - Issuer profile data (AssetProfile)

mod profile;
mod quote;

pub use profile::AssetProfile;
pub use quote::Quote;
