//! Persistence
//!
//! The profile is the only thing this app ever writes to disk.

pub mod profile;

pub use profile::{load_profile, save_profile, Profile, SaveError};
