//! User profile storage
//!
//! A single versioned JSON blob holding the accumulated XP vector.
//! Levels and titles are always derived at read time and never stored.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::stats::StatVector;

/// Current profile version for compatibility
const PROFILE_VERSION: u32 = 1;

/// Errors from writing the profile to disk.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("failed to write profile: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize profile: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistent user profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Version for compatibility checking
    pub version: u32,
    /// Accumulated XP per category
    pub xp: StatVector,
    /// Lifetime count of logged actions
    pub actions_logged: u64,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            version: PROFILE_VERSION,
            xp: StatVector::default(),
            actions_logged: 0,
        }
    }
}

impl Profile {
    /// Create a fresh profile with a zeroed stat vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all progress. XP only ever moves up otherwise.
    pub fn reset(&mut self) {
        self.xp.reset();
        self.actions_logged = 0;
    }
}

/// Get the profile file path
fn profile_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "kaizen", "Kaizen") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("profile.json");
        path
    } else {
        PathBuf::from("./profile.json")
    }
}

/// Load the user profile (or create default)
pub fn load_profile() -> Profile {
    let path = profile_path();

    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(profile) => {
                    log::info!("Profile loaded from {:?}", path);
                    return profile;
                }
                Err(e) => {
                    log::warn!("Failed to parse profile: {}, creating new", e);
                }
            },
            Err(e) => {
                log::warn!("Failed to read profile: {}, creating new", e);
            }
        }
    }

    log::info!("Creating new profile");
    Profile::new()
}

/// Save the user profile
pub fn save_profile(profile: &Profile) -> Result<(), SaveError> {
    let path = profile_path();

    // Ensure directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(profile)?;
    fs::write(&path, json)?;

    log::info!("Profile saved to {:?}", path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::Category;

    #[test]
    fn profile_round_trips_through_json() {
        let mut profile = Profile::new();
        profile.xp.add(Category::Mind, 777);
        profile.actions_logged = 3;

        let json = serde_json::to_string(&profile).unwrap();
        let restored: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.version, PROFILE_VERSION);
        assert_eq!(restored.xp, profile.xp);
        assert_eq!(restored.actions_logged, 3);
    }

    #[test]
    fn partial_blob_still_loads() {
        // Older blobs may lack categories added later; they read as 0.
        let json = r#"{"version":1,"xp":{"body":500,"looks":20},"actions_logged":1}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.xp.body, 500);
        assert_eq!(profile.xp.intel, 0);
    }

    #[test]
    fn reset_clears_progress() {
        let mut profile = Profile::new();
        profile.xp.add(Category::Body, 10_000);
        profile.actions_logged = 42;
        profile.reset();
        assert_eq!(profile.xp, StatVector::default());
        assert_eq!(profile.actions_logged, 0);
    }
}
