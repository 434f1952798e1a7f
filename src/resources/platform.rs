//! Platform services.
//!
//! Everything that differs between desktop, mobile and console builds sits
//! behind the [`Platform`] trait: where the save lives, whether ads run, the
//! native resolution. The scene only talks to the boxed platform stored in
//! the [`PlatformServices`] resource.
use bevy_ecs::prelude::Resource;
use log::{info, warn};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

pub trait Platform: Send + Sync {
    fn name(&self) -> &str;
    fn is_pc(&self) -> bool;
    fn is_mobile(&self) -> bool;
    fn is_console(&self) -> bool;
    fn default_resolution(&self) -> (u32, u32);
    /// Show an interstitial ad, if the platform has any.
    fn show_ad(&mut self);
    /// Preload the next ad.
    fn prepare_ad(&mut self);
    /// Persist the serialized save record.
    fn save_data(&mut self, data: &str) -> Result<(), String>;
    /// Serialized save record, or `None` when nothing was saved yet.
    fn load_game_data(&self) -> Option<String>;
}

/// The platform the running game talks to.
#[derive(Resource)]
pub struct PlatformServices(pub Box<dyn Platform>);

impl PlatformServices {
    pub fn new(platform: impl Platform + 'static) -> Self {
        Self(Box::new(platform))
    }
}

/// Desktop build: the save is a file, there are no ads.
#[derive(Debug, Clone)]
pub struct DesktopPlatform {
    save_path: PathBuf,
}

impl DesktopPlatform {
    pub fn new(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }
}

impl Platform for DesktopPlatform {
    fn name(&self) -> &str {
        "desktop"
    }

    fn is_pc(&self) -> bool {
        true
    }

    fn is_mobile(&self) -> bool {
        false
    }

    fn is_console(&self) -> bool {
        false
    }

    fn default_resolution(&self) -> (u32, u32) {
        (1920, 1080)
    }

    fn show_ad(&mut self) {}

    fn prepare_ad(&mut self) {}

    fn save_data(&mut self, data: &str) -> Result<(), String> {
        if let Some(dir) = self.save_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create save directory {:?}: {}", dir, e))?;
        }
        fs::write(&self.save_path, data)
            .map_err(|e| format!("Failed to write save file {:?}: {}", self.save_path, e))?;
        info!("Saved game data to {:?}", self.save_path);
        Ok(())
    }

    fn load_game_data(&self) -> Option<String> {
        match fs::read_to_string(&self.save_path) {
            Ok(data) => Some(data),
            Err(e) => {
                warn!("No save data at {:?}: {}", self.save_path, e);
                None
            }
        }
    }
}

/// What a [`MemoryPlatform`] has seen so far.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub saved: Option<String>,
    pub saves: u32,
    pub ads_shown: u32,
    pub ads_prepared: u32,
}

/// In-memory platform for headless runs and tests, behaving like a phone
/// build with ads. Clones share the same store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlatform {
    store: Arc<Mutex<MemoryStore>>,
}

impl MemoryPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing serialized save.
    pub fn with_save(data: impl Into<String>) -> Self {
        let platform = Self::new();
        platform.with_store(|s| s.saved = Some(data.into()));
        platform
    }

    /// Snapshot of the shared store.
    pub fn store(&self) -> MemoryStore {
        self.with_store(|s| s.clone())
    }

    fn with_store<R>(&self, f: impl FnOnce(&mut MemoryStore) -> R) -> R {
        let mut guard = self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl Platform for MemoryPlatform {
    fn name(&self) -> &str {
        "memory"
    }

    fn is_pc(&self) -> bool {
        false
    }

    fn is_mobile(&self) -> bool {
        true
    }

    fn is_console(&self) -> bool {
        false
    }

    fn default_resolution(&self) -> (u32, u32) {
        (1920, 1080)
    }

    fn show_ad(&mut self) {
        self.with_store(|s| s.ads_shown += 1);
    }

    fn prepare_ad(&mut self) {
        self.with_store(|s| s.ads_prepared += 1);
    }

    fn save_data(&mut self, data: &str) -> Result<(), String> {
        self.with_store(|s| {
            s.saved = Some(data.to_string());
            s.saves += 1;
        });
        Ok(())
    }

    fn load_game_data(&self) -> Option<String> {
        self.with_store(|s| s.saved.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_platform_clones_share_store() {
        let platform = MemoryPlatform::new();
        let mut boxed = PlatformServices::new(platform.clone());
        boxed.0.save_data("{}").unwrap();
        boxed.0.show_ad();
        let store = platform.store();
        assert_eq!(store.saved.as_deref(), Some("{}"));
        assert_eq!(store.saves, 1);
        assert_eq!(store.ads_shown, 1);
        assert!(boxed.0.is_mobile());
    }

    #[test]
    fn desktop_platform_round_trips_file() {
        let path = std::env::temp_dir()
            .join(format!("biggerfish-{}", std::process::id()))
            .join("fish.sav");
        let mut platform = DesktopPlatform::new(&path);
        platform.save_data("{\"best_tier\":3}").unwrap();
        assert_eq!(
            platform.load_game_data().as_deref(),
            Some("{\"best_tier\":3}")
        );
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn desktop_platform_without_file_loads_nothing() {
        let platform = DesktopPlatform::new("/nonexistent/biggerfish/fish.sav");
        assert!(platform.load_game_data().is_none());
        assert!(platform.is_pc());
    }
}
