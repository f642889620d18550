use std::path::PathBuf;

use vc_core::{
    app_dirs::AppDirs,
    ports::{AppDirsError, AppDirsPort},
};

const APP_DIR_NAME: &str = "visionary";

fn resolved_app_dir_name() -> String {
    match std::env::var("VC_PROFILE") {
        Ok(profile) if !profile.is_empty() => format!("{APP_DIR_NAME}-{profile}"),
        _ => APP_DIR_NAME.to_string(),
    }
}

/// Resolves per-user directories through the `dirs` crate.
///
/// Setting `VC_PROFILE` keeps separate data and config trees per profile.
pub struct DirsAppDirsAdapter {
    base_dir_override: Option<PathBuf>,
}

impl DirsAppDirsAdapter {
    pub fn new() -> Self {
        Self {
            base_dir_override: None,
        }
    }

    /// Use `base` for both the data and config roots.
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self {
            base_dir_override: Some(base),
        }
    }

    fn base_data_local_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_dir_override {
            return Some(base.clone());
        }
        dirs::data_local_dir()
    }

    fn base_config_dir(&self) -> Option<PathBuf> {
        if let Some(base) = &self.base_dir_override {
            return Some(base.clone());
        }
        dirs::config_dir()
    }
}

impl Default for DirsAppDirsAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl AppDirsPort for DirsAppDirsAdapter {
    fn get_app_dirs(&self) -> Result<AppDirs, AppDirsError> {
        let base_data = self
            .base_data_local_dir()
            .ok_or(AppDirsError::DataLocalDirUnavailable)?;
        let base_config = self
            .base_config_dir()
            .ok_or(AppDirsError::ConfigDirUnavailable)?;
        let app_dir_name = resolved_app_dir_name();

        Ok(AppDirs {
            app_data_root: base_data.join(&app_dir_name),
            app_config_root: base_config.join(&app_dir_name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    static VC_PROFILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    fn with_vc_profile<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let _guard = VC_PROFILE_ENV_LOCK.lock().unwrap();
        let previous = std::env::var("VC_PROFILE").ok();

        match value {
            Some(profile) => std::env::set_var("VC_PROFILE", profile),
            None => std::env::remove_var("VC_PROFILE"),
        }

        let result = f();

        match previous {
            Some(profile) => std::env::set_var("VC_PROFILE", profile),
            None => std::env::remove_var("VC_PROFILE"),
        }

        result
    }

    #[test]
    fn adapter_appends_visionary_dir_name() {
        with_vc_profile(None, || {
            let adapter = DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"));
            let dirs = adapter.get_app_dirs().unwrap();
            assert_eq!(dirs.app_data_root, PathBuf::from("/tmp/visionary"));
            assert_eq!(dirs.app_config_root, PathBuf::from("/tmp/visionary"));
        });
    }

    #[test]
    fn adapter_isolates_dirs_per_profile() {
        let dirs_a = with_vc_profile(Some("a"), || {
            DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });
        let dirs_b = with_vc_profile(Some("b"), || {
            DirsAppDirsAdapter::with_base_dir(PathBuf::from("/tmp"))
                .get_app_dirs()
                .unwrap()
        });

        assert_eq!(dirs_a.app_data_root, PathBuf::from("/tmp/visionary-a"));
        assert_eq!(dirs_b.app_config_root, PathBuf::from("/tmp/visionary-b"));
    }
}
