use std::path::PathBuf;

use vc_core::app_dirs::AppDirs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub config_path: PathBuf,
    pub env_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self {
            config_path: dirs.app_config_root.join("config.toml"),
            env_path: dirs.app_config_root.join(".env"),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_paths_derives_concrete_locations_from_app_dirs() {
        let dirs = AppDirs {
            app_data_root: PathBuf::from("/tmp/data/visionary"),
            app_config_root: PathBuf::from("/tmp/config/visionary"),
        };

        let paths = AppPaths::from_app_dirs(&dirs);

        assert_eq!(paths.config_path, PathBuf::from("/tmp/config/visionary/config.toml"));
        assert_eq!(paths.env_path, PathBuf::from("/tmp/config/visionary/.env"));
        assert_eq!(paths.logs_dir, PathBuf::from("/tmp/data/visionary/logs"));
    }
}
