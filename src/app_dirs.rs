use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "quizmind") {
            proj_dirs.config_dir().join("config.json")
        } else {
            PathBuf::from("quizmind_config.json")
        }
    }

    /// Diagnostic log destination; the terminal itself is owned by the TUI.
    pub fn log_path() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("", "", "quizmind") {
            proj_dirs.data_local_dir().join("quizmind.log")
        } else {
            PathBuf::from("quizmind.log")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_end_with_expected_file_names() {
        assert!(AppDirs::config_path().ends_with("config.json"));
        assert!(AppDirs::log_path().ends_with("quizmind.log"));
    }
}
