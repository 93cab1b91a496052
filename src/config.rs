use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;

/// Filesystem locations consulted when classifying a host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Directory whose presence means systemd is running
    #[serde(default = "default_systemd_dir")]
    pub systemd_dir: PathBuf,

    /// Upstart job directory (`<name>.conf`, `<name>.override`)
    #[serde(default = "default_init_dir")]
    pub init_dir: PathBuf,

    /// SysV init script directory
    #[serde(default = "default_initd_dir")]
    pub initd_dir: PathBuf,
}

fn default_systemd_dir() -> PathBuf {
    PathBuf::from(paths::SYSTEMD_SYSTEM_DIR)
}

fn default_init_dir() -> PathBuf {
    PathBuf::from(paths::UPSTART_INIT_DIR)
}

fn default_initd_dir() -> PathBuf {
    PathBuf::from(paths::SYSV_INITD_DIR)
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            systemd_dir: default_systemd_dir(),
            init_dir: default_init_dir(),
            initd_dir: default_initd_dir(),
        }
    }
}

impl ServiceConfig {
    /// Replace the Upstart and SysV directories, keeping the systemd marker
    pub fn with_dirs(mut self, init_dir: impl AsRef<Path>, initd_dir: impl AsRef<Path>) -> Self {
        self.init_dir = init_dir.as_ref().to_path_buf();
        self.initd_dir = initd_dir.as_ref().to_path_buf();
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse service config")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    /// Load from `SVCCTL_CONFIG`, then the default path, falling back to defaults
    pub fn discover() -> Result<Self> {
        if let Some(path) = std::env::var_os("SVCCTL_CONFIG") {
            return Self::load(Path::new(&path));
        }

        let default_path = Path::new(paths::DEFAULT_CONFIG_PATH);
        if default_path.exists() {
            return Self::load(default_path);
        }

        Ok(Self::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_host_paths() {
        let config = ServiceConfig::default();
        assert_eq!(config.systemd_dir, PathBuf::from("/run/systemd/system"));
        assert_eq!(config.init_dir, PathBuf::from("/etc/init"));
        assert_eq!(config.initd_dir, PathBuf::from("/etc/init.d"));
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let config = ServiceConfig::from_toml_str("").unwrap();
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_given_fields() {
        let config = ServiceConfig::from_toml_str("init_dir = \"/srv/init\"\n").unwrap();
        assert_eq!(config.init_dir, PathBuf::from("/srv/init"));
        assert_eq!(config.initd_dir, PathBuf::from("/etc/init.d"));
        assert_eq!(config.systemd_dir, PathBuf::from("/run/systemd/system"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(ServiceConfig::from_toml_str("init_dir = [").is_err());
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("svcctl.toml");
        fs::write(
            &path,
            "systemd_dir = \"/nonexistent\"\ninitd_dir = \"/opt/init.d\"\n",
        )
        .unwrap();

        let config = ServiceConfig::load(&path).unwrap();
        assert_eq!(config.systemd_dir, PathBuf::from("/nonexistent"));
        assert_eq!(config.initd_dir, PathBuf::from("/opt/init.d"));
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ServiceConfig::load(&dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn with_dirs_keeps_systemd_dir() {
        let config = ServiceConfig::default().with_dirs("/a", "/b");
        assert_eq!(config.init_dir, PathBuf::from("/a"));
        assert_eq!(config.initd_dir, PathBuf::from("/b"));
        assert_eq!(config.systemd_dir, PathBuf::from("/run/systemd/system"));
    }
}
