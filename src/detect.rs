//! Host init system detection
//!
//! Nothing here is cached: the filesystem is consulted on every call so a
//! remounted or chrooted host is picked up immediately.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::ServiceConfig;

/// Init system managing a given service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitKind {
    Systemd,
    Upstart,
    SysV,
    Unknown,
}

impl InitKind {
    /// Get a human-readable name for this init system
    pub fn name(&self) -> &'static str {
        match self {
            InitKind::Systemd => "systemd",
            InitKind::Upstart => "Upstart",
            InitKind::SysV => "SysV",
            InitKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for InitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True iff the systemd runtime directory exists
pub fn is_systemd(systemd_dir: &Path) -> bool {
    systemd_dir.is_dir()
}

pub fn upstart_job(init_dir: &Path, name: &str) -> PathBuf {
    init_dir.join(format!("{}.conf", name))
}

pub fn upstart_override(init_dir: &Path, name: &str) -> PathBuf {
    init_dir.join(format!("{}.override", name))
}

pub fn sysv_script(initd_dir: &Path, name: &str) -> PathBuf {
    initd_dir.join(name)
}

/// Classify how `name` is managed: systemd first, then an Upstart job file,
/// then a SysV script.
pub fn classify(config: &ServiceConfig, name: &str) -> InitKind {
    if is_systemd(&config.systemd_dir) {
        InitKind::Systemd
    } else if upstart_job(&config.init_dir, name).exists() {
        InitKind::Upstart
    } else if sysv_script(&config.initd_dir, name).exists() {
        InitKind::SysV
    } else {
        InitKind::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture() -> (tempfile::TempDir, ServiceConfig) {
        let root = tempfile::tempdir().unwrap();
        let init_dir = root.path().join("init");
        let initd_dir = root.path().join("init.d");
        fs::create_dir_all(&init_dir).unwrap();
        fs::create_dir_all(&initd_dir).unwrap();

        let config = ServiceConfig {
            systemd_dir: root.path().join("run/systemd/system"),
            init_dir,
            initd_dir,
        };
        (root, config)
    }

    #[test]
    fn is_systemd_tracks_directory_without_caching() {
        let (_root, config) = fixture();
        assert!(!is_systemd(&config.systemd_dir));
        assert!(!is_systemd(&config.systemd_dir));

        fs::create_dir_all(&config.systemd_dir).unwrap();
        assert!(is_systemd(&config.systemd_dir));
        assert!(is_systemd(&config.systemd_dir));

        fs::remove_dir(&config.systemd_dir).unwrap();
        assert!(!is_systemd(&config.systemd_dir));
    }

    #[test]
    fn plain_file_is_not_systemd() {
        let (_root, config) = fixture();
        fs::create_dir_all(config.systemd_dir.parent().unwrap()).unwrap();
        fs::write(&config.systemd_dir, "").unwrap();
        assert!(!is_systemd(&config.systemd_dir));
    }

    #[test]
    fn systemd_wins_over_upstart_and_sysv() {
        let (_root, config) = fixture();
        fs::create_dir_all(&config.systemd_dir).unwrap();
        fs::write(upstart_job(&config.init_dir, "nginx"), "").unwrap();
        fs::write(sysv_script(&config.initd_dir, "nginx"), "").unwrap();
        assert_eq!(classify(&config, "nginx"), InitKind::Systemd);
    }

    #[test]
    fn upstart_wins_over_sysv() {
        let (_root, config) = fixture();
        fs::write(upstart_job(&config.init_dir, "nginx"), "").unwrap();
        fs::write(sysv_script(&config.initd_dir, "nginx"), "").unwrap();
        assert_eq!(classify(&config, "nginx"), InitKind::Upstart);
    }

    #[test]
    fn sysv_script_alone() {
        let (_root, config) = fixture();
        fs::write(sysv_script(&config.initd_dir, "nginx"), "").unwrap();
        assert_eq!(classify(&config, "nginx"), InitKind::SysV);
    }

    #[test]
    fn nothing_matches_is_unknown() {
        let (_root, config) = fixture();
        assert_eq!(classify(&config, "nginx"), InitKind::Unknown);
    }

    #[test]
    fn path_helpers() {
        let init = Path::new("/etc/init");
        assert_eq!(upstart_job(init, "x"), PathBuf::from("/etc/init/x.conf"));
        assert_eq!(
            upstart_override(init, "x"),
            PathBuf::from("/etc/init/x.override")
        );
        assert_eq!(
            sysv_script(Path::new("/etc/init.d"), "x"),
            PathBuf::from("/etc/init.d/x")
        );
    }

    #[test]
    fn kind_names() {
        assert_eq!(InitKind::Systemd.to_string(), "systemd");
        assert_eq!(InitKind::Upstart.to_string(), "Upstart");
        assert_eq!(InitKind::SysV.to_string(), "SysV");
        assert_eq!(InitKind::Unknown.to_string(), "unknown");
    }
}
