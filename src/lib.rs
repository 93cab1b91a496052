//! Start, stop, pause, resume and query system services on systemd,
//! Upstart and SysV hosts.
//!
//! The free functions act on the local host with default paths. Use
//! [`ServiceControl`] to supply a custom [`ServiceConfig`] or [`cmd::Runner`].

pub mod cmd;
pub mod config;
pub mod detect;
pub mod error;
pub mod init;
pub mod paths;
pub mod service;
pub mod status;

pub use config::ServiceConfig;
pub use detect::InitKind;
pub use error::{ProcessError, Result, ServiceError};
pub use service::ServiceControl;

use std::collections::BTreeSet;
use std::path::Path;

/// Return true if the host system uses systemd
pub fn is_systemd() -> bool {
    detect::is_systemd(Path::new(paths::SYSTEMD_SYSTEM_DIR))
}

/// Control a system service, returning whether the command succeeded
pub fn service(action: &str, name: &str) -> Result<bool> {
    ServiceControl::system().service(action, name)
}

/// Start a system service
pub fn start(name: &str) -> Result<bool> {
    ServiceControl::system().start(name)
}

/// Stop a system service
pub fn stop(name: &str) -> Result<bool> {
    ServiceControl::system().stop(name)
}

/// Restart a system service
pub fn restart(name: &str) -> Result<bool> {
    ServiceControl::system().restart(name)
}

/// Reload a system service, optionally falling back to restart
pub fn reload(name: &str, restart_on_failure: bool) -> Result<bool> {
    ServiceControl::system().reload(name, restart_on_failure)
}

/// Determine whether a system service is running
pub fn is_running(name: &str) -> Result<bool> {
    ServiceControl::system().is_running(name)
}

/// Determine whether a system service is available
pub fn available(name: &str) -> Result<bool> {
    ServiceControl::system().available(name)
}

/// Services reported running by `service --status-all`
pub fn systemv_services_running() -> Result<BTreeSet<String>> {
    ServiceControl::system().systemv_services_running()
}

/// Stop a service and prevent it from starting again at boot
///
/// The host defaults are [`paths::UPSTART_INIT_DIR`] and
/// [`paths::SYSV_INITD_DIR`]; [`pause_default`] uses them directly.
pub fn pause(name: &str, init_dir: impl AsRef<Path>, initd_dir: impl AsRef<Path>) -> Result<bool> {
    ServiceControl::new(ServiceConfig::default().with_dirs(init_dir, initd_dir)).pause(name)
}

/// Stop a service and disable it at boot using `/etc/init` and `/etc/init.d`
pub fn pause_default(name: &str) -> Result<bool> {
    ServiceControl::system().pause(name)
}

/// Re-enable a service at boot and start it
///
/// The host defaults are [`paths::UPSTART_INIT_DIR`] and
/// [`paths::SYSV_INITD_DIR`]; [`resume_default`] uses them directly.
pub fn resume(name: &str, init_dir: impl AsRef<Path>, initd_dir: impl AsRef<Path>) -> Result<bool> {
    ServiceControl::new(ServiceConfig::default().with_dirs(init_dir, initd_dir)).resume(name)
}

/// Re-enable a service at boot and start it using `/etc/init` and `/etc/init.d`
pub fn resume_default(name: &str) -> Result<bool> {
    ServiceControl::system().resume(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_default_dir_constants() {
        let ctl = ServiceControl::system();
        assert_eq!(ctl.config().init_dir, Path::new(paths::UPSTART_INIT_DIR));
        assert_eq!(ctl.config().initd_dir, Path::new(paths::SYSV_INITD_DIR));
    }
}
