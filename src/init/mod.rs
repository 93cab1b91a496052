mod systemd;
mod sysvinit;
mod upstart;

pub use systemd::Systemd;
pub use sysvinit::SysVinit;
pub use upstart::Upstart;

use crate::cmd::Runner;
use crate::config::ServiceConfig;
use crate::detect::InitKind;
use crate::error::Result;

/// Boot-time enablement for one init system flavor
pub trait InitSystem: Send + Sync {
    /// Name of the init system
    fn name(&self) -> &str;

    /// Allow a service to start at boot
    fn enable_service(&self, runner: &dyn Runner, service: &str) -> Result<()>;

    /// Keep a service from starting at boot
    fn disable_service(&self, runner: &dyn Runner, service: &str) -> Result<()>;
}

/// Boot controller for a classified init kind, `None` for `Unknown`
pub fn for_kind(kind: InitKind, config: &ServiceConfig) -> Option<Box<dyn InitSystem>> {
    match kind {
        InitKind::Systemd => Some(Box::new(Systemd::new())),
        InitKind::Upstart => Some(Box::new(Upstart::new(&config.init_dir))),
        InitKind::SysV => Some(Box::new(SysVinit::new())),
        InitKind::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_kind_maps_each_flavor() {
        let config = ServiceConfig::default();
        assert_eq!(for_kind(InitKind::Systemd, &config).unwrap().name(), "systemd");
        assert_eq!(for_kind(InitKind::Upstart, &config).unwrap().name(), "Upstart");
        assert_eq!(for_kind(InitKind::SysV, &config).unwrap().name(), "SysV");
        assert!(for_kind(InitKind::Unknown, &config).is_none());
    }
}
