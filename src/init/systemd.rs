use super::InitSystem;
use crate::cmd::Runner;
use crate::error::{ProcessError, Result};

/// systemd boot enablement through `systemctl enable|disable`
#[derive(Debug, Clone, Default)]
pub struct Systemd;

impl Systemd {
    pub fn new() -> Self {
        Self
    }

    /// The exit status of `systemctl` is logged, not returned
    fn systemctl(&self, runner: &dyn Runner, action: &str, service: &str) -> Result<()> {
        tracing::info!("systemctl {} {}", action, service);

        match runner.status("systemctl", &[action, service]) {
            Ok(()) => Ok(()),
            Err(ProcessError::Failed { code, .. }) => {
                tracing::warn!(
                    "systemctl {} {} exited with code {:?}",
                    action,
                    service,
                    code
                );
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl InitSystem for Systemd {
    fn name(&self) -> &str {
        "systemd"
    }

    fn enable_service(&self, runner: &dyn Runner, service: &str) -> Result<()> {
        self.systemctl(runner, "enable", service)
    }

    fn disable_service(&self, runner: &dyn Runner, service: &str) -> Result<()> {
        self.systemctl(runner, "disable", service)
    }
}
