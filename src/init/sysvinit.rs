use super::InitSystem;
use crate::cmd::Runner;
use crate::error::Result;

/// SysV boot enablement through `update-rc.d`
///
/// Unlike the dispatcher, a nonzero exit from `update-rc.d` is an error.
#[derive(Debug, Clone, Default)]
pub struct SysVinit;

impl SysVinit {
    pub fn new() -> Self {
        Self
    }

    fn update_rc(&self, runner: &dyn Runner, service: &str, action: &str) -> Result<()> {
        tracing::info!("update-rc.d {} {}", service, action);
        runner.status("update-rc.d", &[service, action])?;
        Ok(())
    }
}

impl InitSystem for SysVinit {
    fn name(&self) -> &str {
        "SysV"
    }

    fn enable_service(&self, runner: &dyn Runner, service: &str) -> Result<()> {
        self.update_rc(runner, service, "enable")
    }

    fn disable_service(&self, runner: &dyn Runner, service: &str) -> Result<()> {
        self.update_rc(runner, service, "disable")
    }
}
