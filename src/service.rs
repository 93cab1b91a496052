//! Service control over systemd, Upstart and SysV hosts
//!
//! Boolean operations report an unsuccessful command as `Ok(false)`. Spawn
//! failures, `update-rc.d`, the `--status-all` scan and hosts whose init
//! system cannot be classified return `Err`.

use std::collections::BTreeSet;

use crate::cmd::{Runner, SystemRunner};
use crate::config::ServiceConfig;
use crate::detect::{self, InitKind};
use crate::error::{ProcessError, Result, ServiceError};
use crate::init;
use crate::status;

pub struct ServiceControl<R: Runner = SystemRunner> {
    config: ServiceConfig,
    runner: R,
}

impl ServiceControl<SystemRunner> {
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_runner(config, SystemRunner::new())
    }

    /// Controller for the local host with default paths
    pub fn system() -> Self {
        Self::new(ServiceConfig::default())
    }
}

impl<R: Runner> ServiceControl<R> {
    pub fn with_runner(config: ServiceConfig, runner: R) -> Self {
        Self { config, runner }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// True if the host uses systemd. Re-checked on every call.
    pub fn is_systemd(&self) -> bool {
        detect::is_systemd(&self.config.systemd_dir)
    }

    /// Init system that would handle boot enablement for `name`
    pub fn init_kind(&self, name: &str) -> InitKind {
        detect::classify(&self.config, name)
    }

    /// Run `action` against `name` with the host's service tool.
    /// Returns whether the command exited successfully.
    pub fn service(&self, action: &str, name: &str) -> Result<bool> {
        let result = if self.is_systemd() {
            self.runner.status("systemctl", &[action, name])
        } else {
            self.runner.status("service", &[name, action])
        };

        match result {
            Ok(()) => Ok(true),
            Err(ProcessError::Failed { .. }) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    pub fn start(&self, name: &str) -> Result<bool> {
        self.service("start", name)
    }

    pub fn stop(&self, name: &str) -> Result<bool> {
        self.service("stop", name)
    }

    pub fn restart(&self, name: &str) -> Result<bool> {
        self.service("restart", name)
    }

    /// Reload a service, optionally falling back to restart if reload fails
    pub fn reload(&self, name: &str, restart_on_failure: bool) -> Result<bool> {
        let reloaded = self.service("reload", name)?;
        if !reloaded && restart_on_failure {
            tracing::debug!("Reload of {} failed, restarting", name);
            return self.restart(name);
        }
        Ok(reloaded)
    }

    /// Determine whether a service is running
    pub fn is_running(&self, name: &str) -> Result<bool> {
        if self.is_systemd() {
            return self.service("is-active", name);
        }

        let output = match self.runner.output("service", &[name, "status"]) {
            Ok(output) => output,
            Err(ProcessError::Failed { .. }) => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        if status::reports_running(&output) {
            return Ok(true);
        }

        Ok(self.systemv_services_running()?.contains(name))
    }

    /// Determine whether the host knows about a service at all
    pub fn available(&self, name: &str) -> Result<bool> {
        match self.runner.output("service", &[name, "status"]) {
            Ok(_) => Ok(true),
            Err(ProcessError::Failed { output, .. }) => Ok(!status::is_unrecognized(&output)),
            Err(e) => Err(e.into()),
        }
    }

    /// Services marked running (`[ + ]`) by `service --status-all`
    pub fn systemv_services_running(&self) -> Result<BTreeSet<String>> {
        let output = self.runner.output("service", &["--status-all"])?;
        Ok(status::parse_status_table(&output))
    }

    /// Stop a service and keep it from starting again at boot.
    /// Returns whether the service ended up stopped.
    pub fn pause(&self, name: &str) -> Result<bool> {
        let stopped = if self.is_running(name)? {
            self.stop(name)?
        } else {
            true
        };

        let boot = self.boot_control(name)?;
        tracing::info!("Disabling {} at boot via {}", name, boot.name());
        boot.disable_service(&self.runner, name)?;

        Ok(stopped)
    }

    /// Re-enable a service at boot and start it if it is not running.
    /// Returns whether the service is running afterwards.
    pub fn resume(&self, name: &str) -> Result<bool> {
        let boot = self.boot_control(name)?;
        tracing::info!("Enabling {} at boot via {}", name, boot.name());
        boot.enable_service(&self.runner, name)?;

        let mut started = self.is_running(name)?;
        if !started {
            started = self.start(name)?;
        }
        Ok(started)
    }

    fn boot_control(&self, name: &str) -> Result<Box<dyn init::InitSystem>> {
        let kind = self.init_kind(name);
        init::for_kind(kind, &self.config).ok_or_else(|| ServiceError::Unclassified {
            name: name.to_string(),
            upstart: detect::upstart_job(&self.config.init_dir, name),
            sysv: detect::sysv_script(&self.config.initd_dir, name),
        })
    }
}
