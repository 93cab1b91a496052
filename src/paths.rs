/// Runtime directory that only exists when systemd is PID 1
pub const SYSTEMD_SYSTEM_DIR: &str = "/run/systemd/system";

/// Directory holding Upstart job files (`<name>.conf`)
pub const UPSTART_INIT_DIR: &str = "/etc/init";

/// Directory holding SysV init scripts
pub const SYSV_INITD_DIR: &str = "/etc/init.d";

/// Content of an Upstart override that keeps a job from starting at boot
pub const OVERRIDE_CONTENT: &str = "manual\n";

/// Default location of the svcctl configuration file
pub const DEFAULT_CONFIG_PATH: &str = "/etc/svcctl.toml";
