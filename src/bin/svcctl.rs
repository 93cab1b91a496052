use anyhow::{bail, Result};
use std::env;
use tracing_subscriber::EnvFilter;

use svcctl::{ServiceConfig, ServiceControl};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    // Help must work even when the config file is broken
    if args.get(1).map_or(true, |a| is_help(a)) {
        print_usage();
        return Ok(());
    }

    let ctl = ServiceControl::new(ServiceConfig::discover()?);
    let rest = &args[2..];

    let ok = match args[1].as_str() {
        "start" => ctl.start(service_name(rest)?)?,
        "stop" => ctl.stop(service_name(rest)?)?,
        "restart" => ctl.restart(service_name(rest)?)?,
        "reload" => reload(&ctl, rest)?,
        "status" => ctl.is_running(service_name(rest)?)?,
        "available" => ctl.available(service_name(rest)?)?,
        "pause" => {
            require_root("pause")?;
            ctl.pause(service_name(rest)?)?
        }
        "resume" => {
            require_root("resume")?;
            ctl.resume(service_name(rest)?)?
        }
        "running" => {
            for name in ctl.systemv_services_running()? {
                println!("{}", name);
            }
            true
        }
        "detect" => {
            detect(&ctl, rest.first().map(|s| s.as_str()));
            true
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            std::process::exit(2);
        }
    };

    if !ok {
        std::process::exit(1);
    }

    Ok(())
}

fn print_usage() {
    println!(
        r#"svcctl - Control system services on systemd, Upstart and SysV hosts

Usage:
    svcctl start <name>             Start a service
    svcctl stop <name>              Stop a service
    svcctl restart <name>           Restart a service
    svcctl reload [--restart] <name>
                                    Reload a service, restarting if reload fails
    svcctl status <name>            Exit 0 if the service is running
    svcctl available <name>         Exit 0 if the service exists
    svcctl pause <name>             Stop a service and disable it at boot
    svcctl resume <name>            Enable a service at boot and start it
    svcctl running                  List services marked running by service --status-all
    svcctl detect [name]            Show the detected init system and tools
    svcctl help                     Show this help message

Environment:
    SVCCTL_CONFIG                   Config file (default /etc/svcctl.toml)
    RUST_LOG                        Log filter, e.g. svcctl=debug
"#
    );
}

fn is_help(arg: &str) -> bool {
    matches!(arg, "help" | "--help" | "-h")
}

fn service_name(args: &[String]) -> Result<&str> {
    match args.first() {
        Some(name) => Ok(name.as_str()),
        None => bail!("Missing service name. Run `svcctl help` for usage."),
    }
}

fn reload(ctl: &ServiceControl, args: &[String]) -> Result<bool> {
    let restart_on_failure = args.iter().any(|a| a == "--restart");
    let name = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(|s| s.as_str());

    match name {
        Some(name) => Ok(ctl.reload(name, restart_on_failure)?),
        None => bail!("Missing service name. Run `svcctl help` for usage."),
    }
}

fn require_root(command: &str) -> Result<()> {
    if !nix::unistd::Uid::effective().is_root() {
        bail!("svcctl {} must be run as root (use sudo)", command);
    }
    Ok(())
}

fn detect(ctl: &ServiceControl, name: Option<&str>) {
    let config = ctl.config();
    println!("systemd: {} ({})", ctl.is_systemd(), config.systemd_dir.display());
    println!("init dir: {}", config.init_dir.display());
    println!("init.d dir: {}", config.initd_dir.display());

    if let Some(name) = name {
        println!("{}: {}", name, ctl.init_kind(name));
    }

    for tool in ["systemctl", "service", "update-rc.d"] {
        match which::which(tool) {
            Ok(path) => println!("{}: {}", tool, path.display()),
            Err(_) => println!("{}: not found", tool),
        }
    }
}
