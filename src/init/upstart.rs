use super::InitSystem;
use crate::cmd::Runner;
use crate::detect;
use crate::error::{Result, ServiceError};
use crate::paths;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Upstart boot enablement through `<name>.override` files
pub struct Upstart {
    /// Directory holding job files (e.g., "/etc/init")
    init_dir: PathBuf,
}

impl Upstart {
    pub fn new(init_dir: &Path) -> Self {
        Self {
            init_dir: init_dir.to_path_buf(),
        }
    }
}

impl InitSystem for Upstart {
    fn name(&self) -> &str {
        "Upstart"
    }

    fn enable_service(&self, _runner: &dyn Runner, service: &str) -> Result<()> {
        let path = detect::upstart_override(&self.init_dir, service);

        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::info!("Removed {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(ServiceError::Override { path, source }),
        }
    }

    fn disable_service(&self, _runner: &dyn Runner, service: &str) -> Result<()> {
        let path = detect::upstart_override(&self.init_dir, service);

        fs::write(&path, paths::OVERRIDE_CONTENT)
            .map_err(|source| ServiceError::Override {
                path: path.clone(),
                source,
            })?;
        tracing::info!("Wrote {}", path.display());

        Ok(())
    }
}
