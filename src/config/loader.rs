use std::path::Path;

use tracing::debug;

use super::{ConfigError, InstallerConfig};

impl InstallerConfig {
    /// Reads a config layer from the YAML file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("loading config from {}", path.display());
        let config_file = std::fs::File::open(path)?;
        Ok(serde_yaml::from_reader(config_file)?)
    }
}
