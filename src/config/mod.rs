//! Installer configuration.
//!
//! Values come from, in order of precedence: command line flags, the YAML
//! config file, the environment set by the installer framework (`MODPATH`,
//! `TMPDIR`) and finally the defaults.
mod error;
mod loader;

use std::ffi::OsString;
use std::path::PathBuf;

use serde::Deserialize;

use crate::module::ModuleProp;
use crate::package::{PackageName, PackagePath};
use crate::package_manager::DEFAULT_PM_PATH;

pub use error::ConfigError;

/// Directory the installer framework extracted the module into.
pub const MODULE_DIR_ENV: &str = "MODPATH";
pub const TMP_DIR_ENV: &str = "TMPDIR";

/// One layer of configuration. Every field is optional so layers can be merged.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallerConfig {
    pub module_dir: Option<PathBuf>,
    pub package_path: Option<PackagePath>,
    pub package_name: Option<PackageName>,
    pub tmp_dir: Option<PathBuf>,
    pub pm_path: Option<PathBuf>,
    #[serde(default)]
    pub module: ModuleMetadata,
}

/// `module.prop` fields that cannot be derived from the package.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModuleMetadata {
    pub id: Option<String>,
    pub name: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
}

/// Inputs of the install-and-grant procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct InstallConfig {
    pub module_dir: PathBuf,
    pub package_path: PackagePath,
    pub package_name: PackageName,
    pub tmp_dir: PathBuf,
    pub pm_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UninstallConfig {
    pub package_name: PackageName,
    pub pm_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    pub module_dir: PathBuf,
    pub package_name: PackageName,
    pub module_prop: ModuleProp,
}

impl InstallerConfig {
    /// Layer built from the variables the installer framework exports.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var_os(key))
    }

    pub fn from_vars<F>(var: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let non_empty = |key: &str| var(key).filter(|value| !value.is_empty()).map(PathBuf::from);
        Self {
            module_dir: non_empty(MODULE_DIR_ENV),
            tmp_dir: non_empty(TMP_DIR_ENV),
            ..Default::default()
        }
    }

    /// Fills the values missing in `self` with the ones in `fallback`.
    pub fn or(self, fallback: InstallerConfig) -> Self {
        Self {
            module_dir: self.module_dir.or(fallback.module_dir),
            package_path: self.package_path.or(fallback.package_path),
            package_name: self.package_name.or(fallback.package_name),
            tmp_dir: self.tmp_dir.or(fallback.tmp_dir),
            pm_path: self.pm_path.or(fallback.pm_path),
            module: ModuleMetadata {
                id: self.module.id.or(fallback.module.id),
                name: self.module.name.or(fallback.module.name),
                author: self.module.author.or(fallback.module.author),
                description: self.module.description.or(fallback.module.description),
            },
        }
    }

    pub fn install_config(self) -> Result<InstallConfig, ConfigError> {
        Ok(InstallConfig {
            module_dir: self.module_dir.ok_or(ConfigError::Missing("module_dir"))?,
            package_path: self
                .package_path
                .ok_or(ConfigError::Missing("package_path"))?,
            package_name: self
                .package_name
                .ok_or(ConfigError::Missing("package_name"))?,
            tmp_dir: self.tmp_dir.unwrap_or_else(std::env::temp_dir),
            pm_path: self.pm_path.unwrap_or_else(|| PathBuf::from(DEFAULT_PM_PATH)),
        })
    }

    pub fn uninstall_config(self) -> Result<UninstallConfig, ConfigError> {
        Ok(UninstallConfig {
            package_name: self
                .package_name
                .ok_or(ConfigError::Missing("package_name"))?,
            pm_path: self.pm_path.unwrap_or_else(|| PathBuf::from(DEFAULT_PM_PATH)),
        })
    }

    pub fn generate_config(
        self,
        version: String,
        version_code: u64,
    ) -> Result<GenerateConfig, ConfigError> {
        let module_dir = self.module_dir.ok_or(ConfigError::Missing("module_dir"))?;
        let package_name = self
            .package_name
            .ok_or(ConfigError::Missing("package_name"))?;
        let module = self.module;

        let module_prop = ModuleProp {
            id: module.id.unwrap_or_else(|| package_name.to_string()),
            name: module
                .name
                .unwrap_or_else(|| package_name.simple_name().to_string()),
            version,
            version_code,
            author: module.author.unwrap_or_default(),
            description: module.description.unwrap_or_default(),
        };

        Ok(GenerateConfig {
            module_dir,
            package_name,
            module_prop,
        })
    }
}
