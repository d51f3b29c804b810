mod error;

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

use crate::fs::utils::validate_path;

pub use error::PackageError;

/// The only permission ever granted to the installed package.
pub const READ_PHONE_STATE: &str = "android.permission.READ_PHONE_STATE";

// Two or more dot-separated segments, each starting with a letter.
const PACKAGE_NAME_REGEX: &str = r"^[A-Za-z][A-Za-z0-9_]*(\.[A-Za-z][A-Za-z0-9_]*)+$";

fn package_name_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(PACKAGE_NAME_REGEX).expect("package name regex should be valid")
    })
}

/// Installed-package identifier, e.g. `com.example.app`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: impl Into<String>) -> Result<Self, PackageError> {
        let name = name.into();
        if !package_name_regex().is_match(&name) {
            return Err(PackageError::InvalidName(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last dot-separated segment of the name.
    pub fn simple_name(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }
}

impl TryFrom<String> for PackageName {
    type Error = PackageError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for PackageName {
    type Err = PackageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Location of the bundled package, relative to the module directory unless absolute.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "PathBuf")]
pub struct PackagePath {
    path: PathBuf,
    file_name: OsString,
}

impl PackagePath {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, PackageError> {
        let path = path.into();
        validate_path(&path)?;
        let file_name = path
            .file_name()
            .ok_or_else(|| PackageError::MissingFileName(path.display().to_string()))?
            .to_os_string();

        Ok(Self { path, file_name })
    }

    /// Base name of the package file, used to name its staged copy.
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// Absolute location of the package inside `module_dir`.
    pub fn resolve(&self, module_dir: &Path) -> PathBuf {
        if self.path.is_absolute() {
            self.path.clone()
        } else {
            module_dir.join(&self.path)
        }
    }
}

impl TryFrom<PathBuf> for PackagePath {
    type Error = PackageError;

    fn try_from(value: PathBuf) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for PackagePath {
    type Err = PackageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
