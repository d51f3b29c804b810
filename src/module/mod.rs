//! Files the module ships next to its package: the uninstall script the
//! installer framework runs on removal, and the `module.prop` descriptor.
mod error;

use std::fmt;
use std::path::Path;

use tracing::info;

use crate::fs::writer_file::FileWriter;
use crate::package::PackageName;

pub use error::ModuleError;

pub const UNINSTALL_SCRIPT: &str = "uninstall.sh";
pub const MODULE_PROP: &str = "module.prop";

/// Content of the module's uninstall script.
pub fn uninstall_script(package: &PackageName) -> String {
    format!("pm uninstall {package}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleProp {
    pub id: String,
    pub name: String,
    pub version: String,
    pub version_code: u64,
    pub author: String,
    pub description: String,
}

impl fmt::Display for ModuleProp {
    /// One `key=value` line per field.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "id={}", self.id)?;
        writeln!(f, "name={}", self.name)?;
        writeln!(f, "version={}", self.version)?;
        writeln!(f, "versionCode={}", self.version_code)?;
        writeln!(f, "author={}", self.author)?;
        writeln!(f, "description={}", self.description)
    }
}

pub struct ModuleGenerator<W> {
    writer: W,
}

impl<W: FileWriter> ModuleGenerator<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes the uninstall script and `module.prop` into `module_dir`.
    pub fn generate(
        &self,
        module_dir: &Path,
        package: &PackageName,
        module_prop: &ModuleProp,
    ) -> Result<(), ModuleError> {
        self.write(&module_dir.join(UNINSTALL_SCRIPT), uninstall_script(package))?;
        self.write(&module_dir.join(MODULE_PROP), module_prop.to_string())?;
        info!(module_dir = %module_dir.display(), "module files generated for {package}");
        Ok(())
    }

    fn write(&self, path: &Path, content: String) -> Result<(), ModuleError> {
        self.writer
            .write(path, content)
            .map_err(|source| ModuleError::Write {
                path: path.to_path_buf(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::fs::mock::MockLocalFile;

    fn module_prop() -> ModuleProp {
        ModuleProp {
            id: "openeuicc".to_string(),
            name: "OpenEUICC".to_string(),
            version: "1.2.0".to_string(),
            version_code: 42,
            author: "Peter Cai".to_string(),
            description: "OpenEUICC provides system-level eSIM integration.".to_string(),
        }
    }

    #[test]
    fn uninstall_script_content() {
        let package = PackageName::new("im.angry.openeuicc").unwrap();
        assert_eq!("pm uninstall im.angry.openeuicc", uninstall_script(&package));
    }

    #[test]
    fn module_prop_rendering() {
        let expected = "id=openeuicc
name=OpenEUICC
version=1.2.0
versionCode=42
author=Peter Cai
description=OpenEUICC provides system-level eSIM integration.
";
        assert_eq!(expected, module_prop().to_string());
    }

    #[test]
    fn generate_writes_both_files() {
        let package = PackageName::new("im.angry.openeuicc").unwrap();
        let module_dir = Path::new("/data/adb/modules_update/openeuicc");
        let mut writer = MockLocalFile::new();
        writer.should_write(
            &module_dir.join("uninstall.sh"),
            "pm uninstall im.angry.openeuicc".to_string(),
        );
        writer.should_write(&module_dir.join("module.prop"), module_prop().to_string());

        ModuleGenerator::new(writer)
            .generate(module_dir, &package, &module_prop())
            .unwrap();
    }

    #[test]
    fn generate_stops_on_first_write_error() {
        let package = PackageName::new("im.angry.openeuicc").unwrap();
        let module_dir = Path::new("/data/adb/modules_update/openeuicc");
        let mut writer = MockLocalFile::new();
        writer.should_not_write(
            &module_dir.join("uninstall.sh"),
            "pm uninstall im.angry.openeuicc".to_string(),
        );

        let result = ModuleGenerator::new(writer).generate(module_dir, &package, &module_prop());

        assert_matches!(result, Err(ModuleError::Write { path, .. }) => {
            assert_eq!(module_dir.join("uninstall.sh"), path);
        });
    }
}
