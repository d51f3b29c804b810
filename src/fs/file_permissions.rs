use super::LocalFile;
use std::fs;
use std::io;
#[cfg(target_family = "unix")]
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

#[cfg(target_family = "unix")]
const EXECUTE_BITS: u32 = 0o111;

pub trait FileExecutable {
    /// Add the execute bits to `file_path`, keeping the rest of its mode.
    fn make_executable(&self, file_path: &Path) -> io::Result<()>;
}

impl FileExecutable for LocalFile {
    #[cfg(target_family = "unix")]
    fn make_executable(&self, file_path: &Path) -> io::Result<()> {
        let mut permissions = fs::metadata(file_path)?.permissions();
        permissions.set_mode(permissions.mode() | EXECUTE_BITS);
        fs::set_permissions(file_path, permissions)
    }

    // there is no execute bit to set, the file only needs to exist
    #[cfg(not(target_family = "unix"))]
    fn make_executable(&self, file_path: &Path) -> io::Result<()> {
        fs::metadata(file_path).map(|_| ())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use crate::fs::mock::MockLocalFile;
    use mockall::predicate;
    use std::path::PathBuf;

    impl MockLocalFile {
        pub fn should_make_executable(&mut self, path: &Path) {
            self.expect_make_executable()
                .with(predicate::eq(PathBuf::from(path)))
                .once()
                .returning(|_| Ok(()));
        }

        pub fn should_not_make_executable(&mut self, path: &Path, kind: io::ErrorKind) {
            self.expect_make_executable()
                .with(predicate::eq(PathBuf::from(path)))
                .once()
                .returning(move |_| Err(io::Error::from(kind)));
        }
    }
}
