pub mod file_copier;
pub mod file_deleter;
pub mod file_permissions;
pub mod utils;
pub mod writer_file;

#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFile;

#[cfg(test)]
pub mod mock {
    use std::io;
    use std::path::Path;

    use mockall::mock;

    use super::file_copier::{CopyError, FileCopier};
    use super::file_deleter::FileDeleter;
    use super::file_permissions::FileExecutable;
    use super::writer_file::{FileWriter, WriteError};

    mock! {
        pub LocalFile {}

        impl FileCopier for LocalFile {
            fn copy(&self, from: &Path, to: &Path) -> Result<u64, CopyError>;
        }

        impl FileDeleter for LocalFile {
            fn delete(&self, file_path: &Path) -> io::Result<()>;
        }

        impl FileExecutable for LocalFile {
            fn make_executable(&self, file_path: &Path) -> io::Result<()>;
        }

        impl FileWriter for LocalFile {
            fn write(&self, path: &Path, content: String) -> Result<(), WriteError>;
        }
    }
}
