//! The `std::fs` backend.

use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use super::backend::FilesystemBackend;
use super::stream::ByteStream;
use crate::open::OpenIntent;

/// A [`FilesystemBackend`] over the local filesystem.
///
/// The working directory is tracked per backend and never changes the
/// process directory.
///
/// # Examples
///
/// ```no_run
/// use pathway::fs::{FilesystemBackend, LocalFs};
///
/// let fs = LocalFs::with_working_dir("/tmp");
/// assert_eq!(fs.working_directory(), "/tmp");
/// ```
#[derive(Debug)]
pub struct LocalFs {
    working_dir: RwLock<String>,
}

impl LocalFs {
    /// A backend starting in the process working directory.
    ///
    /// # Errors
    ///
    /// Fails if the process working directory cannot be determined.
    pub fn new() -> io::Result<Self> {
        let cwd = env::current_dir()?;
        Ok(Self::with_working_dir(cwd.to_string_lossy()))
    }

    /// A backend starting in `dir`.
    #[must_use]
    pub fn with_working_dir(dir: impl Into<String>) -> Self {
        Self {
            working_dir: RwLock::new(dir.into()),
        }
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[cfg(unix)]
fn permission_bits(path: &str, mask: u32) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path).is_ok_and(|m| m.permissions().mode() & mask != 0)
}

impl FilesystemBackend for LocalFs {
    fn exists(&self, path: &str) -> bool {
        Path::new(path).exists()
    }

    fn is_file(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn is_directory(&self, path: &str) -> bool {
        Path::new(path).is_dir()
    }

    #[cfg(unix)]
    fn is_readable(&self, path: &str) -> bool {
        permission_bits(path, 0o444)
    }

    #[cfg(not(unix))]
    fn is_readable(&self, path: &str) -> bool {
        self.exists(path)
    }

    #[cfg(unix)]
    fn is_writable(&self, path: &str) -> bool {
        permission_bits(path, 0o222)
    }

    #[cfg(not(unix))]
    fn is_writable(&self, path: &str) -> bool {
        fs::metadata(path).is_ok_and(|m| !m.permissions().readonly())
    }

    fn list(&self, path: &str) -> io::Result<Vec<String>> {
        fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect()
    }

    fn size(&self, path: &str) -> io::Result<u64> {
        Ok(fs::metadata(path)?.len())
    }

    fn mtime(&self, path: &str) -> io::Result<SystemTime> {
        fs::metadata(path)?.modified()
    }

    fn mkdir(&self, path: &str) -> io::Result<()> {
        fs::create_dir(path)
    }

    fn mkdirs(&self, path: &str) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn rename(&self, from: &str, to: &str) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn copy(&self, from: &str, to: &str) -> io::Result<u64> {
        fs::copy(from, to)
    }

    fn remove_file(&self, path: &str) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn remove_dir(&self, path: &str) -> io::Result<()> {
        fs::remove_dir(path)
    }

    fn canonicalize(&self, path: &str) -> io::Result<String> {
        fs::canonicalize(path).map(|p| path_string(&p))
    }

    fn open_stream(&self, path: &str, intent: &OpenIntent) -> io::Result<ByteStream> {
        if intent.read {
            let file = fs::File::open(path)?;
            return Ok(ByteStream::Reader(Box::new(io::BufReader::new(file))));
        }

        let mut options = fs::OpenOptions::new();
        options.write(true);
        if intent.exclusive {
            options.create_new(true);
        } else {
            options.create(true);
        }
        if intent.append {
            options.append(true);
        } else {
            options.truncate(true);
        }
        let file = options.open(path)?;
        Ok(ByteStream::Writer(Box::new(io::BufWriter::new(file))))
    }

    fn working_directory(&self) -> String {
        self.working_dir
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_working_directory(&self, path: &str) -> io::Result<()> {
        if !Path::new(path).is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("not a directory: {path}"),
            ));
        }
        *self
            .working_dir
            .write()
            .unwrap_or_else(PoisonError::into_inner) = path.to_string();
        Ok(())
    }
}
