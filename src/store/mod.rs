//! File fetch and store operations.
//!
//! Serves whole files from the working directory or from the configured
//! root, and writes POSTed bodies under that root. Names routed under the
//! root are refused if any component would climb out of it.

use std::io;
use std::path::{Component, Path};
use tokio::fs;

/// Why a fetch failed. Both answer 404 on the wire; the dispatcher logs
/// `Io` distinctly because it is a read failure, not a routing miss.
#[derive(Debug)]
pub enum FetchError {
    NotFound,
    Io(io::Error),
}

/// Reads a file at `path`, relative to the working directory.
///
/// Exactly one trailing newline is stripped when present, reproducing the
/// line-by-line reconstruction the server has always done for served files.
/// A zero-byte file yields an empty body.
pub async fn fetch(path: &str) -> Result<Vec<u8>, FetchError> {
    read_stripped(Path::new(path)).await
}

/// Reads `name` from under `root`.
pub async fn fetch_under_root(name: &str, root: &Path) -> Result<Vec<u8>, FetchError> {
    let name = contained(name).ok_or(FetchError::NotFound)?;
    read_stripped(&root.join(name)).await
}

/// Gate for the working-directory route: the path must contain a separator
/// and open for reading.
pub async fn is_servable(path: &str) -> bool {
    path.contains('/') && fs::File::open(path).await.is_ok()
}

/// Writes `body` to `name` under `root`, truncating any existing
/// destination. The root is created on demand, world-rwx before umask.
pub async fn store(name: &str, root: &Path, body: &[u8]) -> io::Result<()> {
    let name = contained(name)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "name escapes root"))?;

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o777);
    builder.create(root).await?;

    fs::write(root.join(name), body).await
}

async fn read_stripped(path: &Path) -> Result<Vec<u8>, FetchError> {
    let mut contents = fs::read(path).await.map_err(|e| match e.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => FetchError::NotFound,
        _ => FetchError::Io(e),
    })?;

    if contents.last() == Some(&b'\n') {
        contents.pop();
    }

    Ok(contents)
}

/// Accepts only non-empty relative names that stay below the root: normal
/// and `.` components, no `..`, no absolute prefix.
fn contained(name: &str) -> Option<&str> {
    if name.is_empty() {
        return None;
    }
    let safe = Path::new(name)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if safe { Some(name) } else { None }
}
