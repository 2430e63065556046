// Configuration module
// All values are fixed at process start and passed explicitly; there are no
// config files, flags, or environment variables.

use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Port Glide Reader expects its asset server on.
pub const DEFAULT_PORT: u16 = 5173;

/// Server configuration, read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory request paths are resolved against.
    pub root: PathBuf,
    /// File names tried when a directory is requested.
    pub index_files: Vec<String>,
}

impl ServerConfig {
    pub fn new(root: PathBuf) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            root,
            index_files: vec!["index.html".to_string(), "index.htm".to_string()],
        }
    }

    /// Directory containing the server binary itself, which doubles as the
    /// serving root.
    pub fn binary_dir() -> io::Result<PathBuf> {
        let exe = std::env::current_exe()?;
        exe.parent().map(Path::to_path_buf).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "executable path has no parent directory",
            )
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}
