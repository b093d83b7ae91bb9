use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

/// Server configuration, fixed for the lifetime of the process.
///
/// Loaded once at startup from an optional YAML file, then overridden by the
/// `LISTEN` environment variable and the `--directory` command-line argument.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Address the TCP listener binds to.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Root directory for `files/` routes. `None` means the working directory.
    #[serde(default)]
    pub files_dir: Option<PathBuf>,
}

fn default_listen_addr() -> String {
    "127.0.0.1:4221".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            files_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    /// Builds a config from command-line arguments plus the environment.
    ///
    /// Recognized arguments: `--config <file>` (YAML) and `--directory <dir>`
    /// (root for `files/` routes). The `LISTEN` environment variable overrides
    /// the listen address from the file.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut config_path: Option<PathBuf> = None;
        let mut directory: Option<PathBuf> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args.next().context("--config requires a path")?;
                    config_path = Some(PathBuf::from(path));
                }
                "--directory" => {
                    let dir = args.next().context("--directory requires a path")?;
                    directory = Some(PathBuf::from(dir));
                }
                other => anyhow::bail!("unrecognized argument: {}", other),
            }
        }

        let mut cfg = match config_path {
            Some(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                serde_yaml::from_str(&text)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
            None => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }
        if directory.is_some() {
            cfg.files_dir = directory;
        }

        Ok(cfg)
    }

    /// Root directory used by `files/` GET and POST.
    pub fn files_root(&self) -> PathBuf {
        self.files_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
