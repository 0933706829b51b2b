use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    #[serde(default)]
    pub filesystem: FilesystemConfig,
    #[serde(default)]
    pub tls: TlsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FilesystemConfig {
    /// Directory tree exposed to the browser. Canonicalised at load time.
    #[serde(default = "default_root")]
    pub root: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TlsConfig {
    pub cert_path: Option<String>,
    pub key_path: Option<String>,
}

fn default_bind_addr() -> SocketAddr {
    "127.0.0.1:9090".parse().unwrap()
}

fn default_root() -> PathBuf {
    dirs_home().unwrap_or_else(|| PathBuf::from("/"))
}

fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

impl Default for FilesystemConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

impl ServerConfig {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = std::env::var("DIRSCOPE_WEB_CONFIG").map(PathBuf::from).ok();

        let mut config = if let Some(path) = config_path {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            toml::from_str(&contents)?
        } else {
            ServerConfig {
                bind_addr: default_bind_addr(),
                filesystem: FilesystemConfig::default(),
                tls: TlsConfig::default(),
            }
        };

        if let Ok(root) = std::env::var("DIRSCOPE_ROOT") {
            config.filesystem.root = PathBuf::from(root);
        }
        if let Ok(addr) = std::env::var("DIRSCOPE_BIND_ADDR") {
            config.bind_addr = addr.parse()?;
        }
        if let Ok(cert) = std::env::var("DIRSCOPE_TLS_CERT") {
            config.tls.cert_path = Some(cert);
        }
        if let Ok(key) = std::env::var("DIRSCOPE_TLS_KEY") {
            config.tls.key_path = Some(key);
        }

        // The path guard in the API compares canonical paths, so the root
        // itself must be canonical before the server starts.
        let root = config
            .filesystem
            .root
            .canonicalize()
            .with_context(|| format!("resolving served root {}", config.filesystem.root.display()))?;
        if !root.is_dir() {
            anyhow::bail!("served root is not a directory: {}", root.display());
        }
        config.filesystem.root = root;

        // Security: the listing API is read-only but unauthenticated.
        if config.bind_addr.ip().is_unspecified() {
            if std::env::var("DIRSCOPE_INSECURE").is_ok() {
                tracing::warn!(
                    "Serving the filesystem on all interfaces ({}). \
                     Anyone on the network can browse the root!",
                    config.bind_addr
                );
            } else {
                let safe_addr: SocketAddr = ([127, 0, 0, 1], config.bind_addr.port()).into();
                tracing::warn!(
                    "No authentication exists. Binding to {} instead of {} for safety. \
                     Set DIRSCOPE_INSECURE=1 to override (NOT RECOMMENDED).",
                    safe_addr,
                    config.bind_addr
                );
                config.bind_addr = safe_addr;
            }
        }

        Ok(config)
    }
}
