//! Workspace configuration loaded from `kallysto.toml`.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, PublicationOptions};

/// Config file looked up by [`KallystoConfig::discover`].
pub const CONFIG_FILE: &str = "kallysto.toml";

/// Environment variable overriding the kallysto root.
pub const ROOT_ENV: &str = "KALLYSTO_PATH";

/// Root directory name used when nothing else is configured.
pub const DEFAULT_ROOT_DIR: &str = "kallysto";

/// Configuration for provisioning publications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KallystoConfig {
    /// Root workspace for all publications.
    #[serde(default)]
    pub kallysto_path: Option<PathBuf>,
    /// Defaults applied to new publications.
    #[serde(default)]
    pub publication: PublicationOptions,
}

impl KallystoConfig {
    /// Load and parse a config file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                AppError::ConfigMissing(path.to_path_buf())
            } else {
                AppError::path(path, e)
            }
        })?;
        let config = Self::parse(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from string content.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let config: KallystoConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `dir/kallysto.toml` if present, otherwise return defaults.
    pub fn discover(dir: &Path) -> Result<Self, AppError> {
        let path = dir.join(CONFIG_FILE);
        if !path.is_file() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(root) = &self.kallysto_path
            && root.as_os_str().is_empty()
        {
            return Err(AppError::config_error("kallysto_path must not be empty"));
        }
        Ok(())
    }

    /// Resolve the kallysto root, reading `KALLYSTO_PATH` from the environment.
    pub fn resolve_root(&self, override_root: Option<&Path>, base_dir: &Path) -> PathBuf {
        self.resolve_root_with(override_root, std::env::var_os(ROOT_ENV), base_dir)
    }

    /// Resolve the kallysto root.
    ///
    /// Precedence: `override_root`, then `env_root`, then the configured
    /// `kallysto_path`, then `<base_dir>/kallysto`. Relative paths are joined
    /// onto `base_dir`.
    pub fn resolve_root_with(
        &self,
        override_root: Option<&Path>,
        env_root: Option<OsString>,
        base_dir: &Path,
    ) -> PathBuf {
        let chosen = override_root
            .map(Path::to_path_buf)
            .or_else(|| env_root.filter(|v| !v.is_empty()).map(PathBuf::from))
            .or_else(|| self.kallysto_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT_DIR));

        if chosen.is_absolute() { chosen } else { base_dir.join(chosen) }
    }
}
