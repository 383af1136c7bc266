//! Configuration shared by the catalog and the directory binary.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::source::DataSourceKind;

/// Config file used when `MONKEY_CONFIG` is not set.
pub const DEFAULT_CONFIG_PATH: &str = "config/monkey.toml";

/// Fixed width of the description column.
pub const DEFAULT_DESCRIPTION_WIDTH: usize = 70;

/// Directory configuration. Load from TOML or env.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Title printed under the banner logo.
    pub app_name: String,
    /// Which data source feeds the catalog.
    pub source: DataSourceKind,
    /// Endpoint for the MCP source. Ignored by the seed source.
    #[serde(default)]
    pub mcp_endpoint: Option<String>,
    /// Load the catalog as part of configuring the source instead of on first read.
    pub preload: bool,
    /// Width of the description column; longer text is truncated with `…`.
    pub description_width: usize,
    /// ANSI colours for banner, header and borders.
    pub color: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            app_name: "Monkey Directory".to_string(),
            source: DataSourceKind::Seed,
            mcp_endpoint: None,
            preload: true,
            description_width: DEFAULT_DESCRIPTION_WIDTH,
            color: true,
        }
    }
}

impl DirectoryConfig {
    /// Load config from file and environment. Precedence: `MONKEY__*` env > file at
    /// `MONKEY_CONFIG` (or `config/monkey.toml`) > defaults. A missing file is skipped.
    pub fn load() -> Result<Self> {
        let config_path =
            std::env::var("MONKEY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(Path::new(&config_path))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let defaults = Self::default();
        let builder = config::Config::builder()
            .set_default("app_name", defaults.app_name)?
            .set_default("source", "seed")?
            .set_default("preload", defaults.preload)?
            .set_default("description_width", defaults.description_width as i64)?
            .set_default("color", defaults.color)?;

        let builder = if path.exists() {
            builder.add_source(config::File::from(path))
        } else {
            builder
        };

        let built = builder
            .add_source(config::Environment::with_prefix("MONKEY").separator("__"))
            .build()?;

        let mut cfg: Self = built.try_deserialize()?;
        cfg.description_width = cfg.description_width.max(1);
        if std::env::var_os("NO_COLOR").is_some() {
            cfg.color = false;
        }
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, MutexGuard};

    // load_from reads the process environment, so every test that calls it holds this.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Sets variables for one test and removes them on drop, even after a failed assert.
    struct ScopedEnv(Vec<&'static str>);

    impl ScopedEnv {
        fn set(vars: &[(&'static str, &str)]) -> Self {
            for (key, value) in vars {
                std::env::set_var(key, value);
            }
            Self(vars.iter().map(|(key, _)| *key).collect())
        }
    }

    impl Drop for ScopedEnv {
        fn drop(&mut self) {
            for key in &self.0 {
                std::env::remove_var(key);
            }
        }
    }

    fn write_config(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("monkey.toml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn defaults_apply_when_file_is_missing() {
        let _lock = env_lock();
        let cfg = DirectoryConfig::load_from(Path::new("does/not/exist.toml")).unwrap();
        assert_eq!(cfg.app_name, "Monkey Directory");
        assert_eq!(cfg.source, DataSourceKind::Seed);
        assert!(cfg.preload);
        assert_eq!(cfg.description_width, DEFAULT_DESCRIPTION_WIDTH);
        assert!(cfg.mcp_endpoint.is_none());
    }

    #[test]
    fn file_values_override_defaults() {
        let _lock = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "source = \"mcp\"\nmcp_endpoint = \"http://127.0.0.1:9\"\npreload = false\ndescription_width = 0\n",
        );

        let cfg = DirectoryConfig::load_from(&path).unwrap();
        assert_eq!(cfg.source, DataSourceKind::Mcp);
        assert_eq!(cfg.mcp_endpoint.as_deref(), Some("http://127.0.0.1:9"));
        assert!(!cfg.preload);
        assert_eq!(cfg.description_width, 1);
    }

    #[test]
    fn unknown_source_kind_fails_to_load() {
        let _lock = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "source = \"carrier-pigeon\"\n");

        assert!(DirectoryConfig::load_from(&path).is_err());
    }

    #[test]
    fn source_kind_in_file_ignores_case() {
        let _lock = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "source = \"Seed\"\n");

        let cfg = DirectoryConfig::load_from(&path).unwrap();
        assert_eq!(cfg.source, DataSourceKind::Seed);
    }

    #[test]
    fn environment_overrides_file_values() {
        let _lock = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "source = \"seed\"\npreload = true\ndescription_width = 50\napp_name = \"From File\"\n",
        );
        let _env = ScopedEnv::set(&[
            ("MONKEY__SOURCE", "mcp"),
            ("MONKEY__DESCRIPTION_WIDTH", "33"),
            ("MONKEY__PRELOAD", "false"),
        ]);

        let cfg = DirectoryConfig::load_from(&path).unwrap();
        assert_eq!(cfg.source, DataSourceKind::Mcp);
        assert_eq!(cfg.description_width, 33);
        assert!(!cfg.preload);
        assert_eq!(cfg.app_name, "From File");
    }

    #[test]
    fn no_color_turns_colour_off() {
        let _lock = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "color = true\n");
        let _env = ScopedEnv::set(&[("NO_COLOR", "1")]);

        assert!(!DirectoryConfig::load_from(&path).unwrap().color);
    }
}
