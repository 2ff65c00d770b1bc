// Settings for the CLI, layered from built-in defaults, an optional TOML
// file and `BOOKSHELF_*` environment variables (after an optional `.env`).

use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

const CONFIG_FILE_ENV: &str = "BOOKSHELF_CONFIG";
const ENV_PREFIX: &str = "BOOKSHELF";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub theme: ThemeSettings,
    #[serde(default)]
    pub log: LogSettings,
}

impl Settings {
    /// Load `.env`, then the config file named by `BOOKSHELF_CONFIG` (or
    /// `<config dir>/bookshelf/config.toml`), then the environment.
    pub fn load() -> anyhow::Result<Self> {
        // A missing `.env` is fine.
        let _ = dotenvy::dotenv();
        Self::from_file(default_config_path())
    }

    /// Same layering as `load` but with an explicit (optional) file.
    pub fn from_file(path: Option<PathBuf>) -> anyhow::Result<Self> {
        Self::layered(path, None)
    }

    /// `env` replaces the process environment as the last layer when given.
    fn layered(
        path: Option<PathBuf>,
        env: Option<config::Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }
        // e.g. BOOKSHELF_API__BASE_URL=http://books.local:8000
        let builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;
        cfg.try_deserialize()
            .with_context(|| "failed to deserialize configuration")
    }
}

fn default_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var(CONFIG_FILE_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("bookshelf").join("config.toml"))
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "ApiSettings::default_base_url")]
    pub base_url: String,
    /// No timeout unless configured.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl ApiSettings {
    fn default_base_url() -> String {
        "http://localhost:8000".to_string()
    }
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: Self::default_base_url(),
            timeout_secs: None,
        }
    }
}

/// Colours are `#rrggbb` strings, parsed when the theme is built.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeSettings {
    #[serde(default = "ThemeSettings::default_colors")]
    pub colors: bool,
    #[serde(default = "ThemeSettings::default_title")]
    pub title: String,
    #[serde(default = "ThemeSettings::default_header")]
    pub header: String,
    #[serde(default = "ThemeSettings::default_subheader")]
    pub subheader: String,
}

impl ThemeSettings {
    fn default_colors() -> bool {
        true
    }

    fn default_title() -> String {
        "#5e4b8b".to_string()
    }

    fn default_header() -> String {
        "#8f5c9c".to_string()
    }

    fn default_subheader() -> String {
        "#6b3f73".to_string()
    }
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            colors: Self::default_colors(),
            title: Self::default_title(),
            header: Self::default_header(),
            subheader: Self::default_subheader(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "LogSettings::default_filter")]
    pub filter: String,
}

impl LogSettings {
    fn default_filter() -> String {
        "warn".to_string()
    }
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: Self::default_filter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::ffi::OsString;

    /// Sets an environment variable for the rest of the scope.
    struct EnvGuard {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: &str) -> Self {
            let previous = std::env::var_os(key);
            std::env::set_var(key, value);
            EnvGuard { key, previous }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.previous {
                Some(value) => std::env::set_var(self.key, value),
                None => std::env::remove_var(self.key),
            }
        }
    }

    fn write_settings(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "bookshelf-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn env(vars: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn default_api_points_at_localhost() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "http://localhost:8000");
        assert_eq!(settings.api.timeout_secs, None);
    }

    #[test]
    fn default_theme_uses_library_palette() {
        let theme = ThemeSettings::default();
        assert!(theme.colors);
        assert_eq!(theme.title, "#5e4b8b");
        assert_eq!(LogSettings::default().filter, "warn");
    }

    #[test]
    fn file_overrides_defaults() {
        let path = write_settings(
            "file",
            "[api]\nbase_url = \"http://books.test:9000\"\ntimeout_secs = 5\n\n[theme]\ncolors = false\n",
        );

        let settings = Settings::layered(Some(path.clone()), env(&[])).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.api.base_url, "http://books.test:9000");
        assert_eq!(settings.api.timeout_secs, Some(5));
        assert!(!settings.theme.colors);
        // untouched sections keep their defaults
        assert_eq!(settings.theme.header, "#8f5c9c");
        assert_eq!(settings.log.filter, "warn");
    }

    #[test]
    fn env_overrides_file() {
        let path = write_settings(
            "env",
            "[api]\nbase_url = \"http://books.test:9000\"\n\n[log]\nfilter = \"info\"\n",
        );

        let settings = Settings::layered(
            Some(path.clone()),
            env(&[
                ("BOOKSHELF_API__BASE_URL", "http://env.test:1"),
                ("BOOKSHELF_API__TIMEOUT_SECS", "7"),
                ("BOOKSHELF_THEME__COLORS", "false"),
                ("UNRELATED_API__BASE_URL", "http://ignored.test"),
            ]),
        )
        .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.api.base_url, "http://env.test:1");
        assert_eq!(settings.api.timeout_secs, Some(7));
        assert!(!settings.theme.colors);
        assert_eq!(settings.log.filter, "info");
    }

    #[test]
    fn missing_file_is_not_an_error() {
        let path = std::env::temp_dir().join("bookshelf-settings-does-not-exist.toml");
        let settings = Settings::layered(Some(path), env(&[])).unwrap();
        assert_eq!(settings.theme.subheader, "#6b3f73");
    }

    #[test]
    #[serial]
    fn config_path_follows_bookshelf_config() {
        let _guard = EnvGuard::set(CONFIG_FILE_ENV, "/tmp/elsewhere/bookshelf.toml");
        assert_eq!(
            default_config_path(),
            Some(PathBuf::from("/tmp/elsewhere/bookshelf.toml"))
        );
    }

    #[test]
    #[serial]
    fn process_environment_is_read_by_default() {
        let _guard = EnvGuard::set("BOOKSHELF_API__BASE_URL", "http://process.test:2");
        let settings = Settings::from_file(None).unwrap();
        assert_eq!(settings.api.base_url, "http://process.test:2");
    }
}
