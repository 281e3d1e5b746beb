use config::{Config as ConfigLoader, ConfigError, Environment, File, Map};
use serde::Deserialize;
use std::path::Path;
use techtide_llm::{DEFAULT_ANTHROPIC_MODEL, DEFAULT_OPENAI_MODEL};

/// Application settings. Provider secrets are not part of this; they come
/// from `ProviderSettings::from_env`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    /// `pretty` or `json`
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_openai_model")]
    pub openai_model: String,
    #[serde(default = "default_anthropic_model")]
    pub anthropic_model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            openai_model: default_openai_model(),
            anthropic_model: default_anthropic_model(),
        }
    }
}

fn default_openai_model() -> String {
    DEFAULT_OPENAI_MODEL.to_string()
}

fn default_anthropic_model() -> String {
    DEFAULT_ANTHROPIC_MODEL.to_string()
}

impl Config {
    /// Load configuration from TOML files and environment variables
    ///
    /// Hierarchy (weakest to strongest):
    /// 1. config/default.toml
    /// 2. config/{ENV}.toml (ENV defaults to `dev`)
    /// 3. `TECHTIDE_` variables, e.g. `TECHTIDE_LOGGING__LEVEL=debug`
    ///
    /// Every source is optional.
    pub fn load() -> Result<Self, ConfigError> {
        let env = std::env::var("ENV").unwrap_or_else(|_| "dev".to_string());
        Self::load_layered(Path::new("config"), &env, None)
    }

    /// Same layering as [`Config::load`], rooted at `dir`. `vars` replaces the
    /// process environment as the source of `TECHTIDE_` variables when given.
    pub fn load_layered(
        dir: &Path,
        env: &str,
        vars: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .add_source(File::from(dir.join("default.toml")).required(false))
            .add_source(File::from(dir.join(format!("{env}.toml"))).required(false))
            .add_source(
                Environment::with_prefix("TECHTIDE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load config from a specific path (useful for testing)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            .add_source(File::from(path.as_ref()))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_structure() {
        let toml = r#"
            [logging]
            level = "debug"
            format = "json"

            [llm]
            openai_model = "gpt-4o"
            anthropic_model = "claude-3-haiku-20240307"
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.llm.openai_model, "gpt-4o");
        assert_eq!(config.llm.anthropic_model, "claude-3-haiku-20240307");
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = toml::from_str("[logging]\nlevel = \"warn\"\n").unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.llm.openai_model, "gpt-4o-mini");
        assert_eq!(config.llm.anthropic_model, "claude-3-5-sonnet-latest");
    }

    #[test]
    fn test_bundled_default_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/default.toml");
        let config = Config::from_file(path).unwrap();
        assert_eq!(config.llm.openai_model, DEFAULT_OPENAI_MODEL);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_env_file_and_variables_override_default() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("default.toml"),
            "[logging]\nlevel = \"warn\"\n\n[llm]\nopenai_model = \"gpt-4o\"\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("staging.toml"),
            "[logging]\nformat = \"json\"\n\n[llm]\nopenai_model = \"gpt-4.1\"\n",
        )
        .unwrap();

        let config = Config::load_layered(dir.path(), "staging", Some(Map::new())).unwrap();
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.llm.openai_model, "gpt-4.1");
        assert_eq!(config.llm.anthropic_model, DEFAULT_ANTHROPIC_MODEL);

        let vars = Map::from([
            ("TECHTIDE_LLM__OPENAI_MODEL".to_string(), "o1-mini".to_string()),
            ("TECHTIDE_LOGGING__LEVEL".to_string(), "trace".to_string()),
        ]);
        let config = Config::load_layered(dir.path(), "staging", Some(vars)).unwrap();
        assert_eq!(config.llm.openai_model, "o1-mini");
        assert_eq!(config.logging.level, "trace");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_other_env_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("prod.toml"), "[logging]\nlevel = \"error\"\n").unwrap();

        let config = Config::load_layered(dir.path(), "dev", Some(Map::new())).unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.llm.openai_model, DEFAULT_OPENAI_MODEL);
    }

    #[test]
    fn test_load_reads_process_environment() {
        std::env::set_var("TECHTIDE_LLM__ANTHROPIC_MODEL", "claude-3-opus-latest");
        std::env::set_var("TECHTIDE_LOGGING__FORMAT", "json");

        let result = Config::load();

        std::env::remove_var("TECHTIDE_LLM__ANTHROPIC_MODEL");
        std::env::remove_var("TECHTIDE_LOGGING__FORMAT");

        let config = result.unwrap();
        assert_eq!(config.llm.anthropic_model, "claude-3-opus-latest");
        assert_eq!(config.logging.format, "json");
    }
}
