use crate::err::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    #[serde(default)]
    pub maintainers: Vec<String>,
    pub commands: Vec<Command>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    /// Used when no other command matches; exactly one command must set this.
    #[serde(default, rename = "default")]
    pub is_default: bool,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub url: String,
    /// Contains a single `%s`, replaced by the percent-encoded argument.
    #[serde(default)]
    pub url_with_params: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub usage: String,
}

pub async fn load(path: &Path) -> Result<Config, ConfigError> {
    let load_failure = |source| ConfigError::LoadFailure {
        path: path.to_owned(),
        source,
    };
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| load_failure(e.into()))?;
    serde_json::from_slice(&data).map_err(|e| load_failure(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn loads_commands_and_maintainers() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "maintainers": ["insomniacslk"],
                "commands": [
                    {{
                        "name": "g",
                        "aliases": ["google"],
                        "url": "https://google.com/search?q=",
                        "url_with_params": "https://google.com/search?q=%s",
                        "description": "Google search",
                        "usage": "g <terms>"
                    }},
                    {{
                        "name": "ddg",
                        "default": true,
                        "url": "https://duckduckgo.com"
                    }}
                ]
            }}"#
        )
        .unwrap();

        let config = load(file.path()).await.unwrap();
        assert_eq!(config.maintainers, ["insomniacslk"]);
        assert_eq!(config.commands.len(), 2);

        let g = &config.commands[0];
        assert_eq!(g.name, "g");
        assert!(!g.is_default);
        assert_eq!(g.aliases, ["google"]);
        assert_eq!(g.url_with_params, "https://google.com/search?q=%s");
        assert_eq!(g.usage, "g <terms>");

        let ddg = &config.commands[1];
        assert!(ddg.is_default);
        assert!(ddg.aliases.is_empty());
        assert!(ddg.url_with_params.is_empty());
    }

    #[tokio::test]
    async fn missing_file_is_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        match load(&path).await {
            Err(ConfigError::LoadFailure { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[tokio::test]
    async fn malformed_file_is_load_failure() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"commands": [{{"name": "g"}}]}}"#).unwrap();
        let err = load(file.path()).await.unwrap_err();
        assert!(matches!(err, ConfigError::LoadFailure { .. }));
        assert!(err.to_string().contains("url"), "{}", err);
    }
}
