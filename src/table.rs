use crate::config::Command;
use crate::err::ConfigError;
use crate::target::PLACEHOLDER;
use std::collections::HashMap;

/// Read-only keyword index over the configured commands.
///
/// Keys are lower-cased names and aliases, mapped to positions in `commands`.
/// Built once at startup and shared between requests without locking.
#[derive(Debug)]
pub struct CommandTable {
    commands: Vec<Command>,
    keywords: HashMap<String, usize>,
    default: Option<usize>,
    by_name: Vec<usize>,
}

impl CommandTable {
    pub fn build(commands: Vec<Command>) -> Result<Self, ConfigError> {
        let mut keywords = HashMap::new();
        let mut default: Option<usize> = None;

        for (i, command) in commands.iter().enumerate() {
            if command.is_default {
                if let Some(first) = default {
                    return Err(ConfigError::MultipleDefaults {
                        first: commands[first].name.clone(),
                        second: command.name.clone(),
                    });
                }
                default = Some(i);
            }

            if !command.url_with_params.is_empty() {
                let count = command.url_with_params.matches(PLACEHOLDER).count();
                if count != 1 {
                    return Err(ConfigError::InvalidTemplate {
                        name: command.name.clone(),
                        count,
                    });
                }
            }

            for keyword in std::iter::once(&command.name).chain(&command.aliases) {
                // last write wins
                if let Some(prev) = keywords.insert(keyword.to_lowercase(), i) {
                    if prev != i {
                        log::warn!(
                            "Keyword '{}' of '{}' shadows command '{}'",
                            keyword,
                            command.name,
                            commands[prev].name
                        );
                    }
                }
            }
        }

        let mut by_name = (0..commands.len()).collect::<Vec<_>>();
        by_name.sort_by(|&a, &b| commands[a].name.cmp(&commands[b].name));

        Ok(Self {
            commands,
            keywords,
            default,
            by_name,
        })
    }

    /// Fails unless a default command exists, so fallback can never miss at request time.
    pub fn require_default(self) -> Result<Self, ConfigError> {
        match self.default {
            Some(_) => Ok(self),
            None => Err(ConfigError::NoDefault),
        }
    }

    pub fn get(&self, keyword: &str) -> Option<&Command> {
        self.keywords
            .get(&keyword.to_lowercase())
            .map(|&i| &self.commands[i])
    }

    pub fn default_command(&self) -> Option<&Command> {
        self.default.map(|i| &self.commands[i])
    }

    /// Commands in configuration order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Commands ordered by name (bytewise).
    pub fn sorted(&self) -> impl Iterator<Item = &Command> + '_ {
        self.by_name.iter().map(|&i| &self.commands[i])
    }
}

#[cfg(test)]
pub(crate) fn command(name: &str, aliases: &[&str], url: &str, url_with_params: &str) -> Command {
    Command {
        name: name.to_string(),
        aliases: aliases.iter().map(|a| a.to_string()).collect(),
        url: url.to_string(),
        url_with_params: url_with_params.to_string(),
        ..Default::default()
    }
}
