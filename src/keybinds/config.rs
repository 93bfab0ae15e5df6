//! Configuration for keybinds.

use crate::search::NavKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Action names as they appear in the config file
const ACTIONS: [(&str, NavKey); 4] = [
    ("select_next", NavKey::SelectNext),
    ("select_previous", NavKey::SelectPrevious),
    ("commit", NavKey::Commit),
    ("dismiss", NavKey::Dismiss),
];

/// Configuration for dropdown navigation keybinds.
///
/// Actions missing from the table keep their default bindings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeybindConfig {
    /// Keybind mappings, by action name
    pub keybinds: HashMap<String, KeybindDef>,
}

/// Keybind definition - can be single key, multiple keys, or disabled.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum KeybindDef {
    /// Single keybind
    Single(String),
    /// Multiple alternative keybinds for the same action
    Multiple(Vec<String>),
}

impl KeybindDef {
    fn keys(&self) -> Vec<String> {
        match self {
            Self::Single(key) => vec![key.clone()],
            Self::Multiple(keys) => keys.clone(),
        }
    }
}

impl Default for KeybindConfig {
    fn default() -> Self {
        Self {
            keybinds: default_keybinds(),
        }
    }
}

fn default_keybinds() -> HashMap<String, KeybindDef> {
    let mut keybinds = HashMap::new();

    keybinds.insert(
        "select_next".to_string(),
        KeybindDef::Multiple(vec!["down".to_string(), "ctrl-n".to_string()]),
    );
    keybinds.insert(
        "select_previous".to_string(),
        KeybindDef::Multiple(vec!["up".to_string(), "ctrl-p".to_string()]),
    );
    keybinds.insert("commit".to_string(), KeybindDef::Single("enter".to_string()));
    keybinds.insert("dismiss".to_string(), KeybindDef::Single("esc".to_string()));

    keybinds
}

/// Config name of a navigation action
#[must_use]
pub fn action_name(key: NavKey) -> &'static str {
    ACTIONS
        .iter()
        .find(|(_, k)| *k == key)
        .map_or("", |(name, _)| name)
}

impl KeybindConfig {
    /// Get the keybind(s) for a given action name.
    ///
    /// Falls back to the default binding when the action is not configured.
    #[must_use]
    pub fn get(&self, action: &str) -> Vec<String> {
        match self.keybinds.get(action) {
            Some(def) => def.keys(),
            None => default_keybinds()
                .get(action)
                .map_or_else(Vec::new, KeybindDef::keys),
        }
    }

    /// Check if a keybind is disabled for an action.
    #[must_use]
    pub fn is_disabled(&self, action: &str) -> bool {
        self.keybinds.get(action).is_some_and(|def| match def {
            KeybindDef::Single(key) => key == "none",
            KeybindDef::Multiple(keys) => keys.iter().all(|k| k == "none"),
        })
    }

    /// Find the navigation action bound to a key string such as `"ctrl-n"`
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<NavKey> {
        ACTIONS.iter().find_map(|(name, nav)| {
            if self.is_disabled(name) {
                return None;
            }
            self.get(name)
                .iter()
                .any(|bound| bound.eq_ignore_ascii_case(key))
                .then_some(*nav)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keybinds() {
        let config = KeybindConfig::default();
        assert_eq!(config.get("select_next"), vec!["down", "ctrl-n"]);
        assert_eq!(config.get("commit"), vec!["enter"]);
        assert!(config.get("unknown_action").is_empty());
    }

    #[test]
    fn test_resolve_defaults() {
        let config = KeybindConfig::default();
        assert_eq!(config.resolve("down"), Some(NavKey::SelectNext));
        assert_eq!(config.resolve("ctrl-p"), Some(NavKey::SelectPrevious));
        assert_eq!(config.resolve("Enter"), Some(NavKey::Commit));
        assert_eq!(config.resolve("esc"), Some(NavKey::Dismiss));
        assert_eq!(config.resolve("ctrl-z"), None);
    }

    #[test]
    fn test_keybind_def_parsing() {
        let toml = r#"
            select_next = "tab"
            dismiss = ["esc", "ctrl-c"]
        "#;

        let config: KeybindConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.get("select_next"), vec!["tab"]);
        assert_eq!(config.get("dismiss"), vec!["esc", "ctrl-c"]);
        // Unconfigured actions keep their defaults
        assert_eq!(config.get("commit"), vec!["enter"]);
        assert_eq!(config.resolve("tab"), Some(NavKey::SelectNext));
        assert_eq!(config.resolve("down"), None);
    }

    #[test]
    fn test_is_disabled() {
        let mut keybinds = HashMap::new();
        keybinds.insert("commit".to_string(), KeybindDef::Single("none".to_string()));
        keybinds.insert("dismiss".to_string(), KeybindDef::Single("esc".to_string()));

        let config = KeybindConfig { keybinds };

        assert!(config.is_disabled("commit"));
        assert!(!config.is_disabled("dismiss"));
        assert_eq!(config.resolve("enter"), None);
        assert_eq!(config.resolve("none"), None);
    }

    #[test]
    fn test_action_names() {
        assert_eq!(action_name(NavKey::SelectNext), "select_next");
        assert_eq!(action_name(NavKey::Dismiss), "dismiss");
    }
}
