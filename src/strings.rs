//! Localization table
//!
//! Text shown to the player is looked up by [`StringId`]. Templates embed
//! ids as `{STRID|key}`; a template that is exactly `STRID|key` is replaced
//! whole.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, read_to_string};

const WHOLE: &str = "STRID|";
const OPEN: &str = "{STRID|";

/// Every string the game displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StringId {
    /// Paused overlay
    Play001Continue,
    /// Level complete overlay
    Play002LevelUp,
    /// Game over overlay
    Play003GameOver,
    Info001Score,
    Info002Mice,
    Info003Complete,
    Info004Bonus,
    Info005Lives,
}

impl StringId {
    pub const ALL: [StringId; 8] = [
        StringId::Play001Continue,
        StringId::Play002LevelUp,
        StringId::Play003GameOver,
        StringId::Info001Score,
        StringId::Info002Mice,
        StringId::Info003Complete,
        StringId::Info004Bonus,
        StringId::Info005Lives,
    ];

    /// Key used in templates and string files
    pub fn key(self) -> &'static str {
        match self {
            StringId::Play001Continue => "play001continue",
            StringId::Play002LevelUp => "play002levelup",
            StringId::Play003GameOver => "play003gameover",
            StringId::Info001Score => "info001score",
            StringId::Info002Mice => "info002mice",
            StringId::Info003Complete => "info003complete",
            StringId::Info004Bonus => "info004bonus",
            StringId::Info005Lives => "info005lives",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.key() == key)
    }

    /// `{STRID|key}` marker for use inside templates
    pub fn marker(self) -> String {
        format!("{}{}}}", OPEN, self.key())
    }
}

/// String table, created once at startup and passed to whoever renders text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strings {
    table: HashMap<StringId, String>,
}

impl Default for Strings {
    fn default() -> Self {
        Self::english()
    }
}

impl Strings {
    /// Built-in English text
    pub fn english() -> Self {
        let table = [
            (StringId::Play001Continue, "Paused - press SPACE to continue"),
            (StringId::Play002LevelUp, "Level complete! Press SPACE to continue"),
            (StringId::Play003GameOver, "Game Over - press SPACE to play again"),
            (StringId::Info001Score, "Score"),
            (StringId::Info002Mice, "mice"),
            (StringId::Info003Complete, "Level Complete"),
            (StringId::Info004Bonus, "BONUS MODE"),
            (StringId::Info005Lives, "Lives"),
        ]
        .into_iter()
        .map(|(id, text)| (id, text.to_string()))
        .collect();
        Self { table }
    }

    /// English overridden by a JSON object of `key: text`. Unknown keys are
    /// skipped.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        let mut strings = Self::english();
        for (key, text) in raw {
            match StringId::from_key(&key) {
                Some(id) => {
                    strings.table.insert(id, text);
                }
                None => log::warn!("Ignoring unknown string id {:?}", key),
            }
        }
        Ok(strings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let strings = Self::from_json(&read_to_string(path)?)?;
        log::info!("Loaded strings from {}", path.display());
        Ok(strings)
    }

    /// Text for `id`, or "" when the table has none
    pub fn get(&self, id: StringId) -> &str {
        self.table.get(&id).map(String::as_str).unwrap_or("")
    }

    fn lookup(&self, key: &str) -> &str {
        StringId::from_key(key).map(|id| self.get(id)).unwrap_or("")
    }

    /// Replace every `{STRID|key}` in `template`. An unterminated marker
    /// loses its opening and the rest is kept as-is.
    pub fn expand(&self, template: &str) -> String {
        if let Some(key) = template.strip_prefix(WHOLE) {
            return self.lookup(key).to_string();
        }

        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after = &rest[start + OPEN.len()..];
            match after.find('}') {
                Some(end) => {
                    out.push_str(self.lookup(&after[..end]));
                    rest = &after[end + 1..];
                }
                None => rest = after,
            }
        }
        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_round_trip() {
        for id in StringId::ALL {
            assert_eq!(StringId::from_key(id.key()), Some(id));
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.key()));
        }
        assert_eq!(StringId::from_key("nope"), None);
    }

    #[test]
    fn test_expand_markers() {
        let strings = Strings::english();
        let template = format!("{}: {}", StringId::Info001Score.marker(), 42);
        assert_eq!(strings.expand(&template), "Score: 42");
        assert_eq!(
            strings.expand("3/10 {STRID|info002mice} {STRID|info005lives}"),
            "3/10 mice Lives"
        );
    }

    #[test]
    fn test_expand_whole_template() {
        let strings = Strings::english();
        assert_eq!(strings.expand("STRID|info004bonus"), "BONUS MODE");
        assert_eq!(strings.expand("STRID|missing"), "");
    }

    #[test]
    fn test_expand_unterminated() {
        let strings = Strings::english();
        assert_eq!(strings.expand("a {STRID|info001score"), "a info001score");
        assert_eq!(strings.expand("{STRID|unknown} x"), " x");
        assert_eq!(strings.expand("plain"), "plain");
    }

    #[test]
    fn test_json_override() {
        let strings =
            Strings::from_json(r#"{ "info001score": "Punkte", "bogus": "x" }"#).unwrap();
        assert_eq!(strings.get(StringId::Info001Score), "Punkte");
        assert_eq!(strings.get(StringId::Info005Lives), "Lives");
    }
}
