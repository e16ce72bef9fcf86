use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Options applied to records between reading and writing.
///
/// Loaded from an optional TOML file; command-line flags can only switch
/// options on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Sort records by COF name before writing.
    pub sort: bool,
    /// Drop records repeating an earlier COF name instead of only warning.
    pub dedupe: bool,
    /// Warn about triggers at or past `frames_per_direction`.
    pub check_triggers: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            sort: false,
            dedupe: false,
            check_triggers: true,
        }
    }
}

impl ConvertConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn with_flags(self, sort: bool, dedupe: bool) -> Self {
        Self {
            sort: self.sort || sort,
            dedupe: self.dedupe || dedupe,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ConvertConfig::default();
        assert!(!c.sort);
        assert!(!c.dedupe);
        assert!(c.check_triggers);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c: ConvertConfig = toml::from_str("sort = true").unwrap();
        assert!(c.sort);
        assert!(!c.dedupe);
        assert!(c.check_triggers);
    }

    #[test]
    fn flags_only_enable() {
        let c = ConvertConfig { sort: true, ..Default::default() }.with_flags(false, true);
        assert!(c.sort);
        assert!(c.dedupe);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animdata.toml");
        std::fs::write(&path, "dedupe = true\ncheck_triggers = false\n").unwrap();
        let c = ConvertConfig::load(&path).unwrap();
        assert_eq!(c, ConvertConfig { sort: false, dedupe: true, check_triggers: false });
    }

    #[test]
    fn load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("animdata.toml");
        std::fs::write(&path, "sort = \"yes\"").unwrap();
        assert!(ConvertConfig::load(&path).is_err());
        assert!(ConvertConfig::load(&dir.path().join("missing.toml")).is_err());
    }
}
