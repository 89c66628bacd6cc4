//! Checklist configuration.
//!
//! Configuration is plain data, deserializable from TOML. Every field has a
//! default, so an empty document is a valid configuration:
//!
//! ```
//! use horizon_checklist::config::{ChangeDetection, CheckListConfig};
//!
//! let config = CheckListConfig::from_toml_str(r#"
//! change_detection = "exact"
//! id_prefix = "plugin"
//! "#).unwrap();
//!
//! assert_eq!(config.change_detection, ChangeDetection::Exact);
//! assert_eq!(CheckListConfig::from_toml_str("").unwrap(), CheckListConfig::default());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CheckListError, Result};
use crate::logging::targets;
use crate::model::{ItemCatalog, SelectionSet};

/// How a rebind is judged to need reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeDetection {
    /// Only a change in length counts (the default).
    ///
    /// A catalog rebind that keeps the same number of items does not rebuild
    /// the rows, and a selection rebind that keeps the same number of values
    /// does not update check marks, even if the contents differ.
    #[default]
    Length,
    /// Any change counts.
    ///
    /// Catalogs are compared item by item; every selection rebind re-marks
    /// the rows.
    Exact,
}

impl ChangeDetection {
    /// Whether moving from `previous` to `current` requires a rebuild.
    pub fn catalog_changed(self, current: &ItemCatalog, previous: &ItemCatalog) -> bool {
        match self {
            Self::Length => current.len() != previous.len(),
            Self::Exact => current != previous,
        }
    }

    /// Whether moving from `previous` to `current` requires re-marking.
    pub fn selection_changed(self, current: &SelectionSet, previous: &SelectionSet) -> bool {
        match self {
            Self::Length => current.len() != previous.len(),
            Self::Exact => true,
        }
    }
}

/// Settings for a [`CheckList`](crate::widget::CheckList).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckListConfig {
    /// Rebind change detection policy.
    pub change_detection: ChangeDetection,
    /// Prefix of the element id given to every rendered row.
    pub id_prefix: String,
}

impl Default for CheckListConfig {
    fn default() -> Self {
        Self {
            change_detection: ChangeDetection::default(),
            id_prefix: "checklist-item".to_string(),
        }
    }
}

impl CheckListConfig {
    /// Parses a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|err| CheckListError::config_io(path, err))?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "configuration loaded");
        Ok(config)
    }

    /// Serializes the configuration to TOML text.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<()> {
        if self.id_prefix.is_empty() {
            return Err(CheckListError::InvalidConfig(
                "id_prefix must not be empty".to_string(),
            ));
        }
        if self.id_prefix.chars().any(char::is_whitespace) {
            return Err(CheckListError::InvalidConfig(format!(
                "id_prefix '{}' must not contain whitespace",
                self.id_prefix
            )));
        }
        Ok(())
    }

    /// Sets the change detection policy.
    pub fn with_change_detection(mut self, change_detection: ChangeDetection) -> Self {
        self.change_detection = change_detection;
        self
    }

    /// Sets the element id prefix.
    pub fn with_id_prefix(mut self, id_prefix: impl Into<String>) -> Self {
        self.id_prefix = id_prefix.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CheckListConfig::default();
        assert_eq!(config.change_detection, ChangeDetection::Length);
        assert_eq!(config.id_prefix, "checklist-item");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = CheckListConfig::from_toml_str(r#"id_prefix = "region""#).unwrap();
        assert_eq!(config.id_prefix, "region");
        assert_eq!(config.change_detection, ChangeDetection::Length);
    }

    #[test]
    fn test_unknown_policy_is_a_parse_error() {
        let err = CheckListConfig::from_toml_str(r#"change_detection = "psychic""#).unwrap_err();
        assert!(matches!(err, CheckListError::ConfigParse(_)));
    }

    #[test]
    fn test_invalid_prefix() {
        assert!(matches!(
            CheckListConfig::from_toml_str(r#"id_prefix = """#),
            Err(CheckListError::InvalidConfig(_))
        ));
        assert!(CheckListConfig::default()
            .with_id_prefix("two words")
            .validate()
            .is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "change_detection = \"exact\"").unwrap();

        let config = CheckListConfig::load(file.path()).unwrap();
        assert_eq!(config.change_detection, ChangeDetection::Exact);
    }

    #[test]
    fn test_load_missing_file() {
        let err = CheckListConfig::load("/nonexistent/checklist.toml").unwrap_err();
        assert!(matches!(err, CheckListError::ConfigIo { .. }));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = CheckListConfig::default()
            .with_change_detection(ChangeDetection::Exact)
            .with_id_prefix("row");
        let text = config.to_toml_string().unwrap();
        assert_eq!(CheckListConfig::from_toml_str(&text).unwrap(), config);
        assert!(text.contains("change_detection = \"exact\""), "{text}");
    }

    #[test]
    fn test_serialize_error_is_reported() {
        // A bare integer is not a TOML document.
        let err: CheckListError = toml::to_string(&42).unwrap_err().into();
        assert!(matches!(err, CheckListError::ConfigSerialize(_)));
        assert!(err.to_string().starts_with("Failed to serialize configuration"));
    }

    #[test]
    fn test_length_policy_ignores_same_length_swaps() {
        let previous = ItemCatalog::new(["a", "b"]).unwrap();
        let swapped = ItemCatalog::new(["c", "d"]).unwrap();
        assert!(!ChangeDetection::Length.catalog_changed(&swapped, &previous));
        assert!(ChangeDetection::Exact.catalog_changed(&swapped, &previous));

        let before = SelectionSet::new(["a"]);
        let after = SelectionSet::new(["b"]);
        assert!(!ChangeDetection::Length.selection_changed(&after, &before));
        assert!(ChangeDetection::Exact.selection_changed(&after, &before));
    }
}
