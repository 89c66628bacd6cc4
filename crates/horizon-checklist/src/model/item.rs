//! Selectable items and the catalog that lists them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{CheckListError, Result};

/// One selectable entry.
///
/// An item is identified by its `value`; `display_text` is what the label
/// shows. Two external representations are accepted when deserializing:
///
/// ```
/// use horizon_checklist::model::Item;
///
/// let bare: Item = serde_json::from_str(r#""eu-west""#).unwrap();
/// assert_eq!(bare.display_text(), "eu-west");
///
/// let pair: Item =
///     serde_json::from_str(r#"{"value": "eu-west", "displayText": "Ireland"}"#).unwrap();
/// assert_eq!(pair.value(), "eu-west");
/// assert_eq!(pair.display_text(), "Ireland");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "ItemRepr")]
pub struct Item {
    value: String,
    #[serde(rename = "displayText")]
    display_text: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ItemRepr {
    Bare(String),
    Pair {
        value: String,
        #[serde(rename = "displayText", alias = "display_text")]
        display_text: String,
    },
}

impl From<ItemRepr> for Item {
    fn from(repr: ItemRepr) -> Self {
        match repr {
            ItemRepr::Bare(value) => Item::bare(value),
            ItemRepr::Pair {
                value,
                display_text,
            } => Item::new(value, display_text),
        }
    }
}

impl Item {
    /// Creates an item with distinct value and display text.
    pub fn new(value: impl Into<String>, display_text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            display_text: display_text.into(),
        }
    }

    /// Creates an item whose display text is its value.
    pub fn bare(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            display_text: value.clone(),
            value,
        }
    }

    /// The identifying value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The text shown next to the checkbox.
    pub fn display_text(&self) -> &str {
        &self.display_text
    }
}

impl From<&str> for Item {
    fn from(value: &str) -> Self {
        Item::bare(value)
    }
}

impl From<(&str, &str)> for Item {
    fn from((value, display_text): (&str, &str)) -> Self {
        Item::new(value, display_text)
    }
}

/// An immutable, ordered snapshot of the available items.
///
/// Catalogs are replaced wholesale, never patched. Cloning is cheap and
/// shares the underlying slice; two catalogs compare equal when their items
/// are equal, whether or not they share storage (use [`ptr_eq`](Self::ptr_eq)
/// for identity).
///
/// Item values are unique within a catalog: [`new`](Self::new) rejects
/// duplicates, [`dedup`](Self::dedup) keeps the first occurrence.
#[derive(Clone, PartialEq, Eq)]
pub struct ItemCatalog {
    items: Arc<[Item]>,
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl ItemCatalog {
    /// Creates an empty catalog.
    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    /// Creates a catalog, rejecting duplicate values.
    pub fn new<I>(items: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let items: Vec<Item> = items.into_iter().map(Into::into).collect();
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if let Some(&first) = seen.get(item.value()) {
                return Err(CheckListError::DuplicateValue {
                    value: item.value().to_string(),
                    first,
                    second: index,
                });
            }
            seen.insert(item.value(), index);
        }
        Ok(Self {
            items: Arc::from(items),
        })
    }

    /// Creates a catalog, dropping every item whose value already appeared.
    pub fn dedup<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Item>,
    {
        let mut seen = std::collections::HashSet::new();
        let items: Vec<Item> = items
            .into_iter()
            .map(Into::into)
            .filter(|item: &Item| seen.insert(item.value().to_string()))
            .collect();
        Self {
            items: Arc::from(items),
        }
    }

    /// Decodes a catalog from a JSON array of bare strings and/or
    /// `{"value", "displayText"}` objects.
    pub fn from_json(json: &serde_json::Value) -> Result<Self> {
        let entries = json.as_array().ok_or_else(|| {
            CheckListError::malformed("available", format!("expected an array, found {}", kind_of(json)))
        })?;
        let items = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                Item::deserialize(entry).map_err(|err| {
                    CheckListError::malformed("available", format!("entry {index}: {err}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(items)
    }

    /// Parses JSON text and decodes it with [`from_json`](Self::from_json).
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_json(&serde_json::from_str(text)?)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Items in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Item values in catalog order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Item::value)
    }

    /// Position of the item with `value`.
    pub fn position(&self, value: &str) -> Option<usize> {
        self.items.iter().position(|item| item.value() == value)
    }

    /// Returns `true` if an item with `value` exists.
    pub fn contains(&self, value: &str) -> bool {
        self.position(value).is_some()
    }

    /// The items as a slice.
    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Returns `true` if both catalogs share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl fmt::Debug for ItemCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a ItemCatalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub(crate) fn kind_of(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_and_pair_items() {
        let catalog = ItemCatalog::from_json(&json!([
            "a",
            {"value": "b", "displayText": "Bee"},
            {"value": "c", "display_text": "Sea"},
        ]))
        .unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(0), Some(&Item::new("a", "a")));
        assert_eq!(catalog.get(1).unwrap().display_text(), "Bee");
        assert_eq!(catalog.get(2).unwrap().display_text(), "Sea");
        assert_eq!(catalog.values().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_non_sequence_is_malformed() {
        let err = ItemCatalog::from_json(&json!({"value": "a"})).unwrap_err();
        assert!(matches!(
            err,
            CheckListError::MalformedBinding { binding: "available", .. }
        ));
        assert!(err.to_string().contains("found an object"));
    }

    #[test]
    fn test_malformed_entry_reports_index() {
        let err = ItemCatalog::from_json(&json!(["a", 7])).unwrap_err();
        assert!(err.to_string().contains("entry 1"), "{err}");
    }

    #[test]
    fn test_duplicates_rejected() {
        let err = ItemCatalog::new(["a", "b", "a"]).unwrap_err();
        match err {
            CheckListError::DuplicateValue {
                value,
                first,
                second,
            } => {
                assert_eq!(value, "a");
                assert_eq!((first, second), (0, 2));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicates_compare_by_value_not_text() {
        let err = ItemCatalog::new([("a", "First"), ("a", "Second")]);
        assert!(err.is_err());
    }

    #[test]
    fn test_dedup_keeps_first() {
        let catalog = ItemCatalog::dedup([("a", "First"), ("b", "B"), ("a", "Second")]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(0).unwrap().display_text(), "First");
    }

    #[test]
    fn test_equality_and_identity() {
        let first = ItemCatalog::new(["a", "b"]).unwrap();
        let same_content = ItemCatalog::new(["a", "b"]).unwrap();
        let shared = first.clone();

        assert_eq!(first, same_content);
        assert!(!first.ptr_eq(&same_content));
        assert!(first.ptr_eq(&shared));
    }

    #[test]
    fn test_item_serializes_as_pair() {
        let text = serde_json::to_string(&Item::bare("x")).unwrap();
        assert_eq!(text, r#"{"value":"x","displayText":"x"}"#);
    }

    #[test]
    fn test_from_json_str() {
        let catalog = ItemCatalog::from_json_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(catalog.position("b"), Some(1));
        assert!(ItemCatalog::from_json_str("[").is_err());
    }
}
