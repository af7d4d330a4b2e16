use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::{Category, CategoryFilter};

/// Paragraph delimiter inside `aboutText`.
pub const PARAGRAPH_DELIMITER: &str = "\n\n";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_subtitle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about_text: Option<String>,
}

impl AboutContent {
    /// Splits `about_text` into its paragraphs. `None` when there is no text.
    pub fn paragraphs(&self) -> Option<Vec<String>> {
        let text = self.about_text.as_deref()?;
        if text.trim().is_empty() {
            return None;
        }
        Some(
            text.split(PARAGRAPH_DELIMITER)
                .map(str::to_string)
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    pub image: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default)]
    pub category: Category,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl PortfolioItem {
    pub fn new(image: impl Into<String>, title: impl Into<String>, category: Category) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            category,
        }
    }
}

/// Items in source order. Filtering derives views from it and never mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PortfolioCollection(Vec<PortfolioItem>);

impl PortfolioCollection {
    pub fn new(items: Vec<PortfolioItem>) -> Self {
        Self(items)
    }

    pub fn items(&self) -> &[PortfolioItem] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn count(&self, filter: CategoryFilter) -> usize {
        self.0
            .iter()
            .filter(|item| filter.matches(item.category))
            .count()
    }
}

impl From<Vec<PortfolioItem>> for PortfolioCollection {
    fn from(items: Vec<PortfolioItem>) -> Self {
        Self(items)
    }
}

/// A portfolio document in one of its two accepted layouts, `[...]` or
/// `{ "items": [...] }`. Entries stay raw until [`into_collection`] so a bad
/// entry only costs itself.
///
/// [`into_collection`]: PortfolioDocument::into_collection
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioDocument {
    entries: Vec<Value>,
}

/// An entry that could not be read as a [`PortfolioItem`].
#[derive(Debug)]
pub struct RejectedEntry {
    pub position: usize,
    pub error: serde_json::Error,
}

impl PortfolioDocument {
    /// `None` when the value has neither layout.
    pub fn from_value(value: Value) -> Option<Self> {
        let entries = match value {
            Value::Array(entries) => entries,
            Value::Object(mut fields) => match fields.remove("items") {
                Some(Value::Array(entries)) => entries,
                _ => return None,
            },
            _ => return None,
        };
        Some(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decodes entries one at a time, keeping source order.
    pub fn into_collection(self) -> (PortfolioCollection, Vec<RejectedEntry>) {
        let mut items = Vec::with_capacity(self.entries.len());
        let mut rejected = Vec::new();
        for (position, entry) in self.entries.into_iter().enumerate() {
            match serde_json::from_value::<PortfolioItem>(entry) {
                Ok(item) => items.push(item),
                Err(error) => rejected.push(RejectedEntry { position, error }),
            }
        }
        (PortfolioCollection(items), rejected)
    }
}
