//! Paginator configuration: raw host inputs and their normalized form

mod coerce;

pub use coerce::{coerce_positive, is_valid_page_count, parse_integer};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::PaginationError;

/// Page selected when the host supplies none
pub const DEFAULT_PAGE_ID: usize = 1;

/// Configuration as supplied by the host, before normalization.
///
/// Fields are kept as loosely typed JSON values because hosts hand over
/// whatever their bindings hold: numbers, numeric strings, `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawConfig {
    #[serde(alias = "pages")]
    pub total_pages: Value,
    pub current_page_id: Value,
    #[serde(alias = "visibleRangeLimit")]
    pub range_limit: Value,
}

impl RawConfig {
    /// Create a configuration with only a page count
    pub fn new(total_pages: impl Into<Value>) -> Self {
        Self {
            total_pages: total_pages.into(),
            ..Self::default()
        }
    }

    pub fn with_current_page(mut self, current_page_id: impl Into<Value>) -> Self {
        self.current_page_id = current_page_id.into();
        self
    }

    pub fn with_range_limit(mut self, range_limit: impl Into<Value>) -> Self {
        self.range_limit = range_limit.into();
        self
    }

    /// Parse a configuration object from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Validate the page count and coerce every field.
    pub fn normalize(&self) -> Result<PageConfig, PaginationError> {
        if !is_valid_page_count(&self.total_pages) {
            return Err(PaginationError::InvalidPageCount);
        }
        let total_pages =
            coerce_positive(&self.total_pages, None).ok_or(PaginationError::InvalidPageCount)?;
        let range_limit = coerce_positive(&self.range_limit, None);
        let current_page_id = coerce_positive(&self.current_page_id, Some(DEFAULT_PAGE_ID))
            .unwrap_or(DEFAULT_PAGE_ID)
            .min(total_pages);

        Ok(PageConfig {
            total_pages,
            current_page_id,
            range_limit,
        })
    }

    /// Overlay the configuration fields of a change set.
    ///
    /// The selection is not touched here; the caller decides which page
    /// anchors the rebuild.
    pub fn merge(&mut self, changes: &ConfigChanges) {
        if let Some(total_pages) = &changes.total_pages {
            self.total_pages = total_pages.clone();
        }
        if let Some(range_limit) = &changes.range_limit {
            self.range_limit = range_limit.clone();
        }
    }
}

/// Normalized configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Number of pages, always at least 1
    pub total_pages: usize,
    /// Selected page, within `1..=total_pages`
    pub current_page_id: usize,
    /// Maximum pages in the visible window; `None` shows every page
    pub range_limit: Option<usize>,
}

/// A batch of changes to externally owned values.
///
/// A field that is present (even as `null`) counts as changed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigChanges {
    #[serde(alias = "pages", deserialize_with = "present")]
    pub total_pages: Option<Value>,
    #[serde(alias = "visibleRangeLimit", deserialize_with = "present")]
    pub range_limit: Option<Value>,
    pub current_page_id: Option<SelectionChange>,
}

impl ConfigChanges {
    pub fn with_total_pages(mut self, total_pages: impl Into<Value>) -> Self {
        self.total_pages = Some(total_pages.into());
        self
    }

    pub fn with_range_limit(mut self, range_limit: impl Into<Value>) -> Self {
        self.range_limit = Some(range_limit.into());
        self
    }

    pub fn with_selection(mut self, current: impl Into<Value>, previous: impl Into<Value>) -> Self {
        self.current_page_id = Some(SelectionChange {
            current: current.into(),
            previous: previous.into(),
        });
        self
    }

    /// Whether the batch changes the page count or window size
    pub fn touches_config(&self) -> bool {
        self.total_pages.is_some() || self.range_limit.is_some()
    }
}

/// An externally driven selection change
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectionChange {
    #[serde(alias = "currentValue")]
    pub current: Value,
    #[serde(alias = "previousValue")]
    pub previous: Value,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_clamps_current_page() {
        let config = RawConfig::new(5).with_range_limit(6).with_current_page(7);
        let normalized = config.normalize().unwrap();

        assert_eq!(normalized.total_pages, 5);
        assert_eq!(normalized.range_limit, Some(6));
        assert_eq!(normalized.current_page_id, 5);
    }

    #[test]
    fn test_normalize_defaults() {
        let normalized = RawConfig::new("12").normalize().unwrap();
        assert_eq!(normalized.current_page_id, 1);
        assert_eq!(normalized.range_limit, None);

        let normalized = RawConfig::new(12)
            .with_current_page("garbage")
            .with_range_limit(0)
            .normalize()
            .unwrap();
        assert_eq!(normalized.current_page_id, 1);
        assert_eq!(normalized.range_limit, None);
    }

    #[test]
    fn test_normalize_lenient_inputs() {
        let normalized = RawConfig::new(9.7)
            .with_current_page(-4)
            .with_range_limit("3.9")
            .normalize()
            .unwrap();
        assert_eq!(normalized.total_pages, 9);
        assert_eq!(normalized.current_page_id, 4);
        assert_eq!(normalized.range_limit, Some(3));
    }

    #[test]
    fn test_normalize_rejects_bad_page_count() {
        for total in [Value::Null, json!(0), json!(-5), json!("nghi"), json!("")] {
            assert_eq!(
                RawConfig::new(total).normalize(),
                Err(PaginationError::InvalidPageCount)
            );
        }
    }

    #[test]
    fn test_from_json_accepts_binding_names() {
        let config =
            RawConfig::from_json(r#"{"pages": 15, "currentPageId": "5", "visibleRangeLimit": 4}"#)
                .unwrap();
        assert_eq!(config.total_pages, json!(15));
        assert_eq!(config.current_page_id, json!("5"));
        assert_eq!(config.range_limit, json!(4));

        let config = RawConfig::from_json(r#"{"totalPages": 3}"#).unwrap();
        assert_eq!(config.range_limit, Value::Null);
    }

    #[test]
    fn test_changes_present_null_counts() {
        let changes: ConfigChanges = serde_json::from_str(r#"{"totalPages": null}"#).unwrap();
        assert_eq!(changes.total_pages, Some(Value::Null));
        assert!(changes.touches_config());

        let changes: ConfigChanges = serde_json::from_str(
            r#"{"currentPageId": {"currentValue": 4, "previousValue": 1}}"#,
        )
        .unwrap();
        assert!(!changes.touches_config());
        let selection = changes.current_page_id.unwrap();
        assert_eq!(selection.current, json!(4));
        assert_eq!(selection.previous, json!(1));
    }

    #[test]
    fn test_merge_keeps_untouched_fields() {
        let mut config = RawConfig::new(10).with_current_page(3).with_range_limit(4);
        config.merge(&ConfigChanges::default().with_range_limit(2));

        assert_eq!(config.total_pages, json!(10));
        assert_eq!(config.current_page_id, json!(3));
        assert_eq!(config.range_limit, json!(2));
    }
}
