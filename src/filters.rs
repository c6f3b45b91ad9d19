//! Filter mapping rendered into URL query parameters.
//!
//! [`Filters`] is an ordered key/value collection. Keys with null or
//! empty-string values are dropped at render time, dates are formatted as
//! plain `YYYY-MM-DD` calendar dates, and string values are truncated at the
//! first `'T'` so an ISO timestamp degrades to its date part.

use chrono::{DateTime, NaiveDate, Utc};

// ---------------------------------------------------------------------------
// FilterValue
// ---------------------------------------------------------------------------

/// A single scalar or date filter value.
///
/// `Null` marks a filter the caller declared but left unset; it renders to
/// nothing, same as an empty string.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    Null,
}

impl FilterValue {
    /// Render to a query parameter value, or `None` if the value is absent.
    ///
    /// Strings are cut at the first `'T'`: the API takes calendar dates, and
    /// callers have been observed passing full ISO timestamps for them.
    pub fn render(&self) -> Option<String> {
        match self {
            FilterValue::Str(s) if s.is_empty() => None,
            FilterValue::Str(s) => {
                Some(s.split('T').next().unwrap_or_default().to_string())
            }
            FilterValue::Int(n) => Some(n.to_string()),
            FilterValue::Float(x) => Some(x.to_string()),
            FilterValue::Bool(b) => Some(b.to_string()),
            FilterValue::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            FilterValue::Null => None,
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Str(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Str(s)
    }
}

impl From<i64> for FilterValue {
    fn from(n: i64) -> Self {
        FilterValue::Int(n)
    }
}

impl From<i32> for FilterValue {
    fn from(n: i32) -> Self {
        FilterValue::Int(n as i64)
    }
}

impl From<u32> for FilterValue {
    fn from(n: u32) -> Self {
        FilterValue::Int(n as i64)
    }
}

impl From<f64> for FilterValue {
    fn from(x: f64) -> Self {
        FilterValue::Float(x)
    }
}

impl From<bool> for FilterValue {
    fn from(b: bool) -> Self {
        FilterValue::Bool(b)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(d: NaiveDate) -> Self {
        FilterValue::Date(d)
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(dt: DateTime<Utc>) -> Self {
        FilterValue::Date(dt.date_naive())
    }
}

impl<T: Into<FilterValue>> From<Option<T>> for FilterValue {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => FilterValue::Null,
        }
    }
}

// ---------------------------------------------------------------------------
// Filters
// ---------------------------------------------------------------------------

/// Ordered filter mapping, built by chaining and rendered once per request.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use sellerstats_sdk::Filters;
///
/// let filters = Filters::new()
///     .set("dateFrom", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap())
///     .set("dateTo", "2024-03-31T23:59:59")
///     .page(2);
///
/// let pairs = filters.render();
/// assert_eq!(pairs[0], ("dateFrom".to_string(), "2024-03-01".to_string()));
/// assert_eq!(pairs[1], ("dateTo".to_string(), "2024-03-31".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Filters {
    entries: Vec<(String, FilterValue)>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a filter, replacing any earlier value under the same key.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
        self
    }

    /// Set the `dateFrom` range bound.
    pub fn date_from(self, date: impl Into<FilterValue>) -> Self {
        self.set("dateFrom", date)
    }

    /// Set the `dateTo` range bound.
    pub fn date_to(self, date: impl Into<FilterValue>) -> Self {
        self.set("dateTo", date)
    }

    /// Set an explicit page number, overriding the default of 1.
    pub fn page(self, page: u32) -> Self {
        self.set("page", page)
    }

    /// Set an explicit page size, overriding the default of 10.
    pub fn limit(self, limit: u32) -> Self {
        self.set("limit", limit)
    }

    /// True if `key` is present and renders a non-empty value.
    pub fn has(&self, key: &str) -> bool {
        self.entries
            .iter()
            .any(|(k, v)| k == key && v.render().is_some())
    }

    /// Copy of these filters with `dateFrom`/`dateTo` removed.
    ///
    /// Used by the stocks retry path, which re-issues the request with every
    /// filter except the date range.
    pub fn without_date_range(&self) -> Filters {
        Filters {
            entries: self
                .entries
                .iter()
                .filter(|(k, _)| k != "dateFrom" && k != "dateTo")
                .cloned()
                .collect(),
        }
    }

    /// Render to query pairs in insertion order, dropping absent values.
    pub fn render(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.render().map(|rendered| (k.clone(), rendered)))
            .collect()
    }
}
