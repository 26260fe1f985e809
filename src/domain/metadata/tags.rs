// SPDX-License-Identifier: MPL-2.0
//! Raw tag containers produced by a tag decoder.
//!
//! A [`RawMetadataMap`] maps tag identifiers to owned [`TagValue`]s. GPS tags
//! live in a nested [`GpsMap`] stored under the reserved [`GPS_INFO`] key.
//! Keys fall back to the numeric identifier when no symbolic name is known, so
//! any tag set can be represented.

use std::collections::BTreeMap;
use std::fmt;

/// Reserved key under which the GPS sub-block is stored.
pub const GPS_INFO: &str = "GPSInfo";

// =============================================================================
// TagKey
// =============================================================================

/// Identifier of a decoded tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TagKey {
    /// Symbolic name resolved from a tag table (e.g. `"Make"`).
    Named(String),
    /// Raw numeric identifier of a tag with no known name.
    Numeric(u16),
}

impl TagKey {
    /// Creates a named key.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        TagKey::Named(name.into())
    }

    /// Returns the symbolic name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            TagKey::Named(name) => Some(name),
            TagKey::Numeric(_) => None,
        }
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagKey::Named(name) => f.write_str(name),
            TagKey::Numeric(id) => write!(f, "{id}"),
        }
    }
}

impl From<&str> for TagKey {
    fn from(name: &str) -> Self {
        TagKey::Named(name.to_string())
    }
}

impl From<u16> for TagKey {
    fn from(id: u16) -> Self {
        TagKey::Numeric(id)
    }
}

// =============================================================================
// Ratio
// =============================================================================

/// A signed or unsigned rational number widened to `i64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    pub num: i64,
    pub denom: i64,
}

impl Ratio {
    #[must_use]
    pub const fn new(num: i64, denom: i64) -> Self {
        Self { num, denom }
    }

    /// Converts to `f64`. Returns `None` for a zero denominator.
    #[must_use]
    pub fn to_f64(self) -> Option<f64> {
        if self.denom == 0 {
            None
        } else {
            Some(self.num as f64 / self.denom as f64)
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.denom)
    }
}

// =============================================================================
// TagValue
// =============================================================================

/// Owned value of a decoded tag.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// ASCII text, with trailing NUL padding removed.
    Text(String),
    /// BYTE, SHORT or LONG components.
    Unsigned(Vec<u32>),
    /// SBYTE, SSHORT or SLONG components.
    Signed(Vec<i32>),
    /// RATIONAL or SRATIONAL components.
    Rational(Vec<Ratio>),
    /// FLOAT or DOUBLE components.
    Float(Vec<f64>),
    /// UNDEFINED or otherwise opaque data.
    Bytes(Vec<u8>),
}

impl TagValue {
    /// Builds a rational value from `(numerator, denominator)` pairs.
    #[must_use]
    pub fn rationals<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        TagValue::Rational(
            parts
                .into_iter()
                .map(|(num, denom)| Ratio::new(num, denom))
                .collect(),
        )
    }

    /// Builds a text value.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        TagValue::Text(value.into())
    }

    /// Number of components held by this value.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            TagValue::Text(s) => usize::from(!s.is_empty()),
            TagValue::Unsigned(v) => v.len(),
            TagValue::Signed(v) => v.len(),
            TagValue::Rational(v) => v.len(),
            TagValue::Float(v) => v.len(),
            TagValue::Bytes(v) => v.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns component `index` as a finite `f64`.
    ///
    /// Text and opaque bytes are never numeric. Zero-denominator rationals and
    /// non-finite floats yield `None`.
    #[must_use]
    pub fn number_at(&self, index: usize) -> Option<f64> {
        let value = match self {
            TagValue::Unsigned(v) => v.get(index).map(|n| f64::from(*n)),
            TagValue::Signed(v) => v.get(index).map(|n| f64::from(*n)),
            TagValue::Rational(v) => v.get(index).and_then(|r| r.to_f64()),
            TagValue::Float(v) => v.get(index).copied(),
            TagValue::Text(_) | TagValue::Bytes(_) => None,
        }?;
        value.is_finite().then_some(value)
    }

    /// Returns the text content, trimmed. Empty text yields `None`.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(s) => {
                let trimmed = s.trim_matches(|c: char| c == '\0' || c.is_whitespace());
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{item}")?;
            }
            Ok(())
        }

        match self {
            TagValue::Text(_) => f.write_str(self.as_text().unwrap_or_default()),
            TagValue::Unsigned(v) => join(f, v),
            TagValue::Signed(v) => join(f, v),
            TagValue::Rational(v) => join(f, v),
            TagValue::Float(v) => join(f, v),
            TagValue::Bytes(v) => write!(f, "<{} bytes>", v.len()),
        }
    }
}

// =============================================================================
// GpsMap
// =============================================================================

/// GPS sub-block: GPS tag name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GpsMap {
    entries: BTreeMap<TagKey, TagValue>,
}

impl GpsMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<TagKey>, value: TagValue) {
        self.entries.insert(key.into(), value);
    }

    /// Looks up a GPS tag by symbolic name (e.g. `"GPSLatitude"`).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.entries.get(&TagKey::named(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TagKey, &TagValue)> {
        self.entries.iter()
    }
}

// =============================================================================
// RawMetadataMap
// =============================================================================

/// Flat tag map with an optional nested GPS block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMetadataMap {
    tags: BTreeMap<TagKey, TagValue>,
    gps: Option<GpsMap>,
}

impl RawMetadataMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a tag. A key equal to [`GPS_INFO`] is ignored; use
    /// [`insert_gps`](Self::insert_gps) for the GPS block.
    pub fn insert(&mut self, key: impl Into<TagKey>, value: TagValue) {
        let key = key.into();
        if key.name() == Some(GPS_INFO) {
            return;
        }
        self.tags.insert(key, value);
    }

    /// Stores the GPS block under the reserved key, replacing any previous one.
    pub fn insert_gps(&mut self, gps: GpsMap) {
        self.gps = Some(gps);
    }

    /// Mutable access to the GPS block, creating it if absent.
    pub fn gps_mut(&mut self) -> &mut GpsMap {
        self.gps.get_or_insert_with(GpsMap::new)
    }

    /// Looks up a flat tag by symbolic name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.tags.get(&TagKey::named(name))
    }

    /// Looks up a flat tag by key, including numeric keys.
    #[must_use]
    pub fn get_key(&self, key: &TagKey) -> Option<&TagValue> {
        self.tags.get(key)
    }

    /// Returns the GPS block stored under [`GPS_INFO`].
    #[must_use]
    pub fn gps(&self) -> Option<&GpsMap> {
        self.gps.as_ref()
    }

    /// Returns `true` when neither flat tags nor a GPS block are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty() && self.gps.is_none()
    }

    /// Number of flat tags, not counting the GPS block.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&TagKey, &TagValue)> {
        self.tags.iter()
    }
}
