//! Vendor-agnostic analytics event model.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// A single attribute value attached to an [`AnalyticsEvent`].
///
/// Serializes untagged so provider adapters can render plain JSON payloads
/// (`"abc"`, `42`, `0.5`, `true`) without a discriminant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AttributeValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// Neutral representation of a business occurrence to be recorded by
/// analytics backends.
///
/// Immutable once constructed: the dispatcher and providers only ever read
/// it, and each concurrent delivery attempt works on its own clone.
///
/// # Design
///
/// - Attribute values are typed ([`AttributeValue`]), not stringly
/// - Stamped with the capture time so backends receive the occurrence time,
///   not the delivery time
/// - Cloneable for sending across async boundaries
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsEvent {
    pub name: String,
    pub attributes: HashMap<String, AttributeValue>,
    pub occurred_at: DateTime<Utc>,
}

impl AnalyticsEvent {
    /// Creates a new event with no attributes, stamped with the current time.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: HashMap::new(),
            occurred_at: Utc::now(),
        }
    }

    /// Adds an attribute, consuming and returning the event.
    ///
    /// # Examples
    ///
    /// ```
    /// use redirect_analytics::domain::event::AnalyticsEvent;
    ///
    /// let event = AnalyticsEvent::new("redirect_click")
    ///     .with_attribute("code", "abc123")
    ///     .with_attribute("cached", true);
    ///
    /// assert_eq!(event.attribute_count(), 2);
    /// ```
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Number of attributes attached to the event.
    ///
    /// Log records reference this count instead of attribute content, so
    /// client metadata never leaks into the dispatch logs.
    pub fn attribute_count(&self) -> usize {
        self.attributes.len()
    }
}
