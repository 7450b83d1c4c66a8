//! Event stream formats
//!
//! A format renders a recorded event stream as text. Formats are looked up by
//! name in an [`EventFormatRegistry`], the way the CLI selects its output.

use crate::error::ConvertError;
use crate::formats::{JsonFormat, TraceFormat};
use crate::ir::events::Event;
use std::collections::HashMap;

/// Trait for event stream formats
///
/// # Examples
///
/// ```ignore
/// struct CountFormat;
///
/// impl EventFormat for CountFormat {
///     fn name(&self) -> &str {
///         "count"
///     }
///
///     fn write(&self, events: &[Event]) -> Result<String, ConvertError> {
///         Ok(events.len().to_string())
///     }
/// }
/// ```
pub trait EventFormat: Send + Sync {
    /// The name of this format (e.g., "trace", "json")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// Render an event stream
    fn write(&self, events: &[Event]) -> Result<String, ConvertError>;
}

/// Registry of event stream formats
pub struct EventFormatRegistry {
    formats: HashMap<String, Box<dyn EventFormat>>,
}

impl EventFormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        EventFormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: EventFormat + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn EventFormat, ConvertError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| ConvertError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available formats (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Render events with the named format
    pub fn write(&self, events: &[Event], format: &str) -> Result<String, ConvertError> {
        self.get(format)?.write(events)
    }

    /// Create a registry with the built-in formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(TraceFormat);
        registry.register(JsonFormat);
        registry
    }
}

impl Default for EventFormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
