use std::env;

use eventdates_core::{IdGenerator, ShortIds, UuidIds, DEFAULT_SHORT_ID_LENGTH};

/// How ids for new event dates are generated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStyle {
    /// Short random alphanumeric ids.
    #[default]
    Short,
    /// Random v4 UUIDs.
    Uuid,
}

impl IdStyle {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "short" => Some(IdStyle::Short),
            "uuid" => Some(IdStyle::Uuid),
            _ => None,
        }
    }
}

/// Configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Id style for new event dates (default: short)
    pub id_style: IdStyle,
    /// Length of short ids (default: 9)
    pub id_length: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTDATES_ID_STYLE` - `short` or `uuid` (default: short)
    /// - `EVENTDATES_ID_LENGTH` - Length of short ids (default: 9)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    /// Unparseable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            id_style: lookup("EVENTDATES_ID_STYLE")
                .and_then(|v| IdStyle::parse(&v))
                .unwrap_or_default(),
            id_length: lookup("EVENTDATES_ID_LENGTH")
                .and_then(|v| v.parse().ok())
                .filter(|length| *length > 0)
                .unwrap_or(DEFAULT_SHORT_ID_LENGTH),
        }
    }

    /// Build the id generator this configuration describes.
    pub fn id_generator(&self) -> Box<dyn IdGenerator> {
        match self.id_style {
            IdStyle::Short => Box::new(ShortIds::new(self.id_length)),
            IdStyle::Uuid => Box::new(UuidIds),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_style: IdStyle::default(),
            id_length: DEFAULT_SHORT_ID_LENGTH,
        }
    }
}
