//! Generator configuration.
//!
//! A generation call is driven by two inline configuration strings:
//!
//! - the **type map**, `Name=path,Name=path,...`, overriding the module path
//!   an external type is imported from, and
//! - the **enum list**, `Name[:mode],Name[:mode],...`, naming enums that are
//!   declared elsewhere and optionally selecting how they render.
//!
//! Both are parsed into a [`GeneratorConfig`], which can also be loaded from
//! (and merged with) a JSON file.

use serde::{Deserialize, Serialize};

use crate::FxHashMap;
use crate::error::ConfigError;

/// Mode token selecting the `keyof` enum rendering.
pub const KEYOF_MODE: &str = "keyof";

/// Rendering mode configured for a known enum.
///
/// Only [`EnumMode::KeyOf`] changes the output. Any other token is kept as
/// [`EnumMode::Other`] and has no rendering effect.
///
/// # Examples
///
/// ```
/// use cs2ts_core::EnumMode;
///
/// assert_eq!(EnumMode::from_token("keyof"), EnumMode::KeyOf);
/// assert_eq!(EnumMode::from_token(""), EnumMode::Default);
/// assert_eq!(EnumMode::from_token("flags"), EnumMode::Other("flags".to_owned()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EnumMode {
    /// No mode given.
    #[default]
    Default,
    /// Emit `<Name>Enum` plus `type <Name> = Uncapitalize<keyof typeof <Name>Enum>`.
    KeyOf,
    /// An unrecognized mode token, stored verbatim.
    Other(String),
}

impl EnumMode {
    /// Interprets a mode token from the enum list.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "" => Self::Default,
            KEYOF_MODE => Self::KeyOf,
            other => Self::Other(other.to_owned()),
        }
    }

    /// Returns the token this mode was read from.
    #[must_use]
    pub fn as_token(&self) -> &str {
        match self {
            Self::Default => "",
            Self::KeyOf => KEYOF_MODE,
            Self::Other(token) => token,
        }
    }

    /// Returns `true` for the `keyof` rendering.
    #[inline]
    #[must_use]
    pub const fn is_keyof(&self) -> bool {
        matches!(self, Self::KeyOf)
    }
}

impl From<String> for EnumMode {
    fn from(token: String) -> Self {
        Self::from_token(&token)
    }
}

impl From<EnumMode> for String {
    fn from(mode: EnumMode) -> Self {
        mode.as_token().to_owned()
    }
}

/// Configuration for one generation call.
///
/// # Examples
///
/// ```
/// use cs2ts_core::{EnumMode, GeneratorConfig};
///
/// let config = GeneratorConfig::parse("Money=@shared/money", "Color:keyof,Size")?;
/// assert_eq!(config.import_path("Money"), Some("@shared/money"));
/// assert_eq!(config.enum_mode("Color"), Some(&EnumMode::KeyOf));
/// assert!(config.is_known_enum("Size"));
/// # Ok::<(), cs2ts_core::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// External type name to import path override.
    pub known_types: FxHashMap<String, String>,

    /// Enum names declared elsewhere, with their rendering mode.
    pub known_enums: FxHashMap<String, EnumMode>,
}

impl GeneratorConfig {
    /// Parses the inline type-map and enum-list strings.
    ///
    /// Entries are comma separated and trimmed; empty entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MalformedTypeMapping`] for a type-map entry
    /// without `=` or with an empty name, and
    /// [`ConfigError::MalformedEnumEntry`] for an enum entry with an empty name.
    pub fn parse(type_map: &str, enums: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            known_types: parse_type_map(type_map)?,
            known_enums: parse_enum_list(enums)?,
        })
    }

    /// Loads a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the text is not a valid configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Overlays `other` on top of `self`; entries in `other` win.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.known_types.extend(other.known_types);
        self.known_enums.extend(other.known_enums);
        self
    }

    /// Returns the configured import path for an external type, if any.
    #[inline]
    #[must_use]
    pub fn import_path(&self, name: &str) -> Option<&str> {
        self.known_types.get(name).map(String::as_str)
    }

    /// Returns `true` if `name` was listed in the enum configuration.
    #[inline]
    #[must_use]
    pub fn is_known_enum(&self, name: &str) -> bool {
        self.known_enums.contains_key(name)
    }

    /// Returns the rendering mode configured for an enum.
    #[inline]
    #[must_use]
    pub fn enum_mode(&self, name: &str) -> Option<&EnumMode> {
        self.known_enums.get(name)
    }
}

fn entries(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|entry| !entry.is_empty())
}

fn parse_type_map(list: &str) -> Result<FxHashMap<String, String>, ConfigError> {
    let mut map = FxHashMap::default();
    for entry in entries(list) {
        let (name, path) = entry
            .split_once('=')
            .ok_or_else(|| ConfigError::MalformedTypeMapping(entry.to_owned()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::MalformedTypeMapping(entry.to_owned()));
        }
        map.insert(name.to_owned(), path.trim().to_owned());
    }
    Ok(map)
}

fn parse_enum_list(list: &str) -> Result<FxHashMap<String, EnumMode>, ConfigError> {
    let mut map = FxHashMap::default();
    for entry in entries(list) {
        let (name, mode) = entry.split_once(':').unwrap_or((entry, ""));
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::MalformedEnumEntry(entry.to_owned()));
        }
        map.insert(name.to_owned(), EnumMode::from_token(mode));
    }
    Ok(map)
}
