use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::errors::{DatasetError, NameResolutionError};

pub const DEFAULT_TRANSLATION: &str = "eng";
/// Key of the secondary name shape, `name.common`, next to the translations.
pub const COMMON_KEY: &str = "common";

/// Two-letter uppercase country code (cca2).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Cca2(String);

impl Cca2 {
    /// Dataset keys must already be uppercase.
    pub fn from_dataset_key(key: &str) -> Result<Cca2, DatasetError> {
        if key.len() == 2 && key.bytes().all(|b| b.is_ascii_uppercase()) {
            Ok(Cca2(key.to_string()))
        } else {
            Err(DatasetError::InvalidCode {
                code: key.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Cca2 {
    type Err = DatasetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cca2::from_dataset_key(&s.trim().to_ascii_uppercase())
    }
}

impl Borrow<str> for Cca2 {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cca2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Cca2 {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Cca2 {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameForms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official: Option<String>,
    #[serde(flatten)]
    pub other: JsonMap<String, JsonValue>,
}

/// A translation maps either to a set of name forms or directly to a name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameEntry {
    Plain(String),
    Forms(NameForms),
}

impl NameEntry {
    /// Empty names count as missing.
    pub fn common(&self) -> Option<&str> {
        let name = match self {
            NameEntry::Plain(name) => Some(name.as_str()),
            NameEntry::Forms(forms) => forms.common.as_deref(),
        };
        name.filter(|n| !n.is_empty())
    }
}

/// One country as it appears in the dataset. The code is the dataset key and
/// is held by the index, not by the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    #[serde(rename = "name")]
    names: IndexMap<String, NameEntry>,
    #[serde(default)]
    flag: String,
    #[serde(flatten)]
    extra: JsonMap<String, JsonValue>,
}

impl CountryRecord {
    pub fn new(names: IndexMap<String, NameEntry>, flag: &str) -> CountryRecord {
        CountryRecord {
            names,
            flag: flag.to_string(),
            extra: JsonMap::new(),
        }
    }

    pub fn names(&self) -> &IndexMap<String, NameEntry> {
        &self.names
    }

    /// Opaque flag reference: a URI or an emoji short name.
    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// Dataset fields the core does not interpret (currency, callingCode...).
    pub fn extra(&self) -> &JsonMap<String, JsonValue> {
        &self.extra
    }

    /// `names[translation].common`, then `names.common`. An empty translation
    /// means `DEFAULT_TRANSLATION`.
    pub fn display_name(&self, translation: &str) -> Result<&str, NameResolutionError> {
        let translation = match translation.trim() {
            "" => DEFAULT_TRANSLATION,
            t => t,
        };
        self.names
            .get(translation)
            .and_then(NameEntry::common)
            .or_else(|| self.names.get(COMMON_KEY).and_then(NameEntry::common))
            .ok_or_else(|| NameResolutionError {
                translation: translation.to_string(),
            })
    }

    /// Translation keys present on the record, in dataset order.
    pub fn translations(&self) -> impl Iterator<Item = &str> {
        self.names
            .keys()
            .map(String::as_str)
            .filter(|k| *k != COMMON_KEY)
    }
}
