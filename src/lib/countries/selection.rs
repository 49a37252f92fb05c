use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::record::{Cca2, CountryRecord, NameEntry};

/// Change event handed to the presentation layer when a row is picked.
/// The flag reference is left out; the presenter renders it from the code.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountrySelection {
    pub cca2: Cca2,
    /// Display name in the requested translation.
    pub name: String,
    pub names: IndexMap<String, NameEntry>,
    #[serde(flatten)]
    pub extra: JsonMap<String, JsonValue>,
}

impl CountrySelection {
    pub(crate) fn new(cca2: Cca2, name: &str, record: &CountryRecord) -> CountrySelection {
        CountrySelection {
            cca2,
            name: name.to_string(),
            names: record.names().clone(),
            extra: record.extra().clone(),
        }
    }
}
