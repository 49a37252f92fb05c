use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use strum_macros::{Display as EnumToString, EnumString};

use crate::countries::{CountryRecord, DatasetError};

/// Country records keyed by code, in declared order.
pub type RawDataset = IndexMap<String, CountryRecord>;

const COUNTRIES_EMOJI: &str = include_str!("../../data/countries-emoji.json");
const COUNTRIES_IMAGE: &str = include_str!("../../data/countries.json");

/// Which flag representation the bundled records carry. Chosen by the
/// embedding application, usually from platform capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, EnumToString, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DatasetVariant {
    Emoji,
    Image,
}

pub fn bundled(variant: DatasetVariant) -> &'static str {
    match variant {
        DatasetVariant::Emoji => COUNTRIES_EMOJI,
        DatasetVariant::Image => COUNTRIES_IMAGE,
    }
}

pub fn parse(json: &str) -> Result<RawDataset, DatasetError> {
    Ok(serde_json::from_str(json)?)
}

pub fn read_file(path: impl AsRef<Path>) -> Result<RawDataset, DatasetError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&data)
}
