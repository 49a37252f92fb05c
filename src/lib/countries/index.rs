use std::collections::HashMap;

use crate::{
    dataset::{self, DatasetVariant, RawDataset},
    debug, error, info,
    settings::Settings,
    telemetry::LogKey,
    warn,
};

use super::errors::{CountryError, DatasetError, NameResolutionError, UnknownRecordError};
use super::record::{Cca2, CountryRecord, DEFAULT_TRANSLATION};
use super::selection::CountrySelection;

/// Read-only index over a country dataset.
///
/// `ordered[i]` is the record stored under `codes[i]`, in the dataset's
/// declared order, and `by_code` maps each code back to that position. A
/// record is identified by its address inside `ordered`, so `code_of` only
/// accepts records borrowed from this index.
#[derive(Debug)]
pub struct CountryIndex {
    by_code: HashMap<Cca2, usize>,
    ordered: Vec<CountryRecord>,
    codes: Vec<Cca2>,
}

impl CountryIndex {
    pub fn new(dataset: RawDataset) -> Result<CountryIndex, DatasetError> {
        match Self::build(dataset) {
            Ok(index) => {
                info!(
                    LogKey::DatasetLoaded,
                    countries = index.len(),
                    "Loaded country dataset"
                );
                Ok(index)
            }
            Err(e) => {
                error!(
                    LogKey::DatasetRejected,
                    error = %e,
                    "Country dataset failed validation"
                );
                Err(e)
            }
        }
    }

    fn build(dataset: RawDataset) -> Result<CountryIndex, DatasetError> {
        if dataset.is_empty() {
            return Err(DatasetError::Empty);
        }
        let mut by_code = HashMap::with_capacity(dataset.len());
        let mut ordered = Vec::with_capacity(dataset.len());
        let mut codes = Vec::with_capacity(dataset.len());
        for (key, record) in dataset {
            let code = Cca2::from_dataset_key(&key)?;
            if record.display_name(DEFAULT_TRANSLATION).is_err() {
                return Err(DatasetError::MissingDisplayName {
                    code: key,
                    translation: DEFAULT_TRANSLATION.to_string(),
                });
            }
            by_code.insert(code.clone(), ordered.len());
            codes.push(code);
            ordered.push(record);
        }
        Ok(CountryIndex {
            by_code,
            ordered,
            codes,
        })
    }

    pub fn from_json(json: &str) -> Result<CountryIndex, DatasetError> {
        CountryIndex::new(dataset::parse(json)?)
    }

    pub fn from_variant(variant: DatasetVariant) -> Result<CountryIndex, DatasetError> {
        CountryIndex::from_json(dataset::bundled(variant))
    }

    /// An external `dataset_path` wins over the bundled variant.
    pub fn from_settings(settings: &Settings) -> Result<CountryIndex, DatasetError> {
        match &settings.dataset_path {
            Some(path) => CountryIndex::new(dataset::read_file(path)?),
            None => CountryIndex::from_variant(settings.dataset_variant),
        }
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Records in dataset order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.ordered
    }

    pub fn codes(&self) -> &[Cca2] {
        &self.codes
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Cca2, &CountryRecord)> {
        self.codes.iter().zip(self.ordered.iter())
    }

    /// Case-insensitive lookup. Empty or unknown codes give `None`.
    pub fn get(&self, code: &str) -> Option<&CountryRecord> {
        let code = code.trim().to_ascii_uppercase();
        self.by_code
            .get(code.as_str())
            .map(|&position| &self.ordered[position])
    }

    pub fn flag_of(&self, code: &str) -> Option<&str> {
        self.get(code).map(CountryRecord::flag)
    }

    pub fn resolve_display_name<'a>(
        &self,
        record: &'a CountryRecord,
        translation: &str,
    ) -> Result<&'a str, NameResolutionError> {
        record.display_name(translation)
    }

    /// Records whose display name or code starts with `query`, ignoring
    /// case, in dataset order. An empty query returns every record. Records
    /// without a name in `translation` are skipped.
    ///
    /// Code prefixes match too, so rows can appear whose name does not start
    /// with the query (`"ch"` lists Switzerland next to Chile and China).
    pub fn filter_by_prefix(&self, query: &str, translation: &str) -> Vec<&CountryRecord> {
        let query = fold_case(query.trim());
        if query.is_empty() {
            return self.ordered.iter().collect();
        }
        let matches: Vec<&CountryRecord> = self
            .iter()
            .filter(|(code, record)| match record.display_name(translation) {
                Ok(name) => {
                    fold_case(name).starts_with(&query)
                        || code.as_str().to_ascii_lowercase().starts_with(&query)
                }
                Err(e) => {
                    warn!(
                        LogKey::NameResolutionSkipped,
                        code = code.as_str(),
                        error = %e,
                        "Skipping country without display name"
                    );
                    false
                }
            })
            .map(|(_, record)| record)
            .collect();
        debug!(
            LogKey::FilterApplied,
            query = query.as_str(),
            translation,
            matches = matches.len(),
            "Filtered countries"
        );
        matches
    }

    pub fn code_of(&self, record: &CountryRecord) -> Result<&Cca2, UnknownRecordError> {
        match self.position_of(record) {
            Some(position) => Ok(&self.codes[position]),
            None => {
                error!(
                    LogKey::UnknownRecord,
                    "Record passed to code_of was not taken from this index"
                );
                Err(UnknownRecordError)
            }
        }
    }

    fn position_of(&self, record: &CountryRecord) -> Option<usize> {
        let start = self.ordered.as_ptr() as usize;
        let offset = (record as *const CountryRecord as usize).checked_sub(start)?;
        let position = offset / std::mem::size_of::<CountryRecord>();
        (position < self.ordered.len() && std::ptr::eq(&self.ordered[position], record))
            .then_some(position)
    }

    /// Builds the change event for a picked row.
    pub fn select(
        &self,
        record: &CountryRecord,
        translation: &str,
    ) -> Result<CountrySelection, CountryError> {
        let code = self.code_of(record)?;
        let name = record.display_name(translation)?;
        info!(
            LogKey::SelectionResolved,
            code = code.as_str(),
            "Resolved country selection"
        );
        Ok(CountrySelection::new(code.clone(), name, record))
    }

    pub fn select_code(
        &self,
        code: &str,
        translation: &str,
    ) -> Result<CountrySelection, CountryError> {
        let record = self.get(code).ok_or_else(|| CountryError::UnknownCode {
            code: code.to_string(),
        })?;
        self.select(record, translation)
    }
}

/// Lowercases one character at a time. `str::to_lowercase` picks the final
/// sigma by word position, which would make a cut-off query stop matching.
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}
