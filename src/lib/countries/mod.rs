//! Country dataset indexing: name resolution, prefix filtering and the
//! record → code mapping behind a country picker.

mod errors;
mod index;
mod record;
mod selection;

pub use errors::{CountryError, DatasetError, NameResolutionError, UnknownRecordError};
pub use index::CountryIndex;
pub use record::{Cca2, CountryRecord, NameEntry, NameForms, COMMON_KEY, DEFAULT_TRANSLATION};
pub use selection::CountrySelection;
