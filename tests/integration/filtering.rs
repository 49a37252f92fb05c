use lib::countries::CountryIndex;
use lib::dataset::DatasetVariant;
use pretty_assertions::assert_eq;

use crate::utils::{bundled_index, display_names};

#[test]
fn empty_query_lists_all_countries_in_dataset_order() {
    let index = bundled_index(DatasetVariant::Emoji);
    let all = index.filter_by_prefix("", "eng");
    assert_eq!(all.len(), index.len());
    assert_eq!(display_names(&all[..3], "eng"), vec!["Afghanistan", "Albania", "Algeria"]);
    assert_eq!(index.code_of(all[all.len() - 1]).unwrap().as_str(), "VN");
}

#[test]
fn english_prefix_search() {
    let index = bundled_index(DatasetVariant::Emoji);
    assert_eq!(
        display_names(&index.filter_by_prefix("united", "eng"), "eng"),
        vec!["United Kingdom", "United States"]
    );
    assert_eq!(
        display_names(&index.filter_by_prefix("Ger", "eng"), "eng"),
        vec!["Germany"]
    );
    assert_eq!(
        display_names(&index.filter_by_prefix("f", "eng"), "eng"),
        vec!["Finland", "France"]
    );
    assert!(index.filter_by_prefix("xyz", "eng").is_empty());
}

#[test]
fn french_prefix_search_folds_accents_case() {
    let index = bundled_index(DatasetVariant::Image);
    assert_eq!(
        display_names(&index.filter_by_prefix("ÉTATS", "fra"), "fra"),
        vec!["États-Unis"]
    );
    assert_eq!(
        display_names(&index.filter_by_prefix("é", "fra"), "fra"),
        vec!["Égypte", "États-Unis"]
    );
    assert_eq!(
        display_names(&index.filter_by_prefix("al", "fra"), "fra"),
        vec!["Albanie", "Algérie", "Allemagne"]
    );
}

#[test]
fn unknown_translation_skips_every_record() {
    let index = bundled_index(DatasetVariant::Emoji);
    // Bundled records have no "common" key, so "jpn" resolves no names.
    assert!(index.filter_by_prefix("ja", "jpn").is_empty());
    assert_eq!(index.filter_by_prefix("", "jpn").len(), index.len());
}

#[test]
fn filtering_leaves_the_index_untouched() {
    let index = bundled_index(DatasetVariant::Emoji);
    let before: Vec<_> = index.records().to_vec();
    let first = index.filter_by_prefix("s", "eng");
    let second = index.filter_by_prefix("s", "eng");
    assert_eq!(first, second);
    assert_eq!(before.as_slice(), index.records());
}

#[test]
fn external_dataset_example() {
    let index = CountryIndex::from_json(
        r#"{"FR": {"name": {"eng": {"common": "France"}}},
            "DE": {"name": {"eng": {"common": "Germany"}}},
            "FI": {"name": {"eng": {"common": "Finland"}}}}"#,
    )
    .unwrap();
    assert_eq!(
        display_names(&index.filter_by_prefix("f", "eng"), "eng"),
        vec!["France", "Finland"]
    );
    assert_eq!(
        display_names(&index.filter_by_prefix("de", "eng"), "eng"),
        vec!["Germany"]
    );
    assert!(index.filter_by_prefix("z", "eng").is_empty());
}

#[test]
fn bundled_records_offer_english_and_french() {
    let index = bundled_index(DatasetVariant::Image);
    for record in index.records() {
        assert_eq!(record.translations().collect::<Vec<_>>(), vec!["eng", "fra"]);
    }
}
