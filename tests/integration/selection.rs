use lib::countries::{CountryError, UnknownRecordError};
use lib::dataset::DatasetVariant;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::utils::bundled_index;

#[test]
fn every_record_maps_back_to_its_code() {
    let index = bundled_index(DatasetVariant::Emoji);
    for (code, record) in index.iter() {
        assert_eq!(index.code_of(record).unwrap(), code);
        assert!(std::ptr::eq(index.get(code.as_str()).unwrap(), record));
    }
}

#[test]
fn records_from_another_index_are_rejected() {
    let emoji = bundled_index(DatasetVariant::Emoji);
    let image = bundled_index(DatasetVariant::Image);
    let french = image.get("FR").unwrap();
    assert_eq!(emoji.code_of(french), Err(UnknownRecordError));
}

#[test]
fn tapped_row_becomes_change_event() {
    let index = bundled_index(DatasetVariant::Image);
    let row = index.filter_by_prefix("swi", "eng")[0];
    let selection = index.select(row, "fra").unwrap();
    assert_eq!(
        serde_json::to_value(&selection).unwrap(),
        json!({
            "cca2": "CH",
            "name": "Suisse",
            "names": {
                "eng": {"common": "Switzerland", "official": "Swiss Confederation"},
                "fra": {"common": "Suisse", "official": "Confédération suisse"}
            },
            "currency": "CHF",
            "callingCode": "41"
        })
    );
}

#[test]
fn select_code_accepts_lowercase_and_reports_unknown_codes() {
    let index = bundled_index(DatasetVariant::Emoji);
    assert_eq!(index.select_code("jp", "eng").unwrap().name, "Japan");
    match index.select_code("", "eng") {
        Err(CountryError::UnknownCode { code }) => assert_eq!(code, ""),
        other => panic!("Expected UnknownCode, got {:?}", other),
    }
}

#[test]
fn flags_pass_through_untouched() {
    let emoji = bundled_index(DatasetVariant::Emoji);
    let image = bundled_index(DatasetVariant::Image);
    assert_eq!(emoji.flag_of("br"), Some("flag-br"));
    assert_eq!(image.flag_of("BR"), Some("flags/br.png"));
    assert_eq!(image.flag_of("ZZ"), None);
}
