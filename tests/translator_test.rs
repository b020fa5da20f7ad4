//! Integration tests for translator construction, language selection and lookups
//!
//! These run against the JSON fixtures in `tests/fixtures/translations`.

mod helpers;

use std::collections::HashMap;
use std::thread;

use assert_matches::assert_matches;
use helpers::*;
use langtable::{LangTableError, Translator};
use unic_langid::langid;

fn create_test_translator() -> Translator {
    init_test_env();
    Translator::create_or_abort(&fixtures_path(), english_and_lithuanian())
}

#[test]
fn test_translator_creation() {
    let translator = create_test_translator();

    assert_eq!(translator.current_language(), &langid!("en"));
    assert_eq!(translator.translation("greeting"), "Hello");
    assert_eq!(translator.supported_languages().len(), 2);
}

#[test]
#[should_panic(expected = "unable to load translations")]
fn test_create_or_abort_panics_on_missing_source() {
    init_test_env();
    Translator::create_or_abort("/nonexistent-langtable-dir/", english_and_lithuanian());
}

#[test]
fn test_missing_source_is_source_unavailable() {
    init_test_env();
    let result = Translator::create("/nonexistent-langtable-dir/", english_and_lithuanian());

    assert_matches!(
        result,
        Err(LangTableError::SourceUnavailable { language, .. }) if language == langid!("en")
    );
}

#[test]
fn test_malformed_json_is_malformed_data() {
    init_test_env();
    let result = Translator::create(&fixtures_path(), vec![langid!("da")]);

    assert_matches!(result, Err(LangTableError::MalformedData { .. }));
}

#[test]
fn test_nested_and_non_string_values_are_malformed_data() {
    init_test_env();

    assert_matches!(
        Translator::create(&fixtures_path(), vec![langid!("en"), langid!("de")]),
        Err(LangTableError::MalformedData { language, .. }) if language == langid!("de")
    );
    assert_matches!(
        Translator::create(&fixtures_path(), vec![langid!("fr")]),
        Err(LangTableError::MalformedData { language, .. }) if language == langid!("fr")
    );
}

#[test]
fn test_empty_language_list_rejected() {
    init_test_env();
    assert_matches!(
        Translator::create(&fixtures_path(), vec![]),
        Err(LangTableError::Config(_))
    );
}

#[test]
fn test_select_language_leaves_original_unchanged() {
    let translator = create_test_translator();
    let lithuanian = translator.select_language("lt");

    assert_eq!(translator.current_language(), &langid!("en"));
    assert_eq!(lithuanian.current_language(), &langid!("lt"));
    assert_eq!(translator.translation("greeting"), "Hello");
    assert_eq!(lithuanian.translation("greeting"), "Labas");
}

#[test]
fn test_select_language_from_header() {
    let translator = create_test_translator();
    let lithuanian = translator.select_language_from_header("en;q=0.8,lt;q=0.9");

    assert_eq!(lithuanian.current_language(), &langid!("lt"));
    assert_eq!(lithuanian.translation("greeting"), "Labas");
}

#[test]
fn test_select_language_accepts_preference_list() {
    let translator = create_test_translator();

    let selected = translator.select_language("lt-LT,en");
    assert_eq!(selected.current_language(), &langid!("lt"));
    assert_eq!(selected.translation("greeting"), "Labas");
    assert_eq!(translator.select_language("en;q=0.8,lt;q=0.9").current_language(), &langid!("lt"));
}

#[test]
fn test_unsupported_language_selects_default() {
    let translator = create_test_translator();

    assert_eq!(translator.select_language("da").current_language(), &langid!("en"));
    assert_eq!(translator.select_language_from_header("ja, de;q=0.4").current_language(), &langid!("en"));
    assert_eq!(translator.select_language_from_header("garbage;;q=").current_language(), &langid!("en"));
}

#[test]
fn test_translation_matches_stored_table() {
    let translator = create_test_translator();

    for code in ["en", "lt"] {
        let selected = translator.select_language(code);
        for (key, value) in selected.translations() {
            assert_eq!(&selected.translation(key), value);
        }
    }
}

#[test]
fn test_translation_is_idempotent() {
    let translator = create_test_translator().select_language("lt");
    assert_eq!(translator.translation("farewell"), translator.translation("farewell"));
    assert_eq!(translator.translation("missing"), "");
}

#[test]
fn test_translations_for_current_language() {
    let translator = create_test_translator();
    let translations = translator.translations();

    assert_eq!(translations["greeting"], "Hello");
    assert_eq!(translations["farewell"], "Bye");
}

#[test]
fn test_parametrized_translation() {
    let translator = create_test_translator();
    let mut params = HashMap::new();
    params.insert("name".to_string(), "Ann".to_string());
    params.insert("count".to_string(), "3".to_string());
    params.insert("Total".to_string(), "ignored".to_string());

    assert_eq!(translator.parametrized_translation("greeting_named", &params), "Hello Ann");
    assert_eq!(
        translator.parametrized_translation("order_summary", &params),
        "Ann ordered 3 items, {Total} due"
    );

    params.remove("name");
    assert_eq!(translator.parametrized_translation("greeting_named", &params), "Hello ");
}

#[test]
fn test_shared_base_across_threads() {
    let base = create_test_translator();

    let handles: Vec<_> = ["lt", "en", "lt-LT", "da"]
        .into_iter()
        .map(|code| {
            let base = base.clone();
            thread::spawn(move || {
                let selected = base.select_language(code);
                (selected.current_language().clone(), selected.translation("greeting"))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results[0], (langid!("lt"), "Labas".to_string()));
    assert_eq!(results[1], (langid!("en"), "Hello".to_string()));
    assert_eq!(results[2], (langid!("lt"), "Labas".to_string()));
    assert_eq!(results[3], (langid!("en"), "Hello".to_string()));
    assert_eq!(base.current_language(), &langid!("en"));
}

#[test]
fn test_each_construction_reloads_sources() {
    let dir = TranslationDir::new().with_file("en", r#"{"greeting": "Hello"}"#);
    let first = Translator::create(&dir.base_path(), vec![langid!("en")]).unwrap();

    let dir = dir.with_file("en", r#"{"greeting": "Hi"}"#);
    let second = Translator::create(&dir.base_path(), vec![langid!("en")]).unwrap();

    assert_eq!(first.translation("greeting"), "Hello");
    assert_eq!(second.translation("greeting"), "Hi");
    assert!(!first.shares_store_with(&second));
}

#[tokio::test]
async fn test_create_async() {
    init_test_env();
    let translator = Translator::create_async(&fixtures_path(), english_and_lithuanian())
        .await
        .expect("Failed to load fixtures");

    assert_eq!(translator.select_language("lt").translation("farewell"), "Viso gero");

    let result = Translator::create_async(&fixtures_path(), vec![langid!("en"), langid!("da")]).await;
    assert_matches!(result, Err(LangTableError::MalformedData { .. }));
}
