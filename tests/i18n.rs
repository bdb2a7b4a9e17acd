use pipe_integrity_toolbox::i18n::{keys, resolve_language, Language, Translator};

#[test]
fn unknown_code_falls_back_to_korean() {
    let tr = Translator::new("fr");
    assert_eq!(tr.language(), Language::Ko);
    assert_eq!(tr.language_code(), "ko");
}

#[test]
fn english_translator_reports_language_and_labels() {
    let tr = Translator::new("en-US");
    assert_eq!(tr.language(), Language::En);
    assert_eq!(tr.language_code(), "en");
    assert_eq!(tr.t(keys::LABEL_PASS), "PASS");
}

#[test]
fn cli_language_takes_priority_over_config() {
    assert_eq!(resolve_language("en", Some("ko")), "en");
    assert_eq!(resolve_language("", Some("ko")), "ko");
    assert_eq!(resolve_language("auto", Some("en")), "en");
}
