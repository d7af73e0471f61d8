use oprail::types::{Error, Path};

#[test]
fn prefixed_prepends_path_atoms() {
    let error = Error::code("missing").with_path(Path::single("id"));
    let prefix = Path::root().pushed("items").pushed(0usize);
    let prefixed = error.prefixed(&prefix);

    assert_eq!(prefixed.path().len(), 3);
    assert_eq!(prefixed.code_ref(), Some("missing"));
}

#[test]
fn code_and_message_both_render_in_display() {
    let error = Error::code("invalid").with_message("must be positive");
    let rendered = format!("{error}");
    assert!(rendered.contains("invalid"));
    assert!(rendered.contains("must be positive"));
}

#[test]
fn tokens_round_trip() {
    let error = Error::code("included").with_token("allowed_values", "a");
    assert_eq!(error.tokens().get(&"allowed_values".into()).and_then(|v| v.as_str()), Some("a"));
}

#[test]
fn equality_ignores_producer() {
    let a = Error::code("blank");
    let b = Error::code("blank");
    assert_eq!(a, b);
}
