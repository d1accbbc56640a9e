use super::*;

fn render(use_colors: bool, detail: Option<&str>, suggestion: Option<&str>) -> String {
    let out = ErrorOutput::with_colors(use_colors);
    let mut buf = Vec::new();
    out.write_error(&mut buf, "City", "Unknown city: paris", detail, suggestion);
    String::from_utf8(buf).unwrap()
}

#[test]
fn error_without_colors_basic() {
    assert_eq!(render(false, None, None), "✖ City: Unknown city: paris\n");
}

#[test]
fn error_without_colors_full() {
    let result = render(
        false,
        Some("Expected one of: chicago, new york city, washington"),
        Some("Pass --city chicago"),
    );
    assert_eq!(
        result,
        "✖ City: Unknown city: paris\n  × Expected one of: chicago, new york city, washington\n  help: Pass --city chicago\n"
    );
}

#[test]
fn error_with_colors_wraps_type_in_red() {
    let result = render(true, Some("detail"), None);
    assert!(result.starts_with("\x1b[1m\x1b[31m✖ City:\x1b[0m"));
    assert!(result.contains("\x1b[2m× detail\x1b[0m"));
}

#[test]
fn warning_without_colors() {
    let out = ErrorOutput::with_colors(false);
    let mut buf = Vec::new();
    out.write_warning(&mut buf, "seed ignored");
    assert_eq!(String::from_utf8(buf).unwrap(), "⚠ Warning: seed ignored\n");
}

#[test]
fn info_without_colors() {
    let out = ErrorOutput::with_colors(false);
    let mut buf = Vec::new();
    out.write_info(&mut buf, "Loaded 8 of 8 rows from chicago.csv");
    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "· Loaded 8 of 8 rows from chicago.csv\n"
    );
}

#[test]
fn never_mode_disables_colors() {
    let out = ErrorOutput::new(ColorMode::Never);
    let mut buf = Vec::new();
    out.write_warning(&mut buf, "plain");
    assert!(!String::from_utf8(buf).unwrap().contains('\x1b'));
}
