use super::*;

#[test]
fn messages_name_the_missing_piece() {
    assert_eq!(HostError::ElementNotFound("clock".into()).to_string(), "element not found: #clock");
    assert_eq!(HostError::NoContext.to_string(), "canvas has no 2d context");
}

#[test]
fn theme_errors_convert_and_keep_their_cause() {
    let theme_err = dial::theme::Theme::from_json("{").unwrap_err();
    let err = HostError::from(theme_err);
    assert_eq!(err.error_code(), "E_THEME");
    assert!(err.to_string().starts_with("invalid builtin theme: theme parse error"));
}

#[test]
fn codes_are_distinct() {
    let codes = [
        HostError::NoWindow.error_code(),
        HostError::NoDocument.error_code(),
        HostError::ElementNotFound(String::new()).error_code(),
        HostError::NoContext.error_code(),
        HostError::Js(String::new()).error_code(),
    ];
    for (i, a) in codes.iter().enumerate() {
        for b in &codes[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
