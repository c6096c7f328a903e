use super::*;

#[test]
fn config_default() {
    let config = WrapConfig::default();
    assert_eq!(config.line_wrap(), 100);
    assert_eq!(config.line_wrap(), DEFAULT_LINE_WRAP);
}

#[test]
fn config_new_valid() {
    assert_eq!(WrapConfig::new(1).map(|c| c.line_wrap()), Ok(1));
    assert_eq!(WrapConfig::new(80).map(|c| c.line_wrap()), Ok(80));
}

#[test]
fn config_new_zero_rejected() {
    assert_eq!(WrapConfig::new(0), Err(WrapError::InvalidLineWrap(0)));
}

#[test]
fn set_line_wrap_reflected_by_getter() {
    let mut config = WrapConfig::default();
    assert_eq!(config.set_line_wrap(42), Ok(()));
    assert_eq!(config.line_wrap(), 42);
}

#[test]
fn set_line_wrap_zero_keeps_previous() {
    let mut config = WrapConfig::default();
    assert_eq!(config.set_line_wrap(7), Ok(()));
    assert_eq!(config.set_line_wrap(0), Err(WrapError::InvalidLineWrap(0)));
    assert_eq!(config.line_wrap(), 7);
}

#[test]
fn error_message() {
    assert_eq!(
        WrapError::InvalidLineWrap(0).to_string(),
        "line wrap must occur after one or more characters (got 0)"
    );
}
