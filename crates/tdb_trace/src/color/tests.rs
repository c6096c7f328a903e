use super::*;

#[test]
fn test_color_mode_auto_with_tty() {
    assert!(ColorMode::Auto.should_use_colors(true));
}

#[test]
fn test_color_mode_auto_without_tty() {
    assert!(!ColorMode::Auto.should_use_colors(false));
}

#[test]
fn test_color_mode_always_ignores_tty() {
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(true));
}

#[test]
fn test_color_mode_never_ignores_tty() {
    assert!(!ColorMode::Never.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_default_is_auto() {
    assert_eq!(ColorMode::default(), ColorMode::Auto);
}

#[test]
fn test_color_mode_parse() {
    assert_eq!(ColorMode::parse("auto"), Some(ColorMode::Auto));
    assert_eq!(ColorMode::parse("ALWAYS"), Some(ColorMode::Always));
    assert_eq!(ColorMode::parse(" never "), Some(ColorMode::Never));
    assert_eq!(ColorMode::parse("sometimes"), None);
}
