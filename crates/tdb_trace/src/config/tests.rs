use super::*;

fn vars<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |name: &str| {
        pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_string())
    }
}

#[test]
fn config_default() {
    let config = TraceConfig::default();
    assert_eq!(config.channels, Channels::all());
    assert_eq!(config.wrap.line_wrap(), 100);
    assert_eq!(config.color, ColorMode::Auto);
    assert_eq!(config.default_frames, 1);
    assert!(!config.wrap_messages);
}

#[test]
fn builders() {
    let config = TraceConfig::default()
        .with_channels(Channels::STDERR)
        .with_color(ColorMode::Never)
        .with_default_frames(3)
        .with_wrap_messages(true);
    assert_eq!(config.channels, Channels::STDERR);
    assert_eq!(config.color, ColorMode::Never);
    assert_eq!(config.default_frames, 3);
    assert!(config.wrap_messages);
}

#[test]
fn with_line_wrap_validates() {
    assert_eq!(
        TraceConfig::default().with_line_wrap(40).map(|c| c.wrap.line_wrap()),
        Ok(40)
    );
    assert_eq!(
        TraceConfig::default().with_line_wrap(0),
        Err(WrapError::InvalidLineWrap(0))
    );
}

#[test]
fn from_vars_empty_is_default() {
    assert_eq!(TraceConfig::from_vars(|_| None), Ok(TraceConfig::default()));
}

#[test]
fn from_vars_reads_everything() {
    let config = TraceConfig::from_vars(vars(&[
        ("TDB_TRACE", "err"),
        ("TDB_LINE_WRAP", "72"),
        ("TDB_COLOR", "always"),
        ("TDB_FRAMES", "0"),
    ]));
    assert_eq!(
        config,
        Ok(TraceConfig {
            channels: Channels::STDERR,
            wrap: WrapConfig::new(72).unwrap_or_default(),
            color: ColorMode::Always,
            default_frames: 0,
            wrap_messages: false,
        })
    );
}

#[test]
fn from_vars_trace_switch_values() {
    for (value, expected) in [
        ("1", Channels::all()),
        ("On", Channels::all()),
        ("0", Channels::empty()),
        ("off", Channels::empty()),
        ("false", Channels::empty()),
        ("stdout", Channels::STDOUT),
    ] {
        let config = TraceConfig::from_vars(vars(&[("TDB_TRACE", value)]));
        assert_eq!(config.map(|c| c.channels), Ok(expected), "TDB_TRACE={value}");
    }
}

#[test]
fn from_vars_rejects_bad_values() {
    assert_eq!(
        TraceConfig::from_vars(vars(&[("TDB_TRACE", "maybe")])),
        Err(ConfigError::InvalidValue {
            var: TRACE_VAR,
            value: "maybe".to_string()
        })
    );
    assert_eq!(
        TraceConfig::from_vars(vars(&[("TDB_LINE_WRAP", "wide")])),
        Err(ConfigError::InvalidValue {
            var: LINE_WRAP_VAR,
            value: "wide".to_string()
        })
    );
    assert_eq!(
        TraceConfig::from_vars(vars(&[("TDB_LINE_WRAP", "0")])),
        Err(ConfigError::Wrap(WrapError::InvalidLineWrap(0)))
    );
    assert!(TraceConfig::from_vars(vars(&[("TDB_COLOR", "red")])).is_err());
    assert!(TraceConfig::from_vars(vars(&[("TDB_FRAMES", "-1")])).is_err());
}

#[test]
fn config_error_messages() {
    assert_eq!(
        invalid(COLOR_VAR, "red").to_string(),
        "invalid value \"red\" for TDB_COLOR"
    );
    assert_eq!(
        ConfigError::from(WrapError::InvalidLineWrap(0)).to_string(),
        "line wrap must occur after one or more characters (got 0)"
    );
}
