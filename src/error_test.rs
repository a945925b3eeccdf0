use super::*;

#[test]
fn missing_track_message() {
    assert_eq!(SliderError::MissingTrack.to_string(), "no track element found in slider container");
}

#[test]
fn config_error_converts_into_slider_error() {
    let err: SliderError = ConfigError::Invalid { field: "settleMs", reason: "must be finite" }.into();
    assert!(matches!(err, SliderError::Config(ConfigError::Invalid { field: "settleMs", .. })));
    assert_eq!(err.to_string(), "invalid slider config: invalid settleMs: must be finite");
}

#[test]
fn json_error_converts_into_config_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").expect_err("malformed");
    let err: ConfigError = json_err.into();
    assert!(err.to_string().starts_with("malformed config json: "));
}

#[test]
fn dom_error_carries_message() {
    assert_eq!(SliderError::Dom("listener rejected".into()).to_string(), "dom operation failed: listener rejected");
}
