use pretty_assertions::assert_eq;
use script_fs::{Encoding, ReadOptions};

#[test]
fn test_default_options() {
    let options = ReadOptions::default();
    assert_eq!(options.encoding, Encoding::Utf8);
    assert_eq!(options.max_bytes, None);
}

#[test]
fn test_load_options_from_toml() {
    let options: ReadOptions = toml::from_str(
        r#"
encoding = "latin-1"
max_bytes = 4096
"#,
    )
    .unwrap();

    assert_eq!(
        options,
        ReadOptions::new()
            .with_encoding(Encoding::Latin1)
            .with_max_bytes(4096)
    );
}

#[test]
fn test_missing_fields_use_defaults() {
    let options: ReadOptions = toml::from_str(r#"encoding = "utf-8-sig""#).unwrap();
    assert_eq!(options.encoding, Encoding::Utf8Sig);
    assert_eq!(options.max_bytes, None);
}

#[test]
fn test_unknown_encoding_rejected() {
    let result: Result<ReadOptions, _> = toml::from_str(r#"encoding = "shift-jis""#);
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Unknown text encoding"));
}

#[test]
fn test_options_serialize_with_labels() {
    let options = ReadOptions::new().with_encoding(Encoding::Utf8Sig);
    let text = toml::to_string(&options).unwrap();
    assert!(text.contains(r#"encoding = "utf-8-sig""#));
}
