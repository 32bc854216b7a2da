//! Configuration file layering.

use page2prompt::Page2PromptConfig;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_file_overrides_bundled_defaults() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "[gateway]\nmodel = \"llama-3.1-8b\"\ntimeout_secs = 30\n\n[storage]\ndata_dir = \"/srv/p2p\""
    )
    .unwrap();

    let config = Page2PromptConfig::from_file(file.path()).unwrap();

    assert_eq!(config.gateway.model, "llama-3.1-8b");
    assert_eq!(config.gateway.timeout(), Duration::from_secs(30));
    assert!((config.gateway.temperature - 0.7).abs() < f32::EPSILON);
    assert_eq!(config.storage.subjects_file, "subjects.csv");
    assert_eq!(
        config.storage.styles_path(),
        std::path::PathBuf::from("/srv/p2p/styles.csv")
    );
}

#[test]
fn test_malformed_file_is_config_error() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[gateway\nmodel = ").unwrap();

    let err = Page2PromptConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
}
