// Configuration loading from files

use htmlpress::config::Config;
use htmlpress::Compressor;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "compressor:\n  protected_tags: [pre]\nlogging:\n  level: debug"
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.compressor.protected_tags, ["pre"]);
    assert_eq!(config.logging.level, "debug");

    // only <pre> is protected now, so script content collapses
    let compressor = Compressor::new(config.compressor).unwrap();
    assert_eq!(
        compressor.compress("<script>a  b</script><pre>a  b</pre>"),
        "<script>ab</script><pre>a  b</pre>"
    );
}

#[test]
fn test_missing_file_is_config_error() {
    let err = Config::from_file("/nonexistent/htmlpress.yaml").unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
