use super::*;
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = StorageConfig::default();
    assert_eq!(config.db_file, "memos.db");
    assert_eq!(config.blob_dir, "blobs");
    assert!(config.data_dir.is_none());
}

#[test]
fn test_missing_file_yields_defaults() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let config =
        StorageConfig::load(&temp.path().join("nope.json")).expect("missing file is not an error");
    assert_eq!(config, StorageConfig::default());
}

#[test]
fn test_load_partial_file() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("settings.json");
    let mut file = fs::File::create(&path).expect("Failed to create file");
    file.write_all(br#"{"dbFile": "library.db"}"#)
        .expect("Failed to write");

    let config = StorageConfig::load(&path).expect("Failed to load");
    assert_eq!(config.db_file, "library.db");
    assert_eq!(config.blob_dir, "blobs", "unset fields keep defaults");
}

#[test]
fn test_load_full_file() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("settings.json");
    fs::write(
        &path,
        br#"{"dataDir": "/tmp/voicememos", "dbFile": "m.db", "blobDir": "audio"}"#,
    )
    .expect("Failed to write");

    let config = StorageConfig::load(&path).expect("Failed to load");
    assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/voicememos")));
    assert_eq!(config.db_path().unwrap(), PathBuf::from("/tmp/voicememos/m.db"));
    assert_eq!(
        config.blob_dir_path().unwrap(),
        PathBuf::from("/tmp/voicememos/audio")
    );
}

#[test]
fn test_malformed_file_is_parse_error() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join("settings.json");
    fs::write(&path, b"{not json").expect("Failed to write");

    match StorageConfig::load(&path).err().expect("should fail") {
        ConfigError::ParseError(_) => {}
        other => panic!("Expected ParseError, got {:?}", other),
    }
}

#[test]
fn test_with_data_dir() {
    let config = StorageConfig::with_data_dir("/data/vault");
    assert_eq!(
        config.db_path().unwrap(),
        PathBuf::from("/data/vault/memos.db")
    );
}
