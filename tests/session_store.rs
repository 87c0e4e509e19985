use std::sync::Arc;

use taskgate::session::{FileStore, KeyValueStore, Session};
use tempfile::TempDir;

#[tokio::test]
async fn missing_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("session.json"));
    assert_eq!(store.get("jwtToken").await, None);
}

#[tokio::test]
async fn values_survive_a_new_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("session.json");

    let store = FileStore::new(&path);
    store.set("jwtToken", "abc").await.unwrap();
    store.set("username", "ana").await.unwrap();
    assert!(path.exists());

    let reopened = FileStore::new(&path);
    assert_eq!(reopened.get("jwtToken").await.as_deref(), Some("abc"));
    assert_eq!(reopened.get("username").await.as_deref(), Some("ana"));

    reopened.remove("jwtToken").await.unwrap();
    let again = FileStore::new(&path);
    assert_eq!(again.get("jwtToken").await, None);
    assert_eq!(again.get("username").await.as_deref(), Some("ana"));
}

#[tokio::test]
async fn corrupt_file_is_treated_as_empty_and_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = FileStore::new(&path);
    assert_eq!(store.get("jwtToken").await, None);

    store.set("jwtToken", "abc").await.unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"jwtToken\""));
}

#[tokio::test]
async fn session_uses_documented_keys() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    let session = Session::new(Arc::new(FileStore::new(&path)));

    session.login("abc", "ana", Some("u1")).await.unwrap();

    let stored: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(stored["jwtToken"], "abc");
    assert_eq!(stored["username"], "ana");
    assert_eq!(stored["userId"], "u1");

    session.logout().await.unwrap();
    let stored: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(stored, serde_json::json!({}));
}

#[cfg(unix)]
#[tokio::test]
async fn session_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    FileStore::new(&path).set("jwtToken", "abc").await.unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[cfg(unix)]
#[tokio::test]
async fn existing_readable_file_is_tightened() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "{}").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    FileStore::new(&path).set("jwtToken", "abc").await.unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
