use barberbook_common::models::CurrentUser;
use barberbook_common::SessionService;
use barberbook_config::SessionConfig;
use barberbook_session::{
    open_session, storage_path, watch_storage_file, FileStorage, SessionProvider, SessionStore,
};
use std::sync::Arc;
use std::time::Duration;

fn customer() -> CurrentUser {
    CurrentUser {
        id: "c1".to_string(),
        name: "Carla".to_string(),
        email: "carla@example.com".to_string(),
        is_provider: false,
    }
}

fn file_provider(path: &std::path::Path) -> Arc<SessionProvider> {
    Arc::new(SessionProvider::new(SessionStore::new(Arc::new(
        FileStorage::new(path),
    ))))
}

#[test]
fn test_file_session_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let provider = file_provider(&path);
    provider.save("token-123", &customer()).unwrap();

    // A fresh process sees the same session
    let reopened = file_provider(&path);
    let session = reopened.read().expect("session should persist");
    assert_eq!(session.token, "token-123");
    assert_eq!(session.user, customer());

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["accessToken"], "token-123");
    let stored_user: CurrentUser =
        serde_json::from_str(raw["currentUser"].as_str().unwrap()).unwrap();
    assert_eq!(stored_user, customer());

    reopened.clear().unwrap();
    assert!(provider.read().is_none());
}

#[test]
fn test_configured_path_wins() {
    let config = SessionConfig {
        path: Some("/tmp/barberbook-test/storage.json".to_string()),
        watch: false,
    };
    assert_eq!(
        storage_path(&config).unwrap(),
        std::path::PathBuf::from("/tmp/barberbook-test/storage.json")
    );
}

#[test]
fn test_open_session_without_watch() {
    let dir = tempfile::tempdir().unwrap();
    let config = SessionConfig {
        path: Some(dir.path().join("s.json").to_string_lossy().into_owned()),
        watch: false,
    };
    let (provider, watch) = open_session(&config);
    assert!(watch.is_none());
    assert!(provider.read().is_none());
    provider.save("t", &customer()).unwrap();
    assert_eq!(provider.read().map(|s| s.token), Some("t".to_string()));
}

#[tokio::test]
async fn test_changes_from_another_process_are_published() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let watched = file_provider(&path);
    let _watch = watch_storage_file(watched.clone(), &path, Duration::from_millis(50)).unwrap();
    let mut rx = watched.subscribe();

    // The "other tab": a separate store over the same file
    let other = file_provider(&path);
    other.save("from-elsewhere", &customer()).unwrap();

    tokio::time::timeout(Duration::from_secs(10), rx.changed())
        .await
        .expect("watcher should publish the external change")
        .unwrap();
    assert_eq!(
        rx.borrow().as_ref().map(|s| s.token.clone()),
        Some("from-elsewhere".to_string())
    );
}
