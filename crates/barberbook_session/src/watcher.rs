// --- File: crates/barberbook_session/src/watcher.rs ---

//! Follows changes another process makes to the storage file.
//!
//! The parent directory is watched rather than the file itself: storage
//! writes replace the file by rename, which would drop a watch placed on
//! the old inode.

use notify::{watcher, DebouncedEvent, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc::channel;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::SessionError;
use crate::provider::SessionProvider;

/// Default debounce delay of the watcher.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(250);

/// Keeps the watcher alive. Dropping it stops the watch thread.
pub struct SessionWatch {
    _watcher: RecommendedWatcher,
}

/// Starts watching `path` and calls [`SessionProvider::refresh`] on every
/// change in its directory.
pub fn watch_storage_file(
    provider: Arc<SessionProvider>,
    path: &Path,
    debounce: Duration,
) -> Result<SessionWatch, SessionError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir()?,
    };
    std::fs::create_dir_all(&dir)?;

    let (tx, rx) = channel();
    let mut watcher = watcher(tx, debounce)?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;
    info!("Watching session storage in {}", dir.display());

    thread::Builder::new()
        .name("session-watch".to_string())
        .spawn(move || {
            // recv fails once the watcher (and with it the sender) is dropped
            while let Ok(event) = rx.recv() {
                match event {
                    DebouncedEvent::Error(err, _) => warn!("Session watch error: {}", err),
                    DebouncedEvent::NoticeWrite(_) | DebouncedEvent::NoticeRemove(_) => {}
                    event => {
                        debug!("Storage change detected: {:?}", event);
                        if provider.refresh() {
                            info!("Session changed outside this process");
                        }
                    }
                }
            }
            debug!("Session watch stopped");
        })?;

    Ok(SessionWatch { _watcher: watcher })
}
