// --- File: crates/barberbook_pages/src/remote.rs ---
use barberbook_common::ApiError;
use std::future::Future;
use tracing::warn;

/// A piece of server data as one page section sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum Remote<T> {
    Idle,
    Loading,
    Ready(T),
    /// Text to show in place of the data.
    Failed(String),
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::Idle
    }
}

impl<T> Remote<T> {
    /// Runs `fetch`, passing through `Loading`, and ends in `Ready` or in
    /// `Failed` with the server's message (or `fallback`).
    pub async fn load<F>(&mut self, fetch: F, fallback: &str)
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        *self = Remote::Loading;
        *self = match fetch.await {
            Ok(value) => Remote::Ready(value),
            Err(err) => {
                warn!("{}: {}", fallback, err);
                Remote::Failed(err.user_message(fallback))
            }
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Remote::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn ready_mut(&mut self) -> Option<&mut T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Remote::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Remote<Vec<T>> {
    /// Items if loaded, else an empty slice.
    pub fn items(&self) -> &[T] {
        self.ready().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Appends to a loaded list, or starts one.
    pub fn push(&mut self, item: T) {
        match self.ready_mut() {
            Some(items) => items.push(item),
            None => *self = Remote::Ready(vec![item]),
        }
    }

    /// Puts an item first in a loaded list, or starts one.
    pub fn push_front(&mut self, item: T) {
        match self.ready_mut() {
            Some(items) => items.insert(0, item),
            None => *self = Remote::Ready(vec![item]),
        }
    }

    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        if let Some(items) = self.ready_mut() {
            items.retain(keep);
        }
    }
}

/// Outcome message of a user action, shown next to its trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

impl Feedback {
    pub fn success(message: &str) -> Self {
        Feedback::Success(message.to_string())
    }

    pub fn from_error(err: &ApiError, fallback: &str) -> Self {
        warn!("{}: {}", fallback, err);
        Feedback::Error(err.user_message(fallback))
    }

    pub fn text(&self) -> &str {
        match self {
            Feedback::Success(text) | Feedback::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Feedback::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_load_success_and_failure() {
        let mut remote: Remote<Vec<u32>> = Remote::default();
        assert_eq!(remote, Remote::Idle);

        remote
            .load(async { Ok::<_, ApiError>(vec![1, 2]) }, "falhou")
            .await;
        assert_eq!(remote.items(), &[1, 2]);

        remote
            .load(
                async { Err(ApiError::status(500, json!({"message": "banco fora do ar"}))) },
                "falhou",
            )
            .await;
        assert_eq!(remote.error(), Some("banco fora do ar"));
        assert!(remote.items().is_empty());

        remote
            .load(async { Err(ApiError::Network("timeout".to_string())) }, "falhou")
            .await;
        assert_eq!(remote.error(), Some("falhou"));
    }

    #[test]
    fn test_list_helpers() {
        let mut remote: Remote<Vec<&str>> = Remote::Failed("x".to_string());
        remote.push_front("b");
        remote.push_front("a");
        remote.push("c");
        assert_eq!(remote.items(), &["a", "b", "c"]);
        remote.retain(|item| *item != "b");
        assert_eq!(remote.items(), &["a", "c"]);
    }
}
