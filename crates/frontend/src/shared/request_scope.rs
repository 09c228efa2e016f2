use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

/// Per-component owner of in-flight requests.
///
/// Each `begin` supersedes the previous token; `cancel` (on teardown)
/// invalidates every token. Responses whose token is no longer current are
/// dropped instead of being applied to the view.
#[derive(Clone, Debug, Default)]
pub struct RequestScope {
    generation: Arc<AtomicU64>,
    cancelled: Arc<AtomicBool>,
}

#[derive(Clone, Debug)]
pub struct RequestToken {
    generation: u64,
    scope: RequestScope,
}

impl RequestScope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestToken {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        RequestToken {
            generation,
            scope: self.clone(),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl RequestToken {
    pub fn is_current(&self) -> bool {
        !self.scope.is_cancelled()
            && self.scope.generation.load(Ordering::SeqCst) == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_supersedes_older() {
        let scope = RequestScope::new();
        let first = scope.begin();
        assert!(first.is_current());
        let second = scope.begin();
        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_cancel_invalidates_all() {
        let scope = RequestScope::new();
        let token = scope.begin();
        scope.cancel();
        assert!(!token.is_current());
        assert!(!scope.begin().is_current());
    }
}
