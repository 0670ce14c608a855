use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use bccr_core::{BccrError, FetchedTable, SeriesId, TableSource, YearBounds};

/// Instruction for how a fetch should behave for a given identifier.
#[derive(Clone)]
pub enum MockBehavior {
    /// Return the provided table immediately.
    Return(FetchedTable),
    /// Fail immediately with the provided error.
    Fail(BccrError),
    /// Hang indefinitely (simulate a stalled connection).
    Hang,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<SeriesId, MockBehavior>,
    requests: Vec<(SeriesId, YearBounds)>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for fetches of `id`.
    pub async fn set_behavior(&self, id: SeriesId, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(id, behavior);
    }

    /// Return a copy of the fetch log, in call order.
    pub async fn requests(&self) -> Vec<(SeriesId, YearBounds)> {
        let guard = self.state.lock().await;
        guard.requests.clone()
    }

    /// Clear all configured behaviors and the fetch log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.requests.clear();
    }
}

/// A table source that defers all behavior to an external controller.
///
/// Identifiers without a rule fail with `SourceUnavailable`.
pub struct DynamicMockSource {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockSource {
    /// Create a new dynamic mock source and its controller.
    #[must_use]
    pub fn new_with_controller(name: &'static str) -> (Arc<dyn TableSource>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn TableSource>, controller)
    }
}

#[async_trait]
impl TableSource for DynamicMockSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn fetch(&self, id: SeriesId, years: YearBounds) -> Result<FetchedTable, BccrError> {
        // Snapshot the rule without holding the lock across the hang.
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push((id, years));
            guard.rules.get(&id).cloned()
        };
        match behavior {
            Some(MockBehavior::Return(t)) => Ok(t),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => {
                std::future::pending::<()>().await;
                unreachable!()
            }
            None => Err(BccrError::source_unavailable(id, "no behavior configured")),
        }
    }
}
