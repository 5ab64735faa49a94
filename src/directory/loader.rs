use std::cell::Cell;
use std::rc::Rc;

use gloo_net::http::Request;
use log::{debug, error, info};

use super::error::LoadError;
use super::record::{parse_records, PartnerRecord};
use super::state::DirectoryAction;

/// Set when the directory that started a fetch goes away.
///
/// Cancelling does not abort the request; it only guarantees that its
/// outcome is never dispatched.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Where partner records come from.
#[allow(async_fn_in_trait)]
pub trait RecordSource {
    async fn fetch(&self) -> Result<Vec<PartnerRecord>, LoadError>;
}

/// Fetches the static records resource over HTTP.
#[derive(Clone, Debug)]
pub struct HttpRecordSource {
    url: String,
}

impl HttpRecordSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl RecordSource for HttpRecordSource {
    async fn fetch(&self) -> Result<Vec<PartnerRecord>, LoadError> {
        let response = Request::get(&self.url).send().await?;
        if !response.ok() {
            return Err(LoadError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }
        let body = response.text().await?;
        parse_records(&body)
    }
}

/// Runs one load of the record store.
pub struct LoadController<S> {
    source: S,
    token: CancelToken,
}

impl<S: RecordSource> LoadController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            token: CancelToken::default(),
        }
    }

    /// Token the owner cancels on teardown.
    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    pub async fn run(self, dispatch: impl Fn(DirectoryAction)) {
        if self.token.is_cancelled() {
            return;
        }
        info!("Loading partner directory");
        dispatch(DirectoryAction::FetchStart);

        let outcome = self.source.fetch().await;
        if self.token.is_cancelled() {
            debug!("Partner directory went away before the load finished; ignoring result");
            return;
        }

        match outcome {
            Ok(records) => {
                info!("Loaded {} partners", records.len());
                dispatch(DirectoryAction::FetchSuccess(records));
            }
            Err(err) => {
                error!("Failed to load partners: {}", err);
                dispatch(DirectoryAction::FetchError(err.to_string()));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use yew::Reducible;

    use crate::directory::query::query;
    use crate::directory::state::{DirectoryState, LoadState};

    type Outcome = Result<Vec<PartnerRecord>, LoadError>;

    struct ReadySource(Outcome);

    impl RecordSource for ReadySource {
        async fn fetch(&self) -> Outcome {
            self.0.clone()
        }
    }

    /// Stays pending until the test sends an outcome.
    struct PendingSource(RefCell<Option<oneshot::Receiver<Outcome>>>);

    impl RecordSource for PendingSource {
        async fn fetch(&self) -> Outcome {
            let rx = self.0.borrow_mut().take().expect("fetched twice");
            rx.await
                .unwrap_or_else(|_| Err(LoadError::Network("sender dropped".to_string())))
        }
    }

    fn recorder() -> (Rc<RefCell<Vec<DirectoryAction>>>, impl Fn(DirectoryAction)) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        (log, move |action| sink.borrow_mut().push(action))
    }

    fn replay(actions: &[DirectoryAction]) -> Rc<DirectoryState> {
        actions
            .iter()
            .cloned()
            .fold(Rc::new(DirectoryState::default()), |state, action| state.reduce(action))
    }

    #[test]
    fn successful_load_dispatches_start_then_records() {
        let records = parse_records(r#"[{ "id": 1, "name": "Alpha" }]"#).unwrap();
        let (log, dispatch) = recorder();
        block_on(LoadController::new(ReadySource(Ok(records.clone()))).run(dispatch));

        assert_eq!(
            *log.borrow(),
            vec![DirectoryAction::FetchStart, DirectoryAction::FetchSuccess(records)]
        );
        assert_eq!(replay(&log.borrow()).load, LoadState::Loaded);
    }

    #[test]
    fn network_failure_ends_in_failed_state_with_empty_store() {
        let (log, dispatch) = recorder();
        let failure = LoadError::Network("connection refused".to_string());
        block_on(LoadController::new(ReadySource(Err(failure))).run(dispatch));

        let state = replay(&log.borrow());
        assert_eq!(
            state.load,
            LoadState::Failed("Network error: connection refused".to_string())
        );
        assert!(state.records.is_empty());
        assert!(query(&state.records, &state.config).is_empty());
    }

    #[test]
    fn late_result_after_teardown_is_ignored() {
        let (tx, rx) = oneshot::channel();
        let controller = LoadController::new(PendingSource(RefCell::new(Some(rx))));
        let token = controller.token();
        let (log, dispatch) = recorder();

        let mut pool = LocalPool::new();
        pool.spawner()
            .spawn_local(controller.run(dispatch))
            .unwrap();
        pool.run_until_stalled();
        assert_eq!(*log.borrow(), vec![DirectoryAction::FetchStart]);

        token.cancel();
        let records = parse_records(r#"[{ "id": 1, "name": "Alpha" }]"#).unwrap();
        tx.send(Ok(records)).unwrap();
        pool.run();

        assert_eq!(*log.borrow(), vec![DirectoryAction::FetchStart]);
        assert!(replay(&log.borrow()).is_loading());
    }

    #[test]
    fn late_failure_after_teardown_is_ignored() {
        let (tx, rx) = oneshot::channel();
        let controller = LoadController::new(PendingSource(RefCell::new(Some(rx))));
        let token = controller.token();
        let (log, dispatch) = recorder();

        let mut pool = LocalPool::new();
        pool.spawner()
            .spawn_local(controller.run(dispatch))
            .unwrap();
        pool.run_until_stalled();

        token.cancel();
        tx.send(Err(LoadError::Parse("truncated".to_string()))).unwrap();
        pool.run();

        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn cancelled_before_start_does_nothing() {
        let controller = LoadController::new(ReadySource(Ok(Vec::new())));
        controller.token().cancel();
        let (log, dispatch) = recorder();
        block_on(controller.run(dispatch));
        assert!(log.borrow().is_empty());
    }
}
