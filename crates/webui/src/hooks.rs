//! The generic resource hook: list/create/update/delete for one backend
//! resource, with `records`/`loading`/`error` state for the consuming
//! components. Instantiated once per entity in [`crate::features`].

use crate::api::{ApiError, client};
use crate::schema::{Record, RecordId, ResourceSchema};
use log::error;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub enum FetchAction {
    /// A list request with this epoch went out.
    Started { epoch: u32 },
    Loaded { epoch: u32, records: Vec<Record> },
    Failed { epoch: u32, error: ApiError },
    /// A create/update/delete went out. Mutations are not epoch-guarded:
    /// only one can be in flight per form/action at a time.
    MutationStarted,
    MutationFailed { error: ApiError },
}

/// List state for one resource. `epoch` identifies the newest request;
/// responses from older requests are discarded, so overlapping fetches can
/// never clobber a newer result.
#[derive(Default, PartialEq)]
pub struct FetchState {
    pub records: Option<Rc<Vec<Record>>>,
    pub loading: bool,
    pub error: Option<ApiError>,
    epoch: u32,
}

impl Reducible for FetchState {
    type Action = FetchAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            FetchAction::Started { epoch } => Rc::new(FetchState {
                records: self.records.clone(),
                loading: true,
                error: None,
                epoch,
            }),
            FetchAction::Loaded { epoch, records } if epoch == self.epoch => Rc::new(FetchState {
                records: Some(Rc::new(records)),
                loading: false,
                error: None,
                epoch,
            }),
            // on failure the previous list stays visible, only `error` changes
            FetchAction::Failed { epoch, error } if epoch == self.epoch => Rc::new(FetchState {
                records: self.records.clone(),
                loading: false,
                error: Some(error),
                epoch,
            }),
            FetchAction::Loaded { .. } | FetchAction::Failed { .. } => self,
            FetchAction::MutationStarted => Rc::new(FetchState {
                records: self.records.clone(),
                loading: true,
                error: None,
                epoch: self.epoch,
            }),
            FetchAction::MutationFailed { error } => Rc::new(FetchState {
                records: self.records.clone(),
                loading: false,
                error: Some(error),
                epoch: self.epoch,
            }),
        }
    }
}

/// Handle returned by [`use_resource`].
#[derive(Clone)]
pub struct UseResourceHandle {
    state: UseReducerHandle<FetchState>,
    schema: &'static ResourceSchema,
    epoch: Rc<RefCell<u32>>,
}

impl UseResourceHandle {
    pub fn schema(&self) -> &'static ResourceSchema {
        self.schema
    }

    pub fn records(&self) -> Option<Rc<Vec<Record>>> {
        self.state.records.clone()
    }

    pub fn loading(&self) -> bool {
        self.state.loading
    }

    pub fn error(&self) -> Option<ApiError> {
        self.state.error.clone()
    }

    /// Re-runs the list fetch. Any response still in flight from an earlier
    /// call becomes stale and is dropped by the reducer.
    pub fn refresh(&self) {
        let epoch = {
            let mut current = self.epoch.borrow_mut();
            *current = current.wrapping_add(1);
            *current
        };
        self.state.dispatch(FetchAction::Started { epoch });
        let state = self.state.clone();
        let schema = self.schema;
        spawn_local(async move {
            match client::fetch_list(schema).await {
                Ok(records) => state.dispatch(FetchAction::Loaded { epoch, records }),
                Err(err) => {
                    error!("Failed to list {}: {err}", schema.path);
                    state.dispatch(FetchAction::Failed { epoch, error: err });
                }
            }
        });
    }

    pub fn create(&self, record: Record, on_done: Callback<Result<(), ApiError>>) {
        let schema = self.schema;
        self.run_mutation(
            async move { client::create(schema, &record).await },
            on_done,
        );
    }

    pub fn update(&self, id: RecordId, record: Record, on_done: Callback<Result<(), ApiError>>) {
        let schema = self.schema;
        self.run_mutation(
            async move { client::update(schema, id, &record).await },
            on_done,
        );
    }

    pub fn delete(&self, id: RecordId, on_done: Callback<Result<(), ApiError>>) {
        let schema = self.schema;
        self.run_mutation(
            async move { client::delete_by_id(schema, id).await },
            on_done,
        );
    }

    fn run_mutation(
        &self,
        request: impl Future<Output = Result<(), ApiError>> + 'static,
        on_done: Callback<Result<(), ApiError>>,
    ) {
        self.state.dispatch(FetchAction::MutationStarted);
        let handle = self.clone();
        spawn_local(async move {
            let result = request.await;
            match &result {
                // keep the visible list current after every successful write;
                // the refresh clears `loading` once the new list lands
                Ok(()) => handle.refresh(),
                Err(err) => {
                    error!("Mutation on {} failed: {err}", handle.schema.path);
                    handle
                        .state
                        .dispatch(FetchAction::MutationFailed { error: err.clone() });
                }
            }
            on_done.emit(result);
        });
    }
}

/// Fetches the list on mount and exposes CRUD operations for one resource.
#[hook]
pub fn use_resource(schema: &'static ResourceSchema) -> UseResourceHandle {
    let state = use_reducer_eq(FetchState::default);
    let epoch = use_mut_ref(|| 0u32);
    let handle = UseResourceHandle {
        state,
        schema,
        epoch,
    };
    {
        let handle = handle.clone();
        use_effect_with((), move |()| {
            handle.refresh();
        });
    }
    handle
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn one_record() -> Vec<Record> {
        vec![Record::from_iter([
            ("id".to_string(), json!(1)),
            ("name".to_string(), json!("Deep Tissue")),
        ])]
    }

    fn reduce(state: FetchState, action: FetchAction) -> Rc<FetchState> {
        Rc::new(state).reduce(action)
    }

    #[test]
    fn started_sets_loading_and_clears_error() {
        let state = FetchState {
            error: Some(ApiError::Timeout),
            ..FetchState::default()
        };
        let state = reduce(state, FetchAction::Started { epoch: 1 });
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn loaded_stores_records_and_stops_loading() {
        let state = reduce(FetchState::default(), FetchAction::Started { epoch: 1 });
        let state = Rc::clone(&state).reduce(FetchAction::Loaded {
            epoch: 1,
            records: one_record(),
        });
        assert!(!state.loading);
        assert_eq!(state.records.as_ref().unwrap().len(), 1);
        assert_eq!(state.error, None);
    }

    #[test]
    fn failed_keeps_stale_records() {
        let state = reduce(FetchState::default(), FetchAction::Started { epoch: 1 });
        let state = Rc::clone(&state).reduce(FetchAction::Loaded {
            epoch: 1,
            records: one_record(),
        });
        let state = Rc::clone(&state).reduce(FetchAction::Started { epoch: 2 });
        let state = Rc::clone(&state).reduce(FetchAction::Failed {
            epoch: 2,
            error: ApiError::Status {
                code: 500,
                text: "Internal Server Error".to_string(),
            },
        });
        assert!(!state.loading);
        assert!(matches!(state.error, Some(ApiError::Status { code: 500, .. })));
        // the last good list is still there for the table
        assert_eq!(state.records.as_ref().unwrap().len(), 1);
    }

    #[test]
    fn mutation_in_flight_sets_loading() {
        let state = reduce(FetchState::default(), FetchAction::Started { epoch: 1 });
        let state = Rc::clone(&state).reduce(FetchAction::Loaded {
            epoch: 1,
            records: one_record(),
        });
        let state = Rc::clone(&state).reduce(FetchAction::MutationStarted);
        assert!(state.loading);
        assert_eq!(state.error, None);
        assert!(state.records.is_some());
    }

    #[test]
    fn failed_mutation_sets_error_and_keeps_records() {
        let state = reduce(FetchState::default(), FetchAction::Started { epoch: 1 });
        let state = Rc::clone(&state).reduce(FetchAction::Loaded {
            epoch: 1,
            records: one_record(),
        });
        let state = Rc::clone(&state).reduce(FetchAction::MutationStarted);
        let state = Rc::clone(&state).reduce(FetchAction::MutationFailed {
            error: ApiError::Transport("connection refused".to_string()),
        });
        assert!(!state.loading);
        assert!(matches!(state.error, Some(ApiError::Transport(_))));
        assert_eq!(state.records.as_ref().unwrap().len(), 1);
        // a later refresh still works against the same epoch
        let state = Rc::clone(&state).reduce(FetchAction::Started { epoch: 2 });
        let state = Rc::clone(&state).reduce(FetchAction::Loaded {
            epoch: 2,
            records: one_record(),
        });
        assert_eq!(state.error, None);
        assert!(!state.loading);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let state = reduce(FetchState::default(), FetchAction::Started { epoch: 1 });
        let state = Rc::clone(&state).reduce(FetchAction::Started { epoch: 2 });
        // epoch 1 resolves after epoch 2 started: ignored entirely
        let state = Rc::clone(&state).reduce(FetchAction::Loaded {
            epoch: 1,
            records: one_record(),
        });
        assert!(state.loading);
        assert_eq!(state.records, None);
        let state = Rc::clone(&state).reduce(FetchAction::Failed {
            epoch: 1,
            error: ApiError::Timeout,
        });
        assert_eq!(state.error, None);
        // the newest request still lands
        let state = Rc::clone(&state).reduce(FetchAction::Loaded {
            epoch: 2,
            records: one_record(),
        });
        assert!(!state.loading);
        assert!(state.records.is_some());
    }
}
