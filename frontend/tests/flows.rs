use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use chrono::NaiveDate;
use futures::executor::block_on;
use rust_decimal::Decimal;

use spending_dashboard::api::{ApiError, SpendingApi};
use spending_dashboard::flows;
use spending_dashboard::model::Transaction;
use spending_dashboard::state::{Action, DeleteFlow, NoticeKind, ViewState};

/// Scripted stand-in for the server. Each call pops the next queued reply.
#[derive(Default)]
struct FakeApi {
    fetches: RefCell<VecDeque<Result<Vec<Transaction>, ApiError>>>,
    uploads: RefCell<VecDeque<Result<(), ApiError>>>,
    deletes: RefCell<VecDeque<Result<String, ApiError>>>,
    fetch_calls: Cell<usize>,
    upload_calls: Cell<usize>,
    delete_calls: Cell<usize>,
}

impl FakeApi {
    fn with_fetch(self, reply: Result<Vec<Transaction>, ApiError>) -> Self {
        self.fetches.borrow_mut().push_back(reply);
        self
    }

    fn with_upload(self, reply: Result<(), ApiError>) -> Self {
        self.uploads.borrow_mut().push_back(reply);
        self
    }

    fn with_delete(self, reply: Result<String, ApiError>) -> Self {
        self.deletes.borrow_mut().push_back(reply);
        self
    }
}

impl SpendingApi for FakeApi {
    type Upload = String;

    async fn fetch_spending(&self) -> Result<Vec<Transaction>, ApiError> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);
        self.fetches
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted fetch".into())))
    }

    async fn upload_csv(&self, _file: &String) -> Result<(), ApiError> {
        self.upload_calls.set(self.upload_calls.get() + 1);
        self.uploads
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted upload".into())))
    }

    async fn delete_all(&self) -> Result<String, ApiError> {
        self.delete_calls.set(self.delete_calls.get() + 1);
        self.deletes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted delete".into())))
    }
}

/// Applies dispatched actions to a state, the way the Yew reducer would.
struct Harness {
    state: RefCell<ViewState>,
    log: RefCell<Vec<Action>>,
}

impl Harness {
    fn new(state: ViewState) -> Self {
        Self {
            state: RefCell::new(state),
            log: RefCell::new(Vec::new()),
        }
    }

    fn dispatch(&self, action: Action) {
        self.log.borrow_mut().push(action.clone());
        self.state.borrow_mut().apply(action);
    }

    fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    fn last_notice(&self) -> Option<(NoticeKind, String)> {
        self.state
            .borrow()
            .notices
            .last()
            .map(|n| (n.kind, n.message.clone()))
    }
}

fn records(count: usize) -> Vec<Transaction> {
    (0..count)
        .map(|i| Transaction {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + chrono::Days::new(i as u64),
            amount: Decimal::new(1000 + i as i64, 2),
            category: "food".to_string(),
            description: format!("purchase {i}"),
        })
        .collect()
}

fn server_error(status: u16, body: &str) -> ApiError {
    ApiError::Server {
        status,
        body: body.to_string(),
    }
}

#[test]
fn refresh_replaces_records_wholesale() {
    let api = FakeApi::default().with_fetch(Ok(records(3)));
    let harness = Harness::new(ViewState::new(15));
    harness.dispatch(Action::RecordsLoaded(records(10)));

    let ok = block_on(flows::refresh(&api, &|a| harness.dispatch(a)));

    assert!(ok);
    let state = harness.snapshot();
    assert_eq!(state.records.len(), 3);
    assert!(!state.loading);
}

#[test]
fn refresh_failure_keeps_previous_list_and_reports() {
    let api = FakeApi::default().with_fetch(Err(server_error(500, "boom")));
    let harness = Harness::new(ViewState::new(15));
    harness.dispatch(Action::RecordsLoaded(records(4)));

    let ok = block_on(flows::refresh(&api, &|a| harness.dispatch(a)));

    assert!(!ok);
    assert_eq!(harness.snapshot().records.len(), 4);
    let (kind, message) = harness.last_notice().unwrap();
    assert_eq!(kind, NoticeKind::Error);
    assert!(message.contains("500"));
}

#[test]
fn upload_without_file_is_a_guarded_noop() {
    let api = FakeApi::default();
    let harness = Harness::new(ViewState::new(15));
    let snapshot = harness.snapshot();

    let uploaded = block_on(flows::upload(&api, &snapshot, None, &|a| harness.dispatch(a)));

    assert!(!uploaded);
    assert_eq!(api.upload_calls.get(), 0);
    assert!(harness.log.borrow().is_empty());
    assert!(harness.snapshot().notices.is_empty());
}

#[test]
fn upload_success_refreshes_and_clears_file() {
    let api = FakeApi::default()
        .with_upload(Ok(()))
        .with_fetch(Ok(records(5)));
    let harness = Harness::new(ViewState::new(15));
    harness.dispatch(Action::ChooseFile(Some("june.csv".to_string())));
    let snapshot = harness.snapshot();
    harness.log.borrow_mut().clear();

    let uploaded = block_on(flows::upload(
        &api,
        &snapshot,
        Some("june.csv".to_string()),
        &|a| harness.dispatch(a),
    ));

    assert!(uploaded);
    assert_eq!(api.upload_calls.get(), 1);
    assert_eq!(api.fetch_calls.get(), 1);
    let state = harness.snapshot();
    assert_eq!(state.records.len(), 5);
    assert!(state.chosen_file.is_none());
    assert!(!state.uploading);
    assert_eq!(harness.log.borrow().first(), Some(&Action::UploadStarted));
    assert_eq!(harness.log.borrow().last(), Some(&Action::UploadFinished));
}

#[test]
fn upload_failure_keeps_file_and_clears_busy_flag() {
    let api = FakeApi::default().with_upload(Err(server_error(400, "bad header")));
    let harness = Harness::new(ViewState::new(15));
    harness.dispatch(Action::RecordsLoaded(records(2)));
    harness.dispatch(Action::ChooseFile(Some("broken.csv".to_string())));
    let snapshot = harness.snapshot();

    let uploaded = block_on(flows::upload(
        &api,
        &snapshot,
        Some("broken.csv".to_string()),
        &|a| harness.dispatch(a),
    ));

    assert!(!uploaded);
    assert_eq!(api.fetch_calls.get(), 0);
    let state = harness.snapshot();
    assert_eq!(state.chosen_file.as_deref(), Some("broken.csv"));
    assert_eq!(state.records.len(), 2);
    assert!(!state.uploading);
    let (kind, message) = harness.last_notice().unwrap();
    assert_eq!(kind, NoticeKind::Error);
    assert!(message.contains("bad header"));
}

#[test]
fn upload_is_ignored_while_another_is_in_flight() {
    let api = FakeApi::default().with_upload(Ok(()));
    let harness = Harness::new(ViewState::new(15));
    harness.dispatch(Action::ChooseFile(Some("a.csv".to_string())));
    harness.dispatch(Action::UploadStarted);
    let snapshot = harness.snapshot();

    let uploaded = block_on(flows::upload(
        &api,
        &snapshot,
        Some("a.csv".to_string()),
        &|a| harness.dispatch(a),
    ));

    assert!(!uploaded);
    assert_eq!(api.upload_calls.get(), 0);
}

#[test]
fn confirm_while_idle_does_not_delete() {
    let api = FakeApi::default().with_delete(Ok("Deleted 3 transactions".into()));
    let harness = Harness::new(ViewState::new(15));
    harness.dispatch(Action::RecordsLoaded(records(3)));
    let snapshot = harness.snapshot();

    let deleted = block_on(flows::confirm_delete_all(&api, &snapshot, &|a| {
        harness.dispatch(a)
    }));

    assert!(!deleted);
    assert_eq!(api.delete_calls.get(), 0);
    let state = harness.snapshot();
    assert_eq!(state.records.len(), 3);
    assert_eq!(state.delete_flow, DeleteFlow::Idle);
}

#[test]
fn confirmed_delete_empties_list_and_closes_prompt() {
    let api = FakeApi::default()
        .with_delete(Ok("Deleted 3 transactions".into()))
        .with_fetch(Ok(Vec::new()));
    let harness = Harness::new(ViewState::new(15));
    harness.dispatch(Action::RecordsLoaded(records(3)));
    harness.dispatch(Action::RequestDeleteAll);
    let snapshot = harness.snapshot();

    let deleted = block_on(flows::confirm_delete_all(&api, &snapshot, &|a| {
        harness.dispatch(a)
    }));

    assert!(deleted);
    assert_eq!(api.delete_calls.get(), 1);
    assert_eq!(api.fetch_calls.get(), 1);
    let state = harness.snapshot();
    assert!(state.records.is_empty());
    assert_eq!(state.delete_flow, DeleteFlow::Idle);
    assert!(!state.deleting);
    assert_eq!(
        harness.last_notice(),
        Some((NoticeKind::Success, "Deleted 3 transactions".to_string()))
    );
}

#[test]
fn failed_delete_closes_prompt_and_reports() {
    let api = FakeApi::default().with_delete(Err(ApiError::Network("offline".into())));
    let harness = Harness::new(ViewState::new(15));
    harness.dispatch(Action::RecordsLoaded(records(3)));
    harness.dispatch(Action::RequestDeleteAll);
    let snapshot = harness.snapshot();

    let deleted = block_on(flows::confirm_delete_all(&api, &snapshot, &|a| {
        harness.dispatch(a)
    }));

    assert!(!deleted);
    assert_eq!(api.fetch_calls.get(), 0);
    let state = harness.snapshot();
    assert_eq!(state.records.len(), 3);
    assert_eq!(state.delete_flow, DeleteFlow::Idle);
    let (kind, message) = harness.last_notice().unwrap();
    assert_eq!(kind, NoticeKind::Error);
    assert!(message.contains("offline"));
}

#[test]
fn cancel_leaves_data_untouched() {
    let harness = Harness::new(ViewState::new(15));
    harness.dispatch(Action::RecordsLoaded(records(3)));
    harness.dispatch(Action::RequestDeleteAll);
    harness.dispatch(Action::CancelDeleteAll);

    let state = harness.snapshot();
    assert_eq!(state.delete_flow, DeleteFlow::Idle);
    assert_eq!(state.records.len(), 3);
}
