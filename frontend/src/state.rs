use std::rc::Rc;

use tracing::debug;
use yew::Reducible;

use crate::model::{FilterChange, FilterState, SortDirection, SortField, SortState, Transaction};
use crate::pagination::{window_of, PageItem, WINDOW_RADIUS};
use crate::pipeline::{self, PageView};

const MAX_NOTICES: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteFlow {
    Idle,
    Confirming,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetFilter(FilterChange),
    SetSort(SortField),
    SetPage(usize),
    ResetFilters,
    SelectRecord(Transaction),
    CloseDetail,
    ChooseFile(Option<String>),
    UploadStarted,
    FileCleared,
    UploadFinished,
    RequestDeleteAll,
    CancelDeleteAll,
    DeleteStarted,
    DeleteSettled,
    RecordsLoaded(Vec<Transaction>),
    RefreshFailed(String),
    Notify(NoticeKind, String),
    DismissNotice(u64),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub records: Rc<Vec<Transaction>>,
    pub filter: FilterState,
    pub sort: SortState,
    pub page: usize,
    pub page_size: usize,
    pub detail: Option<Transaction>,
    pub chosen_file: Option<String>,
    pub uploading: bool,
    pub delete_flow: DeleteFlow,
    pub deleting: bool,
    pub loading: bool,
    pub notices: Vec<Notice>,
    next_notice_id: u64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            records: Rc::new(Vec::new()),
            filter: FilterState::default(),
            sort: SortState::default(),
            page: 1,
            page_size,
            detail: None,
            chosen_file: None,
            uploading: false,
            delete_flow: DeleteFlow::Idle,
            deleting: false,
            loading: true,
            notices: Vec::new(),
            next_notice_id: 0,
        }
    }

    pub fn view(&self) -> PageView {
        pipeline::derive(
            &self.records,
            &self.filter,
            self.sort,
            self.page,
            self.page_size,
        )
    }

    pub fn categories(&self) -> Vec<String> {
        pipeline::unique_categories(&self.records)
    }

    pub fn page_window(&self, total_pages: usize) -> Vec<PageItem> {
        window_of(self.page, total_pages, WINDOW_RADIUS)
    }

    pub fn empty_message(&self) -> &'static str {
        if self.records.is_empty() || self.filter.is_empty() {
            "No spending data available"
        } else {
            "No transactions match the selected filters"
        }
    }

    pub fn can_upload(&self) -> bool {
        self.chosen_file.is_some() && !self.uploading
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SetFilter(change) => {
                match change {
                    FilterChange::StartDate(date) => self.filter.start_date = date,
                    FilterChange::EndDate(date) => self.filter.end_date = date,
                    FilterChange::Category(category) => self.filter.category = category,
                }
                self.page = 1;
            }
            Action::SetSort(field) => {
                if self.sort.field == field {
                    self.sort.direction = self.sort.direction.toggled();
                } else {
                    self.sort = SortState {
                        field,
                        direction: SortDirection::Asc,
                    };
                }
                self.page = 1;
            }
            Action::SetPage(page) => {
                let total_pages = self.view().total_pages;
                if total_pages == 0 {
                    debug!(page, "ignoring page change with no results");
                    return;
                }
                self.page = page.clamp(1, total_pages);
            }
            Action::ResetFilters => {
                self.filter = FilterState::default();
                self.sort = SortState::default();
                self.page = 1;
            }
            Action::SelectRecord(record) => self.detail = Some(record),
            Action::CloseDetail => self.detail = None,
            Action::ChooseFile(name) => self.chosen_file = name,
            Action::UploadStarted => self.uploading = true,
            Action::FileCleared => self.chosen_file = None,
            Action::UploadFinished => self.uploading = false,
            Action::RequestDeleteAll => {
                if self.delete_flow == DeleteFlow::Idle {
                    self.delete_flow = DeleteFlow::Confirming;
                }
            }
            Action::CancelDeleteAll => {
                if self.deleting {
                    debug!("delete in flight, keeping confirmation open");
                    return;
                }
                self.delete_flow = DeleteFlow::Idle;
            }
            Action::DeleteStarted => {
                if self.delete_flow == DeleteFlow::Confirming {
                    self.deleting = true;
                }
            }
            Action::DeleteSettled => {
                self.deleting = false;
                self.delete_flow = DeleteFlow::Idle;
            }
            Action::RecordsLoaded(records) => {
                self.records = Rc::new(records);
                self.loading = false;
                let total_pages = self.view().total_pages;
                self.page = self.page.clamp(1, total_pages.max(1));
                if let Some(detail) = &self.detail {
                    if !self.records.contains(detail) {
                        self.detail = None;
                    }
                }
            }
            Action::RefreshFailed(message) => {
                self.loading = false;
                self.push_notice(NoticeKind::Error, message);
            }
            Action::Notify(kind, message) => self.push_notice(kind, message),
            Action::DismissNotice(id) => self.notices.retain(|notice| notice.id != id),
        }
    }

    fn push_notice(&mut self, kind: NoticeKind, message: String) {
        self.next_notice_id += 1;
        self.notices.push(Notice {
            id: self.next_notice_id,
            kind,
            message,
        });
        if self.notices.len() > MAX_NOTICES {
            let drain = self.notices.len() - MAX_NOTICES;
            self.notices.drain(0..drain);
        }
    }
}

impl Reducible for ViewState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
