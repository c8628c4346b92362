//! Resource page state machine
//!
//! Every CRUD page runs the same cycle: load the list, open a modal form,
//! submit it, reload. [`ResourcePage`] owns one request's [`PageState`] and
//! moves it through those transitions; the per-resource parts live behind the
//! [`Resource`] trait.

use std::fmt;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::forms::ResourceForm;
use crate::models::{ApiRecord, RecordId};
use crate::services::{ApiClient, Endpoint};
use crate::utils::errors::{AdminError, ApiResult, Result};
use crate::utils::logging;

/// Loading state of a page's data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Failed,
}

/// Which modal, if any, is open over the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Closed,
    Create,
    Edit(RecordId),
    ConfirmDelete(RecordId),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    /// Whether the create/edit form is showing
    pub fn shows_form(&self) -> bool {
        matches!(self, Modal::Create | Modal::Edit(_))
    }
}

impl fmt::Display for Modal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modal::Closed => write!(f, "closed"),
            Modal::Create => write!(f, "create"),
            Modal::Edit(id) => write!(f, "edit({})", id),
            Modal::ConfirmDelete(id) => write!(f, "confirm_delete({})", id),
        }
    }
}

/// Answer to a delete confirmation prompt
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

impl Confirmation for bool {
    fn confirm(&self, _prompt: &str) -> bool {
        *self
    }
}

/// One REST collection managed through a page
#[async_trait]
pub trait Resource: Send + Sync + 'static {
    type Record: ApiRecord + DeserializeOwned + Clone + Send + Sync;
    type Form: ResourceForm<Record = Self::Record>;
    /// Other collections the page needs to render its records
    type Lookups: Default + Clone + Send;

    /// Short name used in logs
    const NAME: &'static str;
    /// Route of the page
    const PATH: &'static str;
    const TITLE: &'static str;
    const DELETE_PROMPT: &'static str;

    fn endpoint(api: &ApiClient) -> Endpoint<'_, Self::Record, <Self::Form as ResourceForm>::Payload>;

    /// Fetch the records and lookups, optionally filtered
    async fn fetch(
        api: &ApiClient,
        filter: Option<&RecordId>,
    ) -> ApiResult<(Vec<Self::Record>, Self::Lookups)>;
}

/// Everything a page shows for one request
pub struct PageState<R: Resource> {
    pub phase: LoadPhase,
    pub records: Vec<R::Record>,
    pub lookups: R::Lookups,
    pub modal: Modal,
    pub form: R::Form,
    pub form_error: Option<String>,
    pub filter: Option<RecordId>,
}

impl<R: Resource> Default for PageState<R> {
    fn default() -> Self {
        Self {
            phase: LoadPhase::Loading,
            records: Vec::new(),
            lookups: R::Lookups::default(),
            modal: Modal::Closed,
            form: R::Form::default(),
            form_error: None,
            filter: None,
        }
    }
}

impl<R: Resource> PageState<R> {
    pub fn find(&self, id: &RecordId) -> Option<&R::Record> {
        self.records.iter().find(|record| record.id() == id)
    }
}

/// Controller driving a [`PageState`] against the API
pub struct ResourcePage<R: Resource> {
    api: ApiClient,
    state: PageState<R>,
}

impl<R: Resource> ResourcePage<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: PageState::default(),
        }
    }

    /// Restrict the list, e.g. progress of a single user
    pub fn with_filter(mut self, filter: Option<RecordId>) -> Self {
        self.state.filter = filter;
        self
    }

    pub fn state(&self) -> &PageState<R> {
        &self.state
    }

    pub fn into_state(self) -> PageState<R> {
        self.state
    }

    /// Fetch the list and lookups. Failures leave an empty list behind.
    pub async fn load(&mut self) {
        self.state.phase = LoadPhase::Loading;

        match R::fetch(&self.api, self.state.filter.as_ref()).await {
            Ok((records, lookups)) => {
                self.state.records = records;
                self.state.lookups = lookups;
                self.state.phase = LoadPhase::Ready;
            }
            Err(error) => {
                logging::log_page_failure(R::NAME, "load", &AdminError::Api(error));
                self.state.records.clear();
                self.state.lookups = R::Lookups::default();
                self.state.phase = LoadPhase::Failed;
            }
        }
    }

    pub fn open_create(&mut self) {
        logging::log_page_action(R::NAME, "open_create", None);
        self.state.modal = Modal::Create;
        self.state.form = R::Form::default();
        self.state.form_error = None;
    }

    /// Open the edit form of a loaded record; unknown ids keep the modal closed
    pub fn open_edit(&mut self, id: &RecordId) {
        let Some(record) = self.state.find(id) else {
            logging::log_page_failure(
                R::NAME,
                "open_edit",
                &AdminError::RecordNotFound {
                    resource: R::NAME.to_string(),
                    id: id.to_string(),
                },
            );
            return;
        };

        let form = R::Form::from_record(record);
        logging::log_page_action(R::NAME, "open_edit", Some(id.as_str()));
        self.state.form = form;
        self.state.modal = Modal::Edit(id.clone());
        self.state.form_error = None;
    }

    /// Target a submitted edit at `id`.
    ///
    /// The submitted form carries every field, so unlike [`Self::open_edit`]
    /// this does not need the record in the loaded list; the API decides
    /// whether the record exists.
    pub fn open_edit_submitted(&mut self, id: &RecordId) {
        logging::log_page_action(R::NAME, "open_edit_submitted", Some(id.as_str()));
        self.state.modal = Modal::Edit(id.clone());
        self.state.form_error = None;
    }

    pub fn close_modal(&mut self) {
        self.state.modal = Modal::Closed;
        self.state.form = R::Form::default();
        self.state.form_error = None;
    }

    /// Submit the open form: create or update, then reload once on success.
    ///
    /// Invalid input is rejected before any request is sent. On any failure
    /// the modal stays open with the form as submitted.
    pub async fn submit(&mut self, form: R::Form) -> Result<()> {
        let target = self.state.modal.clone();
        if !target.shows_form() {
            let error = AdminError::InvalidStateTransition {
                from: target.to_string(),
                to: "submit".to_string(),
            };
            logging::log_page_failure(R::NAME, "submit", &error);
            return Err(error);
        }

        self.state.form = form;

        let payload = match self.state.form.to_payload() {
            Ok(payload) => payload,
            Err(error) => {
                logging::log_form_rejected(R::NAME, &error.to_string());
                self.state.form_error = Some(error.to_string());
                return Err(error.into());
            }
        };

        let endpoint = R::endpoint(&self.api);
        let result = match &target {
            Modal::Edit(id) => {
                logging::log_page_action(R::NAME, "update", Some(id.as_str()));
                endpoint.update(id, &payload).await
            }
            _ => {
                logging::log_page_action(R::NAME, "create", None);
                endpoint.create(&payload).await
            }
        };

        match result {
            Ok(_) => {
                self.close_modal();
                self.load().await;
                Ok(())
            }
            Err(error) => {
                let error = AdminError::Api(error);
                logging::log_page_failure(R::NAME, "submit", &error);
                self.state.form_error = Some(error.user_message());
                Err(error)
            }
        }
    }

    /// Ask for confirmation before deleting a record
    pub fn request_delete(&mut self, id: &RecordId) {
        logging::log_page_action(R::NAME, "request_delete", Some(id.as_str()));
        self.state.modal = Modal::ConfirmDelete(id.clone());
        self.state.form_error = None;
    }

    /// Delete a record if confirmed, then reload once.
    ///
    /// Returns whether a delete was performed. Nothing is sent when the
    /// confirmation is declined.
    pub async fn delete(&mut self, id: &RecordId, confirmation: &impl Confirmation) -> Result<bool> {
        self.state.modal = Modal::Closed;

        if !confirmation.confirm(R::DELETE_PROMPT) {
            logging::log_page_action(R::NAME, "delete_declined", Some(id.as_str()));
            return Ok(false);
        }

        logging::log_page_action(R::NAME, "delete", Some(id.as_str()));
        match R::endpoint(&self.api).delete(id).await {
            Ok(()) => {
                self.load().await;
                Ok(true)
            }
            Err(error) => {
                let error = AdminError::Api(error);
                logging::log_page_failure(R::NAME, "delete", &error);
                Err(error)
            }
        }
    }
}
