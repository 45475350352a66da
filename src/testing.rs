// In-crate doubles for driving view models natively

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use yew::functional::Reducible;

use crate::error::ApiError;
use crate::models::{Booking, BookingDraft, BookingEdit, BookingId, RoomType};
use crate::services::{BookingApi, Dialogs};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Create(BookingDraft),
    Update(BookingId, BookingEdit),
    Delete(BookingId),
}

#[derive(Default)]
struct MockState {
    calls: RefCell<Vec<ApiCall>>,
    list: RefCell<VecDeque<Result<Vec<Booking>, ApiError>>>,
    create: RefCell<VecDeque<Result<Booking, ApiError>>>,
    update: RefCell<VecDeque<Result<(), ApiError>>>,
    delete: RefCell<VecDeque<Result<(), ApiError>>>,
}

/// Scripted backend. Clones share the same script and call log.
/// Unscripted calls succeed with an empty list / no content; an unscripted
/// create fails.
#[derive(Clone, Default)]
pub struct MockApi {
    state: Rc<MockState>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_list(self, response: Result<Vec<Booking>, ApiError>) -> Self {
        self.state.list.borrow_mut().push_back(response);
        self
    }

    pub fn on_create(self, response: Result<Booking, ApiError>) -> Self {
        self.state.create.borrow_mut().push_back(response);
        self
    }

    pub fn on_update(self, response: Result<(), ApiError>) -> Self {
        self.state.update.borrow_mut().push_back(response);
        self
    }

    pub fn on_delete(self, response: Result<(), ApiError>) -> Self {
        self.state.delete.borrow_mut().push_back(response);
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.state.calls.borrow().clone()
    }

    fn record(&self, call: ApiCall) {
        self.state.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl BookingApi for MockApi {
    async fn list_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.record(ApiCall::List);
        self.state.list.borrow_mut().pop_front().unwrap_or(Ok(Vec::new()))
    }

    async fn create_booking(&self, draft: &BookingDraft) -> Result<Booking, ApiError> {
        self.record(ApiCall::Create(draft.clone()));
        self.state
            .create
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_string())))
    }

    async fn update_booking(&self, id: &BookingId, edit: &BookingEdit) -> Result<(), ApiError> {
        self.record(ApiCall::Update(id.clone(), edit.clone()));
        self.state.update.borrow_mut().pop_front().unwrap_or(Ok(()))
    }

    async fn delete_booking(&self, id: &BookingId) -> Result<(), ApiError> {
        self.record(ApiCall::Delete(id.clone()));
        self.state.delete.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

/// Answers every confirm with a fixed reply and records alerts
#[derive(Clone, Default)]
pub struct ScriptedDialogs {
    reply: Rc<Cell<bool>>,
    confirms: Rc<RefCell<Vec<String>>>,
    alerts: Rc<RefCell<Vec<String>>>,
}

impl ScriptedDialogs {
    pub fn answering(reply: bool) -> Self {
        let dialogs = Self::default();
        dialogs.reply.set(reply);
        dialogs
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl Dialogs for ScriptedDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.reply.get()
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }
}

/// Applies dispatched actions the way use_reducer would
pub struct StoreHarness<S: Reducible> {
    state: RefCell<Rc<S>>,
}

impl<S: Reducible + Clone> StoreHarness<S> {
    pub fn new(initial: S) -> Self {
        Self {
            state: RefCell::new(Rc::new(initial)),
        }
    }

    pub fn dispatch(&self, action: S::Action) {
        let current = self.state.borrow().clone();
        *self.state.borrow_mut() = current.reduce(action);
    }

    pub fn current(&self) -> S {
        (**self.state.borrow()).clone()
    }
}

pub fn sample_booking(id: &str) -> Booking {
    Booking {
        id: BookingId::new(id),
        guest_name: "Ada Lovelace".to_string(),
        email: Some("ada@example.com".to_string()),
        start_date: "2025-03-14".to_string(),
        duration_days: 3,
        rooms: 2,
        room_type: RoomType::Deluxe,
        notes: Some("Late arrival".to_string()),
        status: "confirmed".to_string(),
        total_price: 199.5,
    }
}
