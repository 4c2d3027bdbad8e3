#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;

use portal::api::{ApiReply, AuthApi};
use portal::common::{ApiError, StorageError};
use portal::forms::{FormState, RegistrationPayload};
use portal::models::FieldId;
use portal::services::{MemoryTokenStore, Navigator, Notification, Notifier, Route, TokenStore};
use portal::types::{LoginRequest, LoginResponse, MessageResponse};

pub type Reply<T> = Result<ApiReply<T>, ApiError>;

/// What the fake backend does for one call.
pub enum Step<T> {
    Ready(Reply<T>),
    Held(oneshot::Receiver<Reply<T>>),
}

async fn play<T>(step: Option<Step<T>>) -> Reply<T> {
    match step {
        Some(Step::Ready(reply)) => reply,
        Some(Step::Held(rx)) => rx
            .await
            .unwrap_or_else(|_| Err(ApiError::Network("sender dropped".into()))),
        None => Err(ApiError::Network("no scripted reply".into())),
    }
}

#[derive(Default)]
struct Script {
    login: RefCell<VecDeque<Step<LoginResponse>>>,
    register: RefCell<VecDeque<Step<MessageResponse>>>,
    login_calls: RefCell<Vec<LoginRequest>>,
    register_calls: RefCell<Vec<RegistrationPayload>>,
}

/// Backend double that replays scripted replies in order.
#[derive(Clone, Default)]
pub struct ScriptedApi {
    script: Rc<Script>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login_reply(&self, status: u16, body: LoginResponse) -> &Self {
        self.login_step(Step::Ready(Ok(ApiReply::new(status, body))))
    }

    pub fn login_step(&self, step: Step<LoginResponse>) -> &Self {
        self.script.login.borrow_mut().push_back(step);
        self
    }

    pub fn register_reply(&self, status: u16, message: Option<&str>) -> &Self {
        let body = MessageResponse {
            message: message.map(str::to_string),
        };
        self.register_step(Step::Ready(Ok(ApiReply::new(status, body))))
    }

    pub fn register_step(&self, step: Step<MessageResponse>) -> &Self {
        self.script.register.borrow_mut().push_back(step);
        self
    }

    /// Queues a login reply the test releases later through the sender.
    pub fn hold_login(&self) -> oneshot::Sender<Reply<LoginResponse>> {
        let (tx, rx) = oneshot::channel();
        self.login_step(Step::Held(rx));
        tx
    }

    pub fn hold_register(&self) -> oneshot::Sender<Reply<MessageResponse>> {
        let (tx, rx) = oneshot::channel();
        self.register_step(Step::Held(rx));
        tx
    }

    pub fn login_calls(&self) -> Vec<LoginRequest> {
        self.script.login_calls.borrow().clone()
    }

    pub fn register_calls(&self) -> Vec<RegistrationPayload> {
        self.script.register_calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl AuthApi for ScriptedApi {
    async fn login(&self, request: &LoginRequest) -> Reply<LoginResponse> {
        self.script.login_calls.borrow_mut().push(request.clone());
        let step = self.script.login.borrow_mut().pop_front();
        play(step).await
    }

    async fn register(&self, payload: &RegistrationPayload) -> Reply<MessageResponse> {
        self.script.register_calls.borrow_mut().push(payload.clone());
        let step = self.script.register.borrow_mut().pop_front();
        play(step).await
    }
}

#[derive(Clone, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<Route>>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<Route> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.visited.borrow_mut().push(route);
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    shown: Rc<RefCell<Vec<Notification>>>,
}

impl RecordingNotifier {
    pub fn shown(&self) -> Vec<Notification> {
        self.shown.borrow().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.shown.borrow().iter().map(|n| n.text.clone()).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.shown.borrow_mut().push(notification);
    }
}

/// Token storage that remembers every write.
#[derive(Clone, Default)]
pub struct RecordingStore {
    inner: Rc<MemoryTokenStore>,
    writes: Rc<RefCell<Vec<(String, String)>>>,
    read_only: bool,
}

impl RecordingStore {
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.borrow().clone()
    }
}

impl TokenStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".into(),
            });
        }
        self.writes
            .borrow_mut()
            .push((key.to_string(), value.to_string()));
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

pub fn credentials(email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        email: email.to_string(),
        password: password.to_string(),
    }
}

pub fn token_body(token: &str) -> LoginResponse {
    LoginResponse {
        token: Some(token.to_string()),
        message: None,
    }
}

pub fn message_body(message: &str) -> LoginResponse {
    LoginResponse {
        token: None,
        message: Some(message.to_string()),
    }
}

/// Registration form with every required field filled in.
pub fn completed_form() -> FormState {
    let mut form = FormState::new();
    for (id, value) in [
        (FieldId::Name, "Ada Lovelace"),
        (FieldId::Email, "ada@example.com"),
        (FieldId::Phone, "+44 20 7946 0000"),
        (FieldId::CollegeName, "Analytical College"),
        (FieldId::Course, "Computer Science"),
        (FieldId::Department, "Mathematics"),
        (FieldId::University, "University of London"),
        (FieldId::Degree, "B.Sc"),
        (FieldId::Specialization, "Algorithms"),
        (FieldId::Cgpa, "9.4"),
        (FieldId::CurrentYear, "4th Year"),
        (FieldId::YearOfPassing, "2026"),
    ] {
        form.set_field(id, value);
    }
    form
}
