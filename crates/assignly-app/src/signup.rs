/*
[INPUT]:  Form input events, AssignlyClient, CancellationToken
[OUTPUT]: Observable SignupFormState stream consumed by the rendering layer
[POS]:    Presentation layer - signup form state machine
[UPDATE]: When form fields, validation rules, or submit flow change
*/

use crate::avatar;
use assignly_adapter::{AssignlyClient, SignupRequest};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

const BLANK_FIELDS_MESSAGE: &str = "Fields shouldn't be blank";
const PASSWORD_MISMATCH_MESSAGE: &str = "passwords don't match";
const DUPLICATE_USER_MESSAGE: &str = "user already exists";
const USER_REJECTED_MESSAGE: &str = "could not add user";

/// Editable signup form fields.
///
/// `image` is an opaque reference to the picture the user picked; encoding
/// happens at submit time (see `avatar`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub login: String,
    pub tag: String,
    pub password: String,
    pub password_repeat: String,
    pub image: Option<PathBuf>,
}

/// Signup form state. Exactly one variant holds at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupFormState {
    /// Editable; all fields may be blank before validation
    Idle(FormFields),
    /// Submission in flight; the field snapshot is frozen
    Loading(FormFields),
    /// Submission rejected or validation failed; fields kept for re-edit
    Error { fields: FormFields, message: String },
    /// Terminal success; form fields are discarded
    Success { message: String },
}

impl Default for SignupFormState {
    fn default() -> Self {
        SignupFormState::Idle(FormFields::default())
    }
}

impl SignupFormState {
    /// Form fields carried by the non-terminal variants
    pub fn fields(&self) -> Option<&FormFields> {
        match self {
            SignupFormState::Idle(fields)
            | SignupFormState::Loading(fields)
            | SignupFormState::Error { fields, .. } => Some(fields),
            SignupFormState::Success { .. } => None,
        }
    }
}

/// Signup form controller.
///
/// Holds the current `SignupFormState` in a watch channel; every transition
/// is a single synchronous write, immediately visible to subscribers.
/// Mutation operations assume externally serialized calls (a UI event
/// dispatcher). `submit` launches at most one tokio task, scoped to a child
/// of the cancellation token supplied by the caller.
#[derive(Debug)]
pub struct SignupController {
    state: watch::Sender<SignupFormState>,
    client: Arc<AssignlyClient>,
    shutdown: CancellationToken,
    submit_handle: Option<JoinHandle<()>>,
}

impl SignupController {
    /// Create a controller in the blank `Idle` state.
    ///
    /// Cancelling `shutdown` stops any in-flight submission; its pending
    /// state write is dropped.
    pub fn new(client: AssignlyClient, shutdown: CancellationToken) -> Self {
        let (state, _) = watch::channel(SignupFormState::default());
        Self {
            state,
            client: Arc::new(client),
            shutdown,
            submit_handle: None,
        }
    }

    /// Read-only stream of the current state for the rendering layer
    pub fn subscribe(&self) -> watch::Receiver<SignupFormState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state
    pub fn current(&self) -> SignupFormState {
        self.state.borrow().clone()
    }

    /// Whether a submission task is still running
    pub fn is_submitting(&self) -> bool {
        self.submit_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn set_login(&self, value: impl Into<String>) {
        let value = value.into();
        self.edit(move |fields| fields.login = value);
    }

    pub fn set_tag(&self, value: impl Into<String>) {
        let value = value.into();
        self.edit(move |fields| fields.tag = value);
    }

    pub fn set_password(&self, value: impl Into<String>) {
        let value = value.into();
        self.edit(move |fields| fields.password = value);
    }

    pub fn set_password_repeat(&self, value: impl Into<String>) {
        let value = value.into();
        self.edit(move |fields| fields.password_repeat = value);
    }

    pub fn set_image(&self, value: Option<PathBuf>) {
        self.edit(move |fields| fields.image = value);
    }

    /// Apply an input edit according to the current variant.
    ///
    /// Idle: the targeted field is replaced, all others untouched.
    /// Error: the form returns to Idle carrying the values as they were
    /// submitted; the incoming value is not applied.
    /// Loading/Success: input is ignored and subscribers are not woken.
    fn edit(&self, apply: impl FnOnce(&mut FormFields)) {
        self.state.send_if_modified(|state| match state {
            SignupFormState::Idle(fields) => {
                apply(fields);
                true
            }
            SignupFormState::Error { fields, .. } => {
                let fields = std::mem::take(fields);
                *state = SignupFormState::Idle(fields);
                true
            }
            SignupFormState::Loading(_) | SignupFormState::Success { .. } => false,
        });
    }

    /// Submit the form.
    ///
    /// No-op unless the form is `Idle`. Blank login or password fails
    /// validation immediately with no network call; otherwise the form moves
    /// to `Loading` and a single submission task runs to completion or
    /// cancellation.
    pub fn submit(&mut self) {
        let current = self.state.borrow().clone();
        let SignupFormState::Idle(fields) = current else {
            return;
        };

        if fields.login.trim().is_empty() || fields.password.trim().is_empty() {
            self.state.send_replace(SignupFormState::Error {
                fields,
                message: BLANK_FIELDS_MESSAGE.to_string(),
            });
            return;
        }

        self.state
            .send_replace(SignupFormState::Loading(fields.clone()));
        tracing::info!(login = %fields.login, "signup submitted");

        let state = self.state.clone();
        let client = Arc::clone(&self.client);
        let cancel = self.shutdown.child_token();
        self.submit_handle = Some(tokio::spawn(async move {
            tokio::select! {
                _ = cancel.cancelled() => {}
                _ = Self::run_submit(client, state, fields) => {}
            }
        }));
    }

    async fn run_submit(
        client: Arc<AssignlyClient>,
        state: watch::Sender<SignupFormState>,
        fields: FormFields,
    ) {
        // Mismatch is checked inside the task, before any request is issued.
        if fields.password != fields.password_repeat {
            state.send_replace(SignupFormState::Error {
                fields,
                message: PASSWORD_MISMATCH_MESSAGE.to_string(),
            });
            return;
        }

        let image = avatar::encode_avatar(fields.image.as_deref()).await;
        let request = SignupRequest {
            login: fields.login.clone(),
            tag: fields.tag.clone(),
            password: fields.password.clone(),
            image,
        };

        match client.signup(&request).await {
            Ok(response) => {
                // No transition on success; the form stays in Loading.
                tracing::info!(id = response.id, login = %response.login, "signup accepted");
            }
            Err(err) if err.is_conflict() => {
                state.send_replace(SignupFormState::Error {
                    fields,
                    message: DUPLICATE_USER_MESSAGE.to_string(),
                });
            }
            Err(err) if err.is_not_found() => {
                state.send_replace(SignupFormState::Error {
                    fields,
                    message: USER_REJECTED_MESSAGE.to_string(),
                });
            }
            Err(err) => {
                // Unmapped failures leave the form in Loading.
                tracing::warn!(login = %fields.login, "signup failed without a mapped status: {err}");
            }
        }
    }

    /// Wait for the in-flight submission task, if any, to finish
    pub async fn wait_for_submit(&mut self) {
        if let Some(handle) = self.submit_handle.take() {
            let _ = handle.await;
        }
    }

    /// Cancel any in-flight submission and wait for it to stop
    pub async fn shutdown_and_wait(&mut self) {
        self.shutdown.cancel();
        self.wait_for_submit().await;
    }
}
