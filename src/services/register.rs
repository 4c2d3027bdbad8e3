use crate::api::AuthApi;
use crate::forms::{FormState, RegistrationPayload};

use super::{MountScope, Notification, Notifier, SubmitGate, SubmitOutcome};

pub const REGISTRATION_FALLBACK: &str = "Registration failed.";
pub const REGISTRATION_DEFAULT_SUCCESS: &str = "Registration successful!";
pub const APPROVAL_NOTICE: &str =
    " You will receive your login credentials by email after admin approval.";

/// Text of the success toast for the given server message.
pub fn success_text(message: Option<&str>) -> String {
    format!(
        "{}{}",
        message.unwrap_or(REGISTRATION_DEFAULT_SUCCESS),
        APPROVAL_NOTICE
    )
}

/// Intern registration: post the payload and report the result as a toast.
/// The user stays on the form either way.
pub struct RegisterFlow<A, N> {
    api: A,
    notifier: N,
    gate: SubmitGate,
    scope: MountScope,
}

impl<A, N> RegisterFlow<A, N>
where
    A: AuthApi,
    N: Notifier,
{
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            gate: SubmitGate::new(),
            scope: MountScope::new(),
        }
    }

    pub fn with_gate(mut self, gate: SubmitGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn with_scope(mut self, scope: MountScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn gate(&self) -> &SubmitGate {
        &self.gate
    }

    pub fn scope(&self) -> &MountScope {
        &self.scope
    }

    pub async fn submit(&self, form: &FormState) -> SubmitOutcome {
        let missing = form.missing_required();
        if !missing.is_empty() {
            return SubmitOutcome::Invalid(missing);
        }

        let Some(_ticket) = self.gate.try_begin() else {
            log::debug!("registration already in flight, ignoring submit");
            return SubmitOutcome::AlreadySubmitting;
        };

        let payload = RegistrationPayload::from_form(form);

        let reply = match self.scope.guard(self.api.register(&payload)).await {
            Ok(reply) => reply,
            Err(_) => {
                log::debug!("registration form unmounted before the reply arrived");
                return SubmitOutcome::Abandoned;
            }
        };

        match reply {
            Ok(reply) if reply.is_success() => {
                log::info!("registration accepted, awaiting admin approval");
                self.notifier
                    .notify(Notification::success(success_text(reply.body.message.as_deref())));
                SubmitOutcome::Succeeded
            }
            Ok(reply) => {
                log::warn!("registration rejected with status {}", reply.status);
                let text = reply
                    .body
                    .message
                    .unwrap_or_else(|| REGISTRATION_FALLBACK.to_string());
                self.fail(text)
            }
            Err(e) => {
                log::warn!("registration request failed: {}", e);
                self.fail(REGISTRATION_FALLBACK.to_string())
            }
        }
    }

    fn fail(&self, text: String) -> SubmitOutcome {
        self.notifier.notify(Notification::error(text.clone()));
        SubmitOutcome::Failed(text)
    }
}
