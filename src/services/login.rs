use crate::api::AuthApi;
use crate::forms::missing_login_fields;
use crate::types::LoginRequest;

use super::{MountScope, Navigator, Route, SubmitGate, SubmitOutcome, TokenStore, TOKEN_KEY};

/// Shown when the backend gives no reason, or could not be reached.
pub const LOGIN_FALLBACK: &str = "Login failed.";

/// Sign-in: post credentials, keep the token, go to the dashboard.
pub struct LoginFlow<A, T, N> {
    api: A,
    tokens: T,
    navigator: N,
    gate: SubmitGate,
    scope: MountScope,
}

impl<A, T, N> LoginFlow<A, T, N>
where
    A: AuthApi,
    T: TokenStore,
    N: Navigator,
{
    pub fn new(api: A, tokens: T, navigator: N) -> Self {
        Self {
            api,
            tokens,
            navigator,
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

    pub async fn submit(&self, request: LoginRequest) -> SubmitOutcome {
        let missing = missing_login_fields(&request);
        if !missing.is_empty() {
            return SubmitOutcome::Invalid(missing);
        }

        let Some(_ticket) = self.gate.try_begin() else {
            log::debug!("login already in flight, ignoring submit");
            return SubmitOutcome::AlreadySubmitting;
        };

        let reply = match self.scope.guard(self.api.login(&request)).await {
            Ok(reply) => reply,
            Err(_) => {
                log::debug!("login page unmounted before the reply arrived");
                return SubmitOutcome::Abandoned;
            }
        };

        let reply = match reply {
            Ok(reply) => reply,
            Err(e) => {
                log::warn!("login request failed: {}", e);
                return SubmitOutcome::Failed(LOGIN_FALLBACK.to_string());
            }
        };

        if !reply.is_success() {
            log::warn!("login rejected with status {}", reply.status);
            return SubmitOutcome::Failed(
                reply.body.message.unwrap_or_else(|| LOGIN_FALLBACK.to_string()),
            );
        }

        let Some(token) = reply.body.token else {
            log::warn!("login succeeded without a token in the response");
            return SubmitOutcome::Failed(LOGIN_FALLBACK.to_string());
        };

        if let Err(e) = self.tokens.set(TOKEN_KEY, &token) {
            log::error!("could not persist session token: {}", e);
            return SubmitOutcome::Failed(LOGIN_FALLBACK.to_string());
        }

        log::info!("signed in, redirecting to {}", Route::Dashboard);
        self.navigator.navigate(Route::Dashboard);

        SubmitOutcome::Succeeded
    }
}
