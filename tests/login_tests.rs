mod common;

#[cfg(test)]
pub mod login_tests {
    use std::sync::{Arc, Mutex};

    use futures::FutureExt;

    use super::common::*;

    use portal::api::ApiReply;
    use portal::common::ApiError;
    use portal::models::FieldId;
    use portal::services::*;

    fn flow(
        api: &ScriptedApi,
        store: &RecordingStore,
        nav: &RecordingNavigator,
    ) -> LoginFlow<ScriptedApi, RecordingStore, RecordingNavigator> {
        LoginFlow::new(api.clone(), store.clone(), nav.clone())
    }

    #[tokio::test]
    async fn test_login_success_stores_token_and_navigates_once() {
        let api = ScriptedApi::new();
        api.login_reply(200, token_body("abc"));
        let store = RecordingStore::default();
        let nav = RecordingNavigator::default();

        let outcome = flow(&api, &store, &nav)
            .submit(credentials("ada@example.com", "secret"))
            .await;

        assert_eq!(outcome, SubmitOutcome::Succeeded);
        assert_eq!(store.writes(), vec![("token".to_string(), "abc".to_string())]);
        assert_eq!(nav.visited(), vec![Route::Dashboard]);
        assert_eq!(
            api.login_calls(),
            vec![credentials("ada@example.com", "secret")]
        );
    }

    #[tokio::test]
    async fn test_login_rejection_shows_server_message() {
        let api = ScriptedApi::new();
        api.login_reply(401, message_body("Invalid credentials"));
        let store = RecordingStore::default();
        let nav = RecordingNavigator::default();

        let outcome = flow(&api, &store, &nav)
            .submit(credentials("ada@example.com", "wrong"))
            .await;

        assert_eq!(outcome.error_text(), Some("Invalid credentials"));
        assert!(nav.visited().is_empty());
        assert!(store.writes().is_empty());
    }

    #[tokio::test]
    async fn test_login_rejection_without_message_uses_fallback() {
        let api = ScriptedApi::new();
        api.login_reply(500, Default::default());
        let store = RecordingStore::default();
        let nav = RecordingNavigator::default();

        let outcome = flow(&api, &store, &nav)
            .submit(credentials("ada@example.com", "secret"))
            .await;

        assert_eq!(outcome, SubmitOutcome::Failed(LOGIN_FALLBACK.to_string()));
        assert_eq!(LOGIN_FALLBACK, "Login failed.");
    }

    #[tokio::test]
    async fn test_login_transport_failure_uses_fallback() {
        for error in [
            ApiError::Network("connection refused".into()),
            ApiError::MalformedBody("expected value at line 1".into()),
        ] {
            let api = ScriptedApi::new();
            api.login_step(Step::Ready(Err(error)));
            let store = RecordingStore::default();
            let nav = RecordingNavigator::default();

            let outcome = flow(&api, &store, &nav)
                .submit(credentials("ada@example.com", "secret"))
                .await;

            assert_eq!(outcome.error_text(), Some("Login failed."));
            assert!(nav.visited().is_empty());
        }
    }

    #[tokio::test]
    async fn test_login_success_without_token_is_a_failure() {
        let api = ScriptedApi::new();
        api.login_reply(200, Default::default());
        let store = RecordingStore::default();
        let nav = RecordingNavigator::default();

        let outcome = flow(&api, &store, &nav)
            .submit(credentials("ada@example.com", "secret"))
            .await;

        assert_eq!(outcome.error_text(), Some("Login failed."));
        assert!(store.writes().is_empty());
        assert!(nav.visited().is_empty());
    }

    #[tokio::test]
    async fn test_login_storage_failure_does_not_navigate() {
        let api = ScriptedApi::new();
        api.login_reply(200, token_body("abc"));
        let store = RecordingStore::read_only();
        let nav = RecordingNavigator::default();

        let outcome = flow(&api, &store, &nav)
            .submit(credentials("ada@example.com", "secret"))
            .await;

        assert_eq!(outcome.error_text(), Some("Login failed."));
        assert!(nav.visited().is_empty());
    }

    #[tokio::test]
    async fn test_login_blank_fields_never_reach_the_network() {
        let api = ScriptedApi::new();
        let store = RecordingStore::default();
        let nav = RecordingNavigator::default();

        let outcome = flow(&api, &store, &nav)
            .submit(credentials("ada@example.com", ""))
            .await;

        assert_eq!(outcome, SubmitOutcome::Invalid(vec![FieldId::Password]));
        assert!(api.login_calls().is_empty());
    }

    #[tokio::test]
    async fn test_login_whitespace_password_is_sent_as_typed() {
        let api = ScriptedApi::new();
        api.login_reply(401, message_body("Invalid credentials"));
        let store = RecordingStore::default();
        let nav = RecordingNavigator::default();

        let outcome = flow(&api, &store, &nav)
            .submit(credentials("a@b.co", "   "))
            .await;

        assert_eq!(outcome.error_text(), Some("Invalid credentials"));
        assert_eq!(api.login_calls(), vec![credentials("a@b.co", "   ")]);
    }

    #[tokio::test]
    async fn test_login_second_submit_while_in_flight_is_ignored() {
        let api = ScriptedApi::new();
        let release = api.hold_login();
        let store = RecordingStore::default();
        let nav = RecordingNavigator::default();
        let login = flow(&api, &store, &nav);

        let first = login.submit(credentials("ada@example.com", "secret"));
        futures::pin_mut!(first);
        assert!(first.as_mut().now_or_never().is_none());
        assert!(login.gate().is_busy());

        let second = login
            .submit(credentials("ada@example.com", "secret"))
            .await;
        assert_eq!(second, SubmitOutcome::AlreadySubmitting);
        assert_eq!(api.login_calls().len(), 1);

        release.send(Ok(ApiReply::new(200, token_body("abc")))).unwrap();
        assert_eq!(first.await, SubmitOutcome::Succeeded);
        assert!(!login.gate().is_busy());
        assert_eq!(nav.visited(), vec![Route::Dashboard]);
    }

    #[tokio::test]
    async fn test_login_busy_flag_reported_around_each_attempt() {
        let phases = Arc::new(Mutex::new(Vec::new()));
        let sink = phases.clone();
        let gate = SubmitGate::observed(move |phase| sink.lock().unwrap().push(phase));

        let api = ScriptedApi::new();
        api.login_reply(401, message_body("Invalid credentials"));
        api.login_reply(200, token_body("abc"));
        let store = RecordingStore::default();
        let nav = RecordingNavigator::default();
        let login = flow(&api, &store, &nav).with_gate(gate);

        login.submit(credentials("ada@example.com", "wrong")).await;
        login.submit(credentials("ada@example.com", "secret")).await;

        assert_eq!(
            *phases.lock().unwrap(),
            vec![
                SubmitPhase::Submitting,
                SubmitPhase::Idle,
                SubmitPhase::Submitting,
                SubmitPhase::Idle,
            ]
        );
    }

    #[tokio::test]
    async fn test_login_reply_after_unmount_is_dropped() {
        let api = ScriptedApi::new();
        let release = api.hold_login();
        let store = RecordingStore::default();
        let nav = RecordingNavigator::default();
        let login = flow(&api, &store, &nav);

        let pending = login.submit(credentials("ada@example.com", "secret"));
        futures::pin_mut!(pending);
        assert!(pending.as_mut().now_or_never().is_none());

        login.scope().cancel();
        let _ = release.send(Ok(ApiReply::new(200, token_body("abc"))));

        assert_eq!(pending.await, SubmitOutcome::Abandoned);
        assert!(store.writes().is_empty());
        assert!(nav.visited().is_empty());
        assert!(!login.gate().is_busy());
    }
}
