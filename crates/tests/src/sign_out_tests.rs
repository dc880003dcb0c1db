use pretty_assertions::assert_eq;
use shared_types::{sign_out, AppError, AppErrorKind, Navigate};

use crate::common::{doctor, FakeSession, RecordingNavigator};

const LOGIN: &str = "/login";

#[tokio::test]
async fn successful_sign_out_clears_then_navigates() {
    let session = FakeSession::signed_in(doctor());
    let navigator = RecordingNavigator::at("/appointments");
    let log = navigator.log.clone();

    let result = sign_out(&session, &navigator, LOGIN, || {
        log.borrow_mut().push("clear".to_string());
    })
    .await;

    assert!(result.is_ok());
    assert_eq!(session.end_calls.get(), 1);
    assert_eq!(
        *navigator.log.borrow(),
        vec!["clear".to_string(), "navigate:/login".to_string()]
    );
    assert_eq!(navigator.current_path(), LOGIN);
}

#[tokio::test]
async fn failed_sign_out_still_navigates_and_reports_error() {
    let session =
        FakeSession::signed_in(doctor()).failing_logout(AppError::network("connection refused"));
    let navigator = RecordingNavigator::at("/dashboard");
    let mut cleared = false;

    let result = sign_out(&session, &navigator, LOGIN, || cleared = true).await;

    let err = result.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
    assert!(cleared);
    assert_eq!(navigator.pushed(), vec![LOGIN.to_string()]);
}

#[tokio::test]
async fn sign_out_uses_configured_login_path() {
    let session = FakeSession::signed_in(doctor());
    let navigator = RecordingNavigator::at("/dashboard");

    sign_out(&session, &navigator, "/sign-in", || {}).await.unwrap();

    assert_eq!(navigator.pushed(), vec!["/sign-in".to_string()]);
}

#[tokio::test]
async fn sign_out_ends_the_session_exactly_once() {
    let session = FakeSession::signed_out().failing_logout(AppError::internal("boom"));
    let navigator = RecordingNavigator::at("/dashboard");

    let _ = sign_out(&session, &navigator, LOGIN, || {}).await;

    assert_eq!(session.end_calls.get(), 1);
    assert_eq!(session.current_calls.get(), 0);
}
