use pretty_assertions::assert_eq;
use shared_types::{load_current_user, AppError, Role};

use crate::common::{doctor, FakeSession};

#[tokio::test]
async fn signed_in_session_yields_user() {
    let session = FakeSession::signed_in(doctor());
    let user = load_current_user(&session).await;
    assert_eq!(user.and_then(|u| u.role), Some(Role::Doctor));
    assert_eq!(session.current_calls.get(), 1);
}

#[tokio::test]
async fn signed_out_session_yields_none() {
    let session = FakeSession::signed_out();
    assert_eq!(load_current_user(&session).await, None);
}

#[tokio::test]
async fn lookup_failure_is_treated_as_no_user() {
    let session = FakeSession::failing_lookup(AppError::invalid_response("bad json"));
    assert_eq!(load_current_user(&session).await, None);
}
