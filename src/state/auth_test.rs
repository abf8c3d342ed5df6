use super::*;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.is_signed_in());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(!state.is_anonymous());
}

// =============================================================
// Resolution
// =============================================================

#[test]
fn resolved_found_user_is_signed_in() {
    let state = AuthState::resolved(CurrentUser::Found(serde_json::json!({
        "id": 1,
        "username": "ann"
    })));
    assert!(!state.loading);
    assert!(state.is_signed_in());
    assert_eq!(state.username(), Some("ann"));
}

#[test]
fn resolved_absent_is_anonymous() {
    let state = AuthState::resolved(CurrentUser::Absent);
    assert!(state.is_anonymous());
    assert!(state.username().is_none());
}

#[test]
fn username_requires_string_field() {
    let state = AuthState::resolved(CurrentUser::Found(serde_json::json!({"username": 7})));
    assert!(state.is_signed_in());
    assert!(state.username().is_none());
}
