use pretty_assertions::assert_eq;
use shared_types::{user_display_name, user_initials, user_role_label, Role, User};

use crate::common::user;

#[test]
fn full_name_scenario() {
    let ann = User {
        first_name: Some("Ann".into()),
        last_name: Some("Lee".into()),
        ..User::default()
    };
    assert_eq!(user_initials(Some(&ann)), "AL");
    assert_eq!(user_display_name(Some(&ann)), "Ann Lee");
}

#[test]
fn email_only_scenario() {
    let x = User {
        email: Some("x@y.com".into()),
        ..User::default()
    };
    assert_eq!(user_initials(Some(&x)), "X");
    assert_eq!(user_display_name(Some(&x)), "x@y.com");
}

#[test]
fn no_user_scenario() {
    assert_eq!(user_initials(None), "U");
    assert_eq!(user_display_name(None), "User");
    assert_eq!(user_role_label(None), "User");
}

#[test]
fn initials_are_one_or_two_uppercase_chars_for_every_field_combination() {
    let names = [None, Some("ann"), Some("")];
    let emails = [None, Some("zed@clinic.test"), Some("   ")];
    for first in names {
        for last in names {
            for email in emails {
                let u = User {
                    first_name: first.map(Into::into),
                    last_name: last.map(Into::into),
                    email: email.map(Into::into),
                    role: None,
                };
                let initials = user_initials(Some(&u));
                let len = initials.chars().count();
                assert!((1..=2).contains(&len), "{u:?} -> {initials:?}");
                assert!(initials.chars().all(char::is_uppercase), "{u:?} -> {initials:?}");
            }
        }
    }
}

#[test]
fn one_name_part_falls_back_to_email() {
    let u = User {
        first_name: Some("Ann".into()),
        email: Some("ann@clinic.test".into()),
        ..User::default()
    };
    assert_eq!(user_initials(Some(&u)), "A");
    assert_eq!(user_display_name(Some(&u)), "ann@clinic.test");
}

#[test]
fn role_label_uses_role_or_user() {
    let nurse = user("Nina", "Park", "nina@clinic.test", Some(Role::Assistant));
    assert_eq!(user_role_label(Some(&nurse)), "Assistant");
    let unset = user("Nina", "Park", "nina@clinic.test", None);
    assert_eq!(user_role_label(Some(&unset)), "User");
}

#[test]
fn user_deserializes_from_session_payload() {
    let u: User = serde_json::from_str(
        r#"{"firstName":"Ann","lastName":"Lee","email":"ann@clinic.test","role":"Doctor"}"#,
    )
    .unwrap();
    assert_eq!(u.role, Some(Role::Doctor));
    assert_eq!(u.display_name(), "Ann Lee");
}

#[test]
fn unknown_role_in_payload_becomes_user() {
    let u: User = serde_json::from_str(r#"{"email":"a@b.c","role":"janitor"}"#).unwrap();
    assert_eq!(u.role, Some(Role::User));
}
