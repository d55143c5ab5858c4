use super::*;

#[test]
fn notice_constructors_set_kind() {
    assert_eq!(Notice::success("ok").kind, NoticeKind::Success);
    assert_eq!(Notice::error("no").kind, NoticeKind::Error);
    assert_eq!(Notice::success("ok").message, "ok");
}

#[test]
fn modal_defaults_closed() {
    assert_eq!(AuthModal::default(), AuthModal::Closed);
}

#[test]
fn signup_success_switches_to_login_form() {
    assert_eq!(AuthModal::Signup.after_signup_success(), AuthModal::Login);
}
