use super::*;

#[test]
fn endpoints_join_cleanly() {
    assert_eq!(signup_endpoint("http://localhost:5000"), "http://localhost:5000/signup");
    assert_eq!(login_endpoint("http://localhost:5000"), "http://localhost:5000/login");
}

#[test]
fn endpoints_tolerate_trailing_slash() {
    assert_eq!(signup_endpoint("http://localhost:5000/"), "http://localhost:5000/signup");
    assert_eq!(login_endpoint("http://localhost:5000/"), "http://localhost:5000/login");
}

#[test]
fn failure_message_prefers_server_body() {
    let body = MessageResponse {
        message: "Invalid credentials.".to_owned(),
    };
    assert_eq!(failure_message(Some(body), 401), "Invalid credentials.");
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message(None, 500), "Request failed with status 500.");
}
