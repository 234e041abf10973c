//! Flow Integration Tests
//!
//! End-to-end walks through the phone login flow: typing, submitting,
//! moving between screens, and logging out.

use phone_login::{
    init_tracing, phone, FlowEvent, FlowOutcome, IgnoreReason, Language, LoginConfig, Route,
    ScreenFlow, ScreenView, SessionStore,
};

fn type_text(flow: &mut ScreenFlow, text: &str) {
    let outcome = flow.dispatch(FlowEvent::TextChanged(text.to_string())).unwrap();
    assert_eq!(outcome, FlowOutcome::Updated);
}

/// Test typing key by key, the way the text field reports changes
#[test]
fn test_keystroke_by_keystroke_entry() {
    init_tracing();
    let mut flow = ScreenFlow::new(LoginConfig::default()).unwrap();

    // The field feeds back its formatted text plus the new key each time
    let mut shown = String::new();
    for key in "0912345678".chars() {
        let typed = format!("{}{}", shown, key);
        type_text(&mut flow, &typed);
        shown = flow.input().text().to_string();
    }

    assert_eq!(shown, "0912 345 678");
    assert!(flow.input().can_submit());
}

/// Test a full session: login, details and back, confirmed logout
#[test]
fn test_full_session_lifecycle() {
    let session = SessionStore::new();
    let mut flow = ScreenFlow::with_session(LoginConfig::default(), session.clone()).unwrap();

    // Phase 1: incomplete number cannot be submitted
    type_text(&mut flow, "0912 345");
    assert!(flow.dispatch(FlowEvent::SubmitPressed).unwrap().is_ignored());
    assert_eq!(flow.current_route(), Route::PhoneInput);

    // Phase 2: complete number logs in
    type_text(&mut flow, "0912 345 678");
    assert!(matches!(
        flow.dispatch(FlowEvent::SubmitPressed).unwrap(),
        FlowOutcome::Navigated(_)
    ));
    assert_eq!(session.phone_number(), "0912 345 678");

    // Phase 3: details and back keep the session
    flow.dispatch(FlowEvent::OpenDetails).unwrap();
    assert_eq!(flow.current_route(), Route::Details);
    flow.dispatch(FlowEvent::BackToHome).unwrap();
    assert_eq!(flow.current_route(), Route::Home);
    assert_eq!(session.phone_number(), "0912 345 678");

    // Phase 4: cancelled logout changes nothing
    flow.dispatch(FlowEvent::LogoutPressed).unwrap();
    assert_eq!(flow.dispatch(FlowEvent::CancelLogout).unwrap(), FlowOutcome::Dismissed);
    assert_eq!(flow.current_route(), Route::Home);
    assert!(session.is_logged_in());

    // Phase 5: confirmed logout clears everything
    flow.dispatch(FlowEvent::LogoutPressed).unwrap();
    flow.dispatch(FlowEvent::ConfirmLogout).unwrap();
    assert_eq!(flow.current_route(), Route::PhoneInput);
    assert_eq!(session.phone_number(), "");
    assert_eq!(flow.input().text(), "");

    match flow.view().unwrap() {
        ScreenView::PhoneInput(view) => {
            assert_eq!(view.text, "");
            assert!(!view.submit_enabled);
            assert!(view.error_message.is_none());
        }
        other => panic!("unexpected view {:?}", other),
    }
}

/// Test that logging in again after logout works
#[test]
fn test_login_after_logout() {
    let mut flow = ScreenFlow::new(LoginConfig::default()).unwrap();

    type_text(&mut flow, "0912345678");
    flow.dispatch(FlowEvent::SubmitPressed).unwrap();
    flow.dispatch(FlowEvent::LogoutPressed).unwrap();
    flow.dispatch(FlowEvent::ConfirmLogout).unwrap();

    type_text(&mut flow, "84987654321");
    flow.dispatch(FlowEvent::SubmitPressed).unwrap();
    assert_eq!(flow.current_route(), Route::Home);
    assert_eq!(flow.session().phone_number(), "+84 987 654 321");
}

/// Test the non-numeric error through the flow
#[test]
fn test_non_numeric_error_surfaces_and_clears() {
    let mut flow = ScreenFlow::new(LoginConfig::default()).unwrap();

    type_text(&mut flow, "091234abcd");
    match flow.view().unwrap() {
        ScreenView::PhoneInput(view) => {
            assert_eq!(view.text, "0912 34");
            assert_eq!(view.error_message.as_deref(), Some("Vui lòng chỉ nhập số"));
        }
        other => panic!("unexpected view {:?}", other),
    }

    type_text(&mut flow, "0912 34");
    match flow.view().unwrap() {
        ScreenView::PhoneInput(view) => assert!(view.error_message.is_none()),
        other => panic!("unexpected view {:?}", other),
    }
}

/// Test that a formatted number validates iff the typed text has 10 or 11 digits
#[test]
fn test_validate_matches_digit_count() {
    // none of these reach the truncation past nine grouped digits
    for input in [
        "",
        "+",
        "0",
        "12345",
        "0912345678",
        "84912345678",
        "091234567",
        "12345678901",
        "123456789012",
        "+84 9a1",
    ] {
        let digits = phone::digit_count(input);
        assert_eq!(
            phone::validate(&phone::format(input)),
            digits == 10 || digits == 11,
            "input {:?}",
            input
        );
    }
}

/// Test that national numbers past nine grouped digits are cut before validation
#[test]
fn test_truncated_national_number_validates() {
    let input = "091234567899";
    assert_eq!(phone::digit_count(input), 12);

    let formatted = phone::format(input);
    assert_eq!(formatted, "0912 345 678");
    assert!(phone::validate(&formatted));

    let input = "849123456789";
    assert_eq!(phone::digit_count(input), 12);
    assert!(phone::validate(&phone::format(input)));
}

/// Test an English flow loaded from JSON config
#[test]
fn test_english_config() {
    let config = LoginConfig::from_json(r#"{ "language": "en-US" }"#).unwrap();
    let mut flow = ScreenFlow::new(config).unwrap();
    assert_eq!(flow.translator().language(), Language::En);
    assert_eq!(flow.title().unwrap(), "Enter Phone Number");

    type_text(&mut flow, "0912345678");
    flow.dispatch(FlowEvent::SubmitPressed).unwrap();

    match flow.view().unwrap() {
        ScreenView::Home(view) => assert_eq!(view.greeting, "Logged in with: 0912 345 678"),
        other => panic!("unexpected view {:?}", other),
    }

    match flow.dispatch(FlowEvent::LogoutPressed).unwrap() {
        FlowOutcome::Prompt(dialog) => {
            assert_eq!(dialog.message, "Are you sure you want to log out?");
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

/// Test that the field length limit applies before formatting
#[test]
fn test_max_input_length() {
    let mut flow = ScreenFlow::new(LoginConfig::default()).unwrap();
    type_text(&mut flow, "+84 912 345 6789");
    assert_eq!(flow.input().text(), "+84 912 345 678");

    let mut flow = ScreenFlow::new(LoginConfig::default()).unwrap();
    type_text(&mut flow, "0912 345 678 999");
    assert_eq!(flow.input().text(), "0912 345 678");
}

/// Test that no flow path reaches home without a valid number
#[test]
fn test_home_unreachable_without_login() {
    let mut flow = ScreenFlow::new(LoginConfig::default()).unwrap();
    for event in [
        FlowEvent::OpenDetails,
        FlowEvent::BackToHome,
        FlowEvent::Back,
        FlowEvent::SubmitPressed,
        FlowEvent::ConfirmLogout,
    ] {
        assert!(flow.dispatch(event).unwrap().is_ignored());
        assert_eq!(flow.current_route(), Route::PhoneInput);
    }

    assert_eq!(
        flow.dispatch(FlowEvent::CancelLogout).unwrap(),
        FlowOutcome::Ignored {
            reason: IgnoreReason::NoPendingDialog
        }
    );
}

/// Test that observers of the shared session see logout
#[tokio::test]
async fn test_session_observer_sees_logout() {
    let session = SessionStore::new();
    let mut rx = session.subscribe();
    let mut flow = ScreenFlow::with_session(LoginConfig::default(), session.clone()).unwrap();

    type_text(&mut flow, "0912345678");
    flow.dispatch(FlowEvent::SubmitPressed).unwrap();
    rx.changed().await.unwrap();
    assert!(rx.borrow_and_update().is_logged_in());

    flow.dispatch(FlowEvent::LogoutPressed).unwrap();
    flow.dispatch(FlowEvent::ConfirmLogout).unwrap();
    rx.changed().await.unwrap();
    assert!(!rx.borrow_and_update().is_logged_in());
}
