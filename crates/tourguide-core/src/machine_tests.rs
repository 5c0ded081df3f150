use super::*;

use tourguide_protocols::NewHistoryRecord;

fn image() -> ImageDataUrl {
    ImageDataUrl::new("image/jpeg", "QUJD")
}

fn described_record() -> HistoryRecord {
    NewHistoryRecord::described(image(), "**Title of the item**: Mona Lisa").with_id("r1")
}

fn pending_record() -> HistoryRecord {
    NewHistoryRecord::pending(image()).with_id("r2")
}

fn in_view(view: View) -> AppState {
    AppState {
        view,
        ..AppState::default()
    }
}

#[test]
fn test_initial_state_is_welcome() {
    let state = AppState::default();
    assert_eq!(state.view, View::Welcome);
    assert!(!state.history_visible);
}

#[test]
fn test_start_opens_capture() {
    let state = transition(AppState::default(), Event::Start);
    assert_eq!(state.view, View::Capture);
}

#[test]
fn test_full_capture_success_path() {
    let state = transition(in_view(View::Capture), Event::CaptureStarted);
    assert_eq!(state.view, View::Loading { image: None });

    let state = transition(state, Event::ImageNormalized(image()));
    assert_eq!(state.view.image(), Some(&image()));
    assert!(state.view.is_loading());

    let state = transition(
        state,
        Event::Described {
            image: image(),
            description: "A fresco".to_string(),
        },
    );
    assert_eq!(state.view.name(), "result");
    assert_eq!(state.view.description(), Some("A fresco"));
}

#[test]
fn test_loading_failure_goes_to_error() {
    let state = transition(
        in_view(View::Loading { image: None }),
        Event::Failed {
            image: None,
            message: "boom".to_string(),
        },
    );
    assert_eq!(state.view.error(), Some("boom"));
    assert!(state.view.image().is_none());
}

#[test]
fn test_capture_ignored_outside_capture_view() {
    for view in [
        View::Welcome,
        View::Loading { image: None },
        View::Error {
            image: None,
            message: "x".to_string(),
        },
    ] {
        let state = transition(in_view(view.clone()), Event::CaptureStarted);
        assert_eq!(state.view, view);
    }
}

#[test]
fn test_outcomes_ignored_when_not_loading() {
    let state = transition(
        in_view(View::Capture),
        Event::Described {
            image: image(),
            description: "late".to_string(),
        },
    );
    assert_eq!(state.view, View::Capture);
}

#[test]
fn test_retake_clears_result_and_error() {
    let from_result = transition(
        in_view(View::Result {
            image: image(),
            description: "d".to_string(),
        }),
        Event::Retake,
    );
    assert_eq!(from_result.view, View::Capture);
    assert!(from_result.view.image().is_none());

    let from_error = transition(
        in_view(View::Error {
            image: Some(image()),
            message: "m".to_string(),
        }),
        Event::Retake,
    );
    assert_eq!(from_error.view, View::Capture);
}

#[test]
fn test_retake_ignored_while_loading() {
    let state = transition(in_view(View::Loading { image: None }), Event::Retake);
    assert!(state.view.is_loading());
}

#[test]
fn test_select_described_goes_straight_to_result() {
    let mut state = in_view(View::Capture);
    state.history_visible = true;

    let state = transition(state, Event::SelectHistory(described_record()));
    assert_eq!(
        state.view,
        View::Result {
            image: image(),
            description: "**Title of the item**: Mona Lisa".to_string(),
        }
    );
    assert!(!state.history_visible);
}

#[test]
fn test_select_pending_goes_to_loading_with_image() {
    let mut state = in_view(View::Welcome);
    state.history_visible = true;

    let state = transition(state, Event::SelectHistory(pending_record()));
    assert_eq!(state.view, View::Loading { image: Some(image()) });
    assert!(!state.history_visible);
}

#[test]
fn test_sidebar_toggle_keeps_view() {
    let state = transition(in_view(View::Capture), Event::ShowHistory);
    assert!(state.history_visible);
    assert_eq!(state.view, View::Capture);

    let state = transition(state, Event::HideHistory);
    assert!(!state.history_visible);
}

#[test]
fn test_history_replaced() {
    let state = transition(
        AppState::default(),
        Event::HistoryReplaced(vec![described_record(), pending_record()]),
    );
    assert_eq!(state.history.len(), 2);
    assert!(state.find_record("r2").unwrap().is_pending());
    assert!(state.find_record("missing").is_none());
}

#[test]
fn test_start_ignored_after_welcome() {
    let state = transition(in_view(View::Capture), Event::Start);
    assert_eq!(state.view, View::Capture);
}
