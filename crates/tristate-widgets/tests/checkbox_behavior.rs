//! Checkbox behavior as seen through the accessibility tree.

use std::sync::{Arc, Mutex};
use tristate_core::{Brick, Event, Key, RecordingCanvas, Widget};
use tristate_test::Harness;
use tristate_widgets::{
    ActivationSource, ChangeEvent, CheckState, Checkbox, CheckboxChanged, CheckboxProps,
    ValidationStatus,
};

const BOX: &str = "[role='checkbox']";

fn recorder() -> (Arc<Mutex<Vec<ChangeEvent>>>, impl FnMut(&ChangeEvent) + Send + Sync) {
    let log = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&log);
    (log, move |event: &ChangeEvent| {
        sink.lock().expect("log lock").push(*event);
    })
}

fn calls(log: &Arc<Mutex<Vec<ChangeEvent>>>) -> Vec<ChangeEvent> {
    log.lock().expect("log lock").clone()
}

// =========================================================================
// Rendering
// =========================================================================

#[test]
fn default_state_is_unchecked() {
    let harness = Harness::new(Checkbox::new());
    harness
        .assert_exists("Checkbox")
        .assert_exists("#checkbox")
        .assert_attribute(BOX, "aria-checked", "false");
    assert!(!harness.root().is_checked());
}

#[test]
fn renders_native_input_markup() {
    let checkbox = Checkbox::new().checked(true).required(true).with_test_id("terms");
    assert_eq!(
        checkbox.to_html(),
        r#"<input class="tristate-checkbox" type="checkbox" data-testid="terms" aria-checked="true" aria-disabled="false" aria-required="true" aria-invalid="false" checked required/>"#
    );
}

#[test]
fn controlled_value_is_mirrored() {
    let mut harness = Harness::new(Checkbox::new().default_checked(false));
    harness.click(BOX);
    harness.assert_attribute(BOX, "aria-checked", "true");

    harness.rerender(|w| w.rerender(CheckboxProps::new().checked(true)));
    harness.assert_attribute(BOX, "aria-checked", "true");
    harness.rerender(|w| w.rerender(CheckboxProps::new().checked(false)));
    harness.assert_attribute(BOX, "aria-checked", "false");
    assert!(!harness.root().is_checked());
}

#[test]
fn two_clicks_restore_original_value() {
    let mut harness = Harness::new(Checkbox::new());
    let before = harness.root().is_checked();
    harness.click(BOX).click(BOX);
    assert_eq!(harness.root().is_checked(), before);
    assert_eq!(harness.take_messages::<CheckboxChanged>().len(), 2);
}

#[test]
fn indeterminate_overrides_checked() {
    let harness = Harness::new(Checkbox::new().checked(true).indeterminate(true));
    harness.assert_attribute(BOX, "aria-checked", "mixed");
    assert!(!harness.root().is_checked());
    assert_eq!(harness.root().get_state(), CheckState::Indeterminate);
    assert!(harness.root().to_html().contains(r#"data-indeterminate="true""#));
}

#[test]
fn disabled_suppresses_activation() {
    let (log, handler) = recorder();
    let mut harness = Harness::new(Checkbox::new().disabled(true).on_change(handler));
    harness.assert_attribute(BOX, "aria-disabled", "true");

    harness.click(BOX).press_key(BOX, Key::Space);
    assert!(!harness.root().is_checked());
    assert!(calls(&log).is_empty());
    assert!(harness.take_messages::<CheckboxChanged>().is_empty());
    harness.assert_attribute(BOX, "aria-disabled", "true");

    harness.rerender(|w| w.rerender(CheckboxProps::new()));
    harness
        .assert_attribute(BOX, "aria-disabled", "false")
        .assert_attribute(BOX, "aria-checked", "false");
    assert!(calls(&log).is_empty());
}

#[test]
fn default_checked_then_toggle() {
    let mut harness = Harness::new(Checkbox::new().default_checked(true));
    assert!(harness.root().is_checked());
    harness.click(BOX);
    assert!(!harness.root().is_checked());
    harness.assert_attribute(BOX, "aria-checked", "false");
}

#[test]
fn aria_checked_tri_state_sequence() {
    let mut harness = Harness::new(Checkbox::new().checked(false));
    harness.assert_attribute(BOX, "aria-checked", "false");
    harness.rerender(|w| w.rerender(CheckboxProps::new().checked(true)));
    harness.assert_attribute(BOX, "aria-checked", "true");
    harness.rerender(|w| w.rerender(CheckboxProps::new().checked(true).indeterminate(true)));
    harness.assert_attribute(BOX, "aria-checked", "mixed");
}

#[test]
fn validation_status_maps_to_aria_invalid() {
    for (status, expected) in [
        (ValidationStatus::None, "false"),
        (ValidationStatus::Success, "false"),
        (ValidationStatus::Error, "true"),
    ] {
        Harness::new(Checkbox::new().validation_status(status)).assert_attribute(
            BOX,
            "aria-invalid",
            expected,
        );
    }
}

#[test]
fn required_maps_to_aria_required() {
    Harness::new(Checkbox::new()).assert_attribute(BOX, "aria-required", "false");
    Harness::new(Checkbox::new().required(true)).assert_attribute(BOX, "aria-required", "true");
}

// =========================================================================
// Change notification
// =========================================================================

#[test]
fn click_notifies_with_next_value() {
    let (log, handler) = recorder();
    let mut harness = Harness::new(Checkbox::new().on_change(handler));
    harness.click(BOX);

    let events = calls(&log);
    assert_eq!(events.len(), 1);
    assert!(events[0].checked);
    assert!(!events[0].controlled);
    assert!(matches!(events[0].source, ActivationSource::Pointer { .. }));
}

#[test]
fn controlled_click_requests_without_moving() {
    let (log, handler) = recorder();
    let mut harness = Harness::new(Checkbox::new().checked(false).on_change(handler));
    harness.click(BOX);

    harness.assert_attribute(BOX, "aria-checked", "false");
    let events = calls(&log);
    assert_eq!(events.len(), 1);
    assert!(events[0].checked);
    assert!(events[0].controlled);
}

#[test]
fn keyboard_space_activates_when_focused() {
    let (log, handler) = recorder();
    let mut harness = Harness::new(Checkbox::new().on_change(handler));
    harness.press_key(BOX, Key::Space);
    harness.assert_attribute(BOX, "aria-checked", "true");
    harness.press_key(BOX, Key::Enter);
    harness.assert_attribute(BOX, "aria-checked", "true");

    let events = calls(&log);
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0].source,
        ActivationSource::Keyboard { key: Key::Space }
    );
}

#[test]
fn space_without_focus_is_ignored() {
    let mut harness = Harness::new(Checkbox::new());
    harness.dispatch(Event::KeyDown { key: Key::Space });
    harness.assert_attribute(BOX, "aria-checked", "false");
    harness
        .dispatch(Event::FocusIn)
        .dispatch(Event::FocusOut)
        .dispatch(Event::KeyDown { key: Key::Space });
    harness.assert_attribute(BOX, "aria-checked", "false");
}

#[test]
fn indeterminate_click_reports_negated_value() {
    let (log, handler) = recorder();
    let mut harness = Harness::new(
        Checkbox::new()
            .checked(true)
            .indeterminate(true)
            .on_change(handler),
    );
    harness.click(BOX);
    let events = calls(&log);
    assert_eq!(events.len(), 1);
    assert!(!events[0].checked);
    harness.assert_attribute(BOX, "aria-checked", "mixed");
}

#[test]
fn handler_survives_rerender() {
    let (log, handler) = recorder();
    let mut harness = Harness::new(Checkbox::new().on_change(handler));
    harness.rerender(|w| w.rerender(CheckboxProps::new().required(true)));
    harness.click(BOX);
    assert_eq!(calls(&log).len(), 1);
    harness.assert_attribute(BOX, "aria-required", "true");
}

// =========================================================================
// Accessibility queries
// =========================================================================

#[test]
fn label_is_accessible_name() {
    let harness = Harness::new(Checkbox::new().label("Accept terms").with_test_id("terms"));
    harness
        .assert_exists("[aria-label='Accept terms']")
        .assert_exists("[data-testid='terms']")
        .assert_not_exists("#checkbox")
        .assert_count(BOX, 1);
}

#[test]
fn paint_draws_label_and_box() {
    let harness = Harness::new(Checkbox::new().checked(true).label("On"));
    let mut canvas = RecordingCanvas::new();
    harness.root().paint(&mut canvas);
    // box, check mark, label
    assert_eq!(canvas.command_count(), 3);
}

#[test]
fn verification_passes_for_all_states() {
    for props in [
        CheckboxProps::new(),
        CheckboxProps::new().checked(true),
        CheckboxProps::new().indeterminate(true).disabled(true),
        CheckboxProps::new()
            .required(true)
            .validation_status(ValidationStatus::Error),
    ] {
        assert!(Checkbox::with_props(props).verify().is_valid());
    }
}
