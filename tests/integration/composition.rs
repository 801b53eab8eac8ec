// =====
// TESTS: 4
// =====
//
// IME composition gating and input-driven clearing.

use combobox_nav::{ComboboxOptions, HostEvent};
use crossterm::event::KeyCode;
use pretty_assertions::assert_eq;

use crate::helpers::started_page;

#[test]
fn keys_are_ignored_while_composing() {
    let mut page = started_page(ComboboxOptions::default());
    page.press(KeyCode::Down);

    page.send(HostEvent::CompositionStart);
    assert_eq!(page.active_descendant(), None);
    assert_eq!(page.selected_count(), 0);

    for code in [KeyCode::Down, KeyCode::Enter, KeyCode::Esc] {
        let outcome = page.press(code);
        assert!(!outcome.prevent_default, "{code:?}");
        assert_eq!(outcome.commit, None);
    }
    assert_eq!(page.selected_count(), 0);
    assert!(page.commit_ids().is_empty());

    page.send(HostEvent::CompositionEnd);
    page.press(KeyCode::Down);
    assert_eq!(page.active_descendant(), Some("baymax"));
}

#[test]
fn composition_leaves_selection_when_the_list_is_unreachable() {
    let mut page = started_page(ComboboxOptions::default());
    page.press(KeyCode::Down);
    page.doc.remove_attribute(page.list, "id");

    page.send(HostEvent::CompositionStart);
    assert_eq!(page.selected_flag(page.items[0]), Some("true"));
    // Still gated.
    assert!(!page.press(KeyCode::Down).prevent_default);
    assert_eq!(page.selected_flag(page.items[0]), Some("true"));
}

#[test]
fn input_clears_selection() {
    let mut page = started_page(ComboboxOptions::default());
    page.press(KeyCode::Down);
    page.press(KeyCode::Down);
    page.send(HostEvent::Input);
    assert_eq!(page.selected_count(), 0);
    assert_eq!(page.active_descendant(), None);
}

#[test]
fn stop_resets_composition() {
    let mut page = started_page(ComboboxOptions::default());
    page.send(HostEvent::CompositionStart);
    page.registry.stop(&mut page.doc, page.input);
    page.registry.start(&mut page.doc, page.input);
    assert!(page.registry.get(page.input).is_some_and(|c| !c.is_composing()));
    assert!(page.press(KeyCode::Down).prevent_default);
}
