// =====
// TESTS: 12
// =====
//
// Keyboard and pointer commits, vetoes, disabled options and the default
// option fallback.

use combobox_nav::{
    ComboboxOptions, ComboboxRegistry, CommitOutcome, Document, HostEvent, Notification,
    NotificationKind, PointerEvent,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;
use std::cell::RefCell;
use std::rc::Rc;

use crate::helpers::{ROW_HEIGHT, started_page};

fn click(target: combobox_nav::NodeId) -> HostEvent {
    HostEvent::Click(PointerEvent::new(target))
}

#[test]
fn pick_hubot_then_r2_d2() {
    let mut page = started_page(ComboboxOptions::default());

    page.press(KeyCode::Down);
    page.press(KeyCode::Down);
    let outcome = page.press(KeyCode::Enter);
    assert!(outcome.prevent_default);
    assert_eq!(
        outcome.commit,
        Some(CommitOutcome::Committed { target: page.items[2], vetoed: false })
    );
    assert_eq!(page.commit_ids(), vec!["hubot"]);

    page.press(KeyCode::Down);
    page.press(KeyCode::Enter);
    assert_eq!(page.commit_ids(), vec!["hubot", "r2-d2"]);
}

#[test]
fn disabled_hubot_is_skipped_over_for_r2_d2() {
    let mut doc = Document::new();
    let root = doc.root();
    let input = doc.build("input").append_to(root);
    let list = doc.build("ul").id("robots").append_to(root);
    let baymax = doc.build("li").id("baymax").role("option").append_to(list);
    let hubot =
        doc.build("li").id("hubot").role("option").attr("aria-disabled", "true").append_to(list);
    let r2_d2 = doc.build("li").id("r2-d2").role("option").append_to(list);
    doc.stack_layout(list, ROW_HEIGHT, 120);

    let commits = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&commits);
    doc.add_listener(root, NotificationKind::Commit, move |n| sink.borrow_mut().push(n.target));

    let mut registry = ComboboxRegistry::new();
    registry.install(&mut doc, input, list, ComboboxOptions::default()).unwrap();
    registry.start(&mut doc, input);
    let mut press = |doc: &mut Document, code| {
        registry.dispatch(doc, input, &HostEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    };

    press(&mut doc, KeyCode::Down);
    assert_eq!(doc.attribute(baymax, "aria-selected"), Some("true"));
    press(&mut doc, KeyCode::Down);
    let outcome = press(&mut doc, KeyCode::Enter);
    assert!(outcome.prevent_default);
    assert_eq!(outcome.commit, Some(CommitOutcome::Swallowed(hubot)));
    assert!(commits.borrow().is_empty());
    assert_eq!(doc.attribute(hubot, "aria-selected"), Some("true"));
    assert_eq!(doc.attribute(input, "aria-activedescendant"), Some("hubot"));

    press(&mut doc, KeyCode::Down);
    let outcome = press(&mut doc, KeyCode::Enter);
    assert_eq!(outcome.commit, Some(CommitOutcome::Committed { target: r2_d2, vetoed: false }));
    assert_eq!(*commits.borrow(), vec![r2_d2]);
}

#[test]
fn disabled_option_swallows_enter_without_notifying() {
    let mut page = started_page(ComboboxOptions::default());
    for _ in 0..4 {
        page.press(KeyCode::Down);
    }
    assert_eq!(page.active_descendant(), Some("wall-e"));

    let outcome = page.press(KeyCode::Enter);
    assert!(outcome.prevent_default);
    assert_eq!(outcome.commit, Some(CommitOutcome::Swallowed(page.items[5])));
    assert!(page.commit_ids().is_empty());
}

#[test]
fn enter_with_nothing_selected_is_left_to_the_host() {
    let mut page = started_page(ComboboxOptions::default());
    let outcome = page.press(KeyCode::Enter);
    assert!(!outcome.prevent_default);
    assert_eq!(outcome.commit, Some(CommitOutcome::NotCommitted));
    assert!(page.commit_ids().is_empty());
}

#[test]
fn tab_commits_unless_disabled_by_options() {
    let mut page = started_page(ComboboxOptions::default());
    page.press(KeyCode::Down);
    assert!(page.press(KeyCode::Tab).prevent_default);
    assert_eq!(page.commit_ids(), vec!["baymax"]);

    let mut page =
        started_page(ComboboxOptions { allow_tab_commit: false, ..ComboboxOptions::default() });
    page.press(KeyCode::Down);
    let outcome = page.press(KeyCode::Tab);
    assert!(!outcome.prevent_default);
    assert_eq!(outcome.commit, None);
    assert!(page.commit_ids().is_empty());
    assert_eq!(page.active_descendant(), Some("baymax"));
}

#[test]
fn each_click_commits_exactly_once() {
    let mut page = started_page(ComboboxOptions::default());
    page.send(click(page.items[2]));
    page.send(click(page.items[0]));
    assert_eq!(page.commit_ids(), vec!["hubot", "baymax"]);
    // Clicks bypass the keyboard selection.
    assert_eq!(page.selected_count(), 0);
}

#[test]
fn clicks_off_eligible_options_do_nothing() {
    let mut page = started_page(ComboboxOptions::default());
    for target in [page.items[1], page.items[4], page.items[5], page.items[6], page.list] {
        assert_eq!(page.send(click(target)).commit, None, "{target}");
    }
    assert!(page.commit_ids().is_empty());
}

#[test]
fn click_on_nested_option_carries_the_pointer_event() {
    let mut page = started_page(ComboboxOptions::default());
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    page.doc.add_listener(page.list, NotificationKind::Commit, move |n| {
        *sink.borrow_mut() = n.pointer;
    });

    let outcome = page.send(click(page.link));
    assert_eq!(outcome.commit.and_then(CommitOutcome::target), Some(page.link));
    assert_eq!(*seen.borrow(), Some(PointerEvent::new(page.link)));
}

#[test]
fn vetoed_commit_is_reported() {
    let mut page = started_page(ComboboxOptions::default());
    page.doc.add_listener(page.list, NotificationKind::Commit, Notification::prevent_default);

    page.press(KeyCode::Down);
    let outcome = page.press(KeyCode::Enter);
    assert_eq!(
        outcome.commit,
        Some(CommitOutcome::Committed { target: page.items[0], vetoed: true })
    );
    assert!(page.send(click(page.items[2])).prevent_default);
    // Listeners still ran.
    assert_eq!(page.commit_ids(), vec!["baymax", "hubot"]);
}

#[test]
fn activation_runs_before_the_commit_notification() {
    let mut page = started_page(ComboboxOptions::default());
    let checked = Rc::new(RefCell::new(false));
    let order = Rc::new(RefCell::new(Vec::new()));

    let (flag, log) = (Rc::clone(&checked), Rc::clone(&order));
    page.doc.add_listener(page.items[3], NotificationKind::Activate, move |n| {
        *flag.borrow_mut() = true;
        log.borrow_mut().push(n.kind);
    });
    let (flag, log) = (Rc::clone(&checked), Rc::clone(&order));
    page.doc.add_listener(page.list, NotificationKind::Commit, move |n| {
        assert!(*flag.borrow(), "proxy state applied before commit");
        log.borrow_mut().push(n.kind);
    });

    for _ in 0..3 {
        page.press(KeyCode::Down);
    }
    page.press(KeyCode::Enter);
    assert_eq!(*order.borrow(), vec![NotificationKind::Activate, NotificationKind::Commit]);
}

#[test]
fn default_option_is_committed_when_nothing_is_selected() {
    let mut page =
        started_page(ComboboxOptions { default_first_option: true, ..ComboboxOptions::default() });
    assert!(page.doc.has_attribute(page.items[0], "data-combobox-option-default"));

    page.press(KeyCode::Down);
    page.press(KeyCode::Down);
    assert!(!page.doc.has_attribute(page.items[0], "data-combobox-option-default"));
    page.press(KeyCode::Esc);
    assert!(page.doc.has_attribute(page.items[0], "data-combobox-option-default"));

    page.press(KeyCode::Enter);
    assert_eq!(page.commit_ids(), vec!["baymax"]);

    page.registry.stop(&mut page.doc, page.input);
    assert!(!page.doc.has_attribute(page.items[0], "data-combobox-option-default"));
}

#[test]
fn collapsed_selection_is_not_committed() {
    let mut page = started_page(ComboboxOptions::default());
    page.press(KeyCode::Down);
    page.collapse(page.items[0]);
    assert_eq!(page.press(KeyCode::Enter).commit, Some(CommitOutcome::NotCommitted));
    assert!(page.commit_ids().is_empty());
}
