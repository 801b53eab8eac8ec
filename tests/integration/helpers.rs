use combobox_nav::dom::LayoutBox;
use combobox_nav::{ComboboxOptions, ComboboxRegistry, Document, HostEvent, NodeId, NotificationKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::cell::RefCell;
use std::rc::Rc;

/// The roster used across scenarios:
///
/// ```text
/// <input>
/// <ul id="list-id">
///   <li id="baymax" role="option">Baymax</li>
///   <li>BB-8</li>
///   <li id="hubot" role="option">Hubot</li>
///   <li id="r2-d2" role="option">R2-D2</li>
///   <li id="johnny-5" hidden role="option">Johnny 5</li>
///   <li id="wall-e" role="option" aria-disabled="true">Wall-E</li>
///   <li><a href="#wall-e" role="option">Wall-E</a></li>
/// </ul>
/// ```
pub struct Page {
    pub doc: Document,
    pub registry: ComboboxRegistry,
    pub input: NodeId,
    pub list: NodeId,
    /// The seven `<li>` rows in markup order.
    pub items: Vec<NodeId>,
    /// The `<a>` option nested in the last row.
    pub link: NodeId,
    /// Targets of commit notifications seen at the root.
    pub commits: Rc<RefCell<Vec<NodeId>>>,
}

pub const ROW_HEIGHT: u32 = 18;

pub fn page() -> Page {
    let mut doc = Document::new();
    let root = doc.root();
    let input = doc.build("input").attr("type", "text").append_to(root);
    let list = doc.build("ul").role("listbox").id("list-id").append_to(root);
    let items = vec![
        doc.build("li").id("baymax").role("option").text("Baymax").append_to(list),
        doc.build("li").text("BB-8").append_to(list),
        doc.build("li").id("hubot").role("option").text("Hubot").append_to(list),
        doc.build("li").id("r2-d2").role("option").text("R2-D2").append_to(list),
        doc.build("li").id("johnny-5").hidden().role("option").text("Johnny 5").append_to(list),
        doc.build("li")
            .id("wall-e")
            .role("option")
            .attr("aria-disabled", "true")
            .text("Wall-E")
            .append_to(list),
        doc.build("li").append_to(list),
    ];
    let link = doc.build("a").attr("href", "#wall-e").role("option").text("Wall-E").append_to(items[6]);
    doc.stack_layout(list, ROW_HEIGHT, 120);

    let commits = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&commits);
    doc.add_listener(root, NotificationKind::Commit, move |n| sink.borrow_mut().push(n.target));

    Page { doc, registry: ComboboxRegistry::new(), input, list, items, link, commits }
}

/// Roster page with an installed and started combobox.
pub fn started_page(options: ComboboxOptions) -> Page {
    let mut page = page();
    page.registry.install(&mut page.doc, page.input, page.list, options).unwrap();
    page.registry.start(&mut page.doc, page.input);
    page
}

impl Page {
    pub fn press(&mut self, code: KeyCode) -> combobox_nav::EventOutcome {
        self.press_with(code, KeyModifiers::NONE)
    }

    pub fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) -> combobox_nav::EventOutcome {
        let event = HostEvent::Key(KeyEvent::new(code, modifiers));
        self.registry.dispatch(&mut self.doc, self.input, &event)
    }

    pub fn send(&mut self, event: HostEvent) -> combobox_nav::EventOutcome {
        self.registry.dispatch(&mut self.doc, self.input, &event)
    }

    pub fn selected_flag(&self, node: NodeId) -> Option<&str> {
        self.doc.attribute(node, "aria-selected")
    }

    pub fn active_descendant(&self) -> Option<&str> {
        self.doc.attribute(self.input, "aria-activedescendant")
    }

    /// Ids of committed targets, in order.
    pub fn commit_ids(&self) -> Vec<String> {
        self.commits
            .borrow()
            .iter()
            .map(|n| self.doc.attribute(*n, "id").unwrap_or_default().to_owned())
            .collect()
    }

    /// Number of options currently flagged `aria-selected="true"`.
    pub fn selected_count(&self) -> usize {
        self.doc
            .descendants(self.list)
            .into_iter()
            .filter(|n| self.selected_flag(*n) == Some("true"))
            .count()
    }

    /// Make the list a scroll container `rows` options tall.
    pub fn make_scrollable(&mut self, rows: u32) {
        self.doc.set_client_height(self.list, rows * ROW_HEIGHT);
    }

    pub fn collapse(&mut self, node: NodeId) {
        let top = self.doc.layout(node).offset_top;
        self.doc.set_layout(node, LayoutBox::new(top, 0, 0));
    }
}
