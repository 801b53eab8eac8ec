// combobox_nav — Keyboard and pointer option picking for combobox/listbox pairs
// Copyright (C) 2025  Simon Peter Rothgang
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! In-memory document tree the combobox reads and mutates.
//!
//! Elements live in an arena owned by [`Document`] and are addressed by
//! [`NodeId`]. Nodes are never freed; [`Document::detach`] only unlinks them,
//! so a stale id keeps resolving to the detached element.

pub mod event;

use std::collections::BTreeMap;
use std::fmt;

pub use event::{
    HostEvent, ListenerId, Notification, NotificationKind, PointerEvent,
};

/// Handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Rendered box of an element, relative to its scroll container's content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutBox {
    pub offset_top: u32,
    pub width: u32,
    pub height: u32,
}

impl LayoutBox {
    #[must_use]
    pub const fn new(offset_top: u32, width: u32, height: u32) -> Self {
        Self { offset_top, width, height }
    }

    #[must_use]
    pub const fn bottom(self) -> u32 {
        self.offset_top.saturating_add(self.height)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 && self.height == 0
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    tag: String,
    attributes: BTreeMap<String, String>,
    /// The `hidden` content attribute.
    pub hidden: bool,
    pub content_editable: bool,
    pub layout: LayoutBox,
    /// Scroll offset when this element is a scroll container.
    pub scroll_top: u32,
    /// Visible height when this element is a scroll container; zero otherwise.
    pub client_height: u32,
    /// Label for list items, current value for text controls.
    pub text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            hidden: false,
            content_editable: false,
            layout: LayoutBox::default(),
            scroll_top: 0,
            client_height: 0,
            text: String::new(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn id(&self) -> Option<&str> {
        self.attribute("id").filter(|id| !id.is_empty())
    }

    /// `type` of an `<input>`, lower-cased, defaulting to `text`.
    pub fn input_type(&self) -> Option<String> {
        (self.tag == "input")
            .then(|| self.attribute("type").map_or_else(|| "text".to_owned(), str::to_ascii_lowercase))
    }

    pub fn is_hidden_input(&self) -> bool {
        self.input_type().is_some_and(|t| t == "hidden")
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

pub(crate) struct Listener {
    pub(crate) id: ListenerId,
    pub(crate) node: NodeId,
    pub(crate) kind: NotificationKind,
    pub(crate) callback: Box<dyn FnMut(&mut Notification)>,
}

/// Owner of every element plus focus and host listeners.
pub struct Document {
    nodes: Vec<Element>,
    root: NodeId,
    focused: Option<NodeId>,
    pub(crate) listeners: Vec<Listener>,
    next_listener: u64,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("nodes", &self.nodes.len())
            .field("root", &self.root)
            .field("focused", &self.focused)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document whose root is a `<body>` element.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Element::new("body")],
            root: NodeId(0),
            focused: None,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        NodeId(self.nodes.len() - 1)
    }

    /// Start building an element; see [`ElementBuilder`].
    pub fn build(&mut self, tag: &str) -> ElementBuilder<'_> {
        let node = self.create_element(tag);
        ElementBuilder { doc: self, node }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.0 < self.nodes.len()
    }

    pub fn element(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node.0)
    }

    pub fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.nodes.get_mut(node.0)
    }

    /// Append `child` as the last child of `parent`, detaching it first.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.contains(parent) || !self.contains(child) || parent == child {
            return;
        }
        if self.is_inclusive_ancestor(child, parent) {
            tracing::warn!("refusing to append {child} into its own subtree at {parent}");
            return;
        }
        self.detach(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Unlink `node` from its parent. The node and its subtree stay addressable.
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.element(node).and_then(Element::parent) else {
            return;
        };
        self.nodes[parent.0].children.retain(|c| *c != node);
        self.nodes[node.0].parent = None;
        if self.focused.is_some_and(|f| self.is_inclusive_ancestor(node, f)) {
            self.focused = None;
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.element(node).and_then(Element::parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.element(node).map_or(&[], Element::children)
    }

    /// Every descendant of `node` in document (pre-)order, `node` excluded.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(node).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// `node`, its parent, and so on up to the root of its tree.
    pub fn ancestors_inclusive(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cursor = self.contains(node).then_some(node);
        while let Some(current) = cursor {
            out.push(current);
            cursor = self.parent(current);
        }
        out
    }

    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.ancestors_inclusive(node).contains(&ancestor)
    }

    /// Nearest inclusive ancestor of `node` matching `predicate`.
    pub fn closest(&self, node: NodeId, predicate: impl Fn(&Element) -> bool) -> Option<NodeId> {
        self.ancestors_inclusive(node)
            .into_iter()
            .find(|n| self.element(*n).is_some_and(&predicate))
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|el| el.attribute(name))
    }

    pub fn has_attribute(&self, node: NodeId, name: &str) -> bool {
        self.element(node).is_some_and(|el| el.has_attribute(name))
    }

    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: impl Into<String>) {
        if let Some(el) = self.element_mut(node) {
            el.attributes.insert(name.to_owned(), value.into());
        }
    }

    pub fn remove_attribute(&mut self, node: NodeId, name: &str) -> Option<String> {
        self.element_mut(node).and_then(|el| el.attributes.remove(name))
    }

    /// First attached element (in document order) carrying `id`.
    pub fn element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|n| self.attribute(*n, "id") == Some(id))
    }

    pub fn focus(&mut self, node: NodeId) {
        if self.contains(node) {
            self.focused = Some(node);
        }
    }

    pub fn blur(&mut self) {
        self.focused = None;
    }

    #[must_use]
    pub const fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn set_hidden(&mut self, node: NodeId, hidden: bool) {
        if let Some(el) = self.element_mut(node) {
            el.hidden = hidden;
        }
    }

    pub fn set_layout(&mut self, node: NodeId, layout: LayoutBox) {
        if let Some(el) = self.element_mut(node) {
            el.layout = layout;
        }
    }

    pub fn layout(&self, node: NodeId) -> LayoutBox {
        self.element(node).map(|el| el.layout).unwrap_or_default()
    }

    pub fn scroll_top(&self, node: NodeId) -> u32 {
        self.element(node).map_or(0, |el| el.scroll_top)
    }

    pub fn set_scroll_top(&mut self, node: NodeId, scroll_top: u32) {
        if let Some(el) = self.element_mut(node) {
            el.scroll_top = scroll_top;
        }
    }

    pub fn client_height(&self, node: NodeId) -> u32 {
        self.element(node).map_or(0, |el| el.client_height)
    }

    pub fn set_client_height(&mut self, node: NodeId, client_height: u32) {
        if let Some(el) = self.element_mut(node) {
            el.client_height = client_height;
        }
    }

    pub fn text(&self, node: NodeId) -> &str {
        self.element(node).map_or("", |el| el.text.as_str())
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        if let Some(el) = self.element_mut(node) {
            el.text = text.into();
        }
    }

    /// Block-flow layout for a list: each direct child of `container` gets a
    /// `row_height` row stacked from the top, nested elements share their
    /// row, and hidden subtrees or hidden inputs collapse to an empty box.
    pub fn stack_layout(&mut self, container: NodeId, row_height: u32, width: u32) {
        let mut top = 0;
        for child in self.children(container).to_vec() {
            let rendered = self.element(child).is_some_and(|el| !el.hidden && !el.is_hidden_input());
            if rendered {
                self.layout_subtree(child, LayoutBox::new(top, width, row_height));
                top += row_height;
            } else {
                self.layout_subtree(child, LayoutBox::new(top, 0, 0));
            }
        }
    }

    fn layout_subtree(&mut self, node: NodeId, layout: LayoutBox) {
        let collapsed = LayoutBox::new(layout.offset_top, 0, 0);
        let own = match self.element(node) {
            Some(el) if el.hidden || el.is_hidden_input() => collapsed,
            Some(_) => layout,
            None => return,
        };
        self.set_layout(node, own);
        for child in self.children(node).to_vec() {
            self.layout_subtree(child, own);
        }
    }

    /// Register a host listener on `node`. Notifications bubbling through
    /// `node` with a matching kind invoke `callback`.
    pub fn add_listener(
        &mut self,
        node: NodeId,
        kind: NotificationKind,
        callback: impl FnMut(&mut Notification) + 'static,
    ) -> ListenerId {
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.push(Listener { id, node, kind, callback: Box::new(callback) });
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != id);
        self.listeners.len() != before
    }
}

/// Fluent element construction, mostly for fixtures and demo markup.
#[derive(Debug)]
pub struct ElementBuilder<'a> {
    doc: &'a mut Document,
    node: NodeId,
}

impl ElementBuilder<'_> {
    #[must_use]
    pub fn attr(self, name: &str, value: &str) -> Self {
        self.doc.set_attribute(self.node, name, value);
        self
    }

    #[must_use]
    pub fn id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    #[must_use]
    pub fn role(self, role: &str) -> Self {
        self.attr("role", role)
    }

    #[must_use]
    pub fn text(self, text: &str) -> Self {
        self.doc.set_text(self.node, text);
        self
    }

    #[must_use]
    pub fn hidden(self) -> Self {
        self.doc.set_hidden(self.node, true);
        self
    }

    #[must_use]
    pub fn editable(self) -> Self {
        if let Some(el) = self.doc.element_mut(self.node) {
            el.content_editable = true;
        }
        self
    }

    pub fn append_to(self, parent: NodeId) -> NodeId {
        self.doc.append_child(parent, self.node);
        self.node
    }

    pub fn finish(self) -> NodeId {
        self.node
    }
}
