//! Test harness for tristate widgets.

use std::any::Any;
use std::collections::VecDeque;
use tracing::trace;
use tristate_core::{Constraints, Event, Key, MouseButton, Rect, Widget};

use crate::selector::Selector;

/// Test harness for interacting with a widget.
///
/// The root is laid out inside the viewport on creation and after every
/// [`rerender`](Self::rerender), so simulated clicks land on real bounds.
pub struct Harness<W: Widget> {
    /// Root widget being tested
    root: W,
    /// Event queue for simulation
    event_queue: VecDeque<Event>,
    /// Messages emitted by the root
    messages: Vec<Box<dyn Any + Send>>,
    /// Current viewport
    viewport: Rect,
}

impl<W: Widget> Harness<W> {
    /// Create a new harness with a root widget.
    pub fn new(root: W) -> Self {
        let mut harness = Self {
            root,
            event_queue: VecDeque::new(),
            messages: Vec::new(),
            viewport: Rect::new(0.0, 0.0, 1280.0, 720.0),
        };
        harness.relayout();
        harness
    }

    /// Set the viewport size.
    #[must_use]
    pub fn viewport(mut self, width: f32, height: f32) -> Self {
        self.viewport = Rect::new(0.0, 0.0, width, height);
        self.relayout();
        self
    }

    /// The root widget.
    pub fn root(&self) -> &W {
        &self.root
    }

    /// Re-render the root with new owner configuration.
    pub fn rerender(&mut self, update: impl FnOnce(&mut W)) -> &mut Self {
        update(&mut self.root);
        self.relayout();
        self
    }

    // === Event Simulation ===

    /// Simulate a primary click on a widget matching the selector.
    pub fn click(&mut self, selector: &str) -> &mut Self {
        if let Some(bounds) = self.query(selector).map(|w| w.bounds()) {
            let center = bounds.center();
            self.event_queue
                .push_back(Event::MouseMove { position: center });
            self.event_queue.push_back(Event::MouseDown {
                position: center,
                button: MouseButton::Left,
            });
            self.event_queue.push_back(Event::MouseUp {
                position: center,
                button: MouseButton::Left,
            });
            self.process_events();
        }
        self
    }

    /// Focus a widget matching the selector and press a key.
    pub fn press_key(&mut self, selector: &str, key: Key) -> &mut Self {
        if self.exists(selector) {
            self.event_queue.push_back(Event::FocusIn);
            self.event_queue.push_back(Event::KeyDown { key });
            self.event_queue.push_back(Event::KeyUp { key });
            self.process_events();
        }
        self
    }

    /// Deliver a raw event to the root.
    pub fn dispatch(&mut self, event: Event) -> &mut Self {
        self.event_queue.push_back(event);
        self.process_events();
        self
    }

    /// Drain emitted messages of type `T`, discarding the rest.
    pub fn take_messages<T: 'static>(&mut self) -> Vec<T> {
        self.messages
            .drain(..)
            .filter_map(|m| m.downcast::<T>().ok().map(|b| *b))
            .collect()
    }

    // === Queries ===

    /// Query for a widget matching the selector.
    #[must_use]
    pub fn query(&self, selector: &str) -> Option<&dyn Widget> {
        let sel = Selector::parse(selector).ok()?;
        find_widget(&self.root, &sel)
    }

    /// Query for all widgets matching the selector.
    #[must_use]
    pub fn query_all(&self, selector: &str) -> Vec<&dyn Widget> {
        let Ok(sel) = Selector::parse(selector) else {
            return Vec::new();
        };
        let mut results = Vec::new();
        find_all_widgets(&self.root, &sel, &mut results);
        results
    }

    /// Check if a widget exists.
    #[must_use]
    pub fn exists(&self, selector: &str) -> bool {
        self.query(selector).is_some()
    }

    /// Read an ARIA attribute (`role`, `aria-*`) from a matching widget.
    #[must_use]
    pub fn attribute(&self, selector: &str, name: &str) -> Option<String> {
        self.query(selector)
            .and_then(|w| w.aria_attributes().get(name).map(str::to_string))
    }

    // === Assertions ===

    /// Assert that a widget exists.
    pub fn assert_exists(&self, selector: &str) -> &Self {
        assert!(
            self.exists(selector),
            "Expected widget matching '{selector}' to exist"
        );
        self
    }

    /// Assert that a widget does not exist.
    pub fn assert_not_exists(&self, selector: &str) -> &Self {
        assert!(
            !self.exists(selector),
            "Expected widget matching '{selector}' to not exist"
        );
        self
    }

    /// Assert an ARIA attribute value.
    pub fn assert_attribute(&self, selector: &str, name: &str, expected: &str) -> &Self {
        let actual = self.attribute(selector, name);
        assert_eq!(
            actual.as_deref(),
            Some(expected),
            "Expected {name}=\"{expected}\" on '{selector}' but got {actual:?}"
        );
        self
    }

    /// Assert the count of matching widgets.
    pub fn assert_count(&self, selector: &str, expected: usize) -> &Self {
        let actual = self.query_all(selector).len();
        assert_eq!(
            actual, expected,
            "Expected {expected} widgets matching '{selector}' but found {actual}"
        );
        self
    }

    // === Internal ===

    fn relayout(&mut self) {
        let size = self.root.measure(Constraints::loose(self.viewport.size()));
        self.root
            .layout(Rect::new(self.viewport.x, self.viewport.y, size.width, size.height));
    }

    fn process_events(&mut self) {
        while let Some(event) = self.event_queue.pop_front() {
            trace!(?event, "harness dispatch");
            if let Some(message) = self.root.event(&event) {
                self.messages.push(message);
            }
        }
    }
}

fn find_widget<'a>(widget: &'a dyn Widget, selector: &Selector) -> Option<&'a dyn Widget> {
    if selector.matches(widget) {
        return Some(widget);
    }
    widget
        .children()
        .iter()
        .find_map(|child| find_widget(child.as_ref(), selector))
}

fn find_all_widgets<'a>(
    widget: &'a dyn Widget,
    selector: &Selector,
    results: &mut Vec<&'a dyn Widget>,
) {
    if selector.matches(widget) {
        results.push(widget);
    }
    for child in widget.children() {
        find_all_widgets(child.as_ref(), selector, results);
    }
}
