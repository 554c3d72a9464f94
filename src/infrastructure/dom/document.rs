use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::application::ports::dom::{Document, DomEvent, ElementQuery, FormControl, Listener};

/// A form control holding a value and its registered listeners.
///
/// Events are dispatched synchronously, in registration order.
#[derive(Default)]
pub struct InMemoryControl {
    value: RefCell<String>,
    listeners: RefCell<Vec<(DomEvent, Listener)>>,
}

impl InMemoryControl {
    pub fn new(value: impl Into<String>) -> Rc<Self> {
        Rc::new(Self {
            value: RefCell::new(value.into()),
            listeners: RefCell::new(Vec::new()),
        })
    }

    pub fn dispatch(&self, event: DomEvent) {
        let listeners = self.listeners.borrow();
        for (kind, listener) in listeners.iter() {
            if *kind == event {
                listener(self as &dyn FormControl);
            }
        }
    }

    /// Replace the value as if typed by the user, then fire `input`.
    pub fn type_text(&self, text: &str) {
        self.set_value(text);
        self.dispatch(DomEvent::Input);
    }

    /// Pick an option, then fire `change`.
    pub fn choose(&self, value: &str) {
        self.set_value(value);
        self.dispatch(DomEvent::Change);
    }

    pub fn listener_count(&self, event: DomEvent) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|(kind, _)| *kind == event)
            .count()
    }
}

impl FormControl for InMemoryControl {
    fn value(&self) -> String {
        self.value.borrow().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.borrow_mut() = value.to_string();
    }

    fn add_event_listener(&self, event: DomEvent, listener: Listener) {
        self.listeners.borrow_mut().push((event, listener));
    }
}

#[derive(Default)]
pub struct InMemoryDocument {
    controls: HashMap<ElementQuery, Rc<InMemoryControl>>,
}

impl InMemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, name: &str, value: &str) -> Self {
        self.controls
            .insert(ElementQuery::input(name), InMemoryControl::new(value));
        self
    }

    pub fn with_select(mut self, name: &str, value: &str) -> Self {
        self.controls
            .insert(ElementQuery::select(name), InMemoryControl::new(value));
        self
    }

    pub fn control(&self, query: &ElementQuery) -> Option<Rc<InMemoryControl>> {
        self.controls.get(query).cloned()
    }

    pub fn input(&self, name: &str) -> Option<Rc<InMemoryControl>> {
        self.control(&ElementQuery::input(name))
    }

    pub fn select(&self, name: &str) -> Option<Rc<InMemoryControl>> {
        self.control(&ElementQuery::select(name))
    }
}

impl Document for InMemoryDocument {
    fn query_selector(&self, query: &ElementQuery) -> Option<Rc<dyn FormControl>> {
        self.controls
            .get(query)
            .map(|control| Rc::clone(control) as Rc<dyn FormControl>)
    }
}
