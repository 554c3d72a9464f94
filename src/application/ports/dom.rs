// src/application/ports/dom.rs
//! Minimal view of the page the components are mounted on.
//!
//! The page runs a single-threaded event loop, so handles are `Rc` and
//! listeners are not required to be `Send`.

use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Input,
    Select,
}

impl ElementKind {
    pub fn tag(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Select => "select",
        }
    }
}

/// Selects a form control by tag and `name` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementQuery {
    kind: ElementKind,
    name: String,
}

impl ElementQuery {
    pub fn input(name: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Input,
            name: name.into(),
        }
    }

    pub fn select(name: impl Into<String>) -> Self {
        Self {
            kind: ElementKind::Select,
            name: name.into(),
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ElementQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[name=\"{}\"]", self.kind.tag(), self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEvent {
    Input,
    Change,
}

impl DomEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Input => "input",
            Self::Change => "change",
        }
    }
}

/// Called with the control that fired the event.
pub type Listener = Box<dyn Fn(&dyn FormControl)>;

pub trait FormControl {
    fn value(&self) -> String;
    fn set_value(&self, value: &str);
    fn add_event_listener(&self, event: DomEvent, listener: Listener);
}

pub trait Document {
    fn query_selector(&self, query: &ElementQuery) -> Option<Rc<dyn FormControl>>;
}

pub trait Location {
    fn pathname(&self) -> String;
    /// Navigate away; equivalent to assigning `location.href`.
    fn assign(&self, href: &str);
}
