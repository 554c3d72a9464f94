use std::cell::RefCell;

use crate::application::ports::dom::Location;

/// Records navigations instead of performing them.
#[derive(Debug, Default)]
pub struct InMemoryLocation {
    pathname: RefCell<String>,
    navigations: RefCell<Vec<String>>,
}

impl InMemoryLocation {
    pub fn new(pathname: impl Into<String>) -> Self {
        Self {
            pathname: RefCell::new(pathname.into()),
            navigations: RefCell::new(Vec::new()),
        }
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }

    pub fn last_navigation(&self) -> Option<String> {
        self.navigations.borrow().last().cloned()
    }
}

impl Location for InMemoryLocation {
    fn pathname(&self) -> String {
        self.pathname.borrow().clone()
    }

    fn assign(&self, href: &str) {
        self.navigations.borrow_mut().push(href.to_string());
        *self.pathname.borrow_mut() = href.to_string();
    }
}
