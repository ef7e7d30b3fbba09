//! Tag click listener
//!
//! Maps each marker to the callback run when one of its tags is
//! activated. Adding a marker family only needs another `on` call.

use std::collections::HashMap;
use std::fmt;

use super::marker::Marker;

type Callback = Box<dyn FnMut(&str)>;

/// Callbacks invoked with the tag body (trigger stripped) on activation
#[derive(Default)]
pub struct TagClickListener {
    callbacks: HashMap<Marker, Callback>,
}

impl TagClickListener {
    /// Create a listener with no callbacks
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: register the callback for a marker, replacing any previous one
    pub fn on(mut self, marker: Marker, callback: impl FnMut(&str) + 'static) -> Self {
        self.callbacks.insert(marker, Box::new(callback));
        self
    }

    /// Builder: callback for `#` tags
    pub fn on_hash_tag_activated(self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on(Marker::HASH, callback)
    }

    /// Builder: callback for `@` tags
    pub fn on_at_tag_activated(self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on(Marker::AT, callback)
    }

    /// Check if a callback is registered for `marker`
    pub fn handles(&self, marker: Marker) -> bool {
        self.callbacks.contains_key(&marker)
    }

    /// Run the callback for `marker`. Returns false if there is none.
    pub fn dispatch(&mut self, marker: Marker, tag: &str) -> bool {
        match self.callbacks.get_mut(&marker) {
            Some(callback) => {
                callback(tag);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for TagClickListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut markers: Vec<_> = self.callbacks.keys().collect();
        markers.sort();
        f.debug_struct("TagClickListener")
            .field("markers", &markers)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_by_marker() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let hashes = Rc::clone(&seen);
        let ats = Rc::clone(&seen);

        let mut listener = TagClickListener::new()
            .on_hash_tag_activated(move |tag| hashes.borrow_mut().push(format!("hash:{}", tag)))
            .on_at_tag_activated(move |tag| ats.borrow_mut().push(format!("at:{}", tag)));

        assert!(listener.dispatch(Marker::HASH, "topic"));
        assert!(listener.dispatch(Marker::AT, "someone"));
        assert_eq!(*seen.borrow(), vec!["hash:topic", "at:someone"]);
    }

    #[test]
    fn test_dispatch_unregistered_marker() {
        let mut listener = TagClickListener::new().on_hash_tag_activated(|_| {});
        assert!(listener.handles(Marker::HASH));
        assert!(!listener.handles(Marker::AT));
        assert!(!listener.dispatch(Marker::AT, "nobody"));
    }

    #[test]
    fn test_on_replaces_callback() {
        let count = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&count);
        let mut listener = TagClickListener::new()
            .on(Marker::HASH, |_| panic!("replaced callback must not run"))
            .on(Marker::HASH, move |_| *counter.borrow_mut() += 1);

        listener.dispatch(Marker::HASH, "x");
        assert_eq!(*count.borrow(), 1);
    }
}
