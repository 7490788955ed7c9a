//! Selected-index state and change notification

use std::fmt;

use reel_contracts::listener::SelectionListener;
use reel_model::Cell;

/// Handle returned by [`Selection::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// The committed selection plus its observers.
///
/// Only the engine mutates this; hosts read it and subscribe to changes.
#[derive(Default)]
pub struct Selection {
    index: usize,
    listeners: Vec<(ListenerId, Box<dyn SelectionListener>)>,
    next_id: u64,
}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("index", &self.index)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn subscribe<L>(&mut self, listener: L) -> ListenerId
    where
        L: SelectionListener + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false when the id was unknown.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Commit `index` and notify listeners, in subscription order, if it
    /// differs from the current value. Returns whether anything changed.
    pub fn commit(&mut self, index: usize, cell: Option<&Cell>) -> bool {
        if index == self.index {
            return false;
        }
        self.index = index;
        for (_, listener) in &mut self.listeners {
            listener.on_select(index, cell);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn unchanged_index_does_not_notify() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut selection = Selection::new();
        let sink = Rc::clone(&seen);
        selection.subscribe(move |i: usize, _: Option<&Cell>| {
            sink.borrow_mut().push(i)
        });

        assert!(!selection.commit(0, None));
        assert!(selection.commit(3, None));
        assert!(!selection.commit(3, None));
        assert_eq!(*seen.borrow(), vec![3]);
    }

    #[test]
    fn listeners_receive_cell_reference() {
        let seen = Rc::new(RefCell::new(None));
        let mut selection = Selection::new();
        let sink = Rc::clone(&seen);
        selection.subscribe(move |_: usize, cell: Option<&Cell>| {
            *sink.borrow_mut() = cell.copied()
        });

        let cell = Cell::new(2, 544.0, 256.0, 180.0);
        selection.commit(2, Some(&cell));
        assert_eq!(*seen.borrow(), Some(cell));
    }

    #[test]
    fn unsubscribed_listener_stops_receiving() {
        let count = Rc::new(RefCell::new(0));
        let mut selection = Selection::new();
        let sink = Rc::clone(&count);
        let id = selection.subscribe(move |_: usize, _: Option<&Cell>| {
            *sink.borrow_mut() += 1
        });

        selection.commit(1, None);
        assert!(selection.unsubscribe(id));
        assert!(!selection.unsubscribe(id));
        selection.commit(2, None);
        assert_eq!(*count.borrow(), 1);
        assert_eq!(selection.listener_count(), 0);
    }
}
