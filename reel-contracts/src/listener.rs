use reel_model::Cell;

/// Observer of selection changes.
///
/// Called synchronously from the event that changed the selection, with
/// the new index and the cell at that index when layout is available.
pub trait SelectionListener {
    fn on_select(&mut self, index: usize, cell: Option<&Cell>);
}

impl<F> SelectionListener for F
where
    F: FnMut(usize, Option<&Cell>),
{
    fn on_select(&mut self, index: usize, cell: Option<&Cell>) {
        self(index, cell)
    }
}
