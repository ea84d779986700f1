use crate::domain::model::Item;

/// The in-memory list store: an ordered sequence of items, owned exclusively
/// by whoever drives it. Indices are 0-based here and only valid until the
/// next removal; the shell translates to 1-based positions for the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingList {
    items: Vec<Item>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Appends `item` at the end. Always succeeds.
    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Removes the item at `index`. An out-of-bounds index is a silent no-op
    /// by contract, not an error; callers wanting feedback must check
    /// `len()` themselves before calling.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Renders one display line per item, `"<1-based>. <name> (<quantity>) - <notes>"`.
    /// Pure; printing is the caller's concern.
    pub fn render_lines(&self) -> Vec<String> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {} ({}) - {}", i + 1, item.name, item.quantity, item.notes))
            .collect()
    }
}
