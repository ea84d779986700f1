/// One shopping-list record. Any text is accepted for `name` and `notes`;
/// `quantity` is signed to match the file format (negative values are
/// semantically odd but stored as-is).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    pub quantity: i64,
    pub notes: String,
}

impl Item {
    pub fn new(name: impl Into<String>, quantity: i64, notes: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            notes: notes.into(),
        }
    }
}
