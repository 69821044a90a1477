//! Sparse per-series attribute storage.

/// A sparse, growable table mapping a series index to an optional attribute
/// value.
///
/// A slot holding `None` means "no explicit value for this series, fall
/// through to the default" — it is not a distinct attribute value. Growth
/// preserves existing entries and is amortized O(1) per `set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTable<T> {
    slots: Vec<Option<T>>,
}

impl<T> Default for AttributeTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AttributeTable<T> {
    /// Create an empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Get the value stored for a series, if any.
    ///
    /// An index beyond the current size simply yields `None`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Store a value (or explicit absence) for a series, growing the table
    /// as needed.
    pub fn set(&mut self, index: usize, value: Option<T>) {
        if index >= self.slots.len() {
            self.slots.resize_with(index + 1, || None);
        }
        self.slots[index] = value;
    }

    /// Reset every entry to absent.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// High-water mark of addressed slots (largest set index + 1), not the
    /// count of present values.
    #[must_use]
    pub fn size(&self) -> usize {
        self.slots.len()
    }
}
