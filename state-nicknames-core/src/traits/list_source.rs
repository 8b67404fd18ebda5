//! List data source Trait

/// List data source Trait
///
/// The seam a list widget reads through: how many rows there are, and the
/// text of one row. Row text is produced on demand, nothing is cached.
pub trait ListSource {
    /// Number of rows
    fn row_count(&self) -> usize;

    /// Text of the row at `index`, `None` when out of range
    fn row_text(&self, index: usize) -> Option<String>;
}
