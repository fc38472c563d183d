//! In-memory row storage shared by every request handler.
//!
//! Rows live in a plain `Vec` in insertion order. Lookups and removals are a
//! single linear pass while holding the lock, so concurrent requests see each
//! operation as atomic.

use tokio::sync::Mutex;

use crate::row::{Row, RowId};

/// Ordered collection of every row created since the process started.
///
/// Ids are not unique: `get` answers with the first match and `delete`
/// removes every match.
#[derive(Default)]
pub struct RowStore {
    rows: Mutex<Vec<Row>>,
}

impl RowStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
        }
    }

    /// Creates a store holding the two demo rows used by `--seed`.
    pub fn seeded() -> Self {
        Self::with_rows(vec![
            Row::new(1)
                .with_field("name", "Apples")
                .with_field("quantity", 10),
            Row::new(2)
                .with_field("name", "Oranges")
                .with_field("quantity", 5),
        ])
    }

    pub fn with_rows(rows: Vec<Row>) -> Self {
        Self {
            rows: Mutex::new(rows),
        }
    }

    /// Returns a copy of every stored row, oldest first.
    ///
    /// Cloning keeps the lock out of the caller's hands while the response is
    /// serialized.
    pub async fn list(&self) -> Vec<Row> {
        self.rows.lock().await.clone()
    }

    /// Returns the first row with a matching id, scanning in insertion order.
    pub async fn get(&self, id: RowId) -> Option<Row> {
        let rows = self.rows.lock().await;
        rows.iter().find(|row| row.id == id).cloned()
    }

    /// Appends the row as-is and hands it back.
    pub async fn create(&self, row: Row) -> Row {
        let mut rows = self.rows.lock().await;
        rows.push(row.clone());
        row
    }

    /// Removes every row with a matching id and reports how many went away.
    ///
    /// Deleting an id that is not stored is not an error.
    pub async fn delete(&self, id: RowId) -> usize {
        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|row| row.id != id);
        before - rows.len()
    }

    pub async fn len(&self) -> usize {
        self.rows.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.lock().await.is_empty()
    }
}
