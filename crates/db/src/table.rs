//! A single in-memory table: an ordered `Vec` behind an async `RwLock`.
//!
//! Reads hand out clones so callers never hold the lock after a method
//! returns. Insertion order is preserved.

use agri_core::types::RecordId;
use tokio::sync::RwLock;

use crate::DbError;

/// A row type that can live in a [`Table`].
pub trait Record: Clone + Send + Sync {
    /// Table name used in errors and logs.
    const TABLE: &'static str;

    fn id(&self) -> RecordId;
}

pub struct Table<T> {
    rows: RwLock<Vec<T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
        }
    }
}

impl<T: Record> Table<T> {
    /// Append a row, rejecting a duplicate id.
    pub async fn insert(&self, row: T) -> Result<T, DbError> {
        self.insert_checked(row, |_| Ok(())).await
    }

    /// Append a row after running `check` against the current contents.
    ///
    /// The id check and `check` run under the same write lock as the push,
    /// so concurrent inserts cannot both pass.
    pub async fn insert_checked<F>(&self, row: T, check: F) -> Result<T, DbError>
    where
        F: FnOnce(&[T]) -> Result<(), DbError>,
    {
        let mut rows = self.rows.write().await;
        let id = row.id();
        if rows.iter().any(|r| r.id() == id) {
            return Err(DbError::Duplicate {
                table: T::TABLE,
                id,
            });
        }
        check(&rows)?;
        rows.push(row.clone());
        tracing::debug!(table = T::TABLE, %id, "Row inserted");
        Ok(row)
    }

    pub async fn all(&self) -> Vec<T> {
        self.rows.read().await.clone()
    }

    pub async fn get(&self, id: RecordId) -> Option<T> {
        self.find(|r| r.id() == id).await
    }

    /// First row matching `pred`.
    pub async fn find<P>(&self, pred: P) -> Option<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows.read().await.iter().find(|r| pred(r)).cloned()
    }

    /// Every row matching `pred`, in insertion order.
    pub async fn filter<P>(&self, pred: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.rows
            .read()
            .await
            .iter()
            .filter(|r| pred(r))
            .cloned()
            .collect()
    }

    /// Apply `f` to the row with the given id in place.
    ///
    /// Returns the updated row, or `None` (and changes nothing) when the id
    /// is unknown.
    pub async fn modify<F>(&self, id: RecordId, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let mut rows = self.rows.write().await;
        let row = rows.iter_mut().find(|r| r.id() == id)?;
        f(row);
        Some(row.clone())
    }

    /// Remove every row with the given id. Returns `true` if one was removed.
    pub async fn remove(&self, id: RecordId) -> bool {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|r| r.id() != id);
        rows.len() != before
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}
