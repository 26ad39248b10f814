use crate::models::book::Book;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("book {0} does not exist")]
    NotFound(String),
}

pub trait BookStore {
    /// The caller assigns a fresh, unique id before inserting.
    fn insert(&self, book: Book);
    fn fetch(&self, id: &str) -> Option<Book>;
    fn replace(&self, id: &str, book: Book) -> Result<(), StoreError>;
    fn delete(&self, id: &str) -> Result<(), StoreError>;
    /// All current records, in no particular order.
    fn snapshot(&self) -> Vec<Book>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type Backend = Arc<dyn BookStore + Send + Sync>;

/// Process-local store. One lock per call, no cross-call transactions, so
/// concurrent updates to the same id are last-write-wins.
#[derive(Default)]
pub struct MemoryStore {
    books: Mutex<HashMap<String, Book>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn books(&self) -> MutexGuard<'_, HashMap<String, Book>> {
        // Every mutation is a single HashMap call, so a poisoned map is still consistent.
        self.books.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BookStore for MemoryStore {
    fn insert(&self, book: Book) {
        self.books().insert(book.id.clone(), book);
    }

    fn fetch(&self, id: &str) -> Option<Book> {
        self.books().get(id).cloned()
    }

    fn replace(&self, id: &str, book: Book) -> Result<(), StoreError> {
        match self.books().get_mut(id) {
            Some(existing) => {
                *existing = book;
                Ok(())
            }
            None => Err(StoreError::NotFound(id.to_string())),
        }
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.books()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn snapshot(&self) -> Vec<Book> {
        self.books().values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.books().len()
    }
}
