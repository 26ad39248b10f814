use crate::error::CatalogError;
use crate::models::book::{Book, BookInput};
use crate::models::store::{Backend, BookStore, StoreError};
use crate::services::query::{run_query, BoundsPolicy, ListQuery};
use crate::services::validation::{validate_for_create, validate_for_update};
use tracing::{debug, info};
use uuid::Uuid;

pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn create_book(backend: &Backend, input: BookInput) -> Result<Book, CatalogError> {
    let status = validate_for_create(&input)?;

    let book = Book {
        id: generate_id(),
        title: input.title,
        author: input.author,
        status,
    };
    backend.insert(book.clone());

    info!("Created book {} ({:?})", book.id, book.title);
    Ok(book)
}

pub fn list_books(
    backend: &Backend,
    query: &ListQuery,
    policy: BoundsPolicy,
) -> Result<Vec<Book>, CatalogError> {
    let snapshot = backend.snapshot();
    let total = snapshot.len();
    let books = run_query(snapshot, query, policy)?;

    debug!("Listed {} of {} books for {:?}", books.len(), total, query);
    Ok(books)
}

pub fn get_book(backend: &Backend, id: &str) -> Result<Book, CatalogError> {
    backend
        .fetch(id)
        .ok_or_else(|| StoreError::NotFound(id.to_string()).into())
}

/// Only the status changes; title, author and id come from the stored record.
pub fn update_status(backend: &Backend, id: &str, input: BookInput) -> Result<Book, CatalogError> {
    let mut book = get_book(backend, id)?;
    let status = validate_for_update(&input)?;

    book.status = status;
    backend.replace(id, book.clone())?;

    info!("Book {} is now {}", id, status);
    Ok(book)
}

pub fn delete_book(backend: &Backend, id: &str) -> Result<(), CatalogError> {
    backend.delete(id)?;
    info!("Deleted book {}", id);
    Ok(())
}
