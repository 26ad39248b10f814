use crate::error::RangeError;
use crate::models::book::Book;

/// How offset and limit are checked against the sequence length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsPolicy {
    /// `0 < n < len` for both offset and limit, else a range error.
    #[default]
    Strict,
    /// `offset <= len`, any limit; both clamp instead of failing.
    Inclusive,
}

impl BoundsPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "strict" => Some(BoundsPolicy::Strict),
            "inclusive" => Some(BoundsPolicy::Inclusive),
            _ => None,
        }
    }
}

/// A list request after parameter parsing. `None` skips the step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub status: Option<String>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

pub fn filter_by_status(books: Vec<Book>, status: Option<&str>) -> Vec<Book> {
    match status {
        Some(wanted) => books
            .into_iter()
            .filter(|book| book.status.as_str() == wanted)
            .collect(),
        None => books,
    }
}

/// Stable, so equal titles keep their incoming order.
pub fn sort_by_title(mut books: Vec<Book>) -> Vec<Book> {
    books.sort_by(|a, b| a.title.cmp(&b.title));
    books
}

pub fn paginate(
    mut books: Vec<Book>,
    offset: Option<usize>,
    limit: Option<usize>,
    policy: BoundsPolicy,
) -> Result<Vec<Book>, RangeError> {
    if let Some(offset) = offset {
        let len = books.len();
        let valid = match policy {
            BoundsPolicy::Strict => offset > 0 && offset < len,
            BoundsPolicy::Inclusive => offset <= len,
        };
        if !valid {
            return Err(RangeError::Offset { offset, len });
        }
        books.drain(..offset);
    }

    // Checked against the length left after the offset step.
    if let Some(limit) = limit {
        let len = books.len();
        if policy == BoundsPolicy::Strict && !(limit > 0 && limit < len) {
            return Err(RangeError::Limit { limit, len });
        }
        books.truncate(limit);
    }

    Ok(books)
}

/// Filter, sort, then paginate a snapshot. Either the whole result or a single
/// error comes back; nothing is produced halfway.
pub fn run_query(
    snapshot: Vec<Book>,
    query: &ListQuery,
    policy: BoundsPolicy,
) -> Result<Vec<Book>, RangeError> {
    let filtered = filter_by_status(snapshot, query.status.as_deref());
    let sorted = sort_by_title(filtered);
    paginate(sorted, query.offset, query.limit, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::book::BookStatus;

    fn book(id: &str, title: &str, status: BookStatus) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: format!("Author {}", id),
            status,
        }
    }

    fn five_books() -> Vec<Book> {
        vec![
            book("3", "C Book", BookStatus::Completed),
            book("1", "A Book", BookStatus::Reading),
            book("5", "E Book", BookStatus::Unread),
            book("2", "B Book", BookStatus::Unread),
            book("4", "D Book", BookStatus::Reading),
        ]
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    fn query(offset: Option<usize>, limit: Option<usize>) -> ListQuery {
        ListQuery {
            status: None,
            offset,
            limit,
        }
    }

    #[test]
    fn test_no_parameters_returns_everything_sorted() {
        let result = run_query(five_books(), &ListQuery::default(), BoundsPolicy::Strict).unwrap();
        assert_eq!(
            titles(&result),
            vec!["A Book", "B Book", "C Book", "D Book", "E Book"]
        );
    }

    #[test]
    fn test_sort_is_byte_lexicographic() {
        let books = vec![
            book("1", "apple", BookStatus::Unread),
            book("2", "Zebra", BookStatus::Unread),
            book("3", "Apple", BookStatus::Unread),
        ];
        let sorted = sort_by_title(books);
        assert_eq!(titles(&sorted), vec!["Apple", "Zebra", "apple"]);
    }

    #[test]
    fn test_sort_keeps_order_of_equal_titles() {
        let books = vec![
            book("b", "Hamlet", BookStatus::Unread),
            book("x", "Emma", BookStatus::Unread),
            book("a", "Hamlet", BookStatus::Reading),
            book("c", "Hamlet", BookStatus::Completed),
        ];
        let sorted = sort_by_title(books);
        let ids: Vec<&str> = sorted.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["x", "b", "a", "c"]);
    }

    #[test]
    fn test_filtered_duplicate_titles_keep_snapshot_order() {
        let snapshot = vec![
            book("r1", "Hamlet", BookStatus::Reading),
            book("u1", "Hamlet", BookStatus::Unread),
            book("r2", "Emma", BookStatus::Reading),
            book("r3", "Hamlet", BookStatus::Reading),
            book("u2", "Emma", BookStatus::Unread),
            book("r4", "Hamlet", BookStatus::Reading),
        ];
        let query = ListQuery {
            status: Some("reading".to_string()),
            offset: None,
            limit: None,
        };
        let result = run_query(snapshot, &query, BoundsPolicy::Strict).unwrap();
        let ids: Vec<&str> = result.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["r2", "r1", "r3", "r4"]);
    }

    #[test]
    fn test_status_filter_is_exact() {
        let reading = filter_by_status(five_books(), Some("reading"));
        assert_eq!(reading.len(), 2);
        assert!(reading.iter().all(|b| b.status == BookStatus::Reading));

        assert!(filter_by_status(five_books(), Some("Reading")).is_empty());
        assert!(filter_by_status(five_books(), Some("borrowed")).is_empty());
        assert_eq!(filter_by_status(five_books(), None).len(), 5);
    }

    #[test]
    fn test_strict_offset_bounds() {
        let err = run_query(five_books(), &query(Some(0), None), BoundsPolicy::Strict).unwrap_err();
        assert_eq!(err, RangeError::Offset { offset: 0, len: 5 });

        let result = run_query(five_books(), &query(Some(4), None), BoundsPolicy::Strict).unwrap();
        assert_eq!(titles(&result), vec!["E Book"]);

        let err = run_query(five_books(), &query(Some(5), None), BoundsPolicy::Strict).unwrap_err();
        assert_eq!(err, RangeError::Offset { offset: 5, len: 5 });
    }

    #[test]
    fn test_strict_limit_bounds() {
        let result = run_query(five_books(), &query(None, Some(4)), BoundsPolicy::Strict).unwrap();
        assert_eq!(
            titles(&result),
            vec!["A Book", "B Book", "C Book", "D Book"]
        );

        let err = run_query(five_books(), &query(None, Some(5)), BoundsPolicy::Strict).unwrap_err();
        assert_eq!(err, RangeError::Limit { limit: 5, len: 5 });

        let err = run_query(five_books(), &query(None, Some(0)), BoundsPolicy::Strict).unwrap_err();
        assert_eq!(err, RangeError::Limit { limit: 0, len: 5 });
    }

    #[test]
    fn test_limit_is_checked_after_offset() {
        let result =
            run_query(five_books(), &query(Some(1), Some(3)), BoundsPolicy::Strict).unwrap();
        assert_eq!(titles(&result), vec!["B Book", "C Book", "D Book"]);

        // 4 books remain after the offset, so a limit of 4 is rejected.
        let err =
            run_query(five_books(), &query(Some(1), Some(4)), BoundsPolicy::Strict).unwrap_err();
        assert_eq!(err, RangeError::Limit { limit: 4, len: 4 });
    }

    #[test]
    fn test_strict_rejects_any_offset_on_empty_result() {
        let err = run_query(Vec::new(), &query(Some(1), None), BoundsPolicy::Strict).unwrap_err();
        assert_eq!(err, RangeError::Offset { offset: 1, len: 0 });
        assert!(run_query(Vec::new(), &ListQuery::default(), BoundsPolicy::Strict)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_filter_then_limit() {
        let books = vec![
            book("1", "A", BookStatus::Unread),
            book("2", "B", BookStatus::Reading),
            book("3", "C", BookStatus::Unread),
            book("4", "D", BookStatus::Unread),
            book("5", "E", BookStatus::Completed),
        ];
        let query = ListQuery {
            status: Some("unread".to_string()),
            offset: None,
            limit: Some(1),
        };
        let result = run_query(books, &query, BoundsPolicy::Strict).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].status, BookStatus::Unread);
        assert_eq!(result[0].title, "A");
    }

    #[test]
    fn test_inclusive_policy_clamps() {
        let all = run_query(five_books(), &query(Some(0), Some(5)), BoundsPolicy::Inclusive).unwrap();
        assert_eq!(all.len(), 5);

        let none = run_query(five_books(), &query(Some(5), None), BoundsPolicy::Inclusive).unwrap();
        assert!(none.is_empty());

        let capped =
            run_query(five_books(), &query(Some(3), Some(10)), BoundsPolicy::Inclusive).unwrap();
        assert_eq!(titles(&capped), vec!["D Book", "E Book"]);

        let err =
            run_query(five_books(), &query(Some(6), None), BoundsPolicy::Inclusive).unwrap_err();
        assert_eq!(err, RangeError::Offset { offset: 6, len: 5 });
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!(BoundsPolicy::parse("strict"), Some(BoundsPolicy::Strict));
        assert_eq!(BoundsPolicy::parse("Inclusive"), Some(BoundsPolicy::Inclusive));
        assert_eq!(BoundsPolicy::parse("loose"), None);
        assert_eq!(BoundsPolicy::default(), BoundsPolicy::Strict);
    }
}
