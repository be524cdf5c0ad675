//! The hash-keyed cursor/page algorithm shared by every transaction-history
//! handler: committed account transactions, committed account-asset
//! transactions, and the pending pool.
//!
//! Ordering is whatever order `items` already arrives in — callers are
//! responsible for handing this function a stream already sorted
//! numerically by `(height, index)`, never by a stringified form of either.

use ledger_data_model::hash::Hash;
use ledger_data_model::response::Page;

/// A pagination cursor named an item absent from the stream it paginates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("pagination cursor does not match any item in this stream")]
pub struct UnknownCursor;

/// Slice `items` into one page starting at `first_hash` (or the start of the
/// stream when absent), stopping after `page_size` items.
///
/// # Errors
/// Returns [`UnknownCursor`] when `first_hash` is set but matches nothing in
/// `items`.
pub fn paginate_by_hash<T>(
    items: Vec<T>,
    page_size: u32,
    first_hash: Option<Hash>,
    hash_of: impl Fn(&T) -> Hash,
) -> Result<Page<T, Hash>, UnknownCursor> {
    let total = items.len() as u64;

    let start = match first_hash {
        None => 0,
        Some(hash) => items
            .iter()
            .position(|item| hash_of(item) == hash)
            .ok_or(UnknownCursor)?,
    };

    let mut iter = items.into_iter().skip(start);
    let mut page = Vec::new();
    for _ in 0..page_size {
        let Some(item) = iter.next() else {
            break;
        };
        page.push(item);
    }
    let next = iter.next().map(|item| hash_of(&item));

    Ok(Page {
        items: page,
        next,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hashed(tag: u8) -> Hash {
        Hash::new(&[tag])
    }

    #[test]
    fn pages_from_start_when_no_cursor() {
        let items = vec![1_u8, 2, 3, 4, 5];
        let page = paginate_by_hash(items, 2, None, |item| hashed(*item)).unwrap();
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.next, Some(hashed(3)));
        assert_eq!(page.total, 5);
    }

    #[test]
    fn last_page_has_no_next() {
        let items = vec![1_u8, 2, 3];
        let page = paginate_by_hash(items, 10, Some(hashed(3)), |item| hashed(*item)).unwrap();
        assert_eq!(page.items, vec![3]);
        assert_eq!(page.next, None);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn unknown_cursor_is_rejected() {
        let items = vec![1_u8, 2, 3];
        let err = paginate_by_hash(items, 10, Some(hashed(9)), |item| hashed(*item)).unwrap_err();
        assert_eq!(err, UnknownCursor);
    }

    #[test]
    fn integral_ordering_is_preserved_past_ten_items() {
        let items: Vec<u8> = (1..=12).collect();
        let page = paginate_by_hash(items, 1, Some(hashed(12)), |item| hashed(*item)).unwrap();
        assert_eq!(page.items, vec![12]);
        assert_eq!(page.next, None);
    }
}
