//! Offset/limit windowing over an ordered result sequence.

/// Default page size the search client asks for when the caller gives none.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 25;

/// Returns the contiguous slice `[offset, offset + limit)` of `items`.
///
/// An `offset` past the end yields an empty slice. `limit == 0` together with
/// `offset == 0` means no windowing and returns the whole input.
pub fn window<T>(items: &[T], offset: usize, limit: usize) -> &[T] {
    if limit == 0 && offset == 0 {
        return items;
    }
    if offset >= items.len() {
        return &[];
    }

    let end = offset.saturating_add(limit).min(items.len());
    &items[offset..end]
}
