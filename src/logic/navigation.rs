//! List selection logic
//!
//! Pure functions for moving the highlighted card in a tab's list.
//! Movement wraps at both ends.

/// Index of the next card, wrapping past the end
///
/// With nothing selected the first card is chosen.
///
/// # Examples
/// ```
/// use friendstui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 4), Some(0));
/// assert_eq!(next_selection(Some(2), 4), Some(3));
/// assert_eq!(next_selection(Some(3), 4), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    match current {
        Some(i) if i + 1 < list_len => Some(i + 1),
        Some(_) | None => Some(0),
    }
}

/// Index of the previous card, wrapping past the start
///
/// With nothing selected the last card is chosen.
///
/// # Examples
/// ```
/// use friendstui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(None, 4), Some(3));
/// assert_eq!(prev_selection(Some(0), 4), Some(3));
/// assert_eq!(prev_selection(Some(9), 4), Some(3));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    match current {
        Some(i) if i > 0 && i < list_len => Some(i - 1),
        _ => Some(list_len - 1), // Wrap to end
    }
}

/// Keep a selection inside the bounds of a list that may have shrunk
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    current.map(|i| i.min(list_len - 1))
}

/// Find where an id landed after the list was rebuilt
///
/// Used to keep the highlight on the same person across refilter, resort
/// and refresh.
pub fn find_index_by_id<'a, I>(ids: I, id: &str) -> Option<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter().position(|candidate| candidate == id)
}
