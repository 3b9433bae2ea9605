// src/extract/select.rs

/// Half-open `[start, end)` slice of `all`, clamped like JavaScript's
/// `Array.prototype.slice` for non-negative indices: `end` past the length
/// truncates, `start` at/after the length or after `end` gives an empty slice.
pub fn select_tables<T>(all: &[T], start: usize, end: usize) -> &[T] {
    let end = end.min(all.len());
    let start = start.min(end);
    &all[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inner_range() {
        let all = [0, 1, 2, 3, 4];
        assert_eq!(select_tables(&all, 1, 3), &[1, 2]);
    }

    #[test]
    fn end_past_len_truncates() {
        let all = ["a", "b", "c"];
        assert_eq!(select_tables(&all, 0, 100), &all[..]);
    }

    #[test]
    fn start_past_len_is_empty() {
        let all = ["a", "b", "c"];
        assert!(select_tables(&all, 10, 20).is_empty());
        assert!(select_tables(&all, 3, 3).is_empty());
    }

    #[test]
    fn reversed_range_is_empty() {
        let all = [1, 2, 3];
        assert!(select_tables(&all, 2, 1).is_empty());
    }

    #[test]
    fn empty_input() {
        let none: [u8; 0] = [];
        assert!(select_tables(&none, 0, 5).is_empty());
    }
}
