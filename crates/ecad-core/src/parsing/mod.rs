pub mod analytic;
pub mod distribution;
pub mod values;

use crate::extraction::PageContent;

/// A layout-specific line grammar, run as a fold over a document's lines.
///
/// `step` is pure: it receives the state carried from the previous line and
/// returns the state for the next one together with at most one record.
pub trait LineScanner {
    type State;
    type Record;

    /// State at the start of every document.
    fn initial_state(&self) -> Self::State;

    fn step(&self, state: Self::State, line: &str) -> (Self::State, Option<Self::Record>);
}

/// All lines of a document in page order, then line order.
///
/// Pages without text contribute nothing.
pub fn document_lines(pages: &[PageContent]) -> impl Iterator<Item = &str> {
    pages.iter().flat_map(PageContent::lines)
}

/// Run a scanner over every line of a document.
pub fn scan<S: LineScanner>(scanner: &S, pages: &[PageContent]) -> Vec<S::Record> {
    let (_, records) = document_lines(pages).fold(
        (scanner.initial_state(), Vec::new()),
        |(state, mut records), line| {
            let (next, record) = scanner.step(state, line);
            records.extend(record);
            (next, records)
        },
    );
    records
}

/// Text of a named group, trimmed; empty when the group did not take part.
pub(crate) fn group<'h>(caps: &regex::Captures<'h>, name: &str) -> &'h str {
    caps.name(name).map(|m| m.as_str().trim()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counts lines and emits the running count on lines starting with '#'.
    struct Counter;

    impl LineScanner for Counter {
        type State = usize;
        type Record = (usize, String);

        fn initial_state(&self) -> usize {
            0
        }

        fn step(&self, state: usize, line: &str) -> (usize, Option<(usize, String)>) {
            let next = state + 1;
            let record = line.starts_with('#').then(|| (next, line.to_string()));
            (next, record)
        }
    }

    #[test]
    fn test_document_lines_skip_empty_pages() {
        let pages = vec![
            PageContent::new(1, "a\nb"),
            PageContent::empty(2),
            PageContent::new(3, "c"),
        ];
        assert_eq!(document_lines(&pages).collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_scan_carries_state_across_pages() {
        let pages = vec![
            PageContent::new(1, "x\n#one"),
            PageContent::new(2, "y\n#two"),
        ];
        let records = scan(&Counter, &pages);
        assert_eq!(records, vec![(2, "#one".to_string()), (4, "#two".to_string())]);
    }

    #[test]
    fn test_scan_resets_state_per_invocation() {
        let pages = vec![PageContent::new(1, "#a")];
        assert_eq!(scan(&Counter, &pages), scan(&Counter, &pages));
        assert_eq!(scan(&Counter, &pages)[0].0, 1);
    }

    #[test]
    fn test_scan_empty_document() {
        assert!(scan(&Counter, &[]).is_empty());
    }
}
