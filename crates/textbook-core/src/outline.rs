//! Reading order over a textbook and previous/next navigation.
//!
//! The flattened sequence is rebuilt from the document on every query, so
//! callers never hold an index that can go stale after a document switch.
//! Selections that do not resolve behave as "no previous, no next".

use crate::model::{Selection, Textbook};

/// All sections of `document` in reading order: chapters in declared order,
/// sections in declared order within each chapter.
pub fn flatten(document: &Textbook) -> Vec<Selection> {
    document
        .chapters
        .iter()
        .flat_map(|chapter| {
            chapter
                .sections
                .iter()
                .map(move |section| Selection::new(&chapter.id, &section.id))
        })
        .collect()
}

/// Index of `selection` in the flattened sequence; both ids must match.
pub fn position(document: &Textbook, selection: &Selection) -> Option<usize> {
    flatten(document)
        .iter()
        .position(|entry| entry == selection)
}

pub fn has_previous(document: &Textbook, selection: &Selection) -> bool {
    matches!(position(document, selection), Some(idx) if idx > 0)
}

pub fn has_next(document: &Textbook, selection: &Selection) -> bool {
    let sequence = flatten(document);
    match sequence.iter().position(|entry| entry == selection) {
        Some(idx) => idx + 1 < sequence.len(),
        None => false,
    }
}

/// Entry before `selection`, or `selection` itself when there is none.
pub fn navigate_previous(document: &Textbook, selection: &Selection) -> Selection {
    let sequence = flatten(document);
    match sequence.iter().position(|entry| entry == selection) {
        Some(idx) if idx > 0 => sequence[idx - 1].clone(),
        _ => selection.clone(),
    }
}

/// Entry after `selection`, or `selection` itself when there is none.
pub fn navigate_next(document: &Textbook, selection: &Selection) -> Selection {
    let mut sequence = flatten(document);
    match sequence.iter().position(|entry| entry == selection) {
        Some(idx) if idx + 1 < sequence.len() => sequence.swap_remove(idx + 1),
        _ => selection.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::fixtures::*;

    fn calculus() -> Textbook {
        Catalog::sample().list_documents()[0].clone()
    }

    #[test]
    fn flatten_preserves_chapter_then_section_order() {
        let book = calculus();
        let sequence = flatten(&book);

        assert_eq!(sequence.len(), book.section_count());
        assert_eq!(sequence.len(), 4 + 4 + 3 + 3);
        assert_eq!(sequence[0], Selection::new("ch1", "s1-1"));
        assert_eq!(sequence[3], Selection::new("ch1", "s1-4"));
        assert_eq!(sequence[4], Selection::new("ch2", "s2-1"));
        assert_eq!(sequence.last(), Some(&Selection::new("ch4", "s4-3")));
    }

    #[test]
    fn flatten_skips_empty_chapters() {
        let book = textbook(
            "b",
            vec![
                chapter("c1", vec![section("a", false)]),
                chapter("c2", vec![]),
                chapter("c3", vec![section("b", false)]),
            ],
        );
        assert_eq!(
            flatten(&book),
            vec![Selection::new("c1", "a"), Selection::new("c3", "b")]
        );
    }

    #[test]
    fn boundaries_report_no_previous_and_no_next() {
        let book = calculus();
        let sequence = flatten(&book);
        let first = &sequence[0];
        let last = &sequence[sequence.len() - 1];

        assert!(!has_previous(&book, first));
        assert!(has_next(&book, first));
        assert!(has_previous(&book, last));
        assert!(!has_next(&book, last));

        for entry in &sequence[1..sequence.len() - 1] {
            assert!(has_previous(&book, entry));
            assert!(has_next(&book, entry));
        }
    }

    #[test]
    fn navigation_is_a_no_op_at_boundaries() {
        let book = calculus();
        let first = Selection::new("ch1", "s1-1");
        let last = Selection::new("ch4", "s4-3");

        assert_eq!(navigate_previous(&book, &first), first);
        assert_eq!(navigate_next(&book, &last), last);
    }

    #[test]
    fn next_after_previous_returns_to_start_away_from_boundaries() {
        let book = calculus();
        for entry in flatten(&book) {
            if !has_previous(&book, &entry) {
                continue;
            }
            let back = navigate_previous(&book, &entry);
            assert!(has_next(&book, &back));
            assert_eq!(navigate_next(&book, &back), entry);
        }
    }

    #[test]
    fn next_crosses_chapter_boundary() {
        let book = calculus();
        let mut current = Selection::new("ch1", "s1-1");
        for _ in 0..3 {
            current = navigate_next(&book, &current);
        }
        assert_eq!(current, Selection::new("ch1", "s1-4"));

        current = navigate_next(&book, &current);
        assert_eq!(current, Selection::new("ch2", "s2-1"));
        assert_eq!(position(&book, &current), Some(4));

        assert_eq!(
            navigate_previous(&book, &current),
            Selection::new("ch1", "s1-4")
        );
    }

    #[test]
    fn unresolved_selection_has_no_neighbours() {
        let book = calculus();
        let stale = Selection::new("ph-ch1", "ph-s1-1");
        let mismatched = Selection::new("ch2", "s1-1");

        for selection in [&stale, &mismatched] {
            assert_eq!(position(&book, selection), None);
            assert!(!has_previous(&book, selection));
            assert!(!has_next(&book, selection));
            assert_eq!(navigate_next(&book, selection), *selection);
            assert_eq!(navigate_previous(&book, selection), *selection);
        }
    }

    #[test]
    fn empty_document_has_empty_sequence() {
        let empty = textbook("e", vec![]);
        let hollow = textbook("h", vec![chapter("c1", vec![]), chapter("c2", vec![])]);
        let any = Selection::new("c1", "s1");

        for book in [&empty, &hollow] {
            assert!(flatten(book).is_empty());
            assert!(!has_previous(book, &any));
            assert!(!has_next(book, &any));
        }
    }
}
