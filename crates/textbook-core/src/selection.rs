//! State transitions for the active textbook and selection.
//!
//! Each function returns a new value rather than mutating shared state;
//! [`crate::session::ReaderSession`] swaps the results in.

use crate::model::{Selection, Textbook};

/// Builds the selection for a sidebar click. Ids are not checked against the
/// active textbook; queries on an unresolved selection degrade to the empty
/// state.
pub fn select_section(chapter_id: impl Into<String>, section_id: impl Into<String>) -> Selection {
    Selection::new(chapter_id, section_id)
}

/// Makes `document` active and resets the selection to its first section.
pub fn select_document(document: Textbook) -> (Textbook, Option<Selection>) {
    let selection = document.first_selection();
    (document, selection)
}

/// Copy of `document` with every section named `section_id` completed.
///
/// Other sections are untouched and an unknown id yields an identical copy.
/// Completion is never cleared here, so repeated calls are idempotent.
pub fn mark_section_complete(document: &Textbook, section_id: &str) -> Textbook {
    let mut updated = document.clone();
    for section in updated
        .chapters
        .iter_mut()
        .flat_map(|chapter| chapter.sections.iter_mut())
        .filter(|section| section.id == section_id)
    {
        section.completed = true;
    }
    updated
}
