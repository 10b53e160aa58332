//! Completion percentages for chapters and textbooks.
//!
//! Chapter progress is always derived from the current completion flags. The
//! textbook-level figure shown to readers is the stored `total_progress`
//! value; the derived aggregates below exist for callers that explicitly ask
//! for them and are never used in its place.

use crate::model::{Chapter, Textbook};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// `round(100 * part / total)` with halves rounded up. `total` must be > 0.
fn percentage(part: usize, total: usize) -> u8 {
    let part = part.min(total);
    ((200 * part + total) / (2 * total)) as u8
}

/// Completed share of `chapter`'s sections; 0 for a chapter with none.
pub fn chapter_progress(chapter: &Chapter) -> u8 {
    let total = chapter.sections.len();
    if total == 0 {
        return 0;
    }
    percentage(chapter.completed_count(), total)
}

/// Stored textbook progress, 0 when the catalog does not provide one.
pub fn stored_progress(document: &Textbook) -> u8 {
    document.total_progress.unwrap_or(0).min(100)
}

/// Rounded mean of [`chapter_progress`] over all chapters. Empty chapters
/// count as 0 %.
pub fn mean_chapter_progress(document: &Textbook) -> u8 {
    let count = document.chapters.len();
    if count == 0 {
        return 0;
    }
    let sum: usize = document
        .chapters
        .iter()
        .map(|chapter| chapter_progress(chapter) as usize)
        .sum();
    ((2 * sum + count) / (2 * count)) as u8
}

/// Completed sections over all sections of the textbook.
pub fn section_progress(document: &Textbook) -> u8 {
    let total = document.section_count();
    if total == 0 {
        return 0;
    }
    percentage(document.completed_count(), total)
}

/// Sidebar badge for a chapter's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ChapterBadge {
    None,
    InProgress,
    Complete,
}

impl ChapterBadge {
    pub fn for_progress(progress: u8) -> Self {
        match progress {
            0 => ChapterBadge::None,
            p if p >= 100 => ChapterBadge::Complete,
            _ => ChapterBadge::InProgress,
        }
    }
}
