use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Smallest readable unit of a textbook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub sections: Vec<Section>,
    /// Progress value shipped with the catalog. Display code should use
    /// [`crate::progress::chapter_progress`], which is always current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub progress: Option<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Textbook {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub cover_image: Option<String>,
    pub chapters: Vec<Chapter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub total_progress: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub last_accessed: Option<DateTime<Utc>>,
}

/// Reference to the displayed section. Not validated on construction; use
/// [`Textbook::resolve`] to check it against a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Selection {
    pub chapter_id: String,
    pub section_id: String,
}

impl Selection {
    pub fn new(chapter_id: impl Into<String>, section_id: impl Into<String>) -> Self {
        Self {
            chapter_id: chapter_id.into(),
            section_id: section_id.into(),
        }
    }
}

impl Chapter {
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|section| section.id == section_id)
    }

    pub fn completed_count(&self) -> usize {
        self.sections.iter().filter(|section| section.completed).count()
    }
}

impl Textbook {
    pub fn chapter(&self, chapter_id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|chapter| chapter.id == chapter_id)
    }

    /// Looks up both halves of a selection. The section must live inside the
    /// named chapter; a matching section id elsewhere does not count.
    pub fn resolve(&self, selection: &Selection) -> Option<(&Chapter, &Section)> {
        let chapter = self.chapter(&selection.chapter_id)?;
        let section = chapter.section(&selection.section_id)?;
        Some((chapter, section))
    }

    /// Default selection after loading: first section of the first chapter.
    /// Later chapters are not searched when the first one is empty.
    pub fn first_selection(&self) -> Option<Selection> {
        let chapter = self.chapters.first()?;
        let section = chapter.sections.first()?;
        Some(Selection::new(&chapter.id, &section.id))
    }

    pub fn section_count(&self) -> usize {
        self.chapters.iter().map(|chapter| chapter.sections.len()).sum()
    }

    pub fn completed_count(&self) -> usize {
        self.chapters.iter().map(Chapter::completed_count).sum()
    }

    pub fn first_chapter_id(&self) -> Option<&str> {
        self.chapters.first().map(|chapter| chapter.id.as_str())
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub(crate) fn section(id: &str, completed: bool) -> Section {
        Section {
            id: id.to_string(),
            title: format!("Section {id}"),
            content: format!("Content of {id}"),
            completed,
            duration: None,
        }
    }

    pub(crate) fn chapter(id: &str, sections: Vec<Section>) -> Chapter {
        Chapter {
            id: id.to_string(),
            title: format!("Chapter {id}"),
            sections,
            progress: None,
        }
    }

    pub(crate) fn textbook(id: &str, chapters: Vec<Chapter>) -> Textbook {
        Textbook {
            id: id.to_string(),
            title: format!("Book {id}"),
            author: "Test Author".to_string(),
            description: "A book used in tests".to_string(),
            cover_image: None,
            chapters,
            total_progress: None,
            last_accessed: None,
        }
    }
}
