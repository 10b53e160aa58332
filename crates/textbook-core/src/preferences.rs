use crate::config::FontSize;
use crate::model::Textbook;

/// Per-session reading pane and sidebar state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderPreferences {
    pub bookmarked: bool,
    pub font_size: FontSize,
    open_chapters: Vec<String>,
}

impl ReaderPreferences {
    pub fn new(font_size: FontSize, document: Option<&Textbook>) -> Self {
        let mut prefs = Self {
            bookmarked: false,
            font_size,
            open_chapters: Vec::new(),
        };
        prefs.reset_for(document);
        prefs
    }

    /// Clears the bookmark and collapses the sidebar down to the first
    /// chapter of `document`. Font size carries over.
    pub fn reset_for(&mut self, document: Option<&Textbook>) {
        self.bookmarked = false;
        self.open_chapters = document
            .and_then(Textbook::first_chapter_id)
            .map(|id| vec![id.to_string()])
            .unwrap_or_default();
    }

    pub fn toggle_bookmark(&mut self) -> bool {
        self.bookmarked = !self.bookmarked;
        self.bookmarked
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.font_size = size;
    }

    /// Expands or collapses a sidebar chapter. Returns the new open state.
    pub fn toggle_chapter(&mut self, chapter_id: &str) -> bool {
        if let Some(idx) = self.open_chapters.iter().position(|id| id == chapter_id) {
            self.open_chapters.remove(idx);
            false
        } else {
            self.open_chapters.push(chapter_id.to_string());
            true
        }
    }

    pub fn is_chapter_open(&self, chapter_id: &str) -> bool {
        self.open_chapters.iter().any(|id| id == chapter_id)
    }

    pub fn open_chapters(&self) -> &[String] {
        &self.open_chapters
    }
}
