use crate::catalog::Catalog;
use crate::config::{AppConfig, FontSize};
use crate::library::GalleryState;
use crate::model::{Chapter, Section, Selection, Textbook};
use crate::outline;
use crate::preferences::ReaderPreferences;
use crate::profile::UserProfile;
use crate::selection;
use crate::snapshot::{self, ReaderSnapshot};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "command", rename_all = "snake_case")]
#[ts(export)]
pub enum SessionCommand {
    GetSnapshot,
    SelectSection {
        chapter_id: String,
        section_id: String,
    },
    SelectDocument {
        document_id: String,
    },
    NavigatePrevious,
    NavigateNext,
    MarkSectionComplete {
        section_id: String,
    },
    SetLibraryFilter {
        query: String,
    },
    ClearLibraryFilter,
    OpenGallery,
    CloseGallery,
    ToggleBookmark,
    SetFontSize {
        size: FontSize,
    },
    ToggleChapter {
        chapter_id: String,
    },
}

impl SessionCommand {
    pub fn action(&self) -> &'static str {
        match self {
            Self::GetSnapshot => "reader_get_snapshot",
            Self::SelectSection { .. } => "reader_select_section",
            Self::SelectDocument { .. } => "reader_select_document",
            Self::NavigatePrevious => "reader_navigate_previous",
            Self::NavigateNext => "reader_navigate_next",
            Self::MarkSectionComplete { .. } => "reader_mark_section_complete",
            Self::SetLibraryFilter { .. } => "library_set_filter",
            Self::ClearLibraryFilter => "library_clear_filter",
            Self::OpenGallery => "library_open",
            Self::CloseGallery => "library_close",
            Self::ToggleBookmark => "reader_toggle_bookmark",
            Self::SetFontSize { .. } => "reader_set_font_size",
            Self::ToggleChapter { .. } => "sidebar_toggle_chapter",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionEvent {
    pub action: &'static str,
    pub snapshot: ReaderSnapshot,
}

/// Owner of the active textbook, the selection inside it, and the UI state
/// around them. Every mutation goes through one of the methods below.
#[derive(Debug, Clone)]
pub struct ReaderSession {
    catalog: Catalog,
    document: Option<Textbook>,
    selection: Option<Selection>,
    preferences: ReaderPreferences,
    gallery: GalleryState,
    profile: UserProfile,
}

impl ReaderSession {
    /// Opens the catalog's first textbook. An empty catalog starts with no
    /// textbook and no selection.
    pub fn new(catalog: Catalog, config: &AppConfig) -> Self {
        let (document, selection) = match catalog.initial_document() {
            Some(doc) => {
                let (doc, sel) = selection::select_document(doc.clone());
                (Some(doc), sel)
            }
            None => {
                warn!("Catalog is empty; starting without a textbook");
                (None, None)
            }
        };
        let preferences = ReaderPreferences::new(config.font_size, document.as_ref());
        info!(
            textbooks = catalog.len(),
            document = document.as_ref().map(|doc| doc.id.as_str()).unwrap_or("-"),
            "Reader session started"
        );
        Self {
            catalog,
            document,
            selection,
            preferences,
            gallery: GalleryState::default(),
            profile: UserProfile::from_config(config),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn document(&self) -> Option<&Textbook> {
        self.document.as_ref()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn preferences(&self) -> &ReaderPreferences {
        &self.preferences
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    pub fn active_chapter(&self) -> Option<&Chapter> {
        self.resolved().map(|(chapter, _)| chapter)
    }

    pub fn active_section(&self) -> Option<&Section> {
        self.resolved().map(|(_, section)| section)
    }

    fn resolved(&self) -> Option<(&Chapter, &Section)> {
        let document = self.document.as_ref()?;
        document.resolve(self.selection.as_ref()?)
    }

    pub fn has_previous(&self) -> bool {
        match (&self.document, &self.selection) {
            (Some(doc), Some(sel)) => outline::has_previous(doc, sel),
            _ => false,
        }
    }

    pub fn has_next(&self) -> bool {
        match (&self.document, &self.selection) {
            (Some(doc), Some(sel)) => outline::has_next(doc, sel),
            _ => false,
        }
    }

    pub fn filtered_documents(&self) -> Vec<&Textbook> {
        crate::library::filter(self.catalog.list_documents(), &self.gallery.query)
    }

    pub fn select_section(&mut self, chapter_id: String, section_id: String) {
        let next = selection::select_section(chapter_id, section_id);
        debug!(chapter = %next.chapter_id, section = %next.section_id, "Selected section");
        self.selection = Some(next);
    }

    /// Switches to a catalog textbook and closes the gallery. Unknown ids
    /// leave the session untouched.
    pub fn select_document(&mut self, document_id: &str) {
        let Some(document) = self.catalog.find(document_id).cloned() else {
            warn!(document = %document_id, "Ignoring selection of unknown textbook");
            return;
        };
        let (document, selection) = selection::select_document(document);
        self.preferences.reset_for(Some(&document));
        info!(
            document = %document.id,
            has_selection = selection.is_some(),
            "Switched textbook"
        );
        self.document = Some(document);
        self.selection = selection;
        self.gallery.close();
    }

    pub fn navigate_previous(&mut self) {
        if let Some(prev) = self.step(outline::navigate_previous) {
            debug!(section = %prev.section_id, "Navigated to previous section");
            self.selection = Some(prev);
        }
    }

    pub fn navigate_next(&mut self) {
        if let Some(next) = self.step(outline::navigate_next) {
            debug!(section = %next.section_id, "Navigated to next section");
            self.selection = Some(next);
        }
    }

    /// Applies a navigation function; `None` when it would not move.
    fn step(&self, navigate: fn(&Textbook, &Selection) -> Selection) -> Option<Selection> {
        let (Some(doc), Some(sel)) = (&self.document, &self.selection) else {
            return None;
        };
        Some(navigate(doc, sel)).filter(|target| target != sel)
    }

    /// Marks a section of the active textbook complete. The catalog copy is
    /// updated too so the flag survives switching textbooks.
    pub fn mark_section_complete(&mut self, section_id: &str) {
        let Some(document) = &self.document else {
            return;
        };
        let updated = selection::mark_section_complete(document, section_id);
        if &updated == document {
            debug!(section = %section_id, "Section already complete or not found");
            return;
        }
        info!(document = %updated.id, section = %section_id, "Marked section complete");
        self.catalog.store(&updated);
        self.document = Some(updated);
    }

    pub fn set_library_filter(&mut self, query: String) {
        self.gallery.set_query(query);
    }

    pub fn clear_library_filter(&mut self) {
        self.gallery.clear_query();
    }

    pub fn open_gallery(&mut self) {
        self.gallery.open();
    }

    pub fn close_gallery(&mut self) {
        self.gallery.close();
    }

    pub fn toggle_bookmark(&mut self) {
        let bookmarked = self.preferences.toggle_bookmark();
        debug!(bookmarked, "Toggled bookmark");
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.preferences.set_font_size(size);
    }

    pub fn toggle_chapter(&mut self, chapter_id: &str) {
        let open = self.preferences.toggle_chapter(chapter_id);
        debug!(chapter = %chapter_id, open, "Toggled chapter");
    }

    pub fn snapshot(&self, now: DateTime<Utc>) -> ReaderSnapshot {
        let document = self.document.as_ref();
        let selection = self.selection.as_ref();
        ReaderSnapshot {
            header: snapshot::header_view(document, &self.profile),
            sidebar: document.map(|doc| snapshot::sidebar_view(doc, selection, &self.preferences)),
            content: snapshot::content_view(document, selection, &self.preferences),
            gallery: snapshot::gallery_view(
                &self.catalog,
                &self.gallery,
                document.map(|doc| doc.id.as_str()),
                now,
            ),
        }
    }

    pub fn apply_command(&mut self, command: SessionCommand, now: DateTime<Utc>) -> SessionEvent {
        let action = command.action();
        match command {
            SessionCommand::GetSnapshot => {}
            SessionCommand::SelectSection {
                chapter_id,
                section_id,
            } => self.select_section(chapter_id, section_id),
            SessionCommand::SelectDocument { document_id } => self.select_document(&document_id),
            SessionCommand::NavigatePrevious => self.navigate_previous(),
            SessionCommand::NavigateNext => self.navigate_next(),
            SessionCommand::MarkSectionComplete { section_id } => {
                self.mark_section_complete(&section_id)
            }
            SessionCommand::SetLibraryFilter { query } => self.set_library_filter(query),
            SessionCommand::ClearLibraryFilter => self.clear_library_filter(),
            SessionCommand::OpenGallery => self.open_gallery(),
            SessionCommand::CloseGallery => self.close_gallery(),
            SessionCommand::ToggleBookmark => self.toggle_bookmark(),
            SessionCommand::SetFontSize { size } => self.set_font_size(size),
            SessionCommand::ToggleChapter { chapter_id } => self.toggle_chapter(&chapter_id),
        }
        SessionEvent {
            action,
            snapshot: self.snapshot(now),
        }
    }
}
