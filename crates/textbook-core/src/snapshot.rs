//! Render-ready views of a [`crate::session::ReaderSession`].
//!
//! Everything a front end draws is computed here from the current textbook,
//! selection and preferences; views hold no state of their own.

use crate::catalog::Catalog;
use crate::config::FontSize;
use crate::library::{self, GalleryState, NO_RESULTS_MESSAGE};
use crate::model::{Selection, Textbook};
use crate::outline;
use crate::preferences::ReaderPreferences;
use crate::profile::{NO_TEXTBOOK_TITLE, UserProfile};
use crate::progress::{self, ChapterBadge};
use chrono::{DateTime, Utc};
use serde::Serialize;
use ts_rs::TS;

pub const EMPTY_SELECTION_MESSAGE: &str =
    "Select a section from the table of contents to begin reading";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct HeaderView {
    pub title: String,
    pub user_name: String,
    pub user_email: String,
    pub user_initials: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SectionEntry {
    pub id: String,
    pub title: String,
    pub duration: Option<String>,
    pub completed: bool,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ChapterEntry {
    pub id: String,
    pub title: String,
    pub progress: u8,
    pub badge: ChapterBadge,
    pub open: bool,
    pub sections: Vec<SectionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SidebarView {
    pub document_id: String,
    pub title: String,
    pub author: String,
    /// Stored textbook progress, not derived from the chapters below.
    pub total_progress: u8,
    pub chapters: Vec<ChapterEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct SectionView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub duration: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(tag = "state", rename_all = "snake_case")]
#[ts(export)]
pub enum ContentView {
    Empty {
        message: String,
    },
    Reading {
        chapter_id: String,
        chapter_title: String,
        section: SectionView,
        has_previous: bool,
        has_next: bool,
        bookmarked: bool,
        font_size: FontSize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct GalleryCard {
    pub id: String,
    pub title: String,
    pub author: String,
    pub description: String,
    pub cover_image: Option<String>,
    pub total_progress: u8,
    pub chapter_count: usize,
    pub last_accessed: String,
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct GalleryView {
    pub visible: bool,
    pub query: String,
    pub cards: Vec<GalleryCard>,
    pub empty_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct ReaderSnapshot {
    pub header: HeaderView,
    pub sidebar: Option<SidebarView>,
    pub content: ContentView,
    pub gallery: GalleryView,
}

pub fn header_view(document: Option<&Textbook>, profile: &UserProfile) -> HeaderView {
    HeaderView {
        title: document
            .map(|doc| doc.title.clone())
            .unwrap_or_else(|| NO_TEXTBOOK_TITLE.to_string()),
        user_name: profile.name.clone(),
        user_email: profile.email.clone(),
        user_initials: profile.initials(),
    }
}

pub fn sidebar_view(
    document: &Textbook,
    selection: Option<&Selection>,
    prefs: &ReaderPreferences,
) -> SidebarView {
    let active_section = selection.map(|sel| sel.section_id.as_str());
    let chapters = document
        .chapters
        .iter()
        .map(|chapter| {
            let progress = progress::chapter_progress(chapter);
            ChapterEntry {
                id: chapter.id.clone(),
                title: chapter.title.clone(),
                progress,
                badge: ChapterBadge::for_progress(progress),
                open: prefs.is_chapter_open(&chapter.id),
                sections: chapter
                    .sections
                    .iter()
                    .map(|section| SectionEntry {
                        id: section.id.clone(),
                        title: section.title.clone(),
                        duration: section.duration.clone(),
                        completed: section.completed,
                        active: active_section == Some(section.id.as_str()),
                    })
                    .collect(),
            }
        })
        .collect();

    SidebarView {
        document_id: document.id.clone(),
        title: document.title.clone(),
        author: document.author.clone(),
        total_progress: progress::stored_progress(document),
        chapters,
    }
}

pub fn content_view(
    document: Option<&Textbook>,
    selection: Option<&Selection>,
    prefs: &ReaderPreferences,
) -> ContentView {
    let resolved = document
        .zip(selection)
        .and_then(|(doc, sel)| doc.resolve(sel).map(|found| (doc, sel, found)));
    let Some((doc, sel, (chapter, section))) = resolved else {
        return ContentView::Empty {
            message: EMPTY_SELECTION_MESSAGE.to_string(),
        };
    };

    ContentView::Reading {
        chapter_id: chapter.id.clone(),
        chapter_title: chapter.title.clone(),
        section: SectionView {
            id: section.id.clone(),
            title: section.title.clone(),
            content: section.content.clone(),
            duration: section.duration.clone(),
            completed: section.completed,
        },
        has_previous: outline::has_previous(doc, sel),
        has_next: outline::has_next(doc, sel),
        bookmarked: prefs.bookmarked,
        font_size: prefs.font_size,
    }
}

pub fn gallery_view(
    catalog: &Catalog,
    gallery: &GalleryState,
    current_document_id: Option<&str>,
    now: DateTime<Utc>,
) -> GalleryView {
    let cards: Vec<GalleryCard> = library::filter(catalog.list_documents(), &gallery.query)
        .into_iter()
        .map(|doc| GalleryCard {
            id: doc.id.clone(),
            title: doc.title.clone(),
            author: doc.author.clone(),
            description: doc.description.clone(),
            cover_image: doc.cover_image.clone(),
            total_progress: progress::stored_progress(doc),
            chapter_count: doc.chapters.len(),
            last_accessed: library::last_accessed_label(doc.last_accessed, now),
            current: current_document_id == Some(doc.id.as_str()),
        })
        .collect();
    let empty_message = cards
        .is_empty()
        .then(|| NO_RESULTS_MESSAGE.to_string());

    GalleryView {
        visible: gallery.visible,
        query: gallery.query.clone(),
        cards,
        empty_message,
    }
}
