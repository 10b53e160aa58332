//! The set of textbooks available to the reader.
//!
//! A catalog is either the built-in sample library or a JSON file using the
//! same record layout as [`Textbook`]. Loaded catalogs are checked for
//! duplicate ids because chapters and sections are looked up by id.

use crate::model::{Chapter, Section, Textbook};
use chrono::{TimeZone, Utc};
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("textbook id `{0}` appears more than once")]
    DuplicateDocument(String),
    #[error("chapter id `{chapter_id}` appears more than once in textbook `{document_id}`")]
    DuplicateChapter {
        document_id: String,
        chapter_id: String,
    },
    #[error("section id `{section_id}` appears more than once in textbook `{document_id}`")]
    DuplicateSection {
        document_id: String,
        section_id: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    documents: Vec<Textbook>,
}

impl Catalog {
    pub fn new(documents: Vec<Textbook>) -> Result<Self, CatalogError> {
        validate(&documents)?;
        Ok(Self { documents })
    }

    /// Built-in three-textbook library.
    pub fn sample() -> Self {
        Self {
            documents: SAMPLE_TEXTBOOKS.clone(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let documents: Vec<Textbook> = serde_json::from_str(json)?;
        Self::new(documents)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            textbooks = catalog.documents.len(),
            "Loaded textbook catalog"
        );
        Ok(catalog)
    }

    pub fn list_documents(&self) -> &[Textbook] {
        &self.documents
    }

    /// Textbook opened at startup; `None` for an empty catalog.
    pub fn initial_document(&self) -> Option<&Textbook> {
        self.documents.first()
    }

    pub fn find(&self, document_id: &str) -> Option<&Textbook> {
        self.documents.iter().find(|doc| doc.id == document_id)
    }

    /// Replaces the stored copy of `document` (matched by id). Unknown ids are
    /// ignored.
    pub fn store(&mut self, document: &Textbook) {
        if let Some(slot) = self.documents.iter_mut().find(|doc| doc.id == document.id) {
            *slot = document.clone();
            debug!(document = %document.id, "Stored updated textbook in catalog");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }
}

fn validate(documents: &[Textbook]) -> Result<(), CatalogError> {
    let mut document_ids = HashSet::new();
    for document in documents {
        if !document_ids.insert(document.id.as_str()) {
            return Err(CatalogError::DuplicateDocument(document.id.clone()));
        }
        let mut chapter_ids = HashSet::new();
        let mut section_ids = HashSet::new();
        for chapter in &document.chapters {
            if !chapter_ids.insert(chapter.id.as_str()) {
                return Err(CatalogError::DuplicateChapter {
                    document_id: document.id.clone(),
                    chapter_id: chapter.id.clone(),
                });
            }
            for section in &chapter.sections {
                if !section_ids.insert(section.id.as_str()) {
                    return Err(CatalogError::DuplicateSection {
                        document_id: document.id.clone(),
                        section_id: section.id.clone(),
                    });
                }
            }
        }
    }
    Ok(())
}

fn section(id: &str, title: &str, content: &str, completed: bool, duration: &str) -> Section {
    Section {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        completed,
        duration: Some(duration.to_string()),
    }
}

fn chapter(id: &str, title: &str, progress: u8, sections: Vec<Section>) -> Chapter {
    Chapter {
        id: id.to_string(),
        title: title.to_string(),
        sections,
        progress: Some(progress),
    }
}

static SAMPLE_TEXTBOOKS: Lazy<Vec<Textbook>> = Lazy::new(|| {
    vec![
        Textbook {
            id: "calc-1".to_string(),
            title: "Calculus I: Fundamentals".to_string(),
            author: "Dr. Sarah Mitchell".to_string(),
            description: "A comprehensive introduction to differential and integral calculus"
                .to_string(),
            cover_image: Some(
                "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=400&h=600&fit=crop"
                    .to_string(),
            ),
            total_progress: Some(35),
            last_accessed: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).single(),
            chapters: vec![
                chapter(
                    "ch1",
                    "Chapter 1: Limits and Continuity",
                    100,
                    vec![
                        section(
                            "s1-1",
                            "1.1 Introduction to Limits",
                            "A limit describes the value that a function approaches as the input approaches some value...",
                            true,
                            "45 min",
                        ),
                        section(
                            "s1-2",
                            "1.2 Calculating Limits",
                            "There are several techniques for calculating limits algebraically...",
                            true,
                            "60 min",
                        ),
                        section(
                            "s1-3",
                            "1.3 Continuity",
                            "A function is continuous at a point if the limit exists and equals the function value...",
                            true,
                            "30 min",
                        ),
                        section(
                            "s1-4",
                            "1.4 The Intermediate Value Theorem",
                            "If a function is continuous on a closed interval, it takes on every value between...",
                            true,
                            "45 min",
                        ),
                    ],
                ),
                chapter(
                    "ch2",
                    "Chapter 2: Derivatives",
                    50,
                    vec![
                        section(
                            "s2-1",
                            "2.1 The Derivative as a Limit",
                            "The derivative of a function at a point is the slope of the tangent line...",
                            true,
                            "50 min",
                        ),
                        section(
                            "s2-2",
                            "2.2 Differentiation Rules",
                            "Basic rules for finding derivatives include the power rule, product rule...",
                            true,
                            "60 min",
                        ),
                        section(
                            "s2-3",
                            "2.3 The Chain Rule",
                            "The chain rule is used to differentiate composite functions...",
                            false,
                            "45 min",
                        ),
                        section(
                            "s2-4",
                            "2.4 Implicit Differentiation",
                            "When a function is defined implicitly, we can still find its derivative...",
                            false,
                            "40 min",
                        ),
                    ],
                ),
                chapter(
                    "ch3",
                    "Chapter 3: Applications of Derivatives",
                    0,
                    vec![
                        section(
                            "s3-1",
                            "3.1 Related Rates",
                            "Related rates problems involve finding the rate of change of one quantity...",
                            false,
                            "55 min",
                        ),
                        section(
                            "s3-2",
                            "3.2 Optimization",
                            "Finding maximum and minimum values of functions using derivatives...",
                            false,
                            "65 min",
                        ),
                        section(
                            "s3-3",
                            "3.3 L'Hôpital's Rule",
                            "A technique for evaluating limits of indeterminate forms...",
                            false,
                            "35 min",
                        ),
                    ],
                ),
                chapter(
                    "ch4",
                    "Chapter 4: Integration",
                    0,
                    vec![
                        section(
                            "s4-1",
                            "4.1 Antiderivatives",
                            "An antiderivative is a function whose derivative is the given function...",
                            false,
                            "40 min",
                        ),
                        section(
                            "s4-2",
                            "4.2 The Definite Integral",
                            "The definite integral represents the area under a curve...",
                            false,
                            "50 min",
                        ),
                        section(
                            "s4-3",
                            "4.3 The Fundamental Theorem of Calculus",
                            "This theorem connects differentiation and integration...",
                            false,
                            "60 min",
                        ),
                    ],
                ),
            ],
        },
        Textbook {
            id: "physics-101".to_string(),
            title: "Physics 101: Mechanics".to_string(),
            author: "Prof. James Chen".to_string(),
            description: "Introduction to classical mechanics and motion".to_string(),
            cover_image: Some(
                "https://images.unsplash.com/photo-1636466497217-26a8cbeaf0aa?w=400&h=600&fit=crop"
                    .to_string(),
            ),
            total_progress: Some(15),
            last_accessed: Utc.with_ymd_and_hms(2024, 1, 14, 0, 0, 0).single(),
            chapters: vec![
                chapter(
                    "ph-ch1",
                    "Chapter 1: Kinematics",
                    60,
                    vec![
                        section(
                            "ph-s1-1",
                            "1.1 Position and Displacement",
                            "Understanding motion begins with describing position...",
                            true,
                            "30 min",
                        ),
                        section(
                            "ph-s1-2",
                            "1.2 Velocity and Speed",
                            "Velocity is the rate of change of position...",
                            true,
                            "35 min",
                        ),
                        section(
                            "ph-s1-3",
                            "1.3 Acceleration",
                            "Acceleration is the rate of change of velocity...",
                            false,
                            "40 min",
                        ),
                    ],
                ),
                chapter(
                    "ph-ch2",
                    "Chapter 2: Forces and Newton's Laws",
                    0,
                    vec![
                        section(
                            "ph-s2-1",
                            "2.1 Newton's First Law",
                            "An object at rest stays at rest...",
                            false,
                            "25 min",
                        ),
                        section(
                            "ph-s2-2",
                            "2.2 Newton's Second Law",
                            "Force equals mass times acceleration...",
                            false,
                            "35 min",
                        ),
                    ],
                ),
            ],
        },
        Textbook {
            id: "cs-intro".to_string(),
            title: "Introduction to Computer Science".to_string(),
            author: "Dr. Emily Rodriguez".to_string(),
            description: "Fundamental concepts in programming and computational thinking"
                .to_string(),
            cover_image: Some(
                "https://images.unsplash.com/photo-1517180102446-f3ece451e9d8?w=400&h=600&fit=crop"
                    .to_string(),
            ),
            total_progress: Some(75),
            last_accessed: Utc.with_ymd_and_hms(2024, 1, 16, 0, 0, 0).single(),
            chapters: vec![
                chapter(
                    "cs-ch1",
                    "Chapter 1: Introduction to Programming",
                    100,
                    vec![
                        section(
                            "cs-s1-1",
                            "1.1 What is Programming?",
                            "Programming is the process of creating instructions...",
                            true,
                            "20 min",
                        ),
                        section(
                            "cs-s1-2",
                            "1.2 Variables and Data Types",
                            "Variables store data that can be used in programs...",
                            true,
                            "30 min",
                        ),
                    ],
                ),
                chapter(
                    "cs-ch2",
                    "Chapter 2: Control Structures",
                    50,
                    vec![
                        section(
                            "cs-s2-1",
                            "2.1 Conditional Statements",
                            "If-else statements allow programs to make decisions...",
                            true,
                            "35 min",
                        ),
                        section(
                            "cs-s2-2",
                            "2.2 Loops",
                            "Loops allow code to be executed repeatedly...",
                            false,
                            "40 min",
                        ),
                    ],
                ),
            ],
        },
    ]
});
