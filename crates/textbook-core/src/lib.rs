//! Navigation and progress state model for the textbook reader.
//!
//! The crate is UI-agnostic: a view layer sends [`session::SessionCommand`]s
//! to a [`session::ReaderSession`] and renders the returned
//! [`snapshot::ReaderSnapshot`].

pub mod bindings;
pub mod catalog;
pub mod config;
pub mod library;
pub mod model;
pub mod outline;
pub mod preferences;
pub mod profile;
pub mod progress;
pub mod selection;
pub mod session;
pub mod snapshot;

pub use catalog::{Catalog, CatalogError};
pub use model::{Chapter, Section, Selection, Textbook};
pub use session::{ReaderSession, SessionCommand, SessionEvent};
