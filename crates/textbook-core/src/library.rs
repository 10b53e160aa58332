//! Gallery filtering and card labels.

use crate::model::Textbook;
use chrono::{DateTime, Utc};

pub const NO_RESULTS_MESSAGE: &str = "No textbooks found";

/// Textbooks whose title, author or description contains `query`,
/// ignoring case, in catalog order. An empty query keeps everything.
pub fn filter<'a>(documents: &'a [Textbook], query: &str) -> Vec<&'a Textbook> {
    let needle = query.to_lowercase();
    documents
        .iter()
        .filter(|doc| {
            doc.title.to_lowercase().contains(&needle)
                || doc.author.to_lowercase().contains(&needle)
                || doc.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Relative "last opened" label for a gallery card.
pub fn last_accessed_label(last_accessed: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(date) = last_accessed else {
        return "Never accessed".to_string();
    };
    // Timestamps in the future read as today.
    let days = (now - date).num_days().max(0);
    match days {
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{days} days ago"),
        7..=29 => format!("{} weeks ago", days / 7),
        _ => format!("{} months ago", days / 30),
    }
}

/// Visibility and query of the library picker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    pub visible: bool,
    pub query: String,
}

impl GalleryState {
    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use chrono::{Duration, TimeZone};

    fn ids<'a>(docs: &[&'a Textbook]) -> Vec<&'a str> {
        docs.iter().map(|doc| doc.id.as_str()).collect()
    }

    #[test]
    fn empty_query_keeps_all_in_order() {
        let catalog = Catalog::sample();
        let all = filter(catalog.list_documents(), "");
        assert_eq!(ids(&all), vec!["calc-1", "physics-101", "cs-intro"]);
    }

    #[test]
    fn matches_title_case_insensitively() {
        let catalog = Catalog::sample();
        let found = filter(catalog.list_documents(), "CALCULUS");
        assert_eq!(ids(&found), vec!["calc-1"]);
    }

    #[test]
    fn matches_author_and_description() {
        let catalog = Catalog::sample();
        assert_eq!(
            ids(&filter(catalog.list_documents(), "james chen")),
            vec!["physics-101"]
        );
        assert_eq!(
            ids(&filter(catalog.list_documents(), "computational")),
            vec!["cs-intro"]
        );
    }

    #[test]
    fn shared_substring_keeps_catalog_order() {
        let catalog = Catalog::sample();
        // "intro" appears in the calculus and physics descriptions and the CS title.
        let found = filter(catalog.list_documents(), "intro");
        assert_eq!(ids(&found), vec!["calc-1", "physics-101", "cs-intro"]);
    }

    #[test]
    fn query_is_literal_not_tokenized() {
        let catalog = Catalog::sample();
        assert!(filter(catalog.list_documents(), "calculus physics").is_empty());
        assert!(filter(catalog.list_documents(), "calculus  i").is_empty());
        assert_eq!(filter(catalog.list_documents(), "i: f").len(), 1);
    }

    #[test]
    fn last_accessed_labels() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();
        let ago = |days: i64| Some(now - Duration::days(days));

        assert_eq!(last_accessed_label(None, now), "Never accessed");
        assert_eq!(last_accessed_label(Some(now), now), "Today");
        assert_eq!(last_accessed_label(Some(now - Duration::hours(23)), now), "Today");
        assert_eq!(last_accessed_label(ago(1), now), "Yesterday");
        assert_eq!(last_accessed_label(ago(6), now), "6 days ago");
        assert_eq!(last_accessed_label(ago(7), now), "1 weeks ago");
        assert_eq!(last_accessed_label(ago(29), now), "4 weeks ago");
        assert_eq!(last_accessed_label(ago(30), now), "1 months ago");
        assert_eq!(last_accessed_label(ago(95), now), "3 months ago");
        assert_eq!(last_accessed_label(Some(now + Duration::days(3)), now), "Today");
    }

    #[test]
    fn gallery_state_transitions() {
        let mut gallery = GalleryState::default();
        gallery.open();
        gallery.set_query("phys".to_string());
        assert!(gallery.visible);
        assert_eq!(gallery.query, "phys");

        gallery.clear_query();
        gallery.close();
        assert_eq!(gallery, GalleryState::default());
    }
}
