use crate::config::AppConfig;

/// Header title shown when no textbook is active.
pub const NO_TEXTBOOK_TITLE: &str = "Select a Textbook";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
}

impl UserProfile {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            name: config.user_name.clone(),
            email: config.user_email.clone(),
        }
    }

    /// Avatar fallback: first letter of up to the first two words.
    pub fn initials(&self) -> String {
        self.name
            .split(' ')
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}
