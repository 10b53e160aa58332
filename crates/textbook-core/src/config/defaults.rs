pub(crate) fn default_font_size() -> crate::config::FontSize {
    crate::config::FontSize::Base
}

pub(crate) fn default_log_level() -> crate::config::LogLevel {
    crate::config::LogLevel::Info
}

pub(crate) fn default_user_name() -> String {
    "Student".to_string()
}

pub(crate) fn default_user_email() -> String {
    "student@example.com".to_string()
}
