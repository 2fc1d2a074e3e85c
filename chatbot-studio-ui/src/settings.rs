//! Widget appearance settings
//!
//! One flat record describes everything editable about the embedded chatbot
//! widget. The editor root owns a single `WidgetSettings` instance; every
//! edit flows through [`WidgetSettings::apply`] as a partial update so the
//! record is never replaced wholesale and never has missing fields.

/// Default user bubble color (blue-500).
pub const DEFAULT_BUBBLE_COLOR: &str = "#3B82F6";

/// Editable appearance and text of the chatbot widget.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetSettings {
    /// Title shown in the widget header
    pub title: String,
    /// First message the bot shows when the widget opens
    pub initial_message: String,
    /// Empty-state hint of the widget's message input
    pub placeholder: String,
    /// User bubble background as a `#RRGGBB` hex string.
    /// Stored as entered; not validated here.
    pub user_bubble_color: String,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            title: "Chatbot".to_string(),
            initial_message: "Hello! How can I assist you today?".to_string(),
            placeholder: "Type your message here...".to_string(),
            user_bubble_color: DEFAULT_BUBBLE_COLOR.to_string(),
        }
    }
}

impl WidgetSettings {
    /// Merge a partial update into the record. Only the fields the update
    /// names change; everything else keeps its current value.
    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(initial_message) = update.initial_message {
            self.initial_message = initial_message;
        }
        if let Some(placeholder) = update.placeholder {
            self.placeholder = placeholder;
        }
        if let Some(user_bubble_color) = update.user_bubble_color {
            self.user_bubble_color = user_bubble_color;
        }
    }
}

/// Partial change to [`WidgetSettings`], one field per edit event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    pub title: Option<String>,
    pub initial_message: Option<String>,
    pub placeholder: Option<String>,
    pub user_bubble_color: Option<String>,
}

impl SettingsUpdate {
    /// Update carrying a new title
    pub fn title(value: impl Into<String>) -> Self {
        Self { title: Some(value.into()), ..Self::default() }
    }

    /// Update carrying a new initial message
    pub fn initial_message(value: impl Into<String>) -> Self {
        Self { initial_message: Some(value.into()), ..Self::default() }
    }

    /// Update carrying a new input placeholder
    pub fn placeholder(value: impl Into<String>) -> Self {
        Self { placeholder: Some(value.into()), ..Self::default() }
    }

    /// Update carrying a new user bubble color
    pub fn user_bubble_color(value: impl Into<String>) -> Self {
        Self { user_bubble_color: Some(value.into()), ..Self::default() }
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.initial_message.is_none()
            && self.placeholder.is_none()
            && self.user_bubble_color.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = WidgetSettings::default();
        assert_eq!(settings.title, "Chatbot");
        assert_eq!(settings.initial_message, "Hello! How can I assist you today?");
        assert_eq!(settings.placeholder, "Type your message here...");
        assert_eq!(settings.user_bubble_color, "#3B82F6");
    }

    #[test]
    fn test_merge_isolation() {
        let mut settings = WidgetSettings::default();
        settings.apply(SettingsUpdate::placeholder("Ask me anything"));

        assert_eq!(settings.placeholder, "Ask me anything");
        // The other three fields keep their prior values
        assert_eq!(settings.title, "Chatbot");
        assert_eq!(settings.initial_message, "Hello! How can I assist you today?");
        assert_eq!(settings.user_bubble_color, "#3B82F6");
    }

    #[test]
    fn test_idempotent_apply() {
        let mut settings = WidgetSettings::default();
        let before = settings.clone();

        settings.apply(SettingsUpdate::title("Chatbot"));
        assert_eq!(settings, before);
    }

    #[test]
    fn test_empty_update_is_noop() {
        let mut settings = WidgetSettings::default();
        let before = settings.clone();

        let update = SettingsUpdate::default();
        assert!(update.is_empty());
        settings.apply(update);
        assert_eq!(settings, before);
    }

    #[test]
    fn test_last_write_wins() {
        let mut settings = WidgetSettings::default();
        settings.apply(SettingsUpdate::title("Support Bot"));
        settings.apply(SettingsUpdate::user_bubble_color("#FF0000"));
        settings.apply(SettingsUpdate::title("Sales Bot"));

        assert_eq!(settings.title, "Sales Bot");
        assert_eq!(settings.user_bubble_color, "#FF0000");
    }

    #[test]
    fn test_color_stored_unvalidated() {
        let mut settings = WidgetSettings::default();
        settings.apply(SettingsUpdate::user_bubble_color("not-a-color"));
        assert_eq!(settings.user_bubble_color, "not-a-color");
    }
}
