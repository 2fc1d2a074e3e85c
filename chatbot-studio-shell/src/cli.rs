//! Command-line interface for Chatbot Studio
//!
//! Provides CLI argument parsing for configuring the editor at startup.
//! The editable settings flags only seed the initial record; after launch
//! everything is edited from the settings panel.
//!
//! # Usage
//!
//! ```bash
//! # Show help
//! chatbot-studio --help
//!
//! # Seed the preview with a custom title and bubble color
//! chatbot-studio --title "Support Bot" --bubble-color "#10B981"
//!
//! # Set log level and window size
//! chatbot-studio --log-level debug --width 1400 --height 900
//! ```

use clap::Parser;

use chatbot_studio_ui::WidgetSettings;

/// Chatbot Studio - visual editor for an embeddable chatbot widget
///
/// A desktop editor with a settings panel on one side and a live preview of
/// the chatbot widget on the other, built with Rust and Makepad.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatbot-studio")]
#[command(version)]
#[command(about = "Visual editor for an embeddable chatbot widget", long_about = None)]
pub struct Args {
    /// Initial chatbot title shown in the preview header
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    /// Initial bot message shown as the first bubble
    #[arg(long, value_name = "TEXT")]
    pub initial_message: Option<String>,

    /// Empty-state hint of the widget's message input
    #[arg(long, value_name = "TEXT")]
    pub placeholder: Option<String>,

    /// User bubble color as a #RRGGBB hex string
    #[arg(long, value_name = "HEX")]
    pub bubble_color: Option<String>,

    /// Log level for output
    ///
    /// Controls the verbosity of log output. Available levels:
    /// error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,

    /// Window width in pixels
    #[arg(long, default_value = "1200", value_name = "PIXELS")]
    pub width: u32,

    /// Window height in pixels
    #[arg(long, default_value = "760", value_name = "PIXELS")]
    pub height: u32,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            title: None,
            initial_message: None,
            placeholder: None,
            bubble_color: None,
            log_level: "info".to_string(),
            width: 1200,
            height: 760,
        }
    }
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get log level as env_logger filter string
    pub fn log_filter(&self) -> &str {
        match self.log_level.to_lowercase().as_str() {
            "error" => "error",
            "warn" | "warning" => "warn",
            "info" => "info",
            "debug" => "debug",
            "trace" => "trace",
            _ => "info",
        }
    }

    /// Build the initial settings record: hardcoded defaults overridden by
    /// whichever flags were given.
    pub fn initial_settings(&self) -> WidgetSettings {
        let mut settings = WidgetSettings::default();
        if let Some(title) = &self.title {
            settings.title = title.clone();
        }
        if let Some(initial_message) = &self.initial_message {
            settings.initial_message = initial_message.clone();
        }
        if let Some(placeholder) = &self.placeholder {
            settings.placeholder = placeholder.clone();
        }
        if let Some(bubble_color) = &self.bubble_color {
            settings.user_bubble_color = bubble_color.clone();
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::default();
        assert!(args.title.is_none());
        assert!(args.bubble_color.is_none());
        assert_eq!(args.log_level, "info");
        assert_eq!(args.width, 1200);
        assert_eq!(args.height, 760);
    }

    #[test]
    fn test_log_filter() {
        let mut args = Args::default();

        args.log_level = "debug".to_string();
        assert_eq!(args.log_filter(), "debug");

        args.log_level = "WARNING".to_string();
        assert_eq!(args.log_filter(), "warn");

        args.log_level = "invalid".to_string();
        assert_eq!(args.log_filter(), "info");
    }

    #[test]
    fn test_initial_settings_defaults() {
        let settings = Args::default().initial_settings();
        assert_eq!(settings, WidgetSettings::default());
    }

    #[test]
    fn test_initial_settings_partial_override() {
        let args = Args {
            title: Some("Support Bot".to_string()),
            bubble_color: Some("#10B981".to_string()),
            ..Args::default()
        };
        let settings = args.initial_settings();

        assert_eq!(settings.title, "Support Bot");
        assert_eq!(settings.user_bubble_color, "#10B981");
        // Unset flags keep the hardcoded defaults
        assert_eq!(settings.initial_message, "Hello! How can I assist you today?");
        assert_eq!(settings.placeholder, "Type your message here...");
    }
}
