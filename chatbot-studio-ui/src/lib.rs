//! # Chatbot Studio UI - Settings model and widgets
//!
//! Reusable pieces of the chatbot widget appearance editor.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Settings** - the single flat record describing the widget's editable
//!   appearance, plus its partial-merge update type
//! - **Color** - hex and HSV helpers for the color selector and preview
//! - **Widgets** - field input, color selector, settings panel, preview panel
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use chatbot_studio_ui::{WidgetSettings, SettingsUpdate};
//!
//! // 1. Own one settings record at the app root
//! let mut settings = WidgetSettings::default();
//!
//! // 2. Register widgets in live_design
//! impl LiveRegister for App {
//!     fn live_register(cx: &mut Cx) {
//!         makepad_widgets::live_design(cx);
//!         chatbot_studio_ui::live_design(cx);
//!     }
//! }
//!
//! // 3. Merge panel updates and push the record back into both panels
//! if let Some(update) = panel.updated(&actions) {
//!     settings.apply(update);
//! }
//! ```
//!
//! ## Data Flow
//!
//! ```text
//! SettingsPanel ── SettingsPanelAction::Updated(SettingsUpdate) ──> App root
//!      ▲                                                              │
//!      │                owns the only WidgetSettings                  │
//!      └──────────── set_settings(&WidgetSettings) ────────┬──────────┘
//!                                                          ▼
//!                                                    PreviewPanel
//! ```

pub mod settings;
pub mod color;
pub mod widgets;

// Re-export main types for convenience
pub use settings::{WidgetSettings, SettingsUpdate, DEFAULT_BUBBLE_COLOR};

// Re-export widgets and their WidgetExt traits
pub use widgets::{
    FieldInput, FieldInputRef, FieldInputWidgetExt, FieldInputWidgetRefExt, FieldInputAction,
    ColorSelect, ColorSelectRef, ColorSelectWidgetExt, ColorSelectWidgetRefExt, ColorSelectAction,
    PreviewPanel, PreviewPanelRef, PreviewPanelWidgetExt, PreviewPanelWidgetRefExt,
    SettingsPanel, SettingsPanelRef, SettingsPanelWidgetExt, SettingsPanelWidgetRefExt, SettingsPanelAction,
};

use makepad_widgets::Cx;

/// Register all chatbot-studio-ui widgets with Makepad.
///
/// Call this in your app's `LiveRegister::live_register` implementation
/// after `makepad_widgets::live_design(cx)`.
pub fn live_design(cx: &mut Cx) {
    widgets::live_design(cx);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_re_exports() {
        let _settings = WidgetSettings::default();
        let _update = SettingsUpdate::default();
        assert_eq!(DEFAULT_BUBBLE_COLOR, "#3B82F6");
    }
}
