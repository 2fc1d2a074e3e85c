//! Reusable UI Widgets for Chatbot Studio
//!
//! - [`FieldInput`] - labeled controlled text input
//! - [`ColorSelect`] - swatch with a toggleable inline color picker
//! - [`SettingsPanel`] - the editable side of the editor
//! - [`PreviewPanel`] - read-only mock of the chatbot widget
//!
//! ## Usage
//!
//! ```rust,ignore
//! use chatbot_studio_ui::widgets::*;
//!
//! live_design! {
//!     use chatbot_studio_ui::widgets::settings_panel::SettingsPanel;
//!     use chatbot_studio_ui::widgets::preview_panel::PreviewPanel;
//!
//!     editor = <View> {
//!         settings_panel = <SettingsPanel> {}
//!         preview_panel = <PreviewPanel> {}
//!     }
//! }
//! ```

pub mod field_input;
pub mod color_select;
pub mod preview_panel;
pub mod settings_panel;

pub use field_input::{FieldInput, FieldInputRef, FieldInputWidgetExt, FieldInputWidgetRefExt, FieldInputAction};
pub use color_select::{ColorSelect, ColorSelectRef, ColorSelectWidgetExt, ColorSelectWidgetRefExt, ColorSelectAction};
pub use preview_panel::{PreviewPanel, PreviewPanelRef, PreviewPanelWidgetExt, PreviewPanelWidgetRefExt};
pub use settings_panel::{SettingsPanel, SettingsPanelRef, SettingsPanelWidgetExt, SettingsPanelWidgetRefExt, SettingsPanelAction};

use makepad_widgets::Cx;

/// Register all widget live designs with Makepad.
///
/// Leaves are registered before the panels that compose them.
pub fn live_design(cx: &mut Cx) {
    field_input::live_design(cx);
    color_select::live_design(cx);
    preview_panel::live_design(cx);
    settings_panel::live_design(cx);
}
