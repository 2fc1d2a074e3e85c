//! Settings Panel Widget
//!
//! Composes one field input per text setting plus the color selector, and
//! translates their events into [`SettingsUpdate`]s with exactly one field
//! populated. The panel holds no settings of its own; the editor root owns
//! the record and echoes it back through `set_settings`.
//!
//! ## Handling Updates
//!
//! ```rust,ignore
//! let panel = self.ui.settings_panel(id!(settings_panel));
//! if let Some(update) = panel.updated(&actions) {
//!     settings.apply(update);
//! }
//! ```

use makepad_widgets::*;

use crate::settings::{SettingsUpdate, WidgetSettings};
use crate::widgets::color_select::ColorSelectWidgetExt;
use crate::widgets::field_input::FieldInputWidgetExt;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use crate::widgets::field_input::FieldInput;
    use crate::widgets::color_select::ColorSelect;

    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)   // slate-900
    PANEL_BG = vec4(0.976, 0.980, 0.984, 1.0)       // slate-50

    pub SettingsPanel = {{SettingsPanel}} {
        width: Fill, height: Fill
        flow: Down
        spacing: 20
        padding: 28
        show_bg: true
        draw_bg: {
            fn pixel(self) -> vec4 {
                return (PANEL_BG);
            }
        }

        panel_title = <Label> {
            text: "Chatbot Settings"
            draw_text: {
                text_style: { font_size: 19.0 }
                fn get_color(self) -> vec4 {
                    return (TEXT_PRIMARY);
                }
            }
        }

        title_field = <FieldInput> { label: "Chatbot Title" }
        message_field = <FieldInput> { label: "Initial Message" }
        placeholder_field = <FieldInput> { label: "Placeholder Text" }
        color_select = <ColorSelect> {}
    }
}

/// Actions emitted by SettingsPanel
#[derive(Clone, Debug, DefaultNone)]
pub enum SettingsPanelAction {
    None,
    /// One setting changed; the update names exactly one field
    Updated(SettingsUpdate),
}

#[derive(Live, LiveHook, Widget)]
pub struct SettingsPanel {
    #[deref]
    view: View,
}

impl Widget for SettingsPanel {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        if let Some(text) = self.view.field_input(id!(title_field)).changed(&actions) {
            self.emit(cx, scope, SettingsUpdate::title(text));
        }
        if let Some(text) = self.view.field_input(id!(message_field)).changed(&actions) {
            self.emit(cx, scope, SettingsUpdate::initial_message(text));
        }
        if let Some(text) = self.view.field_input(id!(placeholder_field)).changed(&actions) {
            self.emit(cx, scope, SettingsUpdate::placeholder(text));
        }
        if let Some(hex) = self.view.color_select(id!(color_select)).color_changed(&actions) {
            self.emit(cx, scope, SettingsUpdate::user_bubble_color(hex));
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl SettingsPanel {
    fn emit(&mut self, cx: &mut Cx, scope: &mut Scope, update: SettingsUpdate) {
        cx.widget_action(
            self.widget_uid(),
            &scope.path,
            SettingsPanelAction::Updated(update),
        );
    }

    /// Echo the owned record back into the leaves (controlled inputs).
    pub fn set_settings(&mut self, cx: &mut Cx, settings: &WidgetSettings) {
        self.view.field_input(id!(title_field)).set_value(cx, &settings.title);
        self.view.field_input(id!(message_field)).set_value(cx, &settings.initial_message);
        self.view.field_input(id!(placeholder_field)).set_value(cx, &settings.placeholder);
        self.view.color_select(id!(color_select)).set_color(cx, &settings.user_bubble_color);
    }
}

impl SettingsPanelRef {
    /// Echo the owned record back into the leaves
    pub fn set_settings(&self, cx: &mut Cx, settings: &WidgetSettings) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_settings(cx, settings);
        }
    }

    /// Check if a setting changed, returns the partial update
    pub fn updated(&self, actions: &Actions) -> Option<SettingsUpdate> {
        if let SettingsPanelAction::Updated(update) = actions.find_widget_action(self.widget_uid()).cast() {
            Some(update)
        } else {
            None
        }
    }
}
