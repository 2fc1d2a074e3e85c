//! Field Input Widget
//!
//! A labeled single-line text input bound to one settings field.
//!
//! ## Usage
//!
//! ```rust,ignore
//! live_design! {
//!     use chatbot_studio_ui::widgets::field_input::FieldInput;
//!
//!     title_field = <FieldInput> { label: "Chatbot Title" }
//! }
//! ```
//!
//! ## Handling Changes
//!
//! ```rust,ignore
//! let field = self.view.field_input(id!(title_field));
//! if let Some(text) = field.changed(&actions) {
//!     // Push the new value into the owning record
//! }
//! ```
//!
//! The input is controlled: it displays whatever the parent last pushed via
//! `set_value` and emits every keystroke upward without buffering text of
//! its own.

use makepad_widgets::*;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)   // slate-900
    TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0) // slate-500
    BORDER = vec4(0.878, 0.906, 0.925, 1.0)         // slate-200
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    pub FieldInput = {{FieldInput}} {
        width: Fill, height: Fit
        flow: Down
        spacing: 8

        field_label = <Label> {
            draw_text: {
                text_style: { font_size: 11.0 }
                fn get_color(self) -> vec4 {
                    return (TEXT_SECONDARY);
                }
            }
        }

        input = <TextInput> {
            width: Fill, height: 40
            empty_text: ""
            draw_bg: {
                border_radius: 8.0
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                    sdf.fill((WHITE));
                    sdf.stroke((BORDER), 1.0);
                    return sdf.result;
                }
            }
            draw_text: {
                text_style: { font_size: 12.0 }
                fn get_color(self) -> vec4 {
                    return (TEXT_PRIMARY);
                }
            }
            draw_selection: {
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, 1.0);
                    sdf.fill(vec4(0.26, 0.52, 0.96, 0.4));
                    return sdf.result;
                }
            }
            draw_cursor: {
                instance focus: 0.0
                instance blink: 0.0
                uniform border_radius: 0.5
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    sdf.box(0.0, 0.0, self.rect_size.x, self.rect_size.y, self.border_radius);
                    sdf.fill(mix(vec4(0.0, 0.0, 0.0, 0.0), vec4(0.1, 0.1, 0.12, 1.0), (1.0 - self.blink) * self.focus));
                    return sdf.result;
                }
            }
            animator: {
                blink = {
                    default: off
                    off = {
                        from: {all: Forward {duration: 0.5}}
                        apply: { draw_cursor: {blink: 0.0} }
                    }
                    on = {
                        from: {all: Forward {duration: 0.5}}
                        apply: { draw_cursor: {blink: 1.0} }
                    }
                }
            }
        }
    }
}

/// Build the empty-state hint from a field label, e.g.
/// "Chatbot Title" -> "Enter chatbot title...".
pub fn derived_placeholder(label: &str) -> String {
    format!("Enter {}...", label.to_lowercase())
}

/// Actions emitted by FieldInput
#[derive(Clone, Debug, DefaultNone)]
pub enum FieldInputAction {
    None,
    /// Text edited, carries the full new value
    Changed(String),
}

#[derive(Live, LiveHook, Widget)]
pub struct FieldInput {
    #[deref]
    view: View,

    /// Label shown above the input
    #[live]
    label: String,

    /// Empty-state hint; derived from the label when left empty
    #[live]
    placeholder: String,

    #[rust]
    labels_applied: bool,
}

impl Widget for FieldInput {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        if let Some(text) = self.view.text_input(id!(input)).changed(&actions) {
            cx.widget_action(
                self.widget_uid(),
                &scope.path,
                FieldInputAction::Changed(text),
            );
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        if !self.labels_applied {
            self.labels_applied = true;
            let label = self.label.clone();
            self.view.label(id!(field_label)).set_text(cx, &label);
            let hint = if self.placeholder.is_empty() {
                derived_placeholder(&label)
            } else {
                self.placeholder.clone()
            };
            self.view.text_input(id!(input)).apply_over(cx, live! {
                empty_text: (hint)
            });
        }
        self.view.draw_walk(cx, scope, walk)
    }
}

impl FieldInput {
    /// Current text
    pub fn value(&self) -> String {
        self.view.text_input(id!(input)).text()
    }

    /// Push the externally-owned value into the input. No-op when the text
    /// already matches, so echoing state back does not disturb the cursor.
    pub fn set_value(&mut self, cx: &mut Cx, value: &str) {
        let input = self.view.text_input(id!(input));
        if input.text() != value {
            input.set_text(cx, value);
        }
    }
}

impl FieldInputRef {
    /// Current text
    pub fn value(&self) -> String {
        self.borrow().map(|inner| inner.value()).unwrap_or_default()
    }

    /// Push the externally-owned value into the input
    pub fn set_value(&self, cx: &mut Cx, value: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_value(cx, value);
        }
    }

    /// Check if the text changed, returns the full new value
    pub fn changed(&self, actions: &Actions) -> Option<String> {
        if let FieldInputAction::Changed(text) = actions.find_widget_action(self.widget_uid()).cast() {
            Some(text)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_placeholder() {
        assert_eq!(derived_placeholder("Chatbot Title"), "Enter chatbot title...");
        assert_eq!(derived_placeholder("Initial Message"), "Enter initial message...");
    }
}
