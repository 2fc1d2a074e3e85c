//! Color Selector Widget
//!
//! A swatch showing the current user bubble color. Clicking the swatch
//! toggles an inline picker: a saturation/value surface, a hue strip and a
//! hex input. Every intermediate value while the picker is open is committed
//! upward immediately; there is no confirm or cancel.
//!
//! ## Usage
//!
//! ```rust,ignore
//! live_design! {
//!     use chatbot_studio_ui::widgets::color_select::ColorSelect;
//!
//!     bubble_color = <ColorSelect> {}
//! }
//! ```
//!
//! ## Handling Changes
//!
//! ```rust,ignore
//! let selector = self.view.color_select(id!(bubble_color));
//! if let Some(hex) = selector.color_changed(&actions) {
//!     // hex is a "#RRGGBB" string
//! }
//! ```

use makepad_widgets::*;

use crate::color;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)   // slate-900
    TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0) // slate-500
    BORDER = vec4(0.878, 0.906, 0.925, 1.0)         // slate-200
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)

    pub ColorSelect = {{ColorSelect}} {
        width: Fill, height: Fit
        flow: Down
        spacing: 8

        field_label = <Label> {
            text: "User Message Color"
            draw_text: {
                text_style: { font_size: 11.0 }
                fn get_color(self) -> vec4 {
                    return (TEXT_SECONDARY);
                }
            }
        }

        swatch_row = <View> {
            width: Fill, height: Fit
            flow: Right
            spacing: 12
            align: {y: 0.5}

            swatch = <View> {
                width: 36, height: 36
                cursor: Hand
                show_bg: true
                draw_bg: {
                    instance color_r: 0.231
                    instance color_g: 0.510
                    instance color_b: 0.965
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        let c = self.rect_size * 0.5;
                        sdf.circle(c.x, c.y, c.x - 1.0);
                        sdf.fill(vec4(self.color_r, self.color_g, self.color_b, 1.0));
                        sdf.stroke((BORDER), 1.0);
                        return sdf.result;
                    }
                }
            }

            hex_label = <Label> {
                text: "#3B82F6"
                draw_text: {
                    text_style: { font_size: 11.0 }
                    fn get_color(self) -> vec4 {
                        return (TEXT_SECONDARY);
                    }
                }
            }
        }

        picker = <View> {
            visible: false
            width: Fill, height: Fit
            flow: Down
            spacing: 8

            // Saturation left-to-right, value top-to-bottom
            sv_square = <View> {
                width: Fill, height: 140
                show_bg: true
                draw_bg: {
                    instance hue_r: 0.0
                    instance hue_g: 0.345
                    instance hue_b: 1.0
                    fn pixel(self) -> vec4 {
                        let hue = vec4(self.hue_r, self.hue_g, self.hue_b, 1.0);
                        let white = vec4(1.0, 1.0, 1.0, 1.0);
                        let sat = mix(white, hue, self.pos.x);
                        let col = sat * (1.0 - self.pos.y);
                        return vec4(col.x, col.y, col.z, 1.0);
                    }
                }
            }

            hue_strip = <View> {
                width: Fill, height: 16
                show_bg: true
                draw_bg: {
                    fn pixel(self) -> vec4 {
                        let h = self.pos.x * 6.0;
                        let r = clamp(abs(h - 3.0) - 1.0, 0.0, 1.0);
                        let g = clamp(2.0 - abs(h - 2.0), 0.0, 1.0);
                        let b = clamp(2.0 - abs(h - 4.0), 0.0, 1.0);
                        return vec4(r, g, b, 1.0);
                    }
                }
            }

            hex_row = <View> {
                width: Fill, height: Fit
                flow: Right
                spacing: 8
                align: {y: 0.5}

                hex_input = <TextInput> {
                    width: 120, height: 32
                    empty_text: "#RRGGBB"
                    draw_bg: {
                        border_radius: 6.0
                        fn pixel(self) -> vec4 {
                            let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                            sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                            sdf.fill((WHITE));
                            sdf.stroke((BORDER), 1.0);
                            return sdf.result;
                        }
                    }
                    draw_text: {
                        text_style: { font_size: 11.0 }
                        fn get_color(self) -> vec4 {
                            return (TEXT_PRIMARY);
                        }
                    }
                }
            }
        }
    }
}

/// Actions emitted by ColorSelect
#[derive(Clone, Debug, DefaultNone)]
pub enum ColorSelectAction {
    None,
    /// A color value was committed, carries the hex string
    ColorChanged(String),
}

#[derive(Live, LiveHook, Widget)]
pub struct ColorSelect {
    #[deref]
    view: View,

    /// Picker visibility; closed initially, flipped by swatch clicks
    #[rust]
    picker_open: bool,

    /// Current color as hue/saturation/value, each 0.0-1.0
    #[rust]
    hsv: [f32; 3],

    #[rust]
    dragging_sv: bool,

    #[rust]
    dragging_hue: bool,
}

impl Widget for ColorSelect {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        let actions = cx.capture_actions(|cx| self.view.handle_event(cx, event, scope));

        // Swatch click toggles the picker; the stored color is untouched
        let swatch = self.view.view(id!(swatch_row.swatch));
        match event.hits(cx, swatch.area()) {
            Hit::FingerUp(fe) if fe.was_tap() => {
                self.picker_open = !self.picker_open;
                ::log::debug!("color picker {}", if self.picker_open { "opened" } else { "closed" });
                self.view.view(id!(picker)).set_visible(cx, self.picker_open);
                self.view.redraw(cx);
            }
            _ => {}
        }

        // Saturation/value drag surface
        let sv_square = self.view.view(id!(picker.sv_square));
        match event.hits(cx, sv_square.area()) {
            Hit::FingerDown(fd) => {
                self.dragging_sv = true;
                self.update_sv(cx, scope, fd.abs);
            }
            Hit::FingerMove(fm) => {
                if self.dragging_sv {
                    self.update_sv(cx, scope, fm.abs);
                }
            }
            Hit::FingerUp(_) => {
                self.dragging_sv = false;
            }
            _ => {}
        }

        // Hue drag surface
        let hue_strip = self.view.view(id!(picker.hue_strip));
        match event.hits(cx, hue_strip.area()) {
            Hit::FingerDown(fd) => {
                self.dragging_hue = true;
                self.update_hue(cx, scope, fd.abs);
            }
            Hit::FingerMove(fm) => {
                if self.dragging_hue {
                    self.update_hue(cx, scope, fm.abs);
                }
            }
            Hit::FingerUp(_) => {
                self.dragging_hue = false;
            }
            _ => {}
        }

        // Direct hex entry commits as typed, valid or not
        if let Some(text) = self.view.text_input(id!(picker.hex_row.hex_input)).changed(&actions) {
            if let Some(rgb) = color::parse_hex(&text) {
                self.hsv = color::merge_hsv(self.hsv, rgb);
                self.apply_color_display(cx, rgb, &color::format_hex(rgb), false);
            }
            cx.widget_action(
                self.widget_uid(),
                &scope.path,
                ColorSelectAction::ColorChanged(text),
            );
        }
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl ColorSelect {
    fn update_sv(&mut self, cx: &mut Cx, scope: &mut Scope, abs: DVec2) {
        let rect = self.view.view(id!(picker.sv_square)).area().rect(cx);
        if rect.size.x <= 0.0 || rect.size.y <= 0.0 {
            return;
        }
        let x = ((abs.x - rect.pos.x) / rect.size.x).clamp(0.0, 1.0);
        let y = ((abs.y - rect.pos.y) / rect.size.y).clamp(0.0, 1.0);
        self.hsv[1] = x as f32;
        self.hsv[2] = 1.0 - y as f32;
        self.commit_hsv(cx, scope);
    }

    fn update_hue(&mut self, cx: &mut Cx, scope: &mut Scope, abs: DVec2) {
        let rect = self.view.view(id!(picker.hue_strip)).area().rect(cx);
        if rect.size.x <= 0.0 {
            return;
        }
        let x = ((abs.x - rect.pos.x) / rect.size.x).clamp(0.0, 1.0);
        self.hsv[0] = x as f32;
        self.commit_hsv(cx, scope);
    }

    /// Commit the current HSV upward and refresh the widget's own display.
    fn commit_hsv(&mut self, cx: &mut Cx, scope: &mut Scope) {
        let [h, s, v] = self.hsv;
        let rgb = color::hsv_to_rgb(h, s, v);
        let hex = color::format_hex(rgb);
        self.apply_color_display(cx, rgb, &hex, true);
        cx.widget_action(
            self.widget_uid(),
            &scope.path,
            ColorSelectAction::ColorChanged(hex),
        );
    }

    /// Refresh swatch, labels and picker surfaces. `sync_hex_input` is false
    /// while the user is typing in the hex field so their text is not
    /// rewritten under the cursor.
    fn apply_color_display(&mut self, cx: &mut Cx, rgb: [f32; 3], hex: &str, sync_hex_input: bool) {
        self.view.view(id!(swatch_row.swatch)).apply_over(cx, live! {
            draw_bg: {
                color_r: (rgb[0] as f64),
                color_g: (rgb[1] as f64),
                color_b: (rgb[2] as f64),
            }
        });
        self.view.label(id!(swatch_row.hex_label)).set_text(cx, hex);

        let hue_rgb = color::hsv_to_rgb(self.hsv[0], 1.0, 1.0);
        self.view.view(id!(picker.sv_square)).apply_over(cx, live! {
            draw_bg: {
                hue_r: (hue_rgb[0] as f64),
                hue_g: (hue_rgb[1] as f64),
                hue_b: (hue_rgb[2] as f64),
            }
        });

        if sync_hex_input {
            let hex_input = self.view.text_input(id!(picker.hex_row.hex_input));
            if hex_input.text() != hex {
                hex_input.set_text(cx, hex);
            }
        }

        self.view.redraw(cx);
    }

    /// Push the externally-owned color into the display. Does not emit.
    /// Achromatic echoes keep the picker's current hue position.
    pub fn set_color(&mut self, cx: &mut Cx, hex: &str) {
        if let Some(rgb) = color::parse_hex(hex) {
            self.hsv = color::merge_hsv(self.hsv, rgb);
            self.apply_color_display(cx, rgb, hex, !self.picker_open);
        } else {
            // Malformed value: keep the string visible, render the fallback
            let rgb = color::parse_hex_or_default(hex);
            self.apply_color_display(cx, rgb, hex, false);
        }
    }

    /// Whether the picker section is currently open
    pub fn is_open(&self) -> bool {
        self.picker_open
    }
}

impl ColorSelectRef {
    /// Push the externally-owned color into the display
    pub fn set_color(&self, cx: &mut Cx, hex: &str) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_color(cx, hex);
        }
    }

    /// Whether the picker section is currently open
    pub fn is_open(&self) -> bool {
        self.borrow().map(|inner| inner.is_open()).unwrap_or(false)
    }

    /// Check if a color was committed, returns the hex string
    pub fn color_changed(&self, actions: &Actions) -> Option<String> {
        if let ColorSelectAction::ColorChanged(hex) = actions.find_widget_action(self.widget_uid()).cast() {
            Some(hex)
        } else {
            None
        }
    }
}
