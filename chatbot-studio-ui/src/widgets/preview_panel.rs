//! Preview Panel Widget
//!
//! A read-only mock of the chatbot widget, rendered purely from the current
//! [`WidgetSettings`]: header title, the bot's first bubble, a sample user
//! bubble tinted with the chosen color, and an inert input affordance
//! showing the placeholder. Nothing here is wired to any chat logic.
//!
//! ## Updating
//!
//! ```rust,ignore
//! let preview = self.view.preview_panel(id!(preview_panel));
//! preview.set_settings(cx, &settings);
//! ```

use makepad_widgets::*;

use crate::color;
use crate::settings::WidgetSettings;

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    TEXT_PRIMARY = vec4(0.067, 0.090, 0.125, 1.0)   // slate-900
    TEXT_SECONDARY = vec4(0.392, 0.455, 0.545, 1.0) // slate-500
    BORDER = vec4(0.878, 0.906, 0.925, 1.0)         // slate-200
    WHITE = vec4(1.0, 1.0, 1.0, 1.0)
    CARD_BG = vec4(1.0, 1.0, 1.0, 1.0)
    BUBBLE_BOT_BG = vec4(0.945, 0.961, 0.976, 1.0)  // slate-100

    pub PreviewPanel = {{PreviewPanel}} {
        width: Fill, height: Fill
        align: {x: 0.5, y: 0.5}
        padding: 32
        show_bg: true
        draw_bg: {
            fn pixel(self) -> vec4 {
                return vec4(0.976, 0.980, 0.984, 1.0);
            }
        }

        chat_card = <RoundedView> {
            width: 420, height: Fit
            flow: Down
            show_bg: true
            draw_bg: {
                border_radius: 16.0
                fn pixel(self) -> vec4 {
                    let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                    sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                    sdf.fill((CARD_BG));
                    sdf.stroke((BORDER), 1.0);
                    return sdf.result;
                }
            }

            card_header = <View> {
                width: Fill, height: Fit
                padding: 20
                show_bg: true
                draw_bg: {
                    fn pixel(self) -> vec4 {
                        // Left-to-right blue gradient behind the title
                        let left = vec4(0.231, 0.510, 0.965, 1.0);
                        let right = vec4(0.145, 0.388, 0.922, 1.0);
                        return mix(left, right, self.pos.x);
                    }
                }

                header_title = <Label> {
                    text: "Chatbot"
                    draw_text: {
                        text_style: { font_size: 17.0 }
                        fn get_color(self) -> vec4 {
                            return (WHITE);
                        }
                    }
                }
            }

            messages = <View> {
                width: Fill, height: 320
                flow: Down
                spacing: 14
                padding: 16

                bot_row = <View> {
                    width: Fill, height: Fit
                    margin: {right: 90}

                    bot_bubble = <RoundedView> {
                        width: Fill, height: Fit
                        padding: 12
                        show_bg: true
                        draw_bg: {
                            border_radius: 10.0
                            fn pixel(self) -> vec4 {
                                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                                sdf.fill((BUBBLE_BOT_BG));
                                return sdf.result;
                            }
                        }

                        bot_text = <Label> {
                            width: Fill
                            text: "Hello! How can I assist you today?"
                            draw_text: {
                                text_style: { font_size: 12.0 }
                                text_wrap: Word
                                fn get_color(self) -> vec4 {
                                    return (TEXT_PRIMARY);
                                }
                            }
                        }
                    }
                }

                user_row = <View> {
                    width: Fill, height: Fit
                    margin: {left: 90}

                    user_bubble = <RoundedView> {
                        width: Fill, height: Fit
                        padding: 12
                        show_bg: true
                        draw_bg: {
                            instance color_r: 0.231
                            instance color_g: 0.510
                            instance color_b: 0.965
                            border_radius: 10.0
                            fn pixel(self) -> vec4 {
                                let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                                sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                                sdf.fill(vec4(self.color_r, self.color_g, self.color_b, 1.0));
                                return sdf.result;
                            }
                        }

                        user_text = <Label> {
                            width: Fill
                            text: "Sample user message"
                            draw_text: {
                                text_style: { font_size: 12.0 }
                                text_wrap: Word
                                fn get_color(self) -> vec4 {
                                    return (WHITE);
                                }
                            }
                        }
                    }
                }
            }

            input_row = <View> {
                width: Fill, height: Fit
                padding: 16
                flow: Right
                spacing: 12
                align: {y: 0.5}
                show_bg: true
                draw_bg: {
                    fn pixel(self) -> vec4 {
                        let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                        sdf.rect(0., 0., self.rect_size.x, self.rect_size.y);
                        sdf.fill(vec4(0.976, 0.980, 0.984, 1.0));
                        // Hairline on top of the footer
                        sdf.rect(0., 0., self.rect_size.x, 1.0);
                        sdf.fill((BORDER));
                        return sdf.result;
                    }
                }

                // Visual only; the preview has no send logic to wire up
                input_pill = <RoundedView> {
                    width: Fill, height: 40
                    padding: {left: 16, right: 16}
                    align: {y: 0.5}
                    show_bg: true
                    draw_bg: {
                        border_radius: 20.0
                        fn pixel(self) -> vec4 {
                            let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                            sdf.box(0., 0., self.rect_size.x, self.rect_size.y, self.border_radius);
                            sdf.fill((WHITE));
                            sdf.stroke((BORDER), 1.0);
                            return sdf.result;
                        }
                    }

                    input_hint = <Label> {
                        text: "Type your message here..."
                        draw_text: {
                            text_style: { font_size: 11.0 }
                            fn get_color(self) -> vec4 {
                                return (TEXT_SECONDARY);
                            }
                        }
                    }
                }

                send_btn = <View> {
                    width: 40, height: 40
                    show_bg: true
                    draw_bg: {
                        fn pixel(self) -> vec4 {
                            let sdf = Sdf2d::viewport(self.pos * self.rect_size);
                            let c = self.rect_size * 0.5;
                            sdf.circle(c.x, c.y, c.x - 1.0);
                            sdf.fill(vec4(0.231, 0.510, 0.965, 1.0));
                            // Paper-plane glyph
                            sdf.move_to(c.x - 6.0, c.y + 5.0);
                            sdf.line_to(c.x + 7.0, c.y);
                            sdf.line_to(c.x - 6.0, c.y - 5.0);
                            sdf.line_to(c.x - 3.0, c.y);
                            sdf.close_path();
                            sdf.fill((WHITE));
                            return sdf.result;
                        }
                    }
                }
            }
        }
    }
}

#[derive(Live, LiveHook, Widget)]
pub struct PreviewPanel {
    #[deref]
    view: View,
}

impl Widget for PreviewPanel {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event, scope: &mut Scope) {
        // Purely presentational; children keep hover/scroll behavior only
        self.view.handle_event(cx, event, scope);
    }

    fn draw_walk(&mut self, cx: &mut Cx2d, scope: &mut Scope, walk: Walk) -> DrawStep {
        self.view.draw_walk(cx, scope, walk)
    }
}

impl PreviewPanel {
    /// Re-render the mock widget from the given settings.
    pub fn set_settings(&mut self, cx: &mut Cx, settings: &WidgetSettings) {
        self.view.label(id!(chat_card.card_header.header_title))
            .set_text(cx, &settings.title);
        self.view.label(id!(chat_card.messages.bot_row.bot_bubble.bot_text))
            .set_text(cx, &settings.initial_message);
        self.view.label(id!(chat_card.input_row.input_pill.input_hint))
            .set_text(cx, &settings.placeholder);

        let rgb = color::parse_hex_or_default(&settings.user_bubble_color);
        self.view.view(id!(chat_card.messages.user_row.user_bubble)).apply_over(cx, live! {
            draw_bg: {
                color_r: (rgb[0] as f64),
                color_g: (rgb[1] as f64),
                color_b: (rgb[2] as f64),
            }
        });

        self.view.redraw(cx);
    }
}

impl PreviewPanelRef {
    /// Re-render the mock widget from the given settings
    pub fn set_settings(&self, cx: &mut Cx, settings: &WidgetSettings) {
        if let Some(mut inner) = self.borrow_mut() {
            inner.set_settings(cx, settings);
        }
    }
}
