//! Chatbot Studio root application
//!
//! Owns the single [`WidgetSettings`] record and composes the settings panel
//! and the live preview side by side. Every update from the settings panel
//! is merged into the record and pushed synchronously into both panels, so
//! the preview never shows a stale value.

use std::sync::OnceLock;

use makepad_widgets::*;

use chatbot_studio_ui::{
    PreviewPanelWidgetRefExt, SettingsPanelWidgetRefExt, WidgetSettings,
};

use crate::cli::Args;

static CLI_ARGS: OnceLock<Args> = OnceLock::new();

/// Store parsed CLI args before the app starts
pub fn set_cli_args(args: Args) {
    let _ = CLI_ARGS.set(args);
}

fn cli_args() -> Args {
    CLI_ARGS.get().cloned().unwrap_or_default()
}

live_design! {
    use link::theme::*;
    use link::shaders::*;
    use link::widgets::*;

    use chatbot_studio_ui::widgets::settings_panel::SettingsPanel;
    use chatbot_studio_ui::widgets::preview_panel::PreviewPanel;

    APP_BG = vec4(0.933, 0.941, 0.953, 1.0)

    App = {{App}} {
        ui: <Window> {
            window: { inner_size: vec2(1200, 760) }
            pass: { clear_color: (APP_BG) }

            body = <View> {
                width: Fill, height: Fill
                flow: Right

                settings_panel = <SettingsPanel> {
                    width: 460
                }

                preview_panel = <PreviewPanel> {}
            }
        }
    }
}

#[derive(Live, LiveHook)]
pub struct App {
    #[live]
    ui: WidgetRef,

    /// The one settings record; mutated only through `WidgetSettings::apply`
    #[rust]
    settings: WidgetSettings,

    #[rust]
    initialized: bool,
}

impl LiveRegister for App {
    fn live_register(cx: &mut Cx) {
        makepad_widgets::live_design(cx);
        chatbot_studio_ui::live_design(cx);
    }
}

impl AppMain for App {
    fn handle_event(&mut self, cx: &mut Cx, event: &Event) {
        // Seed the window size, the record and the panels on the first event
        if !self.initialized {
            self.initialized = true;
            let args = cli_args();
            self.ui.apply_over(cx, live! {
                window: { inner_size: (vec2(args.width as f32, args.height as f32)) }
            });
            self.settings = args.initial_settings();
            self.sync_panels(cx);
        }

        self.ui.handle_event(cx, event, &mut Scope::empty());

        let actions = match event {
            Event::Actions(actions) => actions.as_slice(),
            _ => return,
        };

        if let Some(update) = self.ui.settings_panel(id!(body.settings_panel)).updated(actions) {
            ::log::debug!("settings update: {:?}", update);
            self.settings.apply(update);
            self.sync_panels(cx);
        }
    }
}

impl App {
    /// Push the owned record into both panels.
    fn sync_panels(&mut self, cx: &mut Cx) {
        self.ui.settings_panel(id!(body.settings_panel))
            .set_settings(cx, &self.settings);
        self.ui.preview_panel(id!(body.preview_panel))
            .set_settings(cx, &self.settings);
    }
}

app_main!(App);
