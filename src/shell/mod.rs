//! eframe host for the counter widget.
//!
//! The shell owns the window: it feeds egui pointer events to the
//! [`InputDispatcher`], carries out the returned [`HostCommand`]s and paints
//! the primitive list every frame.
//!
//! [`HostCommand`]: crate::widget::HostCommand

pub mod host;
pub mod paint;

use eframe::egui;

use crate::settings::Settings;
use crate::widget::input::{InputDispatcher, PointerButton, PointerEvent};
use crate::widget::layout::{CONTEXT_ACTION_LABEL, REPO_URL, WINDOW_SIZE};

pub use host::{apply_commands, open_link, translate_event, ShellState, ViewportCtx};

pub const APP_NAME: &str = "Floating Counter";

pub fn native_options(settings: &Settings) -> eframe::NativeOptions {
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(APP_NAME)
        .with_inner_size([WINDOW_SIZE.0, WINDOW_SIZE.1])
        .with_resizable(false)
        .with_decorations(false)
        .with_transparent(true);
    if settings.always_on_top {
        viewport = viewport.with_always_on_top();
    }
    if let Some((x, y)) = settings.window_pos {
        viewport = viewport.with_position([x as f32, y as f32]);
    }
    eframe::NativeOptions {
        viewport,
        ..Default::default()
    }
}

pub fn run(settings: Settings, settings_path: String) -> anyhow::Result<()> {
    let options = native_options(&settings);
    let origin = settings
        .window_pos
        .map(|(x, y)| egui::pos2(x as f32, y as f32))
        .unwrap_or(egui::Pos2::ZERO);
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |_cc| Box::new(CounterApp::new(origin, settings_path))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run window: {e}"))
}

/// Space around the label inside the context-menu popup.
const MENU_MARGIN: egui::Vec2 = egui::vec2(8.0, 6.0);

/// Popup size that shows the whole menu label at the button font.
pub fn context_menu_size(ctx: &egui::Context) -> egui::Vec2 {
    let style = ctx.style();
    let font = egui::TextStyle::Button.resolve(&style);
    let label = ctx.fonts(|f| {
        f.layout_no_wrap(CONTEXT_ACTION_LABEL.to_owned(), font, egui::Color32::WHITE)
            .size()
    });
    label + style.spacing.button_padding * 2.0 + MENU_MARGIN * 2.0
}

pub struct CounterApp {
    dispatcher: InputDispatcher,
    shell: ShellState,
    settings_path: String,
}

impl CounterApp {
    pub fn new(origin: egui::Pos2, settings_path: String) -> Self {
        Self {
            dispatcher: InputDispatcher::default(),
            shell: ShellState::new(origin),
            settings_path,
        }
    }

    pub fn dispatcher(&self) -> &InputDispatcher {
        &self.dispatcher
    }

    pub fn shell(&self) -> &ShellState {
        &self.shell
    }

    /// Routes one egui event through the widget and executes the result.
    pub fn handle_event<C: ViewportCtx>(&mut self, ctx: &C, event: &egui::Event) {
        let Some(pointer) = translate_event(event, &self.shell) else {
            return;
        };

        if let PointerEvent::Press {
            button: PointerButton::Primary,
            ..
        } = pointer
        {
            self.shell.menu_at = None;
        }

        let commands = self.dispatcher.handle(pointer);
        if !commands.is_empty() {
            tracing::debug!(?commands, "host commands");
        }
        apply_commands(ctx, &mut self.shell, &commands);
    }

    /// The menu lives in its own borderless viewport so it is not clipped
    /// to the widget surface.
    fn show_context_menu(&mut self, ctx: &egui::Context) {
        let Some(at) = self.shell.menu_at else {
            return;
        };
        let builder = egui::ViewportBuilder::default()
            .with_title(CONTEXT_ACTION_LABEL)
            .with_position(at)
            .with_inner_size(context_menu_size(ctx))
            .with_decorations(false)
            .with_resizable(false)
            .with_always_on_top();

        let mut chosen = false;
        let mut dismissed = false;
        ctx.show_viewport_immediate(
            egui::ViewportId::from_hash_of("counter_context_menu"),
            builder,
            |ctx, _class| {
                egui::CentralPanel::default()
                    .frame(egui::Frame::menu(&ctx.style()))
                    .show(ctx, |ui| {
                        let button = egui::Button::new(CONTEXT_ACTION_LABEL).wrap(false);
                        if ui.add(button).clicked() {
                            chosen = true;
                        }
                    });
                dismissed = ctx.input(|i| {
                    i.viewport().close_requested() || i.key_pressed(egui::Key::Escape)
                });
            },
        );

        if chosen {
            open_link(REPO_URL);
        }
        if chosen || dismissed {
            self.shell.menu_at = None;
            ctx.request_repaint();
        }
    }

    fn sync_origin(&mut self, ctx: &egui::Context) {
        if let Some(rect) = ctx.input(|i| i.viewport().outer_rect) {
            let dragging = self.dispatcher.state().drag.is_dragging();
            self.shell.sync(rect.min, dragging);
        }
    }
}

impl eframe::App for CounterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_origin(ctx);

        let events = ctx.input(|i| i.events.clone());
        for event in &events {
            self.handle_event(ctx, event);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                paint::paint(ui.painter(), &self.dispatcher.primitives());
            });

        self.show_context_menu(ctx);
    }

    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0; 4]
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let window = self.shell.window_pos();
        let pos = (window.x as i32, window.y as i32);
        match Settings::load(&self.settings_path) {
            Ok(mut settings) => {
                settings.window_pos = Some(pos);
                if let Err(e) = settings.save(&self.settings_path) {
                    tracing::warn!(error = %e, "failed to save window position");
                }
            }
            Err(e) => tracing::warn!(error = %e, "settings unreadable; window position not saved"),
        }
    }
}
