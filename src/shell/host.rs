use eframe::egui::{self, Pos2};

use crate::widget::geometry::Point;
use crate::widget::input::{HostCommand, PointerButton, PointerEvent};

/// The parts of `egui::Context` the shell drives, split out so command
/// handling can be exercised with a recording context.
pub trait ViewportCtx {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand);
    fn request_repaint(&self);
}

impl ViewportCtx for egui::Context {
    fn send_viewport_cmd(&self, cmd: egui::ViewportCommand) {
        egui::Context::send_viewport_cmd(self, cmd);
    }

    fn request_repaint(&self) {
        egui::Context::request_repaint(self);
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShellState {
    /// Outer window position as last reported by the OS. Local pointer
    /// positions are measured from here.
    pub origin: Pos2,
    /// Position most recently requested with `OuterPosition`, until the drag
    /// that produced it is over.
    pub target: Option<Pos2>,
    /// Screen position of the open context menu.
    pub menu_at: Option<Pos2>,
    pub closing: bool,
}

impl ShellState {
    pub fn new(origin: Pos2) -> Self {
        Self {
            origin,
            ..Default::default()
        }
    }

    pub fn to_global(&self, local: Pos2) -> Point {
        Point::new(self.origin.x + local.x, self.origin.y + local.y)
    }

    /// Where the window is, or is about to be.
    pub fn window_pos(&self) -> Pos2 {
        self.target.unwrap_or(self.origin)
    }

    /// Takes the OS-reported position at the start of a frame. The pending
    /// target survives while a drag is still running so later moves keep
    /// building on it.
    pub fn sync(&mut self, reported: Pos2, dragging: bool) {
        self.origin = reported;
        if !dragging {
            self.target = None;
        }
    }
}

pub fn apply_commands<C: ViewportCtx>(ctx: &C, shell: &mut ShellState, commands: &[HostCommand]) {
    for command in commands {
        match *command {
            HostCommand::Repaint => ctx.request_repaint(),
            HostCommand::MoveWindowBy { dx, dy } => {
                let next = shell.window_pos() + egui::vec2(dx, dy);
                shell.target = Some(next);
                ctx.send_viewport_cmd(egui::ViewportCommand::OuterPosition(next));
            }
            HostCommand::Quit => {
                if !shell.closing {
                    tracing::info!("quit requested");
                    shell.closing = true;
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
            HostCommand::ShowContextMenu { at } => {
                shell.menu_at = Some(egui::pos2(at.x, at.y));
                ctx.request_repaint();
            }
        }
    }
}

pub fn translate_event(event: &egui::Event, shell: &ShellState) -> Option<PointerEvent> {
    match event {
        egui::Event::PointerButton {
            pos,
            button,
            pressed,
            ..
        } => {
            let button = match button {
                egui::PointerButton::Primary => PointerButton::Primary,
                egui::PointerButton::Secondary => PointerButton::Secondary,
                _ => PointerButton::Other,
            };
            let local = Point::new(pos.x, pos.y);
            let global = shell.to_global(*pos);
            Some(if *pressed {
                PointerEvent::Press {
                    button,
                    local,
                    global,
                }
            } else {
                PointerEvent::Release {
                    button,
                    local,
                    global,
                }
            })
        }
        egui::Event::PointerMoved(pos) => Some(PointerEvent::Move {
            local: Point::new(pos.x, pos.y),
            global: shell.to_global(*pos),
        }),
        _ => None,
    }
}

/// Opens `url` in the default browser. Failures stay in the shell.
pub fn open_link(url: &str) {
    tracing::info!(url, "opening link");
    if let Err(e) = open::that(url) {
        tracing::warn!(url, error = %e, "failed to open link");
    }
}
