use crate::widget::drag::DragPhase;
use crate::widget::geometry::Point;
use crate::widget::hit_test::{classify_in, hit_regions, HitRegion, Target};
use crate::widget::layout::Layout;
use crate::widget::render::{render, Primitive};
use crate::widget::state::WidgetState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Other,
}

/// Raw pointer input. `local` is widget-relative, `global` is in screen
/// coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press {
        button: PointerButton,
        local: Point,
        global: Point,
    },
    Move {
        local: Point,
        global: Point,
    },
    Release {
        button: PointerButton,
        local: Point,
        global: Point,
    },
}

/// Requests for the host shell produced while handling one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    Repaint,
    MoveWindowBy { dx: f32, dy: f32 },
    Quit,
    ShowContextMenu { at: Point },
}

#[derive(Debug, Clone)]
pub struct InputDispatcher {
    state: WidgetState,
    layout: Layout,
    regions: Vec<(HitRegion, Target)>,
}

impl Default for InputDispatcher {
    fn default() -> Self {
        Self::new(Layout::default())
    }
}

impl InputDispatcher {
    pub fn new(layout: Layout) -> Self {
        Self::with_state(layout, WidgetState::default())
    }

    pub fn with_state(layout: Layout, state: WidgetState) -> Self {
        Self {
            regions: hit_regions(&layout),
            state,
            layout,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn phase(&self) -> DragPhase {
        self.state.drag.phase()
    }

    pub fn primitives(&self) -> Vec<Primitive> {
        render(&self.state.counters, &self.layout)
    }

    pub fn handle(&mut self, event: PointerEvent) -> Vec<HostCommand> {
        let mut commands = Vec::new();
        let repaint = match event {
            PointerEvent::Press {
                button: PointerButton::Primary,
                local,
                global,
            } => self.primary_press(local, global, &mut commands),
            PointerEvent::Press {
                button: PointerButton::Secondary,
                local,
                global,
            } => {
                if self.layout.display.rect.contains(local) {
                    tracing::debug!(?global, "context menu requested");
                    commands.push(HostCommand::ShowContextMenu { at: global });
                }
                false
            }
            PointerEvent::Press {
                button: PointerButton::Other,
                ..
            } => false,
            PointerEvent::Move { global, .. } => {
                if let Some((dx, dy)) = self.state.drag.track(global) {
                    commands.push(HostCommand::MoveWindowBy { dx, dy });
                }
                false
            }
            PointerEvent::Release { .. } => {
                if self.state.drag.end() {
                    tracing::debug!("drag finished");
                }
                false
            }
        };
        if repaint {
            commands.push(HostCommand::Repaint);
        }
        commands
    }

    fn primary_press(
        &mut self,
        local: Point,
        global: Point,
        commands: &mut Vec<HostCommand>,
    ) -> bool {
        let target = classify_in(local, &self.regions);
        tracing::debug!(?local, ?target, "primary press");
        // A press on a control means the release of an earlier drag was lost.
        if target != Target::Background && self.state.drag.end() {
            tracing::debug!("dropping stale drag");
        }
        let counters = &mut self.state.counters;
        match target {
            Target::Tab(idx) => counters.select_tab(idx),
            Target::Increment => counters.increment(),
            Target::Decrement => counters.decrement(),
            Target::Reset => counters.reset(),
            Target::Close => {
                commands.push(HostCommand::Quit);
                false
            }
            Target::Background => {
                self.state.drag.begin(global);
                false
            }
        }
    }
}
