// ui.rs - eframe window driving the simulation, one tick per FRAME_DELAY

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use conway::config::{CELL_PIXELS, FRAME_DELAY};
use conway::{Frontend, GolError, Grid, InputEvent, LoopState, Session};
use eframe::egui;
use egui::{Color32, Pos2, Rect, Vec2};

const TITLE: &str = "Conway's Game of Life";
const BACKGROUND: Color32 = Color32::BLACK;
const LIVE_COLOR: Color32 = Color32::from_rgb(0, 255, 0);

fn grid_size(grid: &Grid) -> Vec2 {
    Vec2::new(
        (grid.cols() * CELL_PIXELS) as f32,
        (grid.rows() * CELL_PIXELS) as f32,
    )
}

/// Opens a window exactly the size of the grid and blocks until it closes.
pub fn run(session: Session) -> Result<(), GolError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITLE)
            .with_inner_size(grid_size(session.grid()))
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        TITLE,
        options,
        Box::new(|_cc| Box::new(GameOfLife::new(session))),
    )
    .map_err(|err| GolError::Render(err.to_string()))
}

fn paint_grid(painter: &egui::Painter, origin: Pos2, grid: &Grid) {
    let cell = CELL_PIXELS as f32;
    painter.rect_filled(Rect::from_min_size(origin, grid_size(grid)), 0.0, BACKGROUND);

    for (row, col) in grid.iter_alive() {
        let min = origin + Vec2::new(col as f32 * cell, row as f32 * cell);
        painter.rect_filled(Rect::from_min_size(min, Vec2::splat(cell)), 0.0, LIVE_COLOR);
    }
}

/// Translates one raw egui event into a loop event. Pointer positions are
/// made relative to the grid's top-left corner.
fn to_input_event(event: &egui::Event, origin: Pos2) -> Option<InputEvent> {
    match event {
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            ..
        } => {
            let offset = *pos - origin;
            Some(InputEvent::Click {
                x: offset.x.floor() as i32,
                y: offset.y.floor() as i32,
            })
        }
        egui::Event::Key { key: egui::Key::Space, pressed: true, .. } => Some(InputEvent::Pause),
        egui::Event::Key { key: egui::Key::R, pressed: true, .. } => Some(InputEvent::Reset),
        _ => None,
    }
}

/// Per-tick frontend: the input queued since the last tick plus the painter.
struct EguiFrontend {
    events: VecDeque<InputEvent>,
    painter: egui::Painter,
    origin: Pos2,
}

impl Frontend for EguiFrontend {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.events.pop_front()
    }

    fn render(&mut self, grid: &Grid, _generation: u64) {
        paint_grid(&self.painter, self.origin, grid);
    }

    // Blocks the UI thread, same as the frame pacing it interrupts.
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

struct GameOfLife {
    session: Session,
    pending: VecDeque<InputEvent>,   // input seen since the last tick
    last_tick: Option<Instant>,
}

impl GameOfLife {
    fn new(session: Session) -> Self {
        Self { session, pending: VecDeque::new(), last_tick: None }
    }

    /// Queues this frame's input until the next tick.
    fn queue_input(&mut self, events: &[egui::Event], close_requested: bool, origin: Pos2) {
        self.pending
            .extend(events.iter().filter_map(|event| to_input_event(event, origin)));
        if close_requested {
            self.pending.push_back(InputEvent::Quit);
        }
    }

    /// eframe repaints on any input, so ticks are gated on elapsed time.
    /// A pending quit is never held back.
    fn tick_due(&self, now: Instant) -> bool {
        self.pending.contains(&InputEvent::Quit)
            || self
                .last_tick
                .is_none_or(|last| now.duration_since(last) >= FRAME_DELAY)
    }
}

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let size = grid_size(self.session.grid());

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(size, egui::Sense::click());
                let origin = response.rect.min;
                ctx.input(|input| {
                    self.queue_input(&input.events, input.viewport().close_requested(), origin)
                });

                let now = Instant::now();
                if self.tick_due(now) {
                    let mut frontend = EguiFrontend {
                        events: std::mem::take(&mut self.pending),
                        painter,
                        origin,
                    };
                    self.session.tick(&mut frontend);
                    self.last_tick = Some(now);
                } else {
                    paint_grid(&painter, origin, self.session.grid());
                }
            });

        match self.session.state() {
            LoopState::Running => {
                let wait = self
                    .last_tick
                    .map_or(FRAME_DELAY, |last| FRAME_DELAY.saturating_sub(last.elapsed()));
                ctx.request_repaint_after(wait);
            }
            LoopState::Stopped => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }
}
