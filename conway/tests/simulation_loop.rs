// Tick loop behavior driven through a scripted frontend.

use std::collections::VecDeque;
use std::time::Duration;

use conway::config::{CELL_PIXELS, FRAME_DELAY, PAUSE_DELAY};
use conway::{Cell, Config, Frontend, Grid, InputEvent, LoopState, Mode, Session};

/// Hands out queued events one tick at a time and records what the loop did.
#[derive(Default)]
struct ScriptedFrontend {
    ticks: VecDeque<Vec<InputEvent>>,
    pending: VecDeque<InputEvent>,
    polls_this_tick: bool,
    frames: Vec<Grid>,
    generations: Vec<u64>,
    sleeps: Vec<Duration>,
}

impl ScriptedFrontend {
    fn with_ticks(ticks: Vec<Vec<InputEvent>>) -> Self {
        Self { ticks: ticks.into(), ..Default::default() }
    }
}

impl Frontend for ScriptedFrontend {
    fn poll_event(&mut self) -> Option<InputEvent> {
        if !self.polls_this_tick {
            self.polls_this_tick = true;
            self.pending = self.ticks.pop_front().unwrap_or_default().into();
        }
        self.pending.pop_front()
    }

    fn render(&mut self, grid: &Grid, generation: u64) {
        self.frames.push(grid.clone());
        self.generations.push(generation);
        self.polls_this_tick = false;
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}

fn blinker_config(steps: u64) -> Config {
    Config {
        rows: 5,
        cols: 5,
        mode: Mode::Manual,
        steps,
        seed: 0,
        pattern: vec!["".into(), "".into(), " 111".into()],
    }
}

fn px(cell: usize) -> i32 {
    (cell * CELL_PIXELS) as i32
}

#[test]
fn step_limit_stops_the_run() {
    let mut session = Session::new(blinker_config(3)).unwrap();
    let mut frontend = ScriptedFrontend::default();

    session.run(&mut frontend);

    assert_eq!(session.state(), LoopState::Stopped);
    assert_eq!(session.generation(), 3);
    assert_eq!(frontend.frames.len(), 3);
    assert_eq!(frontend.sleeps, vec![FRAME_DELAY; 2]);
}

#[test]
fn frames_show_the_grid_before_each_step() {
    let mut session = Session::new(blinker_config(2)).unwrap();
    let initial = session.grid().clone();
    let mut frontend = ScriptedFrontend::default();

    session.run(&mut frontend);

    assert_eq!(frontend.frames[0], initial);
    assert_ne!(frontend.frames[1], initial);
    assert_eq!(session.grid(), &initial);
}

#[test]
fn quit_stops_before_rendering_or_stepping() {
    let mut session = Session::new(blinker_config(0)).unwrap();
    let mut frontend = ScriptedFrontend::with_ticks(vec![
        vec![],
        vec![InputEvent::Quit, InputEvent::Reset],
    ]);

    session.run(&mut frontend);

    assert_eq!(session.state(), LoopState::Stopped);
    assert_eq!(session.generation(), 1);
    assert_eq!(frontend.frames.len(), 1);
    assert_eq!(session.tick(&mut frontend), LoopState::Stopped);
    assert_eq!(session.generation(), 1);
}

#[test]
fn click_toggles_before_the_step() {
    let config = Config {
        rows: 4,
        cols: 4,
        mode: Mode::Manual,
        steps: 1,
        seed: 0,
        pattern: vec![],
    };
    let mut session = Session::new(config).unwrap();
    let mut frontend = ScriptedFrontend::with_ticks(vec![vec![
        InputEvent::Click { x: px(1) + 2, y: px(2) + 3 },
        InputEvent::Click { x: px(40), y: px(40) },
    ]]);

    session.run(&mut frontend);

    let rendered = &frontend.frames[0];
    assert_eq!(rendered.iter_alive().collect::<Vec<_>>(), vec![(2, 1)]);
    // A lone cell dies in the step that follows.
    assert_eq!(session.grid().count_alive(), 0);
}

#[test]
fn pause_sleeps_once_without_changing_state() {
    let mut session = Session::new(blinker_config(1)).unwrap();
    let mut frontend = ScriptedFrontend::with_ticks(vec![vec![InputEvent::Pause]]);

    session.run(&mut frontend);

    assert_eq!(frontend.sleeps, vec![PAUSE_DELAY]);
    assert_eq!(session.generation(), 1);
}

#[test]
fn reset_restarts_generation_count() {
    let mut session = Session::new(blinker_config(0)).unwrap();
    let mut frontend = ScriptedFrontend::with_ticks(vec![
        vec![],
        vec![],
        vec![InputEvent::Reset],
    ]);

    for _ in 0..3 {
        session.tick(&mut frontend);
    }

    // Two steps, then reset to 0 followed by the third tick's step.
    assert_eq!(frontend.generations, vec![0, 1, 0]);
    assert_eq!(session.generation(), 1);
}

#[test]
fn random_reset_reseeds_with_configured_seed() {
    let config = Config {
        rows: 10,
        cols: 10,
        mode: Mode::Random,
        steps: 0,
        seed: 11,
        pattern: vec![],
    };
    let mut session = Session::new(config).unwrap();
    let initial = session.grid().clone();
    let mut frontend = ScriptedFrontend::with_ticks(vec![vec![], vec![InputEvent::Reset]]);

    session.tick(&mut frontend);
    session.tick(&mut frontend);

    assert_eq!(frontend.frames[1], initial);
    assert!(frontend.frames[1].positions().all(|(r, c)| {
        matches!(frontend.frames[1].get(r, c), Cell::Alive | Cell::Dead)
    }));
}
