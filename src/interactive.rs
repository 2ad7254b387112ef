//! Full-screen colored viewer.
//!
//! One generation is drawn per tick so the pattern grows down the screen.
//! When cycling, the next rule starts `config.pause` after the current one
//! finishes unless the viewer is paused.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};

use tui_automata::core::{Driver, Phase, Rule, RuleSelection, SimConfig};
use tui_automata::input::{handle_key_event, should_quit};
use tui_automata::term::{
    AutomatonView, FrameBuffer, FrameSink, Progress, TerminalRenderer, Viewport,
};
use tui_automata::types::{ViewAction, TICK_MS};

pub fn run(config: SimConfig) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run_loop(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

struct Viewer {
    config: SimConfig,
    view: AutomatonView,
    fb: FrameBuffer,
    viewport: Viewport,
    driver: Driver,
    paused: bool,
    finished_at: Option<Instant>,
}

impl Viewer {
    fn new(config: SimConfig, viewport: Viewport) -> Self {
        let first = match config.selection {
            RuleSelection::Single(rule) => rule,
            RuleSelection::Cycle => Rule::new(0),
        };
        Self {
            config,
            view: AutomatonView::default(),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
            driver: Driver::new(first, config.geometry),
            paused: false,
            finished_at: None,
        }
    }

    fn restart(&mut self, rule: Rule) {
        debug!(rule = rule.id(), "starting rule");
        self.driver = Driver::new(rule, self.config.geometry);
        self.finished_at = None;
    }

    fn tick(&mut self) -> Result<()> {
        if self.driver.phase() != Phase::Done {
            let mut sink =
                FrameSink::new(&self.view, &mut self.fb, self.viewport, self.config.geometry);
            if self.driver.advance(&mut sink)? == Phase::Done {
                self.finished_at = Some(Instant::now());
            }
        }

        let progress = self.progress();
        self.view.draw_footer(&mut self.fb, &progress);

        let cycling = self.config.selection.is_cycle();
        let waited = self
            .finished_at
            .is_some_and(|t| t.elapsed() >= self.config.pause);
        if cycling && !self.paused && waited {
            self.restart(self.driver.rule().next());
        }
        Ok(())
    }

    fn progress(&self) -> Progress {
        let generations = self.config.geometry.generations();
        let drawn = match self.driver.phase() {
            Phase::Seeded => 0,
            Phase::Stepping => self.driver.generation(),
            Phase::Done => generations,
        };
        Progress {
            rule: self.driver.rule(),
            drawn,
            generations,
            paused: self.paused,
            cycling: self.config.selection.is_cycle(),
        }
    }

    fn apply(&mut self, action: ViewAction) {
        let rule = self.driver.rule();
        match action {
            ViewAction::NextRule => self.restart(rule.next()),
            ViewAction::PrevRule => self.restart(rule.prev()),
            ViewAction::Replay => self.restart(rule),
            ViewAction::Pause => self.paused = !self.paused,
        }
    }

    fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        // The frame is painted incrementally, so a resize repaints from the seed.
        self.restart(self.driver.rule());
    }
}

fn run_loop(term: &mut TerminalRenderer, config: SimConfig) -> Result<()> {
    let (w, h) = crossterm::terminal::size()?;
    let mut viewer = Viewer::new(config, Viewport::new(w, h));
    let tick = Duration::from_millis(TICK_MS);
    info!(selection = ?config.selection, "interactive viewer started");

    loop {
        viewer.tick()?;
        term.present(&viewer.fb)?;

        if !event::poll(tick)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    debug!(action = action.as_str(), "key action");
                    viewer.apply(action);
                }
            }
            Event::Resize(w, h) => {
                term.invalidate();
                viewer.resize(w, h);
            }
            _ => {}
        }
    }
}
