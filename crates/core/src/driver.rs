//! Driver - the generation loop
//!
//! A [`Driver`] runs one rule for a fixed number of generations. It owns the
//! current [`Row`] and, for every generation, hands the centered window of it
//! to a [`RowSink`] before replacing it with the next row.
//!
//! ```text
//!  Seeded ──advance──▶ Stepping ──advance (last generation)──▶ Done
//!                        │  ▲
//!                        └──┘ advance
//! ```
//!
//! Callers that want to stop early simply stop calling [`Driver::advance`].

use crate::engine::{size_info, Row, SizeInfo};
use crate::error::{AutomatonError, Result};
use crate::rule::Rule;
use crate::types::Bit;

/// Rendering capability consumed by the driver.
///
/// `cells` passed to [`RowSink::draw_row`] is borrowed from the driver's
/// current row and is only valid for the duration of the call.
pub trait RowSink {
    type Error: From<AutomatonError>;

    /// Called once before the first row of a run.
    fn begin(&mut self, _rule: Rule, _generations: usize) -> std::result::Result<(), Self::Error> {
        Ok(())
    }

    /// Draw the visible cells of generation `generation`.
    fn draw_row(
        &mut self,
        generation: usize,
        cells: &[Bit],
    ) -> std::result::Result<(), Self::Error>;

    /// Called once after the last row of a run.
    fn finish(&mut self) -> std::result::Result<(), Self::Error> {
        Ok(())
    }
}

/// Validated generation count and display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    generations: usize,
    display_width: usize,
    seed: SizeInfo,
}

impl Geometry {
    pub fn new(generations: usize, display_width: usize) -> Result<Self> {
        let seed = size_info(generations, display_width)?;
        Ok(Self {
            generations,
            display_width,
            seed,
        })
    }

    pub fn generations(&self) -> usize {
        self.generations
    }

    pub fn display_width(&self) -> usize {
        self.display_width
    }

    /// Seed row width and middle index for this geometry.
    pub fn seed(&self) -> SizeInfo {
        self.seed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Seed built, nothing drawn yet.
    Seeded,
    /// At least one generation drawn, more remain.
    Stepping,
    /// Every generation has been drawn.
    Done,
}

pub struct Driver {
    rule: Rule,
    geometry: Geometry,
    row: Row,
    generation: usize,
    phase: Phase,
}

impl Driver {
    pub fn new(rule: Rule, geometry: Geometry) -> Self {
        Self {
            rule,
            geometry,
            row: Row::seed(geometry.seed()),
            generation: 0,
            phase: Phase::Seeded,
        }
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index of the generation the next [`Driver::advance`] will draw.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn current_row(&self) -> &Row {
        &self.row
    }

    /// Draw the current generation and step to the next one.
    ///
    /// Returns the phase after the call. Once [`Phase::Done`] is reached further
    /// calls are no-ops.
    pub fn advance<S: RowSink>(&mut self, sink: &mut S) -> std::result::Result<Phase, S::Error> {
        match self.phase {
            Phase::Done => return Ok(Phase::Done),
            Phase::Seeded => {
                sink.begin(self.rule, self.geometry.generations)?;
                self.phase = Phase::Stepping;
            }
            Phase::Stepping => {}
        }

        let visible = self.row.window(self.geometry.display_width)?;
        sink.draw_row(self.generation, visible)?;

        if self.generation + 1 < self.geometry.generations {
            self.row = self.row.step(self.rule)?;
            self.generation += 1;
        } else {
            self.phase = Phase::Done;
            sink.finish()?;
        }

        Ok(self.phase)
    }

    /// Drive the run to completion.
    pub fn run<S: RowSink>(mut self, sink: &mut S) -> std::result::Result<(), S::Error> {
        while self.advance(sink)? != Phase::Done {}
        Ok(())
    }
}
