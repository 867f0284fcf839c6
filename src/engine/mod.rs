mod accumulator;
mod living;
mod playback;
#[cfg(test)]
mod tests;
mod topology;

pub use accumulator::NeighborAccumulator;
pub use living::LivingCells;
pub use playback::{Playback, PlaybackError, SpeedBounds};
pub use topology::{CellId, Grid};

use crate::{ConfigError, Pattern, Settings};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::{
    fmt,
    time::{Duration, Instant},
};

/// Births and deaths of one generation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepSummary {
    pub births: usize,
    pub deaths: usize,
    /// Number of cells whose rule was evaluated.
    pub candidates: usize,
}

/// Value of a named option returned by [`LifeEngine::get`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionValue {
    Number(u64),
    Flag(bool),
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

/// Conway's Game of Life on a torus, updated only around living cells.
pub struct LifeEngine {
    grid: Grid,
    living: LivingCells,
    playback: Playback,
    settings: Settings,
    rng: ChaCha8Rng,
    generation: u64,
}

impl LifeEngine {
    /// Fails if `settings` describe an empty board or inconsistent speeds.
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let rng = if let Some(x) = settings.rng_seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let bounds = SpeedBounds {
            min: settings.min_speed,
            max: settings.max_speed,
            step: settings.speed_step,
        };
        log::debug!(
            "created {}x{} board, tick every {} ms",
            settings.width,
            settings.height,
            settings.tick_speed
        );
        Ok(Self {
            grid: Grid::new(settings.width, settings.height),
            living: LivingCells::new(),
            playback: Playback::new(settings.tick_speed, bounds),
            settings,
            rng,
            generation: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn living(&self) -> &LivingCells {
        &self.living
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_alive(&self, id: CellId) -> bool {
        self.living.is_alive(id)
    }

    pub fn living_count(&self) -> usize {
        self.living.count()
    }

    /// Generations stepped since the board was last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    fn on_board(&self, id: CellId) -> bool {
        if id < self.grid.cell_count() {
            true
        } else {
            log::warn!("ignoring cell {id} outside the board");
            false
        }
    }

    /// Returns `true` if the cell was dead before.
    pub fn birth(&mut self, id: CellId) -> bool {
        self.on_board(id) && self.living.birth(id)
    }

    /// Returns `true` if the cell was alive before.
    pub fn kill(&mut self, id: CellId) -> bool {
        self.on_board(id) && self.living.kill(id)
    }

    /// Flips the cell and returns its new state.
    pub fn toggle(&mut self, id: CellId) -> bool {
        self.on_board(id) && self.living.toggle(id)
    }

    /// Kills every cell and stops playback.
    pub fn clear(&mut self) {
        self.playback.pause();
        self.living.clear();
        self.generation = 0;
    }

    /// Advances the board by one generation.
    ///
    /// Only cells that are alive or touch a living cell can change, so those
    /// are the only ones evaluated. Does not affect playback.
    pub fn step_generation(&mut self) -> StepSummary {
        let counts = NeighborAccumulator::build(&self.grid, &self.living);
        let mut summary = StepSummary {
            candidates: counts.len(),
            ..StepSummary::default()
        };
        for (id, neighbors) in counts.iter() {
            if self.living.is_alive(id) {
                if !(2..=3).contains(&neighbors) {
                    self.living.kill(id);
                    summary.deaths += 1;
                }
            } else if neighbors == 3 {
                self.living.birth(id);
                summary.births += 1;
            }
        }
        self.generation += 1;
        log::trace!(
            "generation {}: {} born, {} died, {} alive",
            self.generation,
            summary.births,
            summary.deaths,
            self.living.count()
        );
        summary
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_playing()
    }

    pub fn play(&mut self) {
        self.playback.play();
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    /// Steps the board if playing and a tick is due at `now`.
    pub fn tick(&mut self, now: Instant) -> Option<StepSummary> {
        if self.playback.poll(now) {
            Some(self.step_generation())
        } else {
            None
        }
    }

    /// Time left before the next scheduled tick, `None` while paused.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.playback.time_until_tick(now)
    }

    pub fn playback(&self) -> &Playback {
        &self.playback
    }

    pub fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }

    /// Milliseconds between generations.
    pub fn speed(&self) -> u64 {
        self.playback.speed()
    }

    pub fn set_speed(&mut self, speed: u64) -> Result<(), PlaybackError> {
        self.playback.set_speed(speed)
    }

    pub fn speed_up(&mut self) -> u64 {
        self.playback.speed_up()
    }

    pub fn slow_down(&mut self) -> u64 {
        self.playback.slow_down()
    }

    /// Clears the board and makes roughly one cell in `rate` alive.
    ///
    /// A `rate` of zero is treated as one, which fills the board.
    pub fn random_seed(&mut self, rate: u32) {
        let rate = rate.max(1);
        self.clear();
        for id in 0..self.grid.cell_count() {
            if self.rng.gen_range(0..rate) == 0 {
                self.living.birth(id);
            }
        }
        log::info!(
            "seeded {} of {} cells at rate 1/{rate}",
            self.living.count(),
            self.grid.cell_count()
        );
    }

    /// [`Self::random_seed`] with the configured rate.
    pub fn random_seed_default(&mut self) {
        self.random_seed(self.settings.seed_rate);
    }

    /// Clears the board and draws `pattern` in its center.
    ///
    /// Cells that fall outside the board are dropped.
    pub fn draw_form(&mut self, pattern: &Pattern) {
        self.clear();
        let offset_x = (self.grid.width() / 2) as i64 - (pattern.width() / 2) as i64;
        let offset_y = (self.grid.height() / 2) as i64 - (pattern.height() / 2) as i64;
        let mut clipped = 0;
        for (x, y) in pattern.alive_cells() {
            let (x, y) = (offset_x + x as i64, offset_y + y as i64);
            if self.grid.contains(x, y) {
                self.living.toggle(self.grid.cell_id(x, y));
            } else {
                clipped += 1;
            }
        }
        if clipped > 0 {
            log::warn!("{clipped} pattern cells do not fit on the board");
        }
        log::info!(
            "drew {}x{} pattern with {} cells",
            pattern.width(),
            pattern.height(),
            self.living.count()
        );
    }

    /// Looks up an option by its camelCase name.
    ///
    /// `speed` reflects the current tick interval and `cellCount` the living
    /// population; unknown names give `None`.
    pub fn get(&self, name: &str) -> Option<OptionValue> {
        use OptionValue::{Flag, Number};

        let s = &self.settings;
        let value = match name {
            "width" | "x" => Number(self.grid.width() as u64),
            "height" | "y" => Number(self.grid.height() as u64),
            "cellSize" => Number(s.cell_size as u64),
            "cellBorder" => Number(s.cell_border as u64),
            "speed" => Number(self.playback.speed()),
            "maxSpeed" => Number(s.max_speed),
            "minSpeed" => Number(s.min_speed),
            "incSpeed" | "speedStep" => Number(s.speed_step),
            "seed" | "seedRate" => Number(s.seed_rate as u64),
            "interactive" => Flag(s.interactive),
            "cellCount" => Number(self.living.count() as u64),
            "generation" => Number(self.generation),
            _ => return None,
        };
        Some(value)
    }
}

impl fmt::Display for LifeEngine {
    /// Draws the board with `#` for alive cells.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.grid.height() {
            let row = (0..self.grid.width())
                .map(|x| {
                    let id = self.grid.cell_id(x as i64, y as i64);
                    if self.is_alive(id) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
