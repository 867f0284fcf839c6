mod engine;
mod gui;
mod utils;

pub use engine::{
    CellId, Grid, LifeEngine, LivingCells, NeighborAccumulator, OptionValue, Playback,
    PlaybackError, SpeedBounds, StepSummary,
};
pub use gui::{App, Config};
pub use utils::{
    find_form, parse_rle, ConfigError, Form, LifeConfig, Pattern, PatternError, Settings, FORMS,
};
