mod config;
mod parse_rle;
mod pattern;
mod patterns;

pub use config::{ConfigError, LifeConfig, Settings};
pub use parse_rle::parse_rle;
pub use pattern::{Pattern, PatternError};
pub use patterns::{find_form, Form, FORMS};
