#![warn(clippy::all)]

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use conway_life::{find_form, Config, LifeConfig, LifeEngine, FORMS};
use std::path::PathBuf;

/// Conway's Game of Life on a toroidal board.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// TOML file with board and playback options.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Board width in cells; derived from the window when not set.
    #[arg(long)]
    width: Option<u32>,
    /// Board height in cells; derived from the window when not set.
    #[arg(long)]
    height: Option<u32>,
    /// Seed of the random generator.
    #[arg(long)]
    rng_seed: Option<u64>,
    /// Run this many generations without a window and print the population.
    #[arg(long, value_name = "GENERATIONS")]
    headless: Option<u64>,
    /// Start from a built-in pattern instead of a random board.
    #[arg(long)]
    pattern: Option<String>,
}

impl Cli {
    fn life_config(&self) -> Result<LifeConfig> {
        let mut config = match &self.config {
            Some(path) => LifeConfig::load(path)?,
            None => LifeConfig::default(),
        };
        config.width = self.width.or(config.width);
        config.height = self.height.or(config.height);
        config.rng_seed = self.rng_seed.or(config.rng_seed);
        Ok(config)
    }

    fn seed_board(&self, engine: &mut LifeEngine) -> Result<()> {
        match &self.pattern {
            Some(name) => {
                let form = find_form(name).ok_or_else(|| {
                    let known = FORMS.iter().map(|f| f.name).collect::<Vec<_>>();
                    anyhow!("unknown pattern {name:?}, expected one of {known:?}")
                })?;
                let pattern = form
                    .pattern()
                    .with_context(|| format!("failed to parse pattern {}", form.name))?;
                engine.draw_form(&pattern);
            }
            None => engine.random_seed_default(),
        }
        Ok(())
    }
}

fn run_headless(cli: &Cli, generations: u64) -> Result<()> {
    const DEFAULT_SIZE: u32 = 64;

    let mut config = cli.life_config()?;
    config.width.get_or_insert(DEFAULT_SIZE);
    config.height.get_or_insert(DEFAULT_SIZE);
    let settings = config.resolve(None).context("invalid configuration")?;
    let mut engine = LifeEngine::new(settings)?;
    cli.seed_board(&mut engine)?;

    log::info!("generation 0: {} alive", engine.living_count());
    println!("generation 0: {} alive", engine.living_count());
    for _ in 0..generations {
        let summary = engine.step_generation();
        let line = format!(
            "generation {}: {} alive (+{} -{})",
            engine.generation(),
            engine.living_count(),
            summary.births,
            summary.deaths
        );
        log::info!("{line}");
        println!("{line}");
        if engine.living_count() == 0 {
            break;
        }
    }
    Ok(())
}

fn run_gui(cli: &Cli) -> Result<()> {
    use eframe::egui::{vec2, ViewportBuilder};

    let viewport = Config::board_viewport(Config::WINDOW_SIZE);
    let settings = cli
        .life_config()?
        .resolve(Some(viewport))
        .context("invalid configuration")?;
    let mut engine = LifeEngine::new(settings)?;
    if cli.pattern.is_some() {
        cli.seed_board(&mut engine)?;
    }

    let [w, h] = Config::WINDOW_SIZE;
    let [min_w, min_h] = Config::MIN_WINDOW_SIZE;
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size(vec2(w, h))
            .with_min_inner_size(vec2(min_w, min_h)),
        follow_system_theme: false,
        default_theme: eframe::Theme::Light,
        ..Default::default()
    };
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |cc| Ok(Box::new(conway_life::App::new(&cc.egui_ctx, engine)))),
    )
    .map_err(|err| anyhow!("window failed: {err}"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.headless {
        Some(generations) => run_headless(&cli, generations),
        None => run_gui(&cli),
    }
}
