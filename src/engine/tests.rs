use super::*;
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;

fn engine(width: u32, height: u32) -> LifeEngine {
    LifeEngine::new(Settings {
        rng_seed: Some(SEED),
        ..Settings::with_size(width, height)
    })
    .unwrap()
}

fn alive_set(life: &LifeEngine) -> Vec<CellId> {
    let mut cells = life.living().iter().collect::<Vec<_>>();
    cells.sort_unstable();
    cells
}

/// Evaluates every cell of the board, reading a snapshot of the previous
/// generation.
fn naive_step(width: u32, height: u32, cells: &[bool]) -> Vec<bool> {
    let (w, h) = (width as usize, height as usize);
    let get = |x: usize, y: usize| cells[x + y * w] as usize;
    let mut next = vec![false; w * h];
    for y in 0..h {
        for x in 0..w {
            let x1 = if x == 0 { w - 1 } else { x - 1 };
            let x2 = if x == w - 1 { 0 } else { x + 1 };
            let y1 = if y == 0 { h - 1 } else { y - 1 };
            let y2 = if y == h - 1 { 0 } else { y + 1 };
            let neibs = get(x1, y1)
                + get(x, y1)
                + get(x2, y1)
                + get(x1, y)
                + get(x2, y)
                + get(x1, y2)
                + get(x, y2)
                + get(x2, y2);
            next[x + y * w] = if cells[x + y * w] {
                neibs == 2 || neibs == 3
            } else {
                neibs == 3
            };
        }
    }
    next
}

#[test]
fn test_consistency_with_full_scan() {
    for (width, height, fill_rate) in [(64, 48, 0.3), (17, 5, 0.5), (3, 3, 0.4), (2, 7, 0.5)] {
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
        let mut cells = (0..width * height)
            .map(|_| rng.gen_bool(fill_rate))
            .collect::<Vec<_>>();

        let mut life = engine(width, height);
        for (id, _) in cells.iter().enumerate().filter(|(_, alive)| **alive) {
            life.birth(id as CellId);
        }

        for generation in 0..32 {
            cells = naive_step(width, height, &cells);
            life.step_generation();
            let expected = (0..width * height)
                .filter(|&id| cells[id as usize])
                .collect::<Vec<_>>();
            assert_eq!(
                alive_set(&life),
                expected,
                "{width}x{height} board diverged at generation {generation}"
            );
            assert_eq!(life.living_count(), expected.len());
        }
    }
}

#[test]
fn test_step_summary() {
    let mut life = engine(8, 8);
    for x in 3..=5 {
        life.birth(life.grid().cell_id(x, 4));
    }
    let summary = life.step_generation();
    assert_eq!(
        summary,
        StepSummary {
            births: 2,
            deaths: 2,
            candidates: 15
        }
    );
    assert_eq!(life.generation(), 1);
}

#[test]
fn test_step_does_not_touch_playback() {
    let mut life = engine(8, 8);
    life.step_generation();
    assert!(!life.is_playing());
    life.play();
    life.step_generation();
    assert!(life.is_playing());
}

#[test]
fn test_clear_stops_playback() {
    let mut life = engine(8, 8);
    life.random_seed(2);
    life.play();
    life.step_generation();
    life.clear();
    assert!(!life.is_playing());
    assert_eq!(life.living_count(), 0);
    assert_eq!(life.generation(), 0);
    life.clear();
    assert!(!life.is_playing());
    assert_eq!(life.living_count(), 0);
}

#[test]
fn test_tick_follows_schedule() {
    let mut life = engine(8, 8);
    let t0 = Instant::now();
    assert!(life.tick(t0 + Duration::from_secs(10)).is_none());

    life.playback_mut().play_at(t0);
    assert!(life.tick(t0 + Duration::from_millis(100)).is_none());
    assert!(life.tick(t0 + Duration::from_millis(250)).is_some());
    assert_eq!(life.generation(), 1);
    assert_eq!(
        life.time_until_tick(t0 + Duration::from_millis(300)),
        Some(Duration::from_millis(200))
    );

    life.pause();
    assert!(life.tick(t0 + Duration::from_secs(10)).is_none());
    assert_eq!(life.time_until_tick(t0), None);
}

#[test]
fn test_out_of_board_ids_are_ignored() {
    let mut life = engine(4, 4);
    assert!(!life.birth(16));
    assert!(!life.toggle(100));
    assert!(!life.kill(16));
    assert_eq!(life.living_count(), 0);
}

#[test]
fn test_random_seed_rates() {
    let mut life = engine(100, 100);
    life.random_seed(1);
    assert_eq!(life.living_count(), 10_000);
    life.random_seed(0);
    assert_eq!(life.living_count(), 10_000);

    life.random_seed(8);
    let n = life.living_count();
    // 1250 expected
    assert!((1000..1500).contains(&n), "n={n}");
    assert_eq!(life.generation(), 0);
}

#[test]
fn test_random_seed_is_reproducible() {
    let mut a = engine(40, 30);
    let mut b = engine(40, 30);
    a.random_seed_default();
    b.random_seed_default();
    assert_eq!(alive_set(&a), alive_set(&b));
}

#[test]
fn test_draw_form_centers_pattern() {
    let mut life = engine(10, 9);
    life.birth(0);
    let glider = Pattern::from_rows(&[[0u8, 1, 0], [0, 0, 1], [1, 1, 1]]).unwrap();
    life.draw_form(&glider);

    // offset is (10/2 - 3/2, 9/2 - 3/2) = (4, 3)
    let grid = *life.grid();
    let expected = {
        let mut v = [(5, 3), (6, 4), (4, 5), (5, 5), (6, 5)]
            .map(|(x, y)| grid.cell_id(x, y))
            .to_vec();
        v.sort_unstable();
        v
    };
    assert_eq!(alive_set(&life), expected);
}

#[test]
fn test_draw_form_clips_large_pattern() {
    let mut life = engine(3, 3);
    let line = Pattern::from_rows(&[[1u8; 5]]).unwrap();
    life.draw_form(&line);
    // offset x is 1 - 2 = -1, so columns -1 and 3 are dropped
    assert_eq!(life.living_count(), 3);
    assert!((0..3).all(|x| life.is_alive(life.grid().cell_id(x, 1))));
}

#[test]
fn test_get_options() {
    let mut life = engine(30, 20);
    assert_eq!(life.get("width"), Some(OptionValue::Number(30)));
    assert_eq!(life.get("height"), Some(OptionValue::Number(20)));
    assert_eq!(life.get("speed"), Some(OptionValue::Number(250)));
    assert_eq!(life.get("seed"), Some(OptionValue::Number(8)));
    assert_eq!(life.get("interactive"), Some(OptionValue::Flag(true)));
    assert_eq!(life.get("cellCount"), Some(OptionValue::Number(0)));
    assert_eq!(life.get("bogus"), None);

    life.birth(3);
    life.set_speed(100).unwrap();
    assert_eq!(life.get("cellCount"), Some(OptionValue::Number(1)));
    assert_eq!(life.get("speed"), Some(OptionValue::Number(100)));
}

#[test]
fn test_display() {
    let mut life = engine(3, 2);
    life.birth(1);
    life.birth(5);
    assert_eq!(life.to_string(), ".#.\n..#\n");
}

#[test]
fn test_invalid_settings_are_rejected() {
    assert!(matches!(
        LifeEngine::new(Settings::with_size(0, 5)),
        Err(ConfigError::ZeroDimension { axis: "width" })
    ));
    let settings = Settings {
        min_speed: 10,
        max_speed: 10,
        ..Settings::with_size(5, 5)
    };
    assert!(matches!(
        LifeEngine::new(settings),
        Err(ConfigError::InvertedSpeedBounds { min: 10, max: 10 })
    ));
}
