use conway_life::{CellId, LifeEngine, Pattern, PlaybackError, Settings};
use rand::{Rng, SeedableRng};

const SEED: u64 = 42;

fn blank(width: u32, height: u32) -> LifeEngine {
    LifeEngine::new(Settings {
        rng_seed: Some(SEED),
        ..Settings::with_size(width, height)
    })
    .unwrap()
}

fn alive_cells(life: &LifeEngine) -> Vec<(u32, u32)> {
    let grid = life.grid();
    let mut cells = life
        .living()
        .iter()
        .map(|id| (grid.x(id), grid.y(id)))
        .collect::<Vec<_>>();
    cells.sort_unstable();
    cells
}

fn place(life: &mut LifeEngine, cells: &[(i64, i64)]) {
    for &(x, y) in cells {
        let id = life.grid().cell_id(x, y);
        life.birth(id);
    }
}

#[test]
fn test_count_matches_alive_cells() {
    let mut life = blank(20, 20);
    let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(SEED);
    for _ in 0..2_000 {
        let id: CellId = rng.gen_range(0..400);
        match rng.gen_range(0..3) {
            0 => {
                life.birth(id);
            }
            1 => {
                life.kill(id);
            }
            _ => {
                life.toggle(id);
            }
        }
        let alive = (0..400).filter(|&id| life.is_alive(id)).count();
        assert_eq!(life.living_count(), alive);
    }
}

#[test]
fn test_cell_id_inverse() {
    let life = blank(13, 7);
    let grid = life.grid();
    for id in 0..grid.cell_count() {
        assert_eq!(grid.cell_id(grid.x(id) as i64, grid.y(id) as i64), id);
    }
}

#[test]
fn test_clear_is_idempotent() {
    let mut life = blank(10, 10);
    life.random_seed(3);
    life.play();
    life.clear();
    let once = (alive_cells(&life), life.is_playing());
    life.clear();
    assert_eq!((alive_cells(&life), life.is_playing()), once);
    assert_eq!(once, (vec![], false));
}

#[test]
fn test_step_is_deterministic() {
    let mut a = blank(50, 40);
    a.random_seed(4);
    let mut b = blank(50, 40);
    for id in a.living().iter() {
        b.birth(id);
    }
    for _ in 0..20 {
        a.step_generation();
        b.step_generation();
        assert_eq!(alive_cells(&a), alive_cells(&b));
    }
}

#[test]
fn test_block_is_still() {
    let mut life = blank(10, 10);
    place(&mut life, &[(4, 4), (5, 4), (4, 5), (5, 5)]);
    let before = alive_cells(&life);
    for _ in 0..10 {
        life.step_generation();
        assert_eq!(alive_cells(&life), before);
    }
}

#[test]
fn test_blinker_oscillates() {
    let mut life = blank(10, 10);
    place(&mut life, &[(3, 5), (4, 5), (5, 5)]);
    let horizontal = alive_cells(&life);

    life.step_generation();
    assert_eq!(alive_cells(&life), vec![(4, 4), (4, 5), (4, 6)]);

    life.step_generation();
    assert_eq!(alive_cells(&life), horizontal);
}

#[test]
fn test_blinker_across_edge() {
    let mut life = blank(6, 6);
    place(&mut life, &[(5, 0), (0, 0), (1, 0)]);
    life.step_generation();
    assert_eq!(alive_cells(&life), vec![(0, 0), (0, 1), (0, 5)]);
}

#[test]
fn test_glider_translates() {
    let mut life = blank(20, 20);
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    place(&mut life, &glider);
    for _ in 0..4 {
        life.step_generation();
    }
    let mut expected = glider
        .iter()
        .map(|&(x, y)| (x as u32 + 1, y as u32 + 1))
        .collect::<Vec<_>>();
    expected.sort_unstable();
    assert_eq!(alive_cells(&life), expected);
    assert_eq!(life.living_count(), 5);
}

#[test]
fn test_glider_wraps_around() {
    let mut life = blank(8, 8);
    let glider = Pattern::from_rows(&[[0u8, 1, 0], [0, 0, 1], [1, 1, 1]]).unwrap();
    life.draw_form(&glider);
    let start = alive_cells(&life);
    // a glider moves one cell diagonally every 4 generations
    for _ in 0..4 * 8 {
        life.step_generation();
    }
    assert_eq!(alive_cells(&life), start);
}

#[test]
fn test_speed_bounds_are_strict() {
    let mut life = blank(10, 10);
    let min = life.settings().min_speed;
    let max = life.settings().max_speed;
    assert!(matches!(
        life.set_speed(min),
        Err(PlaybackError::SpeedOutOfRange { .. })
    ));
    assert!(life.set_speed(max).is_err());
    assert_eq!(life.speed(), 250);
    assert!(life.set_speed(min + 1).is_ok());
    assert_eq!(life.speed(), min + 1);
}

#[test]
fn test_seeding_gets_sparser() {
    let mut previous = usize::MAX;
    for rate in [1, 2, 4, 8, 16, 64] {
        let mut life = blank(200, 200);
        life.random_seed(rate);
        let n = life.living_count();
        assert!(n <= previous, "rate={rate} n={n} previous={previous}");
        previous = n;
    }
}
