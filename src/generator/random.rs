use super::*;
use alloc::collections::BTreeSet;
use rand::prelude::*;

/// Distinct in-bounds mine coordinates. The set type carries the
/// no-duplicates invariant.
pub type MineSet = BTreeSet<Coord2>;

/// Draws `count` distinct coordinates on a `size × size` board by rejection
/// sampling: uniform draws, duplicates discarded, until the quota is met.
///
/// Uniform over all combinations, but the rejection rate grows as `count`
/// approaches `size²`; a saturated board degrades to O(n log n) expected
/// draws. Tolerated rather than redesigned, since intended counts are small.
pub fn sample_mines<R: Rng + ?Sized>(rng: &mut R, size: Coord, count: CellCount) -> Result<MineSet> {
    if size == 0 {
        return Err(FieldError::InvalidSize);
    }
    let total = total_cells(size);
    if count > total {
        return Err(FieldError::TooManyMines);
    }
    if count > 0 && u32::from(count) * 10 >= u32::from(total) * 9 {
        log::warn!(
            "Mine density {}/{} is near saturation, rejection sampling may be slow",
            count,
            total
        );
    }

    let mut mines = MineSet::new();
    while mines.len() < usize::from(count) {
        let coords = (rng.random_range(0..size), rng.random_range(0..size));
        mines.insert(coords);
    }
    Ok(mines)
}

/// Purely random generation strategy with an explicit seed, so a board can be
/// reproduced from its `(config, seed)` pair.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomFieldGenerator {
    seed: u64,
}

impl RandomFieldGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl FieldGenerator for RandomFieldGenerator {
    fn generate(self, config: FieldConfig) -> Result<Minefield> {
        config.validate()?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let cells = allocate(config.size)?;
        let mines = sample_mines(&mut rng, config.size, config.mines)?;
        let cells = insert_mines(cells, mines.iter().copied());
        let cells = annotate(cells, mines.iter().copied());
        Ok(Minefield::from_cells(cells))
    }
}
