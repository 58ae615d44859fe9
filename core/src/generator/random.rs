use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Purely random placement, every bomb lands uniformly on a cell that does not have one yet.
#[derive(Clone, Debug)]
pub struct RandomMineGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Seed this generator started from, enough to replay the whole game.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(&mut self, config: BoardConfig) -> Result<MineLayout> {
        let (height, width) = config.size();
        let mut bomb_mask: Array2<bool> = Array2::default(config.size().to_nd_index());

        // rejection sampling, always terminates since a valid config leaves a free cell
        let mut placed: CellCount = 0;
        let mut attempts: u32 = 0;
        while placed < config.bombs() {
            let coords = (
                self.rng.random_range(0..height),
                self.rng.random_range(0..width),
            );
            attempts += 1;
            if !bomb_mask[coords.to_nd_index()] {
                bomb_mask[coords.to_nd_index()] = true;
                placed += 1;
            }
        }
        log::trace!(
            "Placed {} bombs on {}x{} in {} attempts",
            placed,
            height,
            width,
            attempts
        );

        let layout = MineLayout::from_bomb_mask(bomb_mask)?;
        if layout.bomb_count() != config.bombs() {
            log::warn!(
                "Generated layout count mismatch, actual: {}, requested: {}",
                layout.bomb_count(),
                config.bombs()
            );
        }
        Ok(layout)
    }
}
