use crate::*;
pub use preset::*;
pub use random::*;

mod preset;
mod random;

/// Source of bomb layouts, a board asks it again every time the grid is regenerated.
pub trait MineGenerator {
    fn generate(&mut self, config: BoardConfig) -> Result<MineLayout>;
}
