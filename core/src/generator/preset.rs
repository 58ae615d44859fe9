use std::collections::VecDeque;

use super::*;

/// Seed used once the preset layouts run out.
const FALLBACK_SEED: u64 = 0x5EED;

/// Replays fixed layouts in order, then continues with random ones.
///
/// Layouts whose size or bomb count differ from the requested configuration are skipped with a warning, so a
/// board never ends up with a grid that contradicts its own configuration.
#[derive(Clone, Debug)]
pub struct PresetMineGenerator {
    layouts: VecDeque<MineLayout>,
    fallback: RandomMineGenerator,
}

impl PresetMineGenerator {
    pub fn new(layouts: impl IntoIterator<Item = MineLayout>) -> Self {
        Self {
            layouts: layouts.into_iter().collect(),
            fallback: RandomMineGenerator::new(FALLBACK_SEED),
        }
    }

    pub fn with_fallback(mut self, fallback: RandomMineGenerator) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn remaining(&self) -> usize {
        self.layouts.len()
    }
}

impl MineGenerator for PresetMineGenerator {
    fn generate(&mut self, config: BoardConfig) -> Result<MineLayout> {
        while let Some(layout) = self.layouts.pop_front() {
            if layout.size() == config.size() && layout.bomb_count() == config.bombs() {
                return Ok(layout);
            }
            log::warn!(
                "Skipping preset layout {:?} with {} bombs, board wants {}",
                layout.size(),
                layout.bomb_count(),
                config
            );
        }
        self.fallback.generate(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(bombs: &[Coord2]) -> MineLayout {
        MineLayout::from_bomb_coords((3, 3), bombs).unwrap()
    }

    #[test]
    fn replays_in_order_then_falls_back() {
        let config = BoardConfig::new(3, 3, 1).unwrap();
        let mut generator = PresetMineGenerator::new([layout(&[(0, 0)]), layout(&[(2, 2)])]);

        assert_eq!(generator.generate(config).unwrap(), layout(&[(0, 0)]));
        assert_eq!(generator.generate(config).unwrap(), layout(&[(2, 2)]));
        assert_eq!(generator.remaining(), 0);

        let random = generator.generate(config).unwrap();
        assert_eq!(random.bomb_count(), 1);
    }

    #[test]
    fn fallback_is_replaceable() {
        let config = BoardConfig::new(3, 3, 2).unwrap();
        let mut generator =
            PresetMineGenerator::new(Vec::new()).with_fallback(RandomMineGenerator::new(11));
        let mut expected = RandomMineGenerator::new(11);

        assert_eq!(generator.generate(config).unwrap(), expected.generate(config).unwrap());
    }

    #[test]
    fn skips_layouts_not_matching_config() {
        let config = BoardConfig::new(3, 3, 1).unwrap();
        let mut generator = PresetMineGenerator::new([
            layout(&[(0, 0), (1, 1)]),
            MineLayout::from_bomb_coords((2, 2), &[(0, 0)]).unwrap(),
            layout(&[(1, 2)]),
        ]);

        assert_eq!(generator.generate(config).unwrap(), layout(&[(1, 2)]));
    }
}
