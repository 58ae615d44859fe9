use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// How many times a bomb under the first reveal may trigger a fresh grid before giving up.
pub const MAX_REGENERATIONS: u32 = 1000;

/// Valid transitions:
/// - Active -> Won
/// - Active -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardState {
    /// Moves are accepted
    #[default]
    Active,
    /// Every safe tile was revealed
    Won,
    /// A bomb was revealed after the first move
    Lost,
}

impl BoardState {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Represents a game from the first reveal to a win or a loss.
#[derive(Clone, Debug)]
pub struct Board<G = RandomMineGenerator> {
    config: BoardConfig,
    tiles: Array2<Tile>,
    revealed_count: CellCount,
    flag_count: CellCount,
    first_move: bool,
    state: BoardState,
    triggered_bomb: Option<Coord2>,
    generations: u32,
    generator: G,
}

impl Board<RandomMineGenerator> {
    /// Board with randomly placed bombs, fails when the dimensions are empty or the bombs leave no safe tile.
    pub fn new(height: Coord, width: Coord, bombs: CellCount) -> Result<Self> {
        let config = BoardConfig::new(height, width, bombs)?;
        Self::with_generator(config, RandomMineGenerator::from_entropy())
    }

    pub fn with_seed(config: BoardConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }

    /// Board whose first grid is `layout`, regenerations fall back to random placement.
    pub fn from_layout(layout: MineLayout) -> Result<Self> {
        Self::from_layout_with_generator(layout, RandomMineGenerator::from_entropy())
    }
}

impl<G: MineGenerator> Board<G> {
    pub fn with_generator(config: BoardConfig, mut generator: G) -> Result<Self> {
        let layout = generator.generate(config)?;
        Self::build(config, &layout, generator)
    }

    /// Board whose first grid is `layout`, `generator` is only asked for replacement grids.
    pub fn from_layout_with_generator(layout: MineLayout, generator: G) -> Result<Self> {
        let config = layout.board_config()?;
        Self::build(config, &layout, generator)
    }

    fn build(config: BoardConfig, layout: &MineLayout, generator: G) -> Result<Self> {
        let tiles = build_tiles(config, layout)?;
        log::debug!("Created board {}", config);
        Ok(Self {
            config,
            tiles,
            revealed_count: 0,
            flag_count: 0,
            first_move: true,
            state: BoardState::Active,
            triggered_bomb: None,
            generations: 1,
            generator,
        })
    }

    pub fn config(&self) -> BoardConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// True until a reveal succeeds without hitting a bomb.
    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    pub fn total_bombs(&self) -> CellCount {
        self.config.bombs()
    }

    /// Safe tiles revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flag_count(&self) -> CellCount {
        self.flag_count
    }

    /// How many bombs have not been flagged yet, negative when there are more flags than bombs
    pub fn bombs_left(&self) -> isize {
        (self.config.bombs() as isize) - (self.flag_count as isize)
    }

    /// Bomb that ended a lost game.
    pub fn triggered_bomb(&self) -> Option<Coord2> {
        self.triggered_bomb
    }

    /// Number of grids generated for this board, more than one means the first reveal forced a regeneration.
    pub fn generations(&self) -> u32 {
        self.generations
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn tile(&self, coords: Coord2) -> Option<&Tile> {
        if self.config.contains(coords) {
            Some(&self.tiles[coords.to_nd_index()])
        } else {
            None
        }
    }

    /// Every tile in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    pub(crate) fn tile_grid(&self) -> &Array2<Tile> {
        &self.tiles
    }

    /// Reveal a tile, flooding through zero-count neighbors.
    ///
    /// Refused moves come back as [`RevealOutcome::Rejected`] without touching the board. The only error is
    /// [`GameError::RegenerationLimit`], raised when the first reveal kept landing on a bomb; the board is then a
    /// freshly generated grid with nothing revealed.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        if let Err(rejection) = self.check_revealable(coords) {
            log::debug!("Reveal at {:?} rejected: {}", coords, rejection);
            return Ok(RevealOutcome::Rejected(rejection));
        }

        if self.first_move {
            self.ensure_safe_first_move(coords)?;
        }

        let tile = &mut self.tiles[coords.to_nd_index()];
        if tile.is_bomb() {
            tile.reveal();
            self.triggered_bomb = Some(coords);
            self.end_game(BoardState::Lost);
            return Ok(RevealOutcome::Lost);
        }

        self.flood_reveal(coords);
        self.first_move = false;

        if self.revealed_count == self.config.safe_cells() {
            self.end_game(BoardState::Won);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Continued)
        }
    }

    /// Toggle the flag on a hidden tile.
    pub fn flag(&mut self, coords: Coord2) -> FlagOutcome {
        if let Err(rejection) = self.check_flaggable(coords) {
            log::debug!("Flag at {:?} rejected: {}", coords, rejection);
            return FlagOutcome::Rejected(rejection);
        }

        if self.tiles[coords.to_nd_index()].toggle_flag() {
            self.flag_count += 1;
            FlagOutcome::Flagged
        } else {
            self.flag_count -= 1;
            FlagOutcome::Unflagged
        }
    }

    fn check_revealable(&self, coords: Coord2) -> core::result::Result<(), Rejection> {
        let tile = self.check_target(coords)?;
        if tile.is_revealed() {
            Err(Rejection::AlreadyRevealed)
        } else if tile.is_flagged() {
            Err(Rejection::Flagged)
        } else {
            Ok(())
        }
    }

    fn check_flaggable(&self, coords: Coord2) -> core::result::Result<(), Rejection> {
        let tile = self.check_target(coords)?;
        if tile.is_revealed() {
            Err(Rejection::AlreadyRevealed)
        } else {
            Ok(())
        }
    }

    fn check_target(&self, coords: Coord2) -> core::result::Result<&Tile, Rejection> {
        if !self.state.is_active() {
            return Err(Rejection::GameNotActive);
        }
        self.tile(coords).ok_or(Rejection::OutOfBounds)
    }

    /// Swaps the grid until `coords` is safe, only valid before any tile was revealed.
    fn ensure_safe_first_move(&mut self, coords: Coord2) -> Result<()> {
        let mut attempts = 0;
        while self.tiles[coords.to_nd_index()].is_bomb() {
            if attempts == MAX_REGENERATIONS {
                log::warn!(
                    "First reveal at {:?} still on a bomb after {} regenerations",
                    coords,
                    attempts
                );
                return Err(GameError::RegenerationLimit { attempts });
            }
            attempts += 1;
            log::debug!(
                "First reveal at {:?} hit a bomb, regenerating (attempt {})",
                coords,
                attempts
            );
            self.regenerate()?;
        }
        Ok(())
    }

    /// Replace the grid with a new layout, dropping every reveal and flag.
    fn regenerate(&mut self) -> Result<()> {
        let layout = self.generator.generate(self.config)?;
        self.tiles = build_tiles(self.config, &layout)?;
        self.revealed_count = 0;
        self.flag_count = 0;
        self.first_move = true;
        self.generations += 1;
        Ok(())
    }

    /// Reveal `start` and, through every zero-count tile reached, its hidden neighbors.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut pending = vec![start];

        while let Some(coords) = pending.pop() {
            let tile = &mut self.tiles[coords.to_nd_index()];

            // zero-count tiles never border a bomb, so only hidden safe tiles get here
            if !tile.is_hidden() {
                continue;
            }

            tile.reveal();
            self.revealed_count += 1;
            let count = tile.neighbor_bombs();
            log::trace!("Revealed tile at {:?}, bomb count: {}", coords, count);

            if count == 0 {
                pending.extend(
                    neighbors(coords, self.config.size())
                        .filter(|&pos| self.tiles[pos.to_nd_index()].is_hidden()),
                );
            }
        }
    }

    fn end_game(&mut self, state: BoardState) {
        debug_assert!(state.is_finished());
        self.state = state;
        log::debug!(
            "Game ended {:?} with {} of {} safe tiles revealed",
            state,
            self.revealed_count,
            self.config.safe_cells()
        );
    }
}

/// Fresh tile grid for `layout`, with neighbor counts filled in.
fn build_tiles(config: BoardConfig, layout: &MineLayout) -> Result<Array2<Tile>> {
    if layout.size() != config.size() || layout.bomb_count() != config.bombs() {
        return Err(GameError::LayoutMismatch { expected: config });
    }

    let counts = layout.neighbor_counts();
    Ok(Array2::from_shape_fn(config.size().to_nd_index(), |(row, col)| {
        let position = (row as Coord, col as Coord);
        Tile::new(position, layout[position], counts[(row, col)])
    }))
}
