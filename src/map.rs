use crate::error::Error;
use crate::tile::TileKind;

/// Row-major tile grid: cell `(col, row)` lives at `tiles[row * width + col]`,
/// top-to-bottom, left-to-right. Populated once, never mutated afterwards.
#[derive(Debug)]
pub struct TileMap {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl TileMap {
    /// Build a map from a flat tile sequence. Dimensions must be nonzero and
    /// `width * height` must match the sequence length.
    pub fn new(width: usize, height: usize, tiles: Vec<TileKind>) -> Result<Self, Error> {
        if width == 0 || height == 0 || width * height != tiles.len() {
            return Err(Error::Configuration(format!(
                "map is {}x{} but {} tiles were supplied",
                width,
                height,
                tiles.len()
            )));
        }
        Ok(TileMap {
            width,
            height,
            tiles,
        })
    }

    /// Grid width in tiles.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in tiles.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The flat row-major tile sequence.
    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    /// The tile at `(col, row)`.
    pub fn tile_at(&self, col: usize, row: usize) -> TileKind {
        self.tiles[row * self.width + col]
    }
}

/// The hand-authored 8x8 demo layout: a closed loop of path tiles around a
/// floor area, surrounded by blank space.
pub fn demo_map() -> Result<TileMap, Error> {
    use TileKind::*;
    TileMap::new(
        8,
        8,
        vec![
            Blank, Blank, Blank, InnerBr, EdgeBottom, EdgeBottom, InnerBl, Blank, //
            Blank, Blank, InnerBr, CornerBr, Floor, Floor, CornerBl, EdgeBottom, //
            Blank, InnerBr, CornerBr, Floor, Floor, Floor, Floor, Floor, //
            InnerBr, CornerBr, Floor, Floor, Floor, Floor, Floor, Floor, //
            EdgeRight, Floor, Floor, Floor, Floor, Floor, Floor, Floor, //
            EdgeRight, Floor, Floor, Floor, Floor, Floor, Floor, Floor, //
            EdgeRight, Floor, Floor, Floor, CornerTl, EdgeTop, EdgeTop, EdgeTop, //
            EdgeRight, Floor, Floor, CornerTl, InnerTl, Blank, Blank, Blank, //
        ],
    )
}
