use crate::error::Error;
use macroquad::prelude::*;

/// The fixed palette of tile shapes the demo map is built from: path corners
/// in four orientations, inner corners in four orientations, straight edges
/// on four sides, walkable floor, and blank space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Bottom-left outer corner
    CornerBl,
    /// Bottom-right outer corner
    CornerBr,
    /// Top-left outer corner
    CornerTl,
    /// Top-right outer corner
    CornerTr,
    /// Bottom-left inner corner
    InnerBl,
    /// Bottom-right inner corner
    InnerBr,
    /// Top-left inner corner
    InnerTl,
    /// Top-right inner corner
    InnerTr,
    /// Straight edge along the bottom of a path
    EdgeBottom,
    /// Straight edge along the top of a path
    EdgeTop,
    /// Straight edge along the left of a path
    EdgeLeft,
    /// Straight edge along the right of a path
    EdgeRight,
    /// Walkable floor
    Floor,
    /// Empty space outside the path
    Blank,
}

impl TileKind {
    /// Every palette entry, in discriminant order.
    pub const ALL: [TileKind; 14] = [
        TileKind::CornerBl,
        TileKind::CornerBr,
        TileKind::CornerTl,
        TileKind::CornerTr,
        TileKind::InnerBl,
        TileKind::InnerBr,
        TileKind::InnerTl,
        TileKind::InnerTr,
        TileKind::EdgeBottom,
        TileKind::EdgeTop,
        TileKind::EdgeLeft,
        TileKind::EdgeRight,
        TileKind::Floor,
        TileKind::Blank,
    ];

    /// File name of this tile's source image inside the asset directory.
    pub fn asset_name(self) -> &'static str {
        match self {
            TileKind::CornerBl => "corner_bl.png",
            TileKind::CornerBr => "corner_br.png",
            TileKind::CornerTl => "corner_tl.png",
            TileKind::CornerTr => "corner_tr.png",
            TileKind::InnerBl => "corner_ibl.png",
            TileKind::InnerBr => "corner_ibr.png",
            TileKind::InnerTl => "corner_itl.png",
            TileKind::InnerTr => "corner_itr.png",
            TileKind::EdgeBottom => "straight_b.png",
            TileKind::EdgeTop => "straight_t.png",
            TileKind::EdgeLeft => "straight_l.png",
            TileKind::EdgeRight => "straight_r.png",
            TileKind::Floor => "floor.png",
            TileKind::Blank => "blank.png",
        }
    }

    /// Whether the player should collide with this tile. Only the floor is
    /// passable. Recorded on every palette entry; nothing consults it yet.
    pub fn blocks(self) -> bool {
        !matches!(self, TileKind::Floor)
    }
}

/// One palette entry: a decoded tile image plus its movement-blocking flag.
pub struct Tile {
    /// Decoded source image, `tile_w` x `tile_h` pixels
    pub image: Image,
    /// Movement-blocking flag copied from [`TileKind::blocks`]
    pub blocks: bool,
}

/// The immutable set of tiles the compositor draws from, one [`Tile`] per
/// [`TileKind`]. Built once at startup and never mutated.
pub struct Palette {
    tiles: Vec<Tile>,
}

impl Palette {
    /// Load every palette image from `dir`, failing fast on the first image
    /// that is missing, undecodable, or not exactly `tile_w` x `tile_h`.
    pub async fn load(dir: &str, tile_w: u32, tile_h: u32) -> Result<Self, Error> {
        let mut tiles = Vec::with_capacity(TileKind::ALL.len());
        for kind in TileKind::ALL {
            let path = format!("{}/{}", dir, kind.asset_name());
            let image = load_image(&path).await.map_err(|e| Error::AssetLoad {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            if image.width() != tile_w as usize || image.height() != tile_h as usize {
                return Err(Error::AssetLoad {
                    path,
                    reason: format!(
                        "expected {}x{} pixels, got {}x{}",
                        tile_w,
                        tile_h,
                        image.width(),
                        image.height()
                    ),
                });
            }
            tiles.push(Tile {
                image,
                blocks: kind.blocks(),
            });
        }
        Ok(Palette { tiles })
    }

    /// Build a palette from generated images, one per kind. For callers that
    /// should not touch the filesystem, tests mostly.
    pub fn from_fn(mut image_for: impl FnMut(TileKind) -> Image) -> Self {
        let tiles = TileKind::ALL
            .iter()
            .map(|&kind| Tile {
                image: image_for(kind),
                blocks: kind.blocks(),
            })
            .collect();
        Palette { tiles }
    }

    /// The palette entry for `kind`.
    pub fn tile(&self, kind: TileKind) -> &Tile {
        &self.tiles[kind as usize]
    }
}
