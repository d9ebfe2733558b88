use crate::error::Error;
use crate::map::TileMap;
use crate::tile::Palette;
use macroquad::prelude::*;

/// Composite the whole map into one freshly allocated image at a uniform
/// scale factor.
///
/// The destination is `ceil(width * tile_w * scale)` x
/// `ceil(height * tile_h * scale)` pixels, cleared to transparent, with cell
/// `(col, row)` blitted at `(col * tile_w * scale, row * tile_h * scale)`.
/// The output is a pure function of the inputs: same map, palette, and scale
/// always produce pixel-identical images.
///
/// Returns [`Error::Allocation`] when the requested size collapses to zero
/// (`scale <= 0`) or exceeds the image size limit; the caller is expected to
/// keep its previous composite in that case.
pub fn compose(
    map: &TileMap,
    palette: &Palette,
    tile_w: u32,
    tile_h: u32,
    scale: f32,
) -> Result<Image, Error> {
    let out_w = (map.width() as f32 * tile_w as f32 * scale).ceil();
    let out_h = (map.height() as f32 * tile_h as f32 * scale).ceil();
    if out_w < 1.0 || out_h < 1.0 || out_w > u16::MAX as f32 || out_h > u16::MAX as f32 {
        return Err(Error::Allocation {
            width: out_w.max(0.0) as u32,
            height: out_h.max(0.0) as u32,
        });
    }

    info!(
        "compositing {}x{} tiles at scale {}",
        map.width(),
        map.height(),
        scale
    );
    let mut dest = Image::gen_image_color(out_w as u16, out_h as u16, Color::from_rgba(0, 0, 0, 0));

    let scaled_w = tile_w as f32 * scale;
    let scaled_h = tile_h as f32 * scale;
    for (i, kind) in map.tiles().iter().enumerate() {
        let col = i % map.width();
        let row = i / map.width();
        blit_scaled(
            &mut dest,
            &palette.tile(*kind).image,
            col as f32 * scaled_w,
            row as f32 * scaled_h,
            scaled_w,
            scaled_h,
        );
    }
    info!("composited map: {}x{} px", dest.width(), dest.height());

    Ok(dest)
}

/// Nearest-neighbor blit of the whole source image into the destination
/// rectangle `(dx, dy)` .. `(dx + dw, dy + dh)`. Pixel rows and columns are
/// assigned by rounding the rectangle edges, so the rectangles `compose`
/// produces for adjacent tiles partition the destination with no seams or
/// double-painted pixels.
fn blit_scaled(dest: &mut Image, src: &Image, dx: f32, dy: f32, dw: f32, dh: f32) {
    let x0 = dx.round().max(0.0) as u32;
    let y0 = dy.round().max(0.0) as u32;
    let x1 = ((dx + dw).round().max(0.0) as u32).min(dest.width() as u32);
    let y1 = ((dy + dh).round().max(0.0) as u32).min(dest.height() as u32);
    let src_w = src.width() as f32;
    let src_h = src.height() as f32;

    for py in y0..y1 {
        let sy = (((py as f32 - dy) / dh) * src_h).clamp(0.0, src_h - 1.0) as u32;
        for px in x0..x1 {
            let sx = (((px as f32 - dx) / dw) * src_w).clamp(0.0, src_w - 1.0) as u32;
            dest.set_pixel(px, py, src.get_pixel(sx, sy));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::TileMap;
    use crate::tile::TileKind;

    #[test]
    fn adjacent_tiles_partition_the_destination_at_fractional_scale() {
        let red = Color::from_rgba(255, 0, 0, 255);
        let blue = Color::from_rgba(0, 0, 255, 255);
        let palette = Palette::from_fn(|kind| {
            let color = if kind == TileKind::Floor { red } else { blue };
            Image::gen_image_color(16, 16, color)
        });
        let map = TileMap::new(2, 1, vec![TileKind::Floor, TileKind::Blank]).unwrap();

        // 2 * 16 * 1.3 = 41.6, ceiling 42; the shared edge rounds to x = 21
        let out = compose(&map, &palette, 16, 16, 1.3).unwrap();
        assert_eq!(out.width(), 42);
        assert_eq!(out.height(), 21);
        for px in 0..out.width() as u32 {
            let expected = if px < 21 { red } else { blue };
            assert_eq!(out.get_pixel(px, 10), expected, "column {}", px);
        }
    }
}
