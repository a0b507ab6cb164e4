//! Binary morphological operations
//!
//! Dilation of [`Mask`] rasters. Pixels pushed outside the raster by a
//! structuring element offset are dropped; there is no implicit border.

use crate::{MorphResult, Sel};
use exactseg_core::Mask;

/// Dilate a binary mask
///
/// Dilation expands foreground regions: every set source pixel `p` sets
/// `p + h` in the output for each hit offset `h` of the SEL (relative to
/// its origin). With a full 3x3 brick this adds exactly one 8-connected
/// ring around each region.
pub fn dilate(mask: &Mask, sel: &Sel) -> MorphResult<Mask> {
    let w = mask.width() as i32;
    let h = mask.height() as i32;
    let mut out = Mask::new(mask.width(), mask.height())?;

    let hit_offsets: Vec<_> = sel.hit_offsets().collect();

    for (x, y) in mask.iter_set() {
        for &(dx, dy) in &hit_offsets {
            let tx = x as i32 + dx;
            let ty = y as i32 + dy;
            if tx < 0 || ty < 0 || tx >= w || ty >= h {
                continue;
            }
            out.set(tx as u32, ty as u32, true)?;
        }
    }

    Ok(out)
}

/// Dilate with a `width x height` brick centered on its origin
pub fn dilate_brick(mask: &Mask, width: u32, height: u32) -> MorphResult<Mask> {
    let sel = Sel::create_brick(width, height)?;
    dilate(mask, &sel)
}
