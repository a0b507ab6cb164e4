//! sRGB to CIELAB conversion
//!
//! Distances in CIELAB track perceived color difference far better than
//! distances in sRGB, which is what SLIC's compactness trade-off assumes.
//! The conversion uses the D65 white point.

use exactseg_core::Image;

const XN: f32 = 0.950_47;
const YN: f32 = 1.0;
const ZN: f32 = 1.088_83;

/// Convert one sRGB triple in `[0, 1]` to (L, a, b)
pub fn srgb_to_lab(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let r = srgb_to_linear(r);
    let g = srgb_to_linear(g);
    let b = srgb_to_linear(b);

    let x = 0.412_453 * r + 0.357_580 * g + 0.180_423 * b;
    let y = 0.212_671 * r + 0.715_160 * g + 0.072_169 * b;
    let z = 0.019_334 * r + 0.119_193 * g + 0.950_227 * b;

    let fx = lab_f(x / XN);
    let fy = lab_f(y / YN);
    let fz = lab_f(z / ZN);

    (116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
}

/// Convert a 3-channel sRGB image to interleaved Lab samples
///
/// Images whose largest sample exceeds 1 are treated as 0..255 data.
/// Returns `None` if the image does not have exactly three channels.
pub fn image_to_lab(image: &Image) -> Option<Vec<f32>> {
    if image.channels() != 3 {
        return None;
    }
    let scale = match image.max_value() {
        Some(max) if max > 1.0 => 1.0 / 255.0,
        _ => 1.0,
    };

    let mut out = Vec::with_capacity(image.data().len());
    for rgb in image.data().chunks_exact(3) {
        let (l, a, b) = srgb_to_lab(rgb[0] * scale, rgb[1] * scale, rgb[2] * scale);
        out.extend_from_slice(&[l, a, b]);
    }
    Some(out)
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[inline]
fn lab_f(t: f32) -> f32 {
    if t > 0.008_856 {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}
