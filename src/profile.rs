//! Read-back measurements of a rendered particle sprite

use image::RgbaImage;

/// Alpha falloff measured along the centre row, going right from the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RadialProfile {
    pub center: u32,
    /// Largest offset `d` such that every pixel from the centre to `center + d` is fully opaque.
    /// `None` when the centre pixel itself is not opaque.
    pub opaque_radius: Option<u32>,
    /// Largest offset whose pixel has any coverage at all.
    pub visible_radius: Option<u32>,
}

pub fn measure_profile(texture: &RgbaImage) -> RadialProfile {
    let center = texture.width().min(texture.height()) / 2;
    let mut opaque_radius = None;
    let mut visible_radius = None;
    let mut opaque_run = true;

    if texture.width() == 0 || texture.height() == 0 {
        return RadialProfile {
            center,
            opaque_radius,
            visible_radius,
        };
    }

    for x in center..texture.width() {
        let offset = x - center;
        let alpha = texture.get_pixel(x, center)[3];

        if opaque_run && alpha == 255 {
            opaque_radius = Some(offset);
        } else {
            opaque_run = false;
        }

        if alpha > 0 {
            visible_radius = Some(offset);
        }
    }

    RadialProfile {
        center,
        opaque_radius,
        visible_radius,
    }
}
