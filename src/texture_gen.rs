//! Procedural particle sprite generation
//!
//! Renders a square RGBA sprite holding a single centred white disc. The disc
//! edge is feathered with a Gaussian blur and the inner half of the disc is
//! forced back to full opacity so the sprite keeps a solid core.

use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    imageops, ColorType, ImageEncoder, Rgba, RgbaImage,
};
use imageproc::drawing::draw_filled_circle_mut;
use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Edge length of the generated sprite when none is given.
pub const DEFAULT_SIZE: u32 = 128;

/// Where the sprite is written when no output path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "res/textures/particle/default_particle.png";

/// Largest accepted edge length. The rasters plus the blur's float buffer come
/// to about 1.5 GiB at this size.
pub const MAX_SIZE: u32 = 8192;

const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
const OPAQUE_WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Inputs of one generator run; mirrors the CLI flags of the `particle-gen` binary.
#[derive(Debug, Clone)]
pub struct Args {
    pub size: u32,
    pub output: PathBuf,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Geometry derived from the sprite size
///
/// `center` and `radius` use integer division; the blur sigma and the core
/// radius are derived from `radius` with floating-point division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParticleGeometry {
    pub size: u32,
    pub center: u32,
    pub radius: u32,
}

impl ParticleGeometry {
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            anyhow::bail!("Invalid size: texture size must be a positive integer, got 0");
        }

        if size > MAX_SIZE {
            anyhow::bail!(
                "Invalid size: texture size must not exceed {}, got {}",
                MAX_SIZE,
                size
            );
        }

        Ok(Self {
            size,
            center: size / 2,
            radius: size / 3,
        })
    }

    /// Standard deviation of the feathering blur
    pub fn blur_sigma(&self) -> f32 {
        self.radius as f32 / 4.0
    }

    /// Radius of the disc that is forced fully opaque after blurring
    pub fn core_radius(&self) -> f64 {
        self.radius as f64 / 2.0
    }

    pub fn distance_from_center(&self, x: u32, y: u32) -> f64 {
        let dx = x as f64 - self.center as f64;
        let dy = y as f64 - self.center as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Render the sprite, write it as PNG and report where it went.
pub fn generate_particle_texture(args: &Args) -> Result<()> {
    let texture = render_particle(args.size)?;
    save_png(&texture, &args.output)?;

    tracing::info!(
        path = %args.output.display(),
        size = args.size,
        "particle texture written"
    );
    println!(
        "Created enhanced particle texture at {}",
        args.output.display()
    );
    Ok(())
}

/// Build the sprite in memory: transparent canvas, white disc, blur, opaque core.
pub fn render_particle(size: u32) -> Result<RgbaImage> {
    let geometry = ParticleGeometry::new(size)?;
    tracing::debug!(
        size = geometry.size,
        center = geometry.center,
        radius = geometry.radius,
        sigma = geometry.blur_sigma(),
        core_radius = geometry.core_radius(),
        "rendering particle"
    );

    let mut texture = RgbaImage::from_pixel(size, size, TRANSPARENT);
    draw_disc(&mut texture, &geometry);

    let mut texture = feather_edges(&texture, geometry.blur_sigma());
    apply_opaque_core(&mut texture, &geometry);

    Ok(texture)
}

fn draw_disc(texture: &mut RgbaImage, geometry: &ParticleGeometry) {
    // Bounded by MAX_SIZE, so these fit in i32
    let center = geometry.center as i32;
    let radius = geometry.radius as i32;

    draw_filled_circle_mut(texture, (center, center), radius, OPAQUE_WHITE);
    tracing::debug!(center, radius, "drew disc");
}

/// Gaussian blur over all four channels. A zero sigma leaves the image as is.
fn feather_edges(texture: &RgbaImage, sigma: f32) -> RgbaImage {
    if sigma <= 0.0 {
        tracing::debug!("radius too small to feather, skipping blur");
        return texture.clone();
    }

    tracing::debug!(sigma, "feathering edges");
    imageops::blur(texture, sigma)
}

/// Force alpha to 255 within the core radius, keeping the blurred colour.
fn apply_opaque_core(texture: &mut RgbaImage, geometry: &ParticleGeometry) {
    let core_radius = geometry.core_radius();
    let mut forced = 0u64;

    for (x, y, pixel) in texture.enumerate_pixels_mut() {
        if geometry.distance_from_center(x, y) <= core_radius {
            pixel[3] = 255;
            forced += 1;
        }
    }

    tracing::debug!(core_radius, pixels = forced, "applied opaque core");
}

/// Write the texture as an RGBA PNG, creating parent directories as needed.
/// An existing file at `path` is overwritten.
pub fn save_png(texture: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent)
            .with_context(|| format!("Can't create output directory {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create PNG file {}", path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(texture.as_raw(), &mut out_file, texture.width(), texture.height())
        .with_context(|| format!("Failed to write PNG {}", path.display()))?;
    out_file
        .flush()
        .with_context(|| format!("Failed to flush PNG {}", path.display()))?;

    Ok(())
}

// Encode image data as PNG with compression
fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, ColorType::Rgba8)?;
    Ok(())
}
