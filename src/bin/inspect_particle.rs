use anyhow::{Context, Result};
use image::io::Reader as ImageReader;
use particle_gen::{profile::measure_profile, texture_gen::DEFAULT_OUTPUT_PATH};

fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    let img = ImageReader::open(&path)
        .with_context(|| format!("Failed to open image {path}"))?
        .decode()
        .with_context(|| format!("Failed to decode image {path}"))?;

    let rgba_img = img.to_rgba8();
    let profile = measure_profile(&rgba_img);

    println!("Checking particle texture in: {}", path);
    println!("Image dimensions: {}x{}", img.width(), img.height());
    println!("Color type: {:?}", img.color());

    if img.width() != img.height() {
        println!("⚠ Texture is not square");
    }

    let pixel = rgba_img.get_pixel(profile.center, profile.center);
    println!(
        "\nCenter pixel (x={}, y={}):",
        profile.center, profile.center
    );
    println!("  RGBA: [{}, {}, {}, {}]", pixel[0], pixel[1], pixel[2], pixel[3]);

    println!("\nRadial profile along the centre row:");
    match profile.opaque_radius {
        Some(r) => println!("  Opaque core radius: {} px", r),
        None => println!("  Opaque core radius: none"),
    }
    match profile.visible_radius {
        Some(r) => println!("  Visible falloff radius: {} px", r),
        None => println!("  Visible falloff radius: none"),
    }

    match (profile.opaque_radius, profile.visible_radius) {
        (Some(opaque), Some(visible)) if visible > opaque => {
            println!("✓ Opaque core with feathered edge detected");
        }
        _ => println!("⚠ Texture does not look like a feathered particle"),
    }

    Ok(())
}
