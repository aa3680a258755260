use particle_gen::texture_gen::{
    generate_particle_texture, render_particle, Args, ParticleGeometry, DEFAULT_SIZE,
};
use tempfile::TempDir;

/// Beyond the disc plus three blur deviations nothing should be left.
#[test]
fn test_alpha_vanishes_outside_blur_margin() {
    for size in [32, 64, DEFAULT_SIZE, 200] {
        let geometry = ParticleGeometry::new(size).unwrap();
        let texture = render_particle(size).unwrap();
        let margin = geometry.radius as f64 + 3.0 * geometry.blur_sigma() as f64 + 1.0;

        for (x, y, pixel) in texture.enumerate_pixels() {
            if geometry.distance_from_center(x, y) > margin {
                assert_eq!(pixel[3], 0, "size {size}: pixel ({x}, {y}) should be clear");
            }
        }
    }
}

#[test]
fn test_core_is_opaque_for_odd_sizes() {
    for size in [2, 3, 7, 33, 99, 129] {
        let geometry = ParticleGeometry::new(size).unwrap();
        let texture = render_particle(size).unwrap();
        assert_eq!(texture.dimensions(), (size, size));

        for (x, y, pixel) in texture.enumerate_pixels() {
            if geometry.distance_from_center(x, y) <= geometry.core_radius() {
                assert_eq!(pixel[3], 255, "size {size}: pixel ({x}, {y}) should be opaque");
            }
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let args = Args {
        size: 96,
        output: temp_dir.path().join("particle").join("spark.png"),
    };

    generate_particle_texture(&args).unwrap();
    let first = std::fs::read(&args.output).unwrap();

    generate_particle_texture(&args).unwrap();
    let second = std::fs::read(&args.output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_default_args() {
    let args = Args::default();
    assert_eq!(args.size, 128);
    assert_eq!(
        args.output,
        std::path::PathBuf::from("res/textures/particle/default_particle.png")
    );
}
