use anyhow::Result;
use clap::Parser;
use particle_gen::{logging, texture_gen};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "particle-gen",
    version,
    about = "Generate a soft-edged circular particle texture"
)]
struct Args {
    /// Edge length of the square texture in pixels.
    #[clap(short, long, value_name = "PIXELS", default_value_t = texture_gen::DEFAULT_SIZE)]
    size: u32,

    /// Output PNG path. Missing parent directories are created.
    #[clap(short, long, value_name = "FILE", default_value = texture_gen::DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

impl From<Args> for texture_gen::Args {
    fn from(args: Args) -> Self {
        Self {
            size: args.size,
            output: args.output,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_logging()?;

    texture_gen::generate_particle_texture(&args.into())
}
