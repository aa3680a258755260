pub mod logging;
pub mod profile;
pub mod texture_gen;
