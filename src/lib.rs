pub mod adjacency;
pub mod color;
pub mod constants;
pub mod coverage;
pub mod geo;
pub mod math_utils;
pub mod primitive;
pub mod record;
pub mod scene;
pub mod sector;
