mod tiling;

pub use tiling::{generate_tiling, generate_tiling_bounded_depth, TilingLimits, TilingWindow};
