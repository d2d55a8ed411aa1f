mod isometry;

pub use isometry::build_transforms;
