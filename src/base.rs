mod error;
mod factor;
mod geometry;
mod letter;
mod transform;
mod word;

pub use error::TilingError;
pub use factor::{BWFactorization, CriterionKind, Factor, Factorization, CRITERION_ORDER};
pub use geometry::{
    content_vector, mirror, path_points, path_vector, rotate, seed_polygon, translate, vertex_at,
    vertex_index, Point, Polygon, Vec2,
};
pub use letter::{Letter, ReflectionAngle, ALPHABET, REFLECTION_ANGLES};
pub use transform::Transform;
pub use word::{
    common_prefix, common_prefix_len, cyclic_common_prefix_len, extract, is_90_drome,
    is_any_reflection, is_palindrome, is_reflection, is_theta_drome, reflection_angle, wrap1,
    Word, DEFAULT_MAX_BOUNDARY_LEN,
};
