use serde::{Deserialize, Serialize};

use super::geometry::{mirror, rotate, translate, Polygon, Vec2};
use super::letter::ReflectionAngle;

/// A rigid plane isometry, represented as a tagged value rather than a
/// closure, so it can be serialized and tested in isolation. Matches the
/// canonical JSON shape used for serialized tiling reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Transform {
    Translate {
        vec: (i64, i64),
    },
    Rotate {
        /// ±90 or 180.
        angle: i32,
        pivot_vertex_index: usize,
        then_translate: (i64, i64),
    },
    Mirror {
        /// One of −45, 0, 45, 90.
        angle: i32,
        pivot_vertex_index: usize,
        then_translate: (i64, i64),
    },
}

impl Transform {
    pub fn translate(v: Vec2) -> Transform {
        Transform::Translate { vec: (v.x, v.y) }
    }

    pub fn rotate(angle: i32, pivot_vertex_index: usize, then_translate: Vec2) -> Transform {
        Transform::Rotate {
            angle,
            pivot_vertex_index,
            then_translate: (then_translate.x, then_translate.y),
        }
    }

    pub fn mirror(angle: ReflectionAngle, pivot_vertex_index: usize, then_translate: Vec2) -> Transform {
        Transform::Mirror {
            angle: angle.degrees(),
            pivot_vertex_index,
            then_translate: (then_translate.x, then_translate.y),
        }
    }

    /// Apply this transform to a polygon.
    pub fn apply(&self, poly: &Polygon) -> Polygon {
        match self {
            Transform::Translate { vec } => translate(poly, Vec2::new(vec.0, vec.1)),
            Transform::Rotate {
                angle,
                pivot_vertex_index,
                then_translate,
            } => {
                let rotated = rotate(poly, *angle, *pivot_vertex_index);
                translate(&rotated, Vec2::new(then_translate.0, then_translate.1))
            }
            Transform::Mirror {
                angle,
                pivot_vertex_index,
                then_translate,
            } => {
                let theta = ReflectionAngle::from_degrees(*angle)
                    .unwrap_or_else(|| panic!("invalid mirror angle {angle}"));
                let mirrored = mirror(poly, theta, *pivot_vertex_index);
                translate(&mirrored, Vec2::new(then_translate.0, then_translate.1))
            }
        }
    }
}
