use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use super::letter::ReflectionAngle;
use super::word::Word;

/// A lattice point or vector. Every transform in this domain (lattice
/// translation, 90°-multiple rotation, 45°-multiple-axis reflection) maps
/// integer points to integer points exactly, so no floating point appears
/// anywhere in the geometry layer.
pub type Point = Vector2<i64>;
pub type Vec2 = Vector2<i64>;

/// Ordered sequence of lattice points. Equality is strict sequence equality;
/// the tiling generator's dedup depends on this (no canonicalization).
pub type Polygon = Vec<Point>;

/// `path_points(W)`: the `|W|+1` cumulative points visited walking `W` from
/// the origin, including the starting point.
pub fn path_points(word: &Word) -> Vec<Point> {
    let mut pts = Vec::with_capacity(word.len() + 1);
    let mut cur = Point::new(0, 0);
    pts.push(cur);
    for l in word.letters() {
        cur += l.vector();
        pts.push(cur);
    }
    pts
}

/// `path_vector(W)`: end point minus start point.
pub fn path_vector(word: &Word) -> Vec2 {
    word.letters()
        .iter()
        .fold(Vec2::new(0, 0), |acc, l| acc + l.vector())
}

/// The seed polygon for a closed boundary word: `n` vertices, where vertex
/// `i` (0-based) is the point reached just before letter `i+1` (1-based
/// position) is walked.
pub fn seed_polygon(word: &Word) -> Polygon {
    let mut pts = path_points(word);
    pts.pop(); // drop the duplicate closing point
    pts
}

/// Map a 1-based cyclic word position to its 0-based seed-polygon vertex
/// index.
pub fn vertex_index(pos1based: usize) -> usize {
    pos1based - 1
}

/// Sum of unit vectors for a bare letter slice (a factor's content, detached
/// from any particular `Word`).
pub fn content_vector(content: &[super::letter::Letter]) -> Vec2 {
    content.iter().fold(Vec2::new(0, 0), |acc, l| acc + l.vector())
}

/// The seed-polygon vertex at cyclic word position `p` (1-based, wraps).
pub fn vertex_at(poly: &Polygon, p: i64) -> Point {
    let n = poly.len();
    poly[vertex_index(super::word::wrap1(p, n))]
}

pub fn translate(poly: &Polygon, v: Vec2) -> Polygon {
    poly.iter().map(|p| p + v).collect()
}

/// Rotate `poly` about its `pivot_index`-th vertex by `theta` degrees, a
/// multiple of 90°.
pub fn rotate(poly: &Polygon, theta: i32, pivot_index: usize) -> Polygon {
    let pivot = poly[pivot_index];
    poly.iter()
        .map(|p| {
            let d = p - pivot;
            let r = match theta.rem_euclid(360) {
                0 => d,
                90 => Vec2::new(d.y, -d.x),
                180 => Vec2::new(-d.x, -d.y),
                270 => Vec2::new(-d.y, d.x),
                other => panic!("invalid rotation angle {other}"),
            };
            pivot + r
        })
        .collect()
}

/// Reflect `poly` about its `pivot_index`-th vertex across the line at angle
/// `theta` (one of −45°, 0°, 45°, 90°). The 45°/−45° formulas are negated
/// relative to the usual convention to compensate for the inverted y-axis.
pub fn mirror(poly: &Polygon, theta: ReflectionAngle, pivot_index: usize) -> Polygon {
    let pivot = poly[pivot_index];
    poly.iter()
        .map(|p| {
            let d = p - pivot;
            let r = match theta {
                ReflectionAngle::NegFortyFive => Vec2::new(-d.y, -d.x),
                ReflectionAngle::Zero => Vec2::new(d.x, -d.y),
                ReflectionAngle::FortyFive => Vec2::new(d.y, d.x),
                ReflectionAngle::Ninety => Vec2::new(-d.x, d.y),
            };
            pivot + r
        })
        .collect()
}

#[cfg(test)]
mod literal_checks {
    use super::*;
    use crate::base::letter::Letter;
    use crate::base::word::Word;

    #[test]
    fn path_points_matches_spec_example() {
        let word = Word::from_letters(vec![Letter::U, Letter::R, Letter::R, Letter::D, Letter::L]);
        let pts = path_points(&word);
        assert_eq!(
            pts,
            vec![
                Point::new(0, 0),
                Point::new(0, -1),
                Point::new(1, -1),
                Point::new(2, -1),
                Point::new(2, 0),
                Point::new(1, 0),
            ]
        );
    }

    #[test]
    fn path_vector_matches_spec_example() {
        let word = Word::from_letters(vec![
            Letter::U,
            Letter::R,
            Letter::U,
            Letter::R,
            Letter::D,
            Letter::D,
            Letter::D,
            Letter::L,
        ]);
        assert_eq!(path_vector(&word), Vec2::new(1, 1));
    }
}
