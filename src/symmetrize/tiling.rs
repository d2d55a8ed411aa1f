use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::base::{Point, Polygon, TilingError, Transform};

/// Bounding window for the BFS tiling expansion: a polygon is in bounds iff
/// at least one vertex lies in `[-half_x, half_x] x [-half_y, half_y]`.
#[derive(Debug, Clone, Copy)]
pub struct TilingWindow {
    pub half_x: i64,
    pub half_y: i64,
}

impl TilingWindow {
    pub fn new(width: i64, height: i64) -> Self {
        Self {
            half_x: width / 2,
            half_y: height / 2,
        }
    }

    fn contains(&self, p: &Point) -> bool {
        p.x.abs() <= self.half_x && p.y.abs() <= self.half_y
    }

    fn polygon_in_bounds(&self, poly: &Polygon) -> bool {
        poly.iter().any(|p| self.contains(p))
    }
}

/// Diagnostics surfaced by a bounded generator run: how many polygons were
/// visited and whether the run stopped because it hit the depth/size budget
/// rather than exhausting the BFS frontier naturally.
#[derive(Debug, Clone, Copy, Default)]
pub struct TilingLimits {
    pub max_visited: Option<usize>,
}

/// Run the BFS tiling expansion from `seed` under `transforms`, clipped to
/// `window`, deduplicating by exact vertex-sequence equality.
pub fn generate_tiling(
    seed: &Polygon,
    transforms: &[Transform],
    window: TilingWindow,
    limits: TilingLimits,
) -> Result<Vec<Polygon>, TilingError> {
    let mut visited_set: HashSet<Vec<(i64, i64)>> = HashSet::new();
    let mut visited: Vec<Polygon> = Vec::new();
    let mut queue: VecDeque<Polygon> = VecDeque::new();
    queue.push_back(seed.clone());

    while let Some(poly) = queue.pop_front() {
        let key = canonical_key(&poly);
        if visited_set.contains(&key) {
            continue;
        }
        visited_set.insert(key);
        visited.push(poly.clone());

        if let Some(max) = limits.max_visited {
            if visited.len() >= max {
                debug!("tiling generator hit its visited-polygon budget ({max})");
                return Err(TilingError::GeneratorBudgetExceeded);
            }
        }

        for t in transforms {
            let next = t.apply(&poly);
            let next_key = canonical_key(&next);
            if window.polygon_in_bounds(&next) && !visited_set.contains(&next_key) {
                queue.push_back(next);
            }
        }
    }

    debug!("tiling generator produced {} polygons", visited.len());
    Ok(visited)
}

/// Depth-bounded variant for diagnostics: expand at most `max_depth` BFS
/// layers from the seed, ignoring the window test entirely.
pub fn generate_tiling_bounded_depth(
    seed: &Polygon,
    transforms: &[Transform],
    max_depth: usize,
) -> Vec<Polygon> {
    let mut visited_set: HashSet<Vec<(i64, i64)>> = HashSet::new();
    let mut visited: Vec<Polygon> = Vec::new();
    let mut queue: VecDeque<(Polygon, usize)> = VecDeque::new();
    queue.push_back((seed.clone(), 0));

    while let Some((poly, depth)) = queue.pop_front() {
        let key = canonical_key(&poly);
        if visited_set.contains(&key) {
            continue;
        }
        visited_set.insert(key);
        visited.push(poly.clone());

        if depth >= max_depth {
            continue;
        }
        for t in transforms {
            let next = t.apply(&poly);
            let next_key = canonical_key(&next);
            if !visited_set.contains(&next_key) {
                queue.push_back((next, depth + 1));
            }
        }
    }

    visited
}

fn canonical_key(poly: &Polygon) -> Vec<(i64, i64)> {
    poly.iter().map(|p| (p.x, p.y)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{seed_polygon, Word, DEFAULT_MAX_BOUNDARY_LEN};

    #[test]
    fn unit_square_tiles_by_translation() {
        let word = Word::parse_boundary("urdl", DEFAULT_MAX_BOUNDARY_LEN).unwrap();
        let seed = seed_polygon(&word);
        let transforms = vec![
            Transform::translate(Point::new(1, 0)),
            Transform::translate(Point::new(-1, 0)),
            Transform::translate(Point::new(0, 1)),
            Transform::translate(Point::new(0, -1)),
        ];
        let window = TilingWindow::new(4, 4);
        let polys = generate_tiling(&seed, &transforms, window, TilingLimits::default()).unwrap();
        assert!(polys.len() > 1);
        assert_eq!(polys[0], seed);
    }

    #[test]
    fn budget_exceeded_reports_error() {
        let word = Word::parse_boundary("urdl", DEFAULT_MAX_BOUNDARY_LEN).unwrap();
        let seed = seed_polygon(&word);
        let transforms = vec![
            Transform::translate(Point::new(1, 0)),
            Transform::translate(Point::new(0, 1)),
        ];
        let window = TilingWindow::new(10_000, 10_000);
        let limits = TilingLimits { max_visited: Some(3) };
        let err = generate_tiling(&seed, &transforms, window, limits).unwrap_err();
        assert_eq!(err, TilingError::GeneratorBudgetExceeded);
    }
}
