pub mod base;

mod identify;
mod math;
mod search;
mod symmetrize;

use log::debug;

use crate::base::{seed_polygon, BWFactorization, Polygon, TilingError, Transform, Word, DEFAULT_MAX_BOUNDARY_LEN};
use crate::identify::build_transforms;
use crate::search::anyfactorization;
use crate::symmetrize::generate_tiling;

pub use crate::symmetrize::{generate_tiling_bounded_depth, TilingLimits, TilingWindow};

/// Try all seven boundary criteria against `word` and return the first
/// successful factorization, or `None` if the boundary does not admit an
/// isohedral tiling by any of them.
pub fn factorize(word: &Word) -> Option<BWFactorization> {
    anyfactorization(word)
}

/// Parse a raw `{r,u,l,d}` string and factorize it in one step.
pub fn factorize_boundary(s: &str) -> Result<Option<BWFactorization>, TilingError> {
    let word = Word::parse_boundary(s, DEFAULT_MAX_BOUNDARY_LEN)?;
    Ok(factorize(&word))
}

/// Full pipeline result: a boundary word, its factorization, the neighbor
/// transforms the factorization witnesses, and the tiling those transforms
/// generate from the seed polygon within a window.
#[derive(Debug)]
pub struct TilingReport {
    pub word: Word,
    pub factorization: BWFactorization,
    pub transforms: Vec<Transform>,
    pub tiling: Vec<Polygon>,
}

impl TilingReport {
    /// Run the full pipeline: parse, factorize, build transforms, tile.
    /// Returns `Ok(None)` when the boundary is well-formed but admits no
    /// isohedral tiling under any of the seven criteria.
    pub fn new(s: &str, window: TilingWindow) -> Result<Option<Self>, TilingError> {
        Self::with_limits(s, window, TilingLimits::default())
    }

    pub fn with_limits(
        s: &str,
        window: TilingWindow,
        limits: TilingLimits,
    ) -> Result<Option<Self>, TilingError> {
        let word = Word::parse_boundary(s, DEFAULT_MAX_BOUNDARY_LEN)?;
        let Some(factorization) = factorize(&word) else {
            debug!("no criterion matched; no tiling");
            return Ok(None);
        };
        let transforms = build_transforms(&word, &factorization)?;
        let seed = seed_polygon(&word);
        let tiling = generate_tiling(&seed, &transforms, window, limits)?;
        Ok(Some(Self {
            word,
            factorization,
            transforms,
            tiling,
        }))
    }
}
