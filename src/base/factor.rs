use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use super::letter::Letter;
use super::word::{extract, Word};

/// A contiguous (possibly wrapping) piece of a cyclic word, recorded with its
/// 1-based inclusive start/finish positions. `len()` is always
/// `content.len()`, never `finish - start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub content: Vec<Letter>,
    pub start: usize,
    pub finish: usize,
}

impl Factor {
    pub fn at(word: &Word, start: usize, finish: usize) -> Factor {
        Factor {
            content: extract(word, start, finish),
            start,
            finish,
        }
    }

    /// A zero-length factor anchored just before `anchor` (used only by the
    /// quarter-turn criterion's degenerate two-factor form).
    pub fn empty_before(anchor: usize, n: usize) -> Factor {
        Factor {
            content: Vec::new(),
            start: anchor,
            finish: super::word::wrap1(anchor as i64 - 1, n),
        }
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// An ordered partition of a cyclic rotation of the boundary word.
pub type Factorization = Vec<Factor>;

/// Which of the seven boundary criteria a `Factorization` witnesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, Serialize, Deserialize)]
pub enum CriterionKind {
    Translation,
    HalfTurn,
    QuarterTurn,
    TypeOneReflection,
    TypeTwoReflection,
    TypeOneHalfTurnReflection,
    TypeTwoHalfTurnReflection,
}

/// The canonical order in which the orchestrator tries the seven detectors.
pub const CRITERION_ORDER: [CriterionKind; 7] = [
    CriterionKind::Translation,
    CriterionKind::HalfTurn,
    CriterionKind::QuarterTurn,
    CriterionKind::TypeOneReflection,
    CriterionKind::TypeTwoReflection,
    CriterionKind::TypeOneHalfTurnReflection,
    CriterionKind::TypeTwoHalfTurnReflection,
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BWFactorization {
    pub factorization: Factorization,
    pub kind: CriterionKind,
}

impl BWFactorization {
    pub fn new(factorization: Factorization, kind: CriterionKind) -> Self {
        Self { factorization, kind }
    }

    /// Next factor after index `i`, cyclically.
    pub fn next(&self, i: usize) -> &Factor {
        &self.factorization[(i + 1) % self.factorization.len()]
    }

    /// Factor before index `i`, cyclically.
    pub fn prev(&self, i: usize) -> &Factor {
        let n = self.factorization.len();
        &self.factorization[(i + n - 1) % n]
    }
}
