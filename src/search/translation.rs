use log::debug;

use super::common::backtrack_content;
use crate::base::{wrap1, BWFactorization, CriterionKind, Factor, Word};
use crate::math::{admissible_factors, factors_by_finish, factors_by_start};

/// `W = A B C Â B̂ Ĉ` (or the degenerate four-factor `A B Â B̂` when `C` is
/// empty): each of the named pairs is an admissible gapped mirror.
pub fn detect(word: &Word) -> Option<BWFactorization> {
    let n = word.len();
    if n % 2 != 0 {
        return None;
    }
    let half = n / 2;
    let factors = admissible_factors(word);
    let by_start = factors_by_start(word, &factors);
    let by_finish = factors_by_finish(word, &factors);

    if let Some(bw) = search_from_start(word, &by_start, half) {
        return Some(bw);
    }
    search_from_finish(word, &by_finish, &by_start, half)
}

fn search_from_start(
    word: &Word,
    by_start: &std::collections::HashMap<usize, Vec<Factor>>,
    half: usize,
) -> Option<BWFactorization> {
    let n = word.len();
    for a_start in 1..=n {
        for a in &by_start[&a_start] {
            if a.len() > half {
                continue;
            }
            let b_start = wrap1(a.finish as i64 + 1, n);
            for b in &by_start[&b_start] {
                if a.len() + b.len() > half {
                    break;
                }
                if a.len() + b.len() == half {
                    if let Some(bw) = expand(word, &[a.clone(), b.clone()], half) {
                        debug!("translation match at start {a_start} (two-factor half)");
                        return Some(bw);
                    }
                    continue;
                }
                let c_len = half - a.len() - b.len();
                let c_start = wrap1(b.finish as i64 + 1, n);
                if let Some(c) = by_start[&c_start].iter().find(|f| f.len() == c_len) {
                    if let Some(bw) = expand(word, &[a.clone(), b.clone(), c.clone()], half) {
                        debug!("translation match at start {a_start} (three-factor half)");
                        return Some(bw);
                    }
                }
            }
        }
    }
    None
}

fn search_from_finish(
    word: &Word,
    by_finish: &std::collections::HashMap<usize, Vec<Factor>>,
    by_start: &std::collections::HashMap<usize, Vec<Factor>>,
    half: usize,
) -> Option<BWFactorization> {
    let n = word.len();
    for c_finish in 1..=n {
        for c in &by_finish[&c_finish] {
            if c.len() > half {
                continue;
            }
            let b_finish = wrap1(c.start as i64 - 1, n);
            for b in &by_finish[&b_finish] {
                if b.len() + c.len() > half {
                    break;
                }
                if b.len() + c.len() == half {
                    continue; // two-factor half is already covered by the forward pass
                }
                let a_len = half - b.len() - c.len();
                let a_finish = wrap1(b.start as i64 - 1, n);
                let a_start = wrap1(a_finish as i64 - a_len as i64 + 1, n);
                if let Some(a) = by_start[&a_start].iter().find(|f| f.len() == a_len && f.finish == a_finish) {
                    if let Some(bw) = expand(word, &[a.clone(), b.clone(), c.clone()], half) {
                        debug!("translation match at finish {c_finish} (back-search)");
                        return Some(bw);
                    }
                }
            }
        }
    }
    None
}

/// Expand a half-cycle of factors (`A B [C]`) into the full factorization by
/// appending each factor's antipodal backtrack image.
fn expand(word: &Word, half_factors: &[Factor], half: usize) -> Option<BWFactorization> {
    let n = word.len();
    let mut full = half_factors.to_vec();
    for f in half_factors {
        let content = backtrack_content(&f.content);
        let start = wrap1(f.start as i64 + half as i64, n);
        let finish = wrap1(f.finish as i64 + half as i64, n);
        full.push(Factor { content, start, finish });
    }
    let total: usize = full.iter().map(|f| f.len()).sum();
    if total != n {
        return None;
    }
    Some(BWFactorization::new(full, CriterionKind::Translation))
}
