use std::collections::HashMap;

use crate::base::{cyclic_common_prefix_len, wrap1, Factor, Word};

/// All maximal (admissible) gapped-mirror factor pairs of `word`, as the
/// A-half of each pair (the complementary half is recoverable via
/// `backtrack`). Considers every size-1 center (a single position) and every
/// size-2 center (the gap between two consecutive positions); `|word|` must
/// be even.
pub fn admissible_factors(word: &Word) -> Vec<Factor> {
    let n = word.len();
    debug_assert!(n % 2 == 0, "admissible_factors requires an even-length word");
    let bt = word.backtrack();
    let half = (n / 2) as i64;
    let mut factors = Vec::new();

    for c in 1..=n as i64 {
        let d = wrap1(c + half, n) as i64;
        let r = cyclic_common_prefix_len(word, c, &bt, wrap1(n as i64 - d + 1, n) as i64, n);
        let l = cyclic_common_prefix_len(word, d, &bt, wrap1(n as i64 - c + 1, n) as i64, n);
        if r == l && r > 0 {
            let start = wrap1(c - r as i64 + 1, n);
            let finish = wrap1(c + r as i64 - 1, n);
            factors.push(Factor::at(word, start, finish));
        }
    }

    for c in 1..=n as i64 {
        let d = wrap1(c + half, n) as i64;
        // Right half: word[c+1+k] must complement word[d-k] (growing rightward
        // from the gap after c, matched against the gap before d).
        let r = cyclic_common_prefix_len(word, c + 1, &bt, wrap1(n as i64 - d + 1, n) as i64, n);
        // Left half: word[d+1+k] must complement word[c-k] (growing rightward
        // from the gap after d, matched against the gap before c) — this is
        // what validates the letters to the *left* of the c/c+1 gap.
        let l = cyclic_common_prefix_len(word, d + 1, &bt, wrap1(n as i64 - c + 1, n) as i64, n);
        if r == l && r > 0 {
            let start = wrap1(c - r as i64 + 1, n);
            let finish = wrap1(c + r as i64, n);
            factors.push(Factor::at(word, start, finish));
        }
    }

    factors
}

/// Admissible factors indexed by start position, each bucket sorted by
/// ascending length; every position in `[1, |word|]` is present, possibly
/// with an empty bucket.
pub fn factors_by_start(word: &Word, factors: &[Factor]) -> HashMap<usize, Vec<Factor>> {
    let mut map: HashMap<usize, Vec<Factor>> = (1..=word.len()).map(|p| (p, Vec::new())).collect();
    for f in factors {
        map.get_mut(&f.start).unwrap().push(f.clone());
    }
    for bucket in map.values_mut() {
        bucket.sort_by_key(|f| f.len());
    }
    map
}

/// Admissible factors indexed by finish position, each bucket sorted by
/// ascending length; every position in `[1, |word|]` is present.
pub fn factors_by_finish(word: &Word, factors: &[Factor]) -> HashMap<usize, Vec<Factor>> {
    let mut map: HashMap<usize, Vec<Factor>> = (1..=word.len()).map(|p| (p, Vec::new())).collect();
    for f in factors {
        map.get_mut(&f.finish).unwrap().push(f.clone());
    }
    for bucket in map.values_mut() {
        bucket.sort_by_key(|f| f.len());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::DEFAULT_MAX_BOUNDARY_LEN;

    #[test]
    fn admissible_factors_literal_check() {
        let word = Word::parse_boundary("uldr", DEFAULT_MAX_BOUNDARY_LEN).unwrap();
        let mut factors = admissible_factors(&word);
        factors.sort_by_key(|f| f.start);
        let spans: Vec<(usize, usize)> = factors.iter().map(|f| (f.start, f.finish)).collect();
        assert_eq!(spans, vec![(1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn unit_square_has_four_single_letter_factors() {
        let word = Word::parse_boundary("urdl", DEFAULT_MAX_BOUNDARY_LEN).unwrap();
        let factors = admissible_factors(&word);
        assert_eq!(factors.len(), 4);
        assert!(factors.iter().all(|f| f.len() == 1));
    }

    #[test]
    fn by_start_and_finish_cover_every_position() {
        let word = Word::parse_boundary("uldr", DEFAULT_MAX_BOUNDARY_LEN).unwrap();
        let factors = admissible_factors(&word);
        let by_start = factors_by_start(&word, &factors);
        let by_finish = factors_by_finish(&word, &factors);
        assert_eq!(by_start.len(), word.len());
        assert_eq!(by_finish.len(), word.len());
    }
}
