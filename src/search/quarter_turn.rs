use log::debug;

use super::common::{factor_after, factor_of_len};
use crate::base::{is_90_drome, is_palindrome, BWFactorization, CriterionKind, Word};

/// `W = A B C` with `A` a palindrome (or empty) and `B`, `C` 90-dromes. The
/// degenerate two-factor form (`C` empty) is tried before the full
/// three-factor form.
pub fn detect(word: &Word) -> Option<BWFactorization> {
    let n = word.len();

    for a_start in 1..=n {
        for a_len in 0..n {
            let a = factor_of_len(word, a_start, a_len);
            if !(a.is_empty() || is_palindrome(&a.content) || is_90_drome(&a.content)) {
                continue;
            }
            let b_len = n - a_len;
            if b_len == 0 {
                continue;
            }
            let b = factor_after(word, &a, b_len);
            if !is_90_drome(&b.content) {
                continue;
            }
            let c = factor_of_len(word, a_start, 0);
            debug!("quarter-turn two-factor match at start {a_start}, |A|={a_len}");
            return Some(BWFactorization::new(vec![a, b, c], CriterionKind::QuarterTurn));
        }
    }

    for a_start in 1..=n {
        for a_len in 0..n {
            let a = factor_of_len(word, a_start, a_len);
            if !(a.is_empty() || is_palindrome(&a.content)) {
                continue;
            }
            for b_len in 1..=(n - a_len).saturating_sub(1) {
                let b = factor_after(word, &a, b_len);
                if !is_90_drome(&b.content) {
                    continue;
                }
                let c_len = n - a_len - b_len;
                if c_len == 0 {
                    continue;
                }
                let c = factor_after(word, &b, c_len);
                if !is_90_drome(&c.content) {
                    continue;
                }
                debug!("quarter-turn three-factor match at start {a_start}, |A|={a_len}");
                return Some(BWFactorization::new(vec![a, b, c], CriterionKind::QuarterTurn));
            }
        }
    }

    None
}
