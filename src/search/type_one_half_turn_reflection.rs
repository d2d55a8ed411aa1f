use log::debug;

use super::common::{backtrack_content, factor_after, factor_from};
use crate::base::{is_any_reflection, is_palindrome, wrap1, BWFactorization, CriterionKind, Word};

/// `W = A B C Â D f_Θ(D)`, with `B`, `C` palindromes and `Â = backtrack(A)`.
pub fn detect(word: &Word) -> Option<BWFactorization> {
    let n = word.len();

    for a_start in 1..=n {
        for a_len in 1..=(n / 2) {
            let a = factor_from(word, a_start, a_len);
            let budget = n - 2 * a_len;
            for b_len in 0..=budget {
                let b = factor_after(word, &a, b_len);
                if !is_palindrome(&b.content) {
                    continue;
                }
                let remaining_after_b = budget - b_len;
                for c_len in 0..=remaining_after_b {
                    let c = factor_after(word, &b, c_len);
                    if !is_palindrome(&c.content) {
                        continue;
                    }
                    let a_hat = factor_after(word, &c, a_len);
                    if a_hat.content != backtrack_content(&a.content) {
                        continue;
                    }
                    let remaining = remaining_after_b - c_len;
                    if remaining % 2 != 0 || remaining == 0 {
                        continue;
                    }
                    let d_len = remaining / 2;
                    let d = factor_after(word, &a_hat, d_len);
                    let d2 = factor_after(word, &d, d_len);
                    if !is_any_reflection(&d.content, &d2.content) {
                        continue;
                    }
                    if wrap1(d2.finish as i64 + 1, n) != a_start {
                        continue;
                    }
                    debug!("type-1 half-turn reflection match at start {a_start}, |A|={a_len}");
                    return Some(BWFactorization::new(
                        vec![a, b, c, a_hat, d, d2],
                        CriterionKind::TypeOneHalfTurnReflection,
                    ));
                }
            }
        }
    }

    None
}
