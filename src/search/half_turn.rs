use log::debug;

use super::common::{backtrack_content, factor_after, factor_from};
use crate::base::{is_palindrome, wrap1, BWFactorization, CriterionKind, Word};

/// `W = A B C Â D E` with `B`, `C`, `D`, `E` palindromes and `Â = backtrack(A)`.
pub fn detect(word: &Word) -> Option<BWFactorization> {
    let n = word.len();
    for a_start in 1..=n {
        for a_len in 1..=(n / 2) {
            let a = factor_from(word, a_start, a_len);
            for b_len in 1..=(n - 2 * a_len).saturating_sub(2) {
                let b = factor_after(word, &a, b_len);
                if !is_palindrome(&b.content) {
                    continue;
                }
                let remaining_after_b = n - 2 * a_len - b_len;
                if remaining_after_b < 2 {
                    continue;
                }
                for c_len in 1..=(remaining_after_b - 1) {
                    let c = factor_after(word, &b, c_len);
                    if !is_palindrome(&c.content) {
                        continue;
                    }
                    let a_hat = factor_after(word, &c, a_len);
                    if a_hat.content != backtrack_content(&a.content) {
                        continue;
                    }
                    let remaining = n - 2 * a_len - b_len - c_len;
                    if remaining < 2 {
                        continue;
                    }
                    for d_len in 1..remaining {
                        let e_len = remaining - d_len;
                        if e_len < 1 {
                            continue;
                        }
                        let d = factor_after(word, &a_hat, d_len);
                        if !is_palindrome(&d.content) {
                            continue;
                        }
                        let e = factor_after(word, &d, e_len);
                        if !is_palindrome(&e.content) {
                            continue;
                        }
                        if wrap1(e.finish as i64 + 1, n) != a_start {
                            continue;
                        }
                        debug!("half-turn match at start {a_start}, |A|={a_len}");
                        return Some(BWFactorization::new(
                            vec![a, b, c, a_hat, d, e],
                            CriterionKind::HalfTurn,
                        ));
                    }
                }
            }
        }
    }
    None
}
