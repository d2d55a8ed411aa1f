use log::debug;

use super::common::{backtrack_content, factor_after, factor_of_len};
use crate::base::{is_any_reflection, BWFactorization, CriterionKind, Word};

/// `W = A B f_Θ(B) Â C f_Φ(C)`.
pub fn detect(word: &Word) -> Option<BWFactorization> {
    let n = word.len();

    for a_start in 1..=n {
        for a_len in 1..=(n / 2) {
            let a = super::common::factor_from(word, a_start, a_len);
            let remaining_after_a = n - 2 * a_len;
            for b_len in 1..=(remaining_after_a / 2) {
                let b = factor_after(word, &a, b_len);
                let b2 = factor_after(word, &b, b_len);
                if !is_any_reflection(&b.content, &b2.content) {
                    continue;
                }
                let a_hat = factor_after(word, &b2, a_len);
                if a_hat.content != backtrack_content(&a.content) {
                    continue;
                }
                let remaining = n - 2 * a_len - 2 * b_len;
                if remaining % 2 != 0 {
                    continue;
                }
                let c_len = remaining / 2;
                let c_start = crate::base::wrap1(a_hat.finish as i64 + 1, n);
                let c = factor_of_len(word, c_start, c_len);
                let c2 = factor_after(word, &c, c_len);
                if !is_any_reflection(&c.content, &c2.content) {
                    continue;
                }
                debug!("type-1 reflection match at start {a_start}, |A|={a_len}, |B|={b_len}");
                return Some(BWFactorization::new(
                    vec![a, b, b2, a_hat, c, c2],
                    CriterionKind::TypeOneReflection,
                ));
            }
        }
    }

    None
}
