use log::debug;

use super::common::{backtrack_content, factor_after, factor_from};
use crate::base::{is_any_reflection, reflection_angle, wrap1, BWFactorization, CriterionKind, Word};

/// `W = A B C Â f_Θ(C) f_Θ(B)`, with `Â` antipodal to `A` and both mirrored
/// pairs sharing the same reflection angle `Θ`.
pub fn detect(word: &Word) -> Option<BWFactorization> {
    let n = word.len();
    if n % 2 != 0 {
        return None;
    }
    let half = n / 2;

    for a_start in 1..=n {
        for a_len in 1..=half {
            let a = factor_from(word, a_start, a_len);
            let remaining_half = half - a_len;
            for b_len in 0..=remaining_half {
                let b = factor_after(word, &a, b_len);
                let c_len = remaining_half - b_len;
                let c = factor_after(word, &b, c_len);

                let a_hat_start = wrap1(a_start as i64 + half as i64, n);
                let a_hat = factor_after(word, &c, a_len);
                if a_hat.start != a_hat_start || a_hat.content != backtrack_content(&a.content) {
                    continue;
                }

                let c2 = factor_after(word, &a_hat, c_len);
                if !is_any_reflection(&c.content, &c2.content) {
                    continue;
                }
                let b2 = factor_after(word, &c2, b_len);
                if !is_any_reflection(&b.content, &b2.content) {
                    continue;
                }

                let theta_c = reflection_angle(&c.content, &c2.content);
                let theta_b = reflection_angle(&b.content, &b2.content);
                if theta_c != theta_b {
                    continue;
                }
                if wrap1(b2.finish as i64 + 1, n) != a_start {
                    continue;
                }

                debug!("type-2 reflection match at start {a_start}, |A|={a_len}");
                return Some(BWFactorization::new(
                    vec![a, b, c, a_hat, c2, b2],
                    CriterionKind::TypeTwoReflection,
                ));
            }
        }
    }

    None
}
