use log::debug;

use super::common::{factor_after, factor_of_len};
use crate::base::{is_any_reflection, is_palindrome, reflection_angle, wrap1, BWFactorization, CriterionKind, Word};

/// `W = A B C D f_Θ(B) f_Φ(D)`, with `A`, `C` palindromes, `(B, f_Θ(B))` and
/// `(D, f_Φ(D))` any-reflections, and `Θ − Φ = ±90°`.
pub fn detect(word: &Word) -> Option<BWFactorization> {
    let n = word.len();

    for a_start in 1..=n {
        for a_len in 0..n {
            let a = factor_of_len(word, a_start, a_len);
            if !(a.is_empty() || is_palindrome(&a.content)) {
                continue;
            }
            let budget_after_a = n - a_len;
            for b_len in 0..=(budget_after_a / 2) {
                let b = factor_after(word, &a, b_len);
                let budget_after_b = budget_after_a - 2 * b_len;
                for c_len in 0..=budget_after_b {
                    let c = factor_after(word, &b, c_len);
                    if !(c.is_empty() || is_palindrome(&c.content)) {
                        continue;
                    }
                    let remaining = budget_after_b - c_len;
                    if remaining % 2 != 0 {
                        continue;
                    }
                    let d_len = remaining / 2;
                    let d = factor_after(word, &c, d_len);
                    let b2 = factor_after(word, &d, b_len);
                    if !is_any_reflection(&b.content, &b2.content) {
                        continue;
                    }
                    let d2 = factor_after(word, &b2, d_len);
                    if !is_any_reflection(&d.content, &d2.content) {
                        continue;
                    }
                    if wrap1(d2.finish as i64 + 1, n) != a_start {
                        continue;
                    }
                    let theta_b = reflection_angle(&b.content, &b2.content).unwrap();
                    let theta_d = reflection_angle(&d.content, &d2.content).unwrap();
                    if (theta_b.degrees() - theta_d.degrees()).abs() != 90 {
                        continue;
                    }
                    debug!(
                        "type-2 half-turn reflection match at start {a_start}, |A|={a_len}, |C|={c_len}"
                    );
                    return Some(BWFactorization::new(
                        vec![a, b, c, d, b2, d2],
                        CriterionKind::TypeTwoHalfTurnReflection,
                    ));
                }
            }
        }
    }

    None
}
