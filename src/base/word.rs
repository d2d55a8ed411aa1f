use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::TilingError;
use super::letter::Letter;

/// Default cap on accepted boundary-word length; see `TilingError::BoundaryTooLong`.
pub const DEFAULT_MAX_BOUNDARY_LEN: usize = 8192;

/// Normalize a 1-based cyclic position `p` (possibly out of `[1, n]`, possibly
/// negative or zero) into `[1, n]`.
pub fn wrap1(p: i64, n: usize) -> usize {
    debug_assert!(n > 0);
    let n = n as i64;
    (((p - 1).rem_euclid(n)) + 1) as usize
}

/// The clockwise boundary word of a polyomino, over `{R, U, L, D}`, treated as
/// cyclic. Construction enforces the closed-path invariants from §3 of the
/// closed-path invariants; it does not re-derive a boundary word from a
/// painted grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word(Vec<Letter>);

impl Word {
    /// Build a `Word` from raw letters without checking closure. Used
    /// internally for backtracks and factor contents, which need not be
    /// independently closed boundary words.
    pub fn from_letters(letters: Vec<Letter>) -> Self {
        Self(letters)
    }

    pub fn parse_boundary(s: &str, max_len: usize) -> Result<Self, TilingError> {
        if s.is_empty() {
            return Err(TilingError::MalformedBoundary("empty input".into()));
        }
        if s.len() > max_len {
            return Err(TilingError::BoundaryTooLong {
                len: s.len(),
                max: max_len,
            });
        }
        if s.len() % 2 != 0 {
            return Err(TilingError::MalformedBoundary(format!(
                "odd length {}",
                s.len()
            )));
        }
        let mut letters = Vec::with_capacity(s.len());
        for c in s.chars() {
            let letter = match c {
                'r' => Letter::R,
                'u' => Letter::U,
                'l' => Letter::L,
                'd' => Letter::D,
                other => {
                    return Err(TilingError::MalformedBoundary(format!(
                        "illegal character '{other}'"
                    )))
                }
            };
            letters.push(letter);
        }
        let word = Word(letters);
        let v = word.path_vector();
        if v != nalgebra::Vector2::new(0, 0) {
            return Err(TilingError::MalformedBoundary(format!(
                "path does not close: ends at ({}, {})",
                v.x, v.y
            )));
        }
        Ok(word)
    }

    pub fn letters(&self) -> &[Letter] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Letter at a 1-based cyclic position.
    pub fn at(&self, p: i64) -> Letter {
        let i = wrap1(p, self.len());
        self.0[i - 1]
    }

    pub fn path_vector(&self) -> nalgebra::Vector2<i64> {
        self.0
            .iter()
            .fold(nalgebra::Vector2::new(0, 0), |acc, l| acc + l.vector())
    }

    /// `backtrack(W) = complement(reverse(W))`.
    pub fn backtrack(&self) -> Word {
        let letters = self.0.iter().rev().map(|l| l.complement()).collect();
        Word(letters)
    }

    pub fn complement(&self) -> Word {
        Word(self.0.iter().map(|l| l.complement()).collect())
    }

    pub fn reverse(&self) -> Word {
        Word(self.0.iter().rev().copied().collect())
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for l in &self.0 {
            write!(f, "{}", l.to_string().to_lowercase())?;
        }
        Ok(())
    }
}

/// Cyclic substring from `s` to `f` inclusive (1-based); wraps through the
/// end of the word when `s > f`.
pub fn extract(word: &Word, s: usize, f: usize) -> Vec<Letter> {
    let n = word.len();
    let mut out = Vec::new();
    let mut p = s;
    loop {
        out.push(word.at(p as i64));
        if p == f {
            break;
        }
        p = wrap1(p as i64 + 1, n);
    }
    out
}

/// Longest common prefix length of two linear (non-cyclic) sequences. Generic
/// so it doubles as the plain string utility the literal check
/// (`common_prefix("hello","hella")="hell"`) exercises, as well as the
/// letter-slice comparisons the admissible-factor search needs.
pub fn common_prefix_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

/// Longest common prefix of two strings, as a new `String`.
pub fn common_prefix(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let n = common_prefix_len(&a, &b);
    a[..n].iter().collect()
}

/// Compare two cyclic positions of `a` and `b`, walking forward from each up
/// to `cap` letters, and return how many consecutive letters agree — the
/// cyclic analogue of `common_prefix_len` without materializing `W∘W`.
pub fn cyclic_common_prefix_len(a: &Word, a_start: i64, b: &Word, b_start: i64, cap: usize) -> usize {
    let mut k: i64 = 0;
    while (k as usize) < cap && a.at(a_start + k) == b.at(b_start + k) {
        k += 1;
    }
    k as usize
}

/// `is_Θ_drome`: `content[i] == tθ(content[j], θ+180)` walking inward from
/// both ends. The empty word is a drome at every angle.
pub fn is_theta_drome(content: &[Letter], theta: i32) -> bool {
    let n = content.len();
    if n == 0 {
        return true;
    }
    let mut i = 0usize;
    let mut j = n - 1;
    while i < j {
        if content[i].rotate(theta + 180) != content[j] {
            return false;
        }
        i += 1;
        j -= 1;
    }
    true
}

pub fn is_palindrome(content: &[Letter]) -> bool {
    is_theta_drome(content, 180)
}

pub fn is_90_drome(content: &[Letter]) -> bool {
    is_theta_drome(content, 90)
}

pub fn is_reflection(a: &[Letter], b: &[Letter], theta: super::letter::ReflectionAngle) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| *x == y.reflect(theta))
}

pub fn is_any_reflection(a: &[Letter], b: &[Letter]) -> bool {
    super::letter::REFLECTION_ANGLES
        .into_iter()
        .any(|theta| is_reflection(a, b, theta))
}

/// First reflection angle (in the fixed angle order) under which `a` and `b`
/// are reflections of each other.
pub fn reflection_angle(a: &[Letter], b: &[Letter]) -> Option<super::letter::ReflectionAngle> {
    super::letter::REFLECTION_ANGLES
        .into_iter()
        .find(|&theta| is_reflection(a, b, theta))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::parse_boundary(s, DEFAULT_MAX_BOUNDARY_LEN).unwrap()
    }

    fn letters(s: &str) -> Vec<Letter> {
        s.chars()
            .map(|c| match c {
                'r' => Letter::R,
                'u' => Letter::U,
                'l' => Letter::L,
                'd' => Letter::D,
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn backtrack_is_self_inverse() {
        let word = w("urdl"); // closes: (0,-1)+(1,0)+(0,1)+(-1,0) = (0,0)
        assert_eq!(word.backtrack().backtrack(), word);
    }

    #[test]
    fn rejects_non_closing_path() {
        assert!(Word::parse_boundary("uu", DEFAULT_MAX_BOUNDARY_LEN).is_err());
    }

    #[test]
    fn rejects_empty() {
        assert!(Word::parse_boundary("", DEFAULT_MAX_BOUNDARY_LEN).is_err());
    }

    #[test]
    fn common_prefix_literal_check() {
        assert_eq!(common_prefix("hello", "hella"), "hell");
    }

    #[test]
    fn palindrome_literal_check() {
        assert!(is_palindrome(&letters("urdlldru")));
    }

    #[test]
    fn ninety_drome_literal_check() {
        assert!(is_90_drome(&letters("urrddr")));
    }

    #[test]
    fn is_reflection_literal_check() {
        assert!(is_reflection(
            &letters("rr"),
            &letters("uu"),
            super::super::letter::ReflectionAngle::FortyFive
        ));
    }
}
