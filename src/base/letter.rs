use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// A unit move on the boundary of a polyomino, `{r, u, l, d}`. The y-axis
/// points downward (screen convention): `U` decreases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum Letter {
    R,
    U,
    L,
    D,
}

/// The fixed alphabet order `[R, U, L, D]`; all rotation arithmetic is an
/// index shift into this order.
pub const ALPHABET: [Letter; 4] = [Letter::R, Letter::U, Letter::L, Letter::D];

/// Reflection axis angle, restricted to the four angles that preserve the
/// lattice-axis alphabet. Order matters: `is_any_reflection`/`reflection_angle`
/// search in this fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReflectionAngle {
    NegFortyFive,
    Zero,
    FortyFive,
    Ninety,
}

pub const REFLECTION_ANGLES: [ReflectionAngle; 4] = [
    ReflectionAngle::NegFortyFive,
    ReflectionAngle::Zero,
    ReflectionAngle::FortyFive,
    ReflectionAngle::Ninety,
];

impl ReflectionAngle {
    pub fn degrees(self) -> i32 {
        match self {
            ReflectionAngle::NegFortyFive => -45,
            ReflectionAngle::Zero => 0,
            ReflectionAngle::FortyFive => 45,
            ReflectionAngle::Ninety => 90,
        }
    }

    pub fn from_degrees(degrees: i32) -> Option<Self> {
        REFLECTION_ANGLES.into_iter().find(|a| a.degrees() == degrees)
    }
}

impl Letter {
    pub fn index(self) -> i32 {
        match self {
            Letter::R => 0,
            Letter::U => 1,
            Letter::L => 2,
            Letter::D => 3,
        }
    }

    pub fn from_index(index: i32) -> Letter {
        ALPHABET[index.rem_euclid(4) as usize]
    }

    /// Unit lattice vector for this letter, under the screen-down y-axis.
    pub fn vector(self) -> Vector2<i64> {
        match self {
            Letter::R => Vector2::new(1, 0),
            Letter::U => Vector2::new(0, -1),
            Letter::L => Vector2::new(-1, 0),
            Letter::D => Vector2::new(0, 1),
        }
    }

    /// `tθ`: rotate counter-clockwise (mathematical sense) by `theta_deg`,
    /// a multiple of 90°.
    pub fn rotate(self, theta_deg: i32) -> Letter {
        debug_assert_eq!(theta_deg % 90, 0, "rotation angle must be a multiple of 90");
        Letter::from_index(self.index() + theta_deg / 90)
    }

    /// `complement(ℓ) = tθ(ℓ, 180°)`.
    pub fn complement(self) -> Letter {
        self.rotate(180)
    }

    /// `fθ`: reflect this letter across the line through the origin at
    /// angle `theta`. Involution: `fθ(fθ(ℓ, θ), θ) == ℓ`.
    pub fn reflect(self, theta: ReflectionAngle) -> Letter {
        let odd = matches!(self, Letter::R | Letter::L);
        let delta = match (theta, odd) {
            (ReflectionAngle::NegFortyFive, true) => -90,
            (ReflectionAngle::NegFortyFive, false) => 90,
            (ReflectionAngle::Zero, true) => 0,
            (ReflectionAngle::Zero, false) => 180,
            (ReflectionAngle::FortyFive, true) => 90,
            (ReflectionAngle::FortyFive, false) => -90,
            (ReflectionAngle::Ninety, true) => 180,
            (ReflectionAngle::Ninety, false) => 0,
        };
        self.rotate(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_is_invertible() {
        for &l in &ALPHABET {
            for theta in [0, 90, 180, 270] {
                assert_eq!(l.rotate(theta).rotate(-theta), l);
            }
            assert_eq!(l.rotate(360), l);
        }
    }

    #[test]
    fn complement_is_self_inverse() {
        for &l in &ALPHABET {
            assert_eq!(l.complement().complement(), l);
        }
    }

    #[test]
    fn reflection_is_involution() {
        for &l in &ALPHABET {
            for theta in REFLECTION_ANGLES {
                assert_eq!(l.reflect(theta).reflect(theta), l);
            }
        }
    }

    #[test]
    fn reflection_matches_scenario_check() {
        // is_reflection("rr", "uu", 45°) is true: R == f45(U).
        assert_eq!(Letter::U.reflect(ReflectionAngle::FortyFive), Letter::R);
    }
}
