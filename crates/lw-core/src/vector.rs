//! Horizontal-plane vectors.
//!
//! All pendulum and footstep quantities live in the ground plane; height is a
//! parameter, never a state.

use crate::{CoreError, Real, ensure_finite};

/// Ground-plane vector: `x` is forward, `y` is lateral.
pub type Vec2 = nalgebra::Vector2<Real>;

#[inline]
pub fn vec2(x: Real, y: Real) -> Vec2 {
    Vec2::new(x, y)
}

pub fn ensure_finite_vec(v: &Vec2, what: &'static str) -> Result<Vec2, CoreError> {
    ensure_finite(v.x, what)?;
    ensure_finite(v.y, what)?;
    Ok(*v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_vec_checks_both_axes() {
        assert!(ensure_finite_vec(&vec2(0.1, -0.2), "v").is_ok());
        assert!(ensure_finite_vec(&vec2(Real::NAN, 0.0), "v").is_err());
        assert!(ensure_finite_vec(&vec2(0.0, Real::NEG_INFINITY), "v").is_err());
    }
}
