//! Affine point representation and the curve group law.

use super::{CurveParams, field};
use num_bigint::BigUint;
use num_traits::Zero;

/// Elliptic curve point in affine coordinates.
///
/// The additive identity (the point at infinity) is an explicit variant
/// rather than a coordinate sentinel, so every `Affine` value carries real,
/// reduced coordinates.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Point {
    /// Additive identity (point at infinity).
    Identity,

    /// Finite point with coordinates reduced modulo `p`.
    Affine {
        /// x-coordinate.
        x: BigUint,
        /// y-coordinate.
        y: BigUint,
    },
}

impl Point {
    /// Returns `true` for the additive identity.
    pub fn is_identity(&self) -> bool {
        matches!(self, Point::Identity)
    }

    /// x-coordinate, or `None` for the identity.
    pub fn x(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { x, .. } => Some(x),
        }
    }

    /// y-coordinate, or `None` for the identity.
    pub fn y(&self) -> Option<&BigUint> {
        match self {
            Point::Identity => None,
            Point::Affine { y, .. } => Some(y),
        }
    }

    /// Whether the point satisfies `y² ≡ x³ + ax + b (mod p)`.
    ///
    /// The identity is vacuously on the curve.
    pub fn is_on_curve(&self) -> bool {
        let params = CurveParams::sm2();
        let p = &params.p;
        match self {
            Point::Identity => true,
            Point::Affine { x, y } => {
                if x >= p || y >= p {
                    return false;
                }
                let y2 = field::mul(y, y, p);
                let x3 = field::mul(&field::mul(x, x, p), x, p);
                let ax = field::mul(&params.a, x, p);
                y2 == field::add(&field::add(&x3, &ax, p), &params.b, p)
            }
        }
    }

    /// Point negation: `(x, y) ↦ (x, p - y)`.
    pub fn neg(&self) -> Point {
        let p = &CurveParams::sm2().p;
        match self {
            Point::Identity => Point::Identity,
            Point::Affine { x, y } => Point::Affine {
                x: x.clone(),
                y: (p - y) % p,
            },
        }
    }

    /// Group addition.
    ///
    /// Covers all cases of the affine chord-and-tangent law: identity
    /// absorption, inverse points summing to the identity, doubling with a
    /// tangent slope (identity when `y = 0`), and the generic secant slope.
    /// A vanishing slope denominator collapses to the identity rather than
    /// escaping as an arithmetic failure.
    pub fn add(&self, other: &Point) -> Point {
        let params = CurveParams::sm2();
        let p = &params.p;

        let (x1, y1) = match self {
            Point::Identity => return other.clone(),
            Point::Affine { x, y } => (x, y),
        };
        let (x2, y2) = match other {
            Point::Identity => return self.clone(),
            Point::Affine { x, y } => (x, y),
        };

        // Q = -P: the secant is vertical (this also covers P = Q with y = 0).
        if x1 == x2 && field::add(y1, y2, p).is_zero() {
            return Point::Identity;
        }

        let lambda = if (x1, y1) == (x2, y2) {
            // tangent slope (3x² + a) / 2y
            if y1.is_zero() {
                return Point::Identity;
            }
            let num = field::add(
                &field::mul(&BigUint::from(3u32), &field::mul(x1, x1, p), p),
                &params.a,
                p,
            );
            match field::inv(&field::add(y1, y1, p), p) {
                Ok(den_inv) => field::mul(&num, &den_inv, p),
                Err(_) => return Point::Identity,
            }
        } else {
            // secant slope (y2 - y1) / (x2 - x1)
            let num = field::sub(y2, y1, p);
            match field::inv(&field::sub(x2, x1, p), p) {
                Ok(den_inv) => field::mul(&num, &den_inv, p),
                Err(_) => return Point::Identity,
            }
        };

        let x3 = field::sub(&field::sub(&field::mul(&lambda, &lambda, p), x1, p), x2, p);
        let y3 = field::sub(&field::mul(&lambda, &field::sub(x1, &x3, p), p), y1, p);
        Point::Affine { x: x3, y: y3 }
    }

    /// Point doubling, the tangent case of [`Point::add`].
    pub fn double(&self) -> Point {
        self.add(self)
    }

    /// Scalar multiplication `[k]P` by binary double-and-add, scanning the
    /// bits of `k` least significant first.
    ///
    /// `k = 0` yields the identity. Negative scalars are unrepresentable.
    pub fn mul(&self, k: &BigUint) -> Point {
        let mut acc = Point::Identity;
        let mut addend = self.clone();
        for i in 0..k.bits() {
            if k.bit(i) {
                acc = acc.add(&addend);
            }
            addend = addend.double();
        }
        acc
    }
}
