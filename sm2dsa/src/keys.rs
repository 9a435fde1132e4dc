//! Secret and public key material.

use crate::{
    arithmetic::{CurveParams, Point},
    encoding,
    error::{Error, Result},
};
use core::fmt::{self, Debug};
use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::CryptoRngCore;

/// Defensive bound on rejection-sampling and signing retry loops.
///
/// The per-iteration rejection probability is negligible, so exhausting the
/// bound is never expected; it exists so no loop is unbounded.
pub(crate) const MAX_RETRIES: usize = 256;

/// Whether `x` lies in the valid scalar window `[1, n-1]`.
///
/// Private keys, per-signature nonces and signature components all share
/// this window. It is deliberately expressed in one place: the standard
/// excludes both `0` and `n`, and every constructor funnels through here.
pub(crate) fn in_scalar_range(x: &BigUint, n: &BigUint) -> bool {
    !x.is_zero() && x < n
}

/// Draw a uniform scalar from `[1, n-1]` by rejection sampling 32-byte
/// strings from a cryptographically secure generator.
pub(crate) fn random_scalar(rng: &mut impl CryptoRngCore, n: &BigUint) -> Result<BigUint> {
    for _ in 0..MAX_RETRIES {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        let candidate = BigUint::from_bytes_be(&bytes);
        if in_scalar_range(&candidate, n) {
            return Ok(candidate);
        }
    }
    Err(Error::RetriesExhausted)
}

/// SM2 secret key: a scalar `d` in `[1, n-1]`.
///
/// Values are immutable; regenerating a key means constructing a new value
/// and deriving a fresh public key from it.
#[derive(Clone)]
pub struct SecretKey {
    d: BigUint,
}

impl SecretKey {
    /// Generate a random secret key.
    pub fn random(rng: &mut impl CryptoRngCore) -> Result<Self> {
        let n = &CurveParams::sm2().n;
        Ok(Self {
            d: random_scalar(rng, n)?,
        })
    }

    /// Create a secret key from a raw scalar.
    ///
    /// Fails with [`Error::OutOfRange`] unless `1 ≤ d ≤ n-1`.
    pub fn new(d: BigUint) -> Result<Self> {
        if !in_scalar_range(&d, &CurveParams::sm2().n) {
            return Err(Error::OutOfRange);
        }
        Ok(Self { d })
    }

    /// Parse a secret key from its canonical 64-character hex form.
    pub fn from_hex(hex: &str) -> Result<Self> {
        Self::new(encoding::hex_decode(hex)?)
    }

    /// Canonical 64-character uppercase hex form.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn to_hex(&self) -> String {
        encoding::hex_encode(&self.d)
    }

    /// Borrow the secret scalar.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn as_scalar(&self) -> &BigUint {
        &self.d
    }

    /// Derive the public key `[d]G`.
    ///
    /// A scalar in `[1, n-1]` cannot map the base point to the identity;
    /// should the impossible happen the derivation aborts with
    /// [`Error::DegenerateKey`] instead of returning an unusable key.
    pub fn public_key(&self) -> Result<PublicKey> {
        match CurveParams::sm2().generator().mul(&self.d) {
            Point::Identity => Err(Error::DegenerateKey),
            Point::Affine { x, y } => Ok(PublicKey { x, y }),
        }
    }
}

impl Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey").finish_non_exhaustive()
    }
}

/// SM2 public key: a non-identity point on the curve.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey {
    x: BigUint,
    y: BigUint,
}

impl PublicKey {
    /// Create a public key from an affine point.
    ///
    /// Fails with [`Error::MalformedKey`] for the identity or for
    /// coordinates that do not satisfy the curve equation.
    pub fn from_affine(point: Point) -> Result<Self> {
        if !point.is_on_curve() {
            return Err(Error::MalformedKey);
        }
        match point {
            Point::Identity => Err(Error::MalformedKey),
            Point::Affine { x, y } => Ok(Self { x, y }),
        }
    }

    /// Parse a public key from canonical hex coordinates.
    pub fn from_hex(x: &str, y: &str) -> Result<Self> {
        Self::from_affine(Point::Affine {
            x: encoding::hex_decode(x)?,
            y: encoding::hex_decode(y)?,
        })
    }

    /// x-coordinate.
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// y-coordinate.
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// The key as a curve point.
    pub fn to_affine(&self) -> Point {
        Point::Affine {
            x: self.x.clone(),
            y: self.y.clone(),
        }
    }

    /// Canonical hex forms of the `(x, y)` coordinates.
    pub fn to_hex(&self) -> (String, String) {
        (encoding::hex_encode(&self.x), encoding::hex_encode(&self.y))
    }
}
