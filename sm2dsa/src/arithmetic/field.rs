//! Modular arithmetic over an explicit modulus.
//!
//! The same helpers serve both moduli in use: the field modulus `p` for
//! point coordinates and the group order `n` for scalars.

use crate::error::{Error, Result};
use num_bigint::BigUint;
use num_traits::Zero;

/// `(a + b) mod m`
pub(crate) fn add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// `(a - b) mod m`, defined for unreduced operands and free of underflow.
pub(crate) fn sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    ((a % m) + m - (b % m)) % m
}

/// `(a * b) mod m`
pub(crate) fn mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// Multiplicative inverse of `a` modulo the odd prime `m`, via Fermat's
/// little theorem: `a^(m-2) ≡ a^(-1) (mod m)`.
///
/// Fails with [`Error::NonInvertible`] when `a ≡ 0 (mod m)`. Callers in the
/// group law and the protocol layers decide locally whether that means an
/// identity result, a retry, or a failed operation.
pub(crate) fn inv(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    if (a % m).is_zero() {
        return Err(Error::NonInvertible);
    }
    Ok(a.modpow(&(m - 2u32), m))
}
