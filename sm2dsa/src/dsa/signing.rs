//! Support for SM2DSA signing.
//!
//! ## Algorithm
//!
//! ```text
//! A1: set M~=ZA || M
//! A2: calculate e=Hv(M~)
//! A3: pick a random number k in [1, n-1] via a random number generator
//! A4: calculate the elliptic curve point (x1, y1)=[k]G
//! A5: calculate r=(e+x1) modn, return to A3 if r=0 or r+k=n
//! A6: calculate s=((1+dA)^(-1)*(k-r*dA)) modn, return to A3 if s=0
//! A7: the digital signature of M is (r, s)
//! ```

use super::{Signature, VerifyingKey};
use crate::{
    arithmetic::{CurveParams, field},
    distid::DistId,
    error::{Error, Result},
    keys::{MAX_RETRIES, SecretKey, random_scalar},
};
use core::fmt::{self, Debug};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use signature::{KeypairRef, RandomizedSigner, rand_core::CryptoRngCore};

/// SM2DSA secret key used for signing messages and producing signatures.
///
/// ## Usage
///
/// The primary signing API is the [`RandomizedSigner`] trait: each
/// signature draws a fresh nonce from the caller-supplied cryptographically
/// secure generator, so there is no deterministic signing entry point.
#[derive(Clone)]
pub struct SigningKey {
    /// Secret key.
    secret_key: SecretKey,

    /// Verifying key for this signing key.
    verifying_key: VerifyingKey,
}

impl SigningKey {
    /// Create signing key from a signer's distinguishing identifier and
    /// secret key.
    pub fn new(distid: &DistId, secret_key: &SecretKey) -> Result<Self> {
        let verifying_key = VerifyingKey::new(distid, secret_key.public_key()?)?;

        Ok(Self {
            secret_key: secret_key.clone(),
            verifying_key,
        })
    }

    /// Parse signing key from the canonical hex form of its secret scalar.
    pub fn from_hex(distid: &DistId, hex: &str) -> Result<Self> {
        Self::new(distid, &SecretKey::from_hex(hex)?)
    }

    /// Borrow the secret key.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret_key
    }

    /// Get the [`VerifyingKey`] which corresponds to this [`SigningKey`].
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Get the distinguishing identifier for this key.
    pub fn distid(&self) -> &DistId {
        self.verifying_key.distid()
    }

    /// A2–A7, with the bounded retry loop around the nonce-dependent steps.
    fn sign_inner(&self, rng: &mut impl CryptoRngCore, msg: &[u8]) -> Result<Signature> {
        let params = CurveParams::sm2();
        let n = &params.n;
        let d = self.secret_key.as_scalar();

        // A1/A2: e = Hv(ZA || M), taken as a raw big-endian integer; it is
        // reduced implicitly by the mod-n addition in A5.
        let e = BigUint::from_bytes_be(self.verifying_key.hash_msg(msg).as_slice());

        // (1 + dA)^(-1) does not depend on the nonce. For d = n-1 it does
        // not exist, and no amount of retrying would produce a signature.
        let d_plus_1_inv = field::inv(&(d + BigUint::one()), n)?;

        for _ in 0..MAX_RETRIES {
            // A3: pick a random number k in [1, n-1]
            let k = random_scalar(rng, n)?;

            // A4: (x1, y1) = [k]G
            let point = params.generator().mul(&k);
            let Some(x1) = point.x() else { continue };

            // A5: r = (e + x1) mod n, back to A3 if r = 0 or r + k = n
            let r = field::add(&e, x1, n);
            if r.is_zero() || (&r + &k) == *n {
                continue;
            }

            // A6: s = ((1 + dA)^(-1) * (k - r*dA)) mod n, back to A3 if s = 0
            let s = field::mul(
                &d_plus_1_inv,
                &field::sub(&k, &field::mul(&r, d, n), n),
                n,
            );
            if s.is_zero() {
                continue;
            }

            // A7: the digital signature of M is (r, s)
            return Signature::from_scalars(r, s);
        }

        Err(Error::RetriesExhausted)
    }
}

//
// `*Signer` trait impls
//

impl RandomizedSigner<Signature> for SigningKey {
    fn try_sign_with_rng(
        &self,
        rng: &mut impl CryptoRngCore,
        msg: &[u8],
    ) -> signature::Result<Signature> {
        self.sign_inner(rng, msg).map_err(signature::Error::from)
    }
}

//
// Other trait impls
//

impl AsRef<VerifyingKey> for SigningKey {
    fn as_ref(&self) -> &VerifyingKey {
        &self.verifying_key
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("verifying_key", &self.verifying_key)
            .finish_non_exhaustive()
    }
}

impl KeypairRef for SigningKey {
    type VerifyingKey = VerifyingKey;
}
