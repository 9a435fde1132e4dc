//! Support for verifying SM2DSA signatures.
//!
//! ## Algorithm
//!
//! ```text
//! B1: verify whether r' in [1,n-1], verification failed if not
//! B2: verify whether s' in [1,n-1], verification failed if not
//! B3: set M'~=ZA || M'
//! B4: calculate e'=Hv(M'~)
//! B5: calculate t = (r' + s') modn, verification failed if t=0
//! B6: calculate the point (x1', y1')=[s']G + [t]PA
//! B7: calculate R=(e'+x1') modn, verification pass if R=r', otherwise failed
//! ```

use super::Signature;
use crate::{
    Hash,
    arithmetic::{CurveParams, field},
    distid::{self, DistId},
    keys::PublicKey,
};
use num_bigint::BigUint;
use num_traits::Zero;
use signature::{Error, Verifier};
use sm3::{Digest, Sm3};

/// SM2DSA public key used for verifying signatures are valid for a given
/// message.
///
/// ## Usage
///
/// The primary verification API is the [`Verifier`] trait. Every
/// cryptographic failure mode — zero `t`, identity result, mismatched
/// recomputed value — is reported as the same opaque [`Error`]; callers
/// learn only that the signature does not verify. Range problems in `r` and
/// `s` are rejected earlier, when the [`Signature`] itself is parsed.
///
/// Verification is a pure function of the key, identifier, message and
/// signature; it never consults any secret material.
#[derive(Clone, Debug)]
pub struct VerifyingKey {
    /// Signer's public key.
    public_key: PublicKey,

    /// Signer's user information hash `Z`.
    identity_hash: Hash,

    /// Distinguishing identifier used to compute `Z`.
    distid: String,
}

impl VerifyingKey {
    /// Initialize [`VerifyingKey`] from a signer's distinguishing identifier
    /// and public key.
    pub fn new(distid: &DistId, public_key: PublicKey) -> crate::Result<Self> {
        let identity_hash = distid::hash_z(distid, &public_key)?;

        Ok(Self {
            public_key,
            identity_hash,
            distid: distid.into(),
        })
    }

    /// Initialize [`VerifyingKey`] from a distinguishing identifier and the
    /// canonical hex coordinates of the public key.
    pub fn from_hex(distid: &DistId, x: &str, y: &str) -> crate::Result<Self> {
        Self::new(distid, PublicKey::from_hex(x, y)?)
    }

    /// Borrow the public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Get the distinguishing identifier for this key.
    pub fn distid(&self) -> &DistId {
        self.distid.as_str()
    }

    /// Compute message hash `e = Hv(ZA || M)`.
    pub(crate) fn hash_msg(&self, msg: &[u8]) -> Hash {
        Sm3::new_with_prefix(self.identity_hash)
            .chain_update(msg)
            .finalize()
    }

    /// B3–B7. B1/B2 hold by [`Signature`] construction.
    fn verify_inner(&self, msg: &[u8], signature: &Signature) -> bool {
        let params = CurveParams::sm2();
        let n = &params.n;

        // B3/B4: e' = Hv(ZA || M'), as a raw big-endian integer
        let e = BigUint::from_bytes_be(self.hash_msg(msg).as_slice());

        // B5: t = (r' + s') mod n, failed if t = 0
        let t = field::add(signature.r(), signature.s(), n);
        if t.is_zero() {
            return false;
        }

        // B6: (x1', y1') = [s']G + [t]PA, failed on the identity
        let point = params
            .generator()
            .mul(signature.s())
            .add(&self.public_key.to_affine().mul(&t));
        let Some(x1) = point.x() else {
            return false;
        };

        // B7: R = (e' + x1') mod n, pass iff R = r'
        field::add(&e, x1, n) == *signature.r()
    }
}

//
// `*Verifier` trait impls
//

impl Verifier<Signature> for VerifyingKey {
    fn verify(&self, msg: &[u8], signature: &Signature) -> signature::Result<()> {
        if self.verify_inner(msg, signature) {
            Ok(())
        } else {
            Err(Error::new())
        }
    }
}

//
// Other trait impls
//

impl AsRef<PublicKey> for VerifyingKey {
    fn as_ref(&self) -> &PublicKey {
        &self.public_key
    }
}

impl From<VerifyingKey> for PublicKey {
    fn from(verifying_key: VerifyingKey) -> PublicKey {
        verifying_key.public_key
    }
}

impl From<&VerifyingKey> for PublicKey {
    fn from(verifying_key: &VerifyingKey) -> PublicKey {
        verifying_key.public_key.clone()
    }
}
