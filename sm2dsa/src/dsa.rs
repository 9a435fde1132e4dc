//! SM2 Digital Signature Algorithm (SM2DSA) as defined in
//! [draft-shen-sm2-ecdsa § 5].
//!
//! ## Usage
//!
//! ```
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use rand::rngs::OsRng;
//! use sm2dsa::{
//!     SecretKey,
//!     dsa::{
//!         Signature, SigningKey,
//!         signature::{RandomizedSigner, Verifier},
//!     },
//! };
//!
//! // Signing
//! let secret_key = SecretKey::random(&mut OsRng)?; // persist with `::to_hex()`
//! let distid = "signer@example.com"; // distinguishing identifier
//! let signing_key = SigningKey::new(distid, &secret_key)?;
//! let message = b"test message";
//! let signature: Signature = signing_key.try_sign_with_rng(&mut OsRng, message)?;
//!
//! // Verifying
//! use sm2dsa::dsa::VerifyingKey;
//!
//! let (x, y) = signing_key.verifying_key().public_key().to_hex();
//! let verifying_key = VerifyingKey::from_hex(distid, &x, &y)?;
//! verifying_key.verify(message, &signature)?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! [draft-shen-sm2-ecdsa § 5]: https://datatracker.ietf.org/doc/html/draft-shen-sm2-ecdsa-02#section-5

mod signing;
mod verifying;

pub use signature;

pub use self::{signing::SigningKey, verifying::VerifyingKey};

use crate::{
    arithmetic::CurveParams,
    encoding,
    error::{Error, Result},
    keys::in_scalar_range,
};
use core::fmt::{self, Debug};
use num_bigint::BigUint;

/// SM2DSA signature serialized as bytes.
pub type SignatureBytes = [u8; Signature::BYTE_SIZE];

/// SM2DSA signature.
///
/// Both scalars are checked against `[1, n-1]` at construction, so a value
/// of this type is always well-formed; cryptographic validity is decided by
/// [`VerifyingKey`].
#[derive(Clone, Eq, PartialEq)]
pub struct Signature {
    r: BigUint,
    s: BigUint,
}

impl Signature {
    /// Size of an encoded SM2DSA signature in bytes.
    pub const BYTE_SIZE: usize = 64;

    /// Create a [`Signature`] from the `r` and `s` scalar values.
    ///
    /// Fails with [`Error::OutOfRange`] unless both lie in `[1, n-1]`.
    pub fn from_scalars(r: BigUint, s: BigUint) -> Result<Self> {
        let n = &CurveParams::sm2().n;
        if !in_scalar_range(&r, n) || !in_scalar_range(&s, n) {
            return Err(Error::OutOfRange);
        }
        Ok(Self { r, s })
    }

    /// Parse a signature from a fixed-width byte array `r ‖ s`.
    pub fn from_bytes(bytes: &SignatureBytes) -> Result<Self> {
        let (r_bytes, s_bytes) = bytes.split_at(Self::BYTE_SIZE / 2);
        Self::from_scalars(
            BigUint::from_bytes_be(r_bytes),
            BigUint::from_bytes_be(s_bytes),
        )
    }

    /// Parse a signature from a byte slice.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let bytes = SignatureBytes::try_from(bytes).map_err(|_| Error::MalformedInput)?;
        Self::from_bytes(&bytes)
    }

    /// Parse a signature from the canonical hex forms of `r` and `s`.
    pub fn from_hex(r: &str, s: &str) -> Result<Self> {
        Self::from_scalars(encoding::hex_decode(r)?, encoding::hex_decode(s)?)
    }

    /// Serialize this signature as fixed-width bytes `r ‖ s`.
    pub fn to_bytes(&self) -> SignatureBytes {
        let mut ret = [0u8; Self::BYTE_SIZE];
        let (r_bytes, s_bytes) = ret.split_at_mut(Self::BYTE_SIZE / 2);
        r_bytes.copy_from_slice(&encoding::be_bytes_32(&self.r));
        s_bytes.copy_from_slice(&encoding::be_bytes_32(&self.s));
        ret
    }

    /// Canonical hex forms of `(r, s)`.
    pub fn to_hex(&self) -> (String, String) {
        (encoding::hex_encode(&self.r), encoding::hex_encode(&self.s))
    }

    /// Get the `r` component of this signature.
    pub fn r(&self) -> &BigUint {
        &self.r
    }

    /// Get the `s` component of this signature.
    pub fn s(&self) -> &BigUint {
        &self.s
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sm2dsa::Signature(")?;

        for byte in self.to_bytes() {
            write!(f, "{byte:02X}")?;
        }

        write!(f, ")")
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Signature> {
        Signature::from_slice(bytes)
    }
}
