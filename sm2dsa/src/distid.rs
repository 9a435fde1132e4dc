//! Distinguishing identifier support.

use crate::{
    Hash,
    arithmetic::CurveParams,
    encoding,
    error::{Error, Result},
    keys::PublicKey,
};
use sm3::{Digest, Sm3};

/// Type which represents distinguishing identifiers.
pub(crate) type DistId = str;

/// Default distinguishing identifier: the 16-byte value conventional in SM2
/// deployments when no identifier has been assigned.
pub const DEFAULT_DIST_ID: &str = "1234567812345678";

/// Compute the user information hash `Z`:
///
/// ```text
/// ZA=H256(ENTLA || IDA || a || b || xG || yG || xA || yA)
/// ```
///
/// `ENTLA` is the 2-byte big-endian bit length of the identifier; all curve
/// coordinates are hashed in fixed-width 32-byte big-endian form.
pub(crate) fn hash_z(distid: &DistId, public_key: &PublicKey) -> Result<Hash> {
    let entla: u16 = distid
        .len()
        .checked_mul(8)
        .and_then(|l| l.try_into().ok())
        .ok_or(Error::IdentityTooLong)?;

    let params = CurveParams::sm2();
    let mut sm3 = Sm3::new();
    sm3.update(entla.to_be_bytes());
    sm3.update(distid);
    sm3.update(encoding::be_bytes_32(&params.a));
    sm3.update(encoding::be_bytes_32(&params.b));
    sm3.update(encoding::be_bytes_32(&params.gx));
    sm3.update(encoding::be_bytes_32(&params.gy));
    sm3.update(encoding::be_bytes_32(public_key.x()));
    sm3.update(encoding::be_bytes_32(public_key.y()));
    Ok(sm3.finalize())
}
