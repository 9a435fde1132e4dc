//! Persisted text formats for keys and signatures.
//!
//! These line-oriented layouts are the interchange surface with the
//! file-management front end and are preserved byte-for-byte:
//!
//! - the private-key file holds a single canonical hex line
//!   ([`SecretKey::to_hex`]);
//! - a keypair export block carries three tagged lines (private key and the
//!   two public-key coordinates);
//! - a `.sig` signature record carries seven tagged lines: original file
//!   name, file size, signing time, `r`, `s`, and the two public-key
//!   coordinates.
//!
//! Emission is exact; parsing is strict and fails with
//! [`Error::MalformedInput`] on any missing or malformed field.

use crate::{
    dsa::Signature,
    error::{Error, Result},
    keys::{PublicKey, SecretKey},
};
use chrono::NaiveDateTime;

const TAG_SECRET: &str = "私钥";
const TAG_PUBLIC_X: &str = "公钥X";
const TAG_PUBLIC_Y: &str = "公钥Y";
const TAG_FILE: &str = "原始文件";
const TAG_SIZE: &str = "文件大小";
const TAG_TIME: &str = "签名时间";
const TAG_R: &str = "r";
const TAG_S: &str = "s";

/// Timestamp layout used in signature records.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a keypair export block.
pub fn export_keypair(secret_key: &SecretKey, public_key: &PublicKey) -> String {
    let (x, y) = public_key.to_hex();
    format!(
        "{TAG_SECRET}: {}\n{TAG_PUBLIC_X}: {x}\n{TAG_PUBLIC_Y}: {y}\n",
        secret_key.to_hex()
    )
}

/// Recover the secret key from a keypair export block.
///
/// Only the private-key line is consulted; the public key is rederived from
/// the recovered scalar, so a tampered coordinate line cannot smuggle in a
/// mismatched public key.
pub fn import_keypair(block: &str) -> Result<SecretKey> {
    for line in block.lines() {
        if let Some(value) = tagged_value(line, TAG_SECRET) {
            return SecretKey::from_hex(value);
        }
    }

    Err(Error::MalformedInput)
}

/// A signature record: the signature plus the signer's public key and the
/// signed file's metadata, as persisted in `.sig` files.
#[derive(Clone, Debug)]
pub struct SignatureRecord {
    /// Name of the signed file.
    pub file_name: String,

    /// Size of the signed file in bytes.
    pub file_size: u64,

    /// Local time the signature was produced.
    pub signed_at: NaiveDateTime,

    /// The signature itself.
    pub signature: Signature,

    /// Public key to verify against.
    pub public_key: PublicKey,
}

impl SignatureRecord {
    /// Render the record in its seven-line persisted layout.
    pub fn to_text(&self) -> String {
        let (r, s) = self.signature.to_hex();
        let (x, y) = self.public_key.to_hex();
        format!(
            "{TAG_FILE}: {}\n{TAG_SIZE}: {} bytes\n{TAG_TIME}: {}\n\
             {TAG_R}: {r}\n{TAG_S}: {s}\n{TAG_PUBLIC_X}: {x}\n{TAG_PUBLIC_Y}: {y}\n",
            self.file_name,
            self.file_size,
            self.signed_at.format(TIME_FORMAT),
        )
    }

    /// Parse a persisted record. All seven lines must be present and
    /// well-formed.
    pub fn parse(text: &str) -> Result<Self> {
        let mut file_name = None;
        let mut file_size = None;
        let mut signed_at = None;
        let mut r = None;
        let mut s = None;
        let mut x = None;
        let mut y = None;

        for line in text.lines() {
            if let Some(value) = tagged_value(line, TAG_FILE) {
                file_name = Some(value.to_owned());
            } else if let Some(value) = tagged_value(line, TAG_SIZE) {
                let bytes = value.strip_suffix(" bytes").ok_or(Error::MalformedInput)?;
                file_size = Some(bytes.parse::<u64>().map_err(|_| Error::MalformedInput)?);
            } else if let Some(value) = tagged_value(line, TAG_TIME) {
                let parsed = NaiveDateTime::parse_from_str(value, TIME_FORMAT)
                    .map_err(|_| Error::MalformedInput)?;
                signed_at = Some(parsed);
            } else if let Some(value) = tagged_value(line, TAG_R) {
                r = Some(value.to_owned());
            } else if let Some(value) = tagged_value(line, TAG_S) {
                s = Some(value.to_owned());
            } else if let Some(value) = tagged_value(line, TAG_PUBLIC_X) {
                x = Some(value.to_owned());
            } else if let Some(value) = tagged_value(line, TAG_PUBLIC_Y) {
                y = Some(value.to_owned());
            }
        }

        let (
            Some(file_name),
            Some(file_size),
            Some(signed_at),
            Some(r),
            Some(s),
            Some(x),
            Some(y),
        ) = (file_name, file_size, signed_at, r, s, x, y)
        else {
            return Err(Error::MalformedInput);
        };

        Ok(Self {
            file_name,
            file_size,
            signed_at,
            signature: Signature::from_hex(&r, &s)?,
            public_key: PublicKey::from_hex(&x, &y)?,
        })
    }
}

/// `"<tag>: <value>"` accessor, tolerating surrounding whitespace in the
/// value.
fn tagged_value<'a>(line: &'a str, tag: &str) -> Option<&'a str> {
    line.strip_prefix(tag)?
        .strip_prefix(':')
        .map(|value| value.trim())
}
