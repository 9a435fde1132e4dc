#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
    clippy::implicit_saturating_sub,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

pub mod dsa;
pub mod record;

mod arithmetic;
mod distid;
mod encoding;
mod error;
mod keys;

pub use num_bigint;

pub use crate::{
    arithmetic::{CurveParams, Point},
    distid::DEFAULT_DIST_ID,
    encoding::{hex_decode, hex_encode},
    error::{Error, Result},
    keys::{PublicKey, SecretKey},
};

/// SM3 hash output.
type Hash = sm3::digest::Output<sm3::Sm3>;
