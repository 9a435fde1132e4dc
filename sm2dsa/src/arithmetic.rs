//! Group operations on the SM2 elliptic curve.
//!
//! Curve parameters can be found in [draft-shen-sm2-ecdsa Appendix D]:
//! Recommended Parameters.
//!
//! [draft-shen-sm2-ecdsa Appendix D]: https://datatracker.ietf.org/doc/html/draft-shen-sm2-ecdsa-02#appendix-D

pub(crate) mod field;
mod point;

pub use self::point::Point;

use num_bigint::BigUint;
use std::sync::OnceLock;

/// Field modulus `p` serialized as hexadecimal.
const MODULUS_HEX: &str = "fffffffeffffffffffffffffffffffffffffffff00000000ffffffffffffffff";

/// Curve coefficient `a = -3 (mod p)` serialized as hexadecimal.
const EQUATION_A_HEX: &str = "fffffffeffffffffffffffffffffffffffffffff00000000fffffffffffffffc";

/// Curve coefficient `b` serialized as hexadecimal.
const EQUATION_B_HEX: &str = "28e9fa9e9d9f5e344d5a9e4bcf6509a7f39789f515ab8f92ddbcbd414d940e93";

/// Order of SM2's elliptic curve group (i.e. scalar modulus) serialized as
/// hexadecimal.
const ORDER_HEX: &str = "fffffffeffffffffffffffffffffffff7203df6b21c6052b53bbf40939d54123";

/// Base point x-coordinate serialized as hexadecimal.
const GENERATOR_X_HEX: &str = "32c4ae2c1f1981195f9904466a39c9948fe30bbff2660be1715a4589334c74c7";

/// Base point y-coordinate serialized as hexadecimal.
const GENERATOR_Y_HEX: &str = "bc3736a2f4f6779c59bdcee36b692153d0a9877cc62a474002df32e52139f0a0";

/// SM2 curve parameters.
///
/// The curve `y² = x³ + ax + b` over the prime field `Fp`, with base point
/// `G = (gx, gy)` of order `n`. The parameters are fixed process-wide; there
/// is no curve agility.
#[derive(Debug)]
pub struct CurveParams {
    /// Field modulus `p`.
    pub p: BigUint,
    /// Curve coefficient `a`.
    pub a: BigUint,
    /// Curve coefficient `b`.
    pub b: BigUint,
    /// Order `n` of the base point.
    pub n: BigUint,
    /// Base point x-coordinate.
    pub gx: BigUint,
    /// Base point y-coordinate.
    pub gy: BigUint,
    /// Cofactor `h`.
    pub h: u32,
}

impl CurveParams {
    /// The recommended SM2 parameters.
    pub fn sm2() -> &'static Self {
        static PARAMS: OnceLock<CurveParams> = OnceLock::new();
        PARAMS.get_or_init(|| CurveParams {
            p: uint(MODULUS_HEX),
            a: uint(EQUATION_A_HEX),
            b: uint(EQUATION_B_HEX),
            n: uint(ORDER_HEX),
            gx: uint(GENERATOR_X_HEX),
            gy: uint(GENERATOR_Y_HEX),
            h: 1,
        })
    }

    /// Base point `G`.
    pub fn generator(&self) -> Point {
        Point::Affine {
            x: self.gx.clone(),
            y: self.gy.clone(),
        }
    }
}

fn uint(hex: &str) -> BigUint {
    BigUint::parse_bytes(hex.as_bytes(), 16).expect("curve constant is valid hex")
}
