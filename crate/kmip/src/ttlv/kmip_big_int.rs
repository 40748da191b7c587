use std::fmt;

use num_bigint_dig::{BigInt, Sign};

use crate::{KmipError, error::result::KmipResult};

/// An arbitrary precision integer with the KMIP Big Integer encoding.
///
/// Big Integers are encoded as a sequence of eight-bit bytes, in two's
/// complement notation, transmitted big-endian. If the length of the sequence
/// is not a multiple of eight bytes, it is padded with the minimal number of
/// leading sign-extended bytes. These padding bytes are part of the value and
/// are counted in the item length.
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct KmipBigInt(BigInt);

impl From<BigInt> for KmipBigInt {
    fn from(big_int: BigInt) -> Self {
        Self(big_int)
    }
}

impl From<KmipBigInt> for BigInt {
    fn from(val: KmipBigInt) -> Self {
        val.0
    }
}

impl From<i64> for KmipBigInt {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<i128> for KmipBigInt {
    fn from(value: i128) -> Self {
        Self(BigInt::from(value))
    }
}

impl KmipBigInt {
    /// Two's complement big-endian bytes, sign-extended to a multiple of 8.
    #[must_use]
    pub fn to_bytes_be(&self) -> Vec<u8> {
        let mut bytes = self.0.to_signed_bytes_be();
        let len = bytes.len();
        if len % 8 != 0 {
            let padding = 8 - len % 8;
            let mut padded_bytes = match self.0.sign() {
                Sign::Minus => vec![255_u8; padding],
                Sign::NoSign | Sign::Plus => vec![0_u8; padding],
            };
            padded_bytes.append(&mut bytes);
            padded_bytes
        } else {
            bytes
        }
    }

    #[must_use]
    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self(BigInt::from_signed_bytes_be(bytes))
    }

    /// `0x` followed by the upper-case hex of the padded encoding.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode_upper(self.to_bytes_be()))
    }

    /// Parse a `0x` prefixed two's complement hex string.
    pub fn from_hex(s: &str) -> KmipResult<Self> {
        let hex_str = s.strip_prefix("0x").ok_or_else(|| {
            KmipError::InvalidArgument(format!(
                "invalid KMIP Big Integer string {s}: it must start with '0x'"
            ))
        })?;
        // tolerate an odd number of digits by restoring the leading nibble
        let bytes = if hex_str.len() % 2 == 1 {
            hex::decode(format!("0{hex_str}"))?
        } else {
            hex::decode(hex_str)?
        };
        Ok(Self::from_bytes_be(&bytes))
    }
}

impl fmt::Display for KmipBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
