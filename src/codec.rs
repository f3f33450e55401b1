//! Conversions between secrets, field elements and serialized shares
//!
//! # Secret encoding
//!
//! A secret's UTF-8 bytes are read as an unsigned little-endian integer. Decoding
//! writes the integer back as exactly [`MAX_LENGTH`] little-endian bytes and strips
//! the trailing NUL padding.
//!
//! # Share formats
//!
//! - Binary: `x || y`, each a [`FIELD_BYTES`]-wide big-endian integer. This is the
//!   plaintext that custodian sealing encrypts.
//! - Text: two decimal lines per share, `x` then `y`. This is the format the CLI
//!   prints and reads.
//!
//! # Examples
//!
//! ```rust
//! use shamir_vault::codec::{decode, encode};
//! use shamir_vault::domain::Secret;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let secret = Secret::new("a@b.com")?;
//! let element = encode(&secret)?;
//! assert_eq!(decode(&element)?, secret);
//! # Ok(())
//! # }
//! ```

use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::domain::{MAX_LENGTH, Secret, Share};
use crate::error::{Error, Result};
use crate::field::{FIELD_BYTES, FieldElement};

/// Size of a binary-encoded share
pub const SHARE_BYTES: usize = 2 * FIELD_BYTES;

/// Encodes a secret as a field element
///
/// # Errors
/// Returns [`Error::Encoding`] if the secret is longer than [`MAX_LENGTH`] bytes or
/// its integer value is not below the modulus
pub fn encode(secret: &Secret) -> Result<FieldElement> {
    let bytes = secret.as_bytes();
    if bytes.len() > MAX_LENGTH {
        return Err(Error::Encoding(format!(
            "secret is {} bytes, maximum is {MAX_LENGTH}",
            bytes.len()
        )));
    }
    FieldElement::new(BigUint::from_bytes_le(bytes))
        .ok_or_else(|| Error::Encoding("secret is not smaller than the field modulus".to_string()))
}

/// Decodes a field element back into a secret
///
/// # Errors
/// Returns [`Error::Decoding`] if the value does not fit in [`MAX_LENGTH`] bytes,
/// is not valid UTF-8, or is empty after removing padding. Any of these usually
/// means the shares were corrupted or fewer than the threshold were supplied.
pub fn decode(element: &FieldElement) -> Result<Secret> {
    let mut bytes = Zeroizing::new(element.as_biguint().to_bytes_le());
    if bytes.len() > MAX_LENGTH {
        return Err(Error::Decoding(format!(
            "value needs {} bytes, maximum is {MAX_LENGTH}",
            bytes.len()
        )));
    }
    bytes.resize(MAX_LENGTH, 0);

    let text = std::str::from_utf8(&bytes)
        .map_err(|e| Error::Decoding(format!("reconstructed bytes are not UTF-8: {e}")))?;
    let text = text.trim_end_matches('\0');
    if text.is_empty() {
        return Err(Error::Decoding("reconstructed secret is empty".to_string()));
    }

    Secret::new(text).map_err(|e| Error::Decoding(e.to_string()))
}

/// Serializes a share as `x || y` in fixed-width big-endian
#[must_use]
pub fn share_to_bytes(share: &Share) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(Vec::with_capacity(SHARE_BYTES));
    out.extend_from_slice(&share.x.to_be_bytes());
    out.extend_from_slice(&share.y.to_be_bytes());
    out
}

/// Parses a share produced by [`share_to_bytes`]
///
/// # Errors
/// Returns [`Error::Decoding`] if the length is wrong, a coordinate is not below
/// the modulus, or `x` is zero
pub fn share_from_bytes(bytes: &[u8]) -> Result<Share> {
    if bytes.len() != SHARE_BYTES {
        return Err(Error::Decoding(format!(
            "share must be {SHARE_BYTES} bytes, got {}",
            bytes.len()
        )));
    }

    let (x_bytes, y_bytes) = bytes.split_at(FIELD_BYTES);
    let x = field_from_slice(x_bytes, "x")?;
    let y = field_from_slice(y_bytes, "y")?;
    if x.is_zero() {
        return Err(Error::Decoding("share x-coordinate is zero".to_string()));
    }
    Ok(Share::new(x, y))
}

fn field_from_slice(bytes: &[u8], name: &str) -> Result<FieldElement> {
    let mut buf = [0u8; FIELD_BYTES];
    buf.copy_from_slice(bytes);
    FieldElement::from_be_bytes(&buf)
        .ok_or_else(|| Error::Decoding(format!("share {name}-coordinate is out of range")))
}

/// Formats shares as decimal text, two lines per share
#[must_use]
pub fn format_shares(shares: &[Share]) -> Zeroizing<String> {
    let mut out = Zeroizing::new(String::new());
    for share in shares {
        out.push_str(&format!("{}\n{}\n", share.x, share.y));
    }
    out
}

/// Parses shares written by [`format_shares`]
///
/// Blank lines and surrounding whitespace are ignored.
///
/// # Errors
/// Returns [`Error::Decoding`] if the number of lines is odd, a line is not a
/// decimal integer, a value is not below the modulus, or `x` is zero
pub fn parse_shares(text: &str) -> Result<Vec<Share>> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() % 2 != 0 {
        return Err(Error::Decoding(format!(
            "expected an x and y line per share, got {} lines",
            lines.len()
        )));
    }

    lines
        .chunks_exact(2)
        .enumerate()
        .map(|(idx, pair)| {
            let x = parse_coordinate(pair[0], idx, "x")?;
            let y = parse_coordinate(pair[1], idx, "y")?;
            if x.is_zero() {
                return Err(Error::Decoding(format!(
                    "share #{} has a zero x-coordinate",
                    idx + 1
                )));
            }
            Ok(Share::new(x, y))
        })
        .collect()
}

fn parse_coordinate(line: &str, idx: usize, name: &str) -> Result<FieldElement> {
    let value = BigUint::parse_bytes(line.as_bytes(), 10).ok_or_else(|| {
        Error::Decoding(format!(
            "share #{} {name}-coordinate is not a decimal integer",
            idx + 1
        ))
    })?;
    FieldElement::new(value).ok_or_else(|| {
        Error::Decoding(format!(
            "share #{} {name}-coordinate is out of range",
            idx + 1
        ))
    })
}
