//! `#RRGGBB` hex codec
//!
//! The only wire format in the crate. Input is accepted in either case;
//! output always uses uppercase digits.

use tracing::debug;

use crate::color::Irgb;
use crate::error::{Channel, Error, Result};

/// Length of a hex color including the `#` prefix
pub const HEX_LEN: usize = 7;

const DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Check that `hex` is `#` followed by exactly 6 hex digits (either case)
pub fn hex_valid(hex: &str) -> bool {
    let bytes = hex.as_bytes();
    bytes.len() == HEX_LEN && bytes[0] == b'#' && bytes[1..].iter().all(u8::is_ascii_hexdigit)
}

/// Parse `#RRGGBB` into integer channels
pub fn parse(hex: &str) -> Result<Irgb> {
    if !hex_valid(hex) {
        debug!(hex, "rejected malformed hex color");
        return Err(Error::Format(hex.to_string()));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map(i32::from)
            .map_err(|_| Error::Format(hex.to_string()))
    };

    Ok(Irgb::new(channel(1)?, channel(3)?, channel(5)?))
}

/// Format integer channels as `#RRGGBB`
///
/// Channels are checked in R, G, B order; the first one outside 0-255 is
/// reported.
pub fn format(rgb: Irgb) -> Result<String> {
    let mut bytes = [0u8; 3];
    for ((channel, value), out) in Channel::ALL.into_iter().zip(rgb.to_array()).zip(&mut bytes) {
        *out = u8::try_from(value).map_err(|_| {
            debug!(%channel, value, "integer channel out of hex range");
            Error::Range { channel, value }
        })?;
    }
    Ok(format_u8(bytes))
}

/// Format 8-bit channels as `#RRGGBB` (infallible)
pub fn format_u8(rgb: [u8; 3]) -> String {
    let mut out = String::with_capacity(HEX_LEN);
    out.push('#');
    for byte in rgb {
        out.push(DIGITS[(byte >> 4) as usize] as char);
        out.push(DIGITS[(byte & 0x0F) as usize] as char);
    }
    out
}
