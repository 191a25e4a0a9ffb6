//! Wire codec for domain names: dotted strings to and from RFC 1035
//! length-prefixed label sequences.

use crate::errors::DnsError;

/// Longest single label allowed on the wire (RFC 1035 §3.1).
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded name, terminator included (RFC 1035 §3.1).
pub const MAX_NAME_LEN: usize = 255;

/// Decodes a label sequence starting at `start`, returning the dotted
/// name (no trailing dot) and the number of bytes consumed.
///
/// Compression pointers are rejected: this codec never emits them, and
/// following one silently would mis-read any message that used one.
pub fn decode(buf: &[u8], start: usize) -> Result<(String, usize), DnsError> {
    let mut pos = start;
    let mut name = String::new();

    loop {
        let len_byte = *buf
            .get(pos)
            .ok_or_else(|| DnsError::Format("name runs past end of buffer".to_string()))?;
        pos += 1;

        if len_byte == 0 {
            break;
        }
        if len_byte & 0xC0 == 0xC0 {
            return Err(DnsError::Format(
                "compression pointers are not supported".to_string(),
            ));
        }
        let len = len_byte as usize;
        if len > MAX_LABEL_LEN {
            return Err(DnsError::Format(format!(
                "label length {} exceeds {} bytes",
                len, MAX_LABEL_LEN
            )));
        }
        if pos + len > buf.len() {
            return Err(DnsError::Format(
                "label runs past end of buffer".to_string(),
            ));
        }
        if pos + len + 1 - start > MAX_NAME_LEN {
            return Err(DnsError::Format(format!(
                "encoded name exceeds {} bytes",
                MAX_NAME_LEN
            )));
        }

        if !name.is_empty() {
            name.push('.');
        }
        for &b in &buf[pos..pos + len] {
            name.push(b as char);
        }
        pos += len;
    }

    Ok((name, pos - start))
}

/// Encodes a dotted name as `[len][bytes]...` labels plus the zero
/// terminator. The empty name encodes as the bare root.
///
/// Each label char becomes exactly one wire byte, the inverse of the
/// byte-per-char read in [`decode`]; chars above U+00FF have no
/// single-byte form and are a `Format` error.
pub fn encode(name: &str) -> Result<Vec<u8>, DnsError> {
    let mut out = Vec::with_capacity(name.len() + 2);

    if !name.is_empty() {
        for label in name.split('.') {
            if label.is_empty() {
                return Err(DnsError::Format(format!("empty label in name '{}'", name)));
            }
            if label.chars().count() > MAX_LABEL_LEN {
                return Err(DnsError::Format(format!(
                    "label '{}' exceeds {} bytes",
                    label, MAX_LABEL_LEN
                )));
            }
            out.push(label.chars().count() as u8);
            for c in label.chars() {
                let code = c as u32;
                if code > 0xFF {
                    return Err(DnsError::Format(format!(
                        "label '{}' contains a character with no single-byte encoding",
                        label
                    )));
                }
                out.push(code as u8);
            }
        }
    }
    out.push(0);

    if out.len() > MAX_NAME_LEN {
        return Err(DnsError::Format(format!(
            "encoded name '{}' exceeds {} bytes",
            name, MAX_NAME_LEN
        )));
    }
    Ok(out)
}
