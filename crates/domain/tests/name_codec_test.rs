use keystone_dns_domain::name::{decode, encode, MAX_NAME_LEN};
use keystone_dns_domain::DnsError;

#[test]
fn test_round_trip() {
    for name in [
        "test.izk",
        "www.example.com",
        "a",
        "a.b.c.d.e.f",
        "xn--nxasmq6b.example",
    ] {
        let wire = encode(name).unwrap();
        let (decoded, consumed) = decode(&wire, 0).unwrap();
        assert_eq!(decoded, name);
        assert_eq!(consumed, wire.len());
    }
}

#[test]
fn test_max_label_round_trips() {
    let label = "a".repeat(63);
    let name = format!("{}.example", label);
    let wire = encode(&name).unwrap();
    let (decoded, _) = decode(&wire, 0).unwrap();
    assert_eq!(decoded, name);
}

#[test]
fn test_high_byte_labels_round_trip() {
    // Wire labels are raw octets, one char per byte in the string form.
    let wire = [0x01, 0xFF, 0x00];
    let (name, consumed) = decode(&wire, 0).unwrap();
    assert_eq!(name, "\u{ff}");
    assert_eq!(consumed, 3);
    assert_eq!(encode(&name).unwrap(), wire);

    let name = "h\u{e9}llo.example";
    let wire = encode(name).unwrap();
    assert_eq!(wire[0], 5);
    assert_eq!(wire[2], 0xE9);
    let (decoded, _) = decode(&wire, 0).unwrap();
    assert_eq!(decoded, name);
}

#[test]
fn test_multi_byte_char_rejected() {
    // U+4E2D has no single-byte form, so no wire name can decode to it.
    assert!(matches!(encode("\u{4e2d}.example"), Err(DnsError::Format(_))));
}

#[test]
fn test_oversized_label_rejected() {
    let name = format!("{}.example", "a".repeat(64));
    assert!(matches!(encode(&name), Err(DnsError::Format(_))));
}

#[test]
fn test_oversized_name_rejected() {
    // Four 62-byte labels encode to 4 * 63 + 1 = 253 bytes, fine.
    // Five push the wire form past 255.
    let label = "b".repeat(62);
    let ok = vec![label.as_str(); 4].join(".");
    assert!(encode(&ok).is_ok());

    let too_long = vec![label.as_str(); 5].join(".");
    assert!(matches!(encode(&too_long), Err(DnsError::Format(_))));
}

#[test]
fn test_empty_interior_label_rejected() {
    assert!(matches!(encode("foo..bar"), Err(DnsError::Format(_))));
    assert!(matches!(encode(".foo"), Err(DnsError::Format(_))));
}

#[test]
fn test_decode_missing_terminator() {
    // Label claims 4 bytes but the terminator never comes.
    let wire = b"\x04test";
    assert!(matches!(decode(wire, 0), Err(DnsError::Format(_))));
}

#[test]
fn test_decode_label_past_end() {
    let wire = b"\x0Ashort\x00";
    assert!(matches!(decode(wire, 0), Err(DnsError::Format(_))));
}

#[test]
fn test_decode_rejects_compression_pointer() {
    let wire = [0xC0, 0x0C];
    assert!(matches!(decode(&wire, 0), Err(DnsError::Format(_))));
}

#[test]
fn test_decode_rejects_oversized_wire_name() {
    // 64-byte labels are expressible in a raw length byte only with the
    // reserved high bits, which decode refuses.
    let wire = [0x7F, 0x00];
    assert!(matches!(decode(&wire, 0), Err(DnsError::Format(_))));

    // A name whose wire form exceeds 255 bytes in total.
    let mut long = Vec::new();
    for _ in 0..5 {
        long.push(62);
        long.extend_from_slice(&[b'c'; 62]);
    }
    long.push(0);
    assert!(long.len() > MAX_NAME_LEN);
    assert!(matches!(decode(&long, 0), Err(DnsError::Format(_))));
}
