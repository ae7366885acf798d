use netbits_bitbuf::{BitError, FixedBitSource, OwningBitSource, SharedBuffer};

#[test]
fn test_read_overflow() {
    let buf = [0xffu8; 8];
    let mut r = FixedBitSource::new(&buf);

    assert_eq!(r.read_u64(u64::BITS).unwrap(), u64::MAX);
    assert_eq!(r.read_u8(1), Err(BitError::Overflow));
}

#[test]
fn test_read_multiple_reads() {
    let buf = [0b1011_1000u8];
    let mut r = FixedBitSource::new(&buf);

    assert_eq!(r.read_u8(3).unwrap(), 0b101);
    assert_eq!(r.read_u8(4).unwrap(), 0b1100);
    assert_eq!(r.bits_remaining(), 1);
    assert_eq!(r.bits_read(), 7);
}

#[test]
fn test_read_spanning_bytes() {
    let buf = [0x1a, 0xbc, 0xd0];
    let mut r = FixedBitSource::new(&buf);

    assert_eq!(r.read_u8(4).unwrap(), 1);
    assert_eq!(r.read_u16(16).unwrap(), 0xabcd);
    assert_eq!(r.read_u8(4).unwrap(), 0);
    assert_eq!(r.bits_remaining(), 0);
}

#[test]
fn test_read_network_order() {
    let buf = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
    let mut r = FixedBitSource::new(&buf);

    assert_eq!(r.read_u16(16).unwrap(), 0x0102);
    assert_eq!(r.read_u32(24).unwrap(), 0x03_0405);
    assert_eq!(r.read_u32(24).unwrap(), 0x06_0708);
}

#[test]
fn test_read_too_wide() {
    let buf = [0u8; 16];
    let mut r = FixedBitSource::new(&buf);

    assert_eq!(
        r.read_u8(20),
        Err(BitError::TooWide {
            requested: 20,
            max: 8
        })
    );
    assert!(r.read_u16(17).is_err());
    assert!(r.read_u32(33).is_err());
    assert!(r.read_u64(65).is_err());
    assert_eq!(r.bits_remaining(), 128);
}

#[test]
fn test_read_rejection_leaves_cursor() {
    let buf = [0b1010_0000, 0x55];
    let mut r = FixedBitSource::new(&buf);

    r.skip_bits(3).unwrap();
    assert_eq!(r.read_u16(14), Err(BitError::Overflow));
    assert_eq!(r.bits_remaining(), 13);
    assert_eq!(r.read_u16(13).unwrap(), 0x55);
}

#[test]
fn test_read_bool() {
    let buf = [0b0100_0000];
    let mut r = FixedBitSource::new(&buf);

    assert!(!r.read_bool().unwrap());
    assert!(r.read_bool().unwrap());
}

#[test]
fn test_read_bytes() {
    let buf = [1, 2, 3, 4];
    let mut r = FixedBitSource::new(&buf);
    let mut out = [0u8; 2];

    r.read_bytes(&mut out).unwrap();
    assert_eq!(out, [1, 2]);
    assert_eq!(r.bytes_remaining(), 2);

    r.skip_bits(1).unwrap();
    assert_eq!(r.read_bytes(&mut out), Err(BitError::Unaligned));
    assert_eq!(r.bits_remaining(), 15);

    r.skip_bits(7).unwrap();
    assert_eq!(r.read_bytes(&mut out), Err(BitError::Overflow));
    r.read_bytes(&mut out[..1]).unwrap();
    assert_eq!(out[0], 4);
}

#[test]
fn test_skip() {
    let buf = [0xaa, 0xbb, 0xcc];
    let mut r = FixedBitSource::new(&buf);

    r.skip_bytes(1).unwrap();
    assert_eq!(r.peek_byte(), Some(0xbb));
    r.skip_bits(4).unwrap();
    assert_eq!(r.skip_bytes(1), Err(BitError::Unaligned));
    assert_eq!(r.skip_bits(13), Err(BitError::Overflow));
    r.skip_bits(4).unwrap();
    assert_eq!(r.skip_bytes(2), Err(BitError::Overflow));
    r.skip_bytes(1).unwrap();
    assert_eq!(r.bits_remaining(), 0);
    assert_eq!(r.peek_byte(), None);
}

#[test]
fn test_peek_is_idempotent() {
    let buf = [0x80, 0x42];
    let mut r = FixedBitSource::new(&buf);

    assert_eq!(r.peek_byte(), Some(0x80));
    assert_eq!(r.peek_byte(), Some(0x80));
    assert_eq!(r.bits_remaining(), 16);

    assert!(r.read_bool().unwrap());
    // the consumed high bit is still visible
    assert_eq!(r.peek_byte(), Some(0x80));
    r.skip_bits(7).unwrap();
    assert_eq!(r.peek_byte(), Some(0x42));
    assert_eq!(r.bits_remaining(), 8);
}

#[test]
fn test_empty_source() {
    let mut r = FixedBitSource::new(&[]);

    assert_eq!(r.bits_remaining(), 0);
    assert_eq!(r.peek_byte(), None);
    assert_eq!(r.read_u8(0).unwrap(), 0);
    assert!(r.read_bool().is_err());
    assert!(r.skip_bytes(0).is_ok());
}

#[test]
fn test_owning_shares_buffer() {
    let buf = SharedBuffer::new(vec![0xf0, 0x0f]);
    let mut r = OwningBitSource::new(buf.clone());
    assert_eq!(buf.ref_count(), 2);

    assert_eq!(r.read_u8(4).unwrap(), 0xf);
    assert_eq!(r.read_u8(8).unwrap(), 0);
    assert_eq!(r.read_u8(4).unwrap(), 0xf);

    let inner = r.into_inner();
    assert_eq!(inner, buf);
}

#[test]
fn test_owning_copies_input() {
    let data = vec![0xde, 0xad];
    let mut r = OwningBitSource::copy_from_slice(&data);
    drop(data);

    assert_eq!(r.read_u16(16).unwrap(), 0xdead);
}

#[test]
fn test_owning_from_str() {
    let mut r = OwningBitSource::from("AB");

    assert_eq!(r.bytes_remaining(), 2);
    assert_eq!(r.read_u8(8).unwrap(), b'A');
    assert_eq!(r.peek_byte(), Some(b'B'));
}

#[test]
fn test_owning_clone_reads_independently() {
    let mut a = OwningBitSource::from(vec![0x12, 0x34]);
    a.skip_bits(4).unwrap();
    let mut b = a.clone();

    assert_eq!(a.read_u16(12).unwrap(), 0x234);
    assert_eq!(b.read_u8(4).unwrap(), 0x2);
    assert_eq!(b.bits_remaining(), 8);
}
