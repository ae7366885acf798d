// EXTRA_MASKS[n] keeps the low n bits of a value.
pub(crate) const EXTRA_MASKS: [u64; 65] = {
    let mut extra_masks = [0; 65];
    let mut mask_bit = 0;
    while mask_bit < 65 {
        extra_masks[mask_bit] = if mask_bit == 64 {
            u64::MAX
        } else {
            (1 << mask_bit) - 1
        };
        mask_bit += 1;
    }
    extra_masks
};

/// position of a stream inside its buffer.
///
/// bits within a byte are consumed from the most significant one down, so `bits_avail` counts
/// down from 8. it never stays at 0: the byte position advances and it snaps back to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    pub(crate) byte_pos: usize,
    pub(crate) bits_avail: u32,
}

impl Cursor {
    pub(crate) const fn new() -> Self {
        Self {
            byte_pos: 0,
            bits_avail: 8,
        }
    }

    #[inline(always)]
    pub(crate) fn is_aligned(&self) -> bool {
        self.bits_avail == 8
    }

    /// number of bits in front of the cursor.
    #[inline(always)]
    pub(crate) fn bit_offset(&self) -> usize {
        (self.byte_pos << 3) + (8 - self.bits_avail) as usize
    }

    /// number of bytes touched so far; a partially filled byte counts.
    #[inline(always)]
    pub(crate) fn bytes_touched(&self) -> usize {
        self.byte_pos + usize::from(!self.is_aligned())
    }

    // n must not exceed bits_avail.
    #[inline(always)]
    fn consume(&mut self, n: u32) {
        debug_assert!(n <= self.bits_avail);
        self.bits_avail -= n;
        if self.bits_avail == 0 {
            self.bits_avail = 8;
            self.byte_pos += 1;
        }
    }

    pub(crate) fn skip_bits(&mut self, n: usize) {
        let offset = self.bit_offset() + n;
        self.byte_pos = offset >> 3;
        self.bits_avail = 8 - (offset & 7) as u32;
    }

    pub(crate) fn skip_bytes(&mut self, n: usize) {
        debug_assert!(self.is_aligned());
        self.byte_pos += n;
    }
}

/// packs the low `n` bits of `value` into `buf` at the cursor, most significant bit first.
///
/// the caller checks that `buf` has room for `n` more bits. bits already present in a partially
/// filled byte are preserved; the unwritten remainder of `buf` must be zero.
pub(crate) fn put_bits(buf: &mut [u8], cursor: &mut Cursor, value: u64, n: u32) {
    debug_assert!(n <= 64);
    debug_assert!(cursor.bit_offset() + n as usize <= buf.len() << 3);

    let value = value & EXTRA_MASKS[n as usize];

    // whole bytes on a byte boundary go out in network order.
    if cursor.is_aligned() && n & 7 == 0 {
        let len = (n >> 3) as usize;
        let bytes = value.to_be_bytes();
        buf[cursor.byte_pos..cursor.byte_pos + len].copy_from_slice(&bytes[8 - len..]);
        cursor.byte_pos += len;
        return;
    }

    let mut bits_left = n;
    while bits_left > 0 {
        let chunk = bits_left.min(cursor.bits_avail);
        // bits that still belong to later bytes
        let overflow = bits_left - chunk;
        let bits = ((value >> overflow) & EXTRA_MASKS[chunk as usize]) as u8;
        buf[cursor.byte_pos] |= bits << (cursor.bits_avail - chunk);

        bits_left -= chunk;
        cursor.consume(chunk);
    }
}

/// unpacks `n` bits from `buf` at the cursor, most significant bit first.
///
/// the caller checks that `buf` holds `n` more bits.
pub(crate) fn get_bits(buf: &[u8], cursor: &mut Cursor, n: u32) -> u64 {
    debug_assert!(n <= 64);
    debug_assert!(cursor.bit_offset() + n as usize <= buf.len() << 3);

    if cursor.is_aligned() && n & 7 == 0 {
        let len = (n >> 3) as usize;
        let value = buf[cursor.byte_pos..cursor.byte_pos + len]
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
        cursor.byte_pos += len;
        return value;
    }

    let mut value = 0u64;
    let mut bits_left = n;
    while bits_left > 0 {
        let chunk = bits_left.min(cursor.bits_avail);
        let shift = cursor.bits_avail - chunk;
        let bits = u64::from(buf[cursor.byte_pos] >> shift) & EXTRA_MASKS[chunk as usize];
        value = (value << chunk) | bits;

        bits_left -= chunk;
        cursor.consume(chunk);
    }
    value
}
