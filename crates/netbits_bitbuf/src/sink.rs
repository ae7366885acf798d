use netbits_buffer::SharedBuffer;

use crate::common::{put_bits, Cursor};
use crate::{BitError, BitSource, Result, SinkBacking};

/// initial capacity, in bytes, of a [`GrowableBitSink`] made with [`GrowableBitSink::new`].
pub const DEFAULT_CAPACITY: usize = 1024;

/// packs integer fields of 1 to 64 bits into bytes, most significant bit first.
///
/// what happens when the storage runs out of room depends on `B`, see [`GrowableBitSink`] and
/// [`FixedBitSink`]. every failed operation leaves both the cursor and the storage untouched.
#[derive(Debug)]
pub struct BitSink<B> {
    buf: B,
    cursor: Cursor,
}

/// a sink that owns its storage and reallocates when it fills up. writes never fail for lack
/// of space.
pub type GrowableBitSink = BitSink<Vec<u8>>;

/// a sink over caller memory of fixed size. writes that don't fit are rejected with
/// [`BitError::Overflow`].
pub type FixedBitSink<'a> = BitSink<&'a mut [u8]>;

impl BitSink<Vec<u8>> {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_vec(vec![0; capacity])
    }

    /// reuses the allocation of `buf`. its contents are zeroed, its length becomes the initial
    /// capacity.
    pub fn from_vec(mut buf: Vec<u8>) -> Self {
        buf.fill(0);
        Self {
            buf,
            cursor: Cursor::new(),
        }
    }

    /// returns the written bytes, dropping unused capacity.
    #[must_use]
    pub fn into_vec(mut self) -> Vec<u8> {
        self.buf.truncate(self.cursor.bytes_touched());
        self.buf
    }

    #[must_use]
    pub fn into_buffer(self) -> SharedBuffer {
        SharedBuffer::new(self.into_vec())
    }
}

impl Default for BitSink<Vec<u8>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> BitSink<&'a mut [u8]> {
    /// zeroes `buf` and starts writing at its first bit.
    pub fn new(buf: &'a mut [u8]) -> Self {
        buf.fill(0);
        Self {
            buf,
            cursor: Cursor::new(),
        }
    }

    /// rewinds to the start and zeroes the region again, without reallocating.
    pub fn reset(&mut self) {
        self.buf.fill(0);
        self.cursor = Cursor::new();
    }

    #[must_use]
    pub fn into_inner(self) -> &'a mut [u8] {
        self.buf
    }
}

impl<B: SinkBacking> BitSink<B> {
    /// size of the storage in bytes. grows over time for a [`GrowableBitSink`].
    #[must_use]
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.bytes().len()
    }

    /// bits that can still be written before the storage is full (or has to grow).
    #[must_use]
    #[inline]
    pub fn bits_left(&self) -> usize {
        (self.capacity() << 3) - self.cursor.bit_offset()
    }

    #[must_use]
    #[inline]
    pub fn bits_written(&self) -> usize {
        self.cursor.bit_offset()
    }

    /// number of bytes written so far. a partially filled trailing byte counts as used.
    #[must_use]
    #[inline]
    pub fn bytes_used(&self) -> usize {
        self.cursor.bytes_touched()
    }

    #[must_use]
    #[inline]
    pub fn is_aligned(&self) -> bool {
        self.cursor.is_aligned()
    }

    /// writes the low `num_bits` bits of `value`; higher bits are ignored.
    pub fn write(&mut self, value: u32, num_bits: u32) -> Result<()> {
        if num_bits > u32::BITS {
            return Err(BitError::TooWide {
                requested: num_bits,
                max: u32::BITS,
            });
        }
        self.write_u64(u64::from(value), num_bits)
    }

    /// like [`Self::write`], for fields up to 64 bits wide.
    pub fn write_u64(&mut self, value: u64, num_bits: u32) -> Result<()> {
        if num_bits > u64::BITS {
            return Err(BitError::TooWide {
                requested: num_bits,
                max: u64::BITS,
            });
        }
        self.buf.make_room(self.cursor.bit_offset(), num_bits as usize)?;
        put_bits(self.buf.bytes_mut(), &mut self.cursor, value, num_bits);
        Ok(())
    }

    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_u64(u64::from(value), 1)
    }

    /// writes a full byte. on a byte boundary this is a plain store.
    pub fn write_byte(&mut self, value: u8) -> Result<()> {
        self.buf.make_room(self.cursor.bit_offset(), 8)?;
        if self.cursor.is_aligned() {
            self.buf.bytes_mut()[self.cursor.byte_pos] = value;
            self.cursor.skip_bytes(1);
        } else {
            put_bits(self.buf.bytes_mut(), &mut self.cursor, u64::from(value), 8);
        }
        Ok(())
    }

    /// copies `bytes` verbatim. only allowed on a byte boundary.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if !self.cursor.is_aligned() {
            return Err(BitError::Unaligned);
        }
        self.buf.make_room(self.cursor.bit_offset(), bytes.len() << 3)?;

        let start = self.cursor.byte_pos;
        self.buf.bytes_mut()[start..start + bytes.len()].copy_from_slice(bytes);
        self.cursor.skip_bytes(bytes.len());
        Ok(())
    }

    /// moves bytes out of `src` straight into this sink: `byte_count` of them, or everything
    /// left in `src` when `None`. returns how many bytes were moved.
    ///
    /// both cursors must sit on a byte boundary. either the whole amount moves and both cursors
    /// advance, or nothing happens and an error comes back.
    pub fn transfer<S: AsRef<[u8]>>(
        &mut self,
        src: &mut BitSource<S>,
        byte_count: Option<usize>,
    ) -> Result<usize> {
        if !self.cursor.is_aligned() || !src.is_aligned() {
            log::debug!(
                "refusing transfer: sink at bit {}, source has {} bits left",
                self.cursor.bit_offset(),
                src.bits_remaining()
            );
            return Err(BitError::Unaligned);
        }

        let available = src.bytes_remaining();
        let count = byte_count.unwrap_or(available);
        if count > available {
            log::debug!("refusing transfer: {count} bytes requested, source has {available}");
            return Err(BitError::Overflow);
        }
        self.buf.make_room(self.cursor.bit_offset(), count << 3)?;

        let start = self.cursor.byte_pos;
        src.read_bytes(&mut self.buf.bytes_mut()[start..start + count])?;
        self.cursor.skip_bytes(count);
        Ok(count)
    }

    /// the bytes written so far, including a partially filled trailing byte whose unused low
    /// bits are zero.
    ///
    /// the borrow ends before the next write, which may move the storage of a growable sink.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf.bytes()[..self.cursor.bytes_touched()]
    }

    /// copies the bytes written so far into a fresh buffer that doesn't alias the sink.
    #[must_use]
    pub fn snapshot(&self) -> SharedBuffer {
        SharedBuffer::copy_from_slice(self.as_bytes())
    }
}
