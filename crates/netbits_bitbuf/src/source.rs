use netbits_buffer::SharedBuffer;

use crate::common::{get_bits, Cursor};
use crate::{BitError, Result};

/// unpacks integer fields of 1 to 64 bits out of bytes, in the order a
/// [`BitSink`](crate::BitSink) packed them.
///
/// every read is checked against the remaining bits before the storage is touched; a failed
/// read leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct BitSource<B> {
    buf: B,
    cursor: Cursor,
    bits_remaining: usize,
}

/// a source that holds a handle to its data, independent of where the data came from.
pub type OwningBitSource = BitSource<SharedBuffer>;

/// a source over borrowed memory.
pub type FixedBitSource<'a> = BitSource<&'a [u8]>;

impl BitSource<SharedBuffer> {
    pub fn new(buf: SharedBuffer) -> Self {
        Self::with_backing(buf)
    }

    /// copies `data` into a buffer owned by the source.
    pub fn copy_from_slice(data: &[u8]) -> Self {
        Self::with_backing(SharedBuffer::copy_from_slice(data))
    }
}

impl From<SharedBuffer> for BitSource<SharedBuffer> {
    fn from(buf: SharedBuffer) -> Self {
        Self::new(buf)
    }
}

impl From<Vec<u8>> for BitSource<SharedBuffer> {
    fn from(data: Vec<u8>) -> Self {
        Self::new(SharedBuffer::new(data))
    }
}

impl From<&str> for BitSource<SharedBuffer> {
    fn from(data: &str) -> Self {
        Self::new(SharedBuffer::from(data))
    }
}

impl<'a> BitSource<&'a [u8]> {
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_backing(data)
    }
}

impl<B: AsRef<[u8]>> BitSource<B> {
    fn with_backing(buf: B) -> Self {
        let bits_remaining = buf.as_ref().len() << 3;
        Self {
            buf,
            cursor: Cursor::new(),
            bits_remaining,
        }
    }

    #[must_use]
    #[inline]
    pub fn into_inner(self) -> B {
        self.buf
    }

    #[must_use]
    #[inline(always)]
    pub fn bits_remaining(&self) -> usize {
        self.bits_remaining
    }

    /// whole bytes left to read; a trailing partial byte doesn't count.
    #[must_use]
    #[inline(always)]
    pub fn bytes_remaining(&self) -> usize {
        self.bits_remaining >> 3
    }

    #[must_use]
    #[inline(always)]
    pub fn bits_read(&self) -> usize {
        self.cursor.bit_offset()
    }

    #[must_use]
    #[inline(always)]
    pub fn is_aligned(&self) -> bool {
        self.cursor.is_aligned()
    }

    fn read_bits(&mut self, num_bits: u32, max: u32) -> Result<u64> {
        if num_bits > max {
            return Err(BitError::TooWide {
                requested: num_bits,
                max,
            });
        }
        if num_bits as usize > self.bits_remaining {
            return Err(BitError::Overflow);
        }

        let value = get_bits(self.buf.as_ref(), &mut self.cursor, num_bits);
        self.bits_remaining -= num_bits as usize;
        Ok(value)
    }

    // the narrowing casts below can't lose bits: read_bits never returns more than `max` bits.

    pub fn read_u8(&mut self, num_bits: u32) -> Result<u8> {
        self.read_bits(num_bits, u8::BITS).map(|v| v as u8)
    }

    pub fn read_u16(&mut self, num_bits: u32) -> Result<u16> {
        self.read_bits(num_bits, u16::BITS).map(|v| v as u16)
    }

    pub fn read_u32(&mut self, num_bits: u32) -> Result<u32> {
        self.read_bits(num_bits, u32::BITS).map(|v| v as u32)
    }

    pub fn read_u64(&mut self, num_bits: u32) -> Result<u64> {
        self.read_bits(num_bits, u64::BITS)
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        self.read_bits(1, 1).map(|v| v == 1)
    }

    /// fills `buf` with the next `buf.len()` bytes. only allowed on a byte boundary.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        let start = self.check_bytes(buf.len())?;
        buf.copy_from_slice(&self.buf.as_ref()[start..start + buf.len()]);
        self.advance_bytes(buf.len());
        Ok(())
    }

    pub fn skip_bits(&mut self, num_bits: usize) -> Result<()> {
        if num_bits > self.bits_remaining {
            return Err(BitError::Overflow);
        }
        self.cursor.skip_bits(num_bits);
        self.bits_remaining -= num_bits;
        Ok(())
    }

    /// only allowed on a byte boundary.
    pub fn skip_bytes(&mut self, num_bytes: usize) -> Result<()> {
        self.check_bytes(num_bytes)?;
        self.advance_bytes(num_bytes);
        Ok(())
    }

    /// returns the byte under the cursor without consuming anything, or `None` once the data is
    /// exhausted.
    ///
    /// when the cursor is mid-byte, the already consumed high bits are included.
    #[must_use]
    #[inline]
    pub fn peek_byte(&self) -> Option<u8> {
        if self.bits_remaining == 0 {
            return None;
        }
        self.buf.as_ref().get(self.cursor.byte_pos).copied()
    }

    fn check_bytes(&self, num_bytes: usize) -> Result<usize> {
        if !self.cursor.is_aligned() {
            return Err(BitError::Unaligned);
        }
        if num_bytes > self.bytes_remaining() {
            return Err(BitError::Overflow);
        }
        Ok(self.cursor.byte_pos)
    }

    fn advance_bytes(&mut self, num_bytes: usize) {
        self.cursor.skip_bytes(num_bytes);
        self.bits_remaining -= num_bytes << 3;
    }
}
