use crate::{BitError, Result};

mod sealed {
    pub trait Sealed {}

    impl Sealed for Vec<u8> {}
    impl Sealed for &mut [u8] {}
}

/// storage a [`BitSink`](crate::BitSink) writes into, together with what happens when it runs
/// out of room.
///
/// implemented for `Vec<u8>`, which grows, and for `&mut [u8]`, which refuses.
pub trait SinkBacking: sealed::Sealed {
    fn bytes(&self) -> &[u8];

    fn bytes_mut(&mut self) -> &mut [u8];

    /// makes sure `extra_bits` more bits fit after the first `used_bits` bits. must leave the
    /// storage untouched when it returns an error.
    fn make_room(&mut self, used_bits: usize, extra_bits: usize) -> Result<()>;
}

impl SinkBacking for Vec<u8> {
    #[inline]
    fn bytes(&self) -> &[u8] {
        self
    }

    #[inline]
    fn bytes_mut(&mut self) -> &mut [u8] {
        self
    }

    fn make_room(&mut self, used_bits: usize, extra_bits: usize) -> Result<()> {
        let cap = self.len();
        if (cap << 3) - used_bits >= extra_bits {
            return Ok(());
        }

        // over-allocate so that a run of small writes doesn't reallocate every time.
        let new_cap = (cap << 1).max((cap + extra_bits.div_ceil(8)) << 1);
        log::trace!("growing bit sink from {cap} to {new_cap} bytes");
        self.resize(new_cap, 0);
        Ok(())
    }
}

impl SinkBacking for &mut [u8] {
    #[inline]
    fn bytes(&self) -> &[u8] {
        self
    }

    #[inline]
    fn bytes_mut(&mut self) -> &mut [u8] {
        self
    }

    fn make_room(&mut self, used_bits: usize, extra_bits: usize) -> Result<()> {
        if (self.len() << 3) - used_bits >= extra_bits {
            Ok(())
        } else {
            Err(BitError::Overflow)
        }
    }
}
