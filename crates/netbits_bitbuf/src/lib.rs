//! msb-first bit packing over byte buffers.
//!
//! [`BitSink`] writes fields of 1 to 64 bits, [`BitSource`] reads them back in the same order.
//! multi-byte fields that start on a byte boundary are laid out most significant byte first
//! (network order), so the output lines up with the usual way wire headers are drawn.
//!
//! both come in an owning and a borrowing flavour:
//!
//! - [`GrowableBitSink`] owns a `Vec<u8>` and grows it on demand.
//! - [`FixedBitSink`] writes into caller memory and rejects writes that don't fit.
//! - [`OwningBitSource`] reads from a [`SharedBuffer`].
//! - [`FixedBitSource`] reads from a borrowed slice.
//!
//! ```
//! use netbits_bitbuf::{GrowableBitSink, OwningBitSource};
//!
//! let mut sink = GrowableBitSink::with_capacity(2);
//! sink.write(2, 2)?;
//! sink.write(96, 7)?;
//! sink.write(257, 16)?;
//!
//! let mut src = OwningBitSource::new(sink.snapshot());
//! assert_eq!(src.read_u8(2)?, 2);
//! assert_eq!(src.read_u8(7)?, 96);
//! assert_eq!(src.read_u16(16)?, 257);
//! # Ok::<(), netbits_bitbuf::BitError>(())
//! ```

mod backing;
mod common;
mod error;
mod sink;
mod source;

pub use backing::SinkBacking;
pub use error::{BitError, Result};
pub use netbits_buffer::SharedBuffer;
pub use sink::{BitSink, FixedBitSink, GrowableBitSink, DEFAULT_CAPACITY};
pub use source::{BitSource, FixedBitSource, OwningBitSource};
