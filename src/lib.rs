#[cfg(feature = "bitbuf")]
pub use netbits_bitbuf as bitbuf;

#[cfg(feature = "buffer")]
pub use netbits_buffer as buffer;
