#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitError {
    #[error("was about to overrun a buffer")]
    Overflow,
    #[error("cursor is not on a byte boundary")]
    Unaligned,
    #[error("can't fit {requested} bits into a {max}-bit value")]
    TooWide { requested: u32, max: u32 },
}

pub type Result<T, E = BitError> = core::result::Result<T, E>;
