use core::fmt;
use core::ops::Deref;
use std::sync::Arc;

/// an immutable, reference-counted run of bytes.
///
/// clones share the same storage; the last holder frees it. the contents are never mutated in
/// place, anything that needs to write must copy out first (see [`SharedBuffer::to_vec`]).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SharedBuffer {
    data: Arc<[u8]>,
}

impl SharedBuffer {
    /// takes ownership of `data`.
    pub fn new(data: Vec<u8>) -> Self {
        Self { data: data.into() }
    }

    /// allocates a new buffer holding a copy of `data`, independent of its lifetime.
    pub fn copy_from_slice(data: &[u8]) -> Self {
        Self { data: data.into() }
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// number of live handles to the underlying storage.
    #[must_use]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.data)
    }

    /// copies the contents out into a vector that can be mutated freely.
    #[must_use]
    pub fn to_vec(&self) -> Vec<u8> {
        self.data.to_vec()
    }
}

impl Default for SharedBuffer {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Deref for SharedBuffer {
    type Target = [u8];

    #[inline]
    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for SharedBuffer {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl From<Vec<u8>> for SharedBuffer {
    fn from(data: Vec<u8>) -> Self {
        Self::new(data)
    }
}

impl From<&[u8]> for SharedBuffer {
    fn from(data: &[u8]) -> Self {
        Self::copy_from_slice(data)
    }
}

impl From<&str> for SharedBuffer {
    fn from(data: &str) -> Self {
        Self::copy_from_slice(data.as_bytes())
    }
}

impl From<String> for SharedBuffer {
    fn from(data: String) -> Self {
        Self::new(data.into_bytes())
    }
}

impl fmt::Debug for SharedBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedBuffer({}; ", self.len())?;
        for byte in self.data.iter() {
            write!(f, "{byte:02x}")?;
        }
        f.write_str(")")
    }
}
