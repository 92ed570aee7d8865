use std::{fmt, sync::Arc};

/// Byte storage behind a tensor.
///
/// `Shared` aliases an allocation that other tensors may hold as well; cloning
/// it only bumps a reference count. `Owned` is an exclusive copy.
#[derive(Clone)]
pub enum Buffer {
    Shared(Arc<Vec<u8>>),
    Owned(Vec<u8>),
}

impl Buffer {
    pub fn shared(bytes: Vec<u8>) -> Self {
        Buffer::Shared(Arc::new(bytes))
    }

    pub fn owned(bytes: Vec<u8>) -> Self {
        Buffer::Owned(bytes)
    }

    pub fn zeroed(len: usize) -> Self {
        Buffer::Owned(vec![0u8; len])
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Buffer::Shared(bytes) => bytes.as_slice(),
            Buffer::Owned(bytes) => bytes.as_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Address of the first byte; equal addresses mean the same allocation.
    pub fn as_ptr(&self) -> *const u8 {
        self.as_bytes().as_ptr()
    }

    pub fn is_shared(&self) -> bool {
        matches!(self, Buffer::Shared(_))
    }

    /// Another handle to the same bytes. An owned buffer is first moved into a
    /// shared allocation, without copying, so both handles alias it.
    pub fn alias(&mut self) -> Buffer {
        if let Buffer::Owned(bytes) = self {
            *self = Buffer::Shared(Arc::new(std::mem::take(bytes)));
        }
        self.clone()
    }

    /// Whether writing through [`Buffer::make_mut`] would happen in place.
    pub fn is_unique(&self) -> bool {
        match self {
            Buffer::Shared(bytes) => Arc::strong_count(bytes) == 1 && Arc::weak_count(bytes) == 0,
            Buffer::Owned(_) => true,
        }
    }

    /// A fresh, exclusively owned copy of the bytes.
    pub fn deep_copy(&self) -> Buffer {
        Buffer::Owned(self.as_bytes().to_vec())
    }

    /// Mutable access. A shared buffer is written in place when this is the
    /// only handle; otherwise it detaches a private copy first.
    pub fn make_mut(&mut self) -> &mut [u8] {
        match self {
            Buffer::Shared(bytes) => Arc::make_mut(bytes).as_mut_slice(),
            Buffer::Owned(bytes) => bytes.as_mut_slice(),
        }
    }
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("shared", &self.is_shared())
            .field("len", &self.len())
            .finish()
    }
}
