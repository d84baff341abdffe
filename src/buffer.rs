//! Owned, aligned storage for the benchmark matrices.

use std::alloc::{self, Layout};
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;
use std::slice;

/// Buffers start on a 64-byte boundary so the optimized backend gets
/// cache-line-aligned loads. The naive kernel doesn't care.
const ALIGNMENT: usize = 64;

/// Allocation failure for a matrix buffer.
///
/// The driver treats this as fatal; the binary maps it to exit code 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError {
    len: usize,
}

impl AllocError {
    /// Number of `f64` elements the failed allocation asked for.
    pub fn requested(&self) -> usize {
        self.len
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "can't allocate matrix buffer of {} f64 elements", self.len)
    }
}

impl std::error::Error for AllocError {}

/// A flat, contiguous, row-major `f64` buffer with a fixed length.
///
/// Zero-initialized on creation, 64-byte aligned, released when dropped.
/// The buffer is never resized or reshaped; it derefs to `[f64]` so the
/// kernels take it as a plain slice.
#[derive(Debug)]
pub struct MatrixBuf {
    ptr: NonNull<f64>,
    len: usize,
}

impl MatrixBuf {
    /// Allocate a zeroed buffer of `len` elements.
    ///
    /// Unlike `Vec`, allocation failure is reported rather than aborting,
    /// which lets the driver release its other buffers and exit cleanly.
    pub fn try_new(len: usize) -> Result<Self, AllocError> {
        if len == 0 {
            return Ok(MatrixBuf {
                ptr: NonNull::dangling(),
                len: 0,
            });
        }

        let layout = Self::layout(len).ok_or(AllocError { len })?;
        let raw = unsafe { alloc::alloc_zeroed(layout) };
        let ptr = NonNull::new(raw.cast::<f64>()).ok_or(AllocError { len })?;

        Ok(MatrixBuf { ptr, len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn layout(len: usize) -> Option<Layout> {
        Layout::array::<f64>(len).ok()?.align_to(ALIGNMENT).ok()
    }
}

impl Drop for MatrixBuf {
    fn drop(&mut self) {
        if self.len > 0 {
            // Layout succeeded at allocation time, so it succeeds here too.
            if let Some(layout) = Self::layout(self.len) {
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
            }
        }
    }
}

impl Deref for MatrixBuf {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }
}

impl DerefMut for MatrixBuf {
    fn deref_mut(&mut self) -> &mut [f64] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }
}
