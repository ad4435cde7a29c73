//! Fixed-width big-endian packing into caller owned byte buffers.
//!
//! Every value is written most significant byte first at the position the
//! cursor points to; the cursor is then advanced past the written bytes
//! (two bytes for the 16 bit functions, four for the 32 bit ones). This byte
//! order is the wire format for any consumer decoding the buffers.
//!
//! ```
//! use grabbag_util::pack::{append_f16, append_i16, append_i32};
//!
//! let mut frame = [0u8; 8];
//! let mut cursor = 0;
//! append_i16(&mut frame, 0x0102, &mut cursor);
//! append_i32(&mut frame, -2, &mut cursor);
//! append_f16(&mut frame, 1.5, 1000.0, &mut cursor);
//!
//! assert_eq!(cursor, 8);
//! assert_eq!(frame, [0x01, 0x02, 0xff, 0xff, 0xff, 0xfe, 0x05, 0xdc]);
//! ```
//!
//! The plain `append_*` functions do no bounds checking of their own and
//! panic on an out of range write, like slice indexing does. The
//! `try_append_*` functions and [Packer] report [OutOfBounds] instead.
//!
//! # Quantization
//!
//! Floating point values are scaled and then truncated toward zero into the
//! target integer. The narrowing wraps around in two's complement instead of
//! clamping, so out of range products are silently lossy:
//!
//! ```
//! use grabbag_util::pack::{quantize_i16, try_quantize_i16};
//!
//! assert_eq!(quantize_i16(1.5, 1000.0), 1500);
//! assert_eq!(quantize_i16(40.0, 1000.0), -25536);
//! assert!(try_quantize_i16(40.0, 1000.0).is_err());
//! ```

use std::borrow::{Borrow, BorrowMut};

use crate::error::{OutOfBounds, Overflow};
use crate::result::ensure_or;

/// Scale `value` and truncate it into an `i16`, wrapping on overflow.
///
/// NaN quantizes to zero.
pub fn quantize_i16(value: f32, scale: f32) -> i16 {
    (value * scale) as i64 as i16
}

/// Scale `value` and truncate it into an `i32`, wrapping on overflow.
///
/// NaN quantizes to zero.
pub fn quantize_i32(value: f32, scale: f32) -> i32 {
    (value * scale) as i64 as i32
}

/// Like [quantize_i16] but reports values that would wrap.
pub fn try_quantize_i16(value: f32, scale: f32) -> Result<i16, Overflow> {
    let overflow = Overflow { bits: i16::BITS };
    let scaled = value * scale;
    ensure_or(scaled.is_finite(), overflow)?;
    i16::try_from(scaled as i64).map_err(|_| overflow)
}

/// Like [quantize_i32] but reports values that would wrap.
pub fn try_quantize_i32(value: f32, scale: f32) -> Result<i32, Overflow> {
    let overflow = Overflow { bits: i32::BITS };
    let scaled = value * scale;
    ensure_or(scaled.is_finite(), overflow)?;
    i32::try_from(scaled as i64).map_err(|_| overflow)
}

fn put<const N: usize>(buf: &mut [u8], bytes: [u8; N], cursor: &mut usize) {
    buf[*cursor..*cursor + N].copy_from_slice(&bytes);
    *cursor += N;
}

fn try_put<const N: usize>(
    buf: &mut [u8],
    bytes: [u8; N],
    cursor: &mut usize,
) -> Result<(), OutOfBounds> {
    let available = buf.len().saturating_sub(*cursor);
    ensure_or(N <= available, OutOfBounds { needed: N, available })?;
    put(buf, bytes, cursor);
    Ok(())
}

/// Write `value` big-endian at `cursor` and advance the cursor by two.
///
/// # Panics
///
/// Panics if fewer than two bytes are left after `cursor`; nothing is written
/// in that case.
pub fn append_i16(buf: &mut [u8], value: i16, cursor: &mut usize) {
    put(buf, value.to_be_bytes(), cursor)
}

/// Write `value` big-endian at `cursor` and advance the cursor by four.
///
/// # Panics
///
/// Panics if fewer than four bytes are left after `cursor`.
pub fn append_i32(buf: &mut [u8], value: i32, cursor: &mut usize) {
    put(buf, value.to_be_bytes(), cursor)
}

/// Quantize `value * scale` with [quantize_i16] and append it.
///
/// # Panics
///
/// Panics if fewer than two bytes are left after `cursor`.
pub fn append_f16(buf: &mut [u8], value: f32, scale: f32, cursor: &mut usize) {
    append_i16(buf, quantize_i16(value, scale), cursor)
}

/// Quantize `value * scale` with [quantize_i32] and append it.
///
/// # Panics
///
/// Panics if fewer than four bytes are left after `cursor`.
pub fn append_f32(buf: &mut [u8], value: f32, scale: f32, cursor: &mut usize) {
    append_i32(buf, quantize_i32(value, scale), cursor)
}

/// Checked [append_i16]; on error neither the buffer nor the cursor change.
pub fn try_append_i16(buf: &mut [u8], value: i16, cursor: &mut usize) -> Result<(), OutOfBounds> {
    try_put(buf, value.to_be_bytes(), cursor)
}

/// Checked [append_i32]
pub fn try_append_i32(buf: &mut [u8], value: i32, cursor: &mut usize) -> Result<(), OutOfBounds> {
    try_put(buf, value.to_be_bytes(), cursor)
}

/// Checked [append_f16]; quantization still wraps.
pub fn try_append_f16(
    buf: &mut [u8],
    value: f32,
    scale: f32,
    cursor: &mut usize,
) -> Result<(), OutOfBounds> {
    try_append_i16(buf, quantize_i16(value, scale), cursor)
}

/// Checked [append_f32]; quantization still wraps.
pub fn try_append_f32(
    buf: &mut [u8],
    value: f32,
    scale: f32,
    cursor: &mut usize,
) -> Result<(), OutOfBounds> {
    try_append_i32(buf, quantize_i32(value, scale), cursor)
}

/// A buffer bundled with its own write cursor.
///
/// All writes are checked.
///
/// ```
/// use grabbag_util::pack::Packer;
///
/// let mut packer = Packer::from_buffer([0u8; 6]);
/// packer.put_i16(7)?;
/// packer.put_f32(-0.25, 100.0)?;
/// assert_eq!(packer.written(), &[0, 7, 0xff, 0xff, 0xff, 0xe7]);
/// assert!(packer.put_i16(1).is_err());
/// # Ok::<(), grabbag_util::error::OutOfBounds>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Packer<Buf: Borrow<[u8]>> {
    buf: Buf,
    pos: usize,
}

impl<Buf: Borrow<[u8]>> Packer<Buf> {
    pub fn from_buffer(buf: Buf) -> Self {
        Self { buf, pos: 0 }
    }

    /// Resume packing into `buf` at `pos`
    pub fn from_parts(buf: Buf, pos: usize) -> Result<Self, OutOfBounds> {
        let available = buf.borrow().len();
        ensure_or(
            pos <= available,
            OutOfBounds {
                needed: pos,
                available,
            },
        )?;
        Ok(Self { buf, pos })
    }

    pub fn into_parts(self) -> (Buf, usize) {
        let Self { buf, pos } = self;
        (buf, pos)
    }

    pub fn into_buffer(self) -> Buf {
        self.buf
    }

    pub fn buffer_bytes(&self) -> &[u8] {
        self.buf.borrow()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buffer_bytes().len() - self.pos
    }

    /// The bytes packed so far
    pub fn written(&self) -> &[u8] {
        &self.buffer_bytes()[..self.pos]
    }

    /// Move the cursor back to the start; the buffer contents are kept.
    pub fn restart(&mut self) {
        self.pos = 0;
    }
}

impl<Buf: BorrowMut<[u8]>> Packer<Buf> {
    pub fn put_i16(&mut self, value: i16) -> Result<(), OutOfBounds> {
        try_append_i16(self.buf.borrow_mut(), value, &mut self.pos)
    }

    pub fn put_i32(&mut self, value: i32) -> Result<(), OutOfBounds> {
        try_append_i32(self.buf.borrow_mut(), value, &mut self.pos)
    }

    pub fn put_f16(&mut self, value: f32, scale: f32) -> Result<(), OutOfBounds> {
        try_append_f16(self.buf.borrow_mut(), value, scale, &mut self.pos)
    }

    pub fn put_f32(&mut self, value: f32, scale: f32) -> Result<(), OutOfBounds> {
        try_append_f32(self.buf.borrow_mut(), value, scale, &mut self.pos)
    }
}
