// src/swap.rs
//! Fixed-width byte reversal.
//!
//! Each byte is isolated with a mask, shifted to its mirrored position and
//! the pieces are OR-ed back together. Shifts operate on the unsigned bit
//! pattern so a set sign bit is moved, never extended.

use bytemuck::Pod;

/// Lane widths supported by the byte-swap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 16-bit lanes
    Short,
    /// 32-bit lanes
    Long,
}

impl Width {
    /// Size of one lane in bytes
    pub const fn size(self) -> usize {
        match self {
            Width::Short => 2,
            Width::Long => 4,
        }
    }
}

/// Exchange the two bytes of a 16-bit integer.
///
/// Applying it twice returns the original value.
///
/// ```
/// use netorder::swap16;
///
/// assert_eq!(swap16(0x1234), 0x3412);
/// assert_eq!(swap16(swap16(-2)), -2);
/// ```
#[inline]
#[must_use]
pub const fn swap16(value: i16) -> i16 {
    let bits = value as u16;
    (((bits & 0xff00) >> 8) | ((bits & 0x00ff) << 8)) as i16
}

/// Reverse the four bytes of a 32-bit integer.
///
/// ```
/// use netorder::swap32;
///
/// assert_eq!(swap32(0x12345678), 0x78563412);
/// assert_eq!(swap32(0x00000001), 0x01000000);
/// ```
#[inline]
#[must_use]
pub const fn swap32(value: i32) -> i32 {
    let bits = value as u32;
    (((bits & 0xff00_0000) >> 24)
        | ((bits & 0x00ff_0000) >> 8)
        | ((bits & 0x0000_ff00) << 8)
        | ((bits & 0x0000_00ff) << 24)) as i32
}

/// Integer types whose byte order can be reversed.
///
/// Implemented for the signed and unsigned 16-bit and 32-bit integers.
/// Unsigned values go through the same bit pattern as their signed
/// counterparts.
pub trait ByteSwap: Pod {
    /// Lane width of this type
    const WIDTH: Width;

    /// Return `self` with its bytes reversed
    fn byte_swap(self) -> Self;
}

impl ByteSwap for i16 {
    const WIDTH: Width = Width::Short;

    #[inline]
    fn byte_swap(self) -> Self {
        swap16(self)
    }
}

impl ByteSwap for u16 {
    const WIDTH: Width = Width::Short;

    #[inline]
    fn byte_swap(self) -> Self {
        swap16(self as i16) as u16
    }
}

impl ByteSwap for i32 {
    const WIDTH: Width = Width::Long;

    #[inline]
    fn byte_swap(self) -> Self {
        swap32(self)
    }
}

impl ByteSwap for u32 {
    const WIDTH: Width = Width::Long;

    #[inline]
    fn byte_swap(self) -> Self {
        swap32(self as i32) as u32
    }
}
