// src/native.rs
//! Target-aware conversions.
//!
//! On big-endian targets these are the identity; on little-endian targets
//! they swap. The choice is made at compile time from `target_endian`.

use crate::swap::{swap16, swap32};

/// Whether the host already stores integers in network (big-endian) order
pub const IS_NETWORK_ORDER: bool = cfg!(target_endian = "big");

/// Host to network order, 16-bit; identity on big-endian targets
#[inline]
#[must_use]
pub const fn to_network16(value: i16) -> i16 {
    if IS_NETWORK_ORDER {
        value
    } else {
        swap16(value)
    }
}

/// Network to host order, 16-bit; identity on big-endian targets
#[inline]
#[must_use]
pub const fn from_network16(value: i16) -> i16 {
    to_network16(value)
}

/// Host to network order, 32-bit; identity on big-endian targets
#[inline]
#[must_use]
pub const fn to_network32(value: i32) -> i32 {
    if IS_NETWORK_ORDER {
        value
    } else {
        swap32(value)
    }
}

/// Network to host order, 32-bit; identity on big-endian targets
#[inline]
#[must_use]
pub const fn from_network32(value: i32) -> i32 {
    to_network32(value)
}
