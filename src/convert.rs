// src/convert.rs
//! Network byte-order conversions for hosts without system routines.
//!
//! These always swap. Host-to-network and network-to-host are the same
//! operation because a byte swap is its own inverse. Use [`crate::native`]
//! when the host byte order should be taken into account instead.

use crate::swap::{swap16, swap32};

/// Host to network order, 16-bit
#[inline]
#[must_use]
pub const fn htons(value: i16) -> i16 {
    swap16(value)
}

/// Host to network order, 32-bit
#[inline]
#[must_use]
pub const fn htonl(value: i32) -> i32 {
    swap32(value)
}

/// Network to host order, 16-bit
#[inline]
#[must_use]
pub const fn ntohs(value: i16) -> i16 {
    swap16(value)
}

/// Network to host order, 32-bit
#[inline]
#[must_use]
pub const fn ntohl(value: i32) -> i32 {
    swap32(value)
}
