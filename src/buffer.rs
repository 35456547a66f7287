// src/buffer.rs
//! In-place byte-order conversion of whole buffers
//!
//! - [`swap_slice`] reverses every element of a typed slice
//! - [`swap_bytes`] reverses every lane of a raw byte buffer
//! - `host_to_network_slice*` / `network_to_host_slice*` convert typed slices
//!   taking the host byte order into account
//!
//! # Examples
//!
//! ```
//! use netorder::buffer::{swap_bytes, swap_slice};
//! use netorder::Width;
//!
//! let mut values = [0x1234i16, 0x5678];
//! swap_slice(&mut values);
//! assert_eq!(values, [0x3412, 0x7856]);
//!
//! let mut raw = [0x12u8, 0x34, 0x56, 0x78];
//! swap_bytes(&mut raw, Width::Long).unwrap();
//! assert_eq!(raw, [0x78, 0x56, 0x34, 0x12]);
//!
//! assert!(swap_bytes(&mut [0u8; 3], Width::Short).is_err());
//! ```

use byteorder::{BigEndian, ByteOrder};
use log::{debug, trace};

use crate::error::{Result, SwapError};
use crate::swap::{ByteSwap, Width};
use crate::utils::reverse_lanes;

/// Reverse the byte order of every value in `values`.
pub fn swap_slice<T: ByteSwap>(values: &mut [T]) {
    if values.is_empty() {
        return;
    }

    let size = T::WIDTH.size();
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(values);
    trace!("swapping {} bytes in {}-byte lanes", bytes.len(), size);
    reverse_lanes(bytes, size);
}

/// Reverse each `width`-sized lane of a raw byte buffer.
///
/// # Errors
///
/// Returns [`SwapError::MisalignedLength`] if the buffer does not hold a
/// whole number of lanes. The buffer is not modified in that case.
pub fn swap_bytes(bytes: &mut [u8], width: Width) -> Result<()> {
    let size = width.size();
    if bytes.len() % size != 0 {
        debug!(
            "rejecting {}-byte buffer: not a multiple of lane width {}",
            bytes.len(),
            size
        );
        return Err(SwapError::MisalignedLength {
            len: bytes.len(),
            width: size,
        });
    }

    trace!("swapping {} lanes of {} bytes", bytes.len() / size, size);
    reverse_lanes(bytes, size);
    Ok(())
}

/// Convert 16-bit values from host to network order in place.
pub fn host_to_network_slice16(values: &mut [i16]) {
    // byteorder's big-endian conversion is its own inverse
    BigEndian::from_slice_i16(values);
}

/// Convert 16-bit values from network to host order in place.
pub fn network_to_host_slice16(values: &mut [i16]) {
    BigEndian::from_slice_i16(values);
}

/// Convert 32-bit values from host to network order in place.
pub fn host_to_network_slice32(values: &mut [i32]) {
    BigEndian::from_slice_i32(values);
}

/// Convert 32-bit values from network to host order in place.
pub fn network_to_host_slice32(values: &mut [i32]) {
    BigEndian::from_slice_i32(values);
}
