// src/lib.rs
//! # netorder
//!
//! Strongly typed byte-order conversion between host and network
//! (big-endian) order for 16-bit and 32-bit integers, for targets that do not
//! provide `htons`/`htonl`/`ntohs`/`ntohl`.
//!
//! ## Features
//!
//! - **Typed**: one function per width, so the compiler rejects a value of the
//!   wrong size at the call site
//! - **Const**: every scalar conversion is a `const fn`
//! - **Bulk**: in-place conversion of typed slices and raw byte buffers
//!
//! ## Quick Start
//!
//! ```rust
//! use netorder::*;
//!
//! let port: i16 = 0x1F90;
//! let wire = htons(port);
//! assert_eq!(wire, 0x901Fu16 as i16);
//! assert_eq!(ntohs(wire), port);
//!
//! assert_eq!(htonl(0x12345678), 0x78563412);
//! ```
//!
//! ### Host-aware conversion
//!
//! ```rust
//! use netorder::native::to_network32;
//!
//! assert_eq!(to_network32(7).to_ne_bytes(), [0, 0, 0, 7]);
//! ```

// Modules
pub mod error;
pub mod swap;
pub mod convert;
pub mod native;
pub mod buffer;

mod utils;

pub use error::{SwapError, Result};

pub use swap::{swap16, swap32, ByteSwap, Width};

pub use convert::{htons, htonl, ntohs, ntohl};

pub use buffer::{swap_bytes, swap_slice};

pub mod prelude {
    //! Convenient imports for common use cases.
    //!
    //! ```rust
    //! use netorder::prelude::*;
    //! ```

    pub use crate::convert::{htons, htonl, ntohs, ntohl};
    pub use crate::error::{SwapError, Result};
    pub use crate::swap::{ByteSwap, Width};
}

/// The library version
pub const LIBRARY_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!LIBRARY_VERSION.is_empty());
    }

    #[test]
    fn test_reexports_agree() {
        assert_eq!(htons(0x1234), swap16(0x1234));
        assert_eq!(htonl(0x1234_5678), swap32(0x1234_5678));
        assert_eq!(0x1234i16.byte_swap(), prelude::ntohs(0x1234));
    }

    #[test]
    fn test_port_swap_sets_sign_bit() {
        // 8080 on the wire has its high bit set as an i16
        let wire = htons(0x1F90);
        assert_eq!(wire, 0x901Fu16 as i16);
        assert!(wire < 0);
        assert_eq!(ntohs(wire), 0x1F90);
    }
}
