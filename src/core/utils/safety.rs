//! Zero-cost checked access for the packed particle buffer.
//!
//! Debug builds index normally and panic with a useful message on a bad
//! slot; release builds skip the bounds check. Every index handed to
//! `fast!` comes from `slot * PARTICLE_STRIDE + offset` with `slot` already
//! checked against the pool capacity.
//!
//! Usage:
//! ```rust
//! use vortex_engine::fast;
//!
//! let buffer = vec![0.0f32; 18];
//! let hue_of_second = 9 + 8;
//! assert_eq!(*fast!(buffer, [hue_of_second]), 0.0);
//!
//! let mut buffer = buffer;
//! fast!(buffer, [hue_of_second] = 220.0);
//! assert_eq!(buffer[hue_of_second], 220.0);
//! ```

/// Bounds-checked in debug, `get_unchecked` in release.
///
/// - Read: `fast!(slice, [index])` yields a reference
/// - Write: `fast!(slice, [index] = value)`
#[macro_export]
macro_rules! fast {
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe {
                *$slice.get_unchecked_mut($index) = $val;
            }
        }
    }};
}
