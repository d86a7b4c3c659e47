//! # blurhash-codec
//!
//! BlurHash encoding and decoding of RGBA pixel buffers in pure Rust.
//!
//! [BlurHash](https://blurha.sh/) is a compact representation of a placeholder
//! for an image. An image is projected onto a handful of cosine basis
//! functions, the coefficients are quantized, and the result is packed into a
//! short URL-safe base83 string. Decoding evaluates those basis functions at
//! any requested resolution.
//!
//! ## Quick Start
//!
//! ```
//! use blurhash_codec::{average_color, decode, encode, is_valid};
//!
//! // Encode: RGBA pixels -> BlurHash string
//! let pixels = [128u8, 128, 128, 255].repeat(4 * 4); // 4x4 gray image
//! let hash = encode(&pixels, 4, 4, 4, 3).unwrap();
//! assert_eq!(is_valid(&hash), (true, None));
//!
//! // Decode: BlurHash string -> RGBA pixels
//! let decoded = decode(&hash, 32, 32, 1.0).unwrap();
//! assert_eq!(decoded.len(), 32 * 32 * 4);
//!
//! let [r, g, b] = average_color(&hash).unwrap();
//! assert!(r.abs_diff(128) <= 1 && g.abs_diff(128) <= 1 && b.abs_diff(128) <= 1);
//! ```
//!
//! ## Features
//!
//! * `parallel` - spread the transform over a rayon thread pool. Output is
//!   identical to the single-threaded build.

pub mod base83;
pub mod color;
pub mod error;
pub mod options;
pub mod transform;

mod decode_impl;
mod encode_impl;
mod validate;

// Re-export primary functions at crate root.
pub use color::{fast_cos, linear_to_srgb, sign_pow, sign_sqr, srgb_to_linear};
pub use decode_impl::{average_color, components, decode, decode_with};
pub use encode_impl::{encode, encode_with};
pub use error::{BlurhashError, ErrorKind};
pub use options::{DecodeOptions, EncodeOptions, MAX_DIMENSION};
pub use transform::Basis;
pub use validate::{is_valid, validate};
