//! # sigil
//!
//! Conversion traits shared by the multibase crates.
//!
//! ## Overview
//!
//! Multibase text moves through a small chain of representations:
//! ```text
//! &str → Multibase → Vec<u8>
//! ```
//!
//! Each step uses the `Decoder` trait to go forward and the `Encoder`
//! trait to come back, so callers write `text.decode()` or
//! `value.encode()` and let the target type pick the conversion.
//!
//! ## Type Safety
//!
//! Both traits are paired with marker traits (`DecodableFrom` and
//! `EncodableTo`). A conversion only exists when the marker is
//! implemented for the pair, so asking for an unsupported target is a
//! compile error rather than a runtime one.
//!
//! ## Example
//!
//! ```ignore
//! use sigil::decoder::Decoder;
//! use sigil::encoder::Encoder;
//! use multibase::Multibase;
//!
//! let value: Multibase = "f616263".decode().unwrap();
//! let bytes: Vec<u8> = value.decode().unwrap();
//! assert_eq!(bytes, b"abc");
//!
//! let text: String = value.encode().unwrap();
//! assert_eq!(text, "f616263");
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
