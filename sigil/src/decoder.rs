//! Decoder trait for type-safe conversions.
//!
//! `Decoder<T, D>` converts a source `T` into a destination `D`. The
//! destination has to opt in through `DecodableFrom<T>`, which keeps the
//! set of conversions closed and checked at compile time.
//!
//! # Implementation Guide
//!
//! ```no_run
//! use sigil::decoder::{Decoder, DecodableFrom};
//!
//! struct Text(String);
//! struct Payload(Vec<u8>);
//!
//! #[derive(Debug)]
//! struct BadText;
//!
//! impl DecodableFrom<Text> for Payload {}
//!
//! impl Decoder<Text, Payload> for Text {
//!     type Error = BadText;
//!
//!     fn decode(&self) -> Result<Payload, Self::Error> {
//!         Ok(Payload(self.0.as_bytes().to_vec()))
//!     }
//! }
//! ```

/// Converts `self` (of type `T`) into a `D`.
///
/// # Type Parameters
///
/// * `T` - The source type (usually `Self`)
/// * `D` - The destination type that can be decoded from `T`
pub trait Decoder<T, D: DecodableFrom<T>> {
    /// The error type returned when decoding fails.
    type Error;

    /// Decodes `self` into type `D`.
    ///
    /// # Errors
    ///
    /// Returns an error if the source is not a valid representation of `D`.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// Has no methods. Implement it for each destination type next to the
/// matching `Decoder` implementation:
///
/// ```no_run
/// use sigil::decoder::DecodableFrom;
///
/// struct Source;
/// struct Destination;
///
/// impl DecodableFrom<Source> for Destination {}
/// ```
pub trait DecodableFrom<T> {}
