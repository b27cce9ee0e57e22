//! Encoder trait, the reverse direction of [`crate::decoder::Decoder`].

/// Converts `self` (of type `T`) into an `E`.
///
/// `E` has to implement `EncodableTo<T>` for the conversion to exist.
pub trait Encoder<T, E: EncodableTo<T>> {
    /// The error type returned when encoding fails.
    type Error;

    /// Encodes `self` into type `E`.
    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait indicating that type `E` can be encoded from type `T`.
pub trait EncodableTo<T> {}
