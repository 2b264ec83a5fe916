//! Encoder trait, the reverse direction of [`Decoder`](crate::decoder::Decoder).
//!
//! `Text` implements `Encoder<Text, E>` once per format, so the target
//! container is picked by the annotated type:
//!
//! ```ignore
//! use text::encoder::Encoder;
//! use text::Text;
//! use utf32::Utf32;
//!
//! let text = Text::from("😩");
//! let utf32: Utf32 = text.encode().unwrap();
//! assert_eq!(utf32.values(), &[0x1f629]);
//! ```

/// Encoder trait for converting from type `T` to type `E`.
pub trait Encoder<T, E: EncodableTo<T>> {
    /// The error type returned when encoding fails.
    type Error;

    /// Encodes `self` into type `E`.
    ///
    /// # Errors
    ///
    /// Returns an error if `self` cannot be represented in the target
    /// format, e.g. text holding an unpaired surrogate.
    fn encode(&self) -> Result<E, Self::Error>;
}

/// Marker trait indicating that type `E` can be encoded from type `T`.
pub trait EncodableTo<T> {}
