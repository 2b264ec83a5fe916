//! Decoder trait for type-safe conversions.
//!
//! The `Decoder` trait converts an encoded value `T` back into a
//! destination type `D`. Every format crate of unicodec implements it to
//! turn its encoded container into the host [`Text`](crate::Text).
//!
//! # Design Pattern
//!
//! The decoder uses a two-trait pattern for type safety:
//!
//! 1. `Decoder<T, D>` - Performs the actual conversion
//! 2. `DecodableFrom<T>` - Marker trait constraining valid conversions
//!
//! Only pairs that carry the marker can be decoded, so asking for a
//! conversion no format provides is a compile error.
//!
//! # Implementation Guide
//!
//! ```no_run
//! use text::decoder::{Decoder, DecodableFrom};
//! use text::Text;
//!
//! struct Latin1(Vec<u8>);
//!
//! #[derive(Debug)]
//! struct Latin1Error;
//!
//! // 1. Mark the destination type as decodable from the source type
//! impl DecodableFrom<Latin1> for Text {}
//!
//! // 2. Implement the decoder on the source type
//! impl Decoder<Latin1, Text> for Latin1 {
//!     type Error = Latin1Error;
//!
//!     fn decode(&self) -> Result<Text, Self::Error> {
//!         Ok(self.0.iter().map(|&b| u16::from(b)).collect())
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```ignore
//! use text::decoder::Decoder;
//! use text::Text;
//! use utf8::Utf8;
//!
//! let utf8 = Utf8::from_bytes(vec![0xc2, 0xa2]);
//! let text: Text = utf8.decode().unwrap();
//! ```

/// Decoder trait for converting from type `T` to type `D`.
///
/// This trait is implemented by the source type `T` to enable conversion
/// to the destination type `D`. The destination type must implement
/// `DecodableFrom<T>`.
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
    /// Returns an error if the input is malformed for the format. The
    /// specific error conditions depend on the implementing type.
    fn decode(&self) -> Result<D, Self::Error>;
}

/// Marker trait indicating that type `D` can be decoded from type `T`.
///
/// This trait has no methods. Implement it for destination types that
/// can be decoded from a source type:
///
/// ```no_run
/// use text::decoder::DecodableFrom;
///
/// struct Encoded;
/// struct Decoded;
///
/// impl DecodableFrom<Encoded> for Decoded {}
/// ```
pub trait DecodableFrom<T> {}
