//! # text
//!
//! Host text representation and core conversion traits for unicodec.
//!
//! The host stores text as UTF-16 code units ([`Text`]). Codepoints above
//! U+FFFF occupy two units, a surrogate pair. The UTF-8 and UTF-32 codecs
//! need scalar values instead, so this crate provides the walk from
//! units to scalars ([`Codepoints`]) and the split back
//! ([`surrogate::split`]).
//!
//! ## Overview
//!
//! ```text
//! Text (u16 units) ⇄ Codepoints (char) ⇄ UTF-8 / UTF-32 bytes
//! Text (u16 units) ⇄ UTF-16 bytes
//! ```
//!
//! Each step uses the `Decoder` trait to convert from the encoded form to
//! `Text`, and the `Encoder` trait for the reverse direction.
//!
//! ## Example
//!
//! ```
//! use text::Text;
//!
//! let text = Text::from("a😩");
//! assert_eq!(text.units(), &[0x61, 0xd83d, 0xde29]);
//!
//! let scalars: Vec<char> = text.codepoints().collect::<Result<_, _>>().unwrap();
//! assert_eq!(scalars, vec!['a', '😩']);
//! ```

#![forbid(unsafe_code)]

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod sequencer;
mod string;
pub mod surrogate;

pub use error::{Error, Result};
pub use sequencer::Codepoints;
pub use string::Text;
