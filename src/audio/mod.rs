//! Audio buffer handling: clip decoding and track assembly primitives.

pub mod codec;
pub mod track;

pub use track::Track;
