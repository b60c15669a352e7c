//! Timeline assembly: the stage that turns translated utterances into the
//! output audio track.

pub mod assembler;

pub use assembler::{AssemblerOptions, AssemblyReport, assemble_track};
