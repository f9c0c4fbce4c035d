//! Types and methods for reading and parsing input.

pub mod file;
pub mod json;
pub mod ranks;

pub use file::InputFile;
pub use json::read_json;
pub use ranks::{read_ranks, RankedFeatures, RanksIterator};
