pub mod benchmark;

pub use benchmark::*;
