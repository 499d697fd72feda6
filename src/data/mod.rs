pub mod sample;

pub use sample::{xor, Sample};
