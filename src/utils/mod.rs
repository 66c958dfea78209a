pub mod sizes;

pub use sizes::*;
