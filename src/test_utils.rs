#[cfg(test)]
pub use utils::*;
