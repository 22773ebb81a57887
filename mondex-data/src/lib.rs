mod common;
mod mons;
mod skills;

#[cfg(test)]
pub mod test_util;

pub use common::*;
pub use mons::*;
pub use skills::*;
