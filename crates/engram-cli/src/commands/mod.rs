//! CLI command implementations.

pub mod init;
pub mod recall;
pub mod matching;
pub mod weights;
