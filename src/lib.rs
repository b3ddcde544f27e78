//! clialgo - Terminal note organizer for CS2040C
//!
//! Tags local `.txt` notes and `.cpp` code files to a fixed set of topics,
//! lists and filters them, and exports a filtered subset to a folder.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ClialgoError;
