#![forbid(unsafe_code)]
#![deny(unused_must_use)]

pub mod input;
pub mod report;
