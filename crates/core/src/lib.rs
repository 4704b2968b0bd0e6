#![forbid(unsafe_code)]

pub mod model;
pub mod speech;
pub mod vocabulary;
