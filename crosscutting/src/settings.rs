use std::error::Error;

pub mod aws;
pub mod environment;
pub mod launcher;
pub mod logging;
