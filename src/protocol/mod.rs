//! Line-oriented text protocol spoken by the `flipside` binary

pub mod command;
pub mod handler;
