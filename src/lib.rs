pub mod cli;
pub mod midi;
