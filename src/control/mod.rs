pub mod parameters;
pub mod prompt;
pub mod runner;
pub mod simulation;
