pub mod confirm;
pub mod discover;
pub mod executor;
pub mod run;
pub mod workflow;
