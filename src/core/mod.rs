pub mod component;
pub mod engine;
pub mod error;
pub mod signal;
pub mod timer;
pub mod trace;
pub mod width;
