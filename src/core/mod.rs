pub mod engine;
pub mod gauge;
pub mod graph;
pub mod input;
