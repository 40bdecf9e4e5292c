pub mod client;
pub mod plan;
