pub mod log;
pub mod seed;
