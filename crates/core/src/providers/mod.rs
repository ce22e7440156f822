pub mod traits;

// Source implementations
pub mod file;
pub mod http;
pub mod sample;
