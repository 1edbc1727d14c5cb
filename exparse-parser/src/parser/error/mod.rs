pub mod kind;

pub use exparse_error::Error;
