pub mod macros;
pub mod result_ext;
pub mod types;
