pub mod cors;
pub mod json;
