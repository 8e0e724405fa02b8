//! Outbound mail: the transport seam and its SMTP implementation.

pub mod abstract_trait;
pub mod domain;
pub mod service;
