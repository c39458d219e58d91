pub mod fmt;
pub mod serialize;
