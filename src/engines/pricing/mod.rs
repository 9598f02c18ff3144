pub mod catalog;
pub mod classification;
pub mod client;
pub mod distiller;
pub mod raw_schema;
