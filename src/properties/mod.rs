//! Properties Module
//!
//! Scanning of `key=value` property lists into ordered property maps.

mod list;
mod parser;


pub use list::PropertyList;
pub use parser::parse_key_properties;
