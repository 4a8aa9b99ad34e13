pub mod bulk;
pub mod payloads;
