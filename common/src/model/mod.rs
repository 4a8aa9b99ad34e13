pub mod bulk;
pub mod customization;
pub mod payload;
