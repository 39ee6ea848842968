pub mod core;
pub mod table;
