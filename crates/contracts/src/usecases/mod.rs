pub mod common;
pub mod u501_register_presence;
