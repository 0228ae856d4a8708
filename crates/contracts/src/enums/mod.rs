pub mod sector;

pub use sector::Sector;
