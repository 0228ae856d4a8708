//! Wire contracts and shared rules of the Feirinha attendance form

pub mod enums;
pub mod shared;
pub mod usecases;
