pub mod shared;
pub mod speech;
