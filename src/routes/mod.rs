pub mod games;
pub mod orders;
pub mod seed;
