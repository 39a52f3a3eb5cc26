pub mod basic;
pub mod flush;
pub mod health;
