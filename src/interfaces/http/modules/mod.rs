//! HTTP feature modules

pub mod cats;
pub mod health;
