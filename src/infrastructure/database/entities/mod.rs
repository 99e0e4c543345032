//! Database entities module

pub mod cat;

pub use cat::Entity as Cat;
