pub mod entities;
pub mod input;
pub mod services;
pub mod value_objects;
