// Module exports for models

pub mod consultation;
pub mod schedule;
pub mod user;
