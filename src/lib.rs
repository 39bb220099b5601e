pub mod views;
pub mod utils;
pub mod behaviors;
pub mod bindings;
pub mod catalog;
pub mod dom;
mod routes;
mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::PageConfig;
pub use crate::error::PageError;
pub use crate::bindings::active_config;
