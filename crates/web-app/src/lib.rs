#![warn(clippy::pedantic)]

mod controller;
pub mod log;
mod service;
mod settings;

pub use controller::Controller;
pub use service::Service;
pub use settings::*;
