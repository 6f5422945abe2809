#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod debounce;
mod error;
mod exercise;
mod filter;
mod query;
mod service;

pub use catalog::{
    CatalogView, Command, Event, ExerciseCatalog, FetchRequest, FetchResponse, RequestID,
};
pub use debounce::*;
pub use error::*;
pub use exercise::*;
pub use filter::*;
pub use query::*;
pub use service::*;
