pub mod service;

pub use service::{Backend, FetchedVideo};
