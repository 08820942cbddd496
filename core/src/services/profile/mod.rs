//! Business and freelancer profiles

mod service;

#[cfg(test)]
mod tests;

pub use service::{ProfileService, Saved};
