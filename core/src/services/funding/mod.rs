//! Municipal funding applications

mod service;

#[cfg(test)]
mod tests;

pub use service::FundingService;
