//! Job postings and applications

mod service;


pub use service::JobService;
