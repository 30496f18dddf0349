mod service;

pub use service::ScrollDriver;
