pub mod config;
pub mod logging;

pub mod batch;
pub mod invocation;
pub mod outcome;
pub mod targets;
pub mod tools;
pub mod url_model;
