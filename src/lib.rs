pub mod cli;
pub mod domain;
pub mod errors;
pub mod logger;
pub mod prelude;
pub mod store;
