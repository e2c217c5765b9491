pub use crate::cli::{command, run_app};
pub use crate::domain::{Contact, ContactField, Selector};
pub use crate::errors::AppError;
pub use crate::logger::ErrorLog;
pub use crate::store::{
    self, ContactBook, ContactStore, StoreConfig, csv::CsvStore, json::JsonSnapshot,
    memory::MemStore,
};
