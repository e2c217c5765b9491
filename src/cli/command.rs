use clap::Parser;
use std::path::PathBuf;

use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Contact Book Manager")]
pub struct Cli {
    /// Path to the csv contact store
    #[arg(long, env = "CONTACTS_CSV_PATH", default_value = "contact_list.csv")]
    pub store_path: PathBuf,

    /// Path to the json snapshot written by export
    #[arg(long, env = "CONTACTS_JSON_PATH", default_value = "contact_list.json")]
    pub snapshot_path: PathBuf,

    /// Path to the error log
    #[arg(long, env = "CONTACTS_LOG_PATH", default_value = "error_log.txt")]
    pub log_path: PathBuf,
}

/// Menu entries, one per numbered choice
#[derive(Debug, PartialEq)]
pub enum Command {
    AddContact,
    ViewContacts,
    SearchContacts,
    UpdateContact,
    DeleteContact,
    ExportJson,
    ImportJson,
    Exit,
}

pub fn get_command(action: &str) -> Result<Command, AppError> {
    match action {
        "1" => Ok(Command::AddContact),
        "2" => Ok(Command::ViewContacts),
        "3" => Ok(Command::SearchContacts),
        "4" => Ok(Command::UpdateContact),
        "5" => Ok(Command::DeleteContact),
        "6" => Ok(Command::ExportJson),
        "7" => Ok(Command::ImportJson),
        "8" => Ok(Command::Exit),
        _ => Err(AppError::ParseCommand(action.to_string())),
    }
}
