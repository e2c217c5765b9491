pub mod command;
pub mod run;

pub use run::run_app;

use std::io::{self, Write};

use crate::domain::Contact;
use crate::errors::AppError;

// OUTPUT FUNCTIONS

pub fn show_menu() {
    println!("1. Add Contact");
    println!("2. View Contacts");
    println!("3. Search Contact");
    println!("4. Update Contact");
    println!("5. Delete Contact");
    println!("6. Export to JSON");
    println!("7. Load from JSON");
    println!("8. Exit");
}

pub fn contact_line(contact: &Contact) -> String {
    format!(
        "Name: {} | Phone: {} | Email: {}",
        contact.name, contact.phone, contact.email
    )
}

pub fn table_row(index: usize, contact: &Contact) -> String {
    // Long names and phones are cut so the columns stay put
    format!(
        "{index:>5} | {:<24.24} | {:<15.15} | {}",
        contact.name, contact.phone, contact.email
    )
}

pub fn print_table(contacts: &[Contact]) {
    println!("\nIndex | Name                     | Phone           | Email");
    println!("{}", "-".repeat(70));
    for (i, contact) in contacts.iter().enumerate() {
        println!("{}", table_row(i + 1, contact));
    }
    println!();
}

// INPUT FUNCTIONS

pub fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;

    // read_line hands back Ok(0) once stdin is closed. Treat that as
    // an error so the menu loop cannot spin forever
    if read == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        )));
    }
    Ok(input.trim().to_string())
}

pub fn prompt(label: &str) -> Result<String, AppError> {
    print!("{}", label);
    io::stdout().flush()?;
    get_input()
}

pub fn confirm(question: &str) -> Result<bool, AppError> {
    let answer = prompt(question)?;
    Ok(answer.to_lowercase() == "y")
}
