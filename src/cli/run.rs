use clap::Parser;

use super::command::{get_command, Cli, Command};
use crate::domain::{ContactField, Selector};
use crate::errors::AppError;
use crate::store::{ContactBook, StoreConfig};

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = StoreConfig::new(&cli.store_path, &cli.snapshot_path, &cli.log_path);
    let book = ContactBook::new(config);

    println!("Welcome to the Contact Book Manager!");

    'menu: loop {
        super::show_menu();
        let action = super::prompt("Enter your choice: ")?;

        match get_command(&action) {
            Ok(Command::AddContact) => add_contact(&book)?,
            Ok(Command::ViewContacts) => view_contacts(&book),
            Ok(Command::SearchContacts) => search_contacts(&book)?,
            Ok(Command::UpdateContact) => update_contact(&book)?,
            Ok(Command::DeleteContact) => delete_contact(&book)?,
            Ok(Command::ExportJson) => export_to_json(&book),
            Ok(Command::ImportJson) => load_from_json(&book),
            Ok(Command::Exit) => {
                println!("Exiting program.");
                break 'menu;
            }
            Err(_) => println!("Invalid choice. Try again.\n"),
        }
    }

    Ok(())
}

fn add_contact(book: &ContactBook) -> Result<(), AppError> {
    let name = super::prompt("Enter Name: ")?;
    if name.is_empty() {
        println!("Name cannot be empty. Aborting add.\n");
        return Ok(());
    }

    let phone = super::prompt("Enter Phone Number: ")?;
    let email = super::prompt("Enter Email Address: ")?;

    match book.add(&name, &phone, &email) {
        Ok(()) => println!("Contact added successfully.\n"),
        Err(AppError::Validation(reason)) => println!("{}\n", reason),
        Err(_) => println!("Error while adding contact.\n"),
    }
    Ok(())
}

fn view_contacts(book: &ContactBook) {
    let contacts = book.load();
    if contacts.is_empty() {
        println!("No contacts found.\n");
        return;
    }
    super::print_table(&contacts);
}

fn search_contacts(book: &ContactBook) -> Result<(), AppError> {
    let query = super::prompt("Enter name or phone to search (partial allowed): ")?;
    if query.is_empty() {
        println!("Empty query.\n");
        return Ok(());
    }

    let results = book.search(&query);
    if results.is_empty() {
        println!("Contact not found.\n");
        return Ok(());
    }

    println!("\nFound {} matching contact(s):", results.len());
    println!("{}", "-".repeat(50));
    for contact in &results {
        println!("{}", super::contact_line(contact));
    }
    println!();
    Ok(())
}

fn update_contact(book: &ContactBook) -> Result<(), AppError> {
    let contacts = book.load();
    if contacts.is_empty() {
        println!("No contacts to update.\n");
        return Ok(());
    }

    super::print_table(&contacts);
    let selector = super::prompt("Enter the Index of the contact to update (or name): ")?;

    let position = match Selector::parse(&selector).resolve(&contacts) {
        Some(position) => position,
        None => {
            println!("Contact not found.\n");
            return Ok(());
        }
    };

    println!("Selected:");
    println!("{}", super::contact_line(&contacts[position]));
    println!("What do you want to update?");
    println!("1. Name");
    println!("2. Phone");
    println!("3. Email");
    println!("4. Cancel");
    let option = super::prompt("Enter choice: ")?;

    let field = match option.as_str() {
        "1" => ContactField::Name,
        "2" => ContactField::Phone,
        "3" => ContactField::Email,
        _ => {
            println!("Update cancelled.\n");
            return Ok(());
        }
    };

    let label = match field {
        ContactField::Name => "Enter new name: ",
        ContactField::Phone => "Enter new phone: ",
        ContactField::Email => "Enter new email: ",
    };
    let value = super::prompt(label)?;

    match book.update(&selector, field, &value) {
        Ok(()) => println!("Contact updated successfully.\n"),
        Err(AppError::NotFound(_)) => println!("Contact not found.\n"),
        Err(_) => println!("Error updating contact.\n"),
    }
    Ok(())
}

fn delete_contact(book: &ContactBook) -> Result<(), AppError> {
    let contacts = book.load();
    if contacts.is_empty() {
        println!("No contacts to delete.\n");
        return Ok(());
    }

    super::print_table(&contacts);
    let selector = super::prompt("Enter the Index of the contact to delete (or exact name): ")?;

    let position = match Selector::parse(&selector).resolve(&contacts) {
        Some(position) => position,
        None => {
            println!("Contact not found.\n");
            return Ok(());
        }
    };

    let question = format!(
        "Are you sure you want to delete '{}'? (y/N): ",
        contacts[position].name
    );
    let confirmed = super::confirm(&question)?;

    match book.delete(&selector, confirmed) {
        Ok(Some(removed)) => println!("Deleted contact: {}\n", removed.name),
        Ok(None) => println!("Delete cancelled.\n"),
        Err(AppError::NotFound(_)) => println!("Contact not found.\n"),
        Err(_) => println!("Error deleting contact.\n"),
    }
    Ok(())
}

fn export_to_json(book: &ContactBook) {
    match book.export_snapshot() {
        Ok(_) => println!("Contacts exported to JSON successfully.\n"),
        Err(_) => println!("Error exporting to JSON.\n"),
    }
}

fn load_from_json(book: &ContactBook) {
    match book.import_preview() {
        Ok(None) => println!("JSON file not found.\n"),
        Ok(Some(preview)) => {
            if preview.is_empty() {
                println!("No contacts in JSON file.\n");
                return;
            }
            println!("\nContacts from JSON:");
            println!("{}", "-".repeat(50));
            for contact in &preview {
                println!("{}", super::contact_line(contact));
            }
            println!();
        }
        Err(_) => println!("Error loading JSON.\n"),
    }
}
