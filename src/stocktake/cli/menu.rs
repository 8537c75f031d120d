//! The interactive menu and the prompt loops behind each entry.
//!
//! All loops stop at end of input as if the operator had typed the quit token.

use super::console::Console;
use super::render::{print_error, print_messages, print_product};
use std::io::{BufRead, Write};
use std::path::Path;
use stocktake::api::{validate_name, AddRequest, InventoryApi, Lookup, ViewInput};
use stocktake::error::{InventoryError, Result};
use stocktake::normalize::parse_price;
use stocktake::store::DataStore;

pub const QUIT_TOKEN: &str = "q";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Add,
    Backup,
    View,
}

impl MenuCommand {
    /// Display order.
    pub const ALL: [MenuCommand; 3] = [MenuCommand::Add, MenuCommand::Backup, MenuCommand::View];

    pub fn key(self) -> &'static str {
        match self {
            MenuCommand::Add => "a",
            MenuCommand::Backup => "b",
            MenuCommand::View => "v",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            MenuCommand::Add => "Add a product to the database",
            MenuCommand::Backup => "Backup the database",
            MenuCommand::View => "View each product by ID",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuInput {
    Quit,
    Command(MenuCommand),
    Unknown(String),
}

impl MenuInput {
    pub fn parse(raw: &str) -> Self {
        let token = raw.trim().to_lowercase();
        if token == QUIT_TOKEN {
            return MenuInput::Quit;
        }
        MenuCommand::ALL
            .into_iter()
            .find(|cmd| cmd.key() == token)
            .map(MenuInput::Command)
            .unwrap_or(MenuInput::Unknown(token))
    }
}

pub(super) fn run_menu<S, R, W>(
    api: &mut InventoryApi<S>,
    console: &mut Console<R, W>,
    backup_path: &Path,
) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    loop {
        console.say(format!("Enter '{}' to quit.", QUIT_TOKEN))?;
        for cmd in MenuCommand::ALL {
            console.say(format!("{}) {}", cmd.key(), cmd.description()))?;
        }

        let Some(line) = console.prompt("Choose an option: ")? else {
            return Ok(());
        };

        match MenuInput::parse(&line) {
            MenuInput::Quit => return Ok(()),
            MenuInput::Command(MenuCommand::Add) => add_product(api, console)?,
            MenuInput::Command(MenuCommand::Backup) => backup(api, console, backup_path)?,
            MenuInput::Command(MenuCommand::View) => view_products(api, console)?,
            MenuInput::Unknown(_) => print_error(console.output_mut(), "You must choose a valid option.")?,
        }
    }
}

fn view_products<S, R, W>(api: &InventoryApi<S>, console: &mut Console<R, W>) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let (min, max) = match api.id_range() {
        Ok(range) => range,
        Err(InventoryError::EmptyStore) => {
            print_error(console.output_mut(), "There are no products to view yet.")?;
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    loop {
        let text = format!(
            "Please enter an ID or 'r' to return. ID ranges ({} - {}): ",
            min, max
        );
        let Some(line) = console.prompt(&text)? else {
            return Ok(());
        };

        match ViewInput::parse(&line) {
            ViewInput::Return => return Ok(()),
            ViewInput::Invalid(_) => {
                print_error(console.output_mut(), "Please enter a valid ID or 'r'.")?
            }
            ViewInput::OutOfRange(_) => print_error(
                console.output_mut(),
                format!("The ID must be between {} and {}", min, max),
            )?,
            ViewInput::Id(id) => match api.view_product(id)? {
                Lookup::Found(product) => print_product(console.output_mut(), &product)?,
                Lookup::Missing { min, max, .. } => print_error(
                    console.output_mut(),
                    format!("The ID must be between {} and {}", min, max),
                )?,
            },
        }
    }
}

fn add_product<S, R, W>(api: &mut InventoryApi<S>, console: &mut Console<R, W>) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let Some(name) = console.prompt("Please add a new product: ")? else {
        return Ok(());
    };
    if let Err(e) = validate_name(&name) {
        print_error(console.output_mut(), format!("{}. Nothing was added.", e))?;
        return Ok(());
    }

    let price = loop {
        let Some(price) = console.prompt("Please enter a price (ex: $5.99): ")? else {
            return Ok(());
        };
        match parse_price(&price) {
            Ok(_) => break price,
            Err(_) => print_error(
                console.output_mut(),
                "Enter the price in the correct format please.",
            )?,
        }
    };

    let Some(quantity) = console.prompt("Please enter the quantity: ")? else {
        return Ok(());
    };

    match api.add_product(&AddRequest::new(name, price, quantity)) {
        Ok(result) => print_messages(console.output_mut(), &result.messages)?,
        Err(e @ (InventoryError::InvalidQuantity(..) | InventoryError::InvalidName(_))) => {
            print_error(console.output_mut(), format!("{}. Nothing was added.", e))?
        }
        Err(e) => return Err(e),
    }
    Ok(())
}

fn backup<S, R, W>(api: &InventoryApi<S>, console: &mut Console<R, W>, path: &Path) -> Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let result = api.export(path)?;
    print_messages(console.output_mut(), &result.messages)?;
    Ok(())
}
