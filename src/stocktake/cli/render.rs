use colored::Colorize;
use std::io::{self, Write};
use stocktake::api::{CmdMessage, MessageLevel};
use stocktake::model::Product;
use stocktake::normalize::format_price;
use unicode_width::UnicodeWidthStr;

pub(super) fn print_messages<W: Write>(out: &mut W, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(out, "{}", message.content.dimmed())?,
            MessageLevel::Success => writeln!(out, "{}", message.content.green())?,
            MessageLevel::Warning => writeln!(out, "{}", message.content.yellow())?,
            MessageLevel::Error => writeln!(out, "{}", message.content.red())?,
        }
    }
    Ok(())
}

pub(super) fn print_error<W: Write>(out: &mut W, text: impl Into<String>) -> io::Result<()> {
    print_messages(out, &[CmdMessage::error(text)])
}

pub(super) fn print_product<W: Write>(out: &mut W, product: &Product) -> io::Result<()> {
    let name_label = "Name: ";
    writeln!(out)?;
    writeln!(out, "ID: {}", product.id.to_string().yellow())?;
    writeln!(out, "{}{}", name_label, product.name.bold())?;
    writeln!(out, "{}", "-".repeat(name_label.len() + product.name.width()))?;
    writeln!(out, "Price: {}", format_price(product.price))?;
    writeln!(out, "Quantity: {}", product.quantity)?;
    writeln!(out, "Date Updated: {}", product.last_updated)?;
    writeln!(out)?;
    Ok(())
}
