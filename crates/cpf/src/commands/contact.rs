//! Contact command implementation.
//!
//! Sends a message to the club through the simulated contact form.

use std::io::{self, IsTerminal};
use std::time::Duration;

use cpf_content::contact::{ContactClient, ContactForm};
use dialoguer::Input;

use super::{CommandContext, CommandError, Result};
use crate::output::{format_receipt, format_receipt_json};

/// Options for the contact command.
#[derive(Debug)]
pub struct ContactOptions {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    /// Where the message goes.
    pub recipient: String,
    /// Simulated delivery delay.
    pub delay: Duration,
}

/// Executes the contact command.
///
/// Missing fields are prompted for when stdin is a terminal and output is not
/// JSON; otherwise they stay blank and validation reports the first one.
///
/// # Errors
///
/// Returns a contact error when the form is incomplete, the email is
/// malformed or the recipient is unusable.
pub async fn execute(ctx: &CommandContext, opts: &ContactOptions) -> Result<()> {
    let interactive = !ctx.json_output && io::stdin().is_terminal();
    let form = ContactForm::new(
        field(opts.name.as_deref(), "Your name", interactive)?,
        field(opts.email.as_deref(), "Your email", interactive)?,
        field(opts.message.as_deref(), "Message", interactive)?,
    );

    let client = ContactClient::builder(&opts.recipient)
        .delay(opts.delay)
        .build()?;

    if ctx.verbose {
        eprintln!("Sending message to {}...", client.recipient());
    }
    let receipt = client.submit(&form).await?;

    if ctx.json_output {
        println!("{}", format_receipt_json(&receipt)?);
    } else if !ctx.quiet {
        print!("{}", format_receipt(&receipt, ctx.use_colors));
    }

    Ok(())
}

/// Returns the given value, or asks for it when interactive.
fn field(given: Option<&str>, prompt: &str, interactive: bool) -> Result<String> {
    match given {
        Some(value) => Ok(value.to_string()),
        None if interactive => Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| CommandError::Io(io::Error::other(e.to_string()))),
        None => Ok(String::new()),
    }
}
