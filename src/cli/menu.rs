// src/cli/menu.rs
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use console::style;
use inquire::{CustomType, InquireError, Select};

use crate::generators::{PasswordComposer, WordCatalog};
use crate::models::{DEFAULT_REQUESTED_LENGTH, MAX_REQUESTED_LENGTH, MIN_REQUESTED_LENGTH};

const MENU_GENERATE: &str = "🔑 Generate a password";
const MENU_CATALOG: &str = "📚 Word catalog";
const MENU_EXIT: &str = "🚪 Exit";

pub fn run_cli_menu(should_exit: Arc<AtomicBool>) -> Result<()> {
    println!("🦀🔑 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║          🦀 PASSGEN CONSOLE          ║");
    println!("╚══════════════════════════════════════╝");

    let composer = PasswordComposer::new();

    while !should_exit.load(Ordering::SeqCst) {
        let choice = Select::new(
            "What would you like to do?",
            vec![MENU_GENERATE, MENU_CATALOG, MENU_EXIT],
        )
        .prompt();

        match choice {
            Ok(MENU_GENERATE) => generate_interactive(&composer)?,
            Ok(MENU_CATALOG) => show_catalog(),
            Ok(MENU_EXIT) => break,
            Ok(_) => unreachable!("unknown menu entry"),
            // ESC or Ctrl+C inside a prompt ends the session cleanly.
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("👋 Goodbye!");
    Ok(())
}

fn generate_interactive(composer: &PasswordComposer<'static>) -> Result<()> {
    let length = loop {
        let prompt = CustomType::<usize>::new("Desired password length:")
            .with_default(DEFAULT_REQUESTED_LENGTH)
            .with_help_message("between 8 and 50")
            .with_error_message("Please enter a whole number")
            .prompt();

        match prompt {
            Ok(value) if crate::models::length_in_policy(value) => break value,
            Ok(value) => println!(
                "❌ {} is out of range; please enter a number between {} and {}",
                value, MIN_REQUESTED_LENGTH, MAX_REQUESTED_LENGTH
            ),
            // Back out to the menu instead of ending the session.
            Err(InquireError::OperationCanceled) => return Ok(()),
            Err(e) => return Err(e.into()),
        }
    };

    let password = composer.generate_password(length);

    println!();
    println!("  {}", style(&password).bold().green());
    println!("  {} characters", password.len());
    println!();

    Ok(())
}

fn show_catalog() {
    let stats = WordCatalog::global().stats();

    println!("📊 Word catalog distribution:");
    for (length, count) in &stats.buckets {
        println!("  {:>2} characters: {:>3} words", length, count);
    }
    println!("📝 Total words: {}", stats.total_words);
}
