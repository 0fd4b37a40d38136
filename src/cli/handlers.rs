// src/cli/handlers.rs
use anyhow::{bail, Result};
use console::style;

use crate::api::types::GenerateResponse;
use crate::generators::{PasswordComposer, WordCatalog};
use crate::models::{MAX_REQUESTED_LENGTH, MIN_REQUESTED_LENGTH};

// Handlers for CLI commands
pub fn handle_generate(length: usize, count: usize, json: bool) -> Result<()> {
    if !crate::models::length_in_policy(length) {
        bail!(
            "password length must be between {} and {} characters",
            MIN_REQUESTED_LENGTH,
            MAX_REQUESTED_LENGTH
        );
    }

    let composer = PasswordComposer::new();

    for _ in 0..count.max(1) {
        let password = composer.generate_password(length);

        if json {
            println!("{}", serde_json::to_string(&GenerateResponse::ok(password))?);
        } else {
            println!("{}", style(&password).bold());
        }
    }

    Ok(())
}

pub fn handle_catalog() -> Result<()> {
    let stats = WordCatalog::global().stats();

    println!("📊 Word catalog distribution:");
    for (length, count) in &stats.buckets {
        println!("  {:>2} characters: {:>3} words", length, count);
    }
    println!("📝 Total words: {}", stats.total_words);

    Ok(())
}
