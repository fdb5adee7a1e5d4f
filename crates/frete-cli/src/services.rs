//! # Services CLI: list the named carrier services.

use anyhow::Result;

use frete_core::Service;

/// Execute the services subcommand.
pub fn run_services() -> Result<u8> {
    println!("Available services:");
    println!();
    for service in Service::all() {
        println!("  {:<16} {}  {}", service.as_str(), service.code(), service.label());
    }
    println!();
    println!("Any other 5-digit contract service code is accepted as-is.");
    Ok(0)
}
