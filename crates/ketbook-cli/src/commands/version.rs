//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - inline notebook output for quantum workflows",
        style("ketbook").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  ketbook-display  Display bundles (MIME type -> base64 payload)");
    println!("  ketbook-cli      Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
