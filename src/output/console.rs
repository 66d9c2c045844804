//! Console output utilities.

use console::style;

use crate::config::RunConfig;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════╗
║     HouseVision Photo Downloader          ║
╚═══════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print the run configuration summary.
pub fn print_config_summary(config: &RunConfig) {
    println!();
    println!("{}", style("Configuration:").bold());
    println!("  Listing URL: {}", config.base_url);
    println!("  Pages:       {}", config.pages);
    println!("  Directory:   {}", config.output_dir.display());
    match config.max_concurrent_downloads {
        Some(n) => println!("  Downloads:   up to {} concurrent", n),
        None => println!("  Downloads:   unbounded"),
    }
    println!();
}
