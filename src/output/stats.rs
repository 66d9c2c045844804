//! Statistics reporting.

use console::style;

use crate::download::RunReport;

/// Print the final run statistics block.
pub fn print_run_stats(report: &RunReport) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Run Statistics:").bold());
    println!("  Pages ready:     {}", report.pages_ready);
    if report.pages_exhausted > 0 {
        println!(
            "  Pages exhausted: {}",
            style(report.pages_exhausted).yellow()
        );
    }
    if report.pages_failed > 0 {
        println!("  Pages failed:    {}", style(report.pages_failed).red());
    }
    if report.pages_cancelled > 0 {
        println!(
            "  Pages cancelled: {}",
            style(report.pages_cancelled).yellow()
        );
    }
    println!("  Records found:   {}", report.records_discovered);
    println!("  Photos saved:    {}", report.downloads_succeeded);
    if report.downloads_failed > 0 {
        println!(
            "  Photos failed:   {}",
            style(report.downloads_failed).red()
        );
    }
    println!("  Bytes written:   {}", report.bytes_written);
    println!("{}", style("═".repeat(50)).dim());
}
