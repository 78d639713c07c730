//! Home screen shown when no command is given

use super::output::render;
use crate::product::ProductConfig;
use colored::Colorize;
use console::Term;
use std::io;

/// Options of the init command, as shown on the home screen
const OPTIONS: &[(&str, &str)] = &[
    ("-b, --blank", "Create a blank project (no demo, no audio)"),
    ("-y, --yes", "Accept all defaults without prompting"),
    ("--release <tag>", "Use a specific release (default: latest)"),
    ("--asset-dir <dir>", "Copy assets from a local mirror (for development use)"),
    ("-v, --verbose", "Show debug logging"),
    ("-h, --help", "Show this screen"),
    ("-V, --version", "Print version"),
];

/// Plain usage text for `product`
pub fn usage_text<C: ProductConfig>(product: &C) -> String {
    let mut text = String::from("Usage:\n");
    text.push_str(&format!("  {} init [project-name] [options]\n\n", product.name()));
    text.push_str("Options:\n");
    for (flag, help) in OPTIONS {
        text.push_str(&format!("  {:<20} {}\n", flag, help));
    }
    text
}

/// Print the banner to stdout
pub fn show_banner<C: ProductConfig>(product: &C) {
    render(write_banner(&Term::stdout(), product));
}

/// Print the usage text to stdout
pub fn show_usage<C: ProductConfig>(product: &C) {
    let term = Term::stdout();
    render(
        usage_text(product)
            .lines()
            .try_for_each(|line| term.write_line(&line.yellow().to_string())),
    );
}

fn write_banner<C: ProductConfig>(term: &Term, product: &C) -> io::Result<()> {
    let title = format!("{} CLI", product.display_name());
    term.write_line(&title.cyan().bold().to_string())?;
    term.write_line(&product.tagline().magenta().to_string())?;
    term.write_line("")
}
