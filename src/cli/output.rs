//! Styled terminal output
//!
//! Status lines, summaries and messages share one set of symbols and colors.

use console::style;

use crate::model::Action;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    pub fn warning(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a header/title
    pub fn header(&self, title: &str) {
        if !self.quiet {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    /// One status decision. Always printed: this is the command's result.
    pub fn decision(&self, id: &str, action: Action, titles: &[String], preview: &str) {
        let label = match action {
            Action::None => style(format!("{:<5}", "show")).green(),
            Action::Warn => style(format!("{:<5}", "warn")).yellow().bold(),
            Action::Hide => style(format!("{:<5}", "hide")).red().bold(),
        };

        if titles.is_empty() {
            println!("{} {} {}", label, style(id).cyan(), preview);
        } else {
            println!(
                "{} {} {} {}",
                label,
                style(id).cyan(),
                style(format!("[{}]", titles.join(", "))).magenta(),
                preview
            );
        }
    }

    /// Totals per action
    pub fn summary(&self, shown: usize, warned: usize, hidden: usize) {
        if !self.quiet {
            println!(
                "\n{} {} shown, {} warned, {} hidden",
                style("❯").cyan(),
                style(shown).green().bold(),
                style(warned).yellow().bold(),
                style(hidden).red().bold()
            );
        }
    }
}
