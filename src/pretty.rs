//! Pretty printing for validation errors.
//!
//! This module provides colorized, truncatable terminal output for a
//! [`FieldErrors`] forest. The plain canonical rendering is
//! [`FieldErrors::describe`]; this is the friendlier variant for humans.
//!
//! # Output Format
//!
//! ```text
//! Validation errors (3):
//!
//!   • [max] established - The value of this field must be between 1900 and 2015
//!   • [multi] president
//!       • [min] owns - The value of this field must be between 0.25 and 0.75
//!   • [required] name - This field is required
//! ```
//!
//! With [`ReportOptions::show_paths`] each leaf also shows its full dotted
//! path (`president.owns`).

use std::io::Write;

use crate::error::{FieldError, FieldErrors, FormValidation};
use stillwater::Validation;

/// Options for pretty printing errors.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Enable colored output (auto-detected by default).
    pub color: ColorOption,
    /// Maximum leaf errors to display (None for all).
    pub max_errors: Option<usize>,
    /// Append the full dotted path to each leaf.
    pub show_paths: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            color: ColorOption::Auto,
            max_errors: Some(20),
            show_paths: false,
        }
    }
}

impl ReportOptions {
    /// Create options with colors disabled.
    pub fn no_color() -> Self {
        Self {
            color: ColorOption::Never,
            ..Default::default()
        }
    }

    /// Create options that show all errors (no truncation).
    pub fn show_all() -> Self {
        Self {
            max_errors: None,
            ..Default::default()
        }
    }

    /// Set the color option.
    pub fn with_color(mut self, color: ColorOption) -> Self {
        self.color = color;
        self
    }

    /// Set the maximum number of leaf errors to display.
    pub fn with_max_errors(mut self, max: Option<usize>) -> Self {
        self.max_errors = max;
        self
    }

    /// Set whether to show full paths.
    pub fn with_paths(mut self, show: bool) -> Self {
        self.show_paths = show;
        self
    }
}

/// Color output option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorOption {
    /// Auto-detect based on terminal capability.
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// ANSI color codes for terminal output.
struct Colors {
    error: &'static str,
    warning: &'static str,
    group: &'static str,
    key: &'static str,
    path: &'static str,
    reset: &'static str,
}

impl Colors {
    fn enabled() -> Self {
        Self {
            error: "\x1b[1;31m",   // bold red
            warning: "\x1b[1;33m", // bold yellow
            group: "\x1b[1;36m",   // bold cyan
            key: "\x1b[1;37m",     // bold white
            path: "\x1b[2m",       // dim
            reset: "\x1b[0m",
        }
    }

    fn disabled() -> Self {
        Self {
            error: "",
            warning: "",
            group: "",
            key: "",
            path: "",
            reset: "",
        }
    }
}

/// Internal error printer that handles formatting.
struct ErrorPrinter<'a> {
    options: &'a ReportOptions,
    colors: Colors,
}

impl<'a> ErrorPrinter<'a> {
    fn new(options: &'a ReportOptions, use_color: bool) -> Self {
        let colors = if use_color {
            Colors::enabled()
        } else {
            Colors::disabled()
        };
        Self { options, colors }
    }

    fn print(&self, errors: &FieldErrors, writer: &mut dyn Write) {
        let c = &self.colors;
        let total = errors.leaf_count();

        writeln!(
            writer,
            "\n{}Validation errors ({}):{}\n",
            c.error, total, c.reset
        )
        .ok();

        let mut shown = 0;
        let mut trail = Vec::new();
        if !self.print_level(errors, 0, &mut trail, &mut shown, writer) {
            writeln!(
                writer,
                "\n  {}...and {} more errors{}",
                c.warning,
                total - shown,
                c.reset
            )
            .ok();
        }
        writeln!(writer).ok();
    }

    /// Returns false once the leaf budget is exhausted.
    fn print_level<'e>(
        &self,
        errors: &'e FieldErrors,
        depth: usize,
        trail: &mut Vec<&'e str>,
        shown: &mut usize,
        writer: &mut dyn Write,
    ) -> bool {
        for error in errors.iter() {
            if let Some(max) = self.options.max_errors {
                if *shown >= max {
                    return false;
                }
            }
            if error.is_multi() {
                self.print_group(error, depth, writer);
                trail.push(error.key());
                let more = self.print_level(error.meta(), depth + 1, trail, shown, writer);
                trail.pop();
                if !more {
                    return false;
                }
            } else {
                self.print_leaf(error, depth, trail, writer);
                *shown += 1;
            }
        }
        true
    }

    fn print_group(&self, error: &FieldError, depth: usize, writer: &mut dyn Write) {
        let c = &self.colors;
        writeln!(
            writer,
            "  {}{}•{} [{}] {}{}{}",
            "    ".repeat(depth),
            c.group,
            c.reset,
            error.code(),
            c.key,
            error.key(),
            c.reset
        )
        .ok();
    }

    fn print_leaf(&self, error: &FieldError, depth: usize, trail: &[&str], writer: &mut dyn Write) {
        let c = &self.colors;
        let mut line = format!(
            "  {}{}•{} [{}] {}{}{}",
            "    ".repeat(depth),
            c.error,
            c.reset,
            error.code(),
            c.key,
            error.key(),
            c.reset
        );
        if let Some(detail) = error.detail() {
            line.push_str(&format!(" - {}", detail));
        }
        if self.options.show_paths && !trail.is_empty() {
            line.push_str(&format!(
                " {}({}.{}){}",
                c.path,
                trail.join("."),
                error.key(),
                c.reset
            ));
        }
        writeln!(writer, "{}", line).ok();
    }
}

/// Detect if stderr is a TTY for color support.
fn should_use_color(color_option: ColorOption) -> bool {
    match color_option {
        ColorOption::Always => true,
        ColorOption::Never => false,
        ColorOption::Auto => {
            use std::io::IsTerminal;
            std::io::stderr().is_terminal()
        }
    }
}

impl FieldErrors {
    /// Pretty print errors to stderr.
    pub fn pretty_print(&self, options: &ReportOptions) {
        let use_color = should_use_color(options.color);
        let printer = ErrorPrinter::new(options, use_color);
        let mut stderr = std::io::stderr();
        printer.print(self, &mut stderr);
    }

    /// Pretty print to a string.
    pub fn format(&self, options: &ReportOptions) -> String {
        let use_color = match options.color {
            ColorOption::Always => true,
            ColorOption::Never => false,
            ColorOption::Auto => false, // Default to no color for string formatting
        };
        let printer = ErrorPrinter::new(options, use_color);
        let mut buf = Vec::new();
        printer.print(self, &mut buf);
        String::from_utf8(buf).unwrap_or_default()
    }

    /// Pretty print with default options.
    pub fn pretty_print_default(&self) {
        self.pretty_print(&ReportOptions::default());
    }
}

/// Extension trait for handling a [`FormValidation`] at an application edge.
pub trait ValidationExt<T> {
    /// Unwrap or pretty print errors and exit with code 1.
    ///
    /// ```ignore
    /// use scrub::{validation, ValidationExt};
    ///
    /// validation(&signup).unwrap_or_exit();
    /// ```
    fn unwrap_or_exit(self) -> T;

    /// Unwrap or pretty print errors with custom options and exit.
    fn unwrap_or_exit_with(self, options: &ReportOptions) -> T;

    /// Convert to Result, pretty printing on error but not exiting.
    fn unwrap_or_print(self) -> Result<T, FieldErrors>;
}

impl<T> ValidationExt<T> for FormValidation<T> {
    fn unwrap_or_exit(self) -> T {
        self.unwrap_or_exit_with(&ReportOptions::default())
    }

    fn unwrap_or_exit_with(self, options: &ReportOptions) -> T {
        match self {
            Validation::Success(value) => value,
            Validation::Failure(errors) => {
                errors.pretty_print(options);
                std::process::exit(1);
            }
        }
    }

    fn unwrap_or_print(self) -> Result<T, FieldErrors> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(errors) => {
                errors.pretty_print_default();
                Err(errors)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LeafCode;
    use pretty_assertions::assert_eq;

    fn leaf(code: LeafCode, key: &str, detail: &str) -> FieldError {
        FieldError::new(code, key, detail)
    }

    fn multi(key: &str, children: FieldErrors) -> FieldError {
        FieldError::multi(key, children).unwrap()
    }

    fn create_test_errors() -> FieldErrors {
        vec![
            leaf(LeafCode::Max, "established", "too late"),
            multi(
                "president",
                FieldErrors::single(leaf(LeafCode::Min, "owns", "too little")),
            ),
            leaf(LeafCode::Required, "name", ""),
        ]
        .into()
    }

    #[test]
    fn test_format_layout() {
        let output = create_test_errors().format(&ReportOptions::no_color());
        assert_eq!(
            output,
            "\nValidation errors (3):\n\n\
             \x20 • [max] established - too late\n\
             \x20 • [multi] president\n\
             \x20     • [min] owns - too little\n\
             \x20 • [required] name\n\n"
        );
    }

    #[test]
    fn test_header_counts_leaves() {
        let output = create_test_errors().format(&ReportOptions::no_color());
        assert!(output.contains("Validation errors (3):"));
    }

    #[test]
    fn test_paths_shown_for_nested_leaves() {
        let options = ReportOptions::no_color().with_paths(true);
        let output = create_test_errors().format(&options);
        assert!(output.contains("[min] owns - too little (president.owns)"));
        assert!(!output.contains("(established)"));
    }

    #[test]
    fn test_truncation_with_max_errors() {
        let errors: FieldErrors = (1..=5)
            .map(|i| leaf(LeafCode::Required, &format!("field{}", i), ""))
            .collect();

        let options = ReportOptions::no_color().with_max_errors(Some(3));
        let output = errors.format(&options);

        assert!(output.contains("field1"));
        assert!(output.contains("field3"));
        assert!(!output.contains("field4"));
        assert!(output.contains("...and 2 more errors"));
    }

    #[test]
    fn test_truncation_inside_nested_group() {
        let errors = FieldErrors::single(multi(
            "list",
            vec![
                leaf(LeafCode::Min, "a", ""),
                leaf(LeafCode::Min, "b", ""),
            ]
            .into(),
        ));
        let output = errors.format(&ReportOptions::no_color().with_max_errors(Some(1)));
        assert!(output.contains("[min] a"));
        assert!(!output.contains("[min] b"));
        assert!(output.contains("...and 1 more errors"));
    }

    #[test]
    fn test_truncation_skips_group_with_no_budget_left() {
        let errors: FieldErrors = vec![
            leaf(LeafCode::Required, "name", ""),
            multi(
                "president",
                FieldErrors::single(leaf(LeafCode::Min, "owns", "")),
            ),
        ]
        .into();
        let output = errors.format(&ReportOptions::no_color().with_max_errors(Some(1)));
        assert!(output.contains("[required] name"));
        assert!(!output.contains("[multi] president"));
        assert!(!output.contains("owns"));
        assert!(output.contains("...and 1 more errors"));
    }

    #[test]
    fn test_no_truncation_when_disabled() {
        let errors: FieldErrors = (1..=30)
            .map(|i| leaf(LeafCode::Required, &format!("f{}", i), ""))
            .collect();
        let output = errors.format(&ReportOptions::show_all().with_color(ColorOption::Never));
        assert!(output.contains("f30"));
        assert!(!output.contains("...and"));
    }

    #[test]
    fn test_color_option_always() {
        let options = ReportOptions::default().with_color(ColorOption::Always);
        let output = create_test_errors().format(&options);
        assert!(output.contains("\x1b["));
    }

    #[test]
    fn test_color_option_never() {
        let options = ReportOptions::default().with_color(ColorOption::Never);
        let output = create_test_errors().format(&options);
        assert!(!output.contains("\x1b["));
    }

    #[test]
    fn test_options_builder() {
        let options = ReportOptions::default()
            .with_color(ColorOption::Always)
            .with_max_errors(Some(10))
            .with_paths(true);

        assert_eq!(options.color, ColorOption::Always);
        assert_eq!(options.max_errors, Some(10));
        assert!(options.show_paths);
    }

    #[test]
    fn test_unwrap_or_print_success() {
        let validation: FormValidation<i32> = Validation::Success(42);
        assert_eq!(validation.unwrap_or_print().ok(), Some(42));
    }

    #[test]
    fn test_unwrap_or_print_failure() {
        let validation: FormValidation<i32> = Validation::Failure(create_test_errors());
        let result = validation.unwrap_or_print();
        assert_eq!(result.err().map(|e| e.len()), Some(3));
    }
}
