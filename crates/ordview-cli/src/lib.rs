//! Shared CLI definitions for ordview.
//!
//! Used by the main application and by the build script (manpage) and
//! gen_docs binary (command-line-options markdown).

use clap::{CommandFactory, Parser, ValueEnum};
use std::path::{Path, PathBuf};

/// Output format for exporting the filtered dataset.
#[derive(Debug, Default, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ExportFormat {
    /// Comma-separated values, one record per filtered row
    #[default]
    Csv,
    /// A4 landscape PDF with a title and one table row per filtered row
    Pdf,
    /// Plain-text rendering of the visible table, optionally sent to a print command
    Print,
}

impl ExportFormat {
    pub const ALL: [Self; 3] = [Self::Csv, Self::Pdf, Self::Print];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Pdf => "PDF",
            Self::Print => "Print",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Pdf => "pdf",
            Self::Print => "txt",
        }
    }

    /// Detect export format from an output path. Returns None when extension is missing or unknown.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "pdf" => Some(Self::Pdf),
            "txt" | "prn" => Some(Self::Print),
            _ => None,
        }
    }
}

/// How search terms are interpreted.
#[derive(Debug, Default, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum SearchMode {
    /// Plain case-insensitive substring search (regex metacharacters are literal)
    #[default]
    Literal,
    /// Case-insensitive regular expression search; invalid patterns match nothing
    Regex,
}

impl SearchMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Literal => "literal",
            Self::Regex => "regex",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "literal" => Some(Self::Literal),
            "regex" => Some(Self::Regex),
            _ => None,
        }
    }
}

/// Command-line arguments for ordview
#[derive(Clone, Parser, Debug)]
#[command(
    name = "ordview",
    version,
    about = "Order tables in the terminal",
    long_about = "Browse, search, group and export order records in the terminal.\n\n\
                  Without a PATH, a synthetic order dataset is generated."
)]
pub struct Args {
    /// CSV or JSON file of order records to open. When omitted, synthetic orders are generated.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Number of synthetic orders to generate when no PATH is given (default: 1000)
    #[arg(long = "rows", value_name = "N")]
    pub rows: Option<usize>,

    /// Seed for the synthetic order generator, for reproducible datasets
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,

    /// Rows per page (default: 10). Use 0 to show all rows on one page.
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,

    /// How search terms are interpreted (literal or regex)
    #[arg(long = "search-mode", value_enum)]
    pub search_mode: Option<SearchMode>,

    /// Initial free-text search applied to every field
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Only show orders with exactly this status (e.g. Pending)
    #[arg(long = "status", value_name = "STATUS")]
    pub status: Option<String>,

    /// Only show orders with exactly this type (e.g. Online)
    #[arg(long = "type", value_name = "TYPE")]
    pub order_type: Option<String>,

    /// Comma-separated columns to group by, outermost first (e.g. country,status)
    #[arg(long = "group-by", value_name = "COLS", value_delimiter = ',')]
    pub group_by: Vec<String>,

    /// Export the filtered dataset in this format and exit without starting the UI
    #[arg(long = "export", value_enum, requires = "output")]
    pub export: Option<ExportFormat>,

    /// Output path for --export
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Width in pixels of one table column slot (default: 150)
    #[arg(long = "column-width", value_name = "PX")]
    pub column_width: Option<u32>,

    /// Width in pixels of one terminal cell, used to turn the terminal width into a viewport width (default: 8)
    #[arg(long = "cell-width", value_name = "PX")]
    pub cell_width: Option<u32>,

    /// Enable debug mode to show operational information
    #[arg(long = "debug", action)]
    pub debug: bool,

    /// Generate default configuration file at ~/.config/ordview/config.toml
    #[arg(long = "generate-config", action)]
    pub generate_config: bool,

    /// Force overwrite existing config file when using --generate-config
    #[arg(long = "force", requires = "generate_config", action)]
    pub force: bool,
}

/// Escape `|` and newlines for use in markdown table cells.
fn escape_table_cell(s: &str) -> String {
    s.replace('|', "\\|").replace(['\n', '\r'], " ")
}

fn value_placeholder(arg: &clap::Arg) -> String {
    arg.get_value_names()
        .map(|names| {
            names
                .iter()
                .map(|n: &clap::builder::Str| format!("<{}>", n.as_ref() as &str))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

/// Render command-line options as markdown.
pub fn render_options_markdown() -> String {
    let mut cmd = Args::command();
    cmd.build();

    let mut out = String::from("# Command Line Options\n\n");

    out.push_str("## Usage\n\n```\n");
    let usage = cmd.render_usage();
    out.push_str(&usage.to_string());
    out.push_str("\n```\n\n");

    out.push_str("## Options\n\n");
    out.push_str("| Option | Description |\n");
    out.push_str("|--------|-------------|\n");

    for arg in cmd.get_arguments() {
        let id = arg.get_id().as_ref().to_string();
        if id == "help" || id == "version" {
            continue;
        }

        let option_str = if arg.is_positional() {
            let placeholder = value_placeholder(arg);
            if arg.is_required_set() {
                placeholder
            } else {
                format!("[{placeholder}]")
            }
        } else {
            let mut parts = Vec::new();
            if let Some(s) = arg.get_short() {
                parts.push(format!("-{s}"));
            }
            if let Some(l) = arg.get_long() {
                parts.push(format!("--{l}"));
            }
            let op = parts.join(", ");
            let placeholder = if arg.get_action().takes_values() {
                value_placeholder(arg)
            } else {
                String::new()
            };
            if placeholder.is_empty() {
                op
            } else {
                format!("{op} {placeholder}")
            }
        };

        let help = arg
            .get_help()
            .map(|h| escape_table_cell(&h.to_string()))
            .unwrap_or_else(|| "-".to_string());

        out.push_str(&format!("| `{option_str}` | {help} |\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_from_path() {
        assert_eq!(
            ExportFormat::from_path(Path::new("orders.csv")),
            Some(ExportFormat::Csv)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("orders.PDF")),
            Some(ExportFormat::Pdf)
        );
        assert_eq!(
            ExportFormat::from_path(Path::new("orders.txt")),
            Some(ExportFormat::Print)
        );
        assert_eq!(ExportFormat::from_path(Path::new("orders")), None);
    }

    #[test]
    fn test_export_format_extension() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Pdf.extension(), "pdf");
        assert_eq!(ExportFormat::Print.extension(), "txt");
    }

    #[test]
    fn test_search_mode_parse() {
        assert_eq!(SearchMode::parse("Regex"), Some(SearchMode::Regex));
        assert_eq!(SearchMode::parse(" literal "), Some(SearchMode::Literal));
        assert_eq!(SearchMode::parse("glob"), None);
    }

    #[test]
    fn test_parse_group_by_and_export() {
        let args = Args::try_parse_from([
            "ordview",
            "--group-by",
            "country,status",
            "--export",
            "pdf",
            "--output",
            "out.pdf",
        ])
        .unwrap();
        assert_eq!(args.group_by, vec!["country", "status"]);
        assert_eq!(args.export, Some(ExportFormat::Pdf));
        assert_eq!(args.output, Some(PathBuf::from("out.pdf")));
        assert!(args.path.is_none());
    }

    #[test]
    fn test_export_requires_output() {
        assert!(Args::try_parse_from(["ordview", "--export", "csv"]).is_err());
    }

    #[test]
    fn test_render_options_markdown() {
        let md = render_options_markdown();
        assert!(md.starts_with("# Command Line Options"));
        assert!(md.contains("`--group-by <COLS>`"));
        assert!(md.contains("`[PATH]`"));
        assert!(!md.contains("--help"));
    }
}
