//! term-checklist CLI
//!
//! Present a checklist over the given items and print the selection.

use std::process::ExitCode;

use clap::Parser;

use term_checklist::checklist::Checklist;
use term_checklist::error::Result;
use term_checklist::report::{format_indices, format_selection};
use term_checklist::types::{OutputFormat, SelectionReport};

#[derive(Parser)]
#[command(name = "term-checklist")]
#[command(about = "Interactive multi-select checklist for the terminal")]
#[command(version)]
struct Cli {
    /// Choice labels to present, in order
    items: Vec<String>,

    /// Header prompt shown above the list
    #[arg(long)]
    header: Option<String>,

    /// Marker shown on selected rows
    #[arg(long)]
    selected_marker: Option<String>,

    /// Marker shown on unselected rows
    #[arg(long)]
    unselected_marker: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    format: OutputFormatArg,

    /// Print selected indices instead of labels (human format only)
    #[arg(long)]
    indices: bool,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run_session(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// SESSION
// ============================================================================

fn run_session(cli: Cli) -> Result<()> {
    let format: OutputFormat = cli.format.into();

    let mut list = Checklist::new(cli.items);
    if let Some(header) = cli.header {
        list = list.header(header);
    }
    if let Some(marker) = cli.selected_marker {
        list = list.selected_marker(marker);
    }
    if let Some(marker) = cli.unselected_marker {
        list = list.unselected_marker(marker);
    }

    let selected = list.show()?;
    let report = SelectionReport::new(list.header_text(), list.choices(), &selected);

    let output = if cli.indices && format == OutputFormat::Human {
        format_indices(&report)
    } else {
        format_selection(&report, format)
    };
    print!("{}", output);

    Ok(())
}
