//! File-system collaborators: symbol list, templates and report output.
//!
//! Every path is explicit; nothing here depends on the process working directory.

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, info};

use report_core::{Result, Symbol};

/// Default symbol list file name inside the data directory.
pub const DEFAULT_INPUT: &str = "stock_list.txt";
/// Default report file name inside the output directory.
pub const DEFAULT_OUTPUT: &str = "stock_report.tex";
/// Header template file name inside the template directory.
pub const HEADER_TEMPLATE: &str = "file_start.tex";
/// Footer template file name inside the template directory.
pub const FOOTER_TEMPLATE: &str = "file_end.tex";

/// Literal two-character token ending the symbol part of a list line.
const ANNOTATION_SEPARATOR: &str = r"\n";

/// Locations of the report inputs and output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportPaths {
    /// Symbol list file.
    pub input: PathBuf,
    /// Directory holding the header and footer templates.
    pub template_dir: PathBuf,
    /// Report file to write.
    pub output: PathBuf,
}

impl ReportPaths {
    /// Paths laid out as `DATA/stock_list.txt`, `CODE/*.tex`, `OUTPUT/stock_report.tex` under `root`.
    #[must_use]
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            input: root.join("DATA").join(DEFAULT_INPUT),
            template_dir: root.join("CODE"),
            output: root.join("OUTPUT").join(DEFAULT_OUTPUT),
        }
    }

    /// Header template path.
    #[must_use]
    pub fn header(&self) -> PathBuf {
        self.template_dir.join(HEADER_TEMPLATE)
    }

    /// Footer template path.
    #[must_use]
    pub fn footer(&self) -> PathBuf {
        self.template_dir.join(FOOTER_TEMPLATE)
    }
}

/// Header and footer text wrapped around the generated body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Templates {
    /// Text before the quote table, including the table opening.
    pub header: String,
    /// Text after the last news section.
    pub footer: String,
}

impl Templates {
    /// Loads `file_start.tex` and `file_end.tex` for `paths`.
    pub async fn load(paths: &ReportPaths) -> Result<Self> {
        let header = fs::read_to_string(paths.header()).await?;
        let footer = fs::read_to_string(paths.footer()).await?;
        debug!(
            header = header.len(),
            footer = footer.len(),
            "Loaded templates"
        );
        Ok(Self { header, footer })
    }
}

/// Parses a symbol list: one symbol per line, annotations after a literal `\n` ignored.
///
/// Blank lines are skipped.
///
/// # Errors
///
/// Returns [`ReportError::InvalidSymbol`](report_core::ReportError::InvalidSymbol)
/// for a line whose symbol part is not a valid symbol.
pub fn parse_symbol_list(text: &str) -> Result<Vec<Symbol>> {
    text.lines()
        .map(|line| {
            line.split_once(ANNOTATION_SEPARATOR)
                .map_or(line, |(symbol, _)| symbol)
                .trim()
        })
        .filter(|symbol| !symbol.is_empty())
        .map(Symbol::new)
        .collect()
}

/// Reads and parses the symbol list at `path`.
pub async fn read_symbols(path: &Path) -> Result<Vec<Symbol>> {
    let text = fs::read_to_string(path).await?;
    let symbols = parse_symbol_list(&text)?;
    info!(path = %path.display(), count = symbols.len(), "Loaded symbol list");
    Ok(symbols)
}

/// Writes `document` to `path` in one step.
///
/// The text goes to a temporary sibling first and is renamed into place, so a
/// failed write never leaves a truncated report behind.
pub async fn write_report(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, document).await?;
    fs::rename(&tmp, path).await?;
    info!(path = %path.display(), bytes = document.len(), "Wrote report");
    Ok(())
}
