//! Whole-document tests against fixed quote and news fixtures.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use proptest::prelude::*;
use report::{
    DataProvider, NewsProvider, QuoteField, QuoteProvider, ReportAssembler, ReportConfig,
    ReportError, ReportPaths, Result, Symbol, TABLE_CLOSE, generate_report,
};

const HEADER: &str = "\\documentclass{article}\n\\begin{document}\n\\begin{table}\n\\begin{center}\n\\begin{tabular}{llllllll}\n";
const FOOTER: &str = "\n\\end{document}\n";

/// Answers every symbol with a quote derived from its position and a one-item news page.
#[derive(Debug, Default)]
struct FixtureProvider {
    pages: HashMap<String, String>,
    failing_news: Option<String>,
}

impl DataProvider for FixtureProvider {
    fn name(&self) -> &str {
        "Fixture"
    }

    fn description(&self) -> &str {
        "Deterministic fixtures"
    }
}

#[async_trait]
impl QuoteProvider for FixtureProvider {
    async fn fetch_quotes(&self, symbols: &[Symbol], _fields: &[QuoteField]) -> Result<String> {
        Ok(symbols
            .iter()
            .map(|s| format!("\"{s}\",\"2/14/2013\",505.00,+5.00,N/A,\"N/A\",\"N/A\"\r\n"))
            .collect())
    }
}

#[async_trait]
impl NewsProvider for FixtureProvider {
    async fn fetch_news(&self, symbol: &Symbol, _date: NaiveDate) -> Result<String> {
        if self.failing_news.as_deref() == Some(symbol.as_str()) {
            return Err(ReportError::Http {
                status: 503,
                url: format!("fixture://news/{symbol}"),
            });
        }
        Ok(self.pages.get(symbol.as_str()).cloned().unwrap_or_else(|| {
            format!(
                "<html><h3><span>Headlines</span></h3><ul>\
                 <li><a href=\"http://example.com/{symbol}\">{symbol} &amp; peers gain 2%</a>\
                 <cite>Reuters&nbsp;<span>(Thu 3:15PM EST)</span></cite></li></ul></html>"
            )
        }))
    }
}

fn assembler(provider: FixtureProvider, config: ReportConfig) -> ReportAssembler {
    let provider = Arc::new(provider);
    ReportAssembler::new(provider.clone(), provider).with_config(config)
}

fn config() -> ReportConfig {
    ReportConfig::new().with_news_date(NaiveDate::from_ymd_opt(2013, 2, 14).unwrap())
}

fn expected_row(symbol: &str) -> String {
    format!(
        "\\head{{{symbol}}} & 2/14/2013 & 505.00 & +5.00 & +1.00\\% & N/A & N/A & N/A\\\\ \\hline\n"
    )
}

fn expected_section(symbol: &str) -> String {
    format!(
        "\n\n\\section*{{{symbol}}}\n\\begin{{itemize}}\
         \n\\item {symbol} \\& peers gain 2\\% --- Reuters (Thu 3:15PM EST)\
         \n\\end{{itemize}}"
    )
}

#[tokio::test]
async fn document_matches_fixture_byte_for_byte() {
    let mut provider = FixtureProvider::default();
    provider
        .pages
        .insert("XYZ".to_string(), "<html>No headlines today</html>".to_string());
    let symbols: Vec<Symbol> = ["IBM", "XOM", "XYZ"]
        .iter()
        .map(|s| Symbol::new(*s).unwrap())
        .collect();

    let document = assembler(provider, config())
        .assemble(&symbols, HEADER, FOOTER)
        .await
        .unwrap();

    let expected = [
        HEADER.to_string(),
        expected_row("IBM"),
        expected_row("XOM"),
        expected_row("XYZ"),
        TABLE_CLOSE.to_string(),
        expected_section("IBM"),
        expected_section("XOM"),
        "\n\n\\section*{XYZ}\nNo news found.".to_string(),
        FOOTER.to_string(),
    ]
    .concat();
    assert_eq!(document, expected);
}

/// Lays out `DATA/`, `CODE/` and the symbol list under a fresh temporary root.
fn report_root(symbol_list: &str, with_templates: bool) -> (tempfile::TempDir, ReportPaths) {
    let root = tempfile::tempdir().unwrap();
    let paths = ReportPaths::under(root.path());

    std::fs::create_dir_all(root.path().join("DATA")).unwrap();
    std::fs::write(&paths.input, symbol_list).unwrap();
    if with_templates {
        std::fs::create_dir_all(&paths.template_dir).unwrap();
        std::fs::write(paths.header(), HEADER).unwrap();
        std::fs::write(paths.footer(), FOOTER).unwrap();
    }
    (root, paths)
}

#[tokio::test]
async fn generate_report_writes_output_once() {
    let (_root, paths) = report_root("IBM\\nInternational Business Machines\nXOM\n", true);

    generate_report(&assembler(FixtureProvider::default(), config()), &paths)
        .await
        .unwrap();

    let written = std::fs::read_to_string(&paths.output).unwrap();
    assert!(written.starts_with(HEADER));
    assert!(written.ends_with(FOOTER));
    assert!(written.contains(&expected_row("IBM")));
    assert!(written.contains(&expected_section("XOM")));
}

#[tokio::test]
async fn missing_templates_write_nothing() {
    let (_root, paths) = report_root("IBM\n", false);

    let result = generate_report(&assembler(FixtureProvider::default(), config()), &paths).await;
    assert!(result.is_err());
    assert!(!paths.output.exists());
}

#[tokio::test]
async fn failed_news_fetch_writes_nothing() {
    let (_root, paths) = report_root("IBM\nXOM\n", true);
    let provider = FixtureProvider {
        failing_news: Some("XOM".to_string()),
        ..FixtureProvider::default()
    };

    let err = generate_report(&assembler(provider, config()), &paths)
        .await
        .unwrap_err();
    assert!(err.is_fetch());
    assert!(!paths.output.exists());
    assert!(!paths.output.with_extension("tex.tmp").exists());
}

proptest! {
    /// N symbols always give N rows and N sections, in input order.
    #[test]
    fn rows_and_sections_follow_input_order(
        names in prop::collection::vec("[A-Z]{1,4}[0-9]{2}", 1..8),
        concurrency in 1usize..4,
    ) {
        let symbols: Vec<Symbol> = names.iter().map(|s| Symbol::new(s.as_str()).unwrap()).collect();
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let document = runtime
            .block_on(
                assembler(FixtureProvider::default(), config().with_concurrency(concurrency))
                    .assemble(&symbols, "", ""),
            )
            .unwrap();

        let (table, sections) = document.split_once(TABLE_CLOSE).unwrap();
        let rows: Vec<&str> = table.lines().collect();
        prop_assert_eq!(rows.len(), names.len());
        for (row, name) in rows.iter().zip(&names) {
            let prefix = format!("\\head{{{name}}} &");
            prop_assert!(row.starts_with(&prefix));
        }

        let titles: Vec<&str> = sections
            .split("\\section*{")
            .skip(1)
            .map(|s| s.split('}').next().unwrap())
            .collect();
        prop_assert_eq!(titles, names.iter().map(String::as_str).collect::<Vec<_>>());
    }
}
