//! LaTeX rendering of quote rows and news sections.

use report_core::{HeadlineRecord, QuoteRecord, Symbol};

/// Markup closing the quote table opened by the header template.
pub const TABLE_CLOSE: &str = "\\end{tabular}\n \\end{center}\n \\end{table}%\n\\clearpage";

/// Section body for a symbol without headlines.
pub const NO_NEWS: &str = "No news found.";

const ROW_END: &str = "\\\\ \\hline\n";

/// Renders one table row; `percent_change` sits between Change and Dividend/share.
#[must_use]
pub fn render_quote_row(record: &QuoteRecord, percent_change: &str) -> String {
    let symbol = format!("\\head{{{}}}", record.symbol);
    let columns: [&str; 8] = [
        symbol.as_str(),
        &record.last_trade_date,
        &record.last_trade,
        &record.change,
        percent_change,
        &record.dividend_per_share,
        &record.dividend_pay_date,
        &record.ex_dividend_date,
    ];
    format!("{}{ROW_END}", columns.join(" & "))
}

/// Renders the news section for `symbol`.
///
/// An empty `headlines` slice renders [`NO_NEWS`] instead of an empty list.
#[must_use]
pub fn render_news_section(symbol: &Symbol, headlines: &[HeadlineRecord]) -> String {
    let mut section = format!("\n\n\\section*{{{symbol}}}\n");
    if headlines.is_empty() {
        section.push_str(NO_NEWS);
        return section;
    }

    section.push_str("\\begin{itemize}");
    for headline in headlines {
        // A leading `[` would be read as \item's optional label.
        let item = if headline.title.starts_with('[') {
            "\\item\\ "
        } else {
            "\\item "
        };
        section.push('\n');
        section.push_str(item);
        section.push_str(&headline.title);
        section.push_str(" --- ");
        section.push_str(&headline.source);
        section.push(' ');
        section.push_str(&headline.date);
    }
    section.push_str("\n\\end{itemize}");
    section
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_row() {
        let record = QuoteRecord {
            symbol: "IBM".to_string(),
            last_trade_date: "2/14/2013".to_string(),
            last_trade: "200.50".to_string(),
            change: "+0.50".to_string(),
            dividend_per_share: "3.40".to_string(),
            dividend_pay_date: "Mar  9".to_string(),
            ex_dividend_date: "Feb  6".to_string(),
        };
        assert_eq!(
            render_quote_row(&record, r"+0.25\%"),
            "\\head{IBM} & 2/14/2013 & 200.50 & +0.50 & +0.25\\% & 3.40 & Mar  9 & Feb  6\\\\ \\hline\n"
        );
    }

    #[test]
    fn test_section_with_headlines() {
        let symbol = Symbol::new("IBM").unwrap();
        let headlines = vec![
            HeadlineRecord::new("IBM rallies", "Reuters", "(Thu 3:15PM EST)"),
            HeadlineRecord::new("[video] Watson", "CNBC", "(Thu 1:00PM EST)"),
        ];
        assert_eq!(
            render_news_section(&symbol, &headlines),
            "\n\n\\section*{IBM}\n\\begin{itemize}\
             \n\\item IBM rallies --- Reuters (Thu 3:15PM EST)\
             \n\\item\\ [video] Watson --- CNBC (Thu 1:00PM EST)\
             \n\\end{itemize}"
        );
    }

    #[test]
    fn test_section_without_headlines() {
        let symbol = Symbol::new("XYZ").unwrap();
        let section = render_news_section(&symbol, &[]);
        assert_eq!(section, "\n\n\\section*{XYZ}\nNo news found.");
        assert!(!section.contains("itemize"));
    }
}
