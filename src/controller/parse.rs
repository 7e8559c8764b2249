use crate::error::CoreError;
use scraper::{ElementRef, Html, Selector};

/// Parsed statistics page: the selected tournament/course labels and the
/// primary stats table as a row grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatsPage {
    pub tournament: String,
    pub course: String,
    pub rows: Vec<TableRow>,
}

/// One table row with its leading label cell split off. The label is the
/// row's original first cell (hole-index artifact on the header row, category
/// name on data rows); `cells` is the rest of the row in rendered order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableRow {
    pub label: String,
    pub cells: Vec<String>,
}

const STATS_TABLE_SELECTOR: &str = "table.tablehead";

fn selector(css: &str) -> Result<Selector, CoreError> {
    Selector::parse(css).map_err(|e| CoreError::Parse(format!("bad selector {css}: {e}")))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn selected_option(doc: &Html, select_name: &str) -> Result<String, CoreError> {
    let sel = selector(&format!(
        "select[name=\"{select_name}\"] option[selected]"
    ))?;
    // Missing selection renders as an empty label, same as the source page
    // when no tournament is in progress.
    Ok(doc.select(&sel).next().map(cell_text).unwrap_or_default())
}

/// Pure transform from raw HTML to a row grid. Fails if the marker table is
/// absent or has no data rows under its header.
pub fn parse_stats_page(html: &str) -> Result<StatsPage, CoreError> {
    let doc = Html::parse_document(html);

    let tournament = selected_option(&doc, "tournaments")?;
    let course = selected_option(&doc, "course")?;

    let table_sel = selector(STATS_TABLE_SELECTOR)?;
    let table = doc
        .select(&table_sel)
        .next()
        .ok_or_else(|| CoreError::Parse(format!("no {STATS_TABLE_SELECTOR} table in page")))?;

    let row_sel = selector("tr")?;
    let cell_sel = selector("td, th")?;

    let mut rows = Vec::new();
    for tr in table.select(&row_sel) {
        let mut cells = tr.select(&cell_sel).map(cell_text);
        let Some(label) = cells.next() else {
            continue;
        };
        rows.push(TableRow {
            label,
            cells: cells.collect(),
        });
    }

    if rows.len() < 2 {
        return Err(CoreError::Parse(format!(
            "stats table has {} rows, need a header and at least one data row",
            rows.len()
        )));
    }

    Ok(StatsPage {
        tournament,
        course,
        rows,
    })
}
