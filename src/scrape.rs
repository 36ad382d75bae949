// src/scrape.rs
//
// Pulls the echoed-inputs block and the result table out of the response
// page. Everything is located by structure (tag nesting), never by byte
// offsets: ModelWeb shifts whitespace between releases, not its skeleton.

use scraper::{ElementRef, Html, Selector};

use crate::data::{Cell, DataSet};
use crate::error::Error;

/// Extract `(echo, dataset)` from a result page.
///
/// A page without a data table is an error: either the service answered
/// with an error page, or its layout changed for real. A data row whose
/// cell count disagrees with the header is also an error, never dropped.
pub fn extract(raw: &str) -> Result<(String, DataSet), Error> {
    let doc = Html::parse_document(raw);

    let table = doc
        .select(&sel("table"))
        .next()
        .ok_or_else(|| Error::Scrape(s!("no table found")))?;

    let echo = echo_block(&doc, table);
    let data = read_table(table)?;
    Ok((echo, data))
}

// Literal selectors only
fn sel(css: &str) -> Selector {
    Selector::parse(css).unwrap()
}

/// The service restates the submitted inputs in a `<pre>` block ahead of
/// the data table. Fall back to whatever text precedes the table when the
/// block is missing; an empty echo is not an error.
fn echo_block(doc: &Html, table: ElementRef) -> String {
    for pre in doc.select(&sel("pre")) {
        // Skip a <pre> that wraps the table itself
        if table.ancestors().any(|a| a.id() == pre.id()) {
            continue;
        }
        return pre.text().collect::<String>().trim().to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    for sib in table.prev_siblings() {
        if let Some(el) = ElementRef::wrap(sib) {
            parts.push(el.text().collect());
        } else if let Some(t) = sib.value().as_text() {
            parts.push(t.to_string());
        }
    }
    parts.reverse();
    normalize_ws(&parts.concat())
}

fn read_table(table: ElementRef) -> Result<DataSet, Error> {
    let tr_sel = sel("tr");
    let th_sel = sel("th");
    let cell_sel = sel("td, th");

    let rows: Vec<ElementRef> = table.select(&tr_sel).collect();

    // Header row: the first <tr> carrying a <th>; without any <th> in the
    // table, the first row plays that role.
    let header_idx = rows
        .iter()
        .position(|tr| tr.select(&th_sel).next().is_some())
        .unwrap_or(0);
    let header_row = rows
        .get(header_idx)
        .ok_or_else(|| Error::Scrape(s!("no table found")))?;

    let headers: Vec<String> = header_row.select(&cell_sel).map(cell_text).collect();
    if headers.is_empty() {
        return Err(Error::Scrape(s!("no table found")));
    }

    let mut data = DataSet::new(headers);
    let width = data.width();

    // Column types are declared by the first data row
    let mut numeric: Vec<bool> = Vec::new();

    for tr in &rows[header_idx + 1..] {
        let cells: Vec<String> = tr.select(&cell_sel).map(cell_text).collect();
        if cells.is_empty() {
            continue; // spacer row
        }
        if cells.len() != width {
            return Err(Error::Scrape(format!(
                "row/column mismatch: row has {} cells, header has {} columns",
                cells.len(),
                width
            )));
        }

        if numeric.is_empty() {
            numeric = cells.iter().map(|c| parse_num(c).is_some()).collect();
        }

        let mut typed = Vec::with_capacity(width);
        for (j, text) in cells.into_iter().enumerate() {
            if numeric[j] {
                match parse_num(&text) {
                    Some(n) => typed.push(Cell::Num(n)),
                    None => {
                        return Err(Error::Scrape(format!(
                            "column {:?} is numeric but row {} holds {:?}",
                            data.headers()[j],
                            data.len() + 1,
                            text
                        )));
                    }
                }
            } else {
                typed.push(Cell::Text(text));
            }
        }
        data.push_row(typed)?;
    }

    Ok(data)
}

/* ---------- helpers ---------- */

fn cell_text(el: ElementRef) -> String {
    normalize_ws(&el.text().collect::<String>())
}

fn parse_num(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok()
}

fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}
