use num_format::{Locale, ToFormattedString as _};

/// Count with `en` thousands separators (ex. 1,234).
pub(crate) fn format_count(count: u64) -> String {
    count.to_formatted_string(&Locale::en)
}

/// Plain-text table with a header line. Every column is right-aligned to its
/// widest cell and columns are separated by two spaces.
pub(crate) fn format_table<S: AsRef<str>>(headers: &[&str], rows: &[Vec<S>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.as_ref().chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut table = String::new();
    push_line(&mut table, headers, &widths);
    for row in rows {
        let cells: Vec<&str> = row.iter().map(|cell| cell.as_ref()).collect();
        push_line(&mut table, &cells, &widths);
    }
    table
}

fn push_line(table: &mut String, cells: &[&str], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:>width$}", cell))
        .collect::<Vec<_>>()
        .join("  ");
    table.push_str(&line);
    table.push('\n');
}
