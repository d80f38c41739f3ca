use unicode_width::UnicodeWidthStr;

use crate::color;

/// Box-drawn table with columns sized to their widest cell.
pub struct TableFormatter {
    headers: Vec<&'static str>,
    widths: Vec<usize>,
}

impl TableFormatter {
    pub fn new(headers: &[&'static str], rows: &[Vec<String>]) -> Self {
        // Minimum widths = header label widths
        let mut widths: Vec<usize> = headers.iter().map(|h| display_width(h)).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(display_width(cell));
            }
        }

        Self {
            headers: headers.to_vec(),
            widths,
        }
    }

    /// Print the table. The first column is highlighted.
    pub fn print_table(&self, rows: &[Vec<String>]) {
        println!("{}", self.border('┌', '┬', '┐'));
        println!("{}", self.header_row());
        println!("{}", self.border('├', '┼', '┤'));
        for row in rows {
            println!("{}", self.row(row));
        }
        println!("{}", self.border('└', '┴', '┘'));
    }

    fn header_row(&self) -> String {
        let cells: Vec<String> = self
            .headers
            .iter()
            .zip(&self.widths)
            .map(|(header, width)| color::bold(&pad(header, *width)))
            .collect();
        self.join_cells(&cells)
    }

    fn row(&self, row: &[String]) -> String {
        let cells: Vec<String> = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let cell = pad(row.get(i).map_or("", String::as_str), *width);
                if i == 0 { color::ruby(&cell) } else { cell }
            })
            .collect();
        self.join_cells(&cells)
    }

    fn join_cells(&self, cells: &[String]) -> String {
        let sep = color::muted("│");
        let mut line = sep.clone();
        for cell in cells {
            line.push(' ');
            line.push_str(cell);
            line.push(' ');
            line.push_str(&sep);
        }
        line
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        color::muted(&format!(
            "{}{}{}",
            left,
            segments.join(&mid.to_string()),
            right
        ))
    }
}

/// Terminal display width of a string. Wide characters count as 2 columns.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Pad a string to a minimum display width without truncating.
pub(crate) fn pad(s: &str, min_width: usize) -> String {
    let width = display_width(s);
    if width >= min_width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(min_width - width))
    }
}
