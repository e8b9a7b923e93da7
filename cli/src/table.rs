use std::fmt::Write;

/// Render rows as an ascii table with `title` set into the top border.
///
/// The first row is the heading and is separated from the rest by a rule.
pub fn render(title: &str, rows: &[[String; 4]]) -> String {
    let mut widths = [0usize; 4];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = border(&widths);
    let mut out = String::new();
    out.push_str(&titled(&rule, title));
    out.push('\n');
    for (i, row) in rows.iter().enumerate() {
        out.push('|');
        for (cell, width) in row.iter().zip(widths) {
            let pad = width - cell.chars().count();
            // writing into a String cannot fail
            let _ = write!(out, " {}{} |", cell, " ".repeat(pad));
        }
        out.push('\n');
        if i == 0 && rows.len() > 1 {
            out.push_str(&rule);
            out.push('\n');
        }
    }
    out.push_str(&rule);
    out
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// Overlay the title onto the border right after its leading corner,
/// dropped when it does not fit
fn titled(rule: &str, title: &str) -> String {
    let rule_len = rule.chars().count();
    let title_len = title.chars().count();
    if title_len + 2 > rule_len {
        return rule.to_owned();
    }
    let mut line = String::from("+");
    line.push_str(title);
    line.extend(rule.chars().skip(title_len + 1));
    line
}
