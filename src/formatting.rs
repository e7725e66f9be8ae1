use crate::calendar::{CalendarCell, CalendarGrid, GRID_COLS};
use crate::date;

/// Width of one day cell in plain-text output
const CELL_WIDTH: usize = 4;

/// Box-drawing characters for borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub left_junction: String,
    pub right_junction: String,
    pub selector: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            left_junction: "├".to_string(),
            right_junction: "┤".to_string(),
            selector: "►".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            left_junction: "+".to_string(),
            right_junction: "+".to_string(),
            selector: ">".to_string(),
        }
    }
}

/// Plain-text rendition of one day cell, `CELL_WIDTH` columns wide
///
/// Hidden days are blank, disabled days bracketed, the focused day carries
/// the selector and the committed day a `*`.
pub fn format_cell(cell: &CalendarCell, box_chars: &BoxChars) -> String {
    if cell.hidden {
        return " ".repeat(CELL_WIDTH);
    }
    if cell.disabled {
        return format!("[{:>2}]", cell.day);
    }
    let marker = if cell.focusable {
        box_chars.selector.as_str()
    } else if cell.selected {
        "*"
    } else {
        " "
    };
    format!("{}{:>2} ", marker, cell.day)
}

fn center(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

/// Render the whole month grid as boxed text
pub fn format_month_grid(grid: &CalendarGrid, box_chars: &BoxChars) -> String {
    let inner = CELL_WIDTH * GRID_COLS;
    let rule = box_chars.horizontal.repeat(inner);
    let mut output = String::new();

    output.push_str(&format!("{}{}{}\n", box_chars.top_left, rule, box_chars.top_right));
    output.push_str(&format!("{}{}{}\n", box_chars.vertical, center(grid.title(), inner), box_chars.vertical));
    output.push_str(&format!("{}{}{}\n", box_chars.left_junction, rule, box_chars.right_junction));

    let header: String = date::weekday_abbrevs()
        .iter()
        .map(|abbrev| format!(" {} ", abbrev))
        .collect();
    output.push_str(&format!("{}{}{}\n", box_chars.vertical, header, box_chars.vertical));

    for row in grid.rows() {
        let line: String = row.iter().map(|cell| format_cell(cell, box_chars)).collect();
        output.push_str(&format!("{}{}{}\n", box_chars.vertical, line, box_chars.vertical));
    }

    output.push_str(&format!("{}{}{}\n", box_chars.bottom_left, rule, box_chars.bottom_right));
    output
}
