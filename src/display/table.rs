use super::display_options::DisplayOptions;
use super::markup::{Binding, Control};
use super::pagination::PageInfo;
use crate::core::entry::Entry;
use crate::utils::text::truncate_text_unicode;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;

/// Terminal table rendering of one page
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    /// Create a new TableDisplay instance
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    pub fn from_options(options: &DisplayOptions) -> Self {
        let display = Self::new().with_colors(options.use_colors());
        match options.max_width {
            Some(width) => display.with_max_width(width),
            None => display,
        }
    }

    /// Detect terminal width
    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _rows)) => Some((cols as usize).clamp(40, 200)),
            Err(_) => Some(80),
        }
    }

    /// Create a TableDisplay instance with maximum width setting
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Set color usage
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Render the entries of one page.
    ///
    /// `info` numbers the rows; entries without a parsable name show as
    /// `(unnamed)`.
    pub fn render_page(&self, entries: &[&Entry], info: &PageInfo) -> String {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        self.configure_table_width(&mut table);

        let headers = ["#", "Name", "Email"];
        if self.use_colors {
            table.set_header(headers.iter().map(|header| {
                Cell::new(header)
                    .add_attribute(Attribute::Bold)
                    .fg(Color::Cyan)
            }));
        } else {
            table.set_header(headers);
        }

        let (name_width, email_width) = self.column_widths();
        let first = info.item_range().map(|(start, _)| start).unwrap_or(1);

        for (offset, entry) in entries.iter().enumerate() {
            let name = entry.name().unwrap_or("(unnamed)");
            let email = entry.email().unwrap_or("");
            let number = Cell::new(first + offset);
            table.add_row(vec![
                if self.use_colors {
                    number.fg(Color::Cyan)
                } else {
                    number
                },
                Cell::new(truncate_text_unicode(name, name_width)),
                Cell::new(truncate_text_unicode(email, email_width)),
            ]);
        }

        let mut output = table.to_string();
        output.push('\n');
        output.push_str(&info.summary());
        output
    }

    /// One-line rendering of the page links and search actions.
    ///
    /// The current page shows as `[n]`; linked pages as plain numbers.
    pub fn render_controls(&self, info: &PageInfo, bindings: &[Binding]) -> String {
        let mut parts: Vec<String> = Vec::new();

        if info.total_pages > 1 {
            for page in 1..=info.total_pages {
                let linked = bindings
                    .iter()
                    .any(|binding| binding.control == Control::Page(page));
                parts.push(if linked {
                    page.to_string()
                } else {
                    format!("[{}]", page)
                });
            }
        }

        let mut actions = vec!["search"];
        if bindings
            .iter()
            .any(|binding| binding.control == Control::Reset)
        {
            actions.push("reset");
        }

        if parts.is_empty() {
            format!("Actions: {}", actions.join(", "))
        } else {
            format!("Pages: {}  Actions: {}", parts.join(" "), actions.join(", "))
        }
    }

    fn configure_table_width(&self, table: &mut Table) {
        let terminal_width = self.max_width.unwrap_or(80);
        let available_width = if terminal_width > 20 {
            terminal_width - 6
        } else {
            terminal_width.max(40)
        };
        table.set_width(available_width as u16);
    }

    /// Responsive (name, email) column widths
    fn column_widths(&self) -> (usize, usize) {
        let terminal_width = self.max_width.unwrap_or(80);

        if terminal_width < 60 {
            (16, 18)
        } else if terminal_width < 100 {
            (28, 30)
        } else {
            (40, 45)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::markup::render_controls;

    fn plain() -> TableDisplay {
        TableDisplay::new().with_colors(false).with_max_width(100)
    }

    #[test]
    fn test_render_page_numbers_rows_from_page_start() {
        let entries = [
            Entry::new(r#"<h3>Kim Xu</h3><span class="email">kim.xu@example.com</span>"#),
            Entry::new("<h3>Zoe Yu</h3>"),
        ];
        let refs: Vec<&Entry> = entries.iter().collect();
        let output = plain().render_page(&refs, &PageInfo::new(2, 10, 12));

        assert!(output.contains("Kim Xu"));
        assert!(output.contains("kim.xu@example.com"));
        assert!(output.contains("11"));
        assert!(output.contains("12"));
        assert!(output.ends_with("Showing 11-12 of 12 entries (Page 2 of 2)"));
    }

    #[test]
    fn test_render_page_unnamed_entry() {
        let entries = [Entry::new("<p>broken</p>")];
        let refs: Vec<&Entry> = entries.iter().collect();
        let output = plain().render_page(&refs, &PageInfo::new(1, 10, 1));
        assert!(output.contains("(unnamed)"));
    }

    #[test]
    fn test_render_controls_line() {
        let display = plain();
        let controls = render_controls(3, 2, false);
        let bindings: Vec<Binding> = controls.bindings().cloned().collect();
        assert_eq!(
            display.render_controls(&PageInfo::new(2, 10, 25), &bindings),
            "Pages: 1 [2] 3  Actions: search"
        );

        let controls = render_controls(1, 1, true);
        let bindings: Vec<Binding> = controls.bindings().cloned().collect();
        assert_eq!(
            display.render_controls(&PageInfo::new(1, 10, 4), &bindings),
            "Actions: search, reset"
        );
    }
}
