//! Markup for the three render regions.
//!
//! Interactive elements carry an `id` and are reported alongside the markup
//! as [`Binding`]s, so the host can route a click on that element back to
//! the pager that rendered it.

use crate::core::entry::Entry;

pub const SEARCH_INPUT_ID: &str = "student-search-input";
pub const SEARCH_BUTTON_ID: &str = "student-search-button";
pub const RESET_BUTTON_ID: &str = "student-search-reset";

const SEARCH_PLACEHOLDER: &str = "Search for students...";
const SEARCH_TOOLTIP: &str =
    "Enter a name or a single letter to find names beginning with that letter";

/// What activating a rendered control does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Page(usize),
    Search,
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub element_id: String,
    pub control: Control,
}

impl Binding {
    fn new(element_id: impl Into<String>, control: Control) -> Self {
        Self {
            element_id: element_id.into(),
            control,
        }
    }
}

/// A rendered fragment plus the controls it exposes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup {
    pub html: String,
    pub bindings: Vec<Binding>,
}

impl Markup {
    pub fn new(html: String) -> Self {
        Self {
            html,
            bindings: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.html.is_empty()
    }
}

/// Pagination links and search box rendered together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controls {
    pub pagination: Markup,
    pub search: Markup,
}

impl Controls {
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.pagination
            .bindings
            .iter()
            .chain(self.search.bindings.iter())
    }
}

pub fn page_link_id(page: usize) -> String {
    format!("page-link-{}", page)
}

/// Wrap each entry in a student list item, in order.
pub fn render_list_items<'a, I>(entries: I) -> Markup
where
    I: IntoIterator<Item = &'a Entry>,
{
    let html = entries
        .into_iter()
        .map(|entry| format!(r#"<li class="student-item cf">{}</li>"#, entry.markup()))
        .collect::<String>();
    Markup::new(html)
}

/// Page links for `num_pages`; the current page is plain text.
///
/// A single page (or none) renders an empty list.
pub fn render_page_links(num_pages: usize, current_page: usize) -> Markup {
    let mut markup = Markup::new(String::from("<ul>"));

    if num_pages > 1 {
        for page in 1..=num_pages {
            if page == current_page {
                markup.html.push_str(&format!("<li>{}</li>", page));
            } else {
                let id = page_link_id(page);
                markup.html.push_str(&format!(
                    r##"<li><a href="#" id="{}" data-page="{}">{}</a></li>"##,
                    id, page, page
                ));
                markup.bindings.push(Binding::new(id, Control::Page(page)));
            }
        }
    }

    markup.html.push_str("</ul>");
    markup
}

/// Search input and button, plus a reset button while a search is active.
pub fn render_search_box(search_active: bool) -> Markup {
    let mut markup = Markup::new(format!(
        r#"<div class="tooltip"><input id="{}" placeholder="{}"><button id="{}">Search</button><span class="tooltiptext">{}</span></div>"#,
        SEARCH_INPUT_ID, SEARCH_PLACEHOLDER, SEARCH_BUTTON_ID, SEARCH_TOOLTIP
    ));
    markup
        .bindings
        .push(Binding::new(SEARCH_BUTTON_ID, Control::Search));

    if search_active {
        markup.html.push_str(&format!(
            r#"<button id="{}" class="reset">Reset</button>"#,
            RESET_BUTTON_ID
        ));
        markup
            .bindings
            .push(Binding::new(RESET_BUTTON_ID, Control::Reset));
    }

    markup
}

pub fn render_controls(num_pages: usize, current_page: usize, search_active: bool) -> Controls {
    Controls {
        pagination: render_page_links(num_pages, current_page),
        search: render_search_box(search_active),
    }
}
