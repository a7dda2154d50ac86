//! Writing the pager's rendered view to a terminal or pipe.

use crate::core::pager::Pager;
use crate::display::{DisplayOptions, MemorySurface, OutputFormat, PageInfo, TableDisplay};
use crate::error::{AppError, DisplayError};
use std::io::Write;

pub(crate) fn io_error(err: std::io::Error) -> AppError {
    DisplayError::TerminalOutput(err.to_string()).into()
}

/// Print the current page in the configured format.
pub fn write_view<W: Write>(
    out: &mut W,
    pager: &Pager<'_, MemorySurface>,
    options: &DisplayOptions,
) -> Result<(), AppError> {
    match options.format {
        OutputFormat::Html => {
            write!(out, "{}", pager.surface().to_document()).map_err(io_error)?;
        }
        OutputFormat::Table => {
            let display = TableDisplay::from_options(options);
            let info = PageInfo::new(pager.current_page(), pager.page_size(), pager.source_len());
            writeln!(out, "{}", display.render_page(&pager.visible_entries(), &info))
                .map_err(io_error)?;
            if pager.is_search_active() {
                writeln!(
                    out,
                    "Search active: {} of {} entries",
                    pager.source_len(),
                    pager.collection().len()
                )
                .map_err(io_error)?;
            }
            writeln!(out, "{}", display.render_controls(&info, pager.bindings()))
                .map_err(io_error)?;
        }
    }
    out.flush().map_err(io_error)
}

/// Drain pending notifications into `err`, one per line.
pub fn write_notifications<W: Write>(
    err: &mut W,
    pager: &mut Pager<'_, MemorySurface>,
) -> Result<(), AppError> {
    for message in pager.surface_mut().take_notifications() {
        writeln!(err, "Notice: {}", message).map_err(io_error)?;
    }
    Ok(())
}
