//! Export file name derivation.
//!
//! Responsibilities:
//! - Sanitize the session query for use in a file name.
//! - Assemble the `{source}-{query}-{suffix}.{extension}` output name.
//!
//! Does NOT handle:
//! - Collision handling between identical exports (left to the save
//!   environment, e.g. download auto-numbering).
//! - Path construction or directory layout.

use crate::context::SessionContextProvider;
use crate::error::{ExportError, Result};

/// Characters deleted from the query outright; a contiguous run of them
/// collapses to nothing, not to a separator.
const STRIPPED: [char; 7] = ['+', '-', '\\', '"', '\'', '/', '?'];

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ':'
}

fn is_stripped(c: char) -> bool {
    STRIPPED.contains(&c)
}

/// Sanitize a query for embedding in a file name.
///
/// A single whitespace/colon character becomes `_`; a longer run of them
/// collapses to nothing, so collapsing never leaves `__` artifacts. Runs of
/// `+ - \ " ' / ?` are deleted entirely.
pub fn sanitize_query(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    let mut chars = query.chars().peekable();

    while let Some(c) = chars.next() {
        if is_separator(c) {
            let mut run = 1usize;
            while chars.peek().copied().is_some_and(is_separator) {
                chars.next();
                run += 1;
            }
            if run == 1 {
                out.push('_');
            }
        } else if is_stripped(c) {
            while chars.peek().copied().is_some_and(is_stripped) {
                chars.next();
            }
        } else {
            out.push(c);
        }
    }

    out
}

/// Build the export file name for the current session.
///
/// Output is exactly `{source}-{sanitized_query}-{suffix}.{extension}`, with
/// no further escaping. Identical inputs produce identical names; uniqueness
/// across repeated exports is the save environment's concern.
pub fn build_file_name<C>(context: &C, suffix: &str, extension: &str) -> Result<String>
where
    C: SessionContextProvider + ?Sized,
{
    let ctx = context.current().ok_or(ExportError::ContextUnavailable)?;
    Ok(format!(
        "{}-{}-{}.{}",
        ctx.source,
        sanitize_query(&ctx.query),
        suffix,
        extension
    ))
}
