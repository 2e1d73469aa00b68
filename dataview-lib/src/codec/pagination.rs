//! Pagination codecs
//!
//! The page index is written 1-based so URLs read naturally (`page=3` is the
//! third page).

/// Encodes a zero-based page index as a 1-based page number.
pub fn encode_page(page_index: usize) -> String {
    page_index.saturating_add(1).to_string()
}

/// Decodes a 1-based page number into a zero-based index.
///
/// Anything that is not a positive integer decodes to the first page.
pub fn decode_page(input: &str) -> usize {
    match input.trim().parse::<usize>() {
        Ok(page) if page > 0 => page - 1,
        _ => 0,
    }
}

/// Encodes a page size.
pub fn encode_page_size(page_size: usize) -> String {
    page_size.to_string()
}

/// Decodes a page size, falling back to `default` for anything that is not a
/// positive integer.
pub fn decode_page_size(input: &str, default: usize) -> usize {
    match input.trim().parse::<usize>() {
        Ok(size) if size > 0 => size,
        _ => default,
    }
}
