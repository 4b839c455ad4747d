use crate::constants::{PAGE_SIZE_TOLERANCE, PAGES_PER_SHEET};
use crate::layout::{Side, compute_transform, plan};
use crate::options::BookletOptions;
use crate::render::page_size;
use crate::types::*;
use lopdf::Document;

/// Calculate statistics for converting `document` with `options`
pub fn calculate_statistics(
    document: &Document,
    options: &BookletOptions,
) -> Result<BookletStatistics> {
    options.validate()?;

    let page_ids: Vec<_> = document.get_pages().values().copied().collect();
    let source_pages = page_ids.len();
    let plan = plan(source_pages, options.mode);

    let sizes = page_ids
        .iter()
        .map(|&id| page_size(document, id))
        .collect::<Result<Vec<_>>>()?;
    let first_size = sizes.first().copied();
    let mixed_page_sizes = first_size.is_some_and(|first| {
        sizes
            .iter()
            .any(|size| !size.approx_eq(first, PAGE_SIZE_TOLERANCE))
    });

    let scale = match first_size {
        Some(size) => Some(
            compute_transform(Side::Left, size, options.inner_margin_pt, options.scale)?.scale,
        ),
        None => None,
    };

    Ok(BookletStatistics {
        source_pages,
        output_sheets: plan.sheet_count(),
        output_pages: plan.len(),
        blank_pages_added: plan.sheet_count() * PAGES_PER_SHEET - source_pages,
        page_size: first_size,
        scale,
        mixed_page_sizes,
    })
}
