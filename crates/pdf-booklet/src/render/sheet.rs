//! Output sheet rendering
//!
//! Draws two source pages side by side on a fresh landscape page. Every
//! placement uses its own XObject copy, so composing never alters the
//! source document and can be repeated with identical results.

use super::xobject::{create_blank_xobject, create_page_xobject, rect_to_array};
use crate::layout::{HalfPlacement, Rect, SheetLayout};
use crate::types::{PageSize, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

/// What to draw in one half of a sheet
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SheetSource {
    /// A page of the source document
    Page(ObjectId),
    /// A synthesized blank page with the source page dimensions
    Blank(PageSize),
}

/// Compose one output page from two source pages.
///
/// Returns the id of the new page object; the caller links it into the
/// page tree under `parent_pages_id`.
pub fn compose_sheet(
    output: &mut Document,
    source: &Document,
    layout: &SheetLayout,
    sources: [SheetSource; 2],
    parent_pages_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let mut page_dict = Dictionary::new();
    page_dict.set("Type", Object::Name(b"Page".to_vec()));
    page_dict.set("Parent", Object::Reference(parent_pages_id));
    page_dict.set(
        "MediaBox",
        rect_to_array(&Rect::new(0.0, 0.0, layout.width, layout.height)),
    );

    let mut content_ops = Vec::with_capacity(2);
    let mut xobjects = Dictionary::new();

    for (idx, (placement, sheet_source)) in
        layout.placements().into_iter().zip(sources).enumerate()
    {
        let xobject_id = match sheet_source {
            SheetSource::Page(page_id) => create_page_xobject(output, source, page_id, cache)?,
            SheetSource::Blank(size) => create_blank_xobject(output, size),
        };

        let xobject_name = format!("P{}", idx);
        xobjects.set(xobject_name.as_bytes(), Object::Reference(xobject_id));
        content_ops.push(placement_command(&xobject_name, placement));
    }

    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let content = content_ops.join("");
    let content_id = output.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    page_dict.set("Contents", Object::Reference(content_id));
    page_dict.set("Resources", Object::Dictionary(resources));

    Ok(output.add_object(page_dict))
}

/// Content stream operators drawing one placement, clipped to its half
pub fn placement_command(xobject_name: &str, placement: &HalfPlacement) -> String {
    let clip = &placement.clip;
    let [a, b, c, d, e, f] = placement.transform.matrix();
    format!(
        "q {} {} {} {} re W n {} {} {} {} {} {} cm /{} Do Q\n",
        clip.x, clip.y, clip.width, clip.height, a, b, c, d, e, f, xobject_name
    )
}
