//! XObject creation for booklet sheets
//!
//! Each source page is copied into the output document as a Form XObject,
//! which the sheet content stream then draws with a transformation. The
//! source document is only ever read.

use crate::constants::MAX_PAGE_TREE_DEPTH;
use crate::layout::Rect;
use crate::types::{BookletError, PageSize, Result};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream};
use std::collections::HashMap;

// =============================================================================
// XObject Creation
// =============================================================================

/// Copy a source page into `output` as a Form XObject.
///
/// Resources referenced by the page are deep-copied; `cache` maps source
/// object ids to their copies so shared fonts and images are copied once
/// per output document.
pub fn create_page_xobject(
    output: &mut Document,
    source: &Document,
    page_id: ObjectId,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<ObjectId> {
    let media_box = page_media_box(source, page_id)?;
    let page_dict = source.get_dictionary(page_id)?;
    let content_data = get_page_content(source, page_dict)?;

    let mut xobject_dict = form_dictionary(&media_box);
    if let Some(resources) = inherited_attribute(source, page_id, b"Resources")? {
        xobject_dict.set(
            "Resources",
            copy_object_deep(output, source, resources, cache)?,
        );
    }

    Ok(output.add_object(Stream::new(xobject_dict, content_data)))
}

/// Create an empty Form XObject standing in for a padding page
pub fn create_blank_xobject(output: &mut Document, page: PageSize) -> ObjectId {
    let mut xobject_dict = form_dictionary(&Rect::new(0.0, 0.0, page.width, page.height));
    xobject_dict.set("Resources", Object::Dictionary(Dictionary::new()));
    output.add_object(Stream::new(xobject_dict, Vec::new()))
}

fn form_dictionary(bbox: &Rect) -> Dictionary {
    let mut dict = Dictionary::new();
    dict.set("Type", Object::Name(b"XObject".to_vec()));
    dict.set("Subtype", Object::Name(b"Form".to_vec()));
    dict.set("BBox", rect_to_array(bbox));
    dict.set("FormType", Object::Integer(1));
    dict
}

/// PDF rectangle array `[llx lly urx ury]`
pub(crate) fn rect_to_array(rect: &Rect) -> Object {
    Object::Array(vec![
        Object::Real(rect.x),
        Object::Real(rect.y),
        Object::Real(rect.right()),
        Object::Real(rect.top()),
    ])
}

// =============================================================================
// Page Content Extraction
// =============================================================================

/// Get the content stream data from a page.
fn get_page_content(doc: &Document, page_dict: &Dictionary) -> Result<Vec<u8>> {
    let contents = match page_dict.get(b"Contents") {
        Ok(c) => c,
        Err(_) => return Ok(Vec::new()),
    };

    match contents {
        Object::Reference(id) => match doc.get_object(*id)? {
            Object::Array(arr) => get_concatenated_content_streams(doc, arr),
            Object::Stream(stream) => Ok(stream_data(stream)),
            _ => Ok(Vec::new()),
        },
        Object::Array(arr) => get_concatenated_content_streams(doc, arr),
        _ => Ok(Vec::new()),
    }
}

fn get_concatenated_content_streams(doc: &Document, refs: &[Object]) -> Result<Vec<u8>> {
    let mut result = Vec::new();

    for obj in refs {
        if let Object::Reference(id) = obj {
            if let Ok(stream) = doc.get_object(*id)?.as_stream() {
                result.extend_from_slice(&stream_data(stream));
                result.push(b'\n');
            }
        }
    }

    Ok(result)
}

fn stream_data(stream: &Stream) -> Vec<u8> {
    stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone())
}

// =============================================================================
// Deep Copy
// =============================================================================

/// Deep copy an object from source to output document, following references.
///
/// The target id is reserved before recursing so reference cycles terminate.
pub fn copy_object_deep(
    output: &mut Document,
    source: &Document,
    obj: &Object,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Object> {
    match obj {
        Object::Reference(id) => {
            if let Some(&new_id) = cache.get(id) {
                return Ok(Object::Reference(new_id));
            }

            let new_id = output.new_object_id();
            cache.insert(*id, new_id);

            let referenced = source.get_object(*id)?;
            let copied = copy_object_deep(output, source, referenced, cache)?;
            output.objects.insert(new_id, copied);

            Ok(Object::Reference(new_id))
        }
        Object::Dictionary(dict) => Ok(Object::Dictionary(copy_dictionary(
            output, source, dict, cache,
        )?)),
        Object::Array(arr) => {
            let new_arr: Result<Vec<_>> = arr
                .iter()
                .map(|item| copy_object_deep(output, source, item, cache))
                .collect();
            Ok(Object::Array(new_arr?))
        }
        Object::Stream(stream) => {
            let new_dict = copy_dictionary(output, source, &stream.dict, cache)?;
            let mut copy = Stream::new(new_dict, stream.content.clone());
            copy.allows_compression = stream.allows_compression;
            Ok(Object::Stream(copy))
        }
        _ => Ok(obj.clone()),
    }
}

fn copy_dictionary(
    output: &mut Document,
    source: &Document,
    dict: &Dictionary,
    cache: &mut HashMap<ObjectId, ObjectId>,
) -> Result<Dictionary> {
    let mut new_dict = Dictionary::new();
    for (key, value) in dict.iter() {
        new_dict.set(key.clone(), copy_object_deep(output, source, value, cache)?);
    }
    Ok(new_dict)
}

// =============================================================================
// Page Dimensions
// =============================================================================

/// Look up a page attribute, following `/Parent` links for inherited values
pub(crate) fn inherited_attribute<'a>(
    doc: &'a Document,
    page_id: ObjectId,
    key: &[u8],
) -> Result<Option<&'a Object>> {
    let mut current = doc.get_dictionary(page_id)?;

    for _ in 0..MAX_PAGE_TREE_DEPTH {
        if let Ok(value) = current.get(key) {
            let value = match value {
                Object::Reference(id) => doc.get_object(*id)?,
                other => other,
            };
            return Ok(Some(value));
        }
        match current.get(b"Parent").and_then(Object::as_reference) {
            Ok(parent_id) => current = doc.get_dictionary(parent_id)?,
            Err(_) => return Ok(None),
        }
    }

    Ok(None)
}

/// MediaBox of a page, normalized to a rectangle with positive size
pub fn page_media_box(doc: &Document, page_id: ObjectId) -> Result<Rect> {
    let undefined = || {
        BookletError::Load(format!(
            "page {} {} has no usable MediaBox",
            page_id.0, page_id.1
        ))
    };

    let values = inherited_attribute(doc, page_id, b"MediaBox")?
        .and_then(|obj| obj.as_array().ok())
        .ok_or_else(undefined)?;

    let coords: Vec<f32> = values.iter().filter_map(extract_number).collect();
    let &[x0, y0, x1, y1] = &coords[..] else {
        return Err(undefined());
    };

    let rect = Rect::new(x0.min(x1), y0.min(y1), (x1 - x0).abs(), (y1 - y0).abs());
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return Err(undefined());
    }
    Ok(rect)
}

/// Source page dimensions in points
pub fn page_size(doc: &Document, page_id: ObjectId) -> Result<PageSize> {
    let media_box = page_media_box(doc, page_id)?;
    Ok(PageSize::new(media_box.width, media_box.height))
}

/// Extract numeric value from a PDF object
fn extract_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}
