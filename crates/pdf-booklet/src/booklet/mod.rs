//! Booklet conversion
//!
//! This module orchestrates the conversion:
//! 1. Read the page count and page size of the source
//! 2. Plan which pages share each sheet side
//! 3. Compose every planned pair onto a landscape page
//! 4. Assemble the pages into a new document

mod io;

pub use io::{
    convert_file, default_output_path, default_output_path_at, load_pdf, load_pdf_bytes,
    pdf_to_bytes, save_pdf,
};

use crate::constants::OUTPUT_PDF_VERSION;
use crate::layout::{SheetPair, Side, half_region, layout_sheet, plan};
use crate::options::BookletOptions;
use crate::render::{SheetSource, compose_sheet, page_size};
use crate::types::*;
use lopdf::{Dictionary, Document, Object, ObjectId};
use std::collections::HashMap;

/// Convert a document into booklet order.
///
/// The source is left untouched; the result is a new document with one page
/// per planned sheet side. An empty source produces an empty document.
pub fn convert(source: &Document, options: &BookletOptions) -> Result<Document> {
    options.validate()?;

    let page_ids: Vec<ObjectId> = source.get_pages().values().copied().collect();
    let plan = plan(page_ids.len(), options.mode);

    let mut conversion = Conversion::new(source, page_ids, options)?;
    for pair in &plan.pairs {
        conversion.add_sheet(pair)?;
    }

    Ok(conversion.finish())
}

/// Convert raw PDF bytes into booklet PDF bytes
pub fn convert_bytes(source: &[u8], options: &BookletOptions) -> Result<Vec<u8>> {
    let document = load_pdf_bytes(source)?;
    let booklet = convert(&document, options)?;
    pdf_to_bytes(booklet)
}

/// State for one conversion call
struct Conversion<'a> {
    source: &'a Document,
    page_ids: Vec<ObjectId>,
    page_size: Option<PageSize>,
    options: &'a BookletOptions,
    output: Document,
    pages_tree_id: ObjectId,
    page_refs: Vec<Object>,
    xobject_cache: HashMap<ObjectId, ObjectId>,
}

impl<'a> Conversion<'a> {
    fn new(
        source: &'a Document,
        page_ids: Vec<ObjectId>,
        options: &'a BookletOptions,
    ) -> Result<Self> {
        let page_size = match page_ids.first() {
            Some(&first) => {
                let size = page_size(source, first)?;
                // Fail before building anything if the margin leaves no room
                half_region(Side::Left, size, options.inner_margin_pt)?;
                Some(size)
            }
            None => None,
        };

        let mut output = Document::with_version(OUTPUT_PDF_VERSION);
        let pages_tree_id = output.new_object_id();

        Ok(Self {
            source,
            page_ids,
            page_size,
            options,
            output,
            pages_tree_id,
            page_refs: Vec::new(),
            xobject_cache: HashMap::new(),
        })
    }

    fn resolve(&self, index: Option<usize>, size: PageSize) -> SheetSource {
        match index.and_then(|idx| self.page_ids.get(idx)) {
            Some(&page_id) => SheetSource::Page(page_id),
            None => SheetSource::Blank(size),
        }
    }

    fn add_sheet(&mut self, pair: &SheetPair) -> Result<()> {
        let Some(size) = self.page_size else {
            return Err(BookletError::Load(
                "source has no pages to place".to_string(),
            ));
        };

        let layout = layout_sheet(pair, size, self.options.inner_margin_pt, self.options.scale)?;
        let sources = [self.resolve(pair.left, size), self.resolve(pair.right, size)];

        let page_id = compose_sheet(
            &mut self.output,
            self.source,
            &layout,
            sources,
            self.pages_tree_id,
            &mut self.xobject_cache,
        )?;
        self.page_refs.push(Object::Reference(page_id));
        Ok(())
    }

    fn finish(mut self) -> Document {
        let count = self.page_refs.len() as i64;
        let pages_dict = Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Pages".to_vec())),
            ("Kids", Object::Array(self.page_refs)),
            ("Count", Object::Integer(count)),
        ]);
        self.output
            .objects
            .insert(self.pages_tree_id, Object::Dictionary(pages_dict));

        let catalog_id = self.output.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Catalog".to_vec())),
            ("Pages", Object::Reference(self.pages_tree_id)),
        ]));
        self.output.trailer.set("Root", catalog_id);

        if self.options.compress_streams {
            self.output.compress();
        }

        self.output
    }
}
