#![allow(dead_code)]

use lopdf::{Dictionary, Document, Object, ObjectId, Stream};

pub const LETTER: (i64, i64) = (612, 792);

fn media_box(width: i64, height: i64) -> Object {
    Object::Array(vec![
        Object::Integer(0),
        Object::Integer(0),
        Object::Integer(width),
        Object::Integer(height),
    ])
}

/// Marker written into the content stream of source page `index`
pub fn page_marker(index: usize) -> String {
    format!("% source page {}", index + 1)
}

/// Build a document with one page per entry in `sizes`
pub fn create_sized_pdf(sizes: &[(i64, i64)]) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let mut kids = Vec::new();
    for (index, &(width, height)) in sizes.iter().enumerate() {
        let content = format!("{}\nq 0 0 m 10 10 l S Q", page_marker(index));
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("MediaBox", media_box(width, height)),
            ("Resources", Object::Dictionary(Dictionary::new())),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    finish_document(doc, pages_id, kids, Dictionary::new())
}

/// Build a US Letter document with `num_pages` pages
pub fn create_test_pdf(num_pages: usize) -> Document {
    create_sized_pdf(&vec![LETTER; num_pages])
}

/// Pages inherit MediaBox and a shared font from the page tree root
pub fn create_inherited_pdf(num_pages: usize) -> Document {
    let mut doc = Document::with_version("1.7");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Font".to_vec())),
        ("Subtype", Object::Name(b"Type1".to_vec())),
        ("BaseFont", Object::Name(b"Helvetica".to_vec())),
    ]));
    let resources = Dictionary::from_iter(vec![(
        "Font",
        Object::Dictionary(Dictionary::from_iter(vec![(
            "F1",
            Object::Reference(font_id),
        )])),
    )]);

    let mut kids = Vec::new();
    for index in 0..num_pages {
        let content = format!("{}\nBT /F1 12 Tf 72 720 Td (Hi) Tj ET", page_marker(index));
        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));
        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_id)),
            ("Contents", Object::Reference(content_id)),
        ]));
        kids.push(Object::Reference(page_id));
    }

    let inherited = Dictionary::from_iter(vec![
        ("MediaBox", media_box(LETTER.0, LETTER.1)),
        ("Resources", Object::Dictionary(resources)),
    ]);
    finish_document(doc, pages_id, kids, inherited)
}

fn finish_document(
    mut doc: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
    extra: Dictionary,
) -> Document {
    let count = kids.len() as i64;
    let mut pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(kids)),
        ("Count", Object::Integer(count)),
    ]);
    for (key, value) in extra.iter() {
        pages_dict.set(key.clone(), value.clone());
    }
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    doc
}

pub fn to_bytes(doc: &mut Document) -> Vec<u8> {
    let mut writer = Vec::new();
    doc.save_to(&mut writer).unwrap();
    writer
}

/// Page ids of `doc` in page order
pub fn page_ids(doc: &Document) -> Vec<ObjectId> {
    doc.get_pages().values().copied().collect()
}

/// Decoded content stream of an output page
pub fn page_content(doc: &Document, page_id: ObjectId) -> String {
    let page = doc.get_dictionary(page_id).unwrap();
    let content_id = page.get(b"Contents").unwrap().as_reference().unwrap();
    let stream = doc.get_object(content_id).unwrap().as_stream().unwrap();
    let data = stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone());
    String::from_utf8(data).unwrap()
}

/// Content of the XObject drawn under `name` on an output page
pub fn xobject_content(doc: &Document, page_id: ObjectId, name: &str) -> String {
    let stream = xobject(doc, page_id, name);
    let data = stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone());
    String::from_utf8(data).unwrap()
}

pub fn xobject<'a>(doc: &'a Document, page_id: ObjectId, name: &str) -> &'a Stream {
    let page = doc.get_dictionary(page_id).unwrap();
    let resources = page.get(b"Resources").unwrap().as_dict().unwrap();
    let xobjects = resources.get(b"XObject").unwrap().as_dict().unwrap();
    let id = xobjects.get(name.as_bytes()).unwrap().as_reference().unwrap();
    doc.get_object(id).unwrap().as_stream().unwrap()
}

/// Numeric values of a PDF array
pub fn numbers(obj: &Object) -> Vec<f32> {
    obj.as_array()
        .unwrap()
        .iter()
        .map(|n| match n {
            Object::Integer(i) => *i as f32,
            Object::Real(r) => *r,
            other => panic!("not a number: {:?}", other),
        })
        .collect()
}
