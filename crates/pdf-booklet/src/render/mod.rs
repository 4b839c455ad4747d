//! PDF rendering modules for booklet imposition
//!
//! This module handles all PDF-specific operations:
//! - Copying source pages into Form XObjects
//! - Building composed output sheets
//! - Reading page dimensions

mod sheet;
mod xobject;

pub use sheet::{SheetSource, compose_sheet, placement_command};
pub use xobject::{
    copy_object_deep, create_blank_xobject, create_page_xobject, page_media_box, page_size,
};
