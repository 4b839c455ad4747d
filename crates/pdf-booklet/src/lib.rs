pub mod booklet;
mod constants;
pub mod layout;
mod options;
pub mod render;
mod stats;
mod types;

pub use booklet::{
    convert, convert_bytes, convert_file, default_output_path, default_output_path_at, load_pdf,
    load_pdf_bytes, pdf_to_bytes, save_pdf,
};
pub use constants::{POINTS_PER_MM, mm_to_pt, pt_to_mm};
pub use layout::{
    HalfPlacement, ImpositionPlan, Rect, SheetLayout, SheetPair, Side, Transform,
    compute_transform, default_scale, half_region, layout_sheet, plan,
};
pub use options::*;
pub use stats::calculate_statistics;
pub use types::*;
