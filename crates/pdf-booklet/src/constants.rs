//! Shared constants for booklet imposition

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Imposition
// =============================================================================

/// Logical pages carried by one physical sheet (two per side)
pub const PAGES_PER_SHEET: usize = 4;

/// Output pages produced per physical sheet (front and back)
pub const SIDES_PER_SHEET: usize = 2;

/// Sizes closer than this (in points) count as the same page size
pub const PAGE_SIZE_TOLERANCE: f32 = 0.5;

/// PDF version written to output documents
pub const OUTPUT_PDF_VERSION: &str = "1.7";

/// Nesting limit when walking up the page tree for inherited attributes
pub const MAX_PAGE_TREE_DEPTH: usize = 32;
