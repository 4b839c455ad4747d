//! Placement of two source pages on one landscape sheet
//!
//! The sheet is the source page turned on its side: `height` wide and
//! `width` tall. Each half is `height / 2 - inner_margin` wide, with the
//! margin opening a gutter on both sides of the fold.

use super::types::{HalfPlacement, Rect, SheetLayout, SheetPair, Side, Transform};
use crate::types::{BookletError, PageSize, Result};

/// Largest scale at which a source page fits inside one half of the sheet
pub fn default_scale(page: PageSize, inner_margin: f32) -> f32 {
    (page.width / page.height).min((page.height * 0.5 - inner_margin) / page.width)
}

/// Visible region of one half of the sheet
pub fn half_region(side: Side, page: PageSize, inner_margin: f32) -> Result<Rect> {
    let half_width = checked_half_width(page, inner_margin)?;
    let x = match side {
        Side::Left => 0.0,
        Side::Right => page.height / 2.0 + inner_margin,
    };
    Ok(Rect::new(x, 0.0, half_width, page.width))
}

/// Transform placing a source page on one half of the sheet
pub fn compute_transform(
    side: Side,
    page: PageSize,
    inner_margin: f32,
    scale: Option<f32>,
) -> Result<Transform> {
    checked_half_width(page, inner_margin)?;

    let scale = match scale {
        Some(s) if s.is_finite() && s > 0.0 => s,
        Some(s) => {
            return Err(BookletError::Geometry(format!(
                "scale must be a positive number, got {}",
                s
            )));
        }
        None => default_scale(page, inner_margin),
    };

    let translate_x = match side {
        Side::Left => 0.0 - inner_margin,
        Side::Right => page.height / 2.0 + inner_margin,
    };

    Ok(Transform {
        scale,
        translate_x,
        translate_y: 0.0,
    })
}

/// Full geometry for one output page
pub fn layout_sheet(
    pair: &SheetPair,
    page: PageSize,
    inner_margin: f32,
    scale: Option<f32>,
) -> Result<SheetLayout> {
    let place = |side: Side| -> Result<HalfPlacement> {
        Ok(HalfPlacement {
            side,
            source_page: pair.page(side),
            transform: compute_transform(side, page, inner_margin, scale)?,
            clip: half_region(side, page, inner_margin)?,
        })
    };

    let (width, height) = page.sheet_size();
    Ok(SheetLayout {
        width,
        height,
        left: place(Side::Left)?,
        right: place(Side::Right)?,
    })
}

/// Width of a half region, or an error if the inputs leave no room
fn checked_half_width(page: PageSize, inner_margin: f32) -> Result<f32> {
    if !(page.width.is_finite() && page.height.is_finite())
        || page.width <= 0.0
        || page.height <= 0.0
    {
        return Err(BookletError::Geometry(format!(
            "page size must be positive, got {} x {}",
            page.width, page.height
        )));
    }
    if !inner_margin.is_finite() || inner_margin < 0.0 {
        return Err(BookletError::Geometry(format!(
            "inner margin must be zero or positive, got {}",
            inner_margin
        )));
    }

    let half_width = page.height / 2.0 - inner_margin;
    if half_width <= 0.0 {
        return Err(BookletError::Geometry(format!(
            "inner margin {}pt leaves no room on a {}pt wide sheet",
            inner_margin, page.height
        )));
    }
    Ok(half_width)
}
