//! Page ordering for booklet imposition
//!
//! A sheet holds four logical pages: two on the front, two on the back.
//! Folded in half, the sheet reads 1-2-3-4 when the front carries `[4, 1]`
//! and the back carries `[2, 3]`.
//!
//! **Sheet-wise:** every group of four pages forms its own folded sheet.
//! - 8 pages: front A `[4, 1]`, back A `[2, 3]`, front B `[8, 5]`, back B `[6, 7]`
//!
//! **Continuous:** all sheets nest inside each other into one booklet.
//! - 8 pages: front A `[8, 1]`, back A `[2, 7]`, front B `[6, 3]`, back B `[4, 5]`

use super::types::SheetPair;
use crate::constants::{PAGES_PER_SHEET, SIDES_PER_SHEET};
use crate::types::BookletMode;

/// Ordered list of sheet sides to print
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpositionPlan {
    /// Number of real pages in the source
    pub page_count: usize,
    pub mode: BookletMode,
    /// One entry per output page, front then back for each sheet
    pub pairs: Vec<SheetPair>,
}

impl ImpositionPlan {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Physical sheets of paper in the plan
    pub fn sheet_count(&self) -> usize {
        self.pairs.len() / SIDES_PER_SHEET
    }

    /// Blank positions inserted as padding
    pub fn blank_count(&self) -> usize {
        self.pairs.iter().map(SheetPair::blank_count).sum()
    }

    /// Pairs grouped per physical sheet as (front, back)
    pub fn sheets(&self) -> impl Iterator<Item = (&SheetPair, &SheetPair)> {
        self.pairs
            .chunks_exact(SIDES_PER_SHEET)
            .map(|sides| (&sides[0], &sides[1]))
    }
}

/// Compute the order in which source pages are placed on sheets
pub fn plan(page_count: usize, mode: BookletMode) -> ImpositionPlan {
    let sheets = sheet_count(page_count);

    let order = match mode {
        BookletMode::SheetWise => sheet_wise_order(sheets),
        BookletMode::Continuous => continuous_order(sheets),
    };

    let pairs = order
        .chunks_exact(2)
        .map(|pair| {
            SheetPair::new(
                resolve(pair[0], page_count),
                resolve(pair[1], page_count),
            )
        })
        .collect();

    ImpositionPlan {
        page_count,
        mode,
        pairs,
    }
}

/// Physical sheets needed for `page_count` pages
pub fn sheet_count(page_count: usize) -> usize {
    page_count.div_ceil(PAGES_PER_SHEET)
}

/// Padded page indices: `[s+3, s, s+1, s+2]` for each group of four
fn sheet_wise_order(sheets: usize) -> Vec<usize> {
    (0..sheets * PAGES_PER_SHEET)
        .step_by(PAGES_PER_SHEET)
        .flat_map(|start| [start + 3, start, start + 1, start + 2])
        .collect()
}

/// Padded page indices for one nested booklet, outermost sheet first
fn continuous_order(sheets: usize) -> Vec<usize> {
    let last = PAGES_PER_SHEET * sheets;
    (0..sheets)
        .flat_map(|sheet| {
            [
                last - 1 - 2 * sheet,
                2 * sheet,
                2 * sheet + 1,
                last - 2 - 2 * sheet,
            ]
        })
        .collect()
}

/// Indices past the end of the source become blanks
fn resolve(index: usize, page_count: usize) -> Option<usize> {
    (index < page_count).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_wise_order_two_sheets() {
        assert_eq!(sheet_wise_order(2), vec![3, 0, 1, 2, 7, 4, 5, 6]);
    }

    #[test]
    fn test_continuous_order_three_sheets() {
        assert_eq!(
            continuous_order(3),
            vec![11, 0, 1, 10, 9, 2, 3, 8, 7, 4, 5, 6]
        );
    }

    #[test]
    fn test_resolve_padding() {
        assert_eq!(resolve(2, 3), Some(2));
        assert_eq!(resolve(3, 3), None);
    }

    #[test]
    fn test_sheet_count() {
        assert_eq!(sheet_count(0), 0);
        assert_eq!(sheet_count(1), 1);
        assert_eq!(sheet_count(4), 1);
        assert_eq!(sheet_count(5), 2);
    }
}
