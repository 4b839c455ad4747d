use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookletError {
    #[error("Failed to load PDF: {0}")]
    Load(String),
    #[error("Invalid geometry: {0}")]
    Geometry(String),
    #[error("Failed to serialize PDF: {0}")]
    Serialize(String),
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, BookletError>;

/// How source pages are distributed over the printed sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BookletMode {
    /// Every group of 4 source pages folds into its own mini-booklet
    #[default]
    SheetWise,
    /// All sheets nest into a single saddle-stitched booklet
    Continuous,
}

impl BookletMode {
    pub fn label(self) -> &'static str {
        match self {
            BookletMode::SheetWise => "sheet-wise",
            BookletMode::Continuous => "continuous",
        }
    }
}

/// Size of a source page in points
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageSize {
    pub width: f32,
    pub height: f32,
}

impl PageSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size of the landscape sheet holding two of these pages: (height, width)
    pub fn sheet_size(self) -> (f32, f32) {
        (self.height, self.width)
    }

    /// Whether two sizes match within `tolerance` points
    pub fn approx_eq(self, other: PageSize, tolerance: f32) -> bool {
        (self.width - other.width).abs() <= tolerance
            && (self.height - other.height).abs() <= tolerance
    }
}

/// Statistics about a booklet conversion
#[derive(Debug, Clone, PartialEq)]
pub struct BookletStatistics {
    /// Number of pages in the source document
    pub source_pages: usize,
    /// Physical sheets of paper needed (each printed on both sides)
    pub output_sheets: usize,
    /// Pages in the output document (front and back of each sheet)
    pub output_pages: usize,
    /// Blank pages inserted to reach a multiple of 4
    pub blank_pages_added: usize,
    /// Size of the first source page, if any
    pub page_size: Option<PageSize>,
    /// Scale applied to every source page on the sheet
    pub scale: Option<f32>,
    /// True when some source page differs in size from the first one
    pub mixed_page_sizes: bool,
}
