//! Grid placement and page size calculations

/// Simple length type in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length(pub f64);

impl Length {
    /// Create a length from millimeters
    pub fn from_mm(mm: f64) -> Self {
        Length(mm)
    }

    /// Create a length from inches
    pub fn from_inches(inches: f64) -> Self {
        Length(inches * 25.4)
    }

    /// Create a length from points (1/72 inch)
    pub fn from_pt(pt: f64) -> Self {
        Length(pt * 25.4 / 72.0)
    }

    /// Get the value in millimeters
    pub fn mm(&self) -> f64 {
        self.0
    }

    /// Get the value in points (1/72 inch)
    pub fn pt(&self) -> f64 {
        self.0 * 72.0 / 25.4
    }
}

/// Page dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDimensions {
    pub width: Length,
    pub height: Length,
}

/// Tolerance used when matching a page against a named paper size
const PAPER_TOLERANCE_MM: f64 = 2.0;

impl PageDimensions {
    /// US Letter size (8.5" × 11")
    pub fn letter() -> Self {
        Self {
            width: Length::from_mm(215.9),
            height: Length::from_mm(279.4),
        }
    }

    /// A4 size (210mm × 297mm)
    pub fn a4() -> Self {
        Self {
            width: Length::from_mm(210.0),
            height: Length::from_mm(297.0),
        }
    }

    /// US Legal size (8.5" × 14")
    pub fn legal() -> Self {
        Self {
            width: Length::from_mm(215.9),
            height: Length::from_mm(355.6),
        }
    }

    /// Build dimensions from a PDF box given in points
    pub fn from_points(width: f64, height: f64) -> Self {
        Self {
            width: Length::from_pt(width.abs()),
            height: Length::from_pt(height.abs()),
        }
    }

    /// Swap width and height (used for pages rotated by 90 or 270 degrees)
    pub fn rotated(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    fn matches(&self, other: &PageDimensions) -> bool {
        (self.width.mm() - other.width.mm()).abs() < PAPER_TOLERANCE_MM
            && (self.height.mm() - other.height.mm()).abs() < PAPER_TOLERANCE_MM
    }

    /// Name of the standard paper size, in either orientation
    pub fn paper_name(&self) -> Option<&'static str> {
        let named = [
            ("Letter", Self::letter()),
            ("A4", Self::a4()),
            ("Legal", Self::legal()),
        ];

        named
            .into_iter()
            .find(|(_, size)| self.matches(size) || self.matches(&size.rotated()))
            .map(|(name, _)| name)
    }

    /// Short description such as "A4" or "100 × 150 mm"
    pub fn describe(&self) -> String {
        match self.paper_name() {
            Some(name) => name.to_string(),
            None => format!("{:.0} × {:.0} mm", self.width.mm(), self.height.mm()),
        }
    }
}

/// Row/column placement of items in a display grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    columns: usize,
}

impl GridLayout {
    /// Create a grid with the given number of columns (at least one)
    pub fn new(columns: usize) -> Self {
        Self {
            columns: columns.max(1),
        }
    }

    /// Grid used for queued files: 3 cards per row
    pub fn queue() -> Self {
        Self::new(3)
    }

    /// Grid used for page tiles: 4 per row
    pub fn pages() -> Self {
        Self::new(4)
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// (row, column) of the item at `index`
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Number of rows needed for `count` items
    pub fn rows(&self, count: usize) -> usize {
        count.div_ceil(self.columns)
    }

    /// Split items into grid rows
    pub fn chunk<'a, T>(&self, items: &'a [T]) -> std::slice::Chunks<'a, T> {
        items.chunks(self.columns)
    }
}
