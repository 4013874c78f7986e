// Dense output of the symmetric containers is a plain column
// major matrix.  Segment shapes describe the blocks requested
// from a fill function during construction.

/// Dense matrix in column major format
///
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// vector of data in column major format
    pub data: Vec<T>,
}

/// Shape of a single storage segment
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum SegmentShape {
    /// one dimensional segment of the given length
    Vector(usize),
    /// two dimensional (rows, cols) segment, stored row major
    Matrix(usize, usize),
}

impl SegmentShape {
    /// total number of elements in a segment of this shape
    pub fn numel(&self) -> usize {
        match *self {
            SegmentShape::Vector(len) => len,
            SegmentShape::Matrix(m, n) => m * n,
        }
    }
}

impl std::fmt::Display for SegmentShape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SegmentShape::Vector(len) => write!(f, "({},)", len),
            SegmentShape::Matrix(m, n) => write!(f, "({}, {})", m, n),
        }
    }
}
