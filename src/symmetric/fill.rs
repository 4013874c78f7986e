//! Fill functions used to initialise the symmetric containers.
//!
//! A container of dimension `n` asks its fill function for one block per
//! storage segment: a vector of length `n - i` for a
//! [`SymmetricArray2`](crate::symmetric::SymmetricArray2), or an
//! `(n - i) x n` matrix for a
//! [`SymmetricArray3`](crate::symmetric::SymmetricArray3).  A configuration
//! value of any type is passed through unchanged on every call.
//!
//! Any closure `FnMut(SegmentShape, &C) -> Block<T>` is a fill function.
//!
//! ```
//! use symarray::algebra::SegmentShape;
//! use symarray::symmetric::{Block, SymmetricArray2};
//!
//! let fill = |shape: SegmentShape, scale: &f64| {
//!     let data = (0..shape.numel()).map(|x| x as f64 * scale).collect();
//!     Block::new(shape, data).unwrap()
//! };
//! let a = SymmetricArray2::with_fill(3, fill, &2.0).unwrap();
//! assert_eq!(a[(0, 2)], 4.0);
//! ```

use crate::algebra::{AsElement, ConfigurationError, Element, ElementType, SegmentShape};
use derive_builder::Builder;
use rand::distributions::uniform::SampleUniform;
use rand::distributions::{Distribution, Uniform as UniformDist};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::ops::{Index, IndexMut};

/// Freshly allocated block of values produced by a fill function.
///
/// Matrix shaped blocks are stored in row major order.
#[derive(Debug, Clone, PartialEq)]
pub struct Block<T> {
    shape: SegmentShape,
    data: Vec<T>,
}

impl<T> Block<T>
where
    T: Element,
{
    /// Wrap `data` as a block of the given shape.  Fails if the
    /// number of values is incompatible with the shape.
    pub fn new(shape: SegmentShape, data: Vec<T>) -> Result<Self, ConfigurationError> {
        if data.len() != shape.numel() {
            return Err(ConfigurationError::BlockLength {
                shape,
                len: data.len(),
            });
        }
        Ok(Self { shape, data })
    }

    pub fn zeros(shape: SegmentShape) -> Self {
        Self::full(shape, T::zero())
    }

    pub fn full(shape: SegmentShape, value: T) -> Self {
        Self {
            shape,
            data: vec![value; shape.numel()],
        }
    }

    pub fn shape(&self) -> SegmentShape {
        self.shape
    }

    pub fn dtype(&self) -> ElementType {
        T::DTYPE
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T> Index<usize> for Block<T> {
    type Output = T;
    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}

impl<T> IndexMut<usize> for Block<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.data[idx]
    }
}

/// Factory for the storage segments of a symmetric container.
///
/// `fill` is called once per segment with the requested shape and the
/// configuration given at construction.  It must return a block of
/// exactly that shape; anything else fails the construction.
pub trait FillFunction<T, C = ()> {
    fn fill(&mut self, shape: SegmentShape, config: &C) -> Block<T>;
}

impl<T, C, F> FillFunction<T, C> for F
where
    F: FnMut(SegmentShape, &C) -> Block<T>,
{
    fn fill(&mut self, shape: SegmentShape, config: &C) -> Block<T> {
        self(shape, config)
    }
}

// check a block returned by a fill function for segment `segment`
pub(crate) fn check_block<T>(
    block: &Block<T>,
    segment: usize,
    expected: SegmentShape,
) -> Result<(), ConfigurationError> {
    if block.shape != expected || block.data.len() != expected.numel() {
        return Err(ConfigurationError::FillShapeMismatch {
            segment,
            expected,
            found: block.shape,
        });
    }
    Ok(())
}

// ---------------------------------------------------------
// stock fill functions
// ---------------------------------------------------------

/// Fill every segment with zeros.  This is the default fill.
#[derive(Debug, Default, Clone, Copy)]
pub struct Zeros;

impl<T: Element> FillFunction<T, ()> for Zeros {
    fn fill(&mut self, shape: SegmentShape, _config: &()) -> Block<T> {
        Block::zeros(shape)
    }
}

/// Fill every segment with the constant passed as configuration.
#[derive(Debug, Default, Clone, Copy)]
pub struct Full;

impl<T: Element> FillFunction<T, T> for Full {
    fn fill(&mut self, shape: SegmentShape, value: &T) -> Block<T> {
        Block::full(shape, *value)
    }
}

/// Configuration for the [`Uniform`] fill.
///
/// Values are drawn from the half open interval `[low, high)`.  Both
/// bounds must be finite and `high - low` must not exceed the largest
/// value of `T`.  A fixed `seed` makes the fill reproducible.
///
/// ```
/// use symarray::symmetric::UniformConfigBuilder;
///
/// let config = UniformConfigBuilder::<f64>::default()
///     .low(-1.0)
///     .high(1.0)
///     .seed(1234)
///     .build()
///     .unwrap();
/// assert_eq!(config.seed(), Some(1234));
/// ```
#[derive(Builder, Debug, Clone, PartialEq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct UniformConfig<T: Element> {
    ///lower bound (inclusive)
    #[builder(default = "T::zero()")]
    low: T,

    ///upper bound (exclusive)
    #[builder(default = "(1.0).as_T()")]
    high: T,

    ///random seed.  Entropy seeded if not given
    #[builder(default, setter(strip_option))]
    seed: Option<u64>,
}

impl<T: Element> UniformConfig<T> {
    pub fn low(&self) -> T {
        self.low
    }
    pub fn high(&self) -> T {
        self.high
    }
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl<T: Element> Default for UniformConfig<T> {
    fn default() -> UniformConfig<T> {
        UniformConfig {
            low: T::zero(),
            high: (1.0).as_T(),
            seed: None,
        }
    }
}

impl From<ConfigurationError> for UniformConfigBuilderError {
    fn from(e: ConfigurationError) -> Self {
        UniformConfigBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build range validation
impl<T: Element> UniformConfigBuilder<T> {
    fn validate(&self) -> Result<(), ConfigurationError> {
        let low = self.low.unwrap_or_else(T::zero);
        let high = self.high.unwrap_or_else(|| (1.0).as_T());
        // NB: written so that NaN bounds are rejected
        if !(low < high) {
            return Err(ConfigurationError::EmptyRange);
        }
        // sampling computes high - low in T, which must not overflow
        match (low.to_f64(), high.to_f64(), T::max_value().to_f64()) {
            (Some(lo), Some(hi), Some(max)) if lo.is_finite() && hi.is_finite() && hi - lo <= max => {
                Ok(())
            }
            _ => Err(ConfigurationError::InvalidRange),
        }
    }
}

/// Fill segments with uniformly distributed random values.
///
/// The generator is created on the first segment and reused for all
/// later segments, so a seeded fill produces the same container every
/// time but different values in each segment.
#[derive(Debug, Default, Clone)]
pub struct Uniform {
    rng: Option<StdRng>,
}

impl Uniform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> FillFunction<T, UniformConfig<T>> for Uniform
where
    T: Element + SampleUniform,
{
    fn fill(&mut self, shape: SegmentShape, config: &UniformConfig<T>) -> Block<T> {
        let rng = self.rng.get_or_insert_with(|| match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        });
        let dist = UniformDist::new(config.low, config.high);
        let data = dist.sample_iter(rng).take(shape.numel()).collect();
        Block { shape, data }
    }
}
