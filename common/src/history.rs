//! Fixed-capacity history of timestamped scalar samples.
//!
//! Backs the trend graph. Samples are kept in insertion order in a circular
//! buffer; once full, every push overwrites the oldest sample. Nothing here
//! allocates, so the buffer can live inside a `static` or a stack frame.

use core::fmt;

// =============================================================================
// Data Point
// =============================================================================

/// One trend-graph sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DataPoint {
    /// Seconds on the graph's own timeline (excludes paused time).
    pub elapsed_seconds: f64,
    /// Measured value in degrees Celsius.
    pub value: f64,
    /// Hot alert threshold active when the sample was taken.
    pub threshold_hot: f64,
    /// Cold alert threshold active when the sample was taken.
    pub threshold_cold: f64,
}

impl DataPoint {
    /// All-zero point, used to initialize storage.
    pub const ZERO: Self = Self {
        elapsed_seconds: 0.0,
        value: 0.0,
        threshold_hot: 0.0,
        threshold_cold: 0.0,
    };
}

/// Returned by [`SampleHistory::peek_last`] when no sample was pushed yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str("sample history is empty")
    }
}

impl core::error::Error for EmptyError {}

// =============================================================================
// Ring Buffer
// =============================================================================

/// Circular buffer of the last `N` data points.
pub struct SampleHistory<const N: usize> {
    points: [DataPoint; N],
    head: usize, // Next write position
    count: usize,
}

impl<const N: usize> SampleHistory<N> {
    /// Create an empty history.
    pub const fn new() -> Self {
        const { assert!(N > 0, "history capacity must not be zero") };

        Self {
            points: [DataPoint::ZERO; N],
            head: 0,
            count: 0,
        }
    }

    /// Append a point, overwriting the oldest one when full.
    pub fn push(
        &mut self,
        point: DataPoint,
    ) {
        self.points[self.head] = point;
        self.head = (self.head + 1) % N;
        if self.count < N {
            self.count += 1;
        }
    }

    /// Copy up to `out.len()` points into `out`, oldest first.
    ///
    /// When `out` is shorter than the history, the most recent points are
    /// copied. Returns the number of points written.
    pub fn peek(
        &self,
        out: &mut [DataPoint],
    ) -> usize {
        let n = out.len().min(self.count);
        let skip = self.count - n;
        for (slot, point) in out.iter_mut().zip(self.iter().skip(skip)) {
            *slot = *point;
        }
        n
    }

    /// Most recently pushed point.
    pub fn peek_last(&self) -> Result<DataPoint, EmptyError> {
        if self.count == 0 {
            return Err(EmptyError);
        }
        Ok(self.points[(self.head + N - 1) % N])
    }

    #[inline]
    pub const fn len(&self) -> usize { self.count }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.count == 0 }

    #[inline]
    pub const fn capacity(&self) -> usize { N }

    /// Drop every point.
    pub fn clear(&mut self) {
        self.head = 0;
        self.count = 0;
    }

    /// Iterate over points from oldest to newest.
    pub fn iter(&self) -> HistoryIter<'_, N> {
        let start = if self.count < N { 0 } else { self.head };
        HistoryIter {
            history: self,
            pos: start,
            remaining: self.count,
        }
    }
}

impl<const N: usize> Default for SampleHistory<N> {
    fn default() -> Self { Self::new() }
}

/// Iterator over history points (oldest to newest).
pub struct HistoryIter<'a, const N: usize> {
    history: &'a SampleHistory<N>,
    pos: usize,
    remaining: usize,
}

impl<'a, const N: usize> Iterator for HistoryIter<'a, N> {
    type Item = &'a DataPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let point = &self.history.points[self.pos];
        self.pos = (self.pos + 1) % N;
        self.remaining -= 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<const N: usize> ExactSizeIterator for HistoryIter<'_, N> {}

// =============================================================================
// Tests
// =============================================================================
