//! The series container: ordered, kind-homogeneous storage with positional
//! access and an in-place transformation entry point.

use crate::error::{SeriesError, SeriesResult};
use crate::lambda::{CancelToken, LambdaEngine, LambdaOutcome, LambdaSummary};
use crate::types::{Element, ElementKind, Value};

/// An ordered, kind-homogeneous column of values.
///
/// A series starts empty, with no element kind. Ingestion ([`Series::set_data`]
/// or [`Series::set_values`]) fully replaces the contents and establishes the
/// kind; repeated ingestion is permitted. Positions are stable and addressable
/// from 0.
///
/// ```rust
/// use series_processing::series::Series;
/// use series_processing::types::{ElementKind, Value};
///
/// # fn main() -> Result<(), series_processing::SeriesError> {
/// let mut series = Series::new();
/// series.set_data(vec![1.5f64, 2.5, 3.5])?;
///
/// assert_eq!(series.len(), 3);
/// assert_eq!(series.element_kind(), Some(ElementKind::Float64));
/// assert_eq!(series.get(1)?, &Value::Float64(2.5));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    element_kind: Option<ElementKind>,
    values: Vec<Value>,
}

impl Series {
    /// Create an empty series with no element kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Kind shared by every element, or `None` while the series is unset.
    pub fn element_kind(&self) -> Option<ElementKind> {
        self.element_kind
    }

    /// Borrow the backing values in positional order.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Iterate elements in positional order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }

    /// Replace the contents with a typed sequence.
    ///
    /// The element kind is taken from `T` itself, so homogeneity holds by
    /// construction and the kind is established even for an empty input. Order
    /// and count of the input are preserved exactly.
    pub fn set_data<T, I>(&mut self, input: I) -> SeriesResult<()>
    where
        T: Element,
        I: IntoIterator<Item = T>,
    {
        self.values = input.into_iter().map(Into::into).collect();
        self.element_kind = Some(T::KIND);
        Ok(())
    }

    /// Replace the contents from pre-built [`Value`]s, inferring the kind from
    /// the first element.
    ///
    /// Every element is validated against the inferred kind; a mixed-kind input
    /// fails with [`SeriesError::InvalidInput`] and leaves prior contents
    /// untouched. An empty input clears the series and resets the kind.
    pub fn set_values(&mut self, input: Vec<Value>) -> SeriesResult<()> {
        let Some(first) = input.first() else {
            self.element_kind = None;
            self.values = Vec::new();
            return Ok(());
        };

        let kind = first.kind();
        if let Some((index, value)) = input.iter().enumerate().find(|(_, v)| v.kind() != kind) {
            return Err(SeriesError::InvalidInput {
                message: format!(
                    "element at index {index} is {}, expected {kind}",
                    value.kind()
                ),
            });
        }

        self.element_kind = Some(kind);
        self.values = input;
        Ok(())
    }

    /// Positional read.
    ///
    /// Returns the element at `index` with its original kind preserved, or
    /// [`SeriesError::IndexOutOfRange`] if `index >= len`. A failed narrowing
    /// on the returned value (e.g. [`Value::as_i64`] on a float series) only
    /// fails the caller's local cast; the series itself is never mutated by a
    /// read.
    pub fn get(&self, index: usize) -> SeriesResult<&Value> {
        self.values
            .get(index)
            .ok_or_else(|| SeriesError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    /// Option form of [`Series::get`].
    pub fn value(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Run one transformation pass with a default engine.
    ///
    /// See [`LambdaEngine::run`] for the full contract (sequential ascending
    /// order, per-element cancellation, commit-or-keep semantics).
    pub fn lambda<F>(&mut self, cancel: &CancelToken, f: F) -> SeriesResult<LambdaSummary>
    where
        F: FnMut(&CancelToken, Value) -> LambdaOutcome,
    {
        LambdaEngine::new().run(self, cancel, f)
    }

    pub(crate) fn commit(&mut self, index: usize, value: Value) {
        self.values[index] = value;
    }
}
