//! The array being sorted, plus the value bounds the bar layout needs.

use rand::Rng;

use crate::error::SortvizError;

/// Element type of every sorted array.
pub type Value = i64;

/// An ordered, fixed-length sequence of values and its min/max bounds.
///
/// Sort engines only ever permute the values, so the bounds computed at
/// construction stay valid for the lifetime of the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayModel {
    values: Vec<Value>,
    min: Value,
    max: Value,
}

impl ArrayModel {
    /// Wrap an existing sequence. Fails on an empty sequence, which has no
    /// bounds to lay out.
    pub fn new(values: Vec<Value>) -> Result<Self, SortvizError> {
        let (Some(&min), Some(&max)) =
            (values.iter().min(), values.iter().max())
        else {
            return Err(SortvizError::InvalidArray(
                "array must hold at least one value".to_owned(),
            ));
        };
        Ok(Self { values, min, max })
    }

    /// Generate `len` values drawn uniformly from `min..=max`.
    pub fn random(
        len: usize,
        min: Value,
        max: Value,
        rng: &mut impl Rng,
    ) -> Result<Self, SortvizError> {
        if len == 0 {
            return Err(SortvizError::InvalidArray(
                "array length must be positive".to_owned(),
            ));
        }
        if min > max {
            return Err(SortvizError::InvalidArray(format!(
                "lower bound {min} exceeds upper bound {max}"
            )));
        }
        let values = (0..len).map(|_| rng.random_range(min..=max)).collect();
        Self::new(values)
    }

    /// Current values in array order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Mutable view handed to a sort engine for the duration of one step.
    pub(crate) fn values_mut(&mut self) -> &mut [Value] {
        &mut self.values
    }

    /// Number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed model; present for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest value.
    #[must_use]
    pub fn min(&self) -> Value {
        self.min
    }

    /// Largest value.
    #[must_use]
    pub fn max(&self) -> Value {
        self.max
    }
}
