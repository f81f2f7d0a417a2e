//! Dimension types and traits.

use core::marker::PhantomData;

/// Marker trait for **dimensions** (Length, Time, …).
///
/// A *dimension* is the category that distinguishes a metre from a second.
/// Each dimension is modeled as an empty enum:
///
/// ```rust
/// use astrodist_core::Dimension;
/// #[derive(Debug)]
/// pub enum Depth {}
/// impl Dimension for Depth {}
/// ```
pub trait Dimension {}

/// Dimension formed by dividing one [`Dimension`] by another.
///
/// This models composite dimensions such as `Length/Time` for velocities.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DivDim<N: Dimension, D: Dimension>(PhantomData<(N, D)>);
impl<N: Dimension, D: Dimension> Dimension for DivDim<N, D> {}
