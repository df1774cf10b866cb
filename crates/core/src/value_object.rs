//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// struct Amount(f64);
///
/// impl ValueObject for Amount {}
///
/// assert_eq!(Amount(15.0), Amount(15.0));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
