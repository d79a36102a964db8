//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two expiry dates holding the same calendar day are the
//! same expiry date.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "change" one,
/// construct a new value (e.g. a new `StockQuantity`) and replace the old one.
///
/// ## Value Object vs Record
///
/// - **Value Object**: `ExpiryDate(2026-10-21)` equals any other
///   `ExpiryDate(2026-10-21)`.
/// - **Record**: a product held by the inventory store, addressed by its
///   display name and mutated in place by the store.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: usable in logs and test assertions
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct StockQuantity(u32);
///
/// impl ValueObject for StockQuantity {}
///
/// assert_eq!(StockQuantity(12), StockQuantity(12));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
