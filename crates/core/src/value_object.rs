//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use core::any::Any;

/// Capability trait for value objects.
///
/// Value objects are domain objects that are **immutable** and **compared by value**.
/// They represent concepts where identity doesn't matter - only the values matter.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// Example:
/// - `Uuid("6f1c...")` is a value object
/// - `Category { category_id: Uuid(...), name: "..." }` is an entity
///
/// ## Immutability
///
/// Implementors expose no mutators. To "modify" a value object, build a new one.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: Value objects are values, not shared references
/// - **PartialEq**: Value objects are compared by their attribute values
/// - **Debug**: Value objects should be debuggable (helpful for logging, testing)
/// - **'static**: Needed for the same-kind check in [`value_objects_equal`]
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     amount: i64,
///     currency: String,
/// }
///
/// impl ValueObject for Money {}
///
/// let m1 = Money { amount: 100, currency: "USD".to_string() };
/// let m2 = Money { amount: 100, currency: "USD".to_string() };
/// assert!(m1.equals(Some(&m2)));
/// assert!(!m1.equals(None));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug + 'static {
    /// Value equality against an optional counterpart.
    ///
    /// An absent counterpart is never equal; this never panics.
    fn equals(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self == other)
    }
}

/// Compare two value objects that may be of different concrete kinds.
///
/// Returns `true` only when `b` is present, is the same concrete type as `a`,
/// and holds an equal value.
pub fn value_objects_equal<A, B>(a: &A, b: Option<&B>) -> bool
where
    A: ValueObject,
    B: ValueObject,
{
    b.and_then(|b| (b as &dyn Any).downcast_ref::<A>())
        .is_some_and(|b| a == b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Money {
        amount: i64,
        currency: String,
    }

    impl ValueObject for Money {}

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Sku(String);

    impl ValueObject for Sku {}

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Barcode(String);

    impl ValueObject for Barcode {}

    fn usd(amount: i64) -> Money {
        Money {
            amount,
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn equal_values_are_equal() {
        assert!(usd(100).equals(Some(&usd(100))));
    }

    #[test]
    fn different_values_are_not_equal() {
        assert!(!usd(100).equals(Some(&usd(101))));
        assert!(!usd(100).equals(Some(&Money {
            amount: 100,
            currency: "EUR".to_string(),
        })));
    }

    #[test]
    fn absent_counterpart_is_not_equal() {
        assert!(!usd(100).equals(None));
    }

    #[test]
    fn different_kinds_with_same_payload_are_not_equal() {
        let sku = Sku("ABC-1".to_string());
        let barcode = Barcode("ABC-1".to_string());

        assert!(!value_objects_equal(&sku, Some(&barcode)));
        assert!(value_objects_equal(&sku, Some(&sku.clone())));
        assert!(!value_objects_equal::<Sku, Barcode>(&sku, None));
    }

    #[test]
    fn equality_is_reflexive_and_symmetric() {
        let a = usd(5);
        let b = usd(5);

        assert!(a.equals(Some(&a)));
        assert_eq!(a.equals(Some(&b)), b.equals(Some(&a)));
    }
}
