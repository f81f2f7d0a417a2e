//! Macros for defining units and conversions.

/// Defines a zero-sized unit marker type.
///
/// Expands to the marker struct, its [`Unit`](crate::Unit) impl, a `Display`
/// impl for quantities of that unit (formatted as `<value> <symbol>`), and a
/// plural type alias for `Quantity<ThisUnit>`.
///
/// ```rust
/// use astrodist_core::{define_unit, Dimension};
///
/// pub enum Depth {}
/// impl Dimension for Depth {}
///
/// define_unit! {
///     /// League (`5556 m`).
///     League, plural = Leagues, symbol = "lea", dimension = Depth, ratio = 5_556.0
/// }
///
/// let d = Leagues::new(2.0);
/// assert_eq!(format!("{d}"), "2 lea");
/// ```
#[macro_export]
macro_rules! define_unit {
    (
        $(#[$meta:meta])*
        $name:ident, plural = $plural:ident, symbol = $symbol:literal,
        dimension = $dim:ty, ratio = $ratio:expr
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
        pub struct $name;

        impl $crate::Unit for $name {
            const RATIO: f64 = $ratio;
            type Dim = $dim;
            const SYMBOL: &'static str = $symbol;
        }

        impl ::core::fmt::Display for $crate::Quantity<$name> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::write!(f, "{} {}", self.value(), <$name as $crate::Unit>::SYMBOL)
            }
        }

        #[doc = concat!("A quantity measured in [`", stringify!($name), "`] units.")]
        pub type $plural = $crate::Quantity<$name>;
    };
}

/// Generates `From` trait implementations for all pairs of units within a
/// dimension.
#[macro_export]
macro_rules! impl_unit_conversions {
    // Base case: single unit, no conversions needed
    ($unit:ty) => {};

    // Recursive case: implement conversions from first to all others, then recurse
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<$crate::Quantity<$first>> for $crate::Quantity<$rest> {
                fn from(value: $crate::Quantity<$first>) -> Self {
                    value.to::<$rest>()
                }
            }

            impl From<$crate::Quantity<$rest>> for $crate::Quantity<$first> {
                fn from(value: $crate::Quantity<$rest>) -> Self {
                    value.to::<$first>()
                }
            }
        )+

        // Recurse with the rest of the units
        $crate::impl_unit_conversions!($($rest),+);
    };
}
