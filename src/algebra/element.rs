#![allow(non_snake_case)]
use num_traits::{Bounded, FromPrimitive, Num, NumAssign, NumCast};
use std::fmt::{Debug, Display};

/// Runtime tag for the numeric type stored in a container.
///
/// Every [`Element`] type reports one of these through
/// [`Element::DTYPE`], so a container's element type can be
/// queried without knowing its type parameter.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum ElementType {
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    Isize,
    Usize,
}

impl std::fmt::Display for ElementType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            ElementType::F32 => "f32",
            ElementType::F64 => "f64",
            ElementType::I8 => "i8",
            ElementType::I16 => "i16",
            ElementType::I32 => "i32",
            ElementType::I64 => "i64",
            ElementType::U8 => "u8",
            ElementType::U16 => "u16",
            ElementType::U32 => "u32",
            ElementType::U64 => "u64",
            ElementType::Isize => "isize",
            ElementType::Usize => "usize",
        };
        write!(f, "{}", name)
    }
}

/// Core trait for values stored in the symmetric containers.
///
/// `Element` relies on [`num_traits`](num_traits) for its arithmetic
/// bounds.  Implementations are provided for the native float and
/// integer types; each carries its [`ElementType`] tag.
pub trait Element:
    'static
    + Copy
    + Num
    + NumAssign
    + NumCast
    + FromPrimitive
    + Bounded
    + PartialOrd
    + Default
    + Display
    + Debug
{
    const DTYPE: ElementType;
}

macro_rules! impl_element {
    ($ty:ty, $tag:ident) => {
        impl Element for $ty {
            const DTYPE: ElementType = ElementType::$tag;
        }
    };
}
impl_element!(f32, F32);
impl_element!(f64, F64);
impl_element!(i8, I8);
impl_element!(i16, I16);
impl_element!(i32, I32);
impl_element!(i64, I64);
impl_element!(u8, U8);
impl_element!(u16, U16);
impl_element!(u32, U32);
impl_element!(u64, U64);
impl_element!(isize, Isize);
impl_element!(usize, Usize);

/// Trait for converting Rust primitives to an [`Element`](crate::algebra::Element)
///
/// Used internally for converting constant primitives, and by the
/// fill configuration builders for their defaults.

// NB: allows things like (1.0).as_T() on constants rather
// than T::from_f64(1.0).unwrap() everywhere
pub trait AsElement<T>: 'static {
    fn as_T(&self) -> T;
}

macro_rules! impl_as_element {
    ($ty:ty, $ident:ident) => {
        impl<T> AsElement<T> for $ty
        where
            T: Element,
        {
            #[inline]
            fn as_T(&self) -> T {
                // lossy for integer targets; fractional parts are truncated
                T::$ident(*self).unwrap_or_else(T::zero)
            }
        }
    };
}
impl_as_element!(f32, from_f32);
impl_as_element!(f64, from_f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_tags() {
        assert_eq!(f64::DTYPE, ElementType::F64);
        assert_eq!(i32::DTYPE, ElementType::I32);
        assert_eq!(format!("{}", ElementType::I64), "i64");
    }

    #[test]
    fn test_max_value() {
        assert_eq!(<f32 as Bounded>::max_value(), f32::MAX);
        assert_eq!(<u16 as Bounded>::max_value(), u16::MAX);
    }

    #[test]
    fn test_as_element() {
        let x: f64 = (2.5).as_T();
        assert_eq!(x, 2.5);
        let y: u8 = (3.0f32).as_T();
        assert_eq!(y, 3);
        let z: i64 = (7.9f64).as_T();
        assert_eq!(z, 7);
    }
}
