//! Arbitraries: composable value-generation policies.
//!
//! An arbitrary never stores the values it produces. Generation is a pure
//! function of the arbitrary's shape and the state of the [`Prng`] it is
//! handed, so replaying a seed replays the values.

use crate::error::{QuickpropError, Result};
use crate::prng::Prng;

/// Exactly one value produced by an [`Arbitrary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generated<T> {
    value: T,
}

impl<T> Generated<T> {
    pub fn new(value: T) -> Self {
        Generated { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// A generator for values of type [`Arbitrary::Value`].
///
/// Implemented by [`Integer`], [`Mapped`] and [`Tuple`]; every other
/// arbitrary is built by composing those three.
pub trait Arbitrary {
    type Value;

    /// Produce one value, advancing `rng` by however many draws it takes.
    fn generate<R: Prng + ?Sized>(&self, rng: &mut R) -> Generated<Self::Value>;

    /// Transform every generated value with `f`.
    ///
    /// The mapped arbitrary consumes exactly the draws of `self`.
    fn map<B, F>(self, f: F) -> Mapped<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Value) -> B,
    {
        Mapped::new(self, f)
    }
}

/// Integers drawn uniformly from the closed interval `[min, max]`.
///
/// Every value of this type has `min <= max`: the fields are private and
/// only [`Integer::new`] and [`char()`] build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Integer {
    min: i64,
    max: i64,
}

impl Integer {
    /// Create an integer arbitrary, rejecting `min > max`.
    pub fn new(min: i64, max: i64) -> Result<Self> {
        if min > max {
            return Err(QuickpropError::InvalidRange { min, max });
        }
        Ok(Integer { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }
}

impl Arbitrary for Integer {
    type Value = i64;

    fn generate<R: Prng + ?Sized>(&self, rng: &mut R) -> Generated<i64> {
        match rng.next_uniform_int(self.min, self.max) {
            Ok(value) => Generated::new(value),
            Err(_) => unreachable!("Integer always holds min <= max"),
        }
    }
}

/// An arbitrary whose values are those of `inner` passed through `f`.
#[derive(Clone)]
pub struct Mapped<A, F> {
    inner: A,
    f: F,
}

impl<A, F> Mapped<A, F> {
    pub fn new(inner: A, f: F) -> Self {
        Mapped { inner, f }
    }
}

impl<A, F, B> Arbitrary for Mapped<A, F>
where
    A: Arbitrary,
    F: Fn(A::Value) -> B,
{
    type Value = B;

    fn generate<R: Prng + ?Sized>(&self, rng: &mut R) -> Generated<B> {
        let value = self.inner.generate(rng).into_inner();
        Generated::new((self.f)(value))
    }
}

/// A fixed-arity product of arbitraries, generated left to right.
///
/// `S` is a Rust tuple of one to six arbitraries.
#[derive(Debug, Clone, Copy)]
pub struct Tuple<S>(S);

impl<S> Tuple<S> {
    pub fn new(arbitraries: S) -> Self {
        Tuple(arbitraries)
    }
}

macro_rules! impl_tuple_arbitrary {
    ($($ty:ident $var:ident),+) => {
        impl<$($ty: Arbitrary),+> Arbitrary for Tuple<($($ty,)+)> {
            type Value = ($($ty::Value,)+);

            fn generate<R: Prng + ?Sized>(&self, rng: &mut R) -> Generated<Self::Value> {
                let ($($var,)+) = &self.0;
                // Tuple expressions evaluate in source order.
                Generated::new(($($var.generate(rng).into_inner(),)+))
            }
        }
    };
}

impl_tuple_arbitrary!(A a);
impl_tuple_arbitrary!(A a, B b);
impl_tuple_arbitrary!(A a, B b, C c);
impl_tuple_arbitrary!(A a, B b, C c, D d);
impl_tuple_arbitrary!(A a, B b, C c, D d, E e);
impl_tuple_arbitrary!(A a, B b, C c, D d, E e, G g);

/// Printable ASCII characters, `' '` through `'~'`.
pub type PrintableChar = Mapped<Integer, fn(i64) -> char>;

/// Integers in `[min, max]`.
pub fn integer(min: i64, max: i64) -> Result<Integer> {
    Integer::new(min, max)
}

/// Natural numbers in `[0, max]`.
pub fn nat(max: i64) -> Result<Integer> {
    Integer::new(0, max)
}

/// Printable ASCII characters.
pub fn char() -> PrintableChar {
    fn printable(code: i64) -> char {
        char::from(code as u8)
    }

    let codes = Integer {
        min: 0x20,
        max: 0x7e,
    };
    codes.map(printable as fn(i64) -> char)
}

/// Combine arbitraries into a tuple arbitrary, e.g. `tuple((nat(9)?, char()))`.
pub fn tuple<S>(arbitraries: S) -> Tuple<S> {
    Tuple::new(arbitraries)
}
