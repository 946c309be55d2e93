//! Property definitions for property-based testing.

use crate::arbitrary::{tuple, Arbitrary, Tuple};

/// Classification of a single predicate evaluation.
///
/// There is no discard variant: every generated value counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    pub fn is_fail(self) -> bool {
        self == Outcome::Fail
    }
}

impl From<bool> for Outcome {
    fn from(holds: bool) -> Self {
        if holds {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }
}

/// A predicate with no explicit result passes.
impl From<()> for Outcome {
    fn from(_: ()) -> Self {
        Outcome::Pass
    }
}

type Predicate<T> = Box<dyn Fn(&T) -> Outcome>;

/// An arbitrary paired with the predicate it should never falsify.
///
/// Properties are immutable and can be checked any number of times.
pub struct Property<A: Arbitrary> {
    arbitrary: A,
    predicate: Predicate<A::Value>,
}

impl<A: Arbitrary> Property<A> {
    /// Create a new property from an arbitrary and a predicate.
    ///
    /// The predicate may return `bool` or `()`. Only `false` fails; a
    /// predicate that panics is not caught.
    pub fn new<F, O>(arbitrary: A, predicate: F) -> Self
    where
        F: Fn(&A::Value) -> O + 'static,
        O: Into<Outcome>,
    {
        Property {
            arbitrary,
            predicate: Box::new(move |value: &A::Value| -> Outcome { predicate(value).into() }),
        }
    }

    pub fn arbitrary(&self) -> &A {
        &self.arbitrary
    }

    /// Evaluate the predicate against one value.
    pub fn run(&self, value: &A::Value) -> Outcome {
        (self.predicate)(value)
    }
}

/// Create a property over a single arbitrary.
pub fn property<A, F, O>(arbitrary: A, predicate: F) -> Property<A>
where
    A: Arbitrary,
    F: Fn(&A::Value) -> O + 'static,
    O: Into<Outcome>,
{
    Property::new(arbitrary, predicate)
}

/// Create a property over two arbitraries; the predicate receives both
/// values in declared order.
pub fn property2<A, B, F, O>(a: A, b: B, predicate: F) -> Property<Tuple<(A, B)>>
where
    A: Arbitrary,
    B: Arbitrary,
    F: Fn(&A::Value, &B::Value) -> O + 'static,
    O: Into<Outcome>,
{
    Property::new(tuple((a, b)), move |(x, y): &(A::Value, B::Value)| {
        predicate(x, y)
    })
}

/// Create a property over three arbitraries.
pub fn property3<A, B, C, F, O>(a: A, b: B, c: C, predicate: F) -> Property<Tuple<(A, B, C)>>
where
    A: Arbitrary,
    B: Arbitrary,
    C: Arbitrary,
    F: Fn(&A::Value, &B::Value, &C::Value) -> O + 'static,
    O: Into<Outcome>,
{
    Property::new(
        tuple((a, b, c)),
        move |(x, y, z): &(A::Value, B::Value, C::Value)| predicate(x, y, z),
    )
}
