//! Running properties over bounded streams of generated values.

use crate::arbitrary::{Arbitrary, Generated};
use crate::data::{Config, Verdict};
use crate::error::{QuickpropError, Result};
use crate::prng::{fresh_seed, Prng, Seed};
use crate::property::Property;
use crate::stream::ValueStream;
use tracing::{debug, trace, warn};

/// Where a [`Runner`] is in its single pass over the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// More values may be pulled.
    Running,
    /// A value falsified the predicate. Terminal.
    Failed,
    /// The source ran dry without a failure. Terminal.
    Exhausted,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        self != RunState::Running
    }
}

/// Drives values from a source through a property, stopping at the first
/// failure.
pub struct Runner<'p, A: Arbitrary, I> {
    property: &'p Property<A>,
    source: I,
    state: RunState,
    tests_run: usize,
}

impl<'p, A, I> Runner<'p, A, I>
where
    A: Arbitrary,
    I: Iterator<Item = Generated<A::Value>>,
{
    pub fn new(property: &'p Property<A>, source: I) -> Self {
        Runner {
            property,
            source,
            state: RunState::Running,
            tests_run: 0,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn tests_run(&self) -> usize {
        self.tests_run
    }

    /// Pull and evaluate one value. Once terminal, the source is left alone.
    pub fn step(&mut self) -> RunState {
        if self.state.is_terminal() {
            return self.state;
        }

        match self.source.next() {
            Some(generated) => {
                self.tests_run += 1;
                if self.property.run(generated.value()).is_fail() {
                    self.state = RunState::Failed;
                }
            }
            None => self.state = RunState::Exhausted,
        }

        trace!(tests_run = self.tests_run, state = ?self.state, "runner step");
        self.state
    }

    /// Step until a terminal state and report the verdict.
    pub fn run(mut self) -> Verdict {
        while !self.step().is_terminal() {}

        Verdict {
            failed: self.state == RunState::Failed,
            tests_run: self.tests_run,
        }
    }
}

/// Check a property with a fresh seed, or the one pinned in `config`.
pub fn check<A: Arbitrary>(property: &Property<A>, config: &Config) -> Verdict {
    let seed = config.seed.unwrap_or_else(fresh_seed);
    debug!(seed, run_count = config.run_count, "checking property");

    let verdict = check_with(property, config, Seed::from_u64(seed));
    if verdict.failed {
        warn!(
            seed,
            tests_run = verdict.tests_run,
            "property failed; pin this seed to reproduce"
        );
    }
    verdict
}

/// Check a property drawing from the given generator.
pub fn check_with<A, R>(property: &Property<A>, config: &Config, rng: R) -> Verdict
where
    A: Arbitrary,
    R: Prng,
{
    let source = ValueStream::new(property.arbitrary(), rng).bounded(config.run_count);
    let verdict = Runner::new(property, source).run();

    debug!(
        failed = verdict.failed,
        tests_run = verdict.tests_run,
        "property check finished: {verdict}"
    );
    verdict
}

/// Check a property and turn a failed verdict into [`QuickpropError::PropertyFailed`].
pub fn assert_property<A: Arbitrary>(property: &Property<A>, config: &Config) -> Result<()> {
    if check(property, config).failed {
        Err(QuickpropError::PropertyFailed)
    } else {
        Ok(())
    }
}

impl<A: Arbitrary> Property<A> {
    /// Run this property with the given configuration.
    pub fn check(&self, config: &Config) -> Verdict {
        check(self, config)
    }

    /// Run this property, failing with [`QuickpropError::PropertyFailed`].
    pub fn assert(&self, config: &Config) -> Result<()> {
        assert_property(self, config)
    }
}
