//! Randomized problem synthesis.
//!
//! Each topic has a base generator and, for some topics, an advanced variant.
//! Generators are registered per [`ProblemKind`] in a [`GeneratorRegistry`];
//! the [`Dispatcher`] decides which kind to build and stamps the result.

mod choices;
mod dispatch;
pub mod high;
pub mod middle;

use rand::RngCore;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::model::{Generated, ProblemKind, TopicId};

pub use dispatch::Dispatcher;

/// Fresh samples drawn before a kind whose drafts keep colliding is given up on.
pub const MAX_RESAMPLE_ATTEMPTS: usize = 16;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerateError {
    #[error("no generator registered for {0}")]
    MissingGenerator(ProblemKind),

    #[error("generated options are not pairwise distinct")]
    DuplicateOptions,

    #[error("{kind} produced duplicate options {attempts} times in a row")]
    ResampleExhausted { kind: ProblemKind, attempts: usize },
}

//
// ─── GENERATOR TRAIT ───────────────────────────────────────────────────────────
//

/// Synthesizes one problem draft from fresh random parameters.
///
/// Implementations draw only from `rng` and have no other side effects.
pub trait ProblemGenerator: Send + Sync {
    /// # Errors
    ///
    /// Returns `GenerateError::DuplicateOptions` when the sampled parameters
    /// produced colliding options; callers resample.
    fn generate(&self, rng: &mut dyn RngCore) -> Result<Generated, GenerateError>;
}

impl<F> ProblemGenerator for F
where
    F: Fn(&mut dyn RngCore) -> Result<Generated, GenerateError> + Send + Sync,
{
    fn generate(&self, rng: &mut dyn RngCore) -> Result<Generated, GenerateError> {
        self(rng)
    }
}

//
// ─── REGISTRY ──────────────────────────────────────────────────────────────────
//

/// Lookup from resolved kind to its generator.
#[derive(Default)]
pub struct GeneratorRegistry {
    generators: HashMap<ProblemKind, Box<dyn ProblemGenerator>>,
}

impl GeneratorRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every curriculum generator.
    #[must_use]
    pub fn standard() -> Self {
        use TopicId::*;

        let mut registry = Self::new();
        registry
            .register(ProblemKind::basic(M1Integer), middle::m1_integer)
            .register(ProblemKind::advanced(M1Integer), middle::m1_integer_adv)
            .register(ProblemKind::basic(M1Equation), middle::m1_equation)
            .register(ProblemKind::advanced(M1Equation), middle::m1_equation_adv)
            .register(ProblemKind::basic(M1Function), middle::m1_function)
            .register(ProblemKind::basic(M2Rational), middle::m2_rational)
            .register(ProblemKind::basic(M2Inequality), middle::m2_inequality)
            .register(ProblemKind::advanced(M2Inequality), middle::m2_inequality_adv)
            .register(ProblemKind::basic(M2LinearFunction), middle::m2_linear_function)
            .register(
                ProblemKind::advanced(M2LinearFunction),
                middle::m2_linear_function_adv,
            )
            .register(ProblemKind::basic(M3Root), middle::m3_root)
            .register(ProblemKind::basic(M3Factorization), middle::m3_factorization)
            .register(ProblemKind::basic(M3Quadratic), middle::m3_quadratic)
            .register(ProblemKind::advanced(M3Quadratic), middle::m3_quadratic_adv)
            .register(ProblemKind::basic(H1Polynomial), high::h1_polynomial)
            .register(ProblemKind::advanced(H1Polynomial), high::h1_polynomial_adv)
            .register(ProblemKind::basic(H1Complex), high::h1_complex)
            .register(ProblemKind::basic(H1Inequality), high::h1_inequality)
            .register(ProblemKind::basic(H2Exponent), high::h2_exponent)
            .register(ProblemKind::basic(H2Trigonometry), high::h2_trigonometry)
            .register(ProblemKind::basic(H2Sequence), high::h2_sequence)
            .register(ProblemKind::advanced(H2Sequence), high::h2_sequence_adv)
            .register(ProblemKind::basic(H3Limit), high::h3_limit)
            .register(ProblemKind::basic(H3Differentiation), high::h3_differentiation)
            .register(
                ProblemKind::advanced(H3Differentiation),
                high::h3_differentiation_adv,
            )
            .register(ProblemKind::basic(H3Integration), high::h3_integration);
        registry
    }

    /// Registers `generator` for `kind`, replacing any previous entry.
    pub fn register(
        &mut self,
        kind: ProblemKind,
        generator: impl ProblemGenerator + 'static,
    ) -> &mut Self {
        self.generators.insert(kind, Box::new(generator));
        self
    }

    #[must_use]
    pub fn contains(&self, kind: ProblemKind) -> bool {
        self.generators.contains_key(&kind)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.generators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Runs the generator for `kind`, resampling drafts with colliding options.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::MissingGenerator` if nothing is registered for
    /// `kind`, or `GenerateError::ResampleExhausted` if every draft collided.
    pub fn generate(
        &self,
        kind: ProblemKind,
        rng: &mut dyn RngCore,
    ) -> Result<Generated, GenerateError> {
        let generator = self
            .generators
            .get(&kind)
            .ok_or(GenerateError::MissingGenerator(kind))?;

        for _ in 0..MAX_RESAMPLE_ATTEMPTS {
            match generator.generate(rng) {
                Err(GenerateError::DuplicateOptions) => continue,
                result => return result,
            }
        }

        Err(GenerateError::ResampleExhausted {
            kind,
            attempts: MAX_RESAMPLE_ATTEMPTS,
        })
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.generators.keys().map(ToString::to_string).collect();
        kinds.sort();
        f.debug_struct("GeneratorRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}
