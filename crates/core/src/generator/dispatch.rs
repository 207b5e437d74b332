use rand::{Rng, RngCore};
use tracing::{debug, warn};

use super::GeneratorRegistry;
use crate::model::{Grade, ParseKindError, Problem, ProblemId, ProblemKind, QuizSettings, TopicId};

/// Chooses between base and advanced variants and stamps problem identity.
///
/// Never fails: generation gaps fall back to the basic variant and then to
/// [`Problem::placeholder`].
#[derive(Debug)]
pub struct Dispatcher {
    registry: GeneratorRegistry,
    advanced_chance: f64,
}

impl Dispatcher {
    #[must_use]
    pub fn new(registry: GeneratorRegistry, settings: &QuizSettings) -> Self {
        Self {
            registry,
            advanced_chance: settings.advanced_chance(),
        }
    }

    /// Standard generators with default settings.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(GeneratorRegistry::standard(), &QuizSettings::default())
    }

    #[must_use]
    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    #[must_use]
    pub fn advanced_chance(&self) -> f64 {
        self.advanced_chance
    }

    /// Rolls the tier for a fresh request on `topic`.
    ///
    /// Topics without an advanced generator always resolve to basic and do not
    /// consume a roll.
    pub fn resolve(&self, topic: TopicId, rng: &mut dyn RngCore) -> ProblemKind {
        let advanced = ProblemKind::advanced(topic);
        if self.registry.contains(advanced) && rng.random_bool(self.advanced_chance) {
            advanced
        } else {
            ProblemKind::basic(topic)
        }
    }

    /// Generates a problem for `topic`, rolling for the advanced variant.
    pub fn generate(&self, grade: Grade, topic: TopicId, rng: &mut dyn RngCore) -> Problem {
        let kind = self.resolve(topic, rng);
        self.generate_exact(grade, kind, rng)
    }

    /// Generates a problem of exactly `kind` with no tier roll.
    ///
    /// Retries use this so a learner never changes tier mid-slot.
    pub fn generate_exact(&self, grade: Grade, kind: ProblemKind, rng: &mut dyn RngCore) -> Problem {
        let (kind, result) = match self.registry.generate(kind, rng) {
            Err(err) if kind.is_advanced() => {
                warn!(%kind, error = %err, "advanced generation failed, falling back to basic");
                let basic = kind.to_basic();
                (basic, self.registry.generate(basic, rng))
            }
            result => (kind, result),
        };

        let id = ProblemId::random(rng);
        match result {
            Ok(generated) => {
                debug!(%grade, %kind, %id, "generated problem");
                Problem::from_generated(id, kind, grade, generated)
            }
            Err(err) => {
                warn!(%grade, %kind, error = %err, "no usable generator, serving placeholder");
                Problem::placeholder(id, kind, grade)
            }
        }
    }

    /// Generates from a string type id.
    ///
    /// Ids carrying the advanced suffix are generated exactly; plain topic ids
    /// roll for the tier.
    ///
    /// # Errors
    ///
    /// Returns `ParseKindError` if `type_id` names no known topic.
    pub fn generate_from_id(
        &self,
        grade: Grade,
        type_id: &str,
        rng: &mut dyn RngCore,
    ) -> Result<Problem, ParseKindError> {
        let kind: ProblemKind = type_id.parse()?;
        Ok(if kind.is_advanced() {
            self.generate_exact(grade, kind, rng)
        } else {
            self.generate(grade, kind.topic, rng)
        })
    }
}
