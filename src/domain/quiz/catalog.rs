//! Question catalog - the immutable definition of one classification scheme.
//!
//! A catalog bundles the axes it scores (in tie-break priority order), the
//! questions and their weighted options, the modifier significance rule,
//! and which questions feed lifestyle fields on the profile. Catalogs are
//! validated once on construction and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

use super::{Axis, Question};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Schema marker for the catalog's scoring semantics (stored on profiles
/// as `quiz_version`).
///
/// Bump it when axis semantics or the set of lifestyle-derived fields change
/// incompatibly. Additive, backward-compatible changes (a new option, a
/// reworded title) keep the same version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct CatalogVersion(u32);

impl CatalogVersion {
    /// Creates a version; zero is reserved for "never classified".
    pub fn new(value: u32) -> Result<Self, CatalogError> {
        if value == 0 {
            return Err(CatalogError::InvalidVersion);
        }
        Ok(Self(value))
    }

    /// Returns the inner value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for CatalogVersion {
    type Error = CatalogError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CatalogVersion> for u32 {
    fn from(version: CatalogVersion) -> Self {
        version.0
    }
}

impl fmt::Display for CatalogVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// When the runner-up axis is significant enough to report as a modifier.
///
/// The runner-up qualifies when its score is positive, at least
/// `min_score`, and at least `min_ratio` times the primary score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModifierRule {
    #[serde(default = "default_min_score")]
    pub min_score: i64,
    #[serde(default = "default_min_ratio")]
    pub min_ratio: f64,
}

fn default_min_score() -> i64 {
    1
}

fn default_min_ratio() -> f64 {
    0.5
}

impl Default for ModifierRule {
    fn default() -> Self {
        Self {
            min_score: default_min_score(),
            min_ratio: default_min_ratio(),
        }
    }
}

impl ModifierRule {
    /// Decides whether a runner-up score qualifies against the primary score.
    pub fn admits(&self, primary: i64, runner_up: i64) -> bool {
        runner_up > 0
            && runner_up >= self.min_score
            && (runner_up as f64) >= self.min_ratio * (primary as f64)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if !(0.0..=1.0).contains(&self.min_ratio) {
            return Err(CatalogError::InvalidModifierRule(format!(
                "min_ratio must be within 0.0..=1.0, got {}",
                self.min_ratio
            )));
        }
        if self.min_score < 0 {
            return Err(CatalogError::InvalidModifierRule(format!(
                "min_score must not be negative, got {}",
                self.min_score
            )));
        }
        Ok(())
    }
}

/// Profile fields copied verbatim from a designated question's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifestyleField {
    AlcoholFrequency,
    SmokingStatus,
}

/// Binds a lifestyle field to the question whose option id it stores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifestyleBinding {
    pub field: LifestyleField,
    pub question_id: String,
}

/// Errors raised while validating a catalog definition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("Catalog version must be greater than 0")]
    InvalidVersion,

    #[error("Catalog declares no axes")]
    NoAxes,

    #[error("Axis '{0}' is declared more than once")]
    DuplicateAxis(Axis),

    #[error("Question id cannot be empty")]
    EmptyQuestionId,

    #[error("Question '{0}' is declared more than once")]
    DuplicateQuestion(String),

    #[error("Question '{0}' has no options")]
    NoOptions(String),

    #[error("Question '{question_id}' declares option '{option_id}' more than once")]
    DuplicateOption {
        question_id: String,
        option_id: String,
    },

    #[error("Option '{option_id}' of question '{question_id}' weights undeclared axis '{axis}'")]
    UndeclaredAxis {
        question_id: String,
        option_id: String,
        axis: Axis,
    },

    #[error("Lifestyle field {field:?} is bound to unknown question '{question_id}'")]
    UnknownLifestyleQuestion {
        field: LifestyleField,
        question_id: String,
    },

    #[error("Lifestyle field {0:?} is bound more than once")]
    DuplicateLifestyleField(LifestyleField),

    #[error("Invalid modifier rule: {0}")]
    InvalidModifierRule(String),
}

/// Unvalidated, serializable form of a catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogDefinition {
    pub version: CatalogVersion,
    pub axes: Vec<Axis>,
    pub questions: Vec<Question>,
    #[serde(default)]
    pub modifier_rule: ModifierRule,
    #[serde(default)]
    pub lifestyle: Vec<LifestyleBinding>,
}

/// A validated, immutable catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDefinition", into = "CatalogDefinition")]
pub struct Catalog {
    definition: CatalogDefinition,
}

impl Catalog {
    /// Creates a builder for the given version.
    pub fn builder(version: CatalogVersion) -> CatalogBuilder {
        CatalogBuilder::new(version)
    }

    /// Validates a definition and wraps it.
    pub fn from_definition(definition: CatalogDefinition) -> Result<Self, CatalogError> {
        if definition.axes.is_empty() {
            return Err(CatalogError::NoAxes);
        }

        let mut axes = HashSet::new();
        for axis in &definition.axes {
            if !axes.insert(*axis) {
                return Err(CatalogError::DuplicateAxis(*axis));
            }
        }

        let mut question_ids = HashSet::new();
        for question in &definition.questions {
            if question.id.trim().is_empty() {
                return Err(CatalogError::EmptyQuestionId);
            }
            if !question_ids.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
            if question.options.is_empty() {
                return Err(CatalogError::NoOptions(question.id.clone()));
            }

            let mut option_ids = HashSet::new();
            for option in &question.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(CatalogError::DuplicateOption {
                        question_id: question.id.clone(),
                        option_id: option.id.clone(),
                    });
                }
                if let Some(axis) = option.weights.keys().find(|a| !axes.contains(*a)) {
                    return Err(CatalogError::UndeclaredAxis {
                        question_id: question.id.clone(),
                        option_id: option.id.clone(),
                        axis: *axis,
                    });
                }
            }
        }

        let mut fields = HashSet::new();
        for binding in &definition.lifestyle {
            if !fields.insert(binding.field) {
                return Err(CatalogError::DuplicateLifestyleField(binding.field));
            }
            if !question_ids.contains(binding.question_id.as_str()) {
                return Err(CatalogError::UnknownLifestyleQuestion {
                    field: binding.field,
                    question_id: binding.question_id.clone(),
                });
            }
        }

        definition.modifier_rule.validate()?;

        Ok(Self { definition })
    }

    pub fn version(&self) -> CatalogVersion {
        self.definition.version
    }

    /// Scored axes in tie-break priority order.
    pub fn axes(&self) -> &[Axis] {
        &self.definition.axes
    }

    /// All questions in declaration order, conditional ones included.
    pub fn questions(&self) -> &[Question] {
        &self.definition.questions
    }

    pub fn question(&self, question_id: &str) -> Option<&Question> {
        self.definition.questions.iter().find(|q| q.id == question_id)
    }

    pub fn modifier_rule(&self) -> ModifierRule {
        self.definition.modifier_rule
    }

    pub fn lifestyle_bindings(&self) -> &[LifestyleBinding] {
        &self.definition.lifestyle
    }

    /// The question feeding a lifestyle field, if the catalog binds one.
    pub fn lifestyle_question(&self, field: LifestyleField) -> Option<&str> {
        self.definition
            .lifestyle
            .iter()
            .find(|b| b.field == field)
            .map(|b| b.question_id.as_str())
    }
}

impl TryFrom<CatalogDefinition> for Catalog {
    type Error = CatalogError;

    fn try_from(definition: CatalogDefinition) -> Result<Self, Self::Error> {
        Self::from_definition(definition)
    }
}

impl From<Catalog> for CatalogDefinition {
    fn from(catalog: Catalog) -> Self {
        catalog.definition
    }
}

/// Builder for constructing Catalog instances.
#[derive(Debug)]
pub struct CatalogBuilder {
    definition: CatalogDefinition,
}

impl CatalogBuilder {
    /// Creates a new builder with default modifier rule.
    pub fn new(version: CatalogVersion) -> Self {
        Self {
            definition: CatalogDefinition {
                version,
                axes: Vec::new(),
                questions: Vec::new(),
                modifier_rule: ModifierRule::default(),
                lifestyle: Vec::new(),
            },
        }
    }

    /// Sets the scored axes, in priority order.
    pub fn axes(mut self, axes: impl IntoIterator<Item = Axis>) -> Self {
        self.definition.axes = axes.into_iter().collect();
        self
    }

    /// Appends a question.
    pub fn question(mut self, question: Question) -> Self {
        self.definition.questions.push(question);
        self
    }

    /// Overrides the modifier rule.
    pub fn modifier_rule(mut self, rule: ModifierRule) -> Self {
        self.definition.modifier_rule = rule;
        self
    }

    /// Binds a lifestyle field to a question.
    pub fn lifestyle(mut self, field: LifestyleField, question_id: impl Into<String>) -> Self {
        self.definition.lifestyle.push(LifestyleBinding {
            field,
            question_id: question_id.into(),
        });
        self
    }

    /// Validates and builds the catalog.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        Catalog::from_definition(self.definition)
    }
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        DomainError::new(ErrorCode::CatalogInvalid, err.to_string())
    }
}
