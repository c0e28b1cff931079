//! Achievement records and the per-view achievement store.
//!
//! Records are append-only: created on form submission, never updated or
//! deleted. A proof artifact is tracked by presence (plus the name and size
//! captured from the file input); its content is never stored or validated.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::events::Event;

/// Category of a recorded achievement. Fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementCategory {
    Academic,
    Sports,
    #[serde(rename = "Extra-Curricular")]
    ExtraCurricular,
}

impl AchievementCategory {
    pub const ALL: [AchievementCategory; 3] = [
        AchievementCategory::Academic,
        AchievementCategory::Sports,
        AchievementCategory::ExtraCurricular,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementCategory::Academic => "Academic",
            AchievementCategory::Sports => "Sports",
            AchievementCategory::ExtraCurricular => "Extra-Curricular",
        }
    }
}

impl fmt::Display for AchievementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AchievementCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValidationError::missing("category"));
        }
        match s.to_ascii_lowercase().as_str() {
            "academic" => Ok(AchievementCategory::Academic),
            "sports" => Ok(AchievementCategory::Sports),
            "extra-curricular" | "extracurricular" => Ok(AchievementCategory::ExtraCurricular),
            _ => Err(ValidationError::InvalidValue {
                field: "category".to_string(),
                message: format!("unknown category '{s}'"),
            }),
        }
    }
}

/// Proof artifact attached to an achievement.
///
/// Only presence and basic file metadata are kept; the bytes stay wherever
/// the user picked them from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofArtifact {
    pub file_name: String,
    pub size_bytes: Option<u64>,
}

impl ProofArtifact {
    pub fn new(file_name: impl Into<String>) -> Self {
        ProofArtifact {
            file_name: file_name.into(),
            size_bytes: None,
        }
    }

    pub fn with_size(mut self, size_bytes: u64) -> Self {
        self.size_bytes = Some(size_bytes);
        self
    }
}

/// A recorded achievement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    /// Unique identifier
    pub id: String,
    /// Achievement title
    pub title: String,
    /// Category from the fixed set
    pub category: AchievementCategory,
    /// Free-form description
    pub description: String,
    /// Optional attached proof artifact
    pub proof: Option<ProofArtifact>,
    /// True iff a proof artifact was supplied at creation
    pub has_proof: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Achievement {
    pub fn new(
        title: impl Into<String>,
        category: AchievementCategory,
        description: impl Into<String>,
        proof: Option<ProofArtifact>,
        now: DateTime<Utc>,
    ) -> Self {
        let has_proof = proof.is_some();
        Achievement {
            id: format!("ach-{}-{}", now.timestamp(), uuid::Uuid::new_v4()),
            title: title.into(),
            category,
            description: description.into(),
            proof,
            has_proof,
            created_at: now,
        }
    }
}

/// Ordered collection of achievements for one view, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AchievementStore {
    achievements: Vec<Achievement>,
}

impl AchievementStore {
    pub fn new() -> Self {
        Self {
            achievements: Vec::new(),
        }
    }

    /// Record an achievement at the front of the collection.
    ///
    /// Title and description must be non-empty after trimming; the category
    /// is enforced by its type at the parsing boundary. The collection is
    /// left unchanged on rejection.
    pub fn add(
        &mut self,
        title: &str,
        category: AchievementCategory,
        description: &str,
        proof: Option<ProofArtifact>,
        now: DateTime<Utc>,
    ) -> Result<Event, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError::missing("title"));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::missing("description"));
        }

        let achievement = Achievement::new(title, category, description, proof, now);
        let event = Event::AchievementAdded {
            achievement_id: achievement.id.clone(),
            title: achievement.title.clone(),
            category,
            has_proof: achievement.has_proof,
            at: now,
        };
        tracing::debug!(
            "Achievement added: {} ({}, proof: {})",
            achievement.id,
            achievement.category,
            achievement.has_proof
        );
        self.achievements.insert(0, achievement);
        Ok(event)
    }

    /// All achievements in insertion order (newest first).
    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn get(&self, id: &str) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    pub fn len(&self) -> usize {
        self.achievements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.achievements.is_empty()
    }

    /// Append a pre-built record. Used for seeding a fresh session.
    pub(crate) fn push_seed(&mut self, achievement: Achievement) {
        self.achievements.push(achievement);
    }
}
