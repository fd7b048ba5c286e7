//! Biographical content shown on the portfolio page.
//!
//! The document is static configuration: compiled in by default, or replaced
//! at startup by a TOML file named in `profile.path`.

mod content;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Failed to read profile file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse profile file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub full_name: String,
    pub role: String,
    pub headline: String,
    pub location: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub title: String,
    pub company: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub description: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub projects: Vec<Project>,
    /// Emphasis note rendered beside the role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub period: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub honors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub personal: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<Job>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<SkillCategory>,
}

impl Profile {
    /// The compiled-in profile.
    #[must_use]
    pub fn builtin() -> Self {
        content::builtin()
    }

    pub fn load_from_path(path: &Path) -> Result<Self, ProfileError> {
        let text = std::fs::read_to_string(path).map_err(|source| ProfileError::Read {
            path: path.display().to_string(),
            source,
        })?;

        let profile = toml::from_str(&text).map_err(|source| ProfileError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        info!("Loaded profile from: {}", path.display());
        Ok(profile)
    }

    /// Resolves the profile named by config, falling back to the built-in one.
    pub fn resolve(path: Option<&str>) -> Result<Self, ProfileError> {
        path.map_or_else(|| Ok(Self::builtin()), |p| Self::load_from_path(Path::new(p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profile_is_populated() {
        let profile = Profile::builtin();
        assert!(!profile.personal.name.is_empty());
        assert!(!profile.experience.is_empty());
        assert!(!profile.education.is_empty());
        assert!(profile.skills.iter().all(|c| !c.skills.is_empty()));
    }

    #[test]
    fn test_profile_round_trips_through_toml() {
        let profile = Profile::builtin();
        let text = toml::to_string_pretty(&profile).unwrap();
        let parsed: Profile = toml::from_str(&text).unwrap();
        assert_eq!(parsed, profile);
    }

    #[test]
    fn test_resolve_from_file() {
        let path = std::env::temp_dir().join(format!("folio-profile-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            r#"
                [personal]
                name = "Ada"
                full_name = "Ada Lovelace"
                role = "Analyst"
                headline = "Engines"
                location = "London"
                email = "ada@example.com"
                linkedin = ""
                github = ""

                [[skills]]
                category = "Math"
                skills = ["Analysis"]
            "#,
        )
        .unwrap();

        let profile = Profile::resolve(path.to_str()).unwrap();
        assert_eq!(profile.personal.name, "Ada");
        assert!(profile.experience.is_empty());
        assert_eq!(profile.skills.len(), 1);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_resolve_missing_file_errors() {
        let err = Profile::resolve(Some("/no/such/profile.toml")).unwrap_err();
        assert!(matches!(err, ProfileError::Read { .. }));
    }
}
