//! Community entity - a study club users can join

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Community (study club) entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Community {
    pub id: Snowflake,
    pub name: String,
    pub description: Option<String>,
    pub is_public: bool,
    pub region: Option<String>,
    pub sub_region: Option<String>,
    pub tags: Vec<String>,
    pub image_url: Option<String>,
    pub owner_id: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Community {
    /// Create a new public Community
    pub fn new(id: Snowflake, name: String, owner_id: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            is_public: true,
            region: None,
            sub_region: None,
            tags: Vec::new(),
            image_url: None,
            owner_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Check if the community has not been soft-deleted
    #[inline]
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }

    /// Check if a user created the community
    #[inline]
    pub fn is_owner(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }

    /// Check if the community carries a tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Update the name
    pub fn set_name(&mut self, name: String) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the description
    pub fn set_description(&mut self, description: Option<String>) {
        self.description = description;
        self.updated_at = Utc::now();
    }

    /// Replace the tag set, dropping duplicates while keeping order
    pub fn set_tags(&mut self, tags: Vec<String>) {
        let mut deduped: Vec<String> = Vec::with_capacity(tags.len());
        for tag in tags {
            if !deduped.contains(&tag) {
                deduped.push(tag);
            }
        }
        self.tags = deduped;
        self.updated_at = Utc::now();
    }

    /// Update the region / sub-region pair
    pub fn set_region(&mut self, region: Option<String>, sub_region: Option<String>) {
        self.region = region;
        self.sub_region = sub_region;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_community_creation() {
        let community = Community::new(
            Snowflake::new(1),
            "Morning Algorithms".to_string(),
            Snowflake::new(100),
        );
        assert_eq!(community.name, "Morning Algorithms");
        assert!(community.is_public);
        assert!(community.is_active());
        assert!(community.is_owner(Snowflake::new(100)));
        assert!(!community.is_owner(Snowflake::new(200)));
    }

    #[test]
    fn test_set_tags_dedupes() {
        let mut community =
            Community::new(Snowflake::new(1), "Test".to_string(), Snowflake::new(1));
        community.set_tags(vec![
            "rust".to_string(),
            "cs".to_string(),
            "rust".to_string(),
        ]);
        assert_eq!(community.tags, vec!["rust".to_string(), "cs".to_string()]);
        assert!(community.has_tag("cs"));
        assert!(!community.has_tag("go"));
    }

    #[test]
    fn test_set_region() {
        let mut community =
            Community::new(Snowflake::new(1), "Test".to_string(), Snowflake::new(1));
        community.set_region(Some("Seoul".to_string()), Some("Mapo".to_string()));
        assert_eq!(community.region.as_deref(), Some("Seoul"));
        assert_eq!(community.sub_region.as_deref(), Some("Mapo"));
    }
}
