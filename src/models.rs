//! Entity record types for the managed collections

use serde::{Deserialize, Serialize};

// ============================================
// Resources
// ============================================

/// Checkbox + URL pair used for a resource's optional links
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LinkField {
    #[serde(default)]
    pub checked: bool,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Resource {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub documents: LinkField,
    #[serde(default)]
    pub course: LinkField,
    #[serde(default)]
    pub community: LinkField,
}

// ============================================
// Projects
// ============================================

/// Person reference (team lead, project member)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Contact {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Project {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub team_lead: Contact,
    #[serde(default)]
    pub team_members: Vec<Contact>,
}

// ============================================
// Team members
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TeamMember {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub github: String,
}

// ============================================
// Admin accounts
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AdminUser {
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
}

/// Options for the team position / admin role selects
pub const POSITION_OPTIONS: &[&str] = &["Head core", "Core", "Coordinator"];

// ============================================
// Seed data shown before anything is added
// ============================================

pub fn seed_projects() -> Vec<Project> {
    vec![Project {
        name: "HealthHub".to_string(),
        description: "Centralized platform for managing personal health data.".to_string(),
        full_description: "HealthHub is a comprehensive health management system.".to_string(),
        team_lead: Contact {
            name: "Hugh Jackman".to_string(),
            photo: "/placeholder.svg?height=100&width=100".to_string(),
            linkedin: "https://linkedin.com/in/hughjackman".to_string(),
            github: "https://github.com/hughjackman".to_string(),
        },
        team_members: vec![
            Contact {
                name: "Phoebe Buffay".to_string(),
                linkedin: "https://linkedin.com/in/phoebebuffay".to_string(),
                github: "https://github.com/phoebebuffay".to_string(),
                ..Contact::default()
            },
            Contact {
                name: "Chandler Bing".to_string(),
                linkedin: "https://linkedin.com/in/chandlerbing".to_string(),
                github: "https://github.com/chandlerbing".to_string(),
                ..Contact::default()
            },
        ],
    }]
}

pub fn seed_team() -> Vec<TeamMember> {
    vec![TeamMember {
        name: "Vishnu Teja".to_string(),
        role: "Technical Lead".to_string(),
        position: "Core".to_string(),
        bio: "Full-stack developer with a keen interest in cloud technologies and DevOps."
            .to_string(),
        image: "/assets/cs21b2027.jpg".to_string(),
        linkedin: "https://linkedin.com/in/vishnuteja".to_string(),
        github: "https://github.com/vishnuteja".to_string(),
    }]
}

pub fn seed_admins() -> Vec<AdminUser> {
    vec![
        AdminUser {
            name: "Admin User".to_string(),
            role: "Admin".to_string(),
            email: "admin@example.com".to_string(),
        },
        AdminUser {
            name: "Super Admin".to_string(),
            role: "Super Admin".to_string(),
            email: "superadmin@example.com".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_resource_is_all_empty() {
        let r = Resource::default();
        assert!(r.name.is_empty());
        assert!(!r.documents.checked);
        assert!(r.documents.url.is_empty());
        assert_eq!(r, Resource::default());
    }

    #[test]
    fn test_seed_shapes() {
        assert_eq!(seed_projects().len(), 1);
        assert_eq!(seed_projects()[0].team_members.len(), 2);
        assert_eq!(seed_team().len(), 1);
        assert_eq!(seed_admins().len(), 2);
    }
}
