use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Closed set of listing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OpportunityType {
    Job,
    Internship,
    Scholarship,
    Course,
    Volunteer,
}

impl OpportunityType {
    pub const ALL: [OpportunityType; 5] = [
        OpportunityType::Job,
        OpportunityType::Internship,
        OpportunityType::Scholarship,
        OpportunityType::Course,
        OpportunityType::Volunteer,
    ];

    /// Stored wire form, e.g. `"JOB"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityType::Job => "JOB",
            OpportunityType::Internship => "INTERNSHIP",
            OpportunityType::Scholarship => "SCHOLARSHIP",
            OpportunityType::Course => "COURSE",
            OpportunityType::Volunteer => "VOLUNTEER",
        }
    }
}

impl fmt::Display for OpportunityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpportunityType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "JOB" => Ok(OpportunityType::Job),
            "INTERNSHIP" => Ok(OpportunityType::Internship),
            "SCHOLARSHIP" => Ok(OpportunityType::Scholarship),
            "COURSE" => Ok(OpportunityType::Course),
            "VOLUNTEER" => Ok(OpportunityType::Volunteer),
            other => Err(format!("unknown opportunity type: {}", other)),
        }
    }
}

/// A postable listing. `id` and `posted_at` are assigned by the
/// persistence adapter at creation and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opportunity {
    pub id: Uuid,
    pub title: String,
    pub organization: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: OpportunityType,
    pub description: String,
    pub deadline: NaiveDate,
    /// Insertion order is kept; duplicates are allowed.
    pub tags: Vec<String>,
    pub salary: Option<String>,
    pub posted_at: NaiveDate,
    pub contact_email: String,
    pub contact_phone: String,
}

/// A contact inquiry tied to one opportunity. `opportunity_title` is a
/// denormalized copy taken at send time and never re-synced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    /// Weak reference — the opportunity may no longer exist.
    pub opportunity_id: Uuid,
    pub opportunity_title: String,
    pub sender_name: String,
    pub sender_email: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub replies: Vec<Reply>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub id: Uuid,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub is_from_owner: bool,
}

/// Supported UI locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    En,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Rtl,
    Ltr,
}

impl Language {
    pub fn direction(&self) -> Direction {
        match self {
            Language::Ar => Direction::Rtl,
            Language::En => Direction::Ltr,
        }
    }

    pub fn toggled(&self) -> Language {
        match self {
            Language::Ar => Language::En,
            Language::En => Language::Ar,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Ar
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ar" => Ok(Language::Ar),
            "en" => Ok(Language::En),
            other => Err(format!("unknown language: {}", other)),
        }
    }
}
