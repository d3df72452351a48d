use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ids::ItemId;

/// Public-facing profile fields. Exactly one logical instance per user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicProfile {
    pub display_name: String,
    pub headline: Option<String>,
    pub bio: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub location: Option<String>,
    pub open_to_work: bool,
}

/// Private contact fields. The email is read-only in the editor and is
/// carried through unchanged on every whole-aggregate write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub dial_code: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Career {
    pub id: ItemId,
    pub company: String,
    pub title: String,
    pub description: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    /// Last persisted position. Ignored by reconciliation, which re-derives
    /// the value from the item's current array index.
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: ItemId,
    pub institution: String,
    pub degree: String,
    pub field: Option<String>,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub id: ItemId,
    pub name: String,
    pub issuer: Option<String>,
    pub date_issued: Option<NaiveDate>,
    pub credential_id: Option<String>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageLevel {
    Basic,
    Conversational,
    Business,
    Native,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub id: ItemId,
    pub name: String,
    pub level: Option<LanguageLevel>,
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlEntry {
    pub id: ItemId,
    pub label: Option<String>,
    pub url: String,
    pub sort_order: i32,
}

/// A skill-catalog membership. Keyed by catalog id; the name is display-only
/// and never compared or written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
}

/// The in-memory root the editor mutates: two scalar aggregates, five
/// ordered collections, and the unordered skill set.
///
/// `Clone` produces a fully independent deep copy; the editing session relies
/// on this for baseline snapshots.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub profile: PublicProfile,
    pub contact: ContactInfo,
    pub skills: Vec<Skill>,
    pub careers: Vec<Career>,
    pub educations: Vec<Education>,
    pub certifications: Vec<Certification>,
    pub languages: Vec<Language>,
    pub urls: Vec<UrlEntry>,
}
