//! Canonicalization — the normalized, order-stable, whitespace-trimmed form
//! both dirty-checking and per-item change detection compare against.
//!
//! Rules: free text is trimmed; empty and whitespace-only text becomes an
//! explicit `null` (so "cleared" and "never set" compare equal); every
//! ordered collection re-derives `sort_order` from array position; the skill
//! set reduces to a sorted id list. Pure and deterministic throughout.

use serde_json::{json, Value};
use uuid::Uuid;

use crate::diff::{Aggregate, AggregateKind, CollectionItem, CollectionKind};
use crate::models::{
    Career, Certification, ContactInfo, Education, ItemId, Language, ProfileDraft, PublicProfile,
    UrlEntry,
};

/// Trims a free-text field; empty and whitespace-only collapse to absent.
pub fn canonical_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn canonical_opt(value: &Option<String>) -> Option<String> {
    value.as_deref().and_then(canonical_text)
}

impl Aggregate for PublicProfile {
    const KIND: AggregateKind = AggregateKind::PublicProfile;

    fn canonical_payload(&self) -> Value {
        json!({
            "display_name": canonical_text(&self.display_name),
            "headline": canonical_opt(&self.headline),
            "bio": canonical_opt(&self.bio),
            "birth_date": self.birth_date,
            "location": canonical_opt(&self.location),
            "open_to_work": self.open_to_work,
        })
    }
}

impl Aggregate for ContactInfo {
    const KIND: AggregateKind = AggregateKind::ContactInfo;

    fn canonical_payload(&self) -> Value {
        json!({
            "email": canonical_text(&self.email),
            "dial_code": canonical_opt(&self.dial_code),
            "phone_number": canonical_opt(&self.phone_number),
        })
    }
}

impl CollectionItem for Career {
    const KIND: CollectionKind = CollectionKind::Career;

    fn id(&self) -> ItemId {
        self.id
    }

    fn set_id(&mut self, id: ItemId) {
        self.id = id;
    }

    fn canonical_payload(&self, sort_order: usize) -> Value {
        json!({
            "company": canonical_text(&self.company),
            "title": canonical_text(&self.title),
            "description": canonical_opt(&self.description),
            "date_start": self.date_start,
            "date_end": self.date_end,
            "sort_order": sort_order,
        })
    }
}

impl CollectionItem for Education {
    const KIND: CollectionKind = CollectionKind::Education;

    fn id(&self) -> ItemId {
        self.id
    }

    fn set_id(&mut self, id: ItemId) {
        self.id = id;
    }

    fn canonical_payload(&self, sort_order: usize) -> Value {
        json!({
            "institution": canonical_text(&self.institution),
            "degree": canonical_text(&self.degree),
            "field": canonical_opt(&self.field),
            "date_start": self.date_start,
            "date_end": self.date_end,
            "sort_order": sort_order,
        })
    }
}

impl CollectionItem for Certification {
    const KIND: CollectionKind = CollectionKind::Certification;

    fn id(&self) -> ItemId {
        self.id
    }

    fn set_id(&mut self, id: ItemId) {
        self.id = id;
    }

    fn canonical_payload(&self, sort_order: usize) -> Value {
        json!({
            "name": canonical_text(&self.name),
            "issuer": canonical_opt(&self.issuer),
            "date_issued": self.date_issued,
            "credential_id": canonical_opt(&self.credential_id),
            "sort_order": sort_order,
        })
    }
}

impl CollectionItem for Language {
    const KIND: CollectionKind = CollectionKind::Language;

    fn id(&self) -> ItemId {
        self.id
    }

    fn set_id(&mut self, id: ItemId) {
        self.id = id;
    }

    fn canonical_payload(&self, sort_order: usize) -> Value {
        json!({
            "name": canonical_text(&self.name),
            "level": self.level,
            "sort_order": sort_order,
        })
    }
}

impl CollectionItem for UrlEntry {
    const KIND: CollectionKind = CollectionKind::Url;

    fn id(&self) -> ItemId {
        self.id
    }

    fn set_id(&mut self, id: ItemId) {
        self.id = id;
    }

    fn canonical_payload(&self, sort_order: usize) -> Value {
        json!({
            "label": canonical_opt(&self.label),
            "url": canonical_text(&self.url),
            "sort_order": sort_order,
        })
    }
}

fn collection_snapshot<T: CollectionItem>(items: &[T]) -> Value {
    Value::Array(
        items
            .iter()
            .enumerate()
            .map(|(position, item)| {
                json!({
                    "id": item.id(),
                    "payload": item.canonical_payload(position),
                })
            })
            .collect(),
    )
}

/// Full canonical form of a draft or baseline. Two structurally equivalent
/// drafts (differing only in incidental whitespace, stored sort orders, or
/// skill ordering) snapshot to deep-equal values.
pub fn snapshot(draft: &ProfileDraft) -> Value {
    let mut skill_ids: Vec<Uuid> = draft.skills.iter().map(|s| s.id).collect();
    skill_ids.sort();

    json!({
        "profile": draft.profile.canonical_payload(),
        "contact": draft.contact.canonical_payload(),
        "skills": skill_ids,
        "careers": collection_snapshot(&draft.careers),
        "educations": collection_snapshot(&draft.educations),
        "certifications": collection_snapshot(&draft.certifications),
        "languages": collection_snapshot(&draft.languages),
        "urls": collection_snapshot(&draft.urls),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skill;

    fn make_draft() -> ProfileDraft {
        let mut draft = ProfileDraft::default();
        draft.profile.display_name = "Ada".to_string();
        draft.contact.email = "ada@example.com".to_string();
        draft.careers.push(Career {
            id: ItemId::from_server(Uuid::new_v4()),
            company: "Acme".to_string(),
            title: "Engineer".to_string(),
            description: None,
            date_start: None,
            date_end: None,
            sort_order: 0,
        });
        draft.skills.push(Skill {
            id: Uuid::new_v4(),
            name: "rust".to_string(),
        });
        draft
    }

    #[test]
    fn test_canonical_text_trims_and_collapses() {
        assert_eq!(canonical_text("  Acme  "), Some("Acme".to_string()));
        assert_eq!(canonical_text(""), None);
        assert_eq!(canonical_text("   "), None);
    }

    #[test]
    fn test_snapshot_ignores_incidental_whitespace() {
        let draft = make_draft();
        let mut noisy = draft.clone();
        noisy.profile.display_name = " Ada ".to_string();
        noisy.careers[0].company = "Acme   ".to_string();
        assert_eq!(snapshot(&draft), snapshot(&noisy));
    }

    #[test]
    fn test_snapshot_ignores_stored_sort_order() {
        let draft = make_draft();
        let mut stale = draft.clone();
        stale.careers[0].sort_order = 42;
        assert_eq!(snapshot(&draft), snapshot(&stale));
    }

    #[test]
    fn test_snapshot_ignores_skill_ordering() {
        let mut draft = make_draft();
        draft.skills.push(Skill {
            id: Uuid::new_v4(),
            name: "sql".to_string(),
        });
        let mut reordered = draft.clone();
        reordered.skills.reverse();
        assert_eq!(snapshot(&draft), snapshot(&reordered));
    }

    #[test]
    fn test_snapshot_detects_collection_reorder() {
        let mut draft = make_draft();
        draft.careers.push(Career {
            id: ItemId::from_server(Uuid::new_v4()),
            company: "Globex".to_string(),
            title: "Manager".to_string(),
            description: None,
            date_start: None,
            date_end: None,
            sort_order: 1,
        });
        let mut reordered = draft.clone();
        reordered.careers.reverse();
        assert_ne!(snapshot(&draft), snapshot(&reordered));
    }

    #[test]
    fn test_snapshot_distinguishes_identity_not_just_content() {
        let draft = make_draft();
        let mut replaced = draft.clone();
        replaced.careers[0].id = ItemId::from_server(Uuid::new_v4());
        assert_ne!(snapshot(&draft), snapshot(&replaced));
    }
}
