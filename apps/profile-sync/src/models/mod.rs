pub mod ids;
pub mod profile;

pub use ids::ItemId;
pub use profile::{
    Career, Certification, ContactInfo, Education, Language, LanguageLevel, ProfileDraft,
    PublicProfile, Skill, UrlEntry,
};
