//! The page sections. Static sections are plain components, the data driven
//! ones are split out as lists rendering one card per record, in the order
//! they were received.

mod about;
mod blog;
mod contact;
mod experience;
mod hero;
mod projects;

pub use about::{AboutText, SkillGrid};
pub use blog::BlogList;
pub use contact::Contact;
pub use experience::ExperienceTimeline;
pub use hero::Hero;
pub use projects::ProjectGrid;

pub const OWNER_NAME: &str = "Anirudra Choudhury";
pub const EMAIL: &str = "anirudra.choudhury@yahoo.in";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/anirudra-choudhury/";
pub const GITHUB_URL: &str = "https://github.com/AnirudraChoudhury";
