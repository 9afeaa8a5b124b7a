use serde::{Deserialize, Serialize};

/// The fixed set of anchors the navigation bar can jump to.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Experience,
    Projects,
    Blog,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Home,
        Section::About,
        Section::Experience,
        Section::Projects,
        Section::Blog,
        Section::Contact,
    ];

    /// Id of the element this section is rendered into.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Blog => "blog",
            Section::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Blog => "Blog",
            Section::Contact => "Contact",
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
#[error("Unknown section `{0}'")]
pub struct UnknownSection(pub String);

impl std::str::FromStr for Section {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.id() == s)
            .ok_or_else(|| UnknownSection(String::from(s)))
    }
}

/// Moves the viewport, in the browser this is a smooth `scrollIntoView`.
pub trait Scroller {
    fn scroll_into_view(&mut self, anchor: &str);
}

/// Tracks the highlighted section. It only changes on explicit navigation,
/// scrolling by hand leaves it alone.
#[derive(Clone, Debug)]
pub struct Navigator<S> {
    active: Section,
    scroller: S,
}

impl<S: Scroller> Navigator<S> {
    pub fn new(scroller: S) -> Self {
        Self {
            active: Section::default(),
            scroller,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn navigate(&mut self, target: Section) {
        log::debug!("navigating from {:?} to {:?}", self.active, target);
        self.active = target;
        self.scroller.scroll_into_view(target.id());
    }

    pub fn scroller(&self) -> &S {
        &self.scroller
    }
}
