use content::{Collection, Section, ViewState};
use leptos::prelude::*;

use crate::components::{Footer, NavBar, Spinner};
use crate::navigation;
use crate::sections::{
    AboutText, BlogList, Contact, ExperienceTimeline, Hero, ProjectGrid, SkillGrid,
};

type ViewStateResource = Resource<Result<ViewState, ServerFnError>>;

#[component]
pub fn Index() -> impl IntoView {
    let navigation = navigation::navigation();
    let view_state: ViewStateResource = Resource::new(|| (), |_| async { get_view_state().await });

    view! {
        <NavBar navigation />
        <main class="portfolio">
            <Hero navigation />

            <section id=Section::About.id() class="about">
                <h2>"About Me"</h2>
                <AboutText />
                <h3 class="skills-title">"Technical Skills"</h3>
                {when_loaded(view_state, Collection::Skills)}
            </section>

            <section id=Section::Experience.id() class="experience">
                <h2>"Professional Experience"</h2>
                {when_loaded(view_state, Collection::Experience)}
            </section>

            <section id=Section::Projects.id() class="projects">
                <h2>"Featured Projects"</h2>
                {when_loaded(view_state, Collection::Projects)}
            </section>

            <section id=Section::Blog.id() class="blog">
                <h2>"Latest Articles"</h2>
                {when_loaded(view_state, Collection::Blogs)}
            </section>

            <Contact />
        </main>
        <Footer />
    }
}

/// Each section suspends on its own, showing its spinner until the content
/// settled.
fn when_loaded(view_state: ViewStateResource, collection: Collection) -> impl IntoView {
    view! {
        <Suspense fallback=move || pending(collection)>
            {move || Suspend::new(async move { resolved(view_state.await, collection) })}
        </Suspense>
    }
}

/// What a section shows while the server call is in flight.
pub fn pending(collection: Collection) -> impl IntoView {
    view! { <SectionBody state=ViewState::loading() collection /> }
}

/// What a section shows once the server call returned, whatever it returned.
pub fn resolved(result: Result<ViewState, ServerFnError>, collection: Collection) -> impl IntoView {
    view! { <SectionBody state=settle(result) collection /> }
}

#[component]
pub fn SectionBody(state: ViewState, collection: Collection) -> impl IntoView {
    use leptos::either::EitherOf5;

    if state.is_loading {
        EitherOf5::A(view! { <Spinner label=loading_label(collection) /> })
    } else {
        match collection {
            Collection::Projects => EitherOf5::B(view! { <ProjectGrid projects=state.projects /> }),
            Collection::Blogs => EitherOf5::C(view! { <BlogList blogs=state.blogs /> }),
            Collection::Skills => EitherOf5::D(view! { <SkillGrid skills=state.skills /> }),
            Collection::Experience => {
                EitherOf5::E(view! { <ExperienceTimeline experience=state.experience /> })
            }
        }
    }
}

fn loading_label(collection: Collection) -> &'static str {
    match collection {
        Collection::Projects => "Loading projects\u{2026}",
        Collection::Blogs => "Loading articles\u{2026}",
        Collection::Skills => "Loading skills\u{2026}",
        Collection::Experience => "Loading experience\u{2026}",
    }
}

/// The visitor never sees an error: failing to reach the loader at all is
/// treated like every collection failing.
pub fn settle(result: Result<ViewState, ServerFnError>) -> ViewState {
    result.unwrap_or_else(|err| {
        log::warn!("Could not load the page content: {}", err);
        ViewState::unavailable(&err.to_string())
    })
}

#[server(GetViewState, "/api", "GetJson", "content")]
pub async fn get_view_state() -> Result<ViewState, ServerFnError> {
    let source = use_context::<content::Source>().ok_or_else(|| -> ServerFnError {
        ServerFnError::ServerError(String::from("no content source configured"))
    })?;
    Ok(content::load(&source).await)
}
