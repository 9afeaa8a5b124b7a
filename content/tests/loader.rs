use content::model::{Collection, Project};
use content::source::{ContentSource, Error, FixtureSource, Result};
use content::{load, loader::fetch_collection};
use std::collections::HashMap;
use std::time::Duration;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Answers each collection from a table, `None` meaning a network error.
struct Scripted(HashMap<Collection, Option<&'static str>>);

impl Scripted {
    fn new(answers: [(Collection, Option<&'static str>); 4]) -> Self {
        Self(answers.into_iter().collect())
    }
}

impl ContentSource for Scripted {
    async fn fetch(&self, collection: Collection) -> Result<String> {
        match self.0.get(&collection).copied().flatten() {
            Some(body) => Ok(String::from(body)),
            None => Err(Error::Transport {
                collection,
                error: String::from("connection refused"),
            }),
        }
    }
}

const ONE_PROJECT: &str = r##"[{"id":1,"title":"X","description":"d","technologies":["A"],"category":"Backend","impact":"none","year":"2023","url":"#"}]"##;
const TWO_BLOGS: &str = r#"[
    {"id":2,"title":"Second","url":"/b","date":"2024-02-01","description":"b"},
    {"id":1,"title":"First","url":"/a","date":"2023-01-01","description":"a"}
]"#;
const SKILLS: &str = r#"[{"name":"Rust","level":45,"category":"Lang"},{"name":"C","level":140,"category":"Lang"}]"#;
const EXPERIENCE: &str = r#"[{"company":"Acme","role":"Engineer","period":"2020 - now","location":"Remote","highlights":["one","two"]}]"#;

#[tokio::test]
async fn single_project_and_empty_collections() {
    setup();

    let source = Scripted::new([
        (Collection::Projects, Some(ONE_PROJECT)),
        (Collection::Blogs, Some("[]")),
        (Collection::Skills, Some("[]")),
        (Collection::Experience, Some("[]")),
    ]);
    let state = load(&source).await;

    assert!(!state.is_loading);
    assert!(state.failures.is_empty());
    assert_eq!(
        state.projects,
        vec![Project {
            id: 1,
            title: String::from("X"),
            description: String::from("d"),
            technologies: vec![String::from("A")],
            category: String::from("Backend"),
            impact: String::from("none"),
            year: String::from("2023"),
            url: String::from("#"),
        }]
    );
    assert!(state.blogs.is_empty());
    assert!(state.skills.is_empty());
    assert!(state.experience.is_empty());
}

#[tokio::test]
async fn records_keep_received_order() {
    setup();

    let source = Scripted::new([
        (Collection::Projects, Some("[]")),
        (Collection::Blogs, Some(TWO_BLOGS)),
        (Collection::Skills, Some(SKILLS)),
        (Collection::Experience, Some(EXPERIENCE)),
    ]);
    let state = load(&source).await;

    let titles: Vec<&str> = state.blogs.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Second", "First"]);
    // stored verbatim, clamping happens when rendering
    assert_eq!(state.skills[1].level, 140);
    assert_eq!(state.experience[0].highlights, ["one", "two"]);
}

#[tokio::test]
async fn one_failure_leaves_the_others_loaded() {
    setup();

    for failing in Collection::ALL {
        let answers = [
            (Collection::Projects, Some(ONE_PROJECT)),
            (Collection::Blogs, Some(TWO_BLOGS)),
            (Collection::Skills, Some(SKILLS)),
            (Collection::Experience, Some(EXPERIENCE)),
        ]
        .map(|(c, body)| (c, if c == failing { None } else { body }));
        let state = load(&Scripted::new(answers)).await;

        assert!(!state.is_loading);
        assert_eq!(state.failures.len(), 1);
        assert_eq!(state.failures[0].collection, failing);
        let expected = |c: Collection| match c {
            _ if c == failing => 0,
            Collection::Projects => 1,
            Collection::Blogs => 2,
            Collection::Skills => 2,
            Collection::Experience => 1,
        };
        for collection in Collection::ALL {
            assert_eq!(state.len(collection), expected(collection), "{failing:?} failing");
        }
    }
}

#[tokio::test]
async fn everything_failing_still_settles() {
    setup();

    let source = Scripted::new([
        (Collection::Projects, None),
        (Collection::Blogs, None),
        (Collection::Skills, None),
        (Collection::Experience, None),
    ]);
    let state = load(&source).await;

    assert!(!state.is_loading);
    for collection in Collection::ALL {
        assert_eq!(state.len(collection), 0);
        assert!(state.has_failed(collection));
    }
}

#[tokio::test]
async fn malformed_records_fail_the_collection() {
    setup();

    let source = Scripted::new([
        (Collection::Projects, Some(r#"{"projects":[]}"#)),
        (Collection::Blogs, Some(TWO_BLOGS)),
        (Collection::Skills, Some(r#"[{"name":"Rust","level":"high","category":"Lang"}]"#)),
        (Collection::Experience, Some(EXPERIENCE)),
    ]);
    let state = load(&source).await;

    assert!(state.has_failed(Collection::Projects));
    assert!(state.has_failed(Collection::Skills));
    assert!(!state.has_failed(Collection::Blogs));
    assert_eq!(state.blogs.len(), 2);
    assert!(state.failures[0].reason.starts_with("Could not decode projects"));

    let err = fetch_collection::<Project, _>(&source, Collection::Projects)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Decode { collection: Collection::Projects, .. }));
}

#[tokio::test]
async fn fixtures_decode_and_wait_for_the_delay() {
    setup();

    let source = FixtureSource::new(Duration::from_millis(50));
    let started = std::time::Instant::now();
    let state = load(&source).await;

    assert!(started.elapsed() >= Duration::from_millis(50));
    assert!(state.failures.is_empty(), "{:?}", state.failures);
    for collection in Collection::ALL {
        assert!(state.len(collection) > 0, "no {collection} fixtures");
    }
}
