use content::{display::display_date, Blog};
use leptos::prelude::*;

#[component]
pub fn BlogList(blogs: Vec<Blog>) -> impl IntoView {
    view! {
        <div class="blog-list">
            {blogs
                .into_iter()
                .map(|blog| {
                    let date = display_date(&blog.date);
                    view! {
                        <article class="blog-card">
                            <div>
                                <h3>{blog.title}</h3>
                                <p>{blog.description}</p>
                                <time datetime=blog.date>{date}</time>
                            </div>
                            <a class="read-more" href=blog.url>"Read Article " {"\u{2197}"}</a>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
}
