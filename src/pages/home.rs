//! Home View

use leptos::prelude::*;

use crate::components::NavLink;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-tiles">
            <NavLink href="/projects" class="tile">
                <h2>"Projects"</h2>
                <p>"Browse and organise your projects"</p>
            </NavLink>
            <NavLink href="/tasks" class="tile">
                <h2>"Tasks"</h2>
                <p>"Everything on your plate"</p>
            </NavLink>
        </div>
    }
}
