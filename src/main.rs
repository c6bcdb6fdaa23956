// Custom Mods
mod components;
mod requests;

#[cfg(test)]
mod tests;

use components::episode_list::EpisodeList;
use components::player::Player;

// Yew Imports
use yew::prelude::*;

#[function_component(Header)]
fn header() -> Html {
    let today = chrono::Local::now().format("%a, %b %e").to_string();

    html! {
        <header class="app-header">
            <i class="ph ph-broadcast text-2xl" />
            <span class="app-title">{"Castwave"}</span>
            <p>{"The best for you to hear, always"}</p>
            <span class="app-date">{ today }</span>
        </header>
    }
}

#[function_component(Main)]
fn main_component() -> Html {
    html! {
        <div class="app-wrapper">
            <main class="app-content">
                <Header />
                <EpisodeList />
            </main>
            <Player />
        </div>
    }
}

fn main() {
    yew::Renderer::<Main>::new().render();
}
