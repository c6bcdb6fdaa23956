use crate::components::context::{Episode, PlayerState};
use crate::components::gen_funcs::{format_duration, format_pub_date};
use crate::requests::episode_req::{call_get_episodes, EpisodeData};
use wasm_bindgen_futures::spawn_local;
use web_sys::console;
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component(EpisodeList)]
pub fn episode_list() -> Html {
    let (_state, dispatch) = use_store::<PlayerState>();
    let episodes = use_state(|| None::<Vec<EpisodeData>>);
    let error_message = use_state(|| None::<String>);

    // Fetch the feed once on mount.
    {
        let episodes = episodes.clone();
        let error_message = error_message.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match call_get_episodes().await {
                    Ok(fetched) => episodes.set(Some(fetched)),
                    Err(e) => {
                        console::log_1(&format!("Error fetching episodes: {:?}", e).into());
                        error_message.set(Some("Unable to load episodes".to_string()));
                    }
                }
            });
            || ()
        });
    }

    html! {
        <section class="episode-list">
            <h2>{"Latest episodes"}</h2>
            {
                if let Some(error) = (*error_message).as_ref() {
                    html! { <p class="episode-list-error">{ error }</p> }
                } else if let Some(episode_data) = (*episodes).as_ref() {
                    let queue: Vec<Episode> = episode_data.iter().map(Episode::from).collect();
                    html! {
                        <ul>
                            {
                                episode_data.iter().enumerate().map(|(index, data)| {
                                    let on_play = {
                                        let dispatch = dispatch.clone();
                                        let queue = queue.clone();
                                        Callback::from(move |_: MouseEvent| {
                                            let queue = queue.clone();
                                            dispatch.reduce_mut(move |state| {
                                                state.play_list(queue, index);
                                            });
                                        })
                                    };
                                    html! {
                                        <li key={data.id.clone()} class="episode-card">
                                            <img src={data.thumbnail.clone()} alt={data.title.clone()} />
                                            <div class="episode-details">
                                                <strong>{ &data.title }</strong>
                                                <p>{ &data.members }</p>
                                                <span>{ format_pub_date(&data.published_at) }</span>
                                                <span>{ format_duration(data.file.duration) }</span>
                                            </div>
                                            <button type="button" class="episode-play" onclick={on_play}>
                                                <i class="ph ph-play-circle" />
                                            </button>
                                        </li>
                                    }
                                }).collect::<Html>()
                            }
                        </ul>
                    }
                } else {
                    html! { <p class="episode-list-loading">{"Loading episodes..."}</p> }
                }
            }
        </section>
    }
}
