use crate::components::context::PlayerState;
use crate::components::gen_funcs::format_duration;
use web_sys::{HtmlAudioElement, HtmlInputElement};
use yew::events::*;
use yew::prelude::*;
use yewdux::prelude::*;

#[function_component(Player)]
pub fn player() -> Html {
    let audio_ref = use_node_ref();
    let (state, dispatch) = use_store::<PlayerState>();

    // Elapsed seconds in the current episode. Transient display state only;
    // the audio element remains the authority on playback position.
    let progress = use_state(|| 0u32);

    // One-way binding: the is_playing flag commands the element. The reverse
    // direction flows through the onplay/onpause callbacks below, so the two
    // paths cannot feed back into each other.
    {
        let audio_ref = audio_ref.clone();
        use_effect_with(state.is_playing, move |is_playing| {
            if let Some(audio_element) = audio_ref.cast::<HtmlAudioElement>() {
                if *is_playing {
                    let _ = audio_element.play();
                } else {
                    let _ = audio_element.pause();
                }
            }
            || ()
        });
    }

    // While looping the element replays the episode itself and never fires
    // `ended`, so end-of-track advancement stays untouched.
    {
        let audio_ref = audio_ref.clone();
        use_effect_with(state.is_looping, move |is_looping| {
            if let Some(audio_element) = audio_ref.cast::<HtmlAudioElement>() {
                audio_element.set_loop(*is_looping);
            }
            || ()
        });
    }

    // A new episode's metadata loaded: rewind and restart the progress count.
    let on_loaded_metadata = {
        let audio_ref = audio_ref.clone();
        let progress = progress.clone();
        Callback::from(move |_: Event| {
            if let Some(audio_element) = audio_ref.cast::<HtmlAudioElement>() {
                audio_element.set_current_time(0.0);
            }
            progress.set(0);
        })
    };

    let on_time_update = {
        let progress = progress.clone();
        Callback::from(move |e: Event| {
            if let Some(audio_element) = e.target_dyn_into::<HtmlAudioElement>() {
                progress.set(audio_element.current_time().floor() as u32);
            }
        })
    };

    // Seek optimistically: the displayed progress moves with the slider
    // without waiting for the next timeupdate.
    let on_seek = {
        let audio_ref = audio_ref.clone();
        let progress = progress.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                if let Ok(value) = input.value().parse::<f64>() {
                    if let Some(audio_element) = audio_ref.cast::<HtmlAudioElement>() {
                        audio_element.set_current_time(value);
                    }
                    progress.set(value.floor() as u32);
                }
            }
        })
    };

    let on_ended = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: Event| {
            dispatch.reduce_mut(PlayerState::handle_ended);
        })
    };

    let on_play = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: Event| {
            dispatch.reduce_mut(|state| state.set_playing_state(true));
        })
    };

    let on_pause = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: Event| {
            dispatch.reduce_mut(|state| state.set_playing_state(false));
        })
    };

    let toggle_play = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(PlayerState::toggle_play);
        })
    };

    let toggle_loop = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(PlayerState::toggle_loop);
        })
    };

    let toggle_shuffle = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(PlayerState::toggle_shuffle);
        })
    };

    let play_previous = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(PlayerState::play_previous);
        })
    };

    let play_next = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(PlayerState::play_next);
        })
    };

    let episode = state.current_episode();

    html! {
        <div class="player-container">
            <header class="player-header">
                <i class="ph ph-headphones text-2xl" />
                <strong>{"Now playing"}</strong>
            </header>

            {
                if let Some(episode) = episode {
                    html! {
                        <div class="current-episode">
                            <img src={episode.thumbnail.clone()} alt={episode.title.clone()} />
                            <strong>{ &episode.title }</strong>
                            <span>{ &episode.members }</span>
                        </div>
                    }
                } else {
                    html! {
                        <div class="empty-player">
                            <strong>{"Select an episode to listen to"}</strong>
                        </div>
                    }
                }
            }

            <footer class={ if episode.is_none() { "player-footer empty" } else { "player-footer" } }>
                <div class="player-progress">
                    <span>{ format_duration(*progress) }</span>
                    {
                        if let Some(episode) = episode {
                            html! {
                                <input type="range"
                                    class="player-slider"
                                    min="0"
                                    max={episode.duration.to_string()}
                                    value={progress.to_string()}
                                    oninput={on_seek} />
                            }
                        } else {
                            html! {
                                <div class="player-slider">
                                    <div class="empty-slider" />
                                </div>
                            }
                        }
                    }
                    <span>{ format_duration(episode.map_or(0, |episode| episode.duration)) }</span>
                </div>

                {
                    if let Some(episode) = episode {
                        html! {
                            <audio
                                ref={audio_ref.clone()}
                                src={episode.url.clone()}
                                autoplay=true
                                onended={on_ended}
                                onplay={on_play}
                                onpause={on_pause}
                                onloadedmetadata={on_loaded_metadata}
                                ontimeupdate={on_time_update}
                            />
                        }
                    } else {
                        html! {}
                    }
                }

                <div class="player-buttons">
                    <button type="button"
                        class={ if state.is_shuffling { "player-button is-active" } else { "player-button" } }
                        disabled={ !state.can_shuffle() }
                        onclick={toggle_shuffle}
                    >
                        <i class="ph ph-shuffle" />
                    </button>
                    <button type="button"
                        class="player-button"
                        disabled={ episode.is_none() || !state.has_previous() }
                        onclick={play_previous}
                    >
                        <i class="ph ph-skip-back" />
                    </button>
                    <button type="button"
                        class="player-button play-button"
                        disabled={ episode.is_none() }
                        onclick={toggle_play}
                    >
                        {
                            if state.is_playing {
                                html! { <i class="ph ph-pause" /> }
                            } else {
                                html! { <i class="ph ph-play" /> }
                            }
                        }
                    </button>
                    <button type="button"
                        class="player-button"
                        disabled={ episode.is_none() || !state.has_next() }
                        onclick={play_next}
                    >
                        <i class="ph ph-skip-forward" />
                    </button>
                    <button type="button"
                        class={ if state.is_looping { "player-button is-active" } else { "player-button" } }
                        disabled={ episode.is_none() }
                        onclick={toggle_loop}
                    >
                        <i class="ph ph-repeat" />
                    </button>
                </div>
            </footer>
        </div>
    }
}
