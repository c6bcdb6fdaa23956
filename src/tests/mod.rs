// src/tests/mod.rs
use crate::components::context::{Episode, PlayerState};
use crate::components::gen_funcs::{format_duration, format_pub_date};

fn sample_episodes(count: usize) -> Vec<Episode> {
    (0..count)
        .map(|i| Episode {
            title: format!("Episode {}", i + 1),
            thumbnail: format!("/images/ep{}.jpg", i + 1),
            members: "Alex, Sam".to_string(),
            duration: 1800,
            url: format!("/audio/ep{}.mp3", i + 1),
        })
        .collect()
}

fn playing_state(count: usize, index: usize) -> PlayerState {
    let mut state = PlayerState::default();
    state.play_list(sample_episodes(count), index);
    state
}

#[test]
fn test_default_state_has_no_episode() {
    let state = PlayerState::default();
    assert!(state.current_episode().is_none());
    assert!(!state.is_playing);
    assert!(!state.is_looping);
    assert!(!state.is_shuffling);
}

#[test]
fn test_empty_state_disables_all_controls() {
    let state = PlayerState::default();
    assert!(!state.can_shuffle());
    assert!(!state.has_previous());
    assert!(!state.has_next());
    assert!(state.current_episode().is_none());
}

#[test]
fn test_shuffle_requires_three_episodes() {
    let mut state = playing_state(2, 0);
    assert!(!state.can_shuffle());
    state.toggle_shuffle();
    assert!(!state.can_shuffle());

    let state = playing_state(3, 0);
    assert!(state.can_shuffle());
}

#[test]
fn test_play_list_selects_and_starts() {
    let state = playing_state(3, 1);
    assert_eq!(state.current_episode().unwrap().title, "Episode 2");
    assert!(state.is_playing);
}

#[test]
fn test_toggle_play_flips_flag() {
    let mut state = playing_state(1, 0);
    assert!(state.is_playing);
    state.toggle_play();
    assert!(!state.is_playing);
    state.toggle_play();
    assert!(state.is_playing);
}

#[test]
fn test_set_playing_state_round_trips_native_events() {
    let mut state = playing_state(1, 0);
    state.set_playing_state(false);
    assert!(!state.is_playing);
    state.set_playing_state(true);
    assert!(state.is_playing);
}

#[test]
fn test_play_next_advances_within_bounds() {
    let mut state = playing_state(3, 0);
    assert!(state.has_next());
    state.play_next();
    assert_eq!(state.current_episode_index, Some(1));

    // At the end of the queue there is no next and the index stays put.
    let mut state = playing_state(3, 2);
    assert!(!state.has_next());
    state.play_next();
    assert_eq!(state.current_episode_index, Some(2));
}

#[test]
fn test_play_next_while_shuffling_stays_in_bounds() {
    let mut state = playing_state(5, 4);
    state.toggle_shuffle();
    assert!(state.has_next());
    for _ in 0..50 {
        state.play_next();
        assert!(state.current_episode_index.unwrap() < state.episode_list.len());
    }
}

#[test]
fn test_play_previous_respects_bounds() {
    let mut state = playing_state(3, 0);
    assert!(!state.has_previous());
    state.play_previous();
    assert_eq!(state.current_episode_index, Some(0));

    let mut state = playing_state(3, 2);
    assert!(state.has_previous());
    state.play_previous();
    assert_eq!(state.current_episode_index, Some(1));
}

#[test]
fn test_ended_with_next_advances_queue() {
    let mut state = playing_state(3, 0);
    state.handle_ended();
    assert_eq!(state.current_episode_index, Some(1));
    assert_eq!(state.episode_list.len(), 3);
    assert!(state.is_playing);
}

#[test]
fn test_ended_at_queue_end_clears_player() {
    let mut state = playing_state(3, 2);
    state.handle_ended();
    assert!(state.current_episode().is_none());
    assert!(state.episode_list.is_empty());
    assert!(!state.is_playing);
}

#[test]
fn test_clear_player_state_deselects_and_pauses() {
    let mut state = playing_state(3, 2);
    state.clear_player_state();
    assert!(state.current_episode().is_none());
    assert!(state.episode_list.is_empty());
    assert!(!state.is_playing);
    assert!(!state.has_next());
    assert!(!state.has_previous());
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "00:00");
    assert_eq!(format_duration(65), "01:05");
    assert_eq!(format_duration(125), "02:05");
    assert_eq!(format_duration(3665), "01:01:05");
}

#[test]
fn test_format_pub_date() {
    assert_eq!(format_pub_date("2021-04-22T10:00:00"), "Apr 22, 2021");
    assert_eq!(format_pub_date("not a date"), "not a date");
}
