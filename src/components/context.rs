use crate::requests::episode_req::EpisodeData;
use rand::Rng;
use yewdux::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Episode {
    pub title: String,
    pub thumbnail: String,
    pub members: String,
    pub duration: u32,
    pub url: String,
}

impl From<&EpisodeData> for Episode {
    fn from(data: &EpisodeData) -> Self {
        Episode {
            title: data.title.clone(),
            thumbnail: data.thumbnail.clone(),
            members: data.members.clone(),
            duration: data.file.duration,
            url: data.file.url.clone(),
        }
    }
}

/// Shared playback state. Components read it through `use_store` and mutate
/// it only through the methods below, never by writing fields directly.
#[derive(Default, Clone, PartialEq, Store)]
pub struct PlayerState {
    pub episode_list: Vec<Episode>,
    pub current_episode_index: Option<usize>,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
}

impl PlayerState {
    pub fn current_episode(&self) -> Option<&Episode> {
        self.current_episode_index
            .and_then(|index| self.episode_list.get(index))
    }

    /// While shuffling any episode can follow, so the queue end is not a
    /// boundary.
    pub fn has_next(&self) -> bool {
        match self.current_episode_index {
            Some(index) => self.is_shuffling || index + 1 < self.episode_list.len(),
            None => false,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_episode_index.map_or(false, |index| index > 0)
    }

    /// Shuffling a queue of one or two entries is meaningless.
    pub fn can_shuffle(&self) -> bool {
        self.current_episode().is_some() && self.episode_list.len() >= 3
    }

    pub fn play_list(&mut self, list: Vec<Episode>, index: usize) {
        self.episode_list = list;
        self.current_episode_index = Some(index);
        self.is_playing = true;
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    pub fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    pub fn play_next(&mut self) {
        let Some(index) = self.current_episode_index else {
            return;
        };
        if self.episode_list.is_empty() {
            return;
        }
        if self.is_shuffling {
            let next = rand::rng().random_range(0..self.episode_list.len());
            self.current_episode_index = Some(next);
        } else if index + 1 < self.episode_list.len() {
            self.current_episode_index = Some(index + 1);
        }
    }

    pub fn play_previous(&mut self) {
        if self.has_previous() {
            self.current_episode_index = self.current_episode_index.map(|index| index - 1);
        }
    }

    /// End-of-track: advance when a next episode exists, otherwise clear
    /// the player entirely. Exactly one of the two happens.
    pub fn handle_ended(&mut self) {
        if self.has_next() {
            self.play_next();
        } else {
            self.clear_player_state();
        }
    }

    pub fn clear_player_state(&mut self) {
        self.episode_list.clear();
        self.current_episode_index = None;
        self.is_playing = false;
    }
}
