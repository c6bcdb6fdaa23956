use gloo_net::http::Request;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EpisodeFile {
    pub url: String,
    pub duration: u32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct EpisodeData {
    pub id: String,
    pub title: String,
    pub members: String,
    pub published_at: String,
    pub thumbnail: String,
    pub description: String,
    pub file: EpisodeFile,
}

pub async fn call_get_episodes() -> Result<Vec<EpisodeData>, anyhow::Error> {
    let url = "/api/episodes?_limit=12&_sort=published_at&_order=desc";

    let response = Request::get(url).send().await?;

    if response.ok() {
        let episodes: Vec<EpisodeData> = response.json().await?;
        Ok(episodes)
    } else {
        Err(anyhow::Error::msg(format!(
            "Failed to get episodes: {}",
            response.status()
        )))
    }
}
