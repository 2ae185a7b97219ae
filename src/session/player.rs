//! Player links for `play` results.

use crate::config::PLAYER_BASE_URL;
use crate::interpreter::{MediaKind, PlaybackRequest};

/// Terminal green, passed to the player as its accent colour
const ACCENT_COLOR: &str = "00ff41";

/// Embeddable player URL for a playback request
pub fn embed_url(request: &PlaybackRequest) -> String {
    match request.kind {
        MediaKind::Movie => format!(
            "{PLAYER_BASE_URL}/movie/{}?color={ACCENT_COLOR}",
            request.id
        ),
        MediaKind::Tv => format!(
            "{PLAYER_BASE_URL}/tv/{}/{}/{}?color={ACCENT_COLOR}&nextEpisode=true&autoplayNextEpisode=true&episodeSelector=true",
            request.id, request.season, request.episode
        ),
    }
}

/// Title bar of the player overlay, e.g. `NOW PLAYING: TV 1399 S2E5`
pub fn overlay_title(request: &PlaybackRequest) -> String {
    let kind = request.kind.as_str().to_uppercase();
    match request.kind {
        MediaKind::Movie => format!("NOW PLAYING: {kind} {}", request.id),
        MediaKind::Tv => format!(
            "NOW PLAYING: {kind} {} S{}E{}",
            request.id, request.season, request.episode
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(kind: MediaKind, id: &str, season: u32, episode: u32) -> PlaybackRequest {
        PlaybackRequest {
            id: id.to_string(),
            kind,
            season,
            episode,
        }
    }

    #[test]
    fn movie_url_should_ignore_season_and_episode() {
        let url = embed_url(&request(MediaKind::Movie, "550", 3, 4));
        assert_eq!(url, "https://player.videasy.net/movie/550?color=00ff41");
    }

    #[test]
    fn tv_url_should_include_season_episode_and_autoplay_flags() {
        let url = embed_url(&request(MediaKind::Tv, "1399", 2, 5));
        assert_eq!(
            url,
            "https://player.videasy.net/tv/1399/2/5?color=00ff41&nextEpisode=true&autoplayNextEpisode=true&episodeSelector=true"
        );
    }

    #[test]
    fn overlay_title_should_show_episode_only_for_tv() {
        assert_eq!(
            overlay_title(&request(MediaKind::Movie, "550", 1, 1)),
            "NOW PLAYING: MOVIE 550"
        );
        assert_eq!(
            overlay_title(&request(MediaKind::Tv, "1399", 2, 5)),
            "NOW PLAYING: TV 1399 S2E5"
        );
    }
}
