//! External URL launching.

const YOUTUBE_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Opens URLs outside the app (browser, video player).
pub trait UrlLauncher: Send + Sync {
    /// Returns `false` when the URL could not be handed off.
    fn open_url(&self, url: &str) -> bool;

    fn open_youtube_video(&self, video_key: &str) -> bool {
        self.open_url(&youtube_watch_url(video_key))
    }
}

pub fn youtube_watch_url(video_key: &str) -> String {
    format!("{}{}", YOUTUBE_WATCH_URL, video_key)
}
