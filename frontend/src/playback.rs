pub mod components;
pub mod state;

const EMBED_BASE_URL: &str = "https://www.youtube.com/embed";

/// Source URL for the embedded player iframe.
pub fn embed_url(video_id: &str, autoplay: bool) -> String {
    format!(
        "{EMBED_BASE_URL}/{}?autoplay={}",
        urlencoding::encode(video_id),
        u8::from(autoplay)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_carries_id_and_autoplay_flag() {
        assert_eq!(embed_url("dQw4w9WgXcQ", true), "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1");
        assert_eq!(embed_url("abc", false), "https://www.youtube.com/embed/abc?autoplay=0");
    }
}
