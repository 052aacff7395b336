use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

const VIDEO_ID_LEN: usize = 11;

lazy_static! {
    // The greedy prefix makes the last marker in the URL win, so
    // `...?feature=share&v=ID` resolves to the `&v=` id.
    static ref VIDEO_URL: Regex =
        Regex::new(r"^.*(youtu.be/|v/|u/\w/|embed/|shorts/|watch\?v=|&v=)([^#&?]*).*")
            .expect("video url pattern is valid");
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a YouTube URL")]
    Empty,
    #[error("Invalid YouTube URL format")]
    InvalidUrl,
}

pub fn extract_video_id(input: &str) -> Result<String, InputError> {
    let url = input.trim();
    if url.is_empty() {
        return Err(InputError::Empty);
    }

    VIDEO_URL
        .captures(url)
        .and_then(|caps| caps.get(2))
        .map(|id| id.as_str())
        .filter(|id| id.chars().count() == VIDEO_ID_LEN)
        .map(str::to_string)
        .ok_or(InputError::InvalidUrl)
}

pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

pub fn short_url(video_id: &str) -> String {
    format!("https://youtu.be/{video_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "dQw4w9WgXcQ";

    #[test]
    fn common_url_shapes() {
        let urls = [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ#comments",
            "https://youtu.be/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?si=abcdef",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/shorts/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ?version=3",
            "https://www.youtube.com/user/someone#p/u/1/dQw4w9WgXcQ",
            "https://www.youtube.com/watch?feature=player_embedded&v=dQw4w9WgXcQ",
            "  https://youtu.be/dQw4w9WgXcQ  ",
        ];
        for url in urls {
            assert_eq!(extract_video_id(url).as_deref(), Ok(ID), "{url}");
        }
    }

    #[test]
    fn wrong_length_ids_are_rejected() {
        assert_eq!(
            extract_video_id("https://youtu.be/short"),
            Err(InputError::InvalidUrl)
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQXX"),
            Err(InputError::InvalidUrl)
        );
    }

    #[test]
    fn non_youtube_input_is_rejected() {
        assert_eq!(
            extract_video_id("https://example.com/video/12345678901"),
            Err(InputError::InvalidUrl)
        );
        assert_eq!(extract_video_id("dQw4w9WgXcQ"), Err(InputError::InvalidUrl));
        assert_eq!(extract_video_id("   "), Err(InputError::Empty));
    }

    #[test]
    fn urls_built_from_id() {
        assert_eq!(watch_url(ID), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(short_url(ID), "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(extract_video_id(&short_url(ID)).as_deref(), Ok(ID));
    }
}
