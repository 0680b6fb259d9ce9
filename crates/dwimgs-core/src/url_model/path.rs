//! Filename extraction from the raw URL string.

/// Image extensions recognized in a URL (case-sensitive substring match).
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

/// Extracts an image filename hint from `url`.
///
/// Finds the recognized extension whose occurrence starts last in the string,
/// cuts the URL right after it and returns the segment after the final `/`.
/// Returns `None` when no recognized extension occurs anywhere in the URL.
///
/// This is a heuristic on the string; whether the body really is an image is
/// decided later from the response content type.
pub fn filename_from_url(url: &str) -> Option<String> {
    let end = IMAGE_EXTENSIONS
        .iter()
        .filter_map(|ext| url.rfind(ext).map(|start| (start, start + ext.len())))
        .max_by_key(|(start, _)| *start)
        .map(|(_, end)| end)?;

    let truncated = &url[..end];
    let segment = truncated.rsplit('/').next().unwrap_or(truncated);
    if segment.is_empty() {
        return None;
    }
    Some(segment.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_image_url() {
        assert_eq!(
            filename_from_url("https://example.com/a/b/cat.png").as_deref(),
            Some("cat.png")
        );
        assert_eq!(
            filename_from_url("https://example.com/photo.jpeg").as_deref(),
            Some("photo.jpeg")
        );
    }

    #[test]
    fn query_after_extension_is_cut() {
        assert_eq!(
            filename_from_url("https://cdn.example.com/img/dog.webp?w=640&h=480").as_deref(),
            Some("dog.webp")
        );
    }

    #[test]
    fn last_occurrence_wins() {
        assert_eq!(
            filename_from_url("http://x.com/a.png/b.jpg").as_deref(),
            Some("b.jpg")
        );
        assert_eq!(
            filename_from_url("http://x.com/a.jpg/b.png").as_deref(),
            Some("b.png")
        );
    }

    #[test]
    fn extension_inside_query_string() {
        assert_eq!(
            filename_from_url("https://example.com/render?format=png").as_deref(),
            Some("render?format=png")
        );
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(filename_from_url("https://example.com/SHOUT.JPG"), None);
    }

    #[test]
    fn no_extension() {
        assert_eq!(filename_from_url("https://example.com/avatar"), None);
        assert_eq!(filename_from_url(""), None);
    }

    #[test]
    fn bare_extension_without_slash() {
        assert_eq!(filename_from_url("pic.jpg").as_deref(), Some("pic.jpg"));
    }
}
