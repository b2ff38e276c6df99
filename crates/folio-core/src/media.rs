// Rust guideline compliant 2026-10-12

//! Media helpers: kind detection and the ordered image list of a project.

use crate::Project;

const VIDEO_EXTENSIONS: [&str; 4] = ["mp4", "webm", "ogg", "mov"];

/// Whether a media URL renders as an image or a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// Still image.
    Image,
    /// Autoplaying muted video.
    Video,
}

impl MediaKind {
    /// Classifies a URL by its file extension.
    #[must_use]
    pub fn of(url: &str) -> Self {
        if is_video(url) {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

/// Returns true if the URL ends in a video extension (case-insensitive).
#[must_use]
pub fn is_video(url: &str) -> bool {
    let Some((_, ext)) = url.rsplit_once('.') else {
        return false;
    };
    VIDEO_EXTENSIONS
        .iter()
        .any(|candidate| ext.eq_ignore_ascii_case(candidate))
}

/// Returns the ordered media list shown in a project's carousel.
///
/// The thumbnail comes first, or the legacy `imageUrl` entries when there is
/// no thumbnail, followed by the detail images. Empty entries are dropped.
#[must_use]
pub fn gallery_images(project: &Project) -> Vec<String> {
    let mut images: Vec<String> = Vec::with_capacity(1 + project.sub_images.len());

    match (&project.thumbnail, &project.image_url) {
        (Some(thumbnail), _) if !thumbnail.trim().is_empty() => images.push(thumbnail.clone()),
        (_, Some(source)) => images.extend(source.urls().into_iter().map(str::to_string)),
        _ => {}
    }
    images.extend(project.sub_images.iter().cloned());

    images.retain(|url| !url.trim().is_empty());
    images
}

/// Returns the number of carousel entries for a project.
#[must_use]
pub fn image_count(project: &Project) -> usize {
    gallery_images(project).len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImageSource, Mode};

    fn bare() -> Project {
        Project::new("prj-000000".into(), Mode::Std, "Brand".into(), "T".into())
    }

    #[test]
    fn test_video_detection() {
        assert!(is_video("https://cdn/x/clip.MP4"));
        assert!(is_video("clip.mov"));
        assert!(!is_video("photo.jpg"));
        assert!(!is_video("no-extension"));
        assert_eq!(MediaKind::of("a.webm"), MediaKind::Video);
    }

    #[test]
    fn test_thumbnail_then_sub_images() {
        let mut p = bare();
        p.thumbnail = Some("t.jpg".into());
        p.image_url = Some(ImageSource::One("legacy.jpg".into()));
        p.sub_images = vec!["a.jpg".into(), "".into(), "b.mp4".into()];
        assert_eq!(gallery_images(&p), vec!["t.jpg", "a.jpg", "b.mp4"]);
    }

    #[test]
    fn test_legacy_image_url_when_no_thumbnail() {
        let mut p = bare();
        p.image_url = Some(ImageSource::Many(vec!["1.jpg".into(), "2.jpg".into()]));
        p.sub_images = vec!["3.jpg".into()];
        assert_eq!(image_count(&p), 3);
    }

    #[test]
    fn test_empty_project_has_no_images() {
        assert!(gallery_images(&bare()).is_empty());
    }
}
