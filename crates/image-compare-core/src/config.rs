use crate::error::ConfigError;
use crate::position::{MAX_POSITION, MIN_POSITION};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default starting position, in percent.
pub const DEFAULT_INITIAL_POSITION: f32 = 50.0;
/// Default widget height in pixels.
pub const DEFAULT_HEIGHT: f32 = 384.0;

pub const DEFAULT_BEFORE_ALT: &str = "Before image";
pub const DEFAULT_AFTER_ALT: &str = "After image";

fn default_before_alt() -> String {
    DEFAULT_BEFORE_ALT.to_string()
}

fn default_after_alt() -> String {
    DEFAULT_AFTER_ALT.to_string()
}

fn default_initial_position() -> f32 {
    DEFAULT_INITIAL_POSITION
}

fn default_height() -> f32 {
    DEFAULT_HEIGHT
}

/// Everything needed to mount one comparison widget.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    /// Source of the reference image, shown under the clip.
    pub before: String,
    /// Source of the comparison image, shown above the clip.
    pub after: String,
    #[serde(default = "default_before_alt")]
    pub before_alt: String,
    #[serde(default = "default_after_alt")]
    pub after_alt: String,
    /// Expected in `[0, 100]`; see [`ComparisonConfig::initial_position_in_range`].
    #[serde(default = "default_initial_position")]
    pub initial_position: f32,
    #[serde(default = "default_height")]
    pub height: f32,
}

impl ComparisonConfig {
    pub fn new(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self {
            before: before.into(),
            after: after.into(),
            before_alt: default_before_alt(),
            after_alt: default_after_alt(),
            initial_position: DEFAULT_INITIAL_POSITION,
            height: DEFAULT_HEIGHT,
        }
    }

    pub fn with_alts(mut self, before_alt: impl Into<String>, after_alt: impl Into<String>) -> Self {
        self.before_alt = before_alt.into();
        self.after_alt = after_alt.into();
        self
    }

    pub fn with_initial_position(mut self, initial_position: f32) -> Self {
        self.initial_position = initial_position;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// The grayscale/color pair shown when nothing is configured.
    pub fn demo() -> Self {
        Self::new(
            "https://picsum.photos/id/800/800?grayscale",
            "https://picsum.photos/id/800/800",
        )
        .with_alts("Original design", "Redesigned version")
    }

    /// Reject configurations that cannot be rendered at all.
    ///
    /// An out-of-range but finite initial position is not an error; it is
    /// shown as given until the first drag.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.before.trim().is_empty() {
            return Err(ConfigError::MissingSource("before"));
        }
        if self.after.trim().is_empty() {
            return Err(ConfigError::MissingSource("after"));
        }
        if !self.initial_position.is_finite() {
            return Err(ConfigError::InvalidInitialPosition(self.initial_position));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(ConfigError::InvalidHeight(self.height));
        }
        Ok(())
    }

    pub fn initial_position_in_range(&self) -> bool {
        (MIN_POSITION..=MAX_POSITION).contains(&self.initial_position)
    }

    /// Anchor relative path sources at `base`. URLs, absolute paths and
    /// empty sources are left as written.
    pub fn resolve_relative_to(&mut self, base: &Path) {
        for source in [&mut self.before, &mut self.after] {
            if let ImageSourceSpec::Path(path) = ImageSourceSpec::parse(source) {
                if path.is_relative() && !path.as_os_str().is_empty() {
                    *source = base.join(path).to_string_lossy().into_owned();
                }
            }
        }
    }

    pub fn before_source(&self) -> ImageSourceSpec {
        ImageSourceSpec::parse(&self.before)
    }

    pub fn after_source(&self) -> ImageSourceSpec {
        ImageSourceSpec::parse(&self.after)
    }
}

/// Where an image's bytes come from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ImageSourceSpec {
    Url(String),
    Path(PathBuf),
}

impl ImageSourceSpec {
    /// `http://` and `https://` sources are URLs, `file://` is stripped to a
    /// path, anything else is a path as written.
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        let lower = source.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            ImageSourceSpec::Url(source.to_string())
        } else if lower.starts_with("file://") {
            ImageSourceSpec::Path(PathBuf::from(&source["file://".len()..]))
        } else {
            ImageSourceSpec::Path(PathBuf::from(source))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, ImageSourceSpec::Url(_))
    }
}

impl std::fmt::Display for ImageSourceSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSourceSpec::Url(url) => write!(f, "{}", url),
            ImageSourceSpec::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_optional_fields() {
        let config: ComparisonConfig =
            serde_json::from_str(r#"{"before": "a.png", "after": "b.png"}"#).unwrap();
        assert_eq!(config.before_alt, "Before image");
        assert_eq!(config.after_alt, "After image");
        assert_eq!(config.initial_position, 50.0);
        assert_eq!(config.height, 384.0);
    }

    #[test]
    fn test_sources_are_required() {
        let result = serde_json::from_str::<ComparisonConfig>(r#"{"before": "a.png"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_validate() {
        assert_eq!(ComparisonConfig::demo().validate(), Ok(()));
        assert_eq!(
            ComparisonConfig::new("  ", "b.png").validate(),
            Err(ConfigError::MissingSource("before"))
        );
        assert_eq!(
            ComparisonConfig::new("a.png", "").validate(),
            Err(ConfigError::MissingSource("after"))
        );
        assert!(matches!(
            ComparisonConfig::new("a.png", "b.png")
                .with_initial_position(f32::NAN)
                .validate(),
            Err(ConfigError::InvalidInitialPosition(_))
        ));
        assert_eq!(
            ComparisonConfig::new("a.png", "b.png").with_height(0.0).validate(),
            Err(ConfigError::InvalidHeight(0.0))
        );
    }

    #[test]
    fn test_out_of_range_initial_is_valid_but_flagged() {
        let config = ComparisonConfig::new("a.png", "b.png").with_initial_position(120.0);
        assert_eq!(config.validate(), Ok(()));
        assert!(!config.initial_position_in_range());
        assert!(config.with_initial_position(75.0).initial_position_in_range());
    }

    #[test]
    fn test_source_parsing() {
        assert_eq!(
            ImageSourceSpec::parse("https://picsum.photos/id/800/800"),
            ImageSourceSpec::Url("https://picsum.photos/id/800/800".into())
        );
        assert!(ImageSourceSpec::parse("HTTP://example.com/x.png").is_remote());
        assert_eq!(
            ImageSourceSpec::parse("file:///tmp/a.png"),
            ImageSourceSpec::Path(PathBuf::from("/tmp/a.png"))
        );
        assert_eq!(
            ImageSourceSpec::parse(" images/before.jpg "),
            ImageSourceSpec::Path(PathBuf::from("images/before.jpg"))
        );
    }

    #[test]
    fn test_relative_sources_anchor_at_base() {
        let base = Path::new("/home/user/.config/image-compare");
        let mut config = ComparisonConfig::new("shots/before.png", "https://example.com/after.png");
        config.resolve_relative_to(base);
        assert_eq!(
            config.before_source(),
            ImageSourceSpec::Path(base.join("shots/before.png"))
        );
        assert_eq!(config.after, "https://example.com/after.png");

        let mut config = ComparisonConfig::new("/srv/before.png", "  ");
        config.resolve_relative_to(base);
        assert_eq!(config.before, "/srv/before.png");
        assert_eq!(config.validate(), Err(ConfigError::MissingSource("after")));
    }

    #[test]
    fn test_demo_matches_landing_page() {
        let demo = ComparisonConfig::demo();
        assert!(demo.before.ends_with("?grayscale"));
        assert_eq!(demo.before_alt, "Original design");
        assert_eq!(demo.after_alt, "Redesigned version");
        assert_eq!(demo.initial_position, 50.0);
    }
}
