//! Content-generation request types for Contentry.
//!
//! A [`ContentRequest`] carries the four fields the generator substitutes
//! into its prompt template: free-text topic and audience, plus the
//! platform and tone enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ContentError;

/// Target platform for generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    BlogPost,
    Tweet,
    InstagramCaption,
    LinkedInPost,
}

impl Platform {
    /// All platforms, in selection-menu order.
    pub const ALL: [Platform; 4] = [
        Platform::BlogPost,
        Platform::Tweet,
        Platform::InstagramCaption,
        Platform::LinkedInPost,
    ];
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::BlogPost => write!(f, "Blog Post"),
            Platform::Tweet => write!(f, "Twitter/X"),
            Platform::InstagramCaption => write!(f, "Instagram Caption"),
            Platform::LinkedInPost => write!(f, "LinkedIn Post"),
        }
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "blog post" | "blog-post" | "blog" => Ok(Platform::BlogPost),
            "twitter/x" | "twitter" | "tweet" | "x" => Ok(Platform::Tweet),
            "instagram caption" | "instagram-caption" | "instagram" => {
                Ok(Platform::InstagramCaption)
            }
            "linkedin post" | "linkedin-post" | "linkedin" => Ok(Platform::LinkedInPost),
            other => Err(format!("invalid platform: '{other}'")),
        }
    }
}

/// Tone of voice for generated content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Informative,
    Professional,
    Friendly,
    Playful,
    Persuasive,
}

impl Tone {
    /// All tones, in selection-menu order.
    pub const ALL: [Tone; 5] = [
        Tone::Informative,
        Tone::Professional,
        Tone::Friendly,
        Tone::Playful,
        Tone::Persuasive,
    ];
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Informative => write!(f, "Informative"),
            Tone::Professional => write!(f, "Professional"),
            Tone::Friendly => write!(f, "Friendly"),
            Tone::Playful => write!(f, "Playful"),
            Tone::Persuasive => write!(f, "Persuasive"),
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "informative" => Ok(Tone::Informative),
            "professional" => Ok(Tone::Professional),
            "friendly" => Ok(Tone::Friendly),
            "playful" => Ok(Tone::Playful),
            "persuasive" => Ok(Tone::Persuasive),
            other => Err(format!("invalid tone: '{other}'")),
        }
    }
}

/// The four fields a content-generation call substitutes into its template.
///
/// Transient: constructed and consumed within one call, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRequest {
    pub topic: String,
    pub platform: Platform,
    pub audience: String,
    pub tone: Tone,
}

impl ContentRequest {
    /// Check that the free-text fields are non-empty after trimming.
    ///
    /// The platform and tone enums cannot be empty by construction; callers
    /// that accept them as strings validate at parse time.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.topic.trim().is_empty() {
            return Err(ContentError::EmptyField("topic"));
        }
        if self.audience.trim().is_empty() {
            return Err(ContentError::EmptyField("audience"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_roundtrip() {
        for platform in Platform::ALL {
            let s = platform.to_string();
            let parsed: Platform = s.parse().unwrap();
            assert_eq!(platform, parsed);
        }
    }

    #[test]
    fn test_platform_aliases() {
        assert_eq!("blog-post".parse::<Platform>().unwrap(), Platform::BlogPost);
        assert_eq!("tweet".parse::<Platform>().unwrap(), Platform::Tweet);
        assert_eq!("x".parse::<Platform>().unwrap(), Platform::Tweet);
        assert_eq!(
            "instagram".parse::<Platform>().unwrap(),
            Platform::InstagramCaption
        );
        assert_eq!(
            "LinkedIn".parse::<Platform>().unwrap(),
            Platform::LinkedInPost
        );
    }

    #[test]
    fn test_tone_roundtrip() {
        for tone in Tone::ALL {
            let s = tone.to_string();
            let parsed: Tone = s.parse().unwrap();
            assert_eq!(tone, parsed);
        }
    }

    #[test]
    fn test_platform_serde() {
        let json = serde_json::to_string(&Platform::InstagramCaption).unwrap();
        assert_eq!(json, "\"instagram_caption\"");
        let parsed: Platform = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Platform::InstagramCaption);
    }

    #[test]
    fn test_tone_serde() {
        let json = serde_json::to_string(&Tone::Persuasive).unwrap();
        assert_eq!(json, "\"persuasive\"");
    }

    #[test]
    fn test_validate_ok() {
        let req = ContentRequest {
            topic: "VR in education".to_string(),
            platform: Platform::BlogPost,
            audience: "Educators".to_string(),
            tone: Tone::Informative,
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_topic() {
        let req = ContentRequest {
            topic: "   ".to_string(),
            platform: Platform::Tweet,
            audience: "Developers".to_string(),
            tone: Tone::Playful,
        };
        let err = req.validate().unwrap_err();
        assert!(matches!(err, ContentError::EmptyField("topic")));
    }

    #[test]
    fn test_validate_empty_audience() {
        let req = ContentRequest {
            topic: "Rust async".to_string(),
            platform: Platform::LinkedInPost,
            audience: "".to_string(),
            tone: Tone::Professional,
        };
        let err = req.validate().unwrap_err();
        assert!(matches!(err, ContentError::EmptyField("audience")));
    }
}
