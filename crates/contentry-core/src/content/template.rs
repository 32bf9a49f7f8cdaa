//! The fixed content-generation prompt template.
//!
//! One static instruction template with four `{placeholder}` slots. The
//! renderer substitutes the request fields verbatim; the model's output
//! format is left unconstrained beyond the platform guidance in the text.

use contentry_types::content::ContentRequest;

/// Instruction template for the content generator.
///
/// Placeholders: `{topic}`, `{platform}`, `{audience}`, `{tone}`.
pub const CONTENT_PROMPT_TEMPLATE: &str = "\
You are an expert digital content creator specializing in marketing and SEO.
Your task is to generate compelling, ready-to-publish content.
Topic: {topic}; Platform: {platform}; Audience: {audience}; Tone: {tone}.
Length: appropriate for the selected platform.
Platform guidance: Blog Post → structured long-form with headings/lists;
Twitter/X → ≤280 characters with hashtags; Instagram Caption → short text
plus hashtags; LinkedIn Post → professional insight-oriented post.";

/// Render the template with the request's four fields substituted in.
pub fn render(request: &ContentRequest) -> String {
    CONTENT_PROMPT_TEMPLATE
        .replace("{topic}", request.topic.trim())
        .replace("{platform}", &request.platform.to_string())
        .replace("{audience}", request.audience.trim())
        .replace("{tone}", &request.tone.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contentry_types::content::{Platform, Tone};

    #[test]
    fn test_render_substitutes_all_fields() {
        let request = ContentRequest {
            topic: "VR in education".to_string(),
            platform: Platform::BlogPost,
            audience: "Educators".to_string(),
            tone: Tone::Informative,
        };

        let prompt = render(&request);
        assert!(prompt.contains("Topic: VR in education;"));
        assert!(prompt.contains("Platform: Blog Post;"));
        assert!(prompt.contains("Audience: Educators;"));
        assert!(prompt.contains("Tone: Informative."));
        assert!(!prompt.contains('{'));
    }

    #[test]
    fn test_render_trims_free_text_fields() {
        let request = ContentRequest {
            topic: "  Rust async  ".to_string(),
            platform: Platform::Tweet,
            audience: " Developers ".to_string(),
            tone: Tone::Playful,
        };

        let prompt = render(&request);
        assert!(prompt.contains("Topic: Rust async;"));
        assert!(prompt.contains("Audience: Developers;"));
    }

    #[test]
    fn test_template_keeps_platform_guidance() {
        assert!(CONTENT_PROMPT_TEMPLATE.contains("ready-to-publish"));
        assert!(CONTENT_PROMPT_TEMPLATE.contains("≤280 characters"));
        assert!(CONTENT_PROMPT_TEMPLATE.contains("insight-oriented"));
    }
}
