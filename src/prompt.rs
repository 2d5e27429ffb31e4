//! Prompt templates and composition.
//!
//! Each workspace section wraps the user's free-text fragment in a fixed
//! prefix/suffix pair. The template strings below are configuration data
//! — edit them to change the pre-filled part of each prompt. Composition
//! itself is pure concatenation; the preview the UI shows and the prompt
//! the model receives come from the same function and cannot diverge.

use serde::{Deserialize, Serialize};

/// The three content-generation modes of the workspace.
///
/// A category is fixed for the lifetime of its section: it selects both
/// the template and the remote operation (photo → image generation,
/// the other two → text generation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Photo,
    Description,
    AdCopy,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 3] = [Category::Photo, Category::Description, Category::AdCopy];

    /// Whether this category's remote operation produces an image.
    pub fn is_image(self) -> bool {
        matches!(self, Category::Photo)
    }
}

/// Fixed text wrapped around the user's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub prefix: &'static str,
    /// Empty for every category except photo.
    pub suffix: &'static str,
}

const PHOTO_PREFIX: &str = "Ultra-realistic professional product photography of ";

const PHOTO_SUFFIX: &str = " for NeedieShop eCommerce website. Background and environment must match the product’s real-life use case and purpose. Scene should feel natural, functional, and contextually relevant — not decorative. Soft cinematic lighting, high detail, commercial advertising quality, realistic textures, sharp focus on product, subtle depth of field, premium modern aesthetic, 4K resolution, no watermark, no text.";

const DESCRIPTION_PREFIX: &str = r#"Analyze the following reference product description and extract its structure, tone, persuasion style, and selling psychology.
Then write a completely original, high-converting product description for NeedieShop, a modern gadget-focused eCommerce brand in Bangladesh.

The description must:
– Be clear, benefit-driven, and trust-building
– Focus on real-life usage and problem solving
– Avoid generic buzzwords
– Include a strong hook in the first 2–3 lines
– Explain key features as benefits, not just specifications
– Include subtle urgency or value reinforcement
– Be optimized for online sales conversion
– Use simple but premium language
– Avoid copying wording from the reference

Target audience: Smart Bangladeshi online buyers looking for reliable tech gadgets at competitive prices.

Input Data / Reference: "#;

const AD_COPY_PREFIX: &str = r#"Analyze the following reference advertisement copy and identify its structure, emotional triggers, persuasion strategy, and conversion flow.
Then create a completely original, high-converting Facebook ad copy for NeedieShop (a gadget-focused eCommerce brand in Bangladesh).

Important Requirements:
– The final output MUST be written entirely in Bangla
– Do not copy wording from the reference
– Start with a powerful hook in the first 3–4 lines
– Clearly highlight a common problem faced by the target audience
– Present the product as the practical solution
– Explain features as real-life benefits
– Build trust and reduce buying hesitation
– Include a strong and clear call-to-action at the end
– Keep the tone professional, confident, and persuasive
– Avoid excessive emojis

Target Audience: Online gadget buyers in Bangladesh who value performance, reliability, and fair pricing.

Input Data / Reference: "#;

/// The fixed template for a category. Total over the closed set; this is
/// configuration lookup and has no failure mode.
pub fn template_for(category: Category) -> Template {
    match category {
        Category::Photo => Template { prefix: PHOTO_PREFIX, suffix: PHOTO_SUFFIX },
        Category::Description => Template { prefix: DESCRIPTION_PREFIX, suffix: "" },
        Category::AdCopy => Template { prefix: AD_COPY_PREFIX, suffix: "" },
    }
}

/// `prefix + input + suffix`, byte for byte.
///
/// The user's fragment passes through verbatim (no trimming, no
/// escaping), so their exact phrasing reaches the model.
pub fn compose(template: &Template, user_input: &str) -> String {
    format!("{}{}{}", template.prefix, user_input, template.suffix)
}

/// [`compose`] against the category's registered template.
pub fn compose_for(category: Category, user_input: &str) -> String {
    compose(&template_for(category), user_input)
}
