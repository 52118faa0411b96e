//! Fixed instructional prompt templates.
//!
//! Each [`PromptVariant`](crate::models::PromptVariant) maps to one template;
//! the input text is substituted at the `{text}` marker. The trailing
//! `Summary:` cue is part of the template, which is why the client strips a
//! leading `Summary:` label from model responses.

use crate::models::PromptVariant;

/// Marker the input text replaces.
const TEXT_MARKER: &str = "{text}";

/// Structured three-section summary.
pub const SECTIONED_TEMPLATE: &str = "\
You are given a detailed passage. Write a well-structured and non-repetitive summary with the following sections:
1. **Key Points** – Highlight the core ideas or arguments.
2. **Important Details** – Include relevant supporting information or examples.
3. **Main Conclusions** – Summarize the overall insights or takeaways.
Ensure clarity, logical flow, and avoid repeating the original wording directly.

Text to summarize:{text}

Summary:";

/// Free-form summary; the model picks the best format for the content.
pub const ADAPTIVE_TEMPLATE: &str = "\
Generate a comprehensive and clear summary of the uploaded project report.
Use the best summarization method depending on the content structure — you may use bullet points, numbered lists, tables, or article-style paragraphs as appropriate to maximize clarity and conciseness.

The summary should:
Highlight the core ideas or arguments as key points.
Include relevant supporting information, examples, or important details.
Summarize the overall insights or takeaways as a conclusion.
Ensure clarity, logical flow, and avoid repeating the original wording directly.
Try to keep it short, easy to read, and informative — like something you'd share with a person who wants to quickly understand what the document was all about.

Text to summarize:{text}

Summary:";

/// Substitute `text` into the template for `variant`.
pub fn build_prompt(variant: PromptVariant, text: &str) -> String {
    let template = match variant {
        PromptVariant::Sectioned => SECTIONED_TEMPLATE,
        PromptVariant::Adaptive => ADAPTIVE_TEMPLATE,
    };
    template.replace(TEXT_MARKER, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sectioned_prompt_embeds_text() {
        let prompt = build_prompt(PromptVariant::Sectioned, "the quarterly report");
        assert!(prompt.contains("Text to summarize:the quarterly report"));
        assert!(prompt.contains("**Key Points**"));
        assert!(prompt.ends_with("Summary:"));
        assert!(!prompt.contains(TEXT_MARKER));
    }

    #[test]
    fn adaptive_prompt_embeds_text() {
        let prompt = build_prompt(PromptVariant::Adaptive, "the quarterly report");
        assert!(prompt.contains("Text to summarize:the quarterly report"));
        assert!(prompt.contains("bullet points, numbered lists, tables"));
        assert!(prompt.ends_with("Summary:"));
    }

    #[test]
    fn templates_carry_exactly_one_marker() {
        assert_eq!(SECTIONED_TEMPLATE.matches(TEXT_MARKER).count(), 1);
        assert_eq!(ADAPTIVE_TEMPLATE.matches(TEXT_MARKER).count(), 1);
    }
}
