//! Core data models used throughout Docbrief.
//!
//! These types represent the documents, requests, and results that flow
//! through the ingestion and summarization pipeline.

use sha2::{Digest, Sha256};

/// Declared media type of an uploaded document.
///
/// `None` covers both "no file uploaded" and "uploaded something we don't
/// know"; extraction rejects it either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    Pdf,
    Docx,
    None,
}

impl MediaType {
    /// Infer the declared type from a file extension (case-insensitive).
    pub fn from_path(path: &std::path::Path) -> MediaType {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("pdf") => MediaType::Pdf,
            Some("docx") => MediaType::Docx,
            _ => MediaType::None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Pdf => "pdf",
            MediaType::Docx => "docx",
            MediaType::None => "none",
        }
    }
}

/// Raw uploaded document: bytes plus the declared media type.
///
/// Immutable once received. Extraction takes the document by value, so the
/// raw bytes cannot be retained once text has been produced from them.
#[derive(Debug)]
pub struct Document {
    pub bytes: Vec<u8>,
    pub media_type: MediaType,
}

impl Document {
    pub fn new(bytes: Vec<u8>, media_type: MediaType) -> Self {
        Self { bytes, media_type }
    }
}

/// Plain text derived from a [`Document`].
///
/// A blank string is never a valid `ExtractedText`: an extraction that
/// produces nothing is a failure, not empty content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    /// Returns `None` when `text` is empty or whitespace-only.
    pub fn new(text: String) -> Option<Self> {
        if text.trim().is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Requested summary verbosity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
    Concise,
    Balanced,
    Detailed,
}

impl Density {
    pub fn label(&self) -> &'static str {
        match self {
            Density::Concise => "concise",
            Density::Balanced => "balanced",
            Density::Detailed => "detailed",
        }
    }

    /// Target length bounds for this tier.
    ///
    /// Carried through the client contract but not consumed by prompt
    /// construction today; see [`crate::summarize::Summarizer`].
    pub fn length_params(&self) -> LengthParams {
        match self {
            Density::Concise => LengthParams {
                max_length: 80,
                min_length: 40,
            },
            Density::Balanced => LengthParams {
                max_length: 150,
                min_length: 90,
            },
            Density::Detailed => LengthParams {
                max_length: 300,
                min_length: 150,
            },
        }
    }
}

impl std::str::FromStr for Density {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "concise" => Ok(Density::Concise),
            "balanced" => Ok(Density::Balanced),
            "detailed" => Ok(Density::Detailed),
            other => anyhow::bail!(
                "Unknown density: '{}'. Must be concise, balanced, or detailed.",
                other
            ),
        }
    }
}

/// Length bounds associated with a [`Density`] tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthParams {
    pub max_length: usize,
    pub min_length: usize,
}

/// Which fixed instructional template the prompt is built from.
///
/// `Sectioned` produces the structured three-section summary; `Adaptive`
/// lets the model pick the best format for the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptVariant {
    Sectioned,
    Adaptive,
}

impl PromptVariant {
    pub fn label(&self) -> &'static str {
        match self {
            PromptVariant::Sectioned => "sectioned",
            PromptVariant::Adaptive => "adaptive",
        }
    }
}

impl std::str::FromStr for PromptVariant {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sectioned" => Ok(PromptVariant::Sectioned),
            "adaptive" => Ok(PromptVariant::Adaptive),
            other => anyhow::bail!(
                "Unknown prompt variant: '{}'. Must be sectioned or adaptive.",
                other
            ),
        }
    }
}

/// One summarization request: the resolved input text plus the density tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    content: String,
    density: Density,
}

impl SummaryRequest {
    pub fn new(content: String, density: Density) -> Self {
        Self { content, density }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn density(&self) -> Density {
        self.density
    }

    /// Identity digest over (content, density). Cache lookups are exact-match
    /// on this value.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.content.as_bytes());
        hasher.update(self.density.label().as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

/// A produced summary. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryResult {
    pub text: String,
    pub generated_at: i64,
    pub source_request_hash: String,
}

impl SummaryResult {
    pub fn new(text: String, request: &SummaryRequest) -> Self {
        Self {
            text,
            generated_at: chrono::Utc::now().timestamp(),
            source_request_hash: request.digest(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn media_type_from_extension() {
        assert_eq!(MediaType::from_path(Path::new("report.pdf")), MediaType::Pdf);
        assert_eq!(MediaType::from_path(Path::new("REPORT.PDF")), MediaType::Pdf);
        assert_eq!(
            MediaType::from_path(Path::new("minutes.docx")),
            MediaType::Docx
        );
        assert_eq!(MediaType::from_path(Path::new("notes.txt")), MediaType::None);
        assert_eq!(MediaType::from_path(Path::new("no_extension")), MediaType::None);
    }

    #[test]
    fn extracted_text_rejects_blank() {
        assert!(ExtractedText::new(String::new()).is_none());
        assert!(ExtractedText::new("   \n\t ".to_string()).is_none());
        let ok = ExtractedText::new("content".to_string()).unwrap();
        assert_eq!(ok.as_str(), "content");
    }

    #[test]
    fn density_parses_case_insensitively() {
        assert_eq!("concise".parse::<Density>().unwrap(), Density::Concise);
        assert_eq!("Balanced".parse::<Density>().unwrap(), Density::Balanced);
        assert_eq!("DETAILED".parse::<Density>().unwrap(), Density::Detailed);
        assert!("verbose".parse::<Density>().is_err());
    }

    #[test]
    fn density_length_params_table() {
        assert_eq!(
            Density::Concise.length_params(),
            LengthParams {
                max_length: 80,
                min_length: 40
            }
        );
        assert_eq!(
            Density::Balanced.length_params(),
            LengthParams {
                max_length: 150,
                min_length: 90
            }
        );
        assert_eq!(
            Density::Detailed.length_params(),
            LengthParams {
                max_length: 300,
                min_length: 150
            }
        );
    }

    #[test]
    fn request_digest_is_deterministic() {
        let a = SummaryRequest::new("same text".to_string(), Density::Balanced);
        let b = SummaryRequest::new("same text".to_string(), Density::Balanced);
        assert_eq!(a.digest(), b.digest());
    }

    #[test]
    fn request_digest_separates_density() {
        let a = SummaryRequest::new("same text".to_string(), Density::Concise);
        let b = SummaryRequest::new("same text".to_string(), Density::Detailed);
        assert_ne!(a.digest(), b.digest());
    }

    #[test]
    fn request_digest_separates_content() {
        let a = SummaryRequest::new("text one".to_string(), Density::Balanced);
        let b = SummaryRequest::new("text two".to_string(), Density::Balanced);
        assert_ne!(a.digest(), b.digest());
    }
}
