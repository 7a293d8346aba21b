//! LLM prompt engineering for structured insight generation

/// Builds the schema-constrained analysis prompt
pub struct PromptBuilder {
    text: String,
}

impl PromptBuilder {
    /// Create a new prompt builder for the given text
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build the complete analysis prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        // 1. Instruction and field constraints
        prompt.push_str(ANALYSIS_INSTRUCTIONS);
        prompt.push_str("\n\n");

        // 2. The text to analyze
        prompt.push_str("Text to analyze:\n");
        prompt.push_str("---\n");
        prompt.push_str(&self.text);
        prompt.push_str("\n---\n\n");

        // 3. Output format reminder
        prompt.push_str(OUTPUT_FORMAT_REMINDER);

        prompt
    }
}

const ANALYSIS_INSTRUCTIONS: &str = r#"Analyze the following text and produce structured metadata.
Return a single JSON object with exactly these five fields:

{
  "summary": "concise 1-2 sentence summary of the text",
  "title": "the title if one is identifiable, otherwise null",
  "topics": ["topic1", "topic2", "topic3"],
  "sentiment": "positive | neutral | negative",
  "confidence": 0.0-1.0
}

Rules:
- summary: at most 2 sentences, never empty
- title: use null (not an empty string) when the text has no identifiable
  title, e.g. fragments or lists
- topics: exactly 3 short distinct topic phrases, most salient first
- sentiment: exactly one of "positive", "neutral", "negative"
- confidence: your confidence in the quality of this analysis as a
  number between 0.0 and 1.0"#;

const OUTPUT_FORMAT_REMINDER: &str =
    r#"Remember: Return ONLY the JSON object, no markdown code blocks, no explanations."#;
