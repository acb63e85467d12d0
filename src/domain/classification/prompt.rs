use super::ValidatedName;
use crate::domain::llm::LlmRequest;

pub const SYSTEM_PROMPT: &str =
    "You are a precise name classification assistant outputting only JSON.";

/// Build the single chat request asking the model to judge `name`
pub fn build_classification_request(
    name: &ValidatedName,
    temperature: f32,
    max_tokens: u32,
) -> LlmRequest {
    LlmRequest::builder()
        .system(SYSTEM_PROMPT)
        .user(user_prompt(name.as_str()))
        .temperature(temperature)
        .max_tokens(max_tokens)
        .build()
}

fn user_prompt(name: &str) -> String {
    format!(
        r#"You are an expert in name classification. Determine if the name '{name}' is a realistic human name, used in any culture.
Consider the name regardless of its capitalization.

A name is considered unrealistic if:
* It contains characters other than letters, spaces, hyphens (-), apostrophes (') and dots (.).
* It has fewer than three letters in total (excluding spaces, hyphens, apostrophes and dots).
* It is a common phrase, placeholder text, a keyboard pattern or resembles an email address.

Examples of realistic names: 'Mohiuddin Mohi', 'Aisha Khan', 'Sheik Kaykaus', 'Mr. Hanif Uddin', 'John-Doe', 'Mary.Anne Smith', 'm. a. h. hashan', 'p. k. kibria'.
Examples of unrealistic names: 'Abdullah123' (contains numbers), 'Table Chair' (common phrase), 'Qwert' (keyboard pattern), 'asif.azad' (resembles email), 'Lorem Ipsum' (placeholder text).

Respond in JSON format. If the name is 'Realistic', the JSON should only contain:
{{"prediction": "Realistic"}}
If the name is 'Not Realistic', the JSON should contain:
{{"prediction": "Not Realistic", "reason": "<brief reason (max 50 characters) why the name is not realistic>"}}"#
    )
}
