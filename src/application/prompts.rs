//! Prompt templates sent to the language service.
//!
//! Each template opens with a fixed marker line so calls can be told apart
//! in logs and matched by scripted providers in tests.

use crate::domain::screening::{CandidateProfile, Difficulty};

/// Fixed opening lines of each prompt.
pub mod markers {
    pub const MOOD: &str = "Analyze the following text from a job candidate.";
    pub const TRANSLATE: &str = "Translate the following recruitment assistant text";
    pub const QUESTIONS: &str = "You are a technical interviewer named TalentScout.";
    pub const EVALUATE: &str = "Evaluate the following answer on scale 1-5";
    pub const ACKNOWLEDGE: &str = "just answered a question. Briefly say";
    pub const REPORT: &str = "Generate a polite closing summary";
}

pub fn mood(text: &str) -> String {
    format!(
        r#"{}
Text: "{}"

1. Identify Sentiment: Positive, Neutral, Concerned, or Confident.
2. Detect Language: Name of the language.

Return JSON with keys: "sentiment", "language"."#,
        markers::MOOD,
        text
    )
}

pub fn translate(text: &str, target_language: &str) -> String {
    format!(
        "{} to {}. Keep it professional and friendly. Return ONLY the translated text.\nText: {}",
        markers::TRANSLATE,
        target_language,
        text
    )
}

pub fn questions(profile: &CandidateProfile, difficulty: Difficulty, language: &str) -> String {
    format!(
        r#"{}
Context: Candidate: {}, Role: {}, Lang: {}
Based on this stack: {}, generate exactly 4-5 interview questions.
Difficulty: {}.
IMPORTANT: Respond in {}.
Return JSON: {{"questions": ["..."]}}"#,
        markers::QUESTIONS,
        profile.display_name(),
        profile.role().unwrap_or("unspecified"),
        language,
        profile.tech_stack().join(", "),
        difficulty,
        language
    )
}

pub fn evaluate(candidate: &str, question: &str, answer: &str) -> String {
    format!(
        r#"{} for clarity, technical accuracy, and depth.
Candidate: {}
Question: {}
Answer: {}

IMPORTANT: The feedback/scoring logic must remain internal, but respond to the JSON request.
Return JSON with keys: "clarity", "technical_accuracy", "depth", each an integer from 1 to 5."#,
        markers::EVALUATE,
        candidate,
        question,
        answer
    )
}

pub fn acknowledge(candidate: &str, language: &str) -> String {
    format!(
        "The candidate {} {} 'Got it' or 'Thanks' in {} to keep it natural.",
        candidate,
        markers::ACKNOWLEDGE,
        language
    )
}

pub fn report(candidate: &str, language: &str, average: f64) -> String {
    format!(
        "{} for {} in {}.\nMention they scored {}/5 on average.\nThank them and mention human recruiters will be in touch.",
        markers::REPORT,
        candidate,
        language,
        average
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::screening::ProfileField;

    fn profile() -> CandidateProfile {
        let mut profile = CandidateProfile::new();
        profile.fill(ProfileField::Name, "Ada").unwrap();
        profile.fill(ProfileField::Role, "Backend Engineer").unwrap();
        profile.fill(ProfileField::TechStack, "Go, Docker").unwrap();
        profile
    }

    #[test]
    fn every_prompt_carries_its_marker() {
        assert!(mood("hi").contains(markers::MOOD));
        assert!(translate("hi", "French").contains(markers::TRANSLATE));
        assert!(questions(&profile(), Difficulty::Basic, "English").contains(markers::QUESTIONS));
        assert!(evaluate("Ada", "Q", "A").contains(markers::EVALUATE));
        assert!(acknowledge("Ada", "English").contains(markers::ACKNOWLEDGE));
        assert!(report("Ada", "English", 3.5).contains(markers::REPORT));
    }

    #[test]
    fn question_prompt_describes_profile_and_difficulty() {
        let prompt = questions(&profile(), Difficulty::Advanced, "Spanish");
        assert!(prompt.contains("Candidate: Ada"));
        assert!(prompt.contains("Role: Backend Engineer"));
        assert!(prompt.contains("Go, Docker"));
        assert!(prompt.contains("Difficulty: advanced."));
        assert!(prompt.contains("Respond in Spanish"));
        assert!(prompt.contains(r#"{"questions": ["..."]}"#));
    }

    #[test]
    fn evaluation_prompt_embeds_question_and_answer() {
        let prompt = evaluate("Ada", "What is a goroutine?", "A green thread");
        assert!(prompt.contains("Question: What is a goroutine?"));
        assert!(prompt.contains("Answer: A green thread"));
        assert!(prompt.contains("technical_accuracy"));
    }

    #[test]
    fn report_prompt_mentions_average() {
        assert!(report("Ada", "English", 3.67).contains("3.67/5"));
    }
}
