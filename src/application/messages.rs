//! Assistant-authored messages, written in English and localized on send.

pub const WELCOME: &str = "Hello! 👋 I'm your **TalentScout Hiring Assistant**.

My purpose is to help our recruiting team get to know you better by:
1. Gathering your professional background and tech stack.
2. Conducting a short, tailored technical screening based on your expertise.
3. Providing a summary of our conversation to our human recruiters.

*Note: You can type **'exit'** or **'quit'** at any time to end this conversation.*

To get started, could you please tell me your **full name**?";

pub fn ask_email(name: &str) -> String {
    format!("Nice to meet you, {}! What is your **email address**?", name)
}

pub const ASK_PHONE: &str = "Got it. And what is your **phone number**?";

pub const ASK_EXPERIENCE: &str =
    "Great. How many **years of experience** do you have in the tech industry?";

pub const EXPERIENCE_RETRY: &str =
    "I didn't quite catch that. Please provide the number of years as a digit.";

pub const ASK_ROLE: &str = "What **position** are you applying for?";

pub const ASK_LOCATION: &str = "Where are you **currently located**?";

pub const ASK_TECH_STACK: &str = "Excellent. Finally, please list your **tech stack** (languages, frameworks, tools) separated by commas.";

pub const GENERATING_QUESTIONS: &str = "Thank you for sharing your background! I'm now generating some tailored technical questions for you. Please wait a moment...";

pub fn questions_ready(count: usize) -> String {
    format!("I've prepared {} questions for you. Let's start!", count)
}

pub fn generation_failed(error: &str) -> String {
    format!(
        "I encountered an error generating questions: {}. Please type 'restart' to try again.",
        error
    )
}

pub const FAILED_REMINDER: &str =
    "I couldn't prepare your questions. Please type 'restart' to begin again, or 'exit' to leave.";

pub const SCORING_GLITCH: &str = "I'm having a technical glitch evaluating that answer. Moving to the next question for now.";

pub const ACKNOWLEDGE_FALLBACK: &str = "Thanks, got it!";

pub fn closing_fallback(name: &str, average: f64) -> String {
    format!(
        "Thank you for your time, {}! You scored {}/5 on average. Our human recruiters will review your profile and be in touch soon.",
        name, average
    )
}

/// Typed in the failed stage to start over.
pub const RESTART_COMMAND: &str = "restart";
