// Prompt construction for the moderation call.
//
// The instruction block pins the model to exactly two JSON verdicts and
// spells out what counts as abusive. Keeping it byte-stable matters: the
// normalizer downstream assumes the model was told to return JSON only.

/// Fixed instruction block sent ahead of every sentence.
const INSTRUCTIONS: &str = r#"You are a strict content moderation system.
ONLY return one of the following JSON responses and nothing else:
{"is_clean": true, "message": "The text is clean"}
OR
{"is_clean": false, "message": "The text contains abusive language"}

Rules:
- Mark as abusive ONLY if the text contains profanity, vulgarity, hate speech, or offensive slurs.
- DO NOT mark as abusive if the text contains criticism, negative opinion, or poor product reviews.
- Sentences like 'this product is bad' or 'I hate this service' are just opinions and NOT abusive.
- Return JSON only. DO NOT explain your answer or return any additional text."#;

/// Render the moderation prompt for one piece of text.
///
/// Pure and infallible. The text is inserted verbatim into the quoted
/// sentence with no escaping; the model sees exactly what the user sent.
pub fn build_prompt(text: &str) -> String {
    format!("{INSTRUCTIONS}\n\nSentence: \"{text}\"")
}
