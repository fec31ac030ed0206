// Moderation pipeline — validate, prompt, call, normalize.
//
// One request flows through four strictly linear stages. All failures are
// values (ModerationError), mapped to HTTP responses at the web boundary.

pub mod pipeline;
pub mod prompt;
