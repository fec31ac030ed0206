// Model access — trait-based abstraction for swappable providers.
//
// The TextModel trait defines the interface. GeminiModel implements it
// using Google's Generative Language API. Swapping providers means adding
// an implementation without touching the moderation pipeline.

pub mod gemini;
pub mod traits;
