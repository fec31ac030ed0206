// Soot: moderation gateway for user-submitted text.
//
// This is the library root. Each module corresponds to a major subsystem
// of the gateway: provider access, the moderation pipeline, and the web
// surface.

pub mod config;
pub mod model;
pub mod moderation;
pub mod web;
