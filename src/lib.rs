// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the interactive CLI.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the Dog CEO API (breed
//   catalog, random breed image, random sub-breed image).
// - `ui`: Implements the terminal menu loop, input validation, and
//   catalog rendering, delegating requests to `api`.
pub mod api;
pub mod ui;
