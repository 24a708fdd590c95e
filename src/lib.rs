// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) uses these modules to implement the flag-driven CLI.
//
// Module responsibilities:
// - `api`: Encapsulates HTTP interactions with the Photos API (building
//   filtered requests, classifying failures, decoding records).
// - `cli`: Declares the command-line flags and translates them into the
//   filter parameters the API understands.
// - `ui`: Renders the fetched records and shows progress while a request
//   is in flight.
//
// Keeping this separation makes it easier to test the request and filter
// logic against a mock server, or replace the presentation in the future.
pub mod api;
pub mod cli;
pub mod ui;
