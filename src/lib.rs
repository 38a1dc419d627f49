// Library root
// -----------
// This crate bundles two unrelated developer utilities for the teaching
// platform. Each ships as its own binary under `src/bin/` and shares the
// modules below.
//
// Module responsibilities:
// - `config`: Settings structs for both tools, with defaults matching the
//   values they run with day to day.
// - `extract`: Walks source trees and concatenates the non-blank,
//   non-comment lines into one file for a copyright submission.
// - `api`: Encapsulates HTTP interactions with the backend (login,
//   subjects listing, student creation).
// - `seeder`: Drives the test-data seeding flow and delegates requests
//   to `api`.
//
// Keeping this separation makes the request and filtering logic testable
// without going through the binaries.
pub mod api;
pub mod config;
pub mod extract;
pub mod seeder;
