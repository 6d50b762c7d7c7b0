//! Integration test harness.

mod helpers;

mod captions_test;
mod cli_test;
mod playback_test;
