#![no_main]

// Feeds arbitrary bytes to the texture view and runs every query against them.
// Nothing may panic, and every returned slice must borrow from the input.

use libfuzzer_sys::fuzz_target;

mod common;

fuzz_target!(|data: &[u8]| {
    common::exercise_view(data);
});
