//! Analogous palette generation.
//!
//! Rotates each seed color around the hue wheel and interleaves the
//! per-seed results into a single flat sequence.

mod wheel;


pub use wheel::hue_wheel;

/// Leading variants dropped per seed; the closest stops read as the seed
/// color itself.
const SKIP: usize = 3;

/// Generate `results` analogous colors per seed using the built-in
/// [`hue_wheel`], interleaved across seeds in input order.
pub fn analogous_colors<S: AsRef<str>>(colors: &[S], results: usize) -> Vec<String> {
    analogous_colors_with(colors, results, hue_wheel)
}

/// Same as [`analogous_colors`], but with an injected hue wheel for
/// callers that bring their own color math.
///
/// The wheel is asked for `results + 3` variants per seed, ordered most
/// similar first, and the first 3 are dropped.
pub fn analogous_colors_with<S, F>(colors: &[S], results: usize, wheel: F) -> Vec<String>
where
    S: AsRef<str>,
    F: Fn(&str, usize) -> Vec<String>,
{
    let sequences: Vec<Vec<String>> = colors
        .iter()
        .map(|color| {
            let mut variants = wheel(color.as_ref(), results + SKIP);
            variants.drain(..SKIP.min(variants.len()));
            variants
        })
        .collect();

    interleave(&sequences)
}

/// Round-robin across the per-seed sequences: element 0 of each seed in
/// input order, then element 1, and so on until the longest sequence is
/// exhausted. Seeds whose sequence has run dry are skipped.
fn interleave(sequences: &[Vec<String>]) -> Vec<String> {
    let longest = sequences.iter().map(Vec::len).max().unwrap_or(0);
    let mut flat = Vec::with_capacity(sequences.iter().map(Vec::len).sum());
    for i in 0..longest {
        for seq in sequences {
            if let Some(color) = seq.get(i) {
                flat.push(color.clone());
            }
        }
    }
    flat
}
