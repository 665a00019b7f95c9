//! Cluster reordering between visual and logical order.
//!
//! [`reorder`] runs [`segment`] over the input and then builds a fresh buffer, cluster by
//! cluster, in the slot order of the target encoding:
//!
//! | mode    | slot order                                                              |
//! |---------|-------------------------------------------------------------------------|
//! | Forward | `র্` · core · pre-base sign · vowel signs · modifiers                   |
//! | Inverse | pre-base mark · core · reph mark · split remainder · vowel signs · modifiers |
//!
//! Forward mode only relocates visual marks and never emits them; inverse mode only
//! emits them. Running either mode twice gives the same result as running it once.
//!
//! Moving a sign can expose a cluster boundary the first scan did not see: with `ৈ`
//! moved out of `রৈ্স`, the `র্স` left behind reads as a reph. The scan therefore
//! repeats until its output no longer changes, up to [`MAX_PASSES`] times.

use super::cluster::{segment, ClusterSpan, Segment};
use super::script::{
    compose_vowel_sign, logical_to_visual, split_vowel_sign, visual, visual_to_logical, RA,
    VIRAMA,
};
use crate::config::{ConverterConfig, DEFAULT_MAX_CONJUNCT_CONSONANTS};

pub use super::cluster::ReorderMode;

/// Reorder clusters with the default conjunct bound.
pub fn reorder(text: &str, mode: ReorderMode) -> String {
    reorder_with_limit(text, mode, DEFAULT_MAX_CONJUNCT_CONSONANTS)
}

/// Reorder clusters using the bound from `config`.
pub fn reorder_with(text: &str, mode: ReorderMode, config: &ConverterConfig) -> String {
    reorder_with_limit(text, mode, config.max_conjunct_consonants)
}

/// Upper bound on segment-and-materialize passes per call. Well-formed text settles
/// after one pass; malformed mark sequences have not been seen to need more than three.
pub const MAX_PASSES: usize = 8;

/// Reorder clusters, allowing at most `limit` consonants per conjunct.
pub fn reorder_with_limit(text: &str, mode: ReorderMode, limit: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut chars: Vec<char> = text.chars().collect();
    for pass in 1..=MAX_PASSES {
        let segments = segment(&chars, mode, limit);
        let out = materialize(&chars, &segments, mode);
        let next: Vec<char> = out.chars().collect();
        if next == chars {
            return out;
        }
        if pass == MAX_PASSES {
            log::warn!("Reorder ({:?}) still changing after {} passes", mode, MAX_PASSES);
            return out;
        }
        chars = next;
    }

    chars.into_iter().collect()
}

/// Build the output buffer from the segments of `chars`.
pub fn materialize(chars: &[char], segments: &[Segment], mode: ReorderMode) -> String {
    let mut out = String::with_capacity(chars.len() * 3 + 8);

    for segment in segments {
        match (segment, mode) {
            (Segment::Verbatim(i), ReorderMode::Forward) => push_stray_forward(&mut out, chars[*i]),
            (Segment::Verbatim(i), ReorderMode::Inverse) => out.push(chars[*i]),
            (Segment::Cluster(span), ReorderMode::Forward) => emit_forward(&mut out, chars, span),
            (Segment::Cluster(span), ReorderMode::Inverse) => emit_inverse(&mut out, chars, span),
        }
    }

    out
}

/// A visual mark with nothing to attach to still has a logical meaning.
fn push_stray_forward(out: &mut String, c: char) {
    if c == visual::REPH {
        log::warn!("Reph mark without a base consonant; written as র্");
        out.push(RA);
        out.push(VIRAMA);
    } else if let Some(sign) = visual_to_logical(c) {
        out.push(sign);
    } else {
        out.push(c);
    }
}

fn emit_forward(out: &mut String, chars: &[char], span: &ClusterSpan) {
    if span.reph.is_some() {
        out.push(RA);
        out.push(VIRAMA);
    }
    out.extend(span.core.iter().map(|&k| chars[k]));

    let mut signs = span
        .signs
        .iter()
        .map(|&k| visual_to_logical(chars[k]).unwrap_or(chars[k]))
        .peekable();
    if let Some(mark) = span.pre_base {
        let sign = visual_to_logical(chars[mark]).unwrap_or(chars[mark]);
        match signs.peek().and_then(|&next| compose_vowel_sign(sign, next)) {
            Some(composed) => {
                out.push(composed);
                signs.next();
            },
            None => out.push(sign),
        }
    }
    out.extend(signs);
    out.extend(span.modifiers.iter().map(|&k| chars[k]));
}

fn emit_inverse(out: &mut String, chars: &[char], span: &ClusterSpan) {
    let (mark, remainder) = match span.pre_base.map(|k| chars[k]) {
        Some(sign) => match split_vowel_sign(sign) {
            Some((pre, post)) => (logical_to_visual(pre), Some(post)),
            None => (logical_to_visual(sign), None),
        },
        None => (None, None),
    };

    out.extend(mark);
    out.extend(span.core.iter().map(|&k| chars[k]));
    if span.reph.is_some() {
        out.push(visual::REPH);
    }
    out.extend(remainder);
    // Only one sign can move in front; any further pre-base sign is written as a mark
    for &k in &span.signs {
        push_visual_in_place(out, chars[k]);
    }
    out.extend(span.modifiers.iter().map(|&k| chars[k]));
}

fn push_visual_in_place(out: &mut String, sign: char) {
    match split_vowel_sign(sign) {
        Some((pre, post)) => {
            out.extend(logical_to_visual(pre));
            out.push(post);
        },
        None => out.push(logical_to_visual(sign).unwrap_or(sign)),
    }
}
