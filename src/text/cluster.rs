//! Orthographic cluster detection.
//!
//! This is the read-only half of reordering: it walks the code units once and records,
//! for every cluster, *which indices* play which role. Nothing is moved here; see
//! [`crate::text::reorder`] for the pass that builds the output.
//!
//! ```text
//! forward (visual order)   [pre-base mark] core { sign | modifier | reph mark | ্ C }*
//! inverse (logical order)  [র ্] core { sign | modifier }*
//! core                     C [়] ( [ZWJ] ্ C [়] )*      at most `limit` consonants
//! ```

use super::script::{
    char_class, is_consonant, is_pre_base_sign, is_visual_pre_base, CharClass, NUKTA, RA,
    VIRAMA, ZWJ,
};
use std::ops::Range;

/// Which way clusters are being rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReorderMode {
    /// Visual (legacy) order → logical order
    Forward,
    /// Logical order → visual (legacy) order
    Inverse,
}

/// Index roles for one cluster. Indices refer to the `chars` slice given to [`segment`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterSpan {
    /// First index covered
    pub start: usize,
    /// One past the last index covered
    pub end: usize,
    /// Reph: the visual mark (forward) or the `র ্` pair (inverse)
    pub reph: Option<Range<usize>>,
    /// Sign to relocate: the visual mark (forward) or the logical pre-base sign (inverse)
    pub pre_base: Option<usize>,
    /// Consonants, nuktas, joiners and viramas of the conjunct, in output order
    pub core: Vec<usize>,
    /// Remaining vowel signs in input order. In forward mode this includes visual marks
    /// that have no consonant to attach to.
    pub signs: Vec<usize>,
    /// Candrabindu, anusvara, visarga in input order
    pub modifiers: Vec<usize>,
}

impl ClusterSpan {
    /// Every index this cluster accounts for, sorted.
    pub fn indices(&self) -> Vec<usize> {
        let mut all: Vec<usize> = self.reph.clone().into_iter().flatten().collect();
        all.extend(self.pre_base);
        all.extend(&self.core);
        all.extend(&self.signs);
        all.extend(&self.modifiers);
        all.sort_unstable();
        all
    }
}

/// One unit of segmented text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A code unit outside any cluster
    Verbatim(usize),
    /// A cluster to rewrite
    Cluster(ClusterSpan),
}

/// Split `chars` into clusters and verbatim code units.
///
/// `limit` bounds the consonants of one conjunct; it is the lookahead bound for
/// associating a mark with its base. Every index of `chars` ends up in exactly one
/// segment, and segments come out in input order.
pub fn segment(chars: &[char], mode: ReorderMode, limit: usize) -> Vec<Segment> {
    let limit = limit.max(1);
    let mut segments = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let cluster = match mode {
            ReorderMode::Forward => forward_cluster(chars, i, limit),
            ReorderMode::Inverse => inverse_cluster(chars, i, limit),
        };

        match cluster {
            Some(span) => {
                i = span.end;
                segments.push(Segment::Cluster(span));
            },
            None => {
                segments.push(Segment::Verbatim(i));
                i += 1;
            },
        }
    }

    segments
}

/// Consonant run joined by virama, starting at a consonant.
struct Core {
    indices: Vec<usize>,
    consonants: usize,
    end: usize,
}

fn scan_core(chars: &[char], start: usize, limit: usize) -> Core {
    let mut core = Core {
        indices: Vec::new(),
        consonants: 0,
        end: start,
    };
    let mut k = start;

    loop {
        core.indices.push(k);
        core.consonants += 1;
        k += 1;
        if chars.get(k) == Some(&NUKTA) {
            core.indices.push(k);
            k += 1;
        }
        if core.consonants >= limit {
            break;
        }

        let link = joiner_link(chars, k);
        if link == 0 {
            break;
        }
        core.indices.extend(k..k + link);
        k += link;
    }

    core.end = k;
    core
}

/// Length of a `[ZWJ] ্` link at `k` that is followed by a consonant, or 0.
fn joiner_link(chars: &[char], k: usize) -> usize {
    let link = match (chars.get(k), chars.get(k + 1)) {
        (Some(&ZWJ), Some(&VIRAMA)) => 2,
        (Some(&VIRAMA), _) => 1,
        _ => return 0,
    };
    if chars.get(k + link).is_some_and(|&c| is_consonant(c)) {
        link
    } else {
        0
    }
}

fn forward_cluster(chars: &[char], i: usize, limit: usize) -> Option<ClusterSpan> {
    let c = chars[i];
    let (pre_base, core_start) = if is_visual_pre_base(c) {
        match chars.get(i + 1) {
            Some(&next) if is_consonant(next) => (Some(i), i + 1),
            _ => {
                log::warn!("Pre-base mark at {} has no base consonant; left in place", i);
                return None;
            },
        }
    } else if is_consonant(c) {
        (None, i)
    } else {
        return None;
    };

    let core = scan_core(chars, core_start, limit);
    let mut span = ClusterSpan {
        start: i,
        pre_base,
        core: core.indices,
        ..Default::default()
    };
    let mut consonants = core.consonants;
    let mut k = core.end;

    while let Some(&c) = chars.get(k) {
        match char_class(c) {
            Some(CharClass::VowelSign | CharClass::PreBaseVowelSign | CharClass::SplitVowelSign) => {
                span.signs.push(k);
                k += 1;
            },
            Some(CharClass::Modifier) => {
                span.modifiers.push(k);
                k += 1;
            },
            Some(CharClass::VisualReph) if span.reph.is_none() => {
                span.reph = Some(k..k + 1);
                k += 1;
            },
            // A mark with no consonant after it cannot start a cluster; keep it as a sign here
            Some(CharClass::VisualPreBase)
                if !chars.get(k + 1).is_some_and(|&n| is_consonant(n)) =>
            {
                span.signs.push(k);
                k += 1;
            },
            // A phala typed after a sign, reph or modifier still joins the conjunct
            Some(CharClass::Virama)
                if consonants < limit
                    && (span.reph.is_some()
                        || !span.signs.is_empty()
                        || !span.modifiers.is_empty())
                    && chars.get(k + 1).is_some_and(|&n| is_consonant(n)) =>
            {
                span.core.extend([k, k + 1]);
                consonants += 1;
                k += 2;
                if chars.get(k) == Some(&NUKTA) {
                    span.core.push(k);
                    k += 1;
                }
            },
            _ => break,
        }
    }

    span.end = k;
    Some(span)
}

fn inverse_cluster(chars: &[char], i: usize, limit: usize) -> Option<ClusterSpan> {
    let c = chars[i];
    let after_virama = i > 0 && chars[i - 1] == VIRAMA;
    let is_reph = c == RA
        && !after_virama
        && chars.get(i + 1) == Some(&VIRAMA)
        && chars.get(i + 2).is_some_and(|&n| is_consonant(n));

    let (reph, core_start) = if is_reph {
        (Some(i..i + 2), i + 2)
    } else if is_consonant(c) {
        (None, i)
    } else {
        return None;
    };

    let core = scan_core(chars, core_start, limit);
    let mut span = ClusterSpan {
        start: i,
        reph,
        core: core.indices,
        ..Default::default()
    };
    let mut k = core.end;

    while let Some(&c) = chars.get(k) {
        match char_class(c) {
            Some(CharClass::VowelSign | CharClass::PreBaseVowelSign | CharClass::SplitVowelSign) => {
                span.signs.push(k);
            },
            Some(CharClass::Modifier) => span.modifiers.push(k),
            _ => break,
        }
        k += 1;
    }

    if let Some(pos) = span.signs.iter().position(|&s| is_pre_base_sign(chars[s])) {
        span.pre_base = Some(span.signs.remove(pos));
    }

    span.end = k;
    Some(span)
}
