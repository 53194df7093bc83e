//! Finger-pattern classification of recorded trigrams.
//!
//! Key positions are folded onto the 3x10 alpha block (index `row * 10 + col`),
//! each column is assigned a finger, and every finger triple is looked up in a
//! table computed at compile time.

use crate::error::{TokenError, TokenResult};
use crate::keyboard::KeyPos;
use crate::timings::{durations, TimingSummary};
use crate::tokens::split_key;
use serde_json::{Map, Value};
use std::fmt;
use tracing::{debug, warn};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Finger {
    LeftPinky,
    LeftRing,
    LeftMiddle,
    LeftIndex,
    RightIndex,
    RightMiddle,
    RightRing,
    RightPinky,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Hand {
    Left,
    Right,
}

use Finger::*;
use Hand::*;

impl Finger {
    pub const ALL: [Finger; 8] = [
        LeftPinky,
        LeftRing,
        LeftMiddle,
        LeftIndex,
        RightIndex,
        RightMiddle,
        RightRing,
        RightPinky,
    ];

    const fn hand(self) -> Hand {
        match self {
            LeftPinky | LeftRing | LeftMiddle | LeftIndex => Left,
            _ => Right,
        }
    }

    /// Everything but the index fingers.
    const fn is_weak(self) -> bool {
        !matches!(self, LeftIndex | RightIndex)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TrigramPattern {
    Alternate,
    AlternateSfs,
    Inroll,
    Outroll,
    Onehand,
    Redirect,
    RedirectSfs,
    BadRedirect,
    BadRedirectSfs,
    Sfb,
    BadSfb,
    Sft,
}

const fn classify_fingers(a: Finger, b: Finger, c: Finger) -> TrigramPattern {
    use TrigramPattern::*;

    let (ra, rb, rc) = (a as u8, b as u8, c as u8);
    let sfs = ra == rc;
    let sfb = ra == rb || rb == rc;

    match (a.hand(), b.hand(), c.hand()) {
        (Left, Right, Left) | (Right, Left, Right) => {
            if sfs {
                AlternateSfs
            } else {
                Alternate
            }
        }
        (Left, Left, Left) | (Right, Right, Right) => {
            if ra == rb && rb == rc {
                Sft
            } else if sfb {
                BadSfb
            } else if (ra < rb) == (rb > rc) {
                let weak = a.is_weak() && b.is_weak() && c.is_weak();
                match (sfs, weak) {
                    (false, false) => Redirect,
                    (false, true) => BadRedirect,
                    (true, false) => RedirectSfs,
                    (true, true) => BadRedirectSfs,
                }
            } else {
                Onehand
            }
        }
        _ if sfb => Sfb,
        (Left, Left, Right) => roll(ra < rb),
        (Right, Left, Left) => roll(rb < rc),
        (Right, Right, Left) => roll(ra > rb),
        (Left, Right, Right) => roll(rb > rc),
    }
}

const fn roll(inward: bool) -> TrigramPattern {
    if inward {
        TrigramPattern::Inroll
    } else {
        TrigramPattern::Outroll
    }
}

const fn build_pattern_table() -> [TrigramPattern; 512] {
    let mut table = [TrigramPattern::Onehand; 512];
    let mut i = 0;
    while i < 512 {
        table[i] = classify_fingers(
            Finger::ALL[i >> 6],
            Finger::ALL[(i >> 3) & 7],
            Finger::ALL[i & 7],
        );
        i += 1;
    }
    table
}

/// Pattern of every finger triple, indexed by `(f1 << 6) | (f2 << 3) | f3`.
pub static PATTERN_TABLE: [TrigramPattern; 512] = build_pattern_table();

pub fn classify([a, b, c]: [Finger; 3]) -> TrigramPattern {
    PATTERN_TABLE[((a as usize) << 6) | ((b as usize) << 3) | c as usize]
}

/// Fold a key onto the 3x10 block. Keys outside the letter rows give `None`.
///
/// The bottom row is shifted two columns left so `KeyZ` sits under `KeyA`;
/// the shift keys collapse onto the outer pinky columns.
pub fn matrix_index(pos: KeyPos) -> Option<usize> {
    match (pos.row, pos.col) {
        (row @ (1 | 2), col @ 1..=10) => Some((row - 1) * 10 + col - 1),
        (3, 0 | 1) => Some(20),
        (3, col @ 2..=11) => Some(20 + col - 2),
        (3, 12) => Some(29),
        _ => None,
    }
}

pub fn finger(index: usize) -> Finger {
    let col = index % 10;
    Finger::ALL[match col {
        0..=3 => col,
        4 | 5 => col - 1,
        _ => col - 2,
    }]
}

/// Same key pressed twice in a row.
pub fn is_sfr([a, b, c]: &[usize; 3]) -> bool {
    a == b || b == c
}

/// First and last key on the same finger with a different finger between.
pub fn is_sfs([a, b, c]: &[Finger; 3]) -> bool {
    a == c && a != b
}

/// Parse a `"KeyA,KeyS,KeyD"` key into matrix indexes.
pub fn matrix_trigram(key: &str) -> TokenResult<[usize; 3]> {
    let not_a_trigram = || TokenError::NotATrigram(key.to_string());

    let mut tokens = split_key(key);
    let mut indexes = [0usize; 3];
    for slot in indexes.iter_mut() {
        let pos: KeyPos = tokens.next().ok_or_else(not_a_trigram)?.parse()?;
        *slot = matrix_index(pos).ok_or_else(not_a_trigram)?;
    }
    if tokens.next().is_some() {
        return Err(not_a_trigram());
    }
    Ok(indexes)
}

/// Report buckets, in display order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Category {
    Overall,
    Sfb,
    BadSfb,
    Sft,
    Sfr,
    Sfs,
    Alternate,
    AlternateSfs,
    Inroll,
    Outroll,
    Onehand,
    Redirect,
    RedirectSfs,
    BadRedirect,
    BadRedirectSfs,
}

const CATEGORY_COUNT: usize = 15;

impl Category {
    pub const ALL: [Category; CATEGORY_COUNT] = [
        Category::Overall,
        Category::Sfb,
        Category::BadSfb,
        Category::Sft,
        Category::Sfr,
        Category::Sfs,
        Category::Alternate,
        Category::AlternateSfs,
        Category::Inroll,
        Category::Outroll,
        Category::Onehand,
        Category::Redirect,
        Category::RedirectSfs,
        Category::BadRedirect,
        Category::BadRedirectSfs,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Overall => "Overall",
            Category::Sfb => "Sfb",
            Category::BadSfb => "BadSfb",
            Category::Sft => "Sft",
            Category::Sfr => "Sfr",
            Category::Sfs => "Sfs",
            Category::Alternate => "Alternate",
            Category::AlternateSfs => "Alternate Sfs",
            Category::Inroll => "Inroll",
            Category::Outroll => "Outroll",
            Category::Onehand => "Onehand",
            Category::Redirect => "Redirect",
            Category::RedirectSfs => "RedirectSfs",
            Category::BadRedirect => "BadRedirect",
            Category::BadRedirectSfs => "BadRedirectSfs",
        }
    }

    fn ends_group(self) -> bool {
        matches!(
            self,
            Category::Overall | Category::Sfs | Category::AlternateSfs | Category::Onehand
        )
    }
}

impl From<TrigramPattern> for Category {
    fn from(pattern: TrigramPattern) -> Self {
        match pattern {
            TrigramPattern::Alternate => Category::Alternate,
            TrigramPattern::AlternateSfs => Category::AlternateSfs,
            TrigramPattern::Inroll => Category::Inroll,
            TrigramPattern::Outroll => Category::Outroll,
            TrigramPattern::Onehand => Category::Onehand,
            TrigramPattern::Redirect => Category::Redirect,
            TrigramPattern::RedirectSfs => Category::RedirectSfs,
            TrigramPattern::BadRedirect => Category::BadRedirect,
            TrigramPattern::BadRedirectSfs => Category::BadRedirectSfs,
            TrigramPattern::Sfb => Category::Sfb,
            TrigramPattern::BadSfb => Category::BadSfb,
            TrigramPattern::Sft => Category::Sft,
        }
    }
}

/// Timing summary per category for one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PatternStats {
    summaries: [TimingSummary; CATEGORY_COUNT],
    /// Keys that are not three codes on the 3x10 block.
    pub skipped: usize,
}

impl PatternStats {
    pub fn from_document(document: &Map<String, Value>) -> Self {
        let mut samples: [Vec<u16>; CATEGORY_COUNT] = Default::default();
        let mut skipped = 0;

        for (key, value) in document {
            let indexes = match matrix_trigram(key) {
                Ok(indexes) => indexes,
                Err(e) => {
                    debug!(key, error = %e, "skipping trigram");
                    skipped += 1;
                    continue;
                }
            };
            let durations = durations(key, value);
            samples[Category::Overall as usize].extend(&durations);

            if is_sfr(&indexes) {
                samples[Category::Sfr as usize].extend(&durations);
                continue;
            }

            let fingers = indexes.map(finger);
            if is_sfs(&fingers) {
                samples[Category::Sfs as usize].extend(&durations);
            }
            samples[Category::from(classify(fingers)) as usize].extend(&durations);
        }

        if skipped > 0 {
            warn!(skipped, total = document.len(), "trigrams outside the 3x10 block");
        }

        Self {
            summaries: std::array::from_fn(|i| TimingSummary::new(&samples[i])),
            skipped,
        }
    }

    pub fn get(&self, category: Category) -> TimingSummary {
        self.summaries[category as usize]
    }
}

impl fmt::Display for PatternStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for category in Category::ALL {
            let label = format!("{}:", category.label());
            writeln!(f, "{:<16}{}", label, self.get(category))?;
            if category.ends_group() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
