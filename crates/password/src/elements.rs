//! Table of phonetic elements passwords are assembled from.
//!
//! The table is the classic `pwgen` phoneme set: single letters plus a
//! handful of two letter sound clusters, each classified as a vowel or
//! a consonant sound.
use bitflags::bitflags;

bitflags! {
    /// Classification flags for a phonetic element.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ElementFlags: u8 {
        /// Element is a vowel sound.
        const VOWEL = 0b0001;
        /// Element is a consonant sound.
        const CONSONANT = 0b0010;
        /// Element is a two letter sound cluster.
        ///
        /// Keeps the historical `pwgen` spelling.
        const DIPTHONG = 0b0100;
        /// Element may not start a pronounceable segment.
        const NOT_FIRST = 0b1000;
    }
}

impl ElementFlags {
    /// Determine if the vowel flag is set.
    pub fn is_vowel(&self) -> bool {
        self.contains(ElementFlags::VOWEL)
    }

    /// Determine if the consonant flag is set.
    pub fn is_consonant(&self) -> bool {
        self.contains(ElementFlags::CONSONANT)
    }

    /// Determine if the dipthong flag is set.
    pub fn is_dipthong(&self) -> bool {
        self.contains(ElementFlags::DIPTHONG)
    }

    /// Determine if the element is barred from starting a segment.
    pub fn is_not_first(&self) -> bool {
        self.contains(ElementFlags::NOT_FIRST)
    }
}

/// Letter group used as a building block for pronounceable passwords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneticElement {
    text: &'static str,
    flags: ElementFlags,
}

impl PhoneticElement {
    /// Letters of this element in canonical lowercase form.
    pub fn text(&self) -> &'static str {
        self.text
    }

    /// Classification flags of this element.
    pub fn flags(&self) -> ElementFlags {
        self.flags
    }
}

// Shorthand for the table below.
const V: ElementFlags = ElementFlags::VOWEL;
const C: ElementFlags = ElementFlags::CONSONANT;
const D: ElementFlags = ElementFlags::DIPTHONG;
const N: ElementFlags = ElementFlags::NOT_FIRST;

const fn el(text: &'static str, flags: ElementFlags) -> PhoneticElement {
    PhoneticElement { text, flags }
}

/// Ordered table of phonetic elements.
///
/// Positions are stable; selection draws an index into this table so
/// reordering entries would change every replayed draw sequence.
pub const ELEMENTS: &[PhoneticElement] = &[
    el("a", V),
    el("ae", V.union(D)),
    el("ah", V.union(D)),
    el("ai", V.union(D)),
    el("b", C),
    el("c", C),
    el("ch", C.union(D)),
    el("d", C),
    el("e", V),
    el("ee", V.union(D)),
    el("ei", V.union(D)),
    el("f", C),
    el("g", C),
    el("gh", C.union(D).union(N)),
    el("h", C),
    el("i", V),
    el("ie", V.union(D)),
    el("j", C),
    el("k", C),
    el("l", C),
    el("m", C),
    el("n", C),
    el("ng", C.union(D).union(N)),
    el("o", V),
    el("oh", V.union(D)),
    el("oo", V.union(D)),
    el("p", C),
    el("ph", C.union(D)),
    el("qu", C.union(D)),
    el("r", C),
    el("s", C),
    el("sh", C.union(D)),
    el("t", C),
    el("th", C.union(D)),
    el("u", V),
    el("v", C),
    el("w", C),
    el("x", C),
    el("y", C),
    el("z", C),
];
