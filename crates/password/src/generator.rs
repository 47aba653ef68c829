//! Generate pronounceable passwords.
//!
//! A password is assembled by walking the table of phonetic elements,
//! alternating vowel and consonant sounds the way `pwgen` does, while
//! a digit, a capital letter and a special character are injected at
//! random positions. An attempt that fills the buffer without placing
//! all three classes is discarded and generation starts over.
use crate::{
    csprng,
    elements::{ElementFlags, ELEMENTS},
    random::RandomSource,
    Error, Result, DIGITS, SPECIAL_CHARACTERS,
};
use secrecy::SecretString;
use zeroize::Zeroize;

/// Generate a pronounceable password of `length` characters using
/// the default RNG.
pub fn phonetic_password(length: usize) -> Result<SecretString> {
    PhoneticGenerator::new(length).one()
}

/// Generator for pronounceable passwords.
#[derive(Debug, Clone)]
pub struct PhoneticGenerator {
    length: usize,
}

impl PhoneticGenerator {
    /// Smallest usable target length.
    ///
    /// The digit and the special character each need a preceding
    /// element inside their own segment so no draw sequence can
    /// satisfy a shorter target.
    pub const MIN_LENGTH: usize = 5;

    /// Create a generator producing passwords of `length` characters.
    ///
    /// Lengths below [MIN_LENGTH](Self::MIN_LENGTH) are rejected when
    /// generating.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// Target length for generated passwords.
    pub fn len(&self) -> usize {
        self.length
    }

    /// Determine if this generator is zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Generate a password drawing randomness from `rng`.
    ///
    /// The returned secret has the exact target length and contains
    /// one digit, one uppercase letter and one special character;
    /// every other character is a lowercase letter of a phonetic
    /// element.
    pub fn generate(
        &self,
        rng: &mut impl RandomSource,
    ) -> Result<SecretString> {
        if self.length < Self::MIN_LENGTH {
            return Err(Error::PasswordLengthTooSmall(
                self.length,
                Self::MIN_LENGTH,
            ));
        }

        let mut attempt: usize = 1;
        loop {
            if let Some(password) =
                Attempt::new(self.length, rng).run(rng)
            {
                return Ok(SecretString::new(password.into()));
            }
            tracing::debug!(attempt = %attempt, "generator::retry");
            attempt += 1;
        }
    }

    /// Generate a single password using the default RNG.
    pub fn one(&self) -> Result<SecretString> {
        self.generate(&mut csprng())
    }

    /// Generate `count` passwords using the default RNG.
    pub fn many(&self, count: usize) -> Result<Vec<SecretString>> {
        let mut passwords = Vec::with_capacity(count);
        for _ in 0..count {
            passwords.push(self.one()?);
        }
        Ok(passwords)
    }
}

/// State for a single generation attempt.
struct Attempt {
    length: usize,
    buffer: String,
    previous: ElementFlags,
    should_be: ElementFlags,
    first: bool,
    needs_digit: bool,
    needs_capital: bool,
    needs_special: bool,
}

impl Attempt {
    fn new(length: usize, rng: &mut impl RandomSource) -> Self {
        Self {
            length,
            buffer: String::with_capacity(length),
            previous: ElementFlags::empty(),
            should_be: draw_sound(rng),
            first: true,
            needs_digit: true,
            needs_capital: true,
            needs_special: true,
        }
    }

    /// Run the attempt until the buffer is full.
    ///
    /// Yields the finished password or nothing when a required
    /// character class could not be placed.
    fn run(mut self, rng: &mut impl RandomSource) -> Option<String> {
        while self.buffer.len() < self.length {
            let index = ((ELEMENTS.len() - 1) as f64 * rng.next_unit())
                .floor() as usize;
            let element = &ELEMENTS[index];
            let flags = element.flags();
            let text = element.text();

            // Element must match the sound class for this slot.
            if !flags.intersects(self.should_be) {
                continue;
            }
            // Some clusters cannot start a segment.
            if self.first && flags.is_not_first() {
                continue;
            }
            // No vowel dipthong directly after a vowel.
            if self.previous.is_vowel()
                && flags.contains(ElementFlags::VOWEL | ElementFlags::DIPTHONG)
            {
                continue;
            }
            // Never overflow the target length.
            if self.buffer.len() + text.len() > self.length {
                continue;
            }

            if self.needs_capital
                && (self.first || flags.is_consonant())
                && rng.next_unit() > 0.3
            {
                self.buffer.push_str(&text[..1].to_ascii_uppercase());
                self.buffer.push_str(&text[1..]);
                self.needs_capital = false;
            } else {
                self.buffer.push_str(text);
            }

            if self.needs_digit && !self.first && rng.next_unit() < 0.3 {
                self.roll_back(text.len());
                let digit = (10.0 * rng.next_unit()).floor() as usize;
                self.buffer.push(DIGITS[digit]);
                self.needs_digit = false;
                self.restart_segment(rng);
                continue;
            }

            if self.needs_special && !self.first && rng.next_unit() < 0.3 {
                self.roll_back(text.len());
                let special = (SPECIAL_CHARACTERS.len() as f64
                    * rng.next_unit())
                .floor() as usize;
                self.buffer.push(SPECIAL_CHARACTERS[special]);
                self.needs_special = false;
                self.restart_segment(rng);
                continue;
            }

            // Sound class for the next slot.
            if self.should_be == ElementFlags::CONSONANT {
                self.should_be = ElementFlags::VOWEL;
            } else if self.previous.is_vowel()
                || flags.is_dipthong()
                || rng.next_unit() > 0.3
            {
                self.should_be = ElementFlags::CONSONANT;
            } else {
                self.should_be = ElementFlags::VOWEL;
            }
            self.previous = flags;
            self.first = false;
        }

        if self.needs_digit || self.needs_capital || self.needs_special {
            self.buffer.zeroize();
            return None;
        }

        Some(self.buffer)
    }

    /// Drop the last character when the just appended element left no
    /// room for an injection. A dropped uppercase letter re-arms the
    /// capital requirement.
    fn roll_back(&mut self, appended: usize) {
        if self.buffer.len() + appended > self.length {
            if let Some(removed) = self.buffer.pop() {
                if removed.is_ascii_uppercase() {
                    self.needs_capital = true;
                }
            }
        }
    }

    /// Begin a fresh pronounceable segment after an injection.
    fn restart_segment(&mut self, rng: &mut impl RandomSource) {
        self.first = true;
        self.previous = ElementFlags::empty();
        self.should_be = draw_sound(rng);
    }
}

/// Draw whether a segment continues with a vowel or a consonant.
fn draw_sound(rng: &mut impl RandomSource) -> ElementFlags {
    if rng.next_unit() < 0.5 {
        ElementFlags::VOWEL
    } else {
        ElementFlags::CONSONANT
    }
}
