use anyhow::Result;
use phonetic_password::{
    phonetic_password, Error, PhoneticGenerator, SPECIAL_CHARACTERS,
};
use rand::{rngs::StdRng, SeedableRng};
use secrecy::ExposeSecret;

#[test]
fn passgen_one() -> Result<()> {
    let generator = PhoneticGenerator::new(12);
    let password = generator.one()?;
    assert_eq!(generator.len(), password.expose_secret().len());
    Ok(())
}

#[test]
fn passgen_many() -> Result<()> {
    let generator = PhoneticGenerator::new(12);
    let passwords = generator.many(5)?;
    assert_eq!(5, passwords.len());
    for password in &passwords {
        assert_eq!(generator.len(), password.expose_secret().len());
    }
    Ok(())
}

#[test]
fn passgen_convenience() -> Result<()> {
    let password = phonetic_password(10)?;
    assert_eq!(10, password.expose_secret().len());
    Ok(())
}

#[test]
fn passgen_smallest_length() -> Result<()> {
    let generator = PhoneticGenerator::new(PhoneticGenerator::MIN_LENGTH);
    let password = generator.one()?;
    assert_eq!(PhoneticGenerator::MIN_LENGTH, password.expose_secret().len());
    Ok(())
}

#[test]
fn passgen_below_minimum() {
    for length in 0..PhoneticGenerator::MIN_LENGTH {
        let result = PhoneticGenerator::new(length).one();
        assert!(matches!(
            result,
            Err(Error::PasswordLengthTooSmall(actual, minimum))
                if actual == length && minimum == PhoneticGenerator::MIN_LENGTH
        ));
    }
}

#[test]
fn passgen_seeded_determinism() -> Result<()> {
    let generator = PhoneticGenerator::new(16);
    let first = generator.generate(&mut StdRng::seed_from_u64(0xcafe))?;
    let second = generator.generate(&mut StdRng::seed_from_u64(0xcafe))?;
    assert_eq!(first.expose_secret(), second.expose_secret());

    let other = generator.generate(&mut StdRng::seed_from_u64(0xbeef))?;
    assert_ne!(first.expose_secret(), other.expose_secret());
    Ok(())
}

#[test]
fn passgen_every_seed_places_each_class() -> Result<()> {
    // The smallest length leaves no slack for the injections.
    let generator = PhoneticGenerator::new(PhoneticGenerator::MIN_LENGTH);
    for seed in 0..2000 {
        let password = generator.generate(&mut StdRng::seed_from_u64(seed))?;
        let password = password.expose_secret();
        assert_eq!(PhoneticGenerator::MIN_LENGTH, password.len());
        assert_eq!(1, password.chars().filter(|c| c.is_ascii_digit()).count());
        assert_eq!(
            1,
            password.chars().filter(|c| c.is_ascii_uppercase()).count()
        );
        assert_eq!(
            1,
            password.chars().filter(|c| SPECIAL_CHARACTERS.contains(c)).count()
        );
    }
    Ok(())
}
