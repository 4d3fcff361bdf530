//! Random secret generation.
//!
//! Secrets are drawn from a caller-supplied cryptographic RNG. The binary
//! passes the operating system source; a failing source is reported as an
//! error and never replaced by a weaker one.

use std::fmt;

use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::{SecretError, SecretResult};

/// Kinds of secret produced on every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretKind {
    /// Signing key for JSON Web Tokens.
    Jwt,
    /// General-purpose random value.
    Random,
}

impl SecretKind {
    /// All kinds, in output order.
    pub const ALL: [SecretKind; 2] = [SecretKind::Jwt, SecretKind::Random];

    /// Environment variable name the secret is meant for.
    pub fn label(&self) -> &'static str {
        match self {
            SecretKind::Jwt => "JWT_SECRET",
            SecretKind::Random => "RANDOM_SECRET",
        }
    }

    /// Number of random bytes drawn for this kind.
    pub fn byte_len(&self) -> usize {
        match self {
            SecretKind::Jwt => 32,
            SecretKind::Random => 16,
        }
    }
}

impl fmt::Display for SecretKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A freshly generated secret. The hex value is wiped on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct Secret {
    #[zeroize(skip)]
    kind: SecretKind,
    value: String,
}

impl Secret {
    /// Draws a new secret of the given kind from `rng`.
    pub fn generate<R>(kind: SecretKind, rng: &mut R) -> SecretResult<Self>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        Ok(Self {
            kind,
            value: generate_hex(rng, kind.byte_len())?,
        })
    }

    /// Which secret this is.
    pub fn kind(&self) -> SecretKind {
        self.kind
    }

    /// Returns the hex value. Callers decide where it goes.
    pub fn expose(&self) -> &str {
        &self.value
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secret")
            .field("kind", &self.kind)
            .field("value", &"<redacted>")
            .finish()
    }
}

/// Fills `byte_len` bytes from `rng` and encodes them as lowercase hex.
///
/// # Errors
/// Returns `SecretError::RandomSource` if the RNG cannot supply the bytes.
pub fn generate_hex<R>(rng: &mut R, byte_len: usize) -> SecretResult<String>
where
    R: RngCore + CryptoRng + ?Sized,
{
    let mut bytes = Zeroizing::new(vec![0u8; byte_len]);
    rng.try_fill_bytes(bytes.as_mut_slice())
        .map_err(|e| SecretError::RandomSource(e.to_string()))?;
    Ok(hex::encode(bytes.as_slice()))
}

/// Generates one secret of every kind from the same source.
pub fn generate_all<R>(rng: &mut R) -> SecretResult<Vec<Secret>>
where
    R: RngCore + CryptoRng + ?Sized,
{
    SecretKind::ALL
        .iter()
        .map(|&kind| Secret::generate(kind, &mut *rng))
        .collect()
}
