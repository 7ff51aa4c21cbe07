//! Fernet token implementation.
//!
//! AES-128-CBC with PKCS#7 padding, authenticated by HMAC-SHA256, following
//! the published Fernet token layout:
//!
//! ```text
//! 0x80 | timestamp (u64 BE) | IV (16) | ciphertext | HMAC-SHA256 (32)
//! ```
//!
//! encoded as padded URL-safe base64. Tokens interoperate with other Fernet
//! implementations given the same 32-byte key.

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use tracing::trace;
use zeroize::ZeroizeOnDrop;

use super::Cipher;
use crate::core::constants::KEY_LEN;
use crate::core::kdf::DerivedKey;
use crate::error::{CipherError, Result};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type HmacSha256 = Hmac<Sha256>;

const VERSION: u8 = 0x80;
const BLOCK_LEN: usize = 16;
const IV_LEN: usize = 16;
const MAC_LEN: usize = 32;
const HEADER_LEN: usize = 1 + 8 + IV_LEN;

/// Fernet cipher bound to one key.
#[derive(Clone, ZeroizeOnDrop)]
pub struct Fernet {
    signing_key: [u8; 16],
    encryption_key: [u8; 16],
}

impl Fernet {
    /// Build a cipher from a derived key.
    pub fn new(key: &DerivedKey) -> Self {
        Self::from_bytes(key.as_bytes())
    }

    /// Build a cipher from a URL-safe base64 Fernet key.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidKey` unless the text decodes to 32 bytes.
    pub fn from_encoded_key(encoded: &str) -> Result<Self> {
        let bytes = URL_SAFE
            .decode(encoded.trim().as_bytes())
            .map_err(|e| CipherError::InvalidKey(e.to_string()))?;
        let bytes: [u8; KEY_LEN] = bytes.as_slice().try_into().map_err(|_| {
            CipherError::InvalidKey(format!("expected {} bytes, got {}", KEY_LEN, bytes.len()))
        })?;
        Ok(Self::from_bytes(&bytes))
    }

    fn from_bytes(bytes: &[u8; KEY_LEN]) -> Self {
        let mut signing_key = [0u8; 16];
        let mut encryption_key = [0u8; 16];
        signing_key.copy_from_slice(&bytes[..16]);
        encryption_key.copy_from_slice(&bytes[16..]);
        Self {
            signing_key,
            encryption_key,
        }
    }

    fn mac(&self) -> Result<HmacSha256> {
        <HmacSha256 as Mac>::new_from_slice(&self.signing_key)
            .map_err(|e| CipherError::InvalidKey(e.to_string()).into())
    }

    /// Encrypt with an explicit timestamp and IV.
    pub(crate) fn encrypt_at(
        &self,
        plaintext: &[u8],
        timestamp: u64,
        iv: [u8; IV_LEN],
    ) -> Result<String> {
        let ciphertext = Aes128CbcEnc::new(&self.encryption_key.into(), &iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

        let mut token = Vec::with_capacity(HEADER_LEN + ciphertext.len() + MAC_LEN);
        token.push(VERSION);
        token.extend_from_slice(&timestamp.to_be_bytes());
        token.extend_from_slice(&iv);
        token.extend_from_slice(&ciphertext);

        let mut mac = self.mac()?;
        mac.update(&token);
        token.extend_from_slice(&mac.finalize().into_bytes());

        Ok(URL_SAFE.encode(token))
    }

    /// Timestamp embedded in a token, without verifying it.
    pub fn timestamp(token: &str) -> Result<u64> {
        let raw = decode_token(token)?;
        let mut ts = [0u8; 8];
        ts.copy_from_slice(&raw[1..9]);
        Ok(u64::from_be_bytes(ts))
    }
}

impl std::fmt::Debug for Fernet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fernet").field("key", &"[REDACTED]").finish()
    }
}

impl Cipher for Fernet {
    fn name(&self) -> &'static str {
        "fernet"
    }

    fn encrypt(&self, plaintext: &[u8]) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let mut iv = [0u8; IV_LEN];
        OsRng.fill_bytes(&mut iv);
        let timestamp = u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0);

        let token = self.encrypt_at(plaintext, timestamp, iv)?;
        trace!(token_len = token.len(), "encrypted");
        Ok(token)
    }

    fn decrypt(&self, token: &str) -> Result<Vec<u8>> {
        trace!(token_len = token.len(), "decrypting");

        let raw = decode_token(token)?;
        let (signed, tag) = raw.split_at(raw.len() - MAC_LEN);

        let mut mac = self.mac()?;
        mac.update(signed);
        mac.verify_slice(tag).map_err(|_| CipherError::Authentication)?;

        let mut iv = [0u8; IV_LEN];
        iv.copy_from_slice(&signed[9..HEADER_LEN]);
        let plaintext = Aes128CbcDec::new(&self.encryption_key.into(), &iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(&signed[HEADER_LEN..])
            .map_err(|_| CipherError::Authentication)?;

        trace!(plaintext_len = plaintext.len(), "decrypted");
        Ok(plaintext)
    }
}

/// Base64-decode a token and check its framing.
fn decode_token(token: &str) -> Result<Vec<u8>> {
    let raw = URL_SAFE
        .decode(token.trim().as_bytes())
        .map_err(|e| CipherError::MalformedToken(e.to_string()))?;

    if raw.len() < HEADER_LEN + BLOCK_LEN + MAC_LEN {
        return Err(
            CipherError::MalformedToken(format!("token too short ({} bytes)", raw.len())).into(),
        );
    }
    if raw[0] != VERSION {
        return Err(
            CipherError::MalformedToken(format!("unknown version 0x{:02x}", raw[0])).into(),
        );
    }
    if (raw.len() - HEADER_LEN - MAC_LEN) % BLOCK_LEN != 0 {
        return Err(CipherError::MalformedToken("ciphertext is not block aligned".into()).into());
    }

    Ok(raw)
}
