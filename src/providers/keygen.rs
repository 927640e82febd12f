//! TRON account generation
//!
//! secp256k1 secret from the OS CSPRNG -> uncompressed public key ->
//! Keccak-256 of the 64-byte point -> last 20 bytes -> `0x41` prefix ->
//! Base58Check.

use alloy_primitives::keccak256;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::SecretKey;
use rand::rngs::OsRng;

use crate::models::errors::{AppError, AppResult};
use crate::models::types::{Account, AccountAddress};
use crate::utils::constants::{TRON_ADDRESS_LEN, TRON_ADDRESS_PREFIX};

/// Source of fresh accounts
pub trait AccountProvider: Send + Sync {
    fn create_account(&self) -> AppResult<Account>;
}

/// Random TRON mainnet accounts
#[derive(Debug, Clone, Copy, Default)]
pub struct TronKeyGenerator;

impl AccountProvider for TronKeyGenerator {
    fn create_account(&self) -> AppResult<Account> {
        let secret = SecretKey::random(&mut OsRng);
        Ok(account_from_key(&secret))
    }
}

/// Derive the account for a fixed 32-byte secret
pub fn account_from_secret(secret: &[u8; 32]) -> AppResult<Account> {
    let secret = SecretKey::from_slice(secret)
        .map_err(|_| AppError::keygen("secret is not a valid secp256k1 scalar"))?;
    Ok(account_from_key(&secret))
}

fn account_from_key(secret: &SecretKey) -> Account {
    let point = secret.public_key().to_encoded_point(false);
    let uncompressed = point.as_bytes();

    // skip the 0x04 SEC1 tag
    let digest = keccak256(&uncompressed[1..]);

    let mut payload = [0u8; TRON_ADDRESS_LEN];
    payload[0] = TRON_ADDRESS_PREFIX;
    payload[1..].copy_from_slice(&digest[12..]);

    Account {
        private_key: hex::encode_upper(secret.to_bytes()),
        public_key: hex::encode_upper(uncompressed),
        address: AccountAddress {
            base58: bs58::encode(payload).with_check().into_string(),
            hex: hex::encode_upper(payload),
        },
    }
}
