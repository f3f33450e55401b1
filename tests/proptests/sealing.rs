//! Property tests for sealing shares to custodians

use quickcheck_macros::quickcheck;
use rand::rngs::OsRng;
use shamir_vault::domain::SplitConfig;
use shamir_vault::splitter::split_secret;
use shamir_vault::vault::{CustodianSecretKey, SEALED_SHARE_SIZE, seal, unseal};

use crate::support::{ValidParams, ValidSecret};

/// Sealing then unsealing with the matching key returns the same share
#[quickcheck]
fn prop_seal_unseal_identity(secret: ValidSecret, params: ValidParams) -> bool {
    let ValidSecret(secret) = secret;
    let config = SplitConfig::from_counts(params.num_shares, params.threshold).unwrap();
    let set = split_secret(&secret, config).unwrap();

    set.shares().iter().all(|share| {
        let key = CustodianSecretKey::generate();
        let custodian = key.custodian("custodian@example.org");
        let Ok(sealed) = seal(share, &custodian, &mut OsRng) else {
            return false;
        };
        sealed.bytes().len() == SEALED_SHARE_SIZE
            && unseal(&sealed, &key).is_ok_and(|opened| &opened == share)
    })
}

/// A different key never opens a sealed share
#[quickcheck]
fn prop_wrong_key_rejected(secret: ValidSecret) -> bool {
    let ValidSecret(secret) = secret;
    let set = split_secret(&secret, SplitConfig::from_counts(1, 1).unwrap()).unwrap();

    let intended = CustodianSecretKey::generate().custodian("intended@example.org");
    let sealed = seal(&set.shares()[0], &intended, &mut OsRng).unwrap();

    unseal(&sealed, &CustodianSecretKey::generate()).is_err()
}
