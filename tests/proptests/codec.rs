//! Property tests for secret encoding and share serialization

use quickcheck_macros::quickcheck;
use shamir_vault::codec;
use shamir_vault::domain::{SplitConfig, XCoordinates};
use shamir_vault::splitter::split_secret;

use crate::support::{ValidParams, ValidSecret};

/// Every valid secret decodes back to itself
#[quickcheck]
fn prop_encode_decode_identity(secret: ValidSecret) -> bool {
    let ValidSecret(secret) = secret;
    let Ok(element) = codec::encode(&secret) else {
        return false;
    };
    codec::decode(&element).is_ok_and(|decoded| decoded == secret)
}

/// Shares survive the binary form used inside sealed records
#[quickcheck]
fn prop_share_bytes_preserved(secret: ValidSecret, params: ValidParams) -> bool {
    let ValidSecret(secret) = secret;
    let config = SplitConfig::from_counts(params.num_shares, params.threshold)
        .unwrap()
        .with_x_coordinates(XCoordinates::Random);
    let set = split_secret(&secret, config).unwrap();

    set.shares().iter().all(|share| {
        let bytes = codec::share_to_bytes(share);
        bytes.len() == codec::SHARE_BYTES
            && codec::share_from_bytes(&bytes).is_ok_and(|parsed| &parsed == share)
    })
}

/// The plain-text share format parses back to the same shares
#[quickcheck]
fn prop_share_text_preserved(secret: ValidSecret, params: ValidParams) -> bool {
    let ValidSecret(secret) = secret;
    let config = SplitConfig::from_counts(params.num_shares, params.threshold).unwrap();
    let set = split_secret(&secret, config).unwrap();

    let text = codec::format_shares(set.shares());
    codec::parse_shares(&text).is_ok_and(|parsed| parsed == set.shares())
}
