//! Chien search: locate the roots of Λ(x)

use super::berlekamp::ErrorLocator;
use super::error::{DecodeFailure, RsResult};
use super::galois::{Gf256, FIELD_ORDER};
use smallvec::SmallVec;

/// A located error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorLocation {
    /// Index into the codeword, 0 being the highest-order symbol
    pub position: usize,
    /// Power of x carried by that symbol, `n - 1 - position`
    pub power: usize,
    /// Location element `X = α^power`
    pub locator: u8,
}

/// Located errors, most come nowhere near the inline capacity
pub type ErrorLocations = SmallVec<[ErrorLocation; 32]>;

/// Try every non-zero field element `β = α^-p` as a root of Λ.
///
/// Each root marks the symbol carrying power `p`. Fails when the root count
/// differs from the locator degree, or when a root lands beyond the
/// `codeword_len` symbols of a shortened code.
pub fn chien_search(
    gf: &Gf256,
    locator: &ErrorLocator,
    codeword_len: usize,
) -> RsResult<ErrorLocations> {
    let mut locations = ErrorLocations::new();

    for power in 0..FIELD_ORDER {
        if locator.poly.eval(gf, gf.alpha_pow_inv(power)) != 0 {
            continue;
        }
        if power >= codeword_len {
            return Err(DecodeFailure::RootOutsideCodeword {
                power,
                codeword_len,
            }
            .into());
        }
        locations.push(ErrorLocation {
            position: codeword_len - 1 - power,
            power,
            locator: gf.alpha_pow(power),
        });
    }

    if locations.len() != locator.degree {
        return Err(DecodeFailure::RootCountMismatch {
            degree: locator.degree,
            roots: locations.len(),
        }
        .into());
    }

    locations.sort_unstable_by_key(|loc| loc.position);
    Ok(locations)
}
