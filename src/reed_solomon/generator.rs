//! Generator polynomial construction

use super::galois::Gf256;
use super::poly::Poly;

/// `g(x) = (x - α^0)(x - α^1)···(x - α^(2t-1))`
///
/// Subtraction is XOR, so each factor is `[1, α^i]`. The result is monic of
/// degree `2t`; `t = 0` gives the constant `1`.
pub fn build_generator(gf: &Gf256, t: usize) -> Poly {
    (0..2 * t).fold(Poly::one(), |g, i| {
        g.mul(gf, &Poly::new(&[1, gf.alpha_pow(i)]))
    })
}
