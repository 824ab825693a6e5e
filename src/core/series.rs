use std::ops::{AddAssign, Index};

/// A generating function over the number of cards drawn, truncated at a
/// fixed degree.
///
/// Coefficient `d` counts the ways something can be made with exactly `d`
/// drawn cards. Multiplying two series combines two disjoint parts of the
/// deck. Nothing above the draw size is ever kept, so coefficients stay
/// counts of real card subsets and are bounded by the number of possible
/// draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    coeffs: Vec<u128>,
}

impl Series {
    /// The series `0`.
    pub fn zero(max_degree: usize) -> Self {
        Self {
            coeffs: vec![0; max_degree + 1],
        }
    }

    /// The series `1`: one way to draw nothing.
    pub fn one(max_degree: usize) -> Self {
        Self::monomial(1, 0, max_degree)
    }

    /// `coeff * x^degree`, which is zero when the degree is past the cap.
    pub fn monomial(coeff: u128, degree: usize, max_degree: usize) -> Self {
        let mut series = Self::zero(max_degree);
        if degree <= max_degree {
            series.coeffs[degree] = coeff;
        }
        series
    }

    /// Build from `(degree, coeff)` terms, summing repeated degrees and
    /// dropping anything past the cap.
    pub fn from_terms<I>(terms: I, max_degree: usize) -> Self
    where
        I: IntoIterator<Item = (usize, u128)>,
    {
        let mut series = Self::zero(max_degree);
        for (degree, coeff) in terms {
            if degree <= max_degree {
                series.coeffs[degree] += coeff;
            }
        }
        series
    }

    pub fn max_degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0)
    }

    /// Coefficient of `x^degree`, zero past the cap.
    pub fn coeff(&self, degree: usize) -> u128 {
        self.coeffs.get(degree).copied().unwrap_or(0)
    }

    /// Truncated product.
    pub fn mul(&self, other: &Series) -> Series {
        let max_degree = self.max_degree();
        let mut out = Series::zero(max_degree);
        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in other.coeffs.iter().take(max_degree + 1 - i).enumerate() {
                if b != 0 {
                    out.coeffs[i + j] += a * b;
                }
            }
        }
        out
    }

    /// Multiply every coefficient by a constant.
    pub fn scale(&self, factor: u128) -> Series {
        Series {
            coeffs: self.coeffs.iter().map(|&c| c * factor).collect(),
        }
    }

    /// Multiply by `x^degree`.
    pub fn shift(&self, degree: usize) -> Series {
        let max_degree = self.max_degree();
        let keep = (max_degree + 1).saturating_sub(degree);
        let mut out = Series::zero(max_degree);
        for (i, &c) in self.coeffs.iter().enumerate().take(keep) {
            out.coeffs[i + degree] = c;
        }
        out
    }

    /// `self^0, self^1, ..., self^max_power`, all truncated.
    pub fn powers(&self, max_power: usize) -> Vec<Series> {
        let mut powers = Vec::with_capacity(max_power + 1);
        powers.push(Series::one(self.max_degree()));
        for p in 1..=max_power {
            let next = powers[p - 1].mul(self);
            powers.push(next);
        }
        powers
    }
}

impl AddAssign<&Series> for Series {
    fn add_assign(&mut self, rhs: &Series) {
        for (a, &b) in self.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *a += b;
        }
    }
}

impl Index<usize> for Series {
    type Output = u128;

    fn index(&self, index: usize) -> &u128 {
        &self.coeffs[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_truncates() {
        // (1 + x)^2 = 1 + 2x + x^2, capped at x^1
        let a = Series::from_terms([(0, 1), (1, 1)], 1);
        let sq = a.mul(&a);
        assert_eq!(1, sq.coeff(0));
        assert_eq!(2, sq.coeff(1));
        assert_eq!(0, sq.coeff(2));
    }

    #[test]
    fn test_powers_are_binomials() {
        // (1 + x)^4 has the 4th row of Pascal's triangle.
        let a = Series::from_terms([(0, 1), (1, 1)], 4);
        let powers = a.powers(4);
        assert_eq!(5, powers.len());
        let expected = [1, 4, 6, 4, 1];
        for (d, e) in expected.iter().enumerate() {
            assert_eq!(*e, powers[4][d]);
        }
        assert_eq!(Series::one(4), powers[0]);
    }

    #[test]
    fn test_shift_and_scale() {
        let a = Series::from_terms([(0, 2), (1, 3)], 3);
        let s = a.shift(2).scale(5);
        assert_eq!(0, s.coeff(1));
        assert_eq!(10, s.coeff(2));
        assert_eq!(15, s.coeff(3));
        assert!(a.shift(4).is_zero());
    }

    #[test]
    fn test_add_assign() {
        let mut a = Series::monomial(3, 1, 2);
        a += &Series::monomial(4, 1, 2);
        assert_eq!(7, a[1]);
        assert!(Series::monomial(1, 3, 2).is_zero());
    }
}
