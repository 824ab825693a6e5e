use std::cmp::Ordering;
use std::fmt;

/// An exact probability, stored as a fraction in lowest terms.
///
/// Counts of card combinations are integers, so every probability this
/// library produces is a ratio of integers and is kept that way. Floating
/// point only appears when asked for with `to_f64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Probability {
    numerator: u128,
    denominator: u128,
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl Probability {
    pub const ZERO: Probability = Probability {
        numerator: 0,
        denominator: 1,
    };

    pub const ONE: Probability = Probability {
        numerator: 1,
        denominator: 1,
    };

    /// Build `favorable / outcomes`, reduced.
    ///
    /// ```
    /// use hand_odds::core::Probability;
    ///
    /// let p = Probability::new(36, 276);
    /// assert_eq!(3, p.numerator());
    /// assert_eq!(23, p.denominator());
    /// ```
    pub fn new(favorable: u128, outcomes: u128) -> Self {
        debug_assert!(outcomes != 0, "a probability needs at least one outcome");
        debug_assert!(favorable <= outcomes, "{favorable} of {outcomes} outcomes");
        let g = gcd(favorable, outcomes);
        if g == 0 {
            return Self::ZERO;
        }
        Self {
            numerator: favorable / g,
            denominator: outcomes / g,
        }
    }

    pub fn numerator(&self) -> u128 {
        self.numerator
    }

    pub fn denominator(&self) -> u128 {
        self.denominator
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_one(&self) -> bool {
        self.numerator == self.denominator
    }

    /// Lossy conversion for reporting and plotting.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Exact sum, or `None` if the common denominator does not fit.
    ///
    /// ```
    /// use hand_odds::core::Probability;
    ///
    /// let half = Probability::new(1, 2);
    /// let third = Probability::new(1, 3);
    /// assert_eq!(Some(Probability::new(5, 6)), half.checked_add(&third));
    /// ```
    pub fn checked_add(&self, other: &Probability) -> Option<Probability> {
        let g = gcd(self.denominator, other.denominator);
        let denominator = (self.denominator / g).checked_mul(other.denominator)?;
        let left = self.numerator.checked_mul(other.denominator / g)?;
        let right = other.numerator.checked_mul(self.denominator / g)?;
        let numerator = left.checked_add(right)?;
        let g = gcd(numerator, denominator);
        Some(Self {
            numerator: numerator / g,
            denominator: denominator / g,
        })
    }

    /// Complement, `1 - p`.
    pub fn complement(&self) -> Probability {
        Self {
            numerator: self.denominator - self.numerator,
            denominator: self.denominator,
        }
    }
}

/// Compare `a / b` with `c / d` by walking their continued fractions, so
/// nothing is ever cross multiplied.
fn cmp_fractions(mut a: u128, mut b: u128, mut c: u128, mut d: u128) -> Ordering {
    loop {
        let (q1, r1) = (a / b, a % b);
        let (q2, r2) = (c / d, c % d);
        if q1 != q2 {
            return q1.cmp(&q2);
        }
        match (r1 == 0, r2 == 0) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            // r1/b against r2/d is the same comparison as d/r2 against b/r1
            (false, false) => (a, b, c, d) = (d, r2, b, r1),
        }
    }
}

impl Ord for Probability {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_fractions(
            self.numerator,
            self.denominator,
            other.numerator,
            other.denominator,
        )
    }
}

impl PartialOrd for Probability {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}
