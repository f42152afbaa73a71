use std::{cmp::Ordering, collections::BTreeMap, fmt::Display};

/// Product of named symbols, each raised to a positive power.
///
/// Ordered lexicographically: the alphabetically first symbol is the most significant,
/// so `x0 > x1^5 > x1 > 1`. The order is multiplicative, which exact division relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Monomial {
    powers: BTreeMap<String, u32>,
}

impl Monomial {
    /// The empty product, `1`.
    pub fn one() -> Self {
        Monomial { powers: BTreeMap::new() }
    }

    pub fn symbol(name: &str) -> Self {
        Monomial { powers: BTreeMap::from([(name.to_string(), 1)]) }
    }

    pub fn is_one(&self) -> bool {
        self.powers.is_empty()
    }

    pub fn degree_in(&self, name: &str) -> u32 {
        self.powers.get(name).copied().unwrap_or(0)
    }

    pub fn powers(&self) -> impl Iterator<Item = (&str, u32)> {
        self.powers.iter().map(|(name, power)| (name.as_str(), *power))
    }

    pub fn mul(&self, other: &Monomial) -> Monomial {
        let mut powers = self.powers.clone();
        for (name, power) in &other.powers {
            *powers.entry(name.clone()).or_insert(0) += power;
        }
        Monomial { powers }
    }

    /// `self / other`, when `other` divides `self`.
    pub fn checked_div(&self, other: &Monomial) -> Option<Monomial> {
        let mut powers = self.powers.clone();
        for (name, power) in &other.powers {
            let own = powers.get_mut(name)?;
            match (*own).cmp(power) {
                Ordering::Less => return None,
                Ordering::Equal => {
                    powers.remove(name);
                }
                Ordering::Greater => *own -= power,
            }
        }
        Some(Monomial { powers })
    }

    /// Greatest common divisor, the symbol-wise minimum of the powers.
    pub fn gcd(&self, other: &Monomial) -> Monomial {
        let powers = self
            .powers
            .iter()
            .filter_map(|(name, power)| {
                other.powers.get(name).map(|theirs| (name.clone(), *power.min(theirs)))
            })
            .collect();
        Monomial { powers }
    }
}

impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        let mut left = self.powers.iter();
        let mut right = other.powers.iter();
        let (mut l, mut r) = (left.next(), right.next());

        // walk both in name order, the first name with different powers decides
        loop {
            match (l, r) {
                (None, None) => return Ordering::Equal,
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (Some((l_name, l_power)), Some((r_name, r_power))) => {
                    match l_name.cmp(r_name) {
                        Ordering::Less => return Ordering::Greater,
                        Ordering::Greater => return Ordering::Less,
                        Ordering::Equal => match l_power.cmp(r_power) {
                            Ordering::Equal => (l, r) = (left.next(), right.next()),
                            ordering => return ordering,
                        },
                    }
                }
            }
        }
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Monomial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }
        let factors: Vec<String> = self
            .powers
            .iter()
            .map(|(name, power)| match power {
                1 => name.clone(),
                _ => format!("{}^{}", name, power),
            })
            .collect();
        write!(f, "{}", factors.join("*"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monomial(powers: &[(&str, u32)]) -> Monomial {
        let mut result = Monomial::one();
        for (name, power) in powers {
            for _ in 0..*power {
                result = result.mul(&Monomial::symbol(name));
            }
        }
        result
    }

    #[test]
    fn lexicographic_order() {
        let x0 = monomial(&[("x0", 1)]);
        let x1_5 = monomial(&[("x1", 5)]);
        let x1 = monomial(&[("x1", 1)]);

        assert!(x0 > x1_5);
        assert!(x1_5 > x1);
        assert!(x1 > Monomial::one());
        assert!(monomial(&[("x0", 1), ("x1", 1)]) > x0);
    }

    #[test]
    fn order_is_multiplicative() {
        let a = monomial(&[("x0", 1)]);
        let b = monomial(&[("x1", 3)]);
        let c = monomial(&[("x1", 1), ("y0", 2)]);

        assert!(a > b);
        assert!(a.mul(&c) > b.mul(&c));
    }

    #[test]
    fn division() {
        let a = monomial(&[("x0", 2), ("y1", 1)]);
        let b = monomial(&[("x0", 1)]);

        assert_eq!(a.checked_div(&b), Some(monomial(&[("x0", 1), ("y1", 1)])));
        assert_eq!(b.checked_div(&a), None);
        assert_eq!(a.checked_div(&a), Some(Monomial::one()));
    }

    #[test]
    fn gcd() {
        let a = monomial(&[("x0", 2), ("y1", 1)]);
        let b = monomial(&[("x0", 1), ("x1", 4)]);

        assert_eq!(a.gcd(&b), monomial(&[("x0", 1)]));
        assert_eq!(a.gcd(&Monomial::one()), Monomial::one());
    }

    #[test]
    fn display() {
        assert_eq!(monomial(&[("x0", 2), ("y1", 1)]).to_string(), "x0^2*y1");
        assert_eq!(Monomial::one().to_string(), "1");
    }
}
