//! Categories, amounts and allocation states.

pub mod baseline;

use std::fmt::{Display, Formatter};
use std::ops::Index;
use std::str::FromStr;

use itertools::Itertools;
use thiserror::Error;

/// Integer amount of money, minor-unit agnostic (whole rupiah in practice).
pub type Money = i64;

/// The seven spending buckets of a monthly budget.
///
/// The declaration order is the canonical order: neighbor enumeration and every
/// tie-break in the engines follow it, so identical inputs give identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Kos,
    Makan,
    Transport,
    Internet,
    Jajan,
    Hiburan,
    Tabungan,
}

impl Category {
    pub const COUNT: usize = 7;

    /// Every category, in canonical order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Kos,
        Category::Makan,
        Category::Transport,
        Category::Internet,
        Category::Jajan,
        Category::Hiburan,
        Category::Tabungan,
    ];

    /// The savings bucket, semantically distinguished from the spending ones.
    pub const SAVINGS: Category = Category::Tabungan;

    pub fn name(self) -> &'static str {
        match self {
            Category::Kos => "kos",
            Category::Makan => "makan",
            Category::Transport => "transport",
            Category::Internet => "internet",
            Category::Jajan => "jajan",
            Category::Hiburan => "hiburan",
            Category::Tabungan => "tabungan",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A complete assignment of an amount to every category.
///
/// Value-typed: `with` produces a new allocation and the original is untouched.
/// Internal mutation through [`Allocation::set`] never escapes the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Allocation {
    amounts: [Money; Category::COUNT],
}

impl Allocation {
    /// Every category at zero.
    pub fn new() -> Allocation {
        Allocation::default()
    }

    /// Builds an allocation by evaluating `f` on each category.
    pub fn from_fn(mut f: impl FnMut(Category) -> Money) -> Allocation {
        let mut amounts = [0; Category::COUNT];
        for (slot, cat) in amounts.iter_mut().zip(Category::ALL) {
            *slot = f(cat);
        }
        Allocation { amounts }
    }

    /// A copy of `self` with `cat` set to `amount`.
    pub fn with(mut self, cat: Category, amount: Money) -> Allocation {
        self.amounts[cat as usize] = amount;
        self
    }

    pub(crate) fn set(&mut self, cat: Category, amount: Money) {
        self.amounts[cat as usize] = amount;
    }

    pub fn total(&self) -> Money {
        self.amounts.iter().sum()
    }

    pub fn savings(&self) -> Money {
        self[Category::SAVINGS]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self[c]))
    }

    /// True iff every category sits at or above its floor.
    pub fn meets_floors(&self, floors: &Floors) -> bool {
        Category::ALL.into_iter().all(|c| self[c] >= floors[c])
    }

    /// True iff the total does not exceed `income`.
    pub fn within_income(&self, income: Money) -> bool {
        self.total() <= income
    }
}

impl Index<Category> for Allocation {
    type Output = Money;

    fn index(&self, cat: Category) -> &Money {
        &self.amounts[cat as usize]
    }
}

impl Display for Allocation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.iter().map(|(c, a)| format!("{c}={a}")).format(" "))
    }
}

/// Per-category lower bounds. The solver never invents floors: callers either
/// keep the defaults or supply their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Floors {
    minimums: [Money; Category::COUNT],
}

impl Default for Floors {
    /// Transport and internet are never starved; everything else may hit zero.
    fn default() -> Floors {
        Floors::none()
            .with(Category::Transport, 10_000)
            .with(Category::Internet, 5_000)
    }
}

impl Floors {
    /// No lower bound on any category.
    pub fn none() -> Floors {
        Floors {
            minimums: [0; Category::COUNT],
        }
    }

    /// A copy of `self` with the floor of `cat` set to `minimum`.
    pub fn with(mut self, cat: Category, minimum: Money) -> Floors {
        self.minimums[cat as usize] = minimum;
        self
    }

    /// Income required to satisfy every floor simultaneously.
    pub fn total(&self) -> Money {
        self.minimums.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self[c]))
    }
}

impl Index<Category> for Floors {
    type Output = Money;

    fn index(&self, cat: Category) -> &Money {
        &self.minimums[cat as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_stable() {
        let names: Vec<_> = Category::ALL.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            ["kos", "makan", "transport", "internet", "jajan", "hiburan", "tabungan"]
        );
        assert_eq!(Category::SAVINGS, Category::Tabungan);
    }

    #[test]
    fn category_round_trips_through_names() {
        for cat in Category::ALL {
            assert_eq!(cat.name().parse::<Category>(), Ok(cat));
        }
        assert!("belanja".parse::<Category>().is_err());
    }

    #[test]
    fn with_is_a_snapshot() {
        let a = Allocation::new().with(Category::Kos, 800_000);
        let b = a.with(Category::Makan, 650_000);
        assert_eq!(a[Category::Makan], 0);
        assert_eq!(b[Category::Kos], 800_000);
        assert_eq!(b.total(), 1_450_000);
    }

    #[test]
    fn default_floors_keep_essentials_funded() {
        let floors = Floors::default();
        assert_eq!(floors[Category::Transport], 10_000);
        assert_eq!(floors[Category::Internet], 5_000);
        assert_eq!(floors.total(), 15_000);
    }

    #[test]
    fn feasibility_helpers() {
        let floors = Floors::default();
        let at_floors = Allocation::from_fn(|c| floors[c]);
        assert!(at_floors.meets_floors(&floors));
        assert!(at_floors.within_income(15_000));
        assert!(!at_floors.within_income(14_999));
        assert!(!at_floors.with(Category::Internet, 0).meets_floors(&floors));
    }
}
