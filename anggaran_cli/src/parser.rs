//! Problem file parsing.
//!
//! Line-oriented format, one directive per line, `#` starts a comment:
//!
//! ```text
//! income 2000000
//! step 50000            # optional, defaults to 50000
//! target 500000         # optional, defaults to 0 (no savings objective)
//! floor transport 10000 # optional, overrides the default floors
//! kos 800000            # one line per category
//! ...
//! ```
//!
//! Every category must be assigned exactly once, except `tabungan` which may
//! be omitted and then starts at 0.

use anyhow::Context;
use anyhow::bail;
use anyhow::ensure;

use anggaran::budget::Allocation;
use anggaran::budget::Category;
use anggaran::budget::Floors;
use anggaran::budget::Money;
use anggaran::problem::Problem;

const DEFAULT_STEP: Money = 50_000;

pub fn parse_problem(input: &str) -> anyhow::Result<Problem> {
    let mut income: Option<Money> = None;
    let mut step: Option<Money> = None;
    let mut target: Option<Money> = None;
    let mut floors = Floors::default();
    let mut start = Allocation::new();
    let mut assigned = [false; Category::COUNT];

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        let context = || format!("line {}: '{raw}'", idx + 1);

        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            ["income", amount] => {
                ensure!(income.is_none(), "duplicate income directive ({})", context());
                income = Some(parse_amount(amount).with_context(context)?);
            }
            ["step", amount] => {
                ensure!(step.is_none(), "duplicate step directive ({})", context());
                step = Some(parse_amount(amount).with_context(context)?);
            }
            ["target", amount] => {
                ensure!(target.is_none(), "duplicate target directive ({})", context());
                target = Some(parse_amount(amount).with_context(context)?);
            }
            ["floor", cat, amount] => {
                let cat: Category = cat.parse().with_context(context)?;
                floors = floors.with(cat, parse_amount(amount).with_context(context)?);
            }
            [cat, amount] => {
                let cat: Category = cat.parse().with_context(context)?;
                ensure!(
                    !assigned[cat as usize],
                    "category '{cat}' assigned twice ({})",
                    context()
                );
                assigned[cat as usize] = true;
                start = start.with(cat, parse_amount(amount).with_context(context)?);
            }
            _ => bail!("unrecognized directive ({})", context()),
        }
    }

    let income = income.context("missing income directive")?;
    for cat in Category::ALL {
        // The savings bucket may be left out; it then starts empty.
        ensure!(
            assigned[cat as usize] || cat == Category::SAVINGS,
            "category '{cat}' is never assigned"
        );
    }

    Problem::new(
        start,
        income,
        floors,
        target.unwrap_or(0),
        step.unwrap_or(DEFAULT_STEP),
    )
    .map_err(Into::into)
}

fn parse_amount(token: &str) -> anyhow::Result<Money> {
    token
        .parse()
        .with_context(|| format!("'{token}' is not an integer amount"))
}
