#![cfg(test)]

use anyhow::{anyhow, bail, Context, Result};

use crate::{limb::Limb, stride::Strideable, wide::Wide, I128, U128};

const VECTORS: &str = include_str!("vectors.txt");

pub fn parse(s: &str) -> Result<Vec<Case<'_>>> {
    let mut cases = Vec::new();
    for (i, line) in s.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("--") {
            // A comment.
            continue;
        }

        let (lhs, rhs) = line
            .split_once(" -> ")
            .with_context(|| format!("#{i}: test case missing `->`: `{line}`"))?;
        let mut lhs = lhs.split_whitespace();
        let op = lhs
            .next()
            .with_context(|| format!("#{i}: test case missing op: `{line}`"))?;
        let ty = lhs
            .next()
            .with_context(|| format!("#{i}: test case missing type: `{line}`"))?;
        let case = Case {
            line: i + 1,
            op: Op::try_from_str(op).with_context(|| format!("#{i}: invalid op: `{op}`"))?,
            ty,
            args: lhs.collect(),
            want: rhs.split_whitespace().collect(),
        };
        cases.push(case);
    }
    assert!(!cases.is_empty());
    Ok(cases)
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Op {
    Neg,
    Rotl,
    Rotr,
    Dist,
    Adv,
}

impl Op {
    fn try_from_str(s: &str) -> Result<Self> {
        let op = match s {
            "neg" => Self::Neg,
            "rotl" => Self::Rotl,
            "rotr" => Self::Rotr,
            "dist" => Self::Dist,
            "adv" => Self::Adv,
            _ => bail!("unknown op: `{s}`"),
        };
        Ok(op)
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Case<'a> {
    pub line: usize,
    pub op: Op,
    pub ty: &'a str,
    pub args: Vec<&'a str>,
    pub want: Vec<&'a str>,
}

impl Case<'_> {
    fn arg(&self, i: usize) -> Result<&str> {
        self.args
            .get(i)
            .copied()
            .ok_or_else(|| anyhow!("line {}: missing argument #{i}", self.line))
    }

    fn want(&self, i: usize) -> Result<&str> {
        self.want
            .get(i)
            .copied()
            .ok_or_else(|| anyhow!("line {}: missing result #{i}", self.line))
    }

    pub fn run<H: Limb, L: Limb>(&self) -> Result<()>
    where
        Wide<H, L>: Limb,
    {
        match self.op {
            Op::Neg => {
                let x = parse_hex::<H, L>(self.arg(0)?)?;
                let want = parse_hex::<H, L>(self.want(0)?)?;
                let overflow = parse_bool(self.want(1)?)?;
                let got = x.overflowing_neg();
                if got != (want, overflow) {
                    bail!(
                        "line {}: -{x:?} = {got:?}, expected ({want:?}, {overflow})",
                        self.line
                    );
                }
            }
            Op::Rotl | Op::Rotr => {
                let x = parse_hex::<H, L>(self.arg(0)?)?;
                let count = parse_i64(self.arg(1)?)?;
                let want = parse_hex::<H, L>(self.want(0)?)?;
                let got = if self.op == Op::Rotl {
                    x.rotate_left(count)
                } else {
                    x.rotate_right(count)
                };
                if got != want {
                    bail!(
                        "line {}: {:?}({x:?}, {count}) = {got:?}, expected {want:?}",
                        self.line,
                        self.op
                    );
                }
            }
            Op::Dist => {
                let x = parse_hex::<H, L>(self.arg(0)?)?;
                let y = parse_hex::<H, L>(self.arg(1)?)?;
                let want = match self.want(0)? {
                    "trap" => None,
                    s => Some(parse_i64(s)?),
                };
                let got = x.checked_distance_to(y);
                if got != want {
                    bail!(
                        "line {}: {x:?}.distance_to({y:?}) = {got:?}, expected {want:?}",
                        self.line
                    );
                }
            }
            Op::Adv => {
                let x = parse_hex::<H, L>(self.arg(0)?)?;
                let n = parse_i64(self.arg(1)?)?;
                let want = match self.want(0)? {
                    "overflow" => None,
                    s => Some(parse_hex::<H, L>(s)?),
                };
                let got = x.checked_advanced_by(n);
                if got != want {
                    bail!(
                        "line {}: {x:?}.advanced_by({n}) = {got:?}, expected {want:?}",
                        self.line
                    );
                }
            }
        }
        Ok(())
    }
}

/// Parses a `0x`-prefixed bit pattern, most significant digit
/// first.
fn parse_hex<H: Limb, L: Limb>(s: &str) -> Result<Wide<H, L>>
where
    Wide<H, L>: Limb,
{
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| anyhow!("missing `0x` prefix: `{s}`"))?;
    let n = Wide::<H, L>::WORDS;
    if digits.is_empty() || digits.len() > 16 * n {
        bail!("invalid length for {} bits: `{s}`", Wide::<H, L>::BITS);
    }
    let mut words = vec![0u64; n];
    let mut end = digits.len();
    for w in &mut words {
        if end == 0 {
            break;
        }
        let start = end.saturating_sub(16);
        let chunk = digits
            .get(start..end)
            .with_context(|| format!("invalid hex: `{s}`"))?;
        *w = u64::from_str_radix(chunk, 16).with_context(|| format!("invalid hex: `{s}`"))?;
        end = start;
    }
    Ok(Wide::from_word_slice(&words))
}

fn parse_i64(s: &str) -> Result<i64> {
    s.parse()
        .with_context(|| format!("unable to parse i64: `{s}`"))
}

fn parse_bool(s: &str) -> Result<bool> {
    match s {
        "0" => Ok(false),
        "1" => Ok(true),
        _ => bail!("invalid flag: `{s}`"),
    }
}

#[test]
fn test_vectors() -> Result<()> {
    let cases = parse(VECTORS)?;
    for c in &cases {
        match c.ty {
            "U128" => c.run::<u64, u64>(),
            "I128" => c.run::<i64, u64>(),
            "U256" => c.run::<U128, U128>(),
            "I256" => c.run::<I128, U128>(),
            ty => Err(anyhow!("line {}: unknown type: `{ty}`", c.line)),
        }?;
    }
    Ok(())
}
