//! Named stepping operations applied to a [`CidrAddress`] in sequence.

use crate::error::Result;
use crate::models::CidrAddress;
use std::fmt;
use std::str::FromStr;

/// One stepping operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    NextHost,
    PrevHost,
    NextSubnet,
    PrevSubnet,
    GrowPrefix,
    ShrinkPrefix,
}

impl Step {
    pub const ALL: [Step; 6] = [
        Step::NextHost,
        Step::PrevHost,
        Step::NextSubnet,
        Step::PrevSubnet,
        Step::GrowPrefix,
        Step::ShrinkPrefix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::NextHost => "next-host",
            Step::PrevHost => "prev-host",
            Step::NextSubnet => "next-subnet",
            Step::PrevSubnet => "prev-subnet",
            Step::GrowPrefix => "grow-prefix",
            Step::ShrinkPrefix => "shrink-prefix",
        }
    }

    pub fn apply(&self, cidr: &CidrAddress) -> Result<CidrAddress> {
        match self {
            Step::NextHost => cidr.next_host(),
            Step::PrevHost => cidr.prev_host(),
            Step::NextSubnet => cidr.next_subnet(),
            Step::PrevSubnet => cidr.prev_subnet(),
            Step::GrowPrefix => cidr.grow_prefix(),
            Step::ShrinkPrefix => cidr.shrink_prefix(),
        }
    }
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Step::ALL
            .into_iter()
            .find(|step| step.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = Step::ALL.iter().map(|s| s.as_str()).collect();
                format!("unknown step '{s}', expected one of: {}", names.join(", "))
            })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Apply `steps` left to right.
///
/// # Arguments
/// * `cidr` - Starting block
/// * `steps` - Operations to apply in order
///
/// # Returns
/// * `Ok(CidrAddress)` - The block after every step
/// * `Err` - The error of the first failing step; later steps are not run
pub fn apply_steps(cidr: CidrAddress, steps: &[Step]) -> Result<CidrAddress> {
    steps.iter().try_fold(cidr, |current, step| {
        let next = step.apply(&current);
        match &next {
            Ok(n) => log::debug!("{step}: {current} -> {n}"),
            Err(e) => log::warn!("{step} failed on {current}: {e}"),
        }
        next
    })
}
