use serde::{Deserialize, Serialize};

/// Raised when a profile value cannot be read as a number.
///
/// The evaluator treats an invalid value conservatively: it fails every
/// non-wildcard band predicate instead of guessing a band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("value is not a valid number")]
pub struct InvalidValue;

/// Labeled range a raw numeric profile value classifies into.
pub trait Band: Copy + PartialEq {
    fn classify(value: u64) -> Self;
    fn from_label(label: &str) -> Option<Self>
    where
        Self: Sized;
    fn label(&self) -> &'static str;
}

/// Age bands used by scheme eligibility predicates.
///
/// Bands are half-open on their lower edge. The last bounded band keeps its
/// upper edge so the open band starts strictly above it: 25 classifies as
/// `25-40`, 40 as `40-60`, and `Above 60` begins at 61.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "Below 25")]
    Below25,
    #[serde(rename = "25-40")]
    From25To40,
    #[serde(rename = "40-60")]
    From40To60,
    #[serde(rename = "Above 60")]
    Above60,
}

impl Band for AgeBand {
    fn classify(value: u64) -> Self {
        if value < 25 {
            AgeBand::Below25
        } else if value < 40 {
            AgeBand::From25To40
        } else if value <= 60 {
            AgeBand::From40To60
        } else {
            AgeBand::Above60
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Below 25" => Some(AgeBand::Below25),
            "25-40" => Some(AgeBand::From25To40),
            "40-60" => Some(AgeBand::From40To60),
            "Above 60" => Some(AgeBand::Above60),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AgeBand::Below25 => "Below 25",
            AgeBand::From25To40 => "25-40",
            AgeBand::From40To60 => "40-60",
            AgeBand::Above60 => "Above 60",
        }
    }
}

/// Annual income bands, in rupees. Same boundary rule as [`AgeBand`]:
/// 250000 classifies as `2.5L-5L` and 1000000 as `5L-10L`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeBand {
    #[serde(rename = "Below 2.5L")]
    Below2_5L,
    #[serde(rename = "2.5L-5L")]
    From2_5LTo5L,
    #[serde(rename = "5L-10L")]
    From5LTo10L,
    #[serde(rename = "Above 10L")]
    Above10L,
}

impl Band for IncomeBand {
    fn classify(value: u64) -> Self {
        if value < 250_000 {
            IncomeBand::Below2_5L
        } else if value < 500_000 {
            IncomeBand::From2_5LTo5L
        } else if value <= 1_000_000 {
            IncomeBand::From5LTo10L
        } else {
            IncomeBand::Above10L
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Below 2.5L" => Some(IncomeBand::Below2_5L),
            "2.5L-5L" => Some(IncomeBand::From2_5LTo5L),
            "5L-10L" => Some(IncomeBand::From5LTo10L),
            "Above 10L" => Some(IncomeBand::Above10L),
            _ => None,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            IncomeBand::Below2_5L => "Below 2.5L",
            IncomeBand::From2_5LTo5L => "2.5L-5L",
            IncomeBand::From5LTo10L => "5L-10L",
            IncomeBand::Above10L => "Above 10L",
        }
    }
}
