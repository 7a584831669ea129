//! Publication cadence for periodicals and subscriptions.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// How often a periodical appears.
///
/// The same enum doubles as the optional subscription cadence on an
/// [`Order`](crate::order::Order); the two uses are independent and are
/// never cross-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cadence {
    Daily,
    Weekly,
    Monthly,
}

impl Display for Cadence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Cadence::Daily => "Daily",
            Cadence::Weekly => "Weekly",
            Cadence::Monthly => "Monthly",
        };
        write!(f, "{}", name)
    }
}
