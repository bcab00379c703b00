use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::Sum;
use std::ops::AddAssign;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{error, warn};

/// A non-negative transaction counter.
///
/// Upstream payloads are not fully trusted: a counter may be absent, null,
/// negative, fractional, or plain garbage. Absent and null values collapse
/// to zero silently; any other invalid value also collapses to zero but is
/// reported as a data-quality warning so dirty feeds remain visible.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Serialize)]
pub struct Count(u64);

impl Count {
    pub fn get(self) -> u64 {
        self.0
    }

    pub fn checked_add(self, rhs: Count) -> Option<Count> {
        self.0.checked_add(rhs.0).map(Count)
    }
}

impl From<u64> for Count {
    fn from(value: u64) -> Self {
        Count(value)
    }
}

impl AddAssign<Count> for Count {
    fn add_assign(&mut self, rhs: Count) {
        if let Some(new_val) = self.checked_add(rhs) {
            self.0 = new_val.0;
        } else {
            error!("Count AddAssign error: Overflow")
        }
    }
}

impl Sum<Count> for Count {
    fn sum<I: Iterator<Item = Count>>(iter: I) -> Self {
        let mut total = Count::default();

        for value in iter {
            total += value;
        }

        total
    }
}

impl Display for Count {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for Count {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        match value.as_u64() {
            Some(number) => Ok(Count(number)),
            None => {
                if !value.is_null() {
                    warn!("Counter value [{value}] is not a non-negative integer, defaulting to 0");
                }

                Ok(Count(0))
            }
        }
    }
}
