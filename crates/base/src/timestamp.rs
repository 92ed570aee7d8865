use std::fmt;

/// Position of a packet on a stream, in microseconds.
///
/// Every packet a node emits for one invocation carries the timestamp of the
/// input that triggered it, so downstream consumers see outputs in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const UNSET: Timestamp = Timestamp(i64::MIN);

    pub const fn from_micros(micros: i64) -> Self {
        Self(micros)
    }

    pub fn micros(&self) -> i64 {
        self.0
    }

    pub fn is_set(&self) -> bool {
        *self != Self::UNSET
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_set() {
            write!(f, "{}us", self.0)
        } else {
            write!(f, "unset")
        }
    }
}

/// A value stamped with the timestamp it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamped<T> {
    pub timestamp: Timestamp,
    pub inner: T,
}

impl<T> Stamped<T> {
    pub fn new(timestamp: Timestamp, inner: T) -> Self {
        Self { timestamp, inner }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Stamped<U> {
        Stamped {
            timestamp: self.timestamp,
            inner: f(self.inner),
        }
    }
}
