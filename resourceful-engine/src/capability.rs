//! The capability set an engine may expose to the host framework.
//!
//! An engine declares what it supports through a [`Capabilities`]
//! descriptor rather than by which methods it happens to override. The host
//! checks the descriptor before dispatching, and every operation left out of
//! it fails uniformly with [`EngineError::Unsupported`].

use crate::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// An operation in the engine capability set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    All,
    Create,
    Destroy,
    Get,
    Head,
    Filter,
    Find,
    Load,
    New,
    Post,
    Put,
    Request,
    Save,
    Sync,
    Update,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 15] = [
        Self::All,
        Self::Create,
        Self::Destroy,
        Self::Get,
        Self::Head,
        Self::Filter,
        Self::Find,
        Self::Load,
        Self::New,
        Self::Post,
        Self::Put,
        Self::Request,
        Self::Save,
        Self::Sync,
        Self::Update,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Create => "create",
            Self::Destroy => "destroy",
            Self::Get => "get",
            Self::Head => "head",
            Self::Filter => "filter",
            Self::Find => "find",
            Self::Load => "load",
            Self::New => "new",
            Self::Post => "post",
            Self::Put => "put",
            Self::Request => "request",
            Self::Save => "save",
            Self::Sync => "sync",
            Self::Update => "update",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| format!("unknown operation: {s}"))
    }
}

/// Static descriptor of the operations an engine implements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Capabilities(BTreeSet<Operation>);

impl Capabilities {
    /// No operation supported.
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    /// Every operation supported.
    pub fn all() -> Self {
        Self(Operation::ALL.into_iter().collect())
    }

    /// The operations the base contract gives a behavior to.
    pub fn base() -> Self {
        Self::from_iter([
            Operation::Request,
            Operation::Get,
            Operation::Head,
            Operation::Put,
            Operation::Post,
            Operation::Save,
            Operation::Update,
            Operation::Destroy,
            Operation::Create,
        ])
    }

    #[must_use]
    pub fn with(mut self, op: Operation) -> Self {
        self.0.insert(op);
        self
    }

    #[must_use]
    pub fn without(mut self, op: Operation) -> Self {
        self.0.remove(&op);
        self
    }

    pub fn supports(&self, op: Operation) -> bool {
        self.0.contains(&op)
    }

    /// Fails with `Unsupported` unless `op` is in the set.
    pub fn ensure(&self, op: Operation, protocol: &str) -> EngineResult<()> {
        if self.supports(op) {
            Ok(())
        } else {
            Err(EngineError::unsupported(op, protocol))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Operation> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Operation> for Capabilities {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
