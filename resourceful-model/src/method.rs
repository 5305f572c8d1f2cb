use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A low-level request verb routed through `Engine::request`.
///
/// Labels are lowercase and match the host framework's vocabulary, so a
/// delete is `"del"` rather than `"delete"`. Anything unrecognized is kept
/// verbatim in [`Method::Other`] and handled by the engine's fallback branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Method {
    Del,
    Get,
    Head,
    Post,
    Put,
    Other(String),
}

impl Method {
    /// Returns the wire label for this method.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Del => "del",
            Self::Get => "get",
            Self::Head => "head",
            Self::Post => "post",
            Self::Put => "put",
            Self::Other(label) => label,
        }
    }

    /// Whether the request target is derived from a record id.
    pub fn is_addressed_by_id(&self) -> bool {
        matches!(self, Self::Del | Self::Get | Self::Head | Self::Put)
    }
}

impl From<&str> for Method {
    fn from(label: &str) -> Self {
        match label {
            "del" => Self::Del,
            "get" => Self::Get,
            "head" => Self::Head,
            "post" => Self::Post,
            "put" => Self::Put,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Method {
    fn from(label: String) -> Self {
        Self::from(label.as_str())
    }
}

impl From<Method> for String {
    fn from(method: Method) -> Self {
        method.as_str().to_string()
    }
}

impl FromStr for Method {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
