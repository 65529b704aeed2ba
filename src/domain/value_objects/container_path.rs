//! Container and variable identifiers
//!
//! A container path is `<container-id>[/segment...]`, a variable path is
//! `<variable>[/tail]`. Both split at `/`.

/// A container entry's path split into its type id and parameter segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerPath<'a> {
    raw: &'a str,
}

impl<'a> ContainerPath<'a> {
    pub fn parse(raw: &'a str) -> Self {
        Self {
            raw: raw.trim_matches('/'),
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Container type identifier (first segment).
    pub fn id(&self) -> &'a str {
        self.raw.split('/').next().unwrap_or(self.raw)
    }

    /// Parameter segments following the id.
    pub fn segments(&self) -> impl Iterator<Item = &'a str> {
        self.raw.split('/').skip(1).filter(|s| !s.is_empty())
    }

    /// Last parameter segment, if any.
    pub fn hint(&self) -> Option<&'a str> {
        self.segments().last()
    }

    /// `true` if the container is `prefix` itself or lives underneath it.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        let prefix = prefix.trim_matches('/');
        match self.raw.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

/// A variable entry's path split at the first `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariablePath<'a> {
    pub name: &'a str,
    pub tail: Option<&'a str>,
}

impl<'a> VariablePath<'a> {
    pub fn parse(raw: &'a str) -> Self {
        match raw.split_once('/') {
            Some((name, tail)) => Self {
                name,
                tail: Some(tail.trim_start_matches('/')).filter(|t| !t.is_empty()),
            },
            None => Self {
                name: raw,
                tail: None,
            },
        }
    }
}
