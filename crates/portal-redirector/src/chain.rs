use crate::error::Result;
use portal_core::{Namespace, ReadRepository};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Produces the answer of a terminal link from the request path.
pub type Responder<T> = Arc<dyn Fn(&str) -> T + Send + Sync>;

/// Final state of resolving one request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// A mapping-backed link knew the path.
    Redirect(String),
    /// A terminal link answered.
    Handled(T),
    /// Every link missed and none was terminal. The caller must answer.
    Unhandled,
}

/// Inspectable description of one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    Mapping(Namespace),
    Terminal,
}

enum Link<T> {
    Mapping {
        repository: Arc<dyn ReadRepository>,
        namespace: Namespace,
        next: Option<Box<Link<T>>>,
    },
    Terminal(Responder<T>),
}

/// An ordered, immutable sequence of resolvers.
///
/// Chains are built tail first: start from [`FallbackChain::terminal`] (or
/// [`FallbackChain::unterminated`]) and prepend mapping-backed links with
/// [`FallbackChain::with_mapping`]. Each link owns its fallback, so the chain
/// is finite and acyclic by construction.
pub struct FallbackChain<T> {
    head: Option<Box<Link<T>>>,
}

impl<T: 'static> FallbackChain<T> {
    /// A chain whose only link always answers with `responder`.
    pub fn terminal<F>(responder: F) -> Self
    where
        F: Fn(&str) -> T + Send + Sync + 'static,
    {
        Self {
            head: Some(Box::new(Link::Terminal(Arc::new(responder)))),
        }
    }

    /// A chain with no links. Resolves to [`Resolution::Unhandled`] unless
    /// mapping-backed links are prepended and one of them hits.
    pub fn unterminated() -> Self {
        Self { head: None }
    }

    /// Prepends a link answering from `namespace` in `repository`. The
    /// current chain becomes its fallback.
    pub fn with_mapping(self, repository: Arc<dyn ReadRepository>, namespace: Namespace) -> Self {
        Self {
            head: Some(Box::new(Link::Mapping {
                repository,
                namespace,
                next: self.head,
            })),
        }
    }

    /// Resolves `path` by walking the chain from the head.
    ///
    /// Each mapping-backed link performs exactly one lookup. A miss moves to
    /// the next link; any other storage failure stops resolution and is
    /// returned, so defects never masquerade as fallbacks.
    pub async fn resolve(&self, path: &str) -> Result<Resolution<T>> {
        let mut cursor = self.head.as_deref();

        while let Some(link) = cursor {
            match link {
                Link::Mapping {
                    repository,
                    namespace,
                    next,
                } => match repository.get(namespace, path).await {
                    Ok(destination) => {
                        debug!(path = %path, namespace = %namespace, url = %destination, "resolved path");
                        return Ok(Resolution::Redirect(destination));
                    }
                    Err(e) if e.is_not_found() => {
                        trace!(path = %path, namespace = %namespace, "path not registered, falling back");
                        cursor = next.as_deref();
                    }
                    Err(e) => return Err(e.into()),
                },
                Link::Terminal(responder) => {
                    trace!(path = %path, "answered by terminal link");
                    return Ok(Resolution::Handled(responder(path)));
                }
            }
        }

        Ok(Resolution::Unhandled)
    }

    /// Link kinds in resolution order.
    pub fn links(&self) -> Vec<LinkKind> {
        let mut kinds = Vec::new();
        let mut cursor = self.head.as_deref();

        while let Some(link) = cursor {
            match link {
                Link::Mapping {
                    namespace, next, ..
                } => {
                    kinds.push(LinkKind::Mapping(namespace.clone()));
                    cursor = next.as_deref();
                }
                Link::Terminal(_) => {
                    kinds.push(LinkKind::Terminal);
                    cursor = None;
                }
            }
        }

        kinds
    }

    /// Returns `true` if the chain ends in a terminal link.
    pub fn is_terminated(&self) -> bool {
        matches!(self.links().last(), Some(LinkKind::Terminal))
    }
}

impl<T: 'static> fmt::Debug for FallbackChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackChain")
            .field("links", &self.links())
            .finish()
    }
}
