//! Directive Catalogue Module
//!
//! The fixed set of `Cache-Control` directives this crate knows how to emit.

use std::fmt;

// == Directive Kind ==
/// How a directive is written on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// Rendered as the bare name (`public`)
    Boolean,
    /// Rendered as `name=<seconds>` (`max-age=60`)
    Seconds,
}

// == Directive ==
/// A recognized `Cache-Control` directive.
///
/// The catalogue is closed: anything not listed here can never be written
/// into a [`DirectiveSet`](super::DirectiveSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Directive {
    Public,
    Private,
    NoCache,
    NoStore,
    MustRevalidate,
    ProxyRevalidate,
    NoTransform,
    Immutable,
    MaxAge,
    SMaxAge,
    StaleWhileRevalidate,
    StaleWhileError,
    StaleIfError,
}

impl Directive {
    /// Every directive, boolean ones first.
    pub const ALL: [Directive; 13] = [
        Directive::Public,
        Directive::Private,
        Directive::NoCache,
        Directive::NoStore,
        Directive::MustRevalidate,
        Directive::ProxyRevalidate,
        Directive::NoTransform,
        Directive::Immutable,
        Directive::MaxAge,
        Directive::SMaxAge,
        Directive::StaleWhileRevalidate,
        Directive::StaleWhileError,
        Directive::StaleIfError,
    ];

    // == Wire Name ==
    /// Canonical token as it appears in the header.
    pub fn as_str(self) -> &'static str {
        match self {
            Directive::Public => "public",
            Directive::Private => "private",
            Directive::NoCache => "no-cache",
            Directive::NoStore => "no-store",
            Directive::MustRevalidate => "must-revalidate",
            Directive::ProxyRevalidate => "proxy-revalidate",
            Directive::NoTransform => "no-transform",
            Directive::Immutable => "immutable",
            Directive::MaxAge => "max-age",
            Directive::SMaxAge => "s-maxage",
            Directive::StaleWhileRevalidate => "stale-while-revalidate",
            Directive::StaleWhileError => "stale-while-error",
            Directive::StaleIfError => "stale-if-error",
        }
    }

    // == Kind ==
    pub fn kind(self) -> DirectiveKind {
        match self {
            Directive::MaxAge
            | Directive::SMaxAge
            | Directive::StaleWhileRevalidate
            | Directive::StaleWhileError
            | Directive::StaleIfError => DirectiveKind::Seconds,
            _ => DirectiveKind::Boolean,
        }
    }

    pub fn is_boolean(self) -> bool {
        self.kind() == DirectiveKind::Boolean
    }

    // == Lookup ==
    /// Resolves a caller-supplied name.
    ///
    /// Accepts the symbolic spelling (`max_age`) as well as the wire spelling
    /// (`max-age`), ignoring ASCII case.
    pub fn lookup(name: &str) -> Option<Directive> {
        let normalized = name.trim().replace('_', "-").to_ascii_lowercase();
        Directive::ALL
            .into_iter()
            .find(|directive| directive.as_str() == normalized)
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
