//! Domain types for idgen.

use std::fmt;

// ============================================================================
// ID KINDS
// ============================================================================

/// The kinds of identifier the tool can generate.
///
/// Order matters: it is the order of the choice list on the first screen,
/// and the selection cursor indexes into [`IdKind::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdKind {
    /// Random (v4) UUID in canonical hyphenated form.
    Uuid,
    /// Human-readable "adjective-noun" name.
    Name,
    /// 15 random bytes rendered as 30 lowercase hex characters.
    Password,
}

impl IdKind {
    /// The fixed choice list, in display order.
    pub const ALL: [IdKind; 3] = [IdKind::Uuid, IdKind::Name, IdKind::Password];

    /// Label shown in the choice list.
    pub fn label(self) -> &'static str {
        match self {
            IdKind::Uuid => "UUID",
            IdKind::Name => "Name",
            IdKind::Password => "Password",
        }
    }

    /// Kind at a cursor position, wrapping out-of-range indices.
    pub fn from_index(index: usize) -> IdKind {
        Self::ALL[index % Self::ALL.len()]
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// TESTS
// ============================================================================
