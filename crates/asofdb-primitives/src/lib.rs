#[macro_use]
mod macros;

///
/// ScalarKind
///
/// Canonical runtime scalar tag for column types.
/// Covers every column type the storage layer can carry, not only the
/// kinds an as-of index can order by.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarKind {
    Blob,
    Bool,
    Date,
    DateTime,
    DateTime64,
    Decimal32,
    Decimal64,
    Decimal128,
    Float32,
    Float64,
    Int8,
    Int16,
    Int32,
    Int64,
    Int128,
    Text,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    UInt128,
    Uuid,
}

impl ScalarKind {
    /// Return the full metadata descriptor for one scalar kind.
    #[must_use]
    pub const fn metadata(self) -> ScalarMetadata {
        scalar_kind_registry!(metadata_from_registry, self)
    }

    /// Stable human-readable label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        scalar_kind_registry!(label_from_registry, self)
    }

    /// Return the coarse family this scalar belongs to.
    #[must_use]
    pub const fn family(self) -> ScalarFamily {
        self.metadata().family
    }

    /// Fixed in-memory width of one value, or 0 for variable-length kinds.
    #[must_use]
    pub const fn value_size(self) -> usize {
        self.metadata().value_size
    }

    /// Return whether values of this scalar have a total ordering.
    #[must_use]
    pub const fn supports_ordering(self) -> bool {
        self.metadata().supports_ordering
    }

    /// Return whether this scalar can be the ordering column of an as-of join.
    #[must_use]
    pub const fn supports_asof(self) -> bool {
        self.metadata().supports_asof
    }

    /// Return whether the column type carries a scale/precision parameter.
    #[must_use]
    pub const fn is_scaled(self) -> bool {
        self.metadata().is_scaled
    }
}

impl std::fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

///
/// ScalarMetadata
///
/// Capability metadata shared across the value, storage and index layers.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalarMetadata {
    pub family: ScalarFamily,
    pub value_size: usize,
    pub supports_ordering: bool,
    pub supports_asof: bool,
    pub is_scaled: bool,
}

///
/// ScalarFamily
///
/// Coarse scalar routing family used by value conversion.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ScalarFamily {
    Unsigned,
    Signed,
    Float,
    Decimal,
    Temporal,
    Textual,
    Identifier,
    Blob,
    Bool,
}

/// Ordered list of all scalar kinds in registry order.
pub const ALL_SCALAR_KINDS: [ScalarKind; 22] = scalar_kind_registry!(all_kinds_from_registry);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_every_kind_once() {
        for (i, left) in ALL_SCALAR_KINDS.iter().enumerate() {
            for right in &ALL_SCALAR_KINDS[i + 1..] {
                assert_ne!(left, right, "duplicate registry entry for {left}");
            }
        }
    }

    #[test]
    fn asof_kinds_are_fixed_width_and_ordered() {
        for kind in ALL_SCALAR_KINDS {
            if kind.supports_asof() {
                assert!(kind.supports_ordering(), "{kind} must be orderable");
                assert!(kind.value_size() > 0, "{kind} must be fixed width");
            }
        }
    }

    #[test]
    fn asof_kind_set_matches_supported_families() {
        let supported: Vec<_> = ALL_SCALAR_KINDS
            .into_iter()
            .filter(|kind| kind.supports_asof())
            .collect();

        assert_eq!(supported.len(), 14);
        assert!(!ScalarKind::Int128.supports_asof());
        assert!(!ScalarKind::Date.supports_asof());
        assert!(ScalarKind::DateTime64.is_scaled());
        assert_eq!(ScalarKind::Decimal128.value_size(), 16);
    }

    #[test]
    fn label_matches_variant_name() {
        assert_eq!(ScalarKind::UInt16.label(), "UInt16");
        assert_eq!(ScalarKind::DateTime64.to_string(), "DateTime64");
    }
}
