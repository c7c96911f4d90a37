#[macro_export]
macro_rules! scalar_kind_registry_entries {
    ($macro:ident $(, @args $($args:tt)+ )?) => {
        $macro! {
            $(
                @args $($args)+;
            )?
            @entries
            (Blob, Blob, value_size = 0, supports_ordering = false, supports_asof = false, is_scaled = false),
            (Bool, Bool, value_size = 1, supports_ordering = true, supports_asof = false, is_scaled = false),
            (Date, Temporal, value_size = 2, supports_ordering = true, supports_asof = false, is_scaled = false),
            (DateTime, Temporal, value_size = 4, supports_ordering = true, supports_asof = false, is_scaled = false),
            (DateTime64, Temporal, value_size = 8, supports_ordering = true, supports_asof = true, is_scaled = true),
            (Decimal32, Decimal, value_size = 4, supports_ordering = true, supports_asof = true, is_scaled = true),
            (Decimal64, Decimal, value_size = 8, supports_ordering = true, supports_asof = true, is_scaled = true),
            (Decimal128, Decimal, value_size = 16, supports_ordering = true, supports_asof = true, is_scaled = true),
            (Float32, Float, value_size = 4, supports_ordering = true, supports_asof = true, is_scaled = false),
            (Float64, Float, value_size = 8, supports_ordering = true, supports_asof = true, is_scaled = false),
            (Int8, Signed, value_size = 1, supports_ordering = true, supports_asof = true, is_scaled = false),
            (Int16, Signed, value_size = 2, supports_ordering = true, supports_asof = true, is_scaled = false),
            (Int32, Signed, value_size = 4, supports_ordering = true, supports_asof = true, is_scaled = false),
            (Int64, Signed, value_size = 8, supports_ordering = true, supports_asof = true, is_scaled = false),
            (Int128, Signed, value_size = 16, supports_ordering = true, supports_asof = false, is_scaled = false),
            (Text, Textual, value_size = 0, supports_ordering = true, supports_asof = false, is_scaled = false),
            (UInt8, Unsigned, value_size = 1, supports_ordering = true, supports_asof = true, is_scaled = false),
            (UInt16, Unsigned, value_size = 2, supports_ordering = true, supports_asof = true, is_scaled = false),
            (UInt32, Unsigned, value_size = 4, supports_ordering = true, supports_asof = true, is_scaled = false),
            (UInt64, Unsigned, value_size = 8, supports_ordering = true, supports_asof = true, is_scaled = false),
            (UInt128, Unsigned, value_size = 16, supports_ordering = true, supports_asof = false, is_scaled = false),
            (Uuid, Identifier, value_size = 16, supports_ordering = true, supports_asof = false, is_scaled = false),
        }
    };
}

macro_rules! scalar_kind_registry {
    ($macro:ident) => {
        $crate::scalar_kind_registry_entries!($macro)
    };
    ($macro:ident, $($args:tt)+) => {
        $crate::scalar_kind_registry_entries!($macro, @args $($args)+)
    };
}

macro_rules! metadata_from_registry {
    ( @args $kind:expr; @entries $( ($scalar:ident, $family:ident, value_size = $value_size:expr, supports_ordering = $supports_ordering:expr, supports_asof = $supports_asof:expr, is_scaled = $is_scaled:expr) ),* $(,)? ) => {
        match $kind {
            $(
                $crate::ScalarKind::$scalar => $crate::ScalarMetadata {
                    family: $crate::ScalarFamily::$family,
                    value_size: $value_size,
                    supports_ordering: $supports_ordering,
                    supports_asof: $supports_asof,
                    is_scaled: $is_scaled,
                },
            )*
        }
    };
}

macro_rules! label_from_registry {
    ( @args $kind:expr; @entries $( ($scalar:ident, $family:ident, value_size = $value_size:expr, supports_ordering = $supports_ordering:expr, supports_asof = $supports_asof:expr, is_scaled = $is_scaled:expr) ),* $(,)? ) => {
        match $kind {
            $( $crate::ScalarKind::$scalar => stringify!($scalar), )*
        }
    };
}

macro_rules! all_kinds_from_registry {
    ( @entries $( ($scalar:ident, $family:ident, value_size = $value_size:expr, supports_ordering = $supports_ordering:expr, supports_asof = $supports_asof:expr, is_scaled = $is_scaled:expr) ),* $(,)? ) => {
        [ $( $crate::ScalarKind::$scalar ),* ]
    };
    ( @args $($ignore:tt)*; @entries $( ($scalar:ident, $family:ident, value_size = $value_size:expr, supports_ordering = $supports_ordering:expr, supports_asof = $supports_asof:expr, is_scaled = $is_scaled:expr) ),* $(,)? ) => {
        [ $( $crate::ScalarKind::$scalar ),* ]
    };
}
