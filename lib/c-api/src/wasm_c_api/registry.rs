//! Introspection over the accessor table in [`super::shims`].

use super::shims::ENTRIES;
use std::fmt::Write as _;
use wasmtime_bridge_types::{ExternKind, IntoEnumIterator, ValKind, VariantType};

/// Revision of the raw layouts this build was generated for. Bump it
/// whenever a payload type changes size or alignment, or an alternative is
/// added or removed.
pub const LAYOUT_REVISION: u32 = 1;

/// Whether the tag-blind `_get`/`_set` shims are exported from this build.
pub const RAW_ACCESSORS: bool = cfg!(feature = "raw-accessors");

/// One `(variant, alternative, payload)` row of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessorEntry {
    /// The variant family.
    pub variant: VariantType,
    /// The union field, which is also the kind's text-format name.
    pub alternative: &'static str,
    /// The tag recorded when this alternative is active.
    pub tag: u8,
    /// The payload's C type.
    pub payload: &'static str,
    /// Size of the payload in bytes.
    pub payload_size: usize,
    /// Alignment of the payload in bytes.
    pub payload_align: usize,
    /// Symbol of the tag-blind read shim.
    pub getter: &'static str,
    /// Symbol of the tag-blind write shim.
    pub setter: &'static str,
    /// Symbol of the tag-checked read shim.
    pub checked_getter: &'static str,
    /// Symbol of the write-and-tag shim.
    pub initializer: &'static str,
}

impl AccessorEntry {
    /// The symbols this row exports from the current build.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + use<> {
        self.symbols_with(RAW_ACCESSORS)
    }

    fn symbols_with(&self, raw_accessors: bool) -> impl Iterator<Item = &'static str> + use<> {
        raw_accessors
            .then_some([self.getter, self.setter])
            .into_iter()
            .flatten()
            .chain([self.checked_getter, self.initializer])
    }
}

/// Every row of the registry.
pub const REGISTRY: &[AccessorEntry] = ENTRIES;

const _: () = assert!(
    REGISTRY.len()
        == <ValKind as IntoEnumIterator>::VARIANT_COUNT
            + <ExternKind as IntoEnumIterator>::VARIANT_COUNT,
    "every value and extern kind needs exactly one registry row"
);

/// Rows belonging to one variant family.
pub fn entries_for(variant: VariantType) -> impl Iterator<Item = &'static AccessorEntry> {
    REGISTRY.iter().filter(move |entry| entry.variant == variant)
}

/// Finds the row for `alternative` of `variant`.
pub fn lookup(variant: VariantType, alternative: &str) -> Option<&'static AccessorEntry> {
    entries_for(variant).find(|entry| entry.alternative == alternative)
}

/// Finds the row exporting `symbol`.
pub fn lookup_symbol(symbol: &str) -> Option<&'static AccessorEntry> {
    REGISTRY
        .iter()
        .find(|entry| entry.symbols().any(|exported| exported == symbol))
}

/// Renders a C header declaring every shim this build exports, for callers
/// that bind by prototype rather than by hand.
pub fn render_c_header() -> String {
    write_header(RAW_ACCESSORS)
}

fn write_header(raw_accessors: bool) -> String {
    let mut out = String::new();
    // Writing into a `String` cannot fail.
    let _ = writeln!(out, "// The wasmtime variant bridge C header.");
    let _ = writeln!(out, "// Generated from the accessor registry, do not edit.");
    let _ = writeln!(out);
    let _ = writeln!(out, "#ifndef WASMTIME_BRIDGE_H");
    let _ = writeln!(out, "#define WASMTIME_BRIDGE_H");
    let _ = writeln!(out);
    let _ = writeln!(out, "#include <stdbool.h>");
    let _ = writeln!(out, "#include <stdint.h>");
    let _ = writeln!(out, "#include <wasmtime.h>");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "#define WASMTIME_BRIDGE_LAYOUT_REVISION {LAYOUT_REVISION}"
    );

    for variant in VariantType::into_enum_iter() {
        let ty = format!("{}_t", variant.c_name());
        let _ = writeln!(out);
        let _ = writeln!(out, "// {ty}");
        for entry in entries_for(variant) {
            let payload = entry.payload;
            if raw_accessors {
                let _ = writeln!(out, "{payload} {}(const {ty} *val);", entry.getter);
                let _ = writeln!(out, "void {}({ty} *val, {payload} payload);", entry.setter);
            }
            let _ = writeln!(
                out,
                "bool {}(const {ty} *val, {payload} *out);",
                entry.checked_getter
            );
            let _ = writeln!(out, "bool {}({ty} *val, {payload} payload);", entry.initializer);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "int bridge_last_error_length(void);");
    let _ = writeln!(out, "int bridge_last_error_message(char *buffer, int length);");
    let _ = writeln!(out);
    let _ = writeln!(out, "#endif // WASMTIME_BRIDGE_H");
    out
}
