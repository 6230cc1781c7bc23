/// Turns a `Result` (or an `Option` plus an error) into the C convention:
/// on failure the error is stored with [`crate::error::update_last_error`]
/// and the enclosing function returns the `otherwise` value.
macro_rules! c_try {
    ($expr:expr; otherwise $return:expr) => {{
        let res: Result<_, _> = $expr;
        match res {
            Ok(val) => val,
            Err(err) => {
                $crate::error::update_last_error(err);
                return $return;
            }
        }
    }};
    ($expr:expr, $e:expr; otherwise $return:expr) => {{
        let opt: Option<_> = $expr;
        c_try!(opt.ok_or_else(|| $e); otherwise $return)
    }};
}

/// Generates everything the bridge needs from the table of
/// `(variant, alternative, payload)` rows.
///
/// Each group names a raw layout and its kind enum; each row names a kind
/// variant, the union field holding it, the Rust payload type and the
/// payload's C spelling. For every row this emits an [`Accessor`] marker
/// (`<prefix><Kind>`), its registry entry, and the four C shims
/// `bridge_<cname>_<field>_{get,set,try_get,init}`. For every group it emits
/// an exhaustive `accessor_entry` lookup, so a kind without a row is a
/// compile error.
///
/// [`Accessor`]: crate::wasm_c_api::accessor::Accessor
macro_rules! union_accessors {
    ($(
        $prefix:ident($cname:ident, $variant_type:ident): $raw:ty as $kind_ty:ident {
            $( $kind:ident => $field:ident: $payload:ty = $cty:literal ),+ $(,)?
        }
    )+) => {
        paste::paste! {
            $( $(
                #[doc = "Accessor for the `" $field "` alternative of `" $cname "_t`."]
                #[derive(Debug, Clone, Copy)]
                pub struct [<$prefix $kind>];

                impl $crate::wasm_c_api::accessor::Accessor for [<$prefix $kind>] {
                    type Variant = $raw;
                    type Payload = $payload;

                    const KIND: $kind_ty = $kind_ty::$kind;

                    const ENTRY: $crate::wasm_c_api::registry::AccessorEntry =
                        $crate::wasm_c_api::registry::AccessorEntry {
                            variant: wasmtime_bridge_types::VariantType::$variant_type,
                            alternative: stringify!($field),
                            tag: $kind_ty::$kind as u8,
                            payload: $cty,
                            payload_size: ::core::mem::size_of::<$payload>(),
                            payload_align: ::core::mem::align_of::<$payload>(),
                            getter: concat!("bridge_", stringify!($cname), "_", stringify!($field), "_get"),
                            setter: concat!("bridge_", stringify!($cname), "_", stringify!($field), "_set"),
                            checked_getter: concat!("bridge_", stringify!($cname), "_", stringify!($field), "_try_get"),
                            initializer: concat!("bridge_", stringify!($cname), "_", stringify!($field), "_init"),
                        };

                    #[inline]
                    unsafe fn read(val: &$raw) -> $payload {
                        unsafe { val.of.$field }
                    }

                    #[inline]
                    fn write(val: &mut $raw, payload: $payload) {
                        val.of = Default::default();
                        val.of.$field = payload;
                        $crate::wasm_c_api::accessor::clear_padding::<$payload, _>(&mut val.of);
                    }
                }

                #[doc = "Reads the `" $field "` alternative without looking at the tag."]
                ///
                /// # Safety
                ///
                /// `val` must point to a live value whose active alternative
                /// is this one.
                #[cfg_attr(feature = "raw-accessors", unsafe(no_mangle))]
                pub unsafe extern "C" fn [<bridge_ $cname _ $field _get>](val: &$raw) -> $payload {
                    unsafe {
                        $crate::wasm_c_api::accessor::get_unchecked::<[<$prefix $kind>]>(val)
                    }
                }

                #[doc = "Overwrites the `" $field "` alternative. The tag is left for the caller to set."]
                #[cfg_attr(feature = "raw-accessors", unsafe(no_mangle))]
                pub extern "C" fn [<bridge_ $cname _ $field _set>](val: &mut $raw, payload: $payload) {
                    $crate::wasm_c_api::accessor::set_unchecked::<[<$prefix $kind>]>(val, payload)
                }

                #[doc = "Reads the `" $field "` alternative into `out` if the tag says it is active."]
                ///
                /// Returns `false` and records the error, leaving `out`
                /// untouched, on a null pointer or any other active
                /// alternative.
                #[unsafe(no_mangle)]
                pub extern "C" fn [<bridge_ $cname _ $field _try_get>](
                    val: Option<&$raw>,
                    out: Option<&mut $payload>,
                ) -> bool {
                    let val = c_try!(val, wasmtime_bridge_types::BridgeError::NullPointer("val"); otherwise false);
                    let out = c_try!(out, wasmtime_bridge_types::BridgeError::NullPointer("out"); otherwise false);
                    *out = c_try!($crate::wasm_c_api::accessor::get::<[<$prefix $kind>]>(val); otherwise false);
                    true
                }

                #[doc = "Stores `payload` as the `" $field "` alternative and records it in the tag."]
                #[unsafe(no_mangle)]
                pub extern "C" fn [<bridge_ $cname _ $field _init>](
                    val: Option<&mut $raw>,
                    payload: $payload,
                ) -> bool {
                    let val = c_try!(val, wasmtime_bridge_types::BridgeError::NullPointer("val"); otherwise false);
                    $crate::wasm_c_api::accessor::set::<[<$prefix $kind>]>(val, payload);
                    true
                }
            )+ )+

            $(
                impl $raw {
                    /// The registry row of the accessor for `kind`.
                    pub const fn accessor_entry(kind: $kind_ty) -> $crate::wasm_c_api::registry::AccessorEntry {
                        match kind {
                            $( $kind_ty::$kind => <[<$prefix $kind>] as $crate::wasm_c_api::accessor::Accessor>::ENTRY, )+
                        }
                    }
                }
            )+

            /// Every registry row, value alternatives first.
            pub const ENTRIES: &[$crate::wasm_c_api::registry::AccessorEntry] = &[
                $( $( <[<$prefix $kind>] as $crate::wasm_c_api::accessor::Accessor>::ENTRY, )+ )+
            ];
        }
    };
}
