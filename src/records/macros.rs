//! Macro for wiring record types into the paginated path

/// Implement [`Record`](crate::core::record::Record) for a type.
///
/// Declares the resource name, the default sort and the field registry
/// in one place. The registry is built on first use and cached for the
/// life of the process. Accessors must be non-capturing closures (they
/// coerce to `fn` pointers).
///
/// # Example
///
/// ```rust
/// use cellar::impl_record;
///
/// #[derive(Clone)]
/// struct Cask {
///     id: i64,
///     volume: Option<i64>,
/// }
///
/// impl_record!(Cask, resource: "casks", default_sort: ("id", Asc), fields: {
///     "id" => Integer(|c: &Cask| c.id.into()),
///     "volume" => Integer(|c: &Cask| c.volume.into()),
/// });
/// ```
#[macro_export]
macro_rules! impl_record {
    ($type:ty, resource: $resource:literal, default_sort: ($sort_field:literal, $sort_dir:ident), fields: {
        $($name:literal => $kind:ident($accessor:expr)),+ $(,)?
    }) => {
        impl $crate::core::record::Record for $type {
            fn resource_name() -> &'static str {
                $resource
            }

            fn fields() -> &'static $crate::core::record::FieldRegistry<Self> {
                static FIELDS: ::std::sync::OnceLock<
                    $crate::core::record::FieldRegistry<$type>,
                > = ::std::sync::OnceLock::new();
                FIELDS.get_or_init(|| {
                    $crate::core::record::FieldRegistry::builder()
                        $(.field($name, $crate::core::field::FieldKind::$kind, $accessor))+
                        .build()
                })
            }

            fn default_sort() -> $crate::core::record::DefaultSort {
                $crate::core::record::DefaultSort {
                    field: $sort_field,
                    direction: $crate::core::record::SortDirection::$sort_dir,
                }
            }
        }
    };
}
