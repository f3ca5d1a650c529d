//! Compile-time dependency injection derives for basilica.
//!
//! - `#[derive(Context)]` makes every field of a root struct extractable
//! - `#[derive(FromContext)]` builds a struct by extracting each field
//!
//! Generated code refers to `crate::FromRef`, so the consuming crate must
//! define or re-export that trait at its root.

use proc_macro::TokenStream;

mod context;
mod fields;
mod from_context;

/// Generates `FromRef<Self>` for the type of each field.
///
/// Field types must be `Clone` and pairwise distinct.
///
/// # Example
///
/// ```ignore
/// #[derive(Context, Clone)]
/// pub struct Context {
///     pub store: AppStore,
///     pub config: Arc<Config>,
/// }
///
/// // Generated:
/// // impl FromRef<Context> for AppStore { ... }
/// // impl FromRef<Context> for Arc<Config> { ... }
/// ```
#[proc_macro_derive(Context)]
pub fn derive_context(input: TokenStream) -> TokenStream {
    context::derive_context_impl(input)
}

/// Generates `FromRef<Context>` for a struct whose fields are all
/// `FromRef<Context>`.
///
/// The context type defaults to `Context` (which must be in scope) and can
/// be overridden with `#[from_context(Context = "path::To::Ctx")]`.
///
/// # Example
///
/// ```ignore
/// #[derive(FromContext, Clone)]
/// pub struct ClassCacheRepository {
///     store: AppStore,      // AppStore::from_ref(ctx)
///     config: Arc<Config>,  // Arc::<Config>::from_ref(ctx)
/// }
/// ```
#[proc_macro_derive(FromContext, attributes(from_context))]
pub fn derive_from_context(input: TokenStream) -> TokenStream {
    from_context::derive_from_context_impl(input)
}
