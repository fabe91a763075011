//! Proc macros for gilt-nav: `shell!` declarative hierarchy construction.
//!
//! This crate is not meant to be used directly. Enable the `macros` feature on `gilt-nav`.

use proc_macro::TokenStream;

mod shell_macro;

/// RSX-style hierarchy macro.
///
/// Transforms `<Item>` / `<Section>` / `<Content>` markup into
/// `gilt_nav::hierarchy` builder calls and evaluates to a
/// `Vec<gilt_nav::hierarchy::ShellItem>`.
///
/// # Syntax
///
/// - `<Item>` holds `<Section>`s, `<Section>` holds `<Content>`s
/// - `<Content />` is self-closing
/// - A level in the wrong place is a compile error
///
/// # Attributes
///
/// - `route="value"` becomes `.with_route("value")`
/// - `title="value"` becomes `.with_title("value")`
/// - `root="path::Type"` (Content only) becomes `.with_root_type::<path::Type>()`
///
/// # Example
///
/// ```ignore
/// let items = shell! {
///     <Item route="Main">
///         <Section route="Tabs">
///             <Content route="Home" />
///             <Content route="Settings" root="SettingsPage" />
///         </Section>
///     </Item>
/// };
/// for item in items {
///     shell.add_item(item)?;
/// }
/// ```
#[proc_macro]
pub fn shell(input: TokenStream) -> TokenStream {
    shell_macro::shell_impl(input.into())
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
