//! RSX shell! macro: parse Item/Section/Content markup and generate
//! gilt-nav hierarchy builder code.

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Ident, LitStr, Result, Token};

// ---------------------------------------------------------------------------
// Levels
// ---------------------------------------------------------------------------

/// Hierarchy level named by a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Item,
    Section,
    Content,
}

impl Level {
    fn from_tag(tag: &Ident) -> Result<Self> {
        match tag.to_string().as_str() {
            "Item" => Ok(Level::Item),
            "Section" => Ok(Level::Section),
            "Content" => Ok(Level::Content),
            other => Err(Error::new(
                tag.span(),
                format!("unknown tag `<{other}>`: expected `<Item>`, `<Section>` or `<Content>`"),
            )),
        }
    }

    fn child(self) -> Option<Level> {
        match self {
            Level::Item => Some(Level::Section),
            Level::Section => Some(Level::Content),
            Level::Content => None,
        }
    }

    fn builder(self) -> TokenStream {
        match self {
            Level::Item => quote! { gilt_nav::hierarchy::ShellItem },
            Level::Section => quote! { gilt_nav::hierarchy::ShellSection },
            Level::Content => quote! { gilt_nav::hierarchy::ShellContent },
        }
    }

    /// Builder method that attaches a child of the next level down.
    fn attach(self) -> Ident {
        let name = match self {
            Level::Item => "with_section",
            Level::Section | Level::Content => "with_content",
        };
        Ident::new(name, Span::call_site())
    }
}

// ---------------------------------------------------------------------------
// Markup tree
// ---------------------------------------------------------------------------

/// `name="value"` on a tag.
pub(crate) struct Attribute {
    pub name: Ident,
    pub value: LitStr,
}

/// One tag, already checked against the level it sits at.
pub(crate) struct Node {
    level: Level,
    pub tag: Ident,
    pub attrs: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl std::fmt::Debug for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let attrs: Vec<(String, String)> = self
            .attrs
            .iter()
            .map(|a| (a.name.to_string(), a.value.value()))
            .collect();
        f.debug_struct("Node")
            .field("level", &self.level)
            .field("attrs", &attrs)
            .field("children", &self.children)
            .finish()
    }
}

/// The macro input: one or more `<Item>` trees.
struct ShellInput {
    items: Vec<Node>,
}

impl Parse for ShellInput {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut items = Vec::new();
        while !input.is_empty() {
            items.push(parse_node(input, Level::Item)?);
        }
        Ok(ShellInput { items })
    }
}

/// Parse a tag that must sit at `level`, together with everything nested in it.
fn parse_node(input: ParseStream, level: Level) -> Result<Node> {
    input.parse::<Token![<]>()?;
    let tag: Ident = input.parse()?;
    if Level::from_tag(&tag)? != level {
        return Err(Error::new(
            tag.span(),
            format!("`<{tag}>` cannot appear here: expected `<{level:?}>`"),
        ));
    }

    let mut node = Node {
        level,
        tag,
        attrs: parse_attributes(input)?,
        children: Vec::new(),
    };

    if input.peek(Token![/]) {
        input.parse::<Token![/]>()?;
        input.parse::<Token![>]>()?;
        return Ok(node);
    }
    input.parse::<Token![>]>()?;

    while !(input.peek(Token![<]) && input.peek2(Token![/])) {
        let Some(child) = level.child() else {
            return Err(input.error(format!("`<{}>` cannot have children", node.tag)));
        };
        node.children.push(parse_node(input, child)?);
    }
    parse_close(input, &node.tag)?;
    Ok(node)
}

/// Attributes up to the `>` or `/>` that ends the opening tag.
fn parse_attributes(input: ParseStream) -> Result<Vec<Attribute>> {
    let mut attrs = Vec::new();
    while input.peek(Ident) {
        let name: Ident = input.parse()?;
        input.parse::<Token![=]>()?;
        attrs.push(Attribute {
            name,
            value: input.parse()?,
        });
    }
    Ok(attrs)
}

/// `</tag>`, which must match the open tag.
fn parse_close(input: ParseStream, tag: &Ident) -> Result<()> {
    input.parse::<Token![<]>()?;
    input.parse::<Token![/]>()?;
    let found: Ident = input.parse()?;
    if found != *tag {
        return Err(Error::new(
            found.span(),
            format!("mismatched closing tag: expected `</{tag}>`, found `</{found}>`"),
        ));
    }
    input.parse::<Token![>]>()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Code generation
// ---------------------------------------------------------------------------

/// Builder expression for `node` and its children.
fn generate_node(node: &Node) -> Result<TokenStream> {
    let builder = node.level.builder();
    let mut calls = Vec::new();

    for attr in &node.attrs {
        let val = &attr.value;
        match attr.name.to_string().as_str() {
            "route" => calls.push(quote! { .with_route(#val) }),
            "title" => calls.push(quote! { .with_title(#val) }),
            "root" if node.level == Level::Content => {
                let ty: syn::Path = val.parse()?;
                calls.push(quote! { .with_root_type::<#ty>() });
            }
            other => {
                return Err(Error::new(
                    attr.name.span(),
                    format!("unknown attribute `{other}` on `<{}>`", node.tag),
                ))
            }
        }
    }

    let attach = node.level.attach();
    for child in &node.children {
        let child_code = generate_node(child)?;
        calls.push(quote! { .#attach(#child_code) });
    }

    Ok(quote! {
        #builder::new() #(#calls)*
    })
}

/// Entry point: generate code for the entire shell! macro.
pub(crate) fn shell_impl(input: TokenStream) -> Result<TokenStream> {
    let parsed: ShellInput = syn::parse2(input)?;

    if parsed.items.is_empty() {
        return Err(Error::new(
            Span::call_site(),
            "shell! macro requires at least one `<Item>`",
        ));
    }

    let items = parsed
        .items
        .iter()
        .map(generate_node)
        .collect::<Result<Vec<_>>>()?;

    Ok(quote! {
        {
            let __items: ::std::vec::Vec<gilt_nav::hierarchy::ShellItem> = ::std::vec![#(#items),*];
            __items
        }
    })
}

// ===========================================================================
// Tests
// ===========================================================================
