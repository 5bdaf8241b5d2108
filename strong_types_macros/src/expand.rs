//! The pipeline: scan, validate, emit.
//!
//! A single pure pass over one annotated module. Candidates are processed
//! independently, diagnostics are plain values, and the output for an
//! unchanged module is byte-identical across runs, which is what makes the
//! compiler's macro re-expansion model safe to rely on.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Item, ItemMod};

use crate::diagnostics::Diagnostic;
use crate::generate;
use crate::parse::{ValidatedStrongType, is_marker_attr, scan_module};
use crate::validate::validate;

/// Output of one pipeline pass, kept separate from the token rendering so
/// tests can assert on descriptors and diagnostics directly.
pub(crate) struct Expansion {
    pub(crate) descriptors: Vec<ValidatedStrongType>,
    pub(crate) diagnostics: Vec<Diagnostic>,
    pub(crate) tokens: TokenStream,
}

/// Entry point behind the `#[strong_types]` attribute.
pub(crate) fn strong_types_module(module: ItemMod) -> syn::Result<TokenStream> {
    run(&module).map(|expansion| expansion.tokens)
}

pub(crate) fn run(module: &ItemMod) -> syn::Result<Expansion> {
    let Some((_, items)) = &module.content else {
        return Err(syn::Error::new_spanned(
            module,
            "#[strong_types] requires a module with an inline body",
        ));
    };

    let scan = scan_module(&module.ident, items);
    let mut diagnostics = scan.diagnostics;
    let mut descriptors = Vec::new();

    for candidate in &scan.candidates {
        match validate(candidate, scan.base_contract_in_scope) {
            Ok(descriptor) => descriptors.push(descriptor),
            Err(diagnostic) => diagnostics.push(diagnostic),
        }
    }

    let generated: Vec<TokenStream> = descriptors.iter().map(generate::emit).collect();

    // The marker attribute is consumed here; nothing downstream resolves it.
    let items: Vec<Item> = items.iter().map(strip_marker).collect();

    // Error-severity diagnostics surface as compile errors next to the
    // module. Warnings skip generation for their candidate but emit no
    // tokens: stable Rust has no user-macro warning channel.
    let errors: Vec<TokenStream> = diagnostics
        .iter()
        .filter(|diagnostic| diagnostic.is_error())
        .map(|diagnostic| diagnostic.to_syn_error().to_compile_error())
        .collect();

    let attrs = &module.attrs;
    let vis = &module.vis;
    let ident = &module.ident;

    let tokens = quote! {
        #(#attrs)*
        #vis mod #ident {
            #(#items)*

            #(#generated)*
        }

        #(#errors)*
    };

    Ok(Expansion {
        descriptors,
        diagnostics,
        tokens,
    })
}

fn strip_marker(item: &Item) -> Item {
    let mut item = item.clone();
    let attrs = match &mut item {
        Item::Struct(item) => Some(&mut item.attrs),
        Item::Enum(item) => Some(&mut item.attrs),
        Item::Union(item) => Some(&mut item.attrs),
        Item::Type(item) => Some(&mut item.attrs),
        Item::Fn(item) => Some(&mut item.attrs),
        Item::Const(item) => Some(&mut item.attrs),
        Item::Static(item) => Some(&mut item.attrs),
        Item::Use(item) => Some(&mut item.attrs),
        Item::Mod(item) => Some(&mut item.attrs),
        Item::Impl(item) => Some(&mut item.attrs),
        Item::Trait(item) => Some(&mut item.attrs),
        Item::Macro(item) => Some(&mut item.attrs),
        _ => None,
    };
    if let Some(attrs) = attrs {
        attrs.retain(|attr| !is_marker_attr(attr));
    }
    item
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    fn sample_module() -> ItemMod {
        parse_quote! {
            mod ids {
                use strong_types::{StrongWrapper, StrongWrapperOrd};

                #[strong_type]
                pub struct OrderId {
                    value: u64,
                }

                impl StrongWrapperOrd<u64> for OrderId {}

                impl OrderId {
                    pub fn new(value: u64) -> Self {
                        Self { value }
                    }
                }

                #[strong_type]
                pub struct Label {
                    value: String,
                }

                impl StrongWrapper<String> for Label {}

                impl Label {
                    pub fn new(value: String) -> Self {
                        Self { value }
                    }
                }
            }
        }
    }

    #[test]
    fn valid_module_expands_without_diagnostics() {
        let expansion = run(&sample_module()).unwrap();
        assert_eq!(expansion.descriptors.len(), 2);
        assert!(expansion.diagnostics.is_empty());

        let tokens = expansion.tokens.to_string();
        assert!(tokens.contains("StrongType for OrderId"));
        assert!(tokens.contains("StrongType for Label"));
        assert!(!tokens.contains("compile_error"));
    }

    #[test]
    fn pipeline_is_idempotent_for_unchanged_input() {
        let first = run(&sample_module()).unwrap();
        let second = run(&sample_module()).unwrap();
        assert_eq!(first.tokens.to_string(), second.tokens.to_string());
        assert_eq!(first.diagnostics.len(), second.diagnostics.len());
    }

    #[test]
    fn marker_attributes_are_stripped() {
        let expansion = run(&sample_module()).unwrap();
        assert!(!expansion.tokens.to_string().contains("strong_type]"));
    }

    #[test]
    fn existing_items_are_kept_untouched() {
        let expansion = run(&sample_module()).unwrap();
        let tokens = expansion.tokens.to_string();
        assert!(tokens.contains("pub struct OrderId"));
        assert!(tokens.contains("pub fn new"));
    }

    #[test]
    fn invalid_candidate_produces_a_compile_error_and_no_adapters() {
        let module: ItemMod = parse_quote! {
            mod ids {
                use strong_types::StrongWrapper;

                #[strong_type]
                pub struct Broken {
                    value: u64,
                    extra: u64,
                }

                impl StrongWrapper<u64> for Broken {}
            }
        };

        let expansion = run(&module).unwrap();
        assert!(expansion.descriptors.is_empty());
        assert_eq!(expansion.diagnostics.len(), 1);
        assert_eq!(expansion.diagnostics[0].id(), "STRONGTYPE001");

        let tokens = expansion.tokens.to_string();
        assert!(tokens.contains("compile_error"));
        assert!(tokens.contains("STRONGTYPE001"));
        assert!(!tokens.contains("impl :: strong_types :: StrongType"));
    }

    #[test]
    fn one_bad_candidate_does_not_stop_its_siblings() {
        let module: ItemMod = parse_quote! {
            mod ids {
                use strong_types::StrongWrapperOrd;

                #[strong_type]
                pub struct Broken {
                    value: u64,
                }

                #[strong_type]
                pub struct OrderId {
                    value: u64,
                }

                impl StrongWrapperOrd<u64> for OrderId {}

                impl OrderId {
                    pub fn new(value: u64) -> Self {
                        Self { value }
                    }
                }
            }
        };

        let expansion = run(&module).unwrap();
        assert_eq!(expansion.descriptors.len(), 1);
        assert_eq!(expansion.descriptors[0].ident, "OrderId");
        assert_eq!(expansion.diagnostics.len(), 1);
        assert_eq!(expansion.diagnostics[0].id(), "STRONGTYPE002");
    }

    #[test]
    fn warnings_skip_generation_but_emit_no_error_tokens() {
        let module: ItemMod = parse_quote! {
            mod quiet {
                pub struct NotRequested {
                    value: u64,
                }
            }
        };

        let expansion = run(&module).unwrap();
        assert_eq!(expansion.diagnostics.len(), 1);
        assert_eq!(expansion.diagnostics[0].id(), "STRONGTYPE009");
        assert!(!expansion.tokens.to_string().contains("compile_error"));
    }

    #[test]
    fn module_without_body_is_rejected() {
        let module: ItemMod = parse_quote! {
            mod elsewhere;
        };

        assert!(run(&module).is_err());
    }
}
