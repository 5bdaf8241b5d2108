//! The declaration scanner.
//!
//! Walks the items of one `#[strong_types]` module and produces a candidate
//! list with minimal shape information: one [`Candidate`] per annotated
//! declaration regardless of validity, plus whether either base contract is
//! referenced anywhere in the module. Scanning is a pure function of the
//! item list; repeated invocation on unchanged input yields an identical
//! candidate list in declaration order.

use syn::visit::Visit;
use syn::{Attribute, Ident, ImplItem, Item, ItemImpl, ItemUse, Type, UseTree};

use crate::diagnostics::{Diagnostic, DiagnosticKind};

use super::candidate::{Candidate, MarkerImpl, StrongVariant, WrapperShape};

const MARKER_ATTR: &str = "strong_type";
const PLAIN_CONTRACT: &str = "StrongWrapper";
const ORDERED_CONTRACT: &str = "StrongWrapperOrd";

/// Everything the scanner learned about one module.
pub(crate) struct ScanOutput {
    pub(crate) candidates: Vec<Candidate>,
    /// True when either contract marker is imported or implemented anywhere
    /// in the module.
    pub(crate) base_contract_in_scope: bool,
    pub(crate) diagnostics: Vec<Diagnostic>,
}

/// Scan the items of a `#[strong_types]` module.
pub(crate) fn scan_module(module_ident: &Ident, items: &[Item]) -> ScanOutput {
    let mut scanner = ModuleScanner::default();

    // First pass: collect annotated declarations in declaration order.
    let mut saw_annotation = false;
    for item in items {
        saw_annotation |= scanner.collect_candidate(item);
    }
    if !saw_annotation {
        scanner.diagnostics.push(Diagnostic::new(
            DiagnosticKind::NoGenerationRequests(module_ident.to_string()),
            module_ident.span(),
        ));
    }

    // Second pass: attach marker impls and constructors to the candidates
    // they belong to.
    for item in items {
        scanner.visit_item(item);
    }

    ScanOutput {
        candidates: scanner.candidates,
        base_contract_in_scope: scanner.base_contract_in_scope,
        diagnostics: scanner.diagnostics,
    }
}

#[derive(Default)]
struct ModuleScanner {
    candidates: Vec<Candidate>,
    base_contract_in_scope: bool,
    diagnostics: Vec<Diagnostic>,
}

impl ModuleScanner {
    /// Record the item as a candidate if it carries the marker attribute.
    /// Returns whether the marker was present at all.
    fn collect_candidate(&mut self, item: &Item) -> bool {
        let (attrs, identity) = match item {
            Item::Struct(item) => (
                &item.attrs,
                Some((item.ident.clone(), WrapperShape::Struct(item.clone()))),
            ),
            Item::Enum(item) => (&item.attrs, Some((item.ident.clone(), WrapperShape::Other))),
            Item::Union(item) => (&item.attrs, Some((item.ident.clone(), WrapperShape::Other))),
            Item::Type(item) => (&item.attrs, Some((item.ident.clone(), WrapperShape::Other))),
            Item::Fn(item) => (&item.attrs, None),
            Item::Const(item) => (&item.attrs, None),
            Item::Static(item) => (&item.attrs, None),
            Item::Use(item) => (&item.attrs, None),
            Item::Mod(item) => (&item.attrs, None),
            Item::Impl(item) => (&item.attrs, None),
            Item::Trait(item) => (&item.attrs, None),
            Item::Macro(item) => (&item.attrs, None),
            _ => return false,
        };

        if !has_marker_attr(attrs) {
            return false;
        }

        match identity {
            Some((ident, shape)) => self.candidates.push(Candidate {
                ident,
                shape,
                markers: Vec::new(),
                constructors: Vec::new(),
            }),
            None => self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::UnresolvableCandidate,
                item_span(item),
            )),
        }
        true
    }

    fn candidate_mut(&mut self, ident: &Ident) -> Option<&mut Candidate> {
        self.candidates
            .iter_mut()
            .find(|candidate| candidate.ident == *ident)
    }

    fn collect_impl(&mut self, item: &ItemImpl) {
        let Some(self_ident) = self_type_ident(&item.self_ty) else {
            return;
        };

        match &item.trait_ {
            Some((_, path, _)) => {
                let Some(segment) = path.segments.last() else {
                    return;
                };
                let variant = match segment.ident.to_string().as_str() {
                    PLAIN_CONTRACT => StrongVariant::Plain,
                    ORDERED_CONTRACT => StrongVariant::Ordered,
                    _ => return,
                };
                self.base_contract_in_scope = true;
                let value_ty = single_type_argument(&segment.arguments);
                if let Some(candidate) = self.candidate_mut(&self_ident) {
                    candidate.markers.push(MarkerImpl { variant, value_ty });
                }
            }
            None => {
                let constructors: Vec<_> = item
                    .items
                    .iter()
                    .filter_map(|item| match item {
                        ImplItem::Fn(function) if function.sig.ident == "new" => {
                            Some(function.clone())
                        }
                        _ => None,
                    })
                    .collect();
                if let Some(candidate) = self.candidate_mut(&self_ident) {
                    candidate.constructors.extend(constructors);
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for ModuleScanner {
    fn visit_item_impl(&mut self, node: &'ast ItemImpl) {
        self.collect_impl(node);
    }

    fn visit_item_use(&mut self, node: &'ast ItemUse) {
        if use_tree_mentions_contract(&node.tree) {
            self.base_contract_in_scope = true;
        }
    }

    // Nested modules run their own pipeline pass; never descend.
    fn visit_item_mod(&mut self, _node: &'ast syn::ItemMod) {}
}

pub(crate) fn has_marker_attr(attrs: &[Attribute]) -> bool {
    attrs.iter().any(is_marker_attr)
}

pub(crate) fn is_marker_attr(attr: &Attribute) -> bool {
    attr.path()
        .segments
        .last()
        .is_some_and(|segment| segment.ident == MARKER_ATTR)
}

fn item_span(item: &Item) -> proc_macro2::Span {
    use quote::ToTokens;
    item.to_token_stream()
        .into_iter()
        .next()
        .map_or_else(proc_macro2::Span::call_site, |token| token.span())
}

fn self_type_ident(ty: &Type) -> Option<Ident> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.clone()),
        _ => None,
    }
}

fn single_type_argument(arguments: &syn::PathArguments) -> Option<Type> {
    match arguments {
        syn::PathArguments::AngleBracketed(args) if args.args.len() == 1 => {
            match args.args.first() {
                Some(syn::GenericArgument::Type(ty)) => Some(ty.clone()),
                _ => None,
            }
        }
        _ => None,
    }
}

fn use_tree_mentions_contract(tree: &UseTree) -> bool {
    match tree {
        UseTree::Path(path) => {
            // `use strong_types::*` brings both contract markers in.
            if path.ident == "strong_types" && matches!(&*path.tree, UseTree::Glob(_)) {
                return true;
            }
            use_tree_mentions_contract(&path.tree)
        }
        UseTree::Name(name) => {
            name.ident == PLAIN_CONTRACT || name.ident == ORDERED_CONTRACT
        }
        UseTree::Rename(rename) => {
            rename.ident == PLAIN_CONTRACT || rename.ident == ORDERED_CONTRACT
        }
        UseTree::Glob(_) => false,
        UseTree::Group(group) => group.items.iter().any(use_tree_mentions_contract),
    }
}
