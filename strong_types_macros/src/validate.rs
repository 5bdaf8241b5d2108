//! The structural validator.
//!
//! Runs the ordered rule sequence over one [`Candidate`] and produces either
//! a [`ValidatedStrongType`] descriptor or exactly one diagnostic: checks
//! short-circuit at the first failure. Candidates are independent; a failure
//! here never affects sibling candidates.
//!
//! Rule order: wrapper shape, base contract, constructor count, parameter
//! count, parameter type, forwarding form, forwarded expression, forwarded
//! name. The base-contract-in-scope precondition is checked before all of
//! them, because without either marker trait visible nothing else can be
//! resolved.

use syn::{Expr, Fields, FnArg, ImplItemFn, Member, Pat, Stmt, Type};

use crate::diagnostics::{Diagnostic, DiagnosticKind};
use crate::parse::{Candidate, StrongVariant, ValidatedStrongType, WrapperShape};

pub(crate) fn validate(
    candidate: &Candidate,
    base_contract_in_scope: bool,
) -> Result<ValidatedStrongType, Diagnostic> {
    let name = candidate.name();
    let fail = |kind: DiagnosticKind| Err(Diagnostic::new(kind, candidate.span()));

    if !base_contract_in_scope {
        return fail(DiagnosticKind::ContractNotInScope(name));
    }

    // 1. The declaration must be in the shape generation can extend: a
    //    braced struct with the single `value` field.
    let item = match &candidate.shape {
        WrapperShape::Struct(item) => item,
        WrapperShape::Other => return fail(DiagnosticKind::NotWrapperStruct(name)),
    };
    if !is_wrapper_shape(&item.fields) {
        return fail(DiagnosticKind::NotWrapperStruct(name));
    }

    // 2. Exactly one base marker impl, carrying the value type parameter.
    let (variant, value_ty) = match candidate.markers.as_slice() {
        [marker] => match &marker.value_ty {
            Some(value_ty) => (marker.variant, value_ty.clone()),
            None => return fail(DiagnosticKind::DoesNotExtendBase(name)),
        },
        _ => return fail(DiagnosticKind::DoesNotExtendBase(name)),
    };

    // 3. Exactly one constructor.
    let constructor = match candidate.constructors.as_slice() {
        [constructor] => constructor,
        others => {
            return fail(DiagnosticKind::NoSingleConstructor(name, others.len()));
        }
    };

    // 4. One named parameter, no receiver.
    let Some((parameter_name, parameter_ty)) = single_named_parameter(constructor) else {
        return fail(DiagnosticKind::WrongParameterCount(name));
    };

    // 5. The parameter's type is the base parameterization's value type.
    if *parameter_ty != value_ty {
        return fail(DiagnosticKind::ParameterTypeMismatch(name));
    }

    // 6. The body forwards through the wrapper initialization.
    let Some(forwarded) = forwarded_expression(constructor, &candidate.ident) else {
        return fail(DiagnosticKind::MissingForwarding(name));
    };

    // 7. The forwarded argument is a bare identifier, not a literal or a
    //    transformed expression.
    let Some(forwarded_name) = bare_identifier(forwarded) else {
        return fail(DiagnosticKind::ForwardedArgumentMismatch(name));
    };

    // 8. And it is the constructor's own parameter, by name.
    if forwarded_name != parameter_name {
        return fail(DiagnosticKind::ForwardedArgumentNameMismatch(
            name,
            forwarded_name.to_string(),
            parameter_name.to_string(),
        ));
    }

    Ok(ValidatedStrongType {
        ident: candidate.ident.clone(),
        value_ty,
        variant,
        has_constructor: true,
    })
}

fn is_wrapper_shape(fields: &Fields) -> bool {
    match fields {
        Fields::Named(named) => {
            named.named.len() == 1
                && named
                    .named
                    .first()
                    .and_then(|field| field.ident.as_ref())
                    .is_some_and(|ident| ident == "value")
        }
        _ => false,
    }
}

fn single_named_parameter(constructor: &ImplItemFn) -> Option<(&syn::Ident, &Type)> {
    if constructor.sig.receiver().is_some() || constructor.sig.inputs.len() != 1 {
        return None;
    }
    match constructor.sig.inputs.first() {
        Some(FnArg::Typed(parameter)) => match &*parameter.pat {
            Pat::Ident(pat) => Some((&pat.ident, &*parameter.ty)),
            _ => None,
        },
        _ => None,
    }
}

/// The expression assigned to `value` when the body is exactly the
/// forwarding form `Self { value: .. }` (or the equivalent with the type's
/// own name). Field init shorthand yields the field identifier expression.
fn forwarded_expression<'a>(
    constructor: &'a ImplItemFn,
    self_ident: &syn::Ident,
) -> Option<&'a Expr> {
    let [Stmt::Expr(Expr::Struct(body), None)] = constructor.block.stmts.as_slice() else {
        return None;
    };
    let target = body.path.get_ident()?;
    if target != "Self" && target != self_ident {
        return None;
    }
    if body.rest.is_some() || body.fields.len() != 1 {
        return None;
    }
    let field = body.fields.first()?;
    match &field.member {
        Member::Named(member) if member == "value" => Some(&field.expr),
        _ => None,
    }
}

fn bare_identifier(expr: &Expr) -> Option<&syn::Ident> {
    match expr {
        Expr::Path(path) if path.qself.is_none() => path.path.get_ident(),
        _ => None,
    }
}
