//! Implementation of the `#[callable]` attribute macro.
//!
//! # Generated Code Structure
//!
//! For `#[callable(defaults(b = 10))] fn add(a: i64, b: i64) -> i64 { a + b }`
//! the macro keeps `add` and generates:
//!
//! ```text
//! fn add_callable() -> ::curried::Bound<i64, fn([i64; 2]) -> i64, 2> {
//!     ::curried::Bound::new(
//!         ::curried::Signature::new("add")
//!             .parameter("a")
//!             .parameter_with_default("b", 10),
//!         (|[a, b]: [i64; 2]| add(a, b)) as fn([i64; 2]) -> i64,
//!     )
//! }
//! ```
//!
//! On invalid input the function is still emitted, followed by the
//! compile error, so the error is the only diagnostic reported.

use proc_macro2::{Literal, TokenStream};
use quote::{format_ident, quote};
use syn::{Expr, FnArg, Ident, ItemFn, LitStr, Pat, ReturnType, Type};

struct CallableAttribute {
    name: Option<LitStr>,
    defaults: Vec<(Ident, Expr)>,
}

struct CallableParameter {
    identifier: Ident,
    parameter_type: Type,
    default: Option<Expr>,
}

pub fn callable_impl(attribute: TokenStream, item: TokenStream) -> TokenStream {
    let function: ItemFn = match syn::parse2(item) {
        Ok(function) => function,
        Err(error) => return error.to_compile_error(),
    };

    match expand(attribute, &function) {
        Ok(generated) => quote! {
            #function
            #generated
        },
        Err(error) => {
            let error = error.to_compile_error();
            quote! {
                #function
                #error
            }
        }
    }
}

fn expand(attribute: TokenStream, function: &ItemFn) -> syn::Result<TokenStream> {
    let attribute = parse_attribute(attribute)?;
    let parameters = collect_parameters(function, attribute.defaults)?;

    let function_identifier = &function.sig.ident;
    let visibility = &function.vis;
    let callable_identifier = format_ident!("{}_callable", function_identifier);
    let name = attribute
        .name
        .map_or_else(|| function_identifier.to_string(), |literal| literal.value());

    let argument_type = &parameters[0].parameter_type;
    let arity = Literal::usize_unsuffixed(parameters.len());
    let output = match &function.sig.output {
        ReturnType::Default => quote! { () },
        ReturnType::Type(_, output_type) => quote! { #output_type },
    };

    let identifiers: Vec<&Ident> = parameters
        .iter()
        .map(|parameter| &parameter.identifier)
        .collect();

    let parameter_calls = parameters.iter().map(|parameter| {
        let parameter_name = parameter.identifier.to_string();
        match &parameter.default {
            Some(default) => quote! { .parameter_with_default(#parameter_name, #default) },
            None => quote! { .parameter(#parameter_name) },
        }
    });

    let documentation = format!("Callable form of `{function_identifier}`, derived by `#[callable]`.");

    Ok(quote! {
        #[doc = #documentation]
        #visibility fn #callable_identifier()
            -> ::curried::Bound<#argument_type, fn([#argument_type; #arity]) -> #output, #arity>
        {
            ::curried::Bound::new(
                ::curried::Signature::new(#name) #(#parameter_calls)*,
                (|[#(#identifiers),*]: [#argument_type; #arity]| #function_identifier(#(#identifiers),*))
                    as fn([#argument_type; #arity]) -> #output,
            )
        }
    })
}

fn parse_attribute(attribute: TokenStream) -> syn::Result<CallableAttribute> {
    let mut name: Option<LitStr> = None;
    let mut defaults: Vec<(Ident, Expr)> = Vec::new();

    let parser = syn::meta::parser(|meta| {
        if meta.path.is_ident("name") {
            name = Some(meta.value()?.parse()?);
            Ok(())
        } else if meta.path.is_ident("defaults") {
            meta.parse_nested_meta(|parameter| {
                let identifier = parameter
                    .path
                    .get_ident()
                    .cloned()
                    .ok_or_else(|| parameter.error("expected a parameter name"))?;
                let value: Expr = parameter.value()?.parse()?;
                defaults.push((identifier, value));
                Ok(())
            })
        } else {
            Err(meta.error("unsupported callable option, expected `name` or `defaults`"))
        }
    });
    syn::parse::Parser::parse2(parser, attribute)?;

    Ok(CallableAttribute { name, defaults })
}

fn collect_parameters(
    function: &ItemFn,
    defaults: Vec<(Ident, Expr)>,
) -> syn::Result<Vec<CallableParameter>> {
    let signature = &function.sig;

    if let Some(asyncness) = &signature.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "async functions cannot be callables",
        ));
    }
    if !signature.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &signature.generics,
            "generic functions cannot be callables",
        ));
    }
    if signature.inputs.is_empty() {
        return Err(syn::Error::new_spanned(
            &signature.ident,
            "callable functions require at least one parameter",
        ));
    }

    let mut parameters: Vec<CallableParameter> = Vec::with_capacity(signature.inputs.len());
    for input in &signature.inputs {
        let typed = match input {
            FnArg::Receiver(receiver) => {
                return Err(syn::Error::new_spanned(
                    receiver,
                    "methods cannot be callables; implement `Callable` for the receiver type instead",
                ));
            }
            FnArg::Typed(typed) => typed,
        };

        let identifier = match &*typed.pat {
            Pat::Ident(pattern) if pattern.subpat.is_none() && pattern.by_ref.is_none() => {
                pattern.ident.clone()
            }
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "callable parameters must be plain identifiers",
                ));
            }
        };

        if let Some(first) = parameters.first() {
            let expected = &first.parameter_type;
            let found = &typed.ty;
            if quote!(#expected).to_string() != quote!(#found).to_string() {
                return Err(syn::Error::new_spanned(
                    found,
                    "all parameters of a callable must share one argument type",
                ));
            }
        }

        parameters.push(CallableParameter {
            identifier,
            parameter_type: (*typed.ty).clone(),
            default: None,
        });
    }

    for (identifier, value) in defaults {
        let parameter = parameters
            .iter_mut()
            .find(|parameter| parameter.identifier == identifier)
            .ok_or_else(|| {
                syn::Error::new_spanned(
                    &identifier,
                    format!("unknown parameter `{identifier}` in defaults"),
                )
            })?;
        if parameter.default.is_some() {
            return Err(syn::Error::new_spanned(
                &identifier,
                format!("duplicate default for parameter `{identifier}`"),
            ));
        }
        parameter.default = Some(value);
    }

    Ok(parameters)
}
