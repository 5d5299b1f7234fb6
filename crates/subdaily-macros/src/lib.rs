use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, Lit, Meta};

/// Derive macro that generates a column-wise `*Series` struct for collecting
/// per-step output records.
///
/// Every collected field must be `f64`; it becomes a `Vec<f64>` column on the
/// series struct. Fields of any other type must be marked `#[series(skip)]`.
/// The series struct gets `with_capacity`, `push`, `len`, `is_empty` and
/// `column`, and the record type gets a `column_names()` associated function.
///
/// Use `#[series(name = "CustomName")]` on the struct to override the default
/// series struct name (`{StructName}Series`).
#[proc_macro_derive(Series, attributes(series))]
pub fn derive_series(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;

    let series_name = match struct_series_name(&input) {
        Ok(custom) => custom.unwrap_or_else(|| format_ident!("{}Series", name)),
        Err(err) => return err.to_compile_error().into(),
    };

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Series can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Series can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    let mut columns = Vec::new();
    for field in fields {
        match is_skipped(field) {
            Ok(true) => continue,
            Ok(false) => {}
            Err(err) => return err.to_compile_error().into(),
        }
        if !is_f64_type(&field.ty) {
            return syn::Error::new_spanned(
                &field.ty,
                "Series derive: collected fields must be f64 (mark others #[series(skip)])",
            )
            .to_compile_error()
            .into();
        }
        if let Some(ident) = field.ident.as_ref() {
            columns.push(ident);
        }
    }

    if columns.is_empty() {
        return syn::Error::new_spanned(name, "Series struct must collect at least one f64 field")
            .to_compile_error()
            .into();
    }

    let first = columns[0];
    let column_strs: Vec<String> = columns.iter().map(|c| c.to_string()).collect();

    let series_fields = columns.iter().map(|c| quote! { pub #c: Vec<f64> });
    let with_cap_fields = columns.iter().map(|c| quote! { #c: Vec::with_capacity(n) });
    let push_fields = columns.iter().map(|c| quote! { self.#c.push(record.#c); });
    let column_arms = columns
        .iter()
        .zip(&column_strs)
        .map(|(c, s)| quote! { #s => Some(self.#c.as_slice()), });

    let expanded = quote! {
        /// Column-wise series generated from per-step records.
        #[derive(Debug, Clone, Default)]
        pub struct #series_name {
            #(#series_fields,)*
        }

        impl #series_name {
            /// Pre-allocate every column for `n` steps.
            pub fn with_capacity(n: usize) -> Self {
                Self {
                    #(#with_cap_fields,)*
                }
            }

            /// Append one step's record.
            pub fn push(&mut self, record: &#name) {
                #(#push_fields)*
            }

            /// Number of steps stored.
            pub fn len(&self) -> usize {
                self.#first.len()
            }

            /// Returns `true` if no steps have been stored.
            pub fn is_empty(&self) -> bool {
                self.#first.is_empty()
            }

            /// Look up a column by field name.
            pub fn column(&self, name: &str) -> Option<&[f64]> {
                match name {
                    #(#column_arms)*
                    _ => None,
                }
            }
        }

        impl #name {
            /// Names of the collected columns, in declaration order.
            pub fn column_names() -> &'static [&'static str] {
                &[#(#column_strs),*]
            }
        }
    };

    expanded.into()
}

fn struct_series_name(input: &DeriveInput) -> syn::Result<Option<proc_macro2::Ident>> {
    for attr in &input.attrs {
        if !attr.path().is_ident("series") {
            continue;
        }
        let nested = attr.parse_args_with(
            syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated,
        )?;
        for meta in nested {
            if let Meta::NameValue(nv) = &meta {
                if nv.path.is_ident("name") {
                    if let syn::Expr::Lit(expr_lit) = &nv.value {
                        if let Lit::Str(lit_str) = &expr_lit.lit {
                            return Ok(Some(format_ident!("{}", lit_str.value())));
                        }
                    }
                    return Err(syn::Error::new_spanned(&nv.value, "expected a string literal"));
                }
            }
            return Err(syn::Error::new_spanned(meta, "unknown series attribute"));
        }
    }
    Ok(None)
}

fn is_skipped(field: &Field) -> syn::Result<bool> {
    for attr in &field.attrs {
        if !attr.path().is_ident("series") {
            continue;
        }
        let mut skip = false;
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unknown series field attribute"))
            }
        })?;
        if skip {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_f64_type(ty: &syn::Type) -> bool {
    if let syn::Type::Path(type_path) = ty {
        type_path.path.is_ident("f64")
    } else {
        false
    }
}
