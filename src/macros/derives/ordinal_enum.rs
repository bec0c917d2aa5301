use std::collections::HashSet;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_macro_input, parse_quote, Attribute, Data, DeriveInput, Fields, LitStr, Path};
use crate::case_conv::RenameRule;

pub fn ordinal_enum(input: proc_macro::TokenStream) -> proc_macro::TokenStream
{
    let derive = parse_macro_input!(input as DeriveInput);
    match expand(&derive)
    {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct EnumAttrs
{
    rename_rule: RenameRule,
    // path the runtime crate is reachable under from the deriving crate
    krate: Path,
}

// #[ordinal_enum(rename_all = "...", crate = "...")] on the enum, #[ordinal_enum(name = "...")] on variants
fn parse_enum_attrs(attrs: &[Attribute]) -> syn::Result<EnumAttrs>
{
    let mut parsed = EnumAttrs
    {
        rename_rule: RenameRule::Verbatim,
        krate: parse_quote!(::enum_sigil),
    };
    for attr in attrs
    {
        if !attr.path().is_ident("ordinal_enum") { continue; }

        attr.parse_nested_meta(|meta|
        {
            if meta.path.is_ident("rename_all")
            {
                let rule_lit: LitStr = meta.value()?.parse()?;
                parsed.rename_rule = RenameRule::parse(&rule_lit.value()).ok_or_else(||
                    syn::Error::new_spanned(&rule_lit, "unknown rename rule, expected one of \
                        PascalCase, camelCase, snake_case, SCREAMING_SNAKE_CASE, kebab-case, Title Case, lowercase"))?;
                return Ok(());
            }
            if meta.path.is_ident("crate")
            {
                let path_lit: LitStr = meta.value()?.parse()?;
                parsed.krate = path_lit.parse()?;
                return Ok(());
            }
            Err(meta.error("expected `rename_all = \"...\"` or `crate = \"...\"`"))
        })?;
    }
    Ok(parsed)
}

fn parse_variant_name(attrs: &[Attribute]) -> syn::Result<Option<LitStr>>
{
    let mut name = None;
    for attr in attrs
    {
        if !attr.path().is_ident("ordinal_enum") { continue; }

        attr.parse_nested_meta(|meta|
        {
            if !meta.path.is_ident("name")
            {
                return Err(meta.error("expected `name = \"...\"`"));
            }
            name = Some(meta.value()?.parse()?);
            Ok(())
        })?;
    }
    Ok(name)
}

fn expand(derive: &DeriveInput) -> syn::Result<TokenStream>
{
    let type_name = &derive.ident;

    let Data::Enum(ref data_enum) = derive.data else
    {
        return Err(syn::Error::new_spanned(type_name, "#[derive(OrdinalEnum)] can only be used with enums"));
    };
    if !derive.generics.params.is_empty()
    {
        return Err(syn::Error::new_spanned(&derive.generics, "#[derive(OrdinalEnum)] enums cannot be generic"));
    }
    if data_enum.variants.is_empty()
    {
        return Err(syn::Error::new_spanned(type_name, format!("{type_name} must declare at least one variant")));
    }

    let EnumAttrs { rename_rule, krate } = parse_enum_attrs(&derive.attrs)?;

    let mut variant_idents = Vec::new();
    let mut variant_names = Vec::new();
    let mut seen_names = HashSet::new();

    for variant in &data_enum.variants
    {
        let variant_ident = &variant.ident;
        let Fields::Unit = variant.fields else
        {
            return Err(syn::Error::new_spanned(variant, format!("{type_name}::{variant_ident} must be a unit variant")));
        };

        let name = match parse_variant_name(&variant.attrs)?
        {
            Some(name) => name.value(),
            None => rename_rule.apply(&variant_ident.to_string()),
        };
        if name.is_empty()
        {
            return Err(syn::Error::new_spanned(variant, format!("{type_name}::{variant_ident} has an empty name")));
        }
        if !seen_names.insert(name.clone())
        {
            return Err(syn::Error::new_spanned(variant, format!("{type_name} has more than one member named {name:?}")));
        }

        variant_idents.push(variant_ident);
        variant_names.push(name);
    }

    let variants_count = variant_idents.len();
    let ordinals = 0..variants_count;

    let expanded = quote!
    {
        impl #krate::OrdinalEnum for #type_name
        {
            const COUNT: usize = #variants_count;

            #[inline]
            fn ordinal(self) -> usize
            {
                match self
                {
                    #(Self::#variant_idents => #ordinals,)*
                }
            }

            #[inline]
            fn name(self) -> &'static str
            {
                match self
                {
                    #(Self::#variant_idents => #variant_names,)*
                }
            }

            fn values() -> &'static [Self]
            {
                static VALUES: [#type_name; #variants_count] = [#(#type_name::#variant_idents),*];
                &VALUES
            }
        }
        impl ::core::fmt::Display for #type_name
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result
            {
                f.write_str(<Self as #krate::OrdinalEnum>::name(*self))
            }
        }
    };

    Ok(expanded)
}
