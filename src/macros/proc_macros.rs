use proc_macro::TokenStream;
use derives::ordinal_enum;

mod derives;
mod case_conv;

// OrdinalEnum implements enum_sigil::OrdinalEnum (ordinal, name, values, value_of) and Display for a fieldless enum.
// Names come from the variant idents, adjusted by #[ordinal_enum(rename_all = "..")] or #[ordinal_enum(name = "..")]
// #[ordinal_enum(crate = "..")] names the runtime crate when it is not reachable as ::enum_sigil (e.g. through sigil)
#[proc_macro_derive(OrdinalEnum, attributes(ordinal_enum))]
pub fn derive_ordinal_enum(input: TokenStream) -> TokenStream
{
    ordinal_enum::ordinal_enum(input)
}
