use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each channel of the notation.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    // `Hsv` is written as `hsv(...)` and `hsva(...)`.
    let keyword = struct_name.to_string().to_case(Case::Flat);
    let keyword_alpha = format!("{keyword}a");

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color in this notation.
            pub fn new(
                #field1: crate::components::Component,
                #field2: crate::components::Component,
                #field3: crate::components::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::components::Components {
                crate::components::Components(self.#field1, self.#field2, self.#field3)
            }
        }

        impl From<crate::components::Components> for #struct_name {
            fn from(value: crate::components::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl crate::models::Notation for #struct_name {
            const KEYWORD: &'static str = #keyword;
            const KEYWORD_ALPHA: &'static str = #keyword_alpha;
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
