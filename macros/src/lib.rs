use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::{format_ident, quote};

/// A field of the struct passed to [`gen_packed!`] along with its
/// `#[packed(...)]` properties.
struct PackedField {
    ident: syn::Ident,
    ty: syn::Type,
    docs: Vec<syn::Attribute>,
    shift: u32,
    bits: u32,
    scale: syn::LitInt,
    normalize: Option<syn::Path>,
}

impl PackedField {
    fn parse(field: &syn::Field) -> syn::Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new_spanned(field, "packed fields must be named"))?;

        let attr = field
            .attrs
            .iter()
            .find(|a| a.path().is_ident("packed"))
            .ok_or_else(|| {
                syn::Error::new_spanned(field, "missing #[packed(shift, bits, scale)] attribute")
            })?;

        let mut shift = None;
        let mut bits = None;
        let mut scale = None;
        let mut normalize = None;

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("shift") {
                shift = Some(meta.value()?.parse::<syn::LitInt>()?.base10_parse::<u32>()?);
            } else if meta.path.is_ident("bits") {
                bits = Some(meta.value()?.parse::<syn::LitInt>()?.base10_parse::<u32>()?);
            } else if meta.path.is_ident("scale") {
                scale = Some(meta.value()?.parse::<syn::LitInt>()?);
            } else if meta.path.is_ident("normalize") {
                normalize = Some(meta.value()?.parse::<syn::Path>()?);
            } else {
                return Err(meta.error("unsupported packed property"));
            }
            Ok(())
        })?;

        let shift = shift.ok_or_else(|| syn::Error::new_spanned(attr, "missing `shift`"))?;
        let bits = bits.ok_or_else(|| syn::Error::new_spanned(attr, "missing `bits`"))?;
        let scale = scale.ok_or_else(|| syn::Error::new_spanned(attr, "missing `scale`"))?;

        if bits == 0 || bits > 63 || shift + bits > 64 {
            return Err(syn::Error::new_spanned(
                attr,
                "field does not fit into 64 bits",
            ));
        }

        let docs = field
            .attrs
            .iter()
            .filter(|a| a.path().is_ident("doc"))
            .cloned()
            .collect();

        Ok(Self {
            ident,
            ty: field.ty.clone(),
            docs,
            shift,
            bits,
            scale,
            normalize,
        })
    }

    fn mask(&self) -> u64 {
        ((1_u64 << self.bits) - 1) << self.shift
    }
}

/// Generate a value type that stores each of its fields as a quantized
/// integer inside a single `u64`.
///
/// ```ignore
/// gen_packed! {
///     pub struct Color {
///         #[packed(shift = 20, bits = 20, scale = 1_000_000, normalize = clamp)]
///         red: f32,
///         #[packed(shift = 0, bits = 20, scale = 1_000_000)]
///         green: f32,
///     }
/// }
/// ```
///
/// Every field gets `<FIELD>_SHIFT`, `<FIELD>_MASK` and `<FIELD>_SCALE`
/// constants, a getter and a `with_<field>` setter. The setter only touches
/// the bits of its own field. A `new` constructor, `packed`/`from_packed` and
/// a `USED_BITS` mask are generated for the type.
#[proc_macro]
pub fn gen_packed(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as syn::ItemStruct);

    match expand(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: syn::ItemStruct) -> syn::Result<proc_macro2::TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "packed types can not be generic",
        ));
    }

    let syn::Fields::Named(ref named) = input.fields else {
        return Err(syn::Error::new_spanned(
            &input.fields,
            "packed types must have named fields",
        ));
    };

    let fields = named
        .named
        .iter()
        .map(PackedField::parse)
        .collect::<syn::Result<Vec<_>>>()?;

    if fields.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "packed types need at least one field",
        ));
    }

    // Fields may not share any bits.
    let mut used = 0_u64;
    for (field, source) in fields.iter().zip(named.named.iter()) {
        if used & field.mask() != 0 {
            return Err(syn::Error::new_spanned(
                source,
                "field overlaps the bits of another field",
            ));
        }
        used |= field.mask();
    }

    let attrs = &input.attrs;
    let vis = &input.vis;
    let name = &input.ident;

    let idents = fields.iter().map(|f| &f.ident).collect::<Vec<_>>();
    let tys = fields.iter().map(|f| &f.ty).collect::<Vec<_>>();
    let with_idents = fields
        .iter()
        .map(|f| format_ident!("with_{}", f.ident))
        .collect::<Vec<_>>();

    let prefixes = fields
        .iter()
        .map(|f| f.ident.to_string().to_case(Case::UpperSnake))
        .collect::<Vec<_>>();
    let shift_consts = prefixes
        .iter()
        .map(|p| format_ident!("{}_SHIFT", p))
        .collect::<Vec<_>>();
    let mask_consts = prefixes
        .iter()
        .map(|p| format_ident!("{}_MASK", p))
        .collect::<Vec<_>>();

    let field_impls = fields.iter().enumerate().map(|(i, field)| {
        let ident = &field.ident;
        let ty = &field.ty;
        let docs = &field.docs;
        let shift = field.shift;
        let bits = field.bits;
        let scale = &field.scale;
        let with_ident = &with_idents[i];
        let shift_const = &shift_consts[i];
        let mask_const = &mask_consts[i];
        let scale_const = format_ident!("{}_SCALE", prefixes[i]);

        let normalized = match field.normalize {
            Some(ref path) => quote! { #path(#ident) },
            None => quote! { #ident },
        };

        let shift_doc = format!("Bit offset of the `{ident}` field.");
        let mask_doc = format!("Mask of the `{ident}` field, before shifting.");
        let scale_doc = format!("Number of stored steps per unit of `{ident}`.");
        let with_doc = format!(
            "Return a copy with `{ident}` replaced. The stored bits of every other field are kept."
        );

        quote! {
            #[doc = #shift_doc]
            pub const #shift_const: u32 = #shift;
            #[doc = #mask_doc]
            pub const #mask_const: u64 = (1 << #bits) - 1;
            #[doc = #scale_doc]
            pub const #scale_const: #ty = #scale as #ty;

            #(#docs)*
            pub fn #ident(&self) -> #ty {
                ((self.packed >> Self::#shift_const) & Self::#mask_const) as #ty / Self::#scale_const
            }

            #[doc = #with_doc]
            pub fn #with_ident(self, #ident: #ty) -> Self {
                let #ident = #normalized;
                // Truncates toward zero, the stored value is the integer part.
                let raw = ((#ident * Self::#scale_const) as u64) & Self::#mask_const;
                Self {
                    packed: (self.packed & !(Self::#mask_const << Self::#shift_const))
                        | (raw << Self::#shift_const),
                }
            }
        }
    });

    Ok(quote! {
        #(#attrs)*
        #[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
        #vis struct #name {
            packed: u64,
        }

        impl #name {
            /// Every bit that belongs to a field.
            pub const USED_BITS: u64 = #((Self::#mask_consts << Self::#shift_consts))|*;

            #(#field_impls)*

            /// Create a new value. Each field is normalized, quantized and
            /// masked into its bits.
            pub fn new(#(#idents: #tys),*) -> Self {
                Self { packed: 0 }#(.#with_idents(#idents))*
            }

            /// The packed representation.
            pub const fn packed(&self) -> u64 {
                self.packed
            }

            /// Create a value from a packed representation. Bits outside of
            /// any field are dropped.
            pub const fn from_packed(packed: u64) -> Self {
                Self {
                    packed: packed & Self::USED_BITS,
                }
            }
        }
    })
}
