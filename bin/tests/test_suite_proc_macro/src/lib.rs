use std::{collections::BTreeMap, path::Path};

use quote::{format_ident, quote};

/// Expands to a module per directory of golden `.lox` files under `bin/tests`,
/// with one `#[test]` per file handing its embedded text to `lox_expect`.
#[proc_macro]
pub fn generate_tests(_: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..");

    let mut suites: BTreeMap<String, Vec<_>> = BTreeMap::new();
    for entry in walkdir::WalkDir::new(&root).sort_by_file_name().into_iter().flatten() {
        let path = entry.path();
        if path.extension() != Some("lox".as_ref()) {
            continue;
        }
        let Ok(relative) = path.strip_prefix(&root) else { continue };
        let suite = relative
            .parent()
            .map(|dir| identifier(&dir.to_string_lossy()))
            .unwrap_or_default();
        let stem = path.file_stem().unwrap_or_default().to_string_lossy();
        let name = format_ident!("{}", identifier(&stem));
        let file = path.to_string_lossy().into_owned();

        suites.entry(suite).or_default().push(quote! {
            #[test]
            fn #name() {
                lox_expect(include_str!(#file));
            }
        });
    }

    if suites.is_empty() {
        let message = format!("no .lox files found under {}", root.display());
        return quote! { compile_error!(#message); }.into();
    }

    let modules = suites.into_iter().map(|(suite, tests)| {
        let suite = format_ident!("{}", if suite.is_empty() { "top_level".to_string() } else { suite });
        quote! {
            mod #suite {
                use super::lox_expect;

                #(#tests)*
            }
        }
    });

    quote! {
        #[ctor::ctor]
        fn init() {
            let _ = env_logger::builder().is_test(true).try_init();
        }

        #(#modules)*
    }
    .into()
}

/// Any path segment as a Rust identifier: separators and punctuation become `_`.
fn identifier(text: &str) -> String {
    let ident: String = text.chars().map(|c| if c.is_ascii_alphanumeric() { c } else { '_' }).collect();
    match ident.chars().next() {
        Some(c) if c.is_ascii_digit() => format!("_{ident}"),
        _ => ident,
    }
}

#[cfg(test)]
mod tests {
    use super::identifier;

    #[test]
    fn identifiers_from_paths() {
        assert_eq!(identifier("errors/too-deep"), "errors_too_deep");
        assert_eq!(identifier("1st.case"), "_1st_case");
        assert_eq!(identifier("ünicode"), "_nicode");
    }
}
