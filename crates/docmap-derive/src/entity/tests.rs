use super::*;

fn expand_str(input: TokenStream) -> String {
    derive_entity(input).to_string()
}

fn assert_error(input: TokenStream, message: &str) {
    let out = expand_str(input);

    assert!(out.contains("compile_error"), "expected a compile error, got: {out}");
    assert!(out.contains(message), "expected `{message}` in: {out}");
}

#[test]
fn plain_struct_expands_to_both_impls() {
    let out = expand_str(quote! {
        #[entity(collection = "users")]
        struct User {
            #[entity(id)]
            id: u64,
            name: String,
        }
    });

    assert!(!out.contains("compile_error"));
    assert!(out.contains("DocumentValue for User"));
    assert!(out.contains("Entity for User"));
    assert!(out.contains("\"users\""));
    assert!(out.contains("FieldRole :: Identity"));
    assert!(!out.contains("timestamps_mut"));
}

#[test]
fn rename_changes_stored_name() {
    let out = expand_str(quote! {
        struct User {
            #[entity(rename = "full_name")]
            name: String,
        }
    });

    assert!(out.contains("\"full_name\""));
}

#[test]
fn skipped_fields_are_left_out_of_the_model() {
    let out = expand_str(quote! {
        struct User {
            name: String,
            #[entity(skip)]
            cache: Vec<u8>,
        }
    });

    assert!(!out.contains("\"cache\""));
    assert!(!out.contains("self . cache"));
}

#[test]
fn timestamps_field_gets_accessor() {
    let out = expand_str(quote! {
        struct Post {
            #[entity(id)]
            id: u64,
            #[entity(timestamps)]
            stamps: Timestamps,
        }
    });

    assert!(out.contains("timestamps_mut"));
    assert!(out.contains("FieldRole :: Flatten"));
}

#[test]
fn raw_identifiers_are_unraw_in_names() {
    let out = expand_str(quote! {
        struct Token {
            r#type: String,
        }
    });

    assert!(out.contains("\"type\""));
    assert!(!out.contains("\"r#type\""));
}

#[test]
fn generic_params_get_bounds() {
    let out = expand_str(quote! {
        struct Wrapper<T> {
            inner: T,
        }
    });

    assert!(out.contains("T : :: docmap :: traits :: DocumentValue"));
    assert!(out.contains(":: core :: default :: Default"));
}

#[test]
fn enums_are_rejected() {
    let out = expand_str(quote! {
        enum Kind {
            A,
            B,
        }
    });

    assert!(out.contains("compile_error"));
}

#[test]
fn tuple_structs_are_rejected() {
    let out = expand_str(quote! {
        struct Pair(u32, u32);
    });

    assert!(out.contains("compile_error"));
}

#[test]
fn second_id_is_rejected() {
    assert_error(
        quote! {
            struct User {
                #[entity(id)]
                id: u64,
                #[entity(id)]
                other: u64,
            }
        },
        "only one field can be marked `id`",
    );
}

#[test]
fn id_and_skip_conflict() {
    assert_error(
        quote! {
            struct User {
                #[entity(id, skip)]
                id: u64,
            }
        },
        "`skip` cannot be combined",
    );
}

#[test]
fn id_and_flatten_conflict() {
    assert_error(
        quote! {
            struct User {
                #[entity(id, flatten)]
                id: Inner,
            }
        },
        "`id` cannot be combined",
    );
}

#[test]
fn rename_on_flatten_is_rejected() {
    assert_error(
        quote! {
            struct User {
                #[entity(flatten, rename = "x")]
                inner: Inner,
            }
        },
        "no key of its own",
    );
}

#[test]
fn rename_on_id_is_rejected() {
    assert_error(
        quote! {
            struct User {
                #[entity(id, rename = "key")]
                id: u64,
            }
        },
        "cannot be renamed",
    );
}

#[test]
fn flattened_fields_must_be_entities() {
    let out = expand_str(quote! {
        struct Post {
            #[entity(id)]
            id: u64,
            #[entity(flatten)]
            tags: Vec<String>,
            #[entity(timestamps)]
            stamps: Timestamps,
        }
    });

    assert!(!out.contains("compile_error"));
    assert!(out.contains("Vec < String > : :: docmap :: traits :: Entity"));
    assert!(out.contains("Timestamps : :: docmap :: traits :: Entity"));
    assert!(!out.contains("u64 : :: docmap :: traits :: Entity"));
}

#[test]
fn reserved_identity_key_is_rejected() {
    assert_error(
        quote! {
            struct User {
                #[entity(rename = "_id")]
                key: u64,
            }
        },
        "`_id` is reserved",
    );
}

#[test]
fn duplicate_stored_names_are_rejected() {
    assert_error(
        quote! {
            struct User {
                name: String,
                #[entity(rename = "name")]
                nick: String,
            }
        },
        "duplicate stored name `name`",
    );
}

#[test]
fn every_misuse_is_reported() {
    let out = expand_str(quote! {
        struct User {
            #[entity(timestamps)]
            a: Timestamps,
            #[entity(timestamps)]
            b: Timestamps,
            #[entity(rename = "_id")]
            c: u64,
        }
    });

    assert!(out.contains("only one field can be marked `timestamps`"));
    assert!(out.contains("`_id` is reserved"));
}

#[test]
fn unknown_attribute_is_rejected() {
    let out = expand_str(quote! {
        struct User {
            #[entity(primary)]
            id: u64,
        }
    });

    assert!(out.contains("compile_error"));
}
