//! Property-based tests for the class generator.
//!
//! Checks parameter counts, ordering and separator placement for arbitrary
//! property lists, including the empty one.

use modelgen_cli::codegen::generate;
use modelgen_cli::codegen::naming::{to_flat_lower_case, uncapitalize};
use modelgen_core::{ClassDescriptor, ClassRegistry};
use proptest::prelude::*;

fn arb_property() -> impl Strategy<Value = (String, String)> {
    (
        "[A-Z][a-zA-Z0-9]{0,11}",
        prop::sample::select(vec!["string", "int", "decimal?", "List<string>", "DateTime"]),
    )
        .prop_map(|(name, ty)| (name, ty.to_string()))
}

fn arb_class() -> impl Strategy<Value = ClassDescriptor> {
    ("[A-Z][a-zA-Z]{0,9}", prop::collection::vec(arb_property(), 0..12)).prop_map(
        |(name, properties)| {
            properties
                .into_iter()
                .fold(ClassDescriptor::new(name), |class, (prop_name, ty)| {
                    class.with_property(prop_name, ty)
                })
        },
    )
}

/// Lines between `open` (exclusive) and the next line equal to `close`.
fn block_lines<'a>(code: &'a str, open: &str, close: &str) -> Vec<&'a str> {
    code.lines()
        .skip_while(|line| *line != open)
        .skip(1)
        .take_while(|line| *line != close)
        .collect()
}

fn strip_separators(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map(|line| line.trim_end_matches(',').to_string())
        .collect()
}

proptest! {
    /// Property: Unknown class names always produce empty output
    #[test]
    fn proptest_unknown_class_is_empty(class in arb_class(), other in "[a-z]{1,8}") {
        let registry: ClassRegistry = [class].into_iter().collect();

        prop_assert_eq!(generate(&registry, &other), "");
    }

    /// Property: Constructor, factory and call list one entry per property, in order
    #[test]
    fn proptest_parameter_lists_follow_property_order(class in arb_class()) {
        let registry: ClassRegistry = [class.clone()].into_iter().collect();
        let name = &class.name;

        let code = generate(&registry, name);

        if class.properties.is_empty() {
            let constructor_header = format!("    protected {}()", name);
            let factory_header = format!("    public static {} {}Factory()", name, name);
            let call = format!("        return new {}();", name);
            prop_assert!(code.lines().any(|l| l == constructor_header));
            prop_assert!(code.lines().any(|l| l == factory_header));
            prop_assert!(code.lines().any(|l| l == call));
        } else {
            let constructor = block_lines(&code, &format!("    protected {}(", name), "    )");
            let factory = block_lines(
                &code,
                &format!("    public static {} {}Factory(", name, name),
                "    )",
            );
            let call = block_lines(&code, &format!("        return new {}(", name), "        );");

            let expected_constructor: Vec<String> = class
                .properties
                .iter()
                .map(|p| format!("        {} {}", p.ty, to_flat_lower_case(&p.name)))
                .collect();
            let expected_factory: Vec<String> = class
                .properties
                .iter()
                .map(|p| format!("        {} {}", p.ty, uncapitalize(&p.name)))
                .collect();
            let expected_call: Vec<String> = class
                .properties
                .iter()
                .map(|p| format!("            {}", uncapitalize(&p.name)))
                .collect();

            prop_assert_eq!(strip_separators(&constructor), expected_constructor);
            prop_assert_eq!(strip_separators(&factory), expected_factory);
            prop_assert_eq!(strip_separators(&call), expected_call);

            for lines in [&constructor, &factory, &call] {
                let (last, rest) = lines.split_last().unwrap();
                prop_assert!(!last.ends_with(','), "last entry must not carry a comma");
                prop_assert!(rest.iter().all(|l| l.ends_with(',')), "separators missing");
            }
        }
    }

    /// Property: Exactly one of each generated member, whatever the property count
    #[test]
    fn proptest_members_emitted_once(class in arb_class()) {
        let registry: ClassRegistry = [class.clone()].into_iter().collect();
        let name = &class.name;

        let code = generate(&registry, name);

        let parameterless = format!("    public {}()", name);
        let factory = format!("    public static {} {}Factory(", name, name);
        let protected = format!("    protected {}(", name);
        prop_assert_eq!(code.lines().filter(|l| *l == parameterless).count(), 1);
        prop_assert_eq!(code.lines().filter(|l| l.starts_with(&factory)).count(), 1);
        prop_assert_eq!(code.lines().filter(|l| l.starts_with(&protected)).count(), 1);
        prop_assert_eq!(
            code.lines().filter(|l| l.ends_with("{ get; set; }")).count(),
            class.properties.len()
        );
        prop_assert!(!code.contains(",\n    )"));
        prop_assert!(!code.contains(",\n        );"));
        prop_assert!(code.ends_with("}\n") && !code.ends_with("\n\n"), "code must end with a single trailing newline after closing brace");
    }

    /// Property: Generation is deterministic
    #[test]
    fn proptest_generation_is_idempotent(class in arb_class()) {
        let registry: ClassRegistry = [class.clone()].into_iter().collect();

        prop_assert_eq!(generate(&registry, &class.name), generate(&registry, &class.name));
    }
}
