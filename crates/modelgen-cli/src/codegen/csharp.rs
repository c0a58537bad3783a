//! C# class generation from class descriptions.

use super::naming::{to_flat_lower_case, uncapitalize};
use modelgen_core::{ClassDescriptor, ClassRegistry, ModelGenError, ModelGenResult};

/// Generate the C# class for `class_name`.
///
/// Returns an empty string when the registry has no such class.
pub fn generate(registry: &ClassRegistry, class_name: &str) -> String {
    try_generate(registry, class_name).unwrap_or_default()
}

/// Generate the C# class for `class_name`, reporting a missing class as an error.
pub fn try_generate(registry: &ClassRegistry, class_name: &str) -> ModelGenResult<String> {
    let class = registry
        .get(class_name)
        .ok_or_else(|| ModelGenError::ClassNotFound(class_name.to_string()))?;

    Ok(generate_class(class))
}

/// Generate the C# source for one class description.
pub fn generate_class(class: &ClassDescriptor) -> String {
    let name = &class.name;
    let mut code = String::new();

    // Class declaration
    code.push_str(&format!("public class {}\n", name));
    code.push_str("{\n");

    // Properties
    for property in &class.properties {
        code.push_str(&format!(
            "    public {} {} {{ get; set; }}\n",
            property.ty, property.name
        ));
    }

    // Parameterless constructor
    code.push('\n');
    code.push_str(&format!("    public {}()\n", name));
    code.push_str("    {\n");
    code.push_str("    }\n");

    // Protected constructor taking every property
    let constructor_params: Vec<String> = class
        .properties
        .iter()
        .map(|p| format!("{} {}", p.ty, to_flat_lower_case(&p.name)))
        .collect();

    code.push('\n');
    push_argument_list(
        &mut code,
        &format!("    protected {}", name),
        &constructor_params,
        "        ",
        "    ",
        "",
    );
    code.push_str("    {\n");
    for property in &class.properties {
        code.push_str(&format!(
            "        this.{} = {};\n",
            property.name,
            to_flat_lower_case(&property.name)
        ));
    }
    code.push_str("    }\n");

    // Factory method
    let factory_args: Vec<String> = class
        .properties
        .iter()
        .map(|p| uncapitalize(&p.name))
        .collect();
    let factory_params: Vec<String> = class
        .properties
        .iter()
        .zip(&factory_args)
        .map(|(p, arg)| format!("{} {}", p.ty, arg))
        .collect();

    code.push('\n');
    push_argument_list(
        &mut code,
        &format!("    public static {} {}Factory", name, name),
        &factory_params,
        "        ",
        "    ",
        "",
    );
    code.push_str("    {\n");
    push_argument_list(
        &mut code,
        &format!("        return new {}", name),
        &factory_args,
        "            ",
        "        ",
        ";",
    );
    code.push_str("    }\n");

    code.push_str("}\n");

    code
}

/// Append `head(...)suffix` with one item per line.
///
/// Items are joined with `",\n"`, so the last one never carries a separator.
/// An empty list renders as `head()suffix` on a single line.
fn push_argument_list(
    code: &mut String,
    head: &str,
    items: &[String],
    item_indent: &str,
    close_indent: &str,
    suffix: &str,
) {
    code.push_str(head);
    if items.is_empty() {
        code.push_str(&format!("(){}\n", suffix));
        return;
    }

    code.push_str("(\n");
    let lines: Vec<String> = items
        .iter()
        .map(|item| format!("{}{}", item_indent, item))
        .collect();
    code.push_str(&lines.join(",\n"));
    code.push('\n');
    code.push_str(&format!("{}){}\n", close_indent, suffix));
}
