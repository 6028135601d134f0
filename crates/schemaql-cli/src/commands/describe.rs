use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use crate::sdl_files;
use anyhow::Context;
use schemaql::ImplementationMap;
use schemaql::TypeRegistry;
use schemaql::types::Argument;
use schemaql::types::Field;
use schemaql::types::InputField;
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct DescribeCmd {
    #[arg(
        help="Path to the SDL file to describe.",
        name="FILE_PATH",
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for DescribeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match load_registry(self.file_path.as_path()) {
            Ok(registry) => CommandResult::stdout(format_args!(
                "{}",
                describe_registry(&registry),
            )),
            Err(err) => CommandResult::stderr(format_args!(
                "{} {err:#}",
                output_utils::RED_X,
            )),
        }
    }
}

fn load_registry(path: &Path) -> anyhow::Result<TypeRegistry> {
    let document = sdl_files::parse_sdl_file(path)?;
    let implementations = ImplementationMap::new().with_placeholder_resolvers(&document);
    TypeRegistry::build_from_document(&document, &implementations)
        .with_context(|| format!("Failed to generate types from {}", path.display()))
}

/// Renders every type in `registry` back into SDL-like text, documentation
/// included. Types are grouped by kind.
pub(crate) fn describe_registry(registry: &TypeRegistry) -> String {
    let mut blocks = vec![];

    for obj in registry.object_types().values() {
        let implements = match obj.interfaces() {
            [] => String::new(),
            ifaces => format!(
                " implements {}",
                ifaces.iter().map(|iface| iface.name()).collect::<Vec<_>>().join(" & "),
            ),
        };
        let mut lines = description_lines(obj.description(), "");
        lines.push(format!("type {}{implements} {{", obj.name()));
        lines.extend(obj.fields().values().flat_map(field_lines));
        lines.push("}".to_string());
        blocks.push(lines.join("\n"));
    }

    for iface in registry.interface_types().values() {
        let mut lines = description_lines(iface.description(), "");
        lines.push(format!("interface {} {{", iface.name()));
        lines.extend(iface.fields().values().flat_map(field_lines));
        lines.push("}".to_string());
        blocks.push(lines.join("\n"));
    }

    for union_type in registry.union_types().values() {
        let mut lines = description_lines(union_type.description(), "");
        lines.push(format!(
            "union {} = {}",
            union_type.name(),
            union_type.member_type_names().join(" | "),
        ));
        blocks.push(lines.join("\n"));
    }

    for scalar in registry.scalar_types().values() {
        let mut lines = description_lines(scalar.description(), "");
        lines.push(format!("scalar {}", scalar.name()));
        blocks.push(lines.join("\n"));
    }

    for enum_type in registry.enum_types().values() {
        let mut lines = description_lines(enum_type.description(), "");
        lines.push(format!("enum {} {{", enum_type.name()));
        for value in enum_type.values().values() {
            lines.extend(description_lines(value.description(), "  "));
            lines.push(format!("  {}", value.name()));
        }
        lines.push("}".to_string());
        blocks.push(lines.join("\n"));
    }

    for input in registry.input_object_types().values() {
        let mut lines = description_lines(input.description(), "");
        lines.push(format!("input {} {{", input.name()));
        lines.extend(input.fields().values().flat_map(input_field_lines));
        lines.push("}".to_string());
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n\n")
}

fn description_lines(description: Option<&str>, indent: &str) -> Vec<String> {
    description
        .map(|text| text.lines().map(|line| format!("{indent}# {line}")).collect())
        .unwrap_or_default()
}

fn field_lines(field: &Field) -> Vec<String> {
    let mut lines = description_lines(field.description(), "  ");
    let arguments = match field.arguments() {
        None => String::new(),
        Some(args) => format!(
            "({})",
            args.values().map(describe_argument).collect::<Vec<_>>().join(", "),
        ),
    };
    lines.push(format!("  {}{arguments}: {}", field.name(), field.type_annotation()));
    lines
}

fn describe_argument(arg: &Argument) -> String {
    match arg.default_value() {
        Some(default) => format!("{}: {} = {default}", arg.name(), arg.type_annotation()),
        None => format!("{}: {}", arg.name(), arg.type_annotation()),
    }
}

fn input_field_lines(field: &InputField) -> Vec<String> {
    let mut lines = description_lines(field.description(), "  ");
    lines.push(match field.default_value() {
        Some(default) => format!("  {}: {} = {default}", field.name(), field.type_annotation()),
        None => format!("  {}: {}", field.name(), field.type_annotation()),
    });
    lines
}
