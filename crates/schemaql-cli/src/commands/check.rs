use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use crate::sdl_files;
use schemaql::ImplementationMap;
use schemaql::TypeRegistry;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    sdl_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more SDL files or directories containing SDL \
             files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let file_exts = sdl_files::normalize_file_exts(&self.sdl_file_exts);
        let found = sdl_files::find_sdl_files(&self.file_or_dir_paths, &file_exts);
        if !found.errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Errors finding SDL files:\n{}",
                output_utils::RED_X,
                format_errors(&found.errors),
            ));
        }

        let document = match sdl_files::parse_sdl_files(&found.file_paths) {
            Ok(document) => document,
            Err(errors) => return CommandResult::stderr(format_args!(
                "{} {} SDL syntax error(s):\n{}",
                output_utils::RED_X,
                errors.len(),
                format_errors(&errors),
            )),
        };

        // Only the document itself is checked here, so calculated fields get
        // stand-in resolvers.
        let implementations = ImplementationMap::new().with_placeholder_resolvers(&document);
        match TypeRegistry::build_from_document(&document, &implementations) {
            Ok(registry) => CommandResult::stdout(format_args!(
                concat!(
                    "{} All SDL checked successfully:\n",
                    "  * Analyzed {} files.\n",
                    "  * Skipped {} non-SDL files.\n",
                    "  * Generated {} type definitions.",
                ),
                output_utils::GREEN_CHECK,
                found.file_paths.len(),
                found.num_skipped,
                registry.len(),
            )),

            Err(err) => CommandResult::stderr(format_args!(
                "{} Errors generating types: {err}",
                output_utils::RED_X,
            )),
        }
    }
}

fn format_errors(errors: &[anyhow::Error]) -> String {
    errors.iter()
        .map(|err| format!("{err:#}"))
        .collect::<Vec<_>>()
        .join("\n")
}
