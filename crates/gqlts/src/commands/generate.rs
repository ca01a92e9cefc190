use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use libgqlts::TypeEmitter;
use libgqlts::ast;
use std::collections::HashSet;
use std::error::Error;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct GenerateCmd {
    #[arg(
        default_value="Request",
        help="Name of the TypeScript type passed to every resolver as its \
             `context` parameter.",
        long,
    )]
    context_type: String,

    #[arg(
        default_value="import { Request } from 'express';",
        help="Text prepended verbatim to the generated output, typically an \
             import statement that brings the context type into scope.",
        long,
    )]
    header: String,

    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "graphqls".to_string(),
        ],
        help="Set of file extensions to filter to when searching for schema \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Path to write the generated TypeScript declarations to. \
             Writes to stdout when omitted.",
        long,
        short='o',
    )]
    out: Option<PathBuf>,

    #[arg(
        help="Paths to one or more GraphQL schema files or directories \
             containing schema files to generate resolver types from.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for GenerateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<Box<dyn Error>> = vec![];

        // Normalize the set of file extensions to filter with.
        // `Path::extension()` yields extensions without their leading dot.
        let graphql_file_exts: HashSet<String> =
            self.graphql_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .collect();

        // Find all schema files recursively located at or under each path
        // passed as an arg.
        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_entries = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if entry.file_type().is_file() {
                            log::trace!("Found file at {path:#?}.");
                            if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                                && graphql_file_exts.contains(ext.as_ref()) {
                                file_paths.push(std::fs::canonicalize(path).unwrap());
                            }
                        } else {
                            log::trace!("Skipping non-file: {path:#?}.");
                            num_skipped_entries += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(Box::new(e));
                        continue
                    },
                }
            }
        }

        // If the user specifies a single file path as an argument, presume
        // the user explicitly wants types generated from that file -- even
        // if its file extension doesn't match one of the file extensions
        // specified in `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            let canonicalized_first_arg_path =
                std::fs::canonicalize(first_arg_path).unwrap();
            log::warn!(
                "Proceeding to generate from {canonicalized_first_arg_path:#?} \
                even though it doesn't match any of the --graphql-file-exts \
                ({}).",
                graphql_file_exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(canonicalized_first_arg_path);
        }

        log::debug!(
            "Found {} GraphQL schema files ({num_skipped_entries} non-file \
            entries skipped).",
            file_paths.len(),
        );

        // Parse each schema file and merge their definitions, in discovery
        // order, into a single document.
        let mut definitions = vec![];
        for file_path in &file_paths {
            let content = match std::fs::read_to_string(file_path) {
                Ok(content) => content,
                Err(e) => {
                    errors.push(Box::new(e));
                    continue
                },
            };
            match graphql_parser::schema::parse_schema::<String>(&content) {
                Ok(doc) => definitions.extend(doc.into_static().definitions),
                Err(e) => errors.push(Box::new(e)),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Failed to load GraphQL schema files: {errors:#?}",
                output_utils::RED_X,
            ));
        }

        let document = ast::Document { definitions };
        log::debug!(
            "Generating resolver types for {} schema definitions.",
            document.definitions.len(),
        );

        let emitter = TypeEmitter::new(self.context_type, self.header);
        let output = match emitter.emit(&document) {
            Ok(output) => output,
            Err(e) => return CommandResult::stderr(format_args!(
                "{} Failed to generate resolver types: {e}",
                output_utils::RED_X,
            )),
        };

        match &self.out {
            Some(out_path) => match std::fs::write(out_path, &output) {
                Ok(()) => CommandResult::stdout(format_args!(
                    "{} Wrote resolver types for {} schema definitions to {}.",
                    output_utils::GREEN_CHECK,
                    document.definitions.len(),
                    out_path.display(),
                )),

                Err(e) => CommandResult::stderr(format_args!(
                    "{} Failed to write {}: {e}",
                    output_utils::RED_X,
                    out_path.display(),
                )),
            },

            None => CommandResult::stdout(format_args!("{output}")),
        }
    }
}
