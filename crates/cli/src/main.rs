use anyhow::Result;
use clap::{Parser, Subcommand};
use func_triage::commands::{
    add_graph_command, init_project_command, list_graphs_command, list_runs_command,
    project_info_command, report_command, tag_command,
};

/// Capability-tagging triage assistant CLI.
///
/// This CLI is a thin wrapper around `triage-core` (exposed in code as
/// `triage_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "func-triage",
    version,
    about = "Capability-tagging triage assistant for disassembled binaries",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a new func-triage project at the given root.
    ///
    /// This will:
    /// - Create a `.triage` metadata directory.
    /// - Create `graphs`, `taxonomies`, and `reports` directories.
    /// - Write a `.triage/project.json` config file and an empty project DB.
    InitProject {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Optional project name. If omitted, the name is derived from the root directory.
        #[arg(long)]
        name: Option<String>,
    },

    /// Show basic information about an existing func-triage project.
    ///
    /// This reads `.triage/project.json` and reports key paths and config values.
    ProjectInfo {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,
    },

    /// Register a call-graph snapshot (exported by the analysis platform)
    /// in the project database.
    ///
    /// This does not run the tagging engine; it records that the snapshot
    /// exists, hashes it, and stores its function/import counts.
    AddGraph {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Path to the snapshot file (JSON or YAML).
        #[arg(long)]
        path: String,

        /// Optional human-friendly name. Defaults to the file name.
        #[arg(long)]
        name: Option<String>,

        /// Skip hash computation (stores no hash).
        #[arg(long, default_value_t = false)]
        skip_hash: bool,
    },

    /// List all call-graph snapshots registered in the project database.
    ListGraphs {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Run the capability tagging engine over a snapshot.
    ///
    /// Prints the rename plan and records the run. Without `--apply` the
    /// snapshot file is left untouched (dry run).
    Tag {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Name of a registered graph to tag.
        #[arg(long)]
        graph: Option<String>,

        /// Explicit snapshot file to tag instead of a registered graph.
        #[arg(long)]
        file: Option<String>,

        /// External taxonomy table (YAML or JSON). Defaults to the builtin table.
        #[arg(long)]
        taxonomy: Option<String>,

        /// Commit the rename plan back into the snapshot file.
        #[arg(long, default_value_t = false)]
        apply: bool,

        /// Emit the rename plan as JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List recorded tagging runs, newest first.
    Runs {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Only show runs for this graph name.
        #[arg(long)]
        graph: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show labeled functions from the latest run for a graph, ranked by
    /// cross-reference count.
    Report {
        /// Project root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,

        /// Graph name to report on.
        #[arg(long)]
        graph: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::InitProject { root, name } => init_project_command(&root, name)?,
        Command::ProjectInfo { root } => project_info_command(&root)?,
        Command::AddGraph { root, path, name, skip_hash } => {
            add_graph_command(&root, &path, name, skip_hash)?
        }
        Command::ListGraphs { root, json } => list_graphs_command(&root, json)?,
        Command::Tag { root, graph, file, taxonomy, apply, json } => tag_command(
            &root,
            graph.as_deref(),
            file.as_deref(),
            taxonomy.as_deref(),
            apply,
            json,
        )?,
        Command::Runs { root, graph, json } => list_runs_command(&root, graph.as_deref(), json)?,
        Command::Report { root, graph, json } => report_command(&root, &graph, json)?,
    }

    Ok(())
}
