// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use intoto_attestation::{
    DigestSet, GitRepositoryResourceDescriptor, MavenDependency, Predicate, ResourceDescriptor,
    Statement, Subject,
};
use serde_json::{Map, Value};
use tracing::info;

#[derive(Parser)]
#[command(
    name = "intoto-attestation",
    version,
    about = "Build unsigned in-toto v1 statements."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (repeat for more detail: -v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Pretty-print the statement JSON.
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Attest one or more files, identified by name and SHA-256 digest.
    File {
        /// Path of a file to include in the subject (repeatable)
        #[arg(long = "path", required = true)]
        paths: Vec<PathBuf>,

        #[command(flatten)]
        predicate: PredicateArgs,
    },
    /// Attest a Git repository, identified by its canonical GitHub URL.
    Git {
        /// The remote-origin URL (e.g., git@github.com:owner/repo.git)
        #[arg(long)]
        remote_url: String,

        /// The ref being attested (kept out of the statement)
        #[arg(long = "ref")]
        git_ref: Option<String>,

        /// Commit id, recorded in the digest as gitCommit
        #[arg(long)]
        commit: Option<String>,

        #[command(flatten)]
        predicate: PredicateArgs,
    },
    /// Attest a Maven artifact, identified by its group:artifact:version coordinate.
    Maven {
        #[arg(long)]
        group_id: Option<String>,

        #[arg(long)]
        artifact_id: Option<String>,

        #[arg(long)]
        version: Option<String>,

        /// Packaging type (e.g., jar)
        #[arg(long = "type")]
        type_: Option<String>,

        /// Dependency scope (e.g., compile)
        #[arg(long)]
        scope: Option<String>,

        #[command(flatten)]
        predicate: PredicateArgs,
    },
}

#[derive(Args)]
struct PredicateArgs {
    /// The predicate type URI (e.g., https://slsa.dev/provenance/v1)
    #[arg(long)]
    predicate_type: String,

    /// A file holding the predicate body as a JSON object
    #[arg(long)]
    predicate: Option<PathBuf>,
}

/// Predicate whose body is read verbatim from a JSON file.
#[derive(Debug)]
struct JsonFilePredicate {
    predicate_type: String,
    parameters: Map<String, Value>,
}

impl Predicate for JsonFilePredicate {
    fn predicate_type(&self) -> &str {
        &self.predicate_type
    }

    fn predicate_parameters(&self) -> Option<Map<String, Value>> {
        Some(self.parameters.clone())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let (subject, predicate_args) = match cli.command {
        Commands::File { paths, predicate } => (handle_commands_file(&paths)?, predicate),
        Commands::Git {
            remote_url,
            git_ref,
            commit,
            predicate,
        } => (handle_commands_git(&remote_url, git_ref, commit)?, predicate),
        Commands::Maven {
            group_id,
            artifact_id,
            version,
            type_,
            scope,
            predicate,
        } => {
            let dependency = MavenDependency {
                group_id,
                artifact_id,
                version,
                type_,
                scope,
            };
            (handle_commands_maven(&dependency), predicate)
        }
    };

    let statement = build_statement(subject, &predicate_args)?;
    let json_output = if cli.pretty {
        statement.to_json_string_pretty()
    } else {
        statement.to_json_string()
    }
    .context("Failed to serialize statement to JSON")?;
    println!("{}", json_output);

    Ok(())
}

fn handle_commands_file(paths: &[PathBuf]) -> Result<Subject> {
    let mut subject = Subject::builder();
    for path in paths {
        let descriptor = ResourceDescriptor::from_file(path)
            .with_context(|| format!("Failed to describe file '{}'", path.display()))?;
        subject = subject.resource_descriptor(descriptor);
    }
    Ok(subject.build())
}

fn handle_commands_git(
    remote_url: &str,
    git_ref: Option<String>,
    commit: Option<String>,
) -> Result<Subject> {
    let mut builder = GitRepositoryResourceDescriptor::builder(remote_url)
        .with_context(|| format!("Failed to parse Git remote URL '{}'", remote_url))?;
    if let Some(git_ref) = git_ref {
        builder = builder.git_ref(git_ref);
    }
    if let Some(commit) = commit {
        let mut digest = DigestSet::new();
        digest.insert(DigestSet::GIT_COMMIT, commit);
        builder = builder.digest(digest);
    }
    let descriptor = builder.build();
    info!(
        uri = descriptor.uri().unwrap_or_default(),
        "described Git repository"
    );

    Ok(Subject::builder().resource_descriptor(descriptor).build())
}

fn handle_commands_maven(dependency: &MavenDependency) -> Subject {
    Subject::builder()
        .resource_descriptor(ResourceDescriptor::from_maven_dependency(dependency))
        .build()
}

fn build_statement(subject: Subject, args: &PredicateArgs) -> Result<Statement> {
    let builder = Statement::builder(
        Some(Statement::TYPE_V1),
        Some(subject),
        Some(args.predicate_type.as_str()),
    )
    .context("Failed to start statement")?;

    let builder = match &args.predicate {
        Some(path) => builder.predicate(read_predicate(path, &args.predicate_type)?),
        None => builder,
    };

    Ok(builder.build())
}

fn read_predicate(path: &Path, predicate_type: &str) -> Result<JsonFilePredicate> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read predicate file '{}'", path.display()))?;
    let value: Value = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse predicate JSON from '{}'", path.display()))?;
    let Value::Object(parameters) = value else {
        return Err(anyhow!(
            "Predicate file '{}' must contain a JSON object",
            path.display()
        ));
    };

    Ok(JsonFilePredicate {
        predicate_type: predicate_type.to_owned(),
        parameters,
    })
}
