use std::error::Error;
use std::fmt::Write;

use clap::Subcommand;
use lodestone_catalog::{Catalog, Material, verify};
use lodestone_host::{MemoryHost, StackSizes};

use crate::report;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve an identifier and describe its material
    Lookup {
        /// Block or item identifier, with or without the minecraft: namespace
        id: String,
        /// Search the deprecated pool instead
        #[arg(long)]
        deprecated: bool,
    },
    /// List every tag, or the tags of one material
    Tags {
        /// Block or item identifier
        id: Option<String>,
    },
    /// Enumerate materials
    List {
        /// Only materials carrying this tag
        #[arg(long)]
        tag: Option<String>,
        /// List the deprecated pool
        #[arg(long)]
        deprecated: bool,
        /// Only the priority entries
        #[arg(long, conflicts_with = "deprecated")]
        priority: bool,
    },
    /// Audit identifier resolution
    Check,
}

/// Text produced by a command and whether it succeeded.
#[derive(Debug, Default)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

impl Outcome {
    fn ok(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            success: true,
        }
    }

    fn failed(stdout: String, stderr: String) -> Self {
        Self {
            stdout,
            stderr,
            success: false,
        }
    }
}

/// Host knowing every id of the catalog, deprecated pool included.
pub fn host_for(catalog: &Catalog, stack_sizes: StackSizes) -> MemoryHost {
    MemoryHost::new(stack_sizes)
        .with_items(catalog.all_item_ids())
        .with_blocks(catalog.all_block_ids())
}

pub fn execute(
    command: &Command,
    catalog: &Catalog,
    host: &MemoryHost,
) -> Result<Outcome, Box<dyn Error>> {
    let mut out = String::new();
    match command {
        Command::Lookup { id, deprecated } => {
            let found = if *deprecated {
                catalog.lookup_deprecated(id)
            } else {
                catalog.lookup(id)
            };
            let Some(material) = found else {
                return Ok(Outcome::failed(out, format!("no material for `{id}`\n")));
            };
            out.push_str(&report::describe(catalog, material, host));
        }
        Command::Tags { id: None } => out.push_str(&report::tag_table(catalog)),
        Command::Tags { id: Some(id) } => {
            let Some(material) = catalog.lookup(id) else {
                return Ok(Outcome::failed(out, format!("no material for `{id}`\n")));
            };
            for tag in catalog.tags_of(material) {
                writeln!(out, "{:<36} {tag}", tag.key())?;
            }
        }
        Command::List {
            tag,
            deprecated,
            priority,
        } => {
            let pool: &[Material] = if *deprecated {
                catalog.deprecated_materials()
            } else if *priority {
                catalog.priority_materials()
            } else {
                catalog.materials()
            };
            let filter = match tag.as_deref() {
                Some(key) => match catalog.tag(key) {
                    Some(t) => Some(t),
                    None => return Err(format!("unknown tag `{key}`").into()),
                },
                None => None,
            };
            for material in pool {
                if filter.is_none_or(|t| material.has_tag(t)) {
                    writeln!(out, "{}", report::material_line(catalog, material))?;
                }
            }
        }
        Command::Check => {
            let findings = verify::audit(catalog);
            for finding in &findings {
                writeln!(out, "{finding}")?;
            }
            if !findings.is_empty() {
                return Ok(Outcome::failed(
                    out,
                    format!("{} finding(s)\n", findings.len()),
                ));
            }
            writeln!(
                out,
                "ok: {} material(s), {} deprecated, {} tag(s)",
                catalog.materials().len(),
                catalog.deprecated_materials().len(),
                catalog.tags().len()
            )?;
        }
    }
    Ok(Outcome::ok(out))
}
