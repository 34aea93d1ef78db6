//! CLI Tooling
//!
//! Command-line host for a tree session. One-shot commands operate on the
//! persisted tree; `shell` keeps one session alive across many commands so
//! undo and redo span them.

use crate::config::{xdg, CanopyConfig};
use crate::error::ApiError;
use crate::interchange;
use crate::session::{SessionOptions, TreeSession};
use crate::store::{MemorySnapshotStore, SledSnapshotStore, SnapshotStore};
use crate::tree::{self, Placement};
use crate::views::{self, OutlineOptions};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::io::{BufRead, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Canopy CLI - ordered file/folder tree with undo history
#[derive(Parser, Debug)]
#[command(name = "canopy")]
#[command(about = "Ordered file/folder tree with copy-on-write snapshots and undo history")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Snapshot store directory (overrides configuration)
    #[arg(long)]
    pub store: Option<PathBuf>,

    /// Keep the tree in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the tree
    Show {
        /// Output format (text, json or table)
        #[arg(long, default_value = "text")]
        format: String,
        /// Include children of collapsed folders (text format)
        #[arg(long)]
        all: bool,
    },
    /// Locate a node and report its parent and position
    Find { id: String },
    /// Print the ids from the root ancestor down to a node
    Path { id: String },
    /// Select a node, or clear the selection
    Select {
        #[arg(required_unless_present = "clear")]
        id: Option<String>,
        #[arg(long, conflicts_with = "id")]
        clear: bool,
    },
    /// Expand or collapse a folder
    Toggle { id: String },
    /// Create a file under a parent, the selected folder, or root
    CreateFile {
        name: Option<String>,
        #[arg(long)]
        parent: Option<String>,
    },
    /// Create a folder under a parent, the selected folder, or root
    CreateFolder {
        name: Option<String>,
        #[arg(long)]
        parent: Option<String>,
    },
    /// Delete a node and everything below it
    Delete { id: String },
    /// Rename a node
    Rename { id: String, name: String },
    /// Move a node into a folder (or root) at an optional position
    Move {
        id: String,
        /// Target folder id; omit for root
        #[arg(long)]
        to: Option<String>,
        /// Position among the new siblings; omit or overshoot to append
        #[arg(long)]
        index: Option<usize>,
    },
    /// Check whether a move would be accepted
    CanDrop {
        id: String,
        #[arg(long)]
        to: Option<String>,
    },
    /// Replace the tree with a JSON document ("-" reads stdin)
    Import { file: PathBuf },
    /// Write the tree as pretty JSON
    Export {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Replace the tree with the built-in default
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Undo the last change
    Undo,
    /// Redo the last undone change
    Redo,
    /// Show the undo timeline position
    History,
    /// Read commands from stdin, one per line, against a single session
    Shell,
}

/// Parser for one line of shell input
#[derive(Parser, Debug)]
#[command(name = "canopy", no_binary_name = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Commands,
}

pub struct CliContext {
    session: TreeSession,
    color: bool,
    interactive: bool,
}

impl CliContext {
    /// Build a context from configuration, opening the configured store
    pub fn new(config: &CanopyConfig, color: bool) -> Result<Self, ApiError> {
        let store: Arc<dyn SnapshotStore> = if config.storage.ephemeral {
            Arc::new(MemorySnapshotStore::new())
        } else {
            let store_path = config.storage.resolve_path()?;
            xdg::ensure_dir(&store_path)?;
            info!(store = ?store_path, "Opening snapshot store");
            Arc::new(SledSnapshotStore::new(&store_path)?)
        };
        let options = SessionOptions {
            history_limit: config.history.limit,
        };
        Ok(Self::from_session(TreeSession::open(store, options), color))
    }

    /// Wrap an existing session
    pub fn from_session(session: TreeSession, color: bool) -> Self {
        Self {
            session,
            color,
            interactive: std::io::IsTerminal::is_terminal(&std::io::stdin()),
        }
    }

    pub fn session(&self) -> &TreeSession {
        &self.session
    }

    /// Whether confirmation prompts may be shown
    pub fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    pub fn execute(&mut self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Show { format, all } => self.handle_show(format, *all),
            Commands::Find { id } => self.handle_find(id),
            Commands::Path { id } => {
                let path = tree::path_to(self.session.tree(), id);
                if path.is_empty() {
                    return Err(ApiError::NodeNotFound(id.clone()));
                }
                Ok(path.join("/"))
            }
            Commands::Select { id, .. } => match id {
                Some(id) => {
                    self.require_node(id)?;
                    self.session.select_node(Some(id.as_str()));
                    Ok(format!("Selected {}", id))
                }
                None => {
                    self.session.select_node(None);
                    Ok("Selection cleared".to_string())
                }
            },
            Commands::Toggle { id } => self.handle_toggle(id),
            Commands::CreateFile { name, parent } => {
                let id = self
                    .session
                    .create_file(parent.as_deref(), name.as_deref());
                Ok(format!("Created file {}", id))
            }
            Commands::CreateFolder { name, parent } => {
                let id = self
                    .session
                    .create_folder(parent.as_deref(), name.as_deref());
                Ok(format!("Created folder {}", id))
            }
            Commands::Delete { id } => {
                let count = self.require_node(id)?.subtree_len();
                self.session.delete_node(id);
                Ok(format!("Deleted {} ({} nodes)", id, count))
            }
            Commands::Rename { id, name } => {
                self.require_node(id)?;
                if name.trim().is_empty() {
                    return Err(ApiError::InvalidCommand("Name cannot be empty".to_string()));
                }
                self.session.rename_item(id, name);
                Ok(format!("Renamed {} to {}", id, name.trim()))
            }
            Commands::Move { id, to, index } => self.handle_move(id, to.as_deref(), *index),
            Commands::CanDrop { id, to } => {
                match tree::check_drop(self.session.tree(), id, to.as_deref()) {
                    Ok(()) => Ok("yes".to_string()),
                    Err(reason) => Ok(format!("no: {}", reason)),
                }
            }
            Commands::Import { file } => self.handle_import(file),
            Commands::Export { output } => {
                let text = self.session.export_tree_data()?;
                match output {
                    Some(path) => {
                        std::fs::write(path, &text).map_err(|e| ApiError::StorageError(e.into()))?;
                        Ok(format!(
                            "Exported {} nodes to {}",
                            self.session.tree().node_count(),
                            path.display()
                        ))
                    }
                    None => Ok(text),
                }
            }
            Commands::Reset { yes } => self.handle_reset(*yes),
            Commands::Undo => Ok(if self.session.undo() {
                "Undid last change".to_string()
            } else {
                "Nothing to undo".to_string()
            }),
            Commands::Redo => Ok(if self.session.redo() {
                "Redid last change".to_string()
            } else {
                "Nothing to redo".to_string()
            }),
            Commands::History => {
                let history = self.session.history();
                Ok(format!(
                    "History: {}/{} (limit {}), can undo: {}, can redo: {}",
                    history.position() + 1,
                    history.len(),
                    history.limit(),
                    yes_no(history.can_undo()),
                    yes_no(history.can_redo())
                ))
            }
            Commands::Shell => Err(ApiError::InvalidCommand(
                "shell is only available as a top-level command".to_string(),
            )),
        }
    }

    /// Run commands line by line until end of input or `exit`
    ///
    /// Errors are reported on `output` and do not stop the loop.
    pub fn run_shell<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), ApiError> {
        let io_err = |e: std::io::Error| ApiError::StorageError(crate::error::StorageError::IoError(e));
        self.interactive = false;
        for line in input.lines() {
            let line = line.map_err(io_err)?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line == "exit" || line == "quit" {
                break;
            }
            let tokens = match split_line(line) {
                Ok(tokens) => tokens,
                Err(e) => {
                    writeln!(output, "Error: {}", e).map_err(io_err)?;
                    continue;
                }
            };
            let reply = match ShellLine::try_parse_from(tokens) {
                Ok(parsed) => match self.execute(&parsed.command) {
                    Ok(text) => text,
                    Err(e) => format!("Error: {}", e),
                },
                Err(e) => {
                    let message = e.to_string();
                    format!("Error: {}", message.lines().next().unwrap_or("invalid command"))
                }
            };
            writeln!(output, "{}", reply.trim_end()).map_err(io_err)?;
        }
        output.flush().map_err(io_err)
    }

    fn require_node(&self, id: &str) -> Result<&tree::Node, ApiError> {
        tree::find_by_id(self.session.tree(), id)
            .map(|found| found.node)
            .ok_or_else(|| ApiError::NodeNotFound(id.to_string()))
    }

    fn handle_show(&self, format: &str, all: bool) -> Result<String, ApiError> {
        match format {
            "text" => Ok(views::render_outline(
                self.session.tree(),
                self.session.selection(),
                OutlineOptions {
                    color: self.color,
                    expand_all: all,
                },
            )),
            "json" => self.session.export_tree_data(),
            "table" => Ok(views::render_table(self.session.tree())),
            other => Err(ApiError::InvalidCommand(format!(
                "Unknown format: {} (expected text, json or table)",
                other
            ))),
        }
    }

    fn handle_find(&self, id: &str) -> Result<String, ApiError> {
        let tree = self.session.tree();
        let located =
            tree::find_with_index(tree, id).ok_or_else(|| ApiError::NodeNotFound(id.to_string()))?;
        let value = json!({
            "id": located.node.id(),
            "type": located.node.kind(),
            "name": located.node.name(),
            "parent": located.parent.map(|p| p.id.clone()),
            "index": located.index,
            "path": tree::path_to(tree, id),
            "visible": tree::is_visible(tree, id),
        });
        serde_json::to_string_pretty(&value)
            .map_err(|e| ApiError::StorageError(crate::error::StorageError::Serialization(e)))
    }

    fn handle_toggle(&mut self, id: &str) -> Result<String, ApiError> {
        if !self.require_node(id)?.is_folder() {
            return Err(ApiError::InvalidCommand(format!("{} is not a folder", id)));
        }
        self.session.toggle_folder(id);
        let open = tree::find_by_id(self.session.tree(), id)
            .and_then(|found| found.node.as_folder())
            .map(|folder| folder.is_open)
            .unwrap_or(false);
        Ok(format!("{} {}", if open { "Expanded" } else { "Collapsed" }, id))
    }

    fn handle_move(
        &mut self,
        id: &str,
        to: Option<&str>,
        index: Option<usize>,
    ) -> Result<String, ApiError> {
        tree::check_drop(self.session.tree(), id, to)
            .map_err(|reason| ApiError::Rejected(reason.to_string()))?;
        let placement = self.session.move_item(id, to, index);
        Ok(match placement {
            Placement::Root => format!("Moved {} to root", id),
            Placement::Folder(parent) => format!("Moved {} into {}", id, parent),
            Placement::RootFallback { requested } => {
                format!("Moved {} to root ({} is not a folder)", id, requested)
            }
            Placement::Missing => format!("Nothing moved: {} not found", id),
        })
    }

    fn handle_import(&mut self, file: &Path) -> Result<String, ApiError> {
        let text = if file.as_os_str() == "-" {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| ApiError::StorageError(crate::error::StorageError::IoError(e)))?;
            buf
        } else {
            std::fs::read_to_string(file)
                .map_err(|e| ApiError::StorageError(crate::error::StorageError::IoError(e)))?
        };
        let tree = interchange::import_tree(&text)?;
        self.session.replace_tree(tree)?;
        Ok(format!("Imported {} nodes", self.session.tree().node_count()))
    }

    fn handle_reset(&mut self, yes: bool) -> Result<String, ApiError> {
        if !yes {
            if !self.interactive {
                return Err(ApiError::InvalidCommand(
                    "reset discards the current tree and history; pass --yes to confirm".to_string(),
                ));
            }
            use dialoguer::Confirm;
            let confirmed = Confirm::new()
                .with_prompt("Replace the current tree with the default tree?")
                .default(false)
                .interact()
                .map_err(|e| ApiError::ConfigError(format!("Failed to get user input: {}", e)))?;
            if !confirmed {
                return Ok("Reset cancelled".to_string());
            }
        }
        self.session.reset_tree_data();
        Ok("Tree reset to defaults".to_string())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Split a shell line on whitespace, honouring single and double quotes
fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }
    if quote.is_some() {
        return Err("unterminated quote".to_string());
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
