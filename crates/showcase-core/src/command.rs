//! Operator command handling, independent of the chat gateway that delivers
//! the commands.
//!
//! A gateway turns an incoming interaction into an [`Invocation`] plus a
//! [`Command`], calls [`CommandHandler::handle`], and renders the returned
//! [`ResponsePayload`] in whatever form its platform supports.

use crate::entry::{Collection, Entry, NewPastWork, NewProduct, PastWorkItem, Product};
use crate::error::{CatalogError, Result};
use crate::service::CatalogService;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use std::sync::Arc;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ---------------------------------------------------------------------------
// Invocation / Command
// ---------------------------------------------------------------------------

/// Who issued a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub user_id: u64,
    pub user_name: String,
}

impl Invocation {
    pub fn new(user_id: u64, user_name: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddProduct {
        name: String,
        link: String,
        video: String,
    },
    RemoveProduct {
        name: String,
    },
    ListProducts,
    AddPastWork {
        name: String,
        video: String,
    },
    RemovePastWork {
        name: String,
    },
    ListPastWork,
}

impl Command {
    /// Registered command name, as the gateway exposes it.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddProduct { .. } => "add_product",
            Command::RemoveProduct { .. } => "remove_product",
            Command::ListProducts => "list_products",
            Command::AddPastWork { .. } => "add_past_work",
            Command::RemovePastWork { .. } => "remove_past_work",
            Command::ListPastWork => "list_past_work",
        }
    }

    pub fn is_mutating(&self) -> bool {
        !matches!(self, Command::ListProducts | Command::ListPastWork)
    }
}

// ---------------------------------------------------------------------------
// Embed
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Added,
    Removed,
    Listing,
}

impl Tone {
    /// RGB accent colour for platforms that render one.
    pub fn color(self) -> u32 {
        match self {
            Tone::Added => 0x2ecc71,
            Tone::Removed => 0xe74c3c,
            Tone::Listing => 0x3498db,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub tone: Tone,
    pub color: u32,
    pub fields: Vec<EmbedField>,
}

impl Embed {
    fn new(title: impl Into<String>, description: impl Into<String>, tone: Tone) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            tone,
            color: tone.color(),
            fields: Vec::new(),
        }
    }

    fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

// ---------------------------------------------------------------------------
// ResponsePayload
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResponsePayload {
    Success { embed: Embed },
    Denied,
    NotFound { collection: Collection, name: String },
    Duplicate { collection: Collection, name: String },
    Invalid { message: String },
    Failed,
}

impl ResponsePayload {
    pub fn is_success(&self) -> bool {
        matches!(self, ResponsePayload::Success { .. })
    }

    /// Non-success replies are only shown to the invoking user.
    pub fn is_ephemeral(&self) -> bool {
        !self.is_success()
    }

    pub fn embed(&self) -> Option<&Embed> {
        match self {
            ResponsePayload::Success { embed } => Some(embed),
            _ => None,
        }
    }

    /// One-line message for non-success replies.
    pub fn message(&self) -> Option<String> {
        let msg = match self {
            ResponsePayload::Success { .. } => return None,
            ResponsePayload::Denied => {
                "❌ You don't have permission to use this command!".to_string()
            }
            ResponsePayload::Duplicate { collection, name } => match collection {
                Collection::Products => {
                    format!("❌ A product with the name '{name}' already exists!")
                }
                Collection::PastWork => {
                    format!("❌ A past work project with the name '{name}' already exists!")
                }
            },
            ResponsePayload::NotFound { collection, name } => match collection {
                Collection::Products => format!("❌ Product '{name}' not found!"),
                Collection::PastWork => format!("❌ Past work project '{name}' not found!"),
            },
            ResponsePayload::Invalid { message } => format!("❌ {message}"),
            ResponsePayload::Failed => {
                "❌ An error occurred while running this command.".to_string()
            }
        };
        Some(msg)
    }

    /// Plain-text rendering for terminal gateways.
    pub fn render_text(&self) -> String {
        let Some(embed) = self.embed() else {
            return self.message().unwrap_or_default();
        };

        let mut out = String::new();
        let _ = writeln!(out, "{}", embed.title);
        let _ = writeln!(out, "{}", embed.description);
        for field in &embed.fields {
            let mut lines = field.value.lines();
            let first = lines.next().unwrap_or_default();
            let _ = writeln!(out, "  {}: {}", field.name, first);
            for line in lines {
                let _ = writeln!(out, "    {line}");
            }
        }
        out
    }
}

// ---------------------------------------------------------------------------
// CommandHandler
// ---------------------------------------------------------------------------

pub struct CommandHandler {
    service: Arc<CatalogService>,
    operator_id: u64,
}

impl CommandHandler {
    pub fn new(service: Arc<CatalogService>, operator_id: u64) -> Self {
        Self {
            service,
            operator_id,
        }
    }

    pub fn authorize(&self, invocation: &Invocation) -> Result<()> {
        if invocation.user_id == self.operator_id {
            Ok(())
        } else {
            Err(CatalogError::PermissionDenied)
        }
    }

    /// Run `command` on behalf of `invocation`. Never fails: every outcome,
    /// including unexpected storage errors, becomes a payload.
    pub fn handle(&self, invocation: &Invocation, command: Command) -> ResponsePayload {
        let name = command.name();
        if command.is_mutating() {
            if let Err(e) = self.authorize(invocation) {
                tracing::warn!(
                    command = name,
                    user_id = invocation.user_id,
                    "rejected command from non-operator"
                );
                return payload_for_error(e);
            }
        }

        match self.execute(invocation, command) {
            Ok(embed) => ResponsePayload::Success { embed },
            Err(e) if e.is_expected() => payload_for_error(e),
            Err(e) => {
                tracing::error!(command = name, error = %e, "command failed");
                ResponsePayload::Failed
            }
        }
    }

    fn execute(&self, invocation: &Invocation, command: Command) -> Result<Embed> {
        let actor = invocation.user_name.as_str();
        match command {
            Command::AddProduct { name, link, video } => {
                let p: Product = self.service.add(NewProduct::new(name, link, video), actor)?;
                Ok(Embed::new(
                    "✅ Product Added Successfully",
                    format!("**{}** has been added to the academy shop.", p.name),
                    Tone::Added,
                )
                .field("Link", &p.link, false)
                .field("Video", &p.video, false)
                .field("Added by", &p.added_by, true)
                .field("Added at", stamp(p.added_at), true))
            }
            Command::AddPastWork { name, video } => {
                let w: PastWorkItem = self.service.add(NewPastWork::new(name, video), actor)?;
                Ok(Embed::new(
                    "✅ Past Work Added Successfully",
                    format!("**{}** has been added to past work.", w.name),
                    Tone::Added,
                )
                .field("Video", &w.video, false)
                .field("Added by", &w.added_by, true)
                .field("Added at", stamp(w.added_at), true))
            }
            Command::RemoveProduct { name } => {
                let p: Product = self.service.remove(&name)?;
                Ok(removal_embed(
                    "✅ Product Removed Successfully",
                    format!("**{}** has been removed from the academy shop.", p.name),
                    actor,
                ))
            }
            Command::RemovePastWork { name } => {
                let w: PastWorkItem = self.service.remove(&name)?;
                Ok(removal_embed(
                    "✅ Past Work Removed Successfully",
                    format!("**{}** has been removed from past work.", w.name),
                    actor,
                ))
            }
            Command::ListProducts => {
                let products: Vec<Product> = self.service.list()?;
                Ok(listing(
                    "📦 Academy Shop Products",
                    "No products found in the shop.",
                    "product(s)",
                    &products,
                    |p| format!("Link: {}\nVideo: {}\nAdded by: {}", p.link, p.video, p.added_by),
                ))
            }
            Command::ListPastWork => {
                let work: Vec<PastWorkItem> = self.service.list()?;
                Ok(listing(
                    "🎬 Past Work Projects",
                    "No past work projects found.",
                    "project(s)",
                    &work,
                    |w| format!("Video: {}\nAdded by: {}", w.video, w.added_by),
                ))
            }
        }
    }
}

fn stamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

fn removal_embed(title: &str, description: String, actor: &str) -> Embed {
    Embed::new(title, description, Tone::Removed)
        .field("Removed by", actor, true)
        .field("Removed at", stamp(Utc::now()), true)
}

fn listing<T: Entry>(
    title: &str,
    empty: &str,
    noun: &str,
    entries: &[T],
    describe: impl Fn(&T) -> String,
) -> Embed {
    if entries.is_empty() {
        return Embed::new(title, empty, Tone::Listing);
    }
    let description = format!("Found {} {noun}:", entries.len());
    entries
        .iter()
        .enumerate()
        .fold(Embed::new(title, description, Tone::Listing), |embed, (i, e)| {
            embed.field(format!("{}. {}", i + 1, e.name()), describe(e), false)
        })
}

fn payload_for_error(err: CatalogError) -> ResponsePayload {
    match err {
        CatalogError::DuplicateName { collection, name } => {
            ResponsePayload::Duplicate { collection, name }
        }
        CatalogError::NotFound { collection, name } => {
            ResponsePayload::NotFound { collection, name }
        }
        CatalogError::Validation(message) => ResponsePayload::Invalid { message },
        CatalogError::PermissionDenied => ResponsePayload::Denied,
        _ => ResponsePayload::Failed,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
