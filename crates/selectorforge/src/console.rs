//! Colorful console output for selector resolution.
//!
//! Provides a custom `tracing` layer that formats selector tree events with
//! colors. Enabled with the `console` feature.
//!
//! ## Log Levels
//!
//! - **INFO**: A selector tree finished building
//! - **DEBUG**: One selector's order resolved

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

const SOLVER_TARGET: &str = "selectorforge_solver";

/// Initializes the selector console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Respects `RUST_LOG`, defaulting to `info`.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::INFO.into())
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SelectorConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats selector events with colors.
pub struct SelectorConsoleLayer;

impl<S: Subscriber> Layer<S> for SelectorConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with(SOLVER_TARGET) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_selector_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    kind: Option<String>,
    path: Option<String>,
    root: Option<String>,
    configured: Option<String>,
    inherited: Option<String>,
    selection_order: Option<String>,
    cache_type: Option<String>,
    node_count: Option<u64>,
}

impl EventVisitor {
    fn set(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "kind" => self.kind = Some(value),
            "path" => self.path = Some(value),
            "root" => self.root = Some(value),
            "configured" => self.configured = Some(value),
            "inherited" => self.inherited = Some(value),
            "selection_order" => self.selection_order = Some(value),
            "cache_type" => self.cache_type = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "node_count" {
            self.node_count = Some(value);
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set(field.name(), value.to_string());
    }
}

fn format_selector_event(v: &EventVisitor) -> String {
    match v.event.as_deref() {
        Some("selector_resolved") => format_selector_resolved(v),
        Some("selector_tree_built") => format_tree_built(v),
        _ => String::new(),
    }
}

fn format_selector_resolved(v: &EventVisitor) -> String {
    let path = v.path.as_deref().unwrap_or("?");
    let order = v.selection_order.as_deref().unwrap_or("?");
    let cache_type = v.cache_type.as_deref().unwrap_or("?");
    let configured = v.configured.as_deref().unwrap_or("None");
    let inherited = v.inherited.as_deref().unwrap_or("None");

    format!(
        "{} {} {} {} resolved ({}) from configured ({}), inherited ({}), cache type ({})",
        timestamp().bright_black(),
        "DEBUG".bright_blue(),
        format!("[{}]", v.kind.as_deref().unwrap_or("selector")).bright_cyan(),
        path.white().bold(),
        order.bright_yellow(),
        configured.white(),
        inherited.white(),
        cache_type.bright_magenta()
    )
}

fn format_tree_built(v: &EventVisitor) -> String {
    format!(
        "{} {} {} selector tree ({}) built: root order ({}), selector count ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Builder]".bright_cyan(),
        v.root.as_deref().unwrap_or("?").white().bold(),
        v.selection_order.as_deref().unwrap_or("?").bright_yellow(),
        v.node_count.unwrap_or(0).to_string().yellow()
    )
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
}
