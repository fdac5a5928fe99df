//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Three inputs (niche, location, count), one submit action, one export action.

use crate::adapters::ui::progress::search_spinner;
use crate::adapters::ui::results_view::{LOADING_TEXT, Rendered, render};
use crate::domain::{DomainError, SearchView, parse_results_count};
use crate::ports::InputPort;
use crate::usecases::{ExportService, LeadSearchService, LeadSession};
use async_trait::async_trait;
use crossterm::style::Stylize;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{InquireError, Select, Text};
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

/// Applies the prompt theme for all subsequent inquire prompts.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("›").with_fg(Color::LightCyan))
        .with_highlighted_option_prefix(Styled::new("▸").with_fg(Color::LightMagenta));
    inquire::set_global_render_config(config);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Niche,
    Location,
    Count,
    Find,
    Export,
    Quit,
}

/// Menu entry: an action plus its current label.
struct MenuItem {
    action: Action,
    label: String,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn field_label(name: &str, value: &str) -> String {
    if value.is_empty() {
        format!("{}: (not set)", name)
    } else {
        format!("{}: {}", name, value)
    }
}

fn menu_items(session: &LeadSession) -> Vec<MenuItem> {
    let mut items = vec![
        MenuItem {
            action: Action::Niche,
            label: field_label("Niche", session.niche()),
        },
        MenuItem {
            action: Action::Location,
            label: field_label("Location", session.location()),
        },
        MenuItem {
            action: Action::Count,
            label: format!("Results: {}", session.results_count()),
        },
        MenuItem {
            action: Action::Find,
            label: if session.can_submit() {
                "Find".to_string()
            } else {
                "Find (enter a niche and a location first)".to_string()
            },
        },
    ];
    // Export is offered only while a results table is on screen
    if !session.results().is_empty() {
        items.push(MenuItem {
            action: Action::Export,
            label: format!("Export CSV ({} leads)", session.results().len()),
        });
    }
    items.push(MenuItem {
        action: Action::Quit,
        label: "Quit".to_string(),
    });
    items
}

/// Escape keeps the old value; anything else but interrupt is an input error.
fn prompt_text(prompt: Text<'_, '_>) -> Result<Option<String>, DomainError> {
    match prompt.prompt() {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Input(e.to_string())),
    }
}

fn print_view(view: SearchView<'_>) {
    match render(view) {
        Rendered::Nothing => {}
        Rendered::Loading(text) => println!("{}", text.dim()),
        Rendered::Error(message) => println!("\n{}\n", message.red().bold()),
        Rendered::Empty { title, hint } => {
            println!("\n{}", title.yellow().bold());
            println!("{}\n", hint.dim());
        }
        Rendered::Table { title, lines } => {
            println!("\n{}\n", title.bold());
            let mut lines = lines.into_iter();
            if let Some(header) = lines.next() {
                println!("{}", header.bold());
            }
            for line in lines {
                println!("{}", line);
            }
            println!();
        }
    }
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    session: Mutex<LeadSession>,
    search: Arc<LeadSearchService>,
    export: Arc<ExportService>,
}

impl TuiInputPort {
    pub fn new(search: Arc<LeadSearchService>, export: Arc<ExportService>) -> Self {
        Self {
            session: Mutex::new(LeadSession::new()),
            search,
            export,
        }
    }

    async fn edit_field(&self, action: Action) -> Result<(), DomainError> {
        let mut session = self.session.lock().await;
        match action {
            Action::Niche => {
                let current = session.niche().to_string();
                let prompt = Text::new("Niche:")
                    .with_placeholder("e.g. Dentists, Roofers")
                    .with_initial_value(&current);
                if let Some(value) = prompt_text(prompt)? {
                    session.set_niche(value);
                }
            }
            Action::Location => {
                let current = session.location().to_string();
                let prompt = Text::new("Location:")
                    .with_placeholder("e.g. Chicago")
                    .with_initial_value(&current);
                if let Some(value) = prompt_text(prompt)? {
                    session.set_location(value);
                }
            }
            Action::Count => {
                let current = session.results_count().to_string();
                let prompt = Text::new("Number of results (1-50):")
                    .with_placeholder("Limit")
                    .with_initial_value(&current);
                if let Some(value) = prompt_text(prompt)? {
                    session.set_results_count(parse_results_count(&value));
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn find(&self) {
        let mut session = self.session.lock().await;
        let submitted = session
            .search_with(
                &self.search,
                |_| search_spinner(LOADING_TEXT),
                |spinner| spinner.finish_and_clear(),
            )
            .await;
        if submitted {
            print_view(session.view());
        } else {
            println!("{}", "Enter a niche and a location to search.".yellow());
        }
    }

    async fn export(&self) {
        let session = self.session.lock().await;
        match self
            .export
            .export(session.niche(), session.location(), session.results())
            .await
        {
            Ok(Some(path)) => println!(
                "{}",
                format!(
                    "Saved {} leads to {}",
                    session.results().len(),
                    path.display()
                )
                .green()
            ),
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "export failed");
                println!("{}", e.to_string().red());
            }
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let items = {
                let session = self.session.lock().await;
                menu_items(&session)
            };

            let choice = match Select::new("What next?", items).prompt() {
                Ok(item) => item.action,
                Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => {
                    Action::Quit
                }
                Err(e) => return Err(DomainError::Input(e.to_string())),
            };

            match choice {
                Action::Niche | Action::Location | Action::Count => self.edit_field(choice).await?,
                Action::Find => self.find().await,
                Action::Export => self.export().await,
                Action::Quit => return Ok(()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BusinessContact;

    fn actions(session: &LeadSession) -> Vec<Action> {
        menu_items(session).iter().map(|i| i.action).collect()
    }

    #[test]
    fn test_menu_hides_export_without_results() {
        let session = LeadSession::new();
        assert_eq!(
            actions(&session),
            vec![
                Action::Niche,
                Action::Location,
                Action::Count,
                Action::Find,
                Action::Quit
            ]
        );
    }

    #[test]
    fn test_menu_offers_export_with_results() {
        let mut session = LeadSession::new();
        session.set_niche("Cafes");
        session.set_location("Lyon");
        session.begin_search();
        session.complete_search(Ok(vec![BusinessContact {
            name: "Le Bol".to_string(),
            website: "https://lebol.example".to_string(),
            phone: None,
            email: None,
            address: None,
            description: "Cafe".to_string(),
        }]));
        let items = menu_items(&session);
        assert!(items.iter().any(|i| i.action == Action::Export));
        assert_eq!(items[3].label, "Find");
    }

    #[test]
    fn test_field_label() {
        assert_eq!(field_label("Niche", ""), "Niche: (not set)");
        assert_eq!(field_label("Niche", "Roofers"), "Niche: Roofers");
    }
}
