//! Interactive terminal front end.
//!
//! Reads commands from stdin and fetch outcomes from spawned tasks in one
//! `select!` loop, so a slow request never blocks typing and outcomes are
//! applied in whatever order they finish.

use crate::app::{App, FetchOutcome, PendingFetch};
use crate::output;
use crate::search::SearchApi;
use crate::sort::{SortKey, SortKeyError, SortState};
use crate::store::KeyValueStore;
use indicatif::ProgressBar;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error(transparent)]
    SortKey(#[from] SortKeyError),
    #[error("unknown command: /{0}")]
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    More,
    Last(usize),
    Remove(String),
    Sort(SortKey),
    History,
    Help,
    Quit,
    Empty,
}

impl Command {
    /// Parses one input line. Text without a leading `/` is a search.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Self::Empty);
        }
        let Some(rest) = line.strip_prefix('/') else {
            return Ok(Self::Search(line.to_string()));
        };

        let (name, arg) = match rest.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (rest, ""),
        };

        match name {
            "search" | "s" => {
                if arg.is_empty() {
                    Err(CommandError::Usage("/search <text>"))
                } else {
                    Ok(Self::Search(arg.to_string()))
                }
            }
            "more" | "m" => Ok(Self::More),
            "last" | "l" => arg
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .map(Self::Last)
                .ok_or(CommandError::Usage("/last <n>")),
            "remove" | "rm" | "r" => {
                if arg.is_empty() {
                    Err(CommandError::Usage("/remove <n|objectID>"))
                } else {
                    Ok(Self::Remove(arg.to_string()))
                }
            }
            "sort" => Ok(Self::Sort(arg.parse::<SortKey>()?)),
            "history" | "h" => Ok(Self::History),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

pub struct Repl<A, S> {
    app: App<A, S>,
    sort: SortState,
    spinner: Option<ProgressBar>,
}

impl<A, S> Repl<A, S>
where
    A: SearchApi + 'static,
    S: KeyValueStore,
{
    pub fn new(app: App<A, S>) -> Self {
        Self {
            app,
            sort: SortState::default(),
            spinner: None,
        }
    }

    pub async fn run(mut self) {
        let (tx, mut rx) = mpsc::unbounded_channel::<FetchOutcome>();
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        output::banner();
        output::help();

        match self.app.refresh() {
            Ok(pending) => self.spawn(pending, &tx),
            Err(e) => output::error(&e.to_string()),
        }

        loop {
            tokio::select! {
                Some(outcome) = rx.recv() => {
                    self.app.complete(outcome);
                    self.render();
                }
                line = lines.next_line() => match line {
                    Ok(Some(line)) => {
                        if !self.handle_line(&line, &tx) {
                            break;
                        }
                    }
                    Ok(None) => break,
                    Err(e) => {
                        tracing::warn!(error = %e, "failed to read input");
                        break;
                    }
                },
            }
        }

        self.clear_spinner();
        tracing::debug!("input closed, exiting");
    }

    /// Returns `false` when the loop should stop.
    fn handle_line(&mut self, line: &str, tx: &mpsc::UnboundedSender<FetchOutcome>) -> bool {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                output::warn(&e.to_string());
                return true;
            }
        };

        let started = match command {
            Command::Empty => return true,
            Command::Quit => return false,
            Command::Help => {
                output::help();
                return true;
            }
            Command::History => {
                for descriptor in self.app.history().iter() {
                    output::info(&format!(
                        "{} (page {})",
                        descriptor.decode(),
                        descriptor.page()
                    ));
                }
                return true;
            }
            Command::Sort(key) => {
                self.sort = self.sort.toggle(key);
                self.render();
                return true;
            }
            Command::Remove(target) => {
                self.remove(&target);
                self.render();
                return true;
            }
            Command::Search(term) => self.app.search_for(&term),
            Command::Last(n) => {
                let term = self.app.last_search(n).map(str::to_string);
                match term {
                    Some(term) => self.app.choose_last_search(&term),
                    None => {
                        output::warn(&format!("no last search number {}", n));
                        return true;
                    }
                }
            }
            Command::More => {
                if !self.app.can_load_more() {
                    output::warn("still loading");
                    return true;
                }
                self.app.load_more()
            }
        };

        match started {
            Ok(pending) => self.spawn(pending, tx),
            Err(e) => output::error(&e.to_string()),
        }
        true
    }

    fn remove(&mut self, target: &str) {
        let object_id = self.sort.resolve_target(&self.app.stories().data, target);
        self.app.remove_story(&object_id);
    }

    fn spawn(&mut self, pending: PendingFetch<A>, tx: &mpsc::UnboundedSender<FetchOutcome>) {
        let tx = tx.clone();
        tokio::spawn(async move {
            let outcome = pending.run().await;
            // The receiver only closes when the loop has exited.
            let _ = tx.send(outcome);
        });
        self.update_spinner();
    }

    fn render(&mut self) {
        self.update_spinner();

        let state = self.app.stories();
        output::search_header(self.app.search_term(), &self.app.last_searches());

        if state.is_error {
            output::fetch_error();
        }
        if self.app.show_list() {
            output::story_table(&self.sort.apply(&state.data), self.sort);
        }
        if self.app.can_load_more() {
            output::more_hint();
        }
    }

    fn update_spinner(&mut self) {
        if !self.app.stories().is_loading {
            self.clear_spinner();
            return;
        }
        if self.spinner.is_none() {
            let spinner = ProgressBar::new_spinner();
            spinner.set_message("Loading...");
            spinner.enable_steady_tick(Duration::from_millis(100));
            self.spinner = Some(spinner);
        }
    }

    fn clear_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}
