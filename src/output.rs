use crate::sort::{SortKey, SortState};
use crate::stories::Story;
use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Prefix for all status lines
const MARK: &str = "▲";

const DEFAULT_WIDTH: usize = 100;
const INDEX_WIDTH: usize = 4;
const NUMBER_WIDTH: usize = 9;

fn terminal_width() -> usize {
    terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_WIDTH)
        .max(60)
}

/// Cut `text` to at most `width` columns, marking truncation with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Left-align `text` in a column of `width` terminal cells
pub fn pad(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn pad_left(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(fill), text)
}

fn number(value: Option<u32>) -> String {
    value.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Print a startup banner
pub fn banner() {
    let width = terminal_width().min(60);
    println!();
    println!("{}", "═".repeat(width).bright_yellow());
    println!(
        "{}  {}",
        MARK.bright_yellow(),
        "MY HACKER STORIES".bright_yellow().bold()
    );
    println!("{}", "═".repeat(width).bright_yellow());
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", MARK.bright_white(), message);
}

/// Print a warning message (yellow)
pub fn warn(message: &str) {
    println!("{} {}", MARK.yellow(), message.yellow());
}

/// Print an error message (red)
pub fn error(message: &str) {
    println!("{} {}", MARK.red(), message.red());
}

/// Print the current search and the shortcuts to previous ones
pub fn search_header(term: &str, last_searches: &[&str]) {
    println!();
    println!(
        "{} {} {}",
        MARK.bright_cyan(),
        "Search:".bright_white().bold(),
        term.bright_cyan()
    );
    if !last_searches.is_empty() {
        let shortcuts: Vec<String> = last_searches
            .iter()
            .enumerate()
            .map(|(i, term)| format!("[{}] {}", i + 1, term))
            .collect();
        println!(
            "{} {} {}",
            MARK.dimmed(),
            "Last searches:".dimmed(),
            shortcuts.join("  ")
        );
    }
}

fn heading(label: &str, key: SortKey, sort: SortState) -> String {
    if sort.key == key && key != SortKey::None {
        let arrow = if sort.is_reverse { "↓" } else { "↑" };
        format!("{} {}", label, arrow)
    } else {
        label.to_string()
    }
}

/// Print the story table in display order
pub fn story_table(stories: &[&Story], sort: SortState) {
    let width = terminal_width();
    let flexible = width.saturating_sub(INDEX_WIDTH + NUMBER_WIDTH * 2 + 4);
    let title_width = flexible * 4 / 7;
    let author_width = flexible - title_width;

    println!();
    println!(
        "{} {} {} {} {}",
        pad("#", INDEX_WIDTH).dimmed(),
        pad(&heading("Title", SortKey::Title, sort), title_width).bold(),
        pad(&heading("Author", SortKey::Author, sort), author_width).bold(),
        pad_left(&heading("Comments", SortKey::Comments, sort), NUMBER_WIDTH).bold(),
        pad_left(&heading("Points", SortKey::Points, sort), NUMBER_WIDTH).bold(),
    );
    println!("{}", "─".repeat(width).dimmed());

    for (i, story) in stories.iter().enumerate() {
        let title = story.title.as_deref().unwrap_or("(untitled)");
        let author = story.author.as_deref().unwrap_or("");
        println!(
            "{} {} {} {} {}",
            pad(&(i + 1).to_string(), INDEX_WIDTH).dimmed(),
            pad(title, title_width).bright_white(),
            pad(author, author_width).cyan(),
            pad_left(&number(story.num_comments), NUMBER_WIDTH),
            pad_left(&number(story.points), NUMBER_WIDTH).green(),
        );
        if let Some(url) = story.url.as_deref() {
            println!(
                "{} {}",
                " ".repeat(INDEX_WIDTH),
                truncate(url, width.saturating_sub(INDEX_WIDTH + 1)).dimmed()
            );
        }
    }

    if stories.is_empty() {
        println!("{}", "  No stories.".dimmed());
    }
}

/// Print the error indicator shown above whatever is still loaded
pub fn fetch_error() {
    println!();
    println!("{} {}", MARK.red(), "Something went wrong...".red().bold());
}

/// Print the hint for loading the next page
pub fn more_hint() {
    println!();
    println!("{} {}", MARK.dimmed(), "/more for the next page".dimmed());
}

/// Print the command reference
pub fn help() {
    println!();
    let commands = [
        ("<text>", "search for <text>"),
        ("/search <text>", "search for <text>"),
        ("/more", "load the next page"),
        ("/last <n>", "repeat last search number <n>"),
        ("/remove <n|id>", "dismiss a story by row number or objectID"),
        ("/sort <column>", "none, title, author, comments or points"),
        ("/history", "show the search history"),
        ("/help", "show this help"),
        ("/quit", "exit"),
    ];
    for (command, description) in commands {
        println!("  {} {}", pad(command, 16).bright_cyan(), description);
    }
}
