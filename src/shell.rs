//! Interactive front end
//!
//! Reads one command per line, runs it against [`App`], and redraws the
//! queue or page grid whenever the state behind it changed.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use glob::glob;

use crate::app::{App, View};
use crate::error::{Error, Result};
use crate::layout::GridLayout;
use crate::pdf::extract_metadata;

const PROMPT: &str = "pdf-tool> ";

/// Width of one grid cell in characters
const CELL_WIDTH: usize = 26;

/// One line typed at the prompt
#[derive(Parser, Debug)]
#[command(name = "pdf-tool", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: ShellCommand,
}

/// Commands understood by the shell
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Queue PDF files for merging. Supports glob patterns like "*.pdf"
    Add {
        #[arg(required = true)]
        inputs: Vec<String>,
    },

    /// Remove a file from the queue, by path or by its number in the list
    #[command(alias = "rm")]
    Remove { target: String },

    /// Remove every file from the queue
    Clear,

    /// Show the queue
    #[command(alias = "ls")]
    List,

    /// Merge the queued files, in order, into OUTPUT
    Merge { output: PathBuf },

    /// Open a PDF to pick pages for removal
    Open { input: PathBuf },

    /// Mark or unmark pages for removal (page numbers start at 1)
    Toggle {
        #[arg(required = true)]
        pages: Vec<usize>,
    },

    /// Show the pages of the open PDF
    Pages,

    /// Save the open PDF without the marked pages to OUTPUT
    Apply { output: PathBuf },

    /// Stop removing pages and go back to the queue
    Close,

    /// Show information about a PDF file
    Info { input: PathBuf },

    /// Leave the program
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session should keep reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Grid sizes used when drawing
#[derive(Debug, Clone, Copy)]
pub struct ShellOptions {
    pub queue_grid: GridLayout,
    pub page_grid: GridLayout,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            queue_grid: GridLayout::queue(),
            page_grid: GridLayout::pages(),
        }
    }
}

/// Split a command line into words, honouring single and double quotes
///
/// Backslashes are kept as-is so Windows paths need no escaping.
pub fn split_words(line: &str) -> std::result::Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("Unclosed {} quote", q));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Expand glob patterns, keeping literal paths in the order given
pub fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for pattern in patterns {
        if pattern.contains('*') || pattern.contains('?') || pattern.contains('[') {
            let entries = glob(pattern).map_err(|e| Error::InvalidGlob(e.to_string()))?;

            let mut matched = false;
            for entry in entries {
                match entry {
                    Ok(path) => {
                        paths.push(path);
                        matched = true;
                    }
                    Err(e) => log::warn!("glob error for {}: {}", pattern, e),
                }
            }
            if !matched {
                return Err(Error::NoFilesMatched(pattern.clone()));
            }
        } else {
            paths.push(PathBuf::from(pattern));
        }
    }

    Ok(paths)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Fit `text` into a grid cell, cutting long names short
fn cell(text: &str) -> String {
    let width = CELL_WIDTH - 2;
    if text.chars().count() > width {
        let cut: String = text.chars().take(width - 3).collect();
        format!("{:<w$}", format!("{}...", cut), w = CELL_WIDTH)
    } else {
        format!("{:<w$}", text, w = CELL_WIDTH)
    }
}

/// The interactive session
pub struct Shell<W: Write> {
    app: App,
    out: W,
    options: ShellOptions,
    drawn: Option<u64>,
}

impl<W: Write> Shell<W> {
    pub fn new(app: App, out: W, options: ShellOptions) -> Self {
        Self {
            app,
            out,
            options,
            drawn: None,
        }
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Read commands until end of input or `quit`
    pub fn run<R: BufRead>(&mut self, input: R) -> io::Result<()> {
        self.redraw()?;

        let mut lines = input.lines();
        loop {
            write!(self.out, "{}", PROMPT)?;
            self.out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(self.out)?;
                break;
            };
            if self.execute_line(&line?)? == Flow::Quit {
                break;
            }
        }

        Ok(())
    }

    /// Run one line of input
    ///
    /// Command failures are reported to the user and never end the session;
    /// only failing to write output is returned as an error.
    pub fn execute_line(&mut self, line: &str) -> io::Result<Flow> {
        let words = match split_words(line) {
            Ok(words) => words,
            Err(message) => {
                writeln!(self.out, "Error: {}", message)?;
                return Ok(Flow::Continue);
            }
        };
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = match ShellLine::try_parse_from(&words) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                write!(self.out, "{}", err)?;
                return Ok(Flow::Continue);
            }
        };

        if command == ShellCommand::Quit {
            return Ok(Flow::Quit);
        }

        match self.execute(command) {
            Ok(()) => {}
            Err(Error::NotEnoughInputs { .. }) => {
                writeln!(self.out, "Error: Add at least two PDFs to merge.")?
            }
            Err(e) => writeln!(self.out, "Error: {}", e)?,
        }

        self.refresh()?;
        Ok(Flow::Continue)
    }

    fn execute(&mut self, command: ShellCommand) -> Result<()> {
        match command {
            ShellCommand::Add { inputs } => {
                let paths = expand_globs(&inputs)?;
                let added = self.app.add_files(paths);
                writeln!(self.out, "Added {} PDF(s).", added)?;
            }
            ShellCommand::Remove { target } => {
                let path = self.resolve_queue_entry(&target);
                if !self.app.remove_file(&path) {
                    writeln!(self.out, "Not in queue: {}", path.display())?;
                }
            }
            ShellCommand::Clear => self.app.clear_files(),
            ShellCommand::List => self.draw(View::Queue)?,
            ShellCommand::Merge { output } => {
                let summary = self.app.merge_queue(&output)?;
                writeln!(self.out, "Saved to: {}", summary.output_path.display())?;
            }
            ShellCommand::Open { input } => {
                let page_count = self.app.open_for_removal(&input)?;
                writeln!(
                    self.out,
                    "Opened {} ({} pages). Mark pages with `toggle`, save with `apply <output>`.",
                    display_name(&input),
                    page_count
                )?;
            }
            ShellCommand::Toggle { pages } => {
                for number in pages {
                    let index = number.checked_sub(1).ok_or(Error::PageOutOfRange {
                        index: 0,
                        page_count: self.app.selection().page_count(),
                    })?;
                    let marked = self.app.toggle_page(index).map_err(|e| match e {
                        Error::PageOutOfRange { page_count, .. } => Error::PageOutOfRange {
                            index: number,
                            page_count,
                        },
                        other => other,
                    })?;
                    let state = if marked { "marked for removal" } else { "unmarked" };
                    writeln!(self.out, "Page {} {}", number, state)?;
                }
            }
            ShellCommand::Pages => {
                if !self.app.selection().is_open() {
                    return Err(Error::NoActiveDocument);
                }
                self.draw(View::Pages)?;
            }
            ShellCommand::Apply { output } => {
                let summary = self.app.apply_removal(&output)?;
                writeln!(
                    self.out,
                    "Saved PDF with {} page(s) removed.",
                    summary.pages_removed
                )?;
                writeln!(self.out, "Saved to: {}", summary.output_path.display())?;
            }
            ShellCommand::Close => {
                self.app.close_removal();
            }
            ShellCommand::Info { input } => {
                let metadata = extract_metadata(&input)?;
                writeln!(self.out, "File: {}", input.display())?;
                writeln!(self.out, "Pages: {}", metadata.page_count)?;
                if let Some(title) = metadata.title {
                    writeln!(self.out, "Title: {}", title)?;
                }
                if let Some(author) = metadata.author {
                    writeln!(self.out, "Author: {}", author)?;
                }
            }
            ShellCommand::Quit => {}
        }

        Ok(())
    }

    /// A queue position (1-based) or a path
    fn resolve_queue_entry(&self, target: &str) -> PathBuf {
        let queued = self.app.queue().paths();
        target
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=queued.len()).contains(n))
            .map(|n| queued[n - 1].clone())
            .unwrap_or_else(|| PathBuf::from(target))
    }

    /// Redraw the current view if anything changed since it was last drawn
    fn refresh(&mut self) -> io::Result<()> {
        if self.drawn != Some(self.app.refresh_marker()) {
            self.redraw()?;
        }
        Ok(())
    }

    fn redraw(&mut self) -> io::Result<()> {
        self.draw(self.app.view())
    }

    fn draw(&mut self, view: View) -> io::Result<()> {
        match view {
            View::Queue => self.draw_queue()?,
            View::Pages => self.draw_pages()?,
        }
        if view == self.app.view() {
            self.drawn = Some(self.app.refresh_marker());
        }
        Ok(())
    }

    fn draw_queue(&mut self) -> io::Result<()> {
        let queue = self.app.queue();
        if queue.is_empty() {
            writeln!(self.out, "Queue is empty. Use `add <file>...` to queue PDFs.")?;
            return Ok(());
        }

        writeln!(self.out, "Queue ({} files):", queue.len())?;
        let cards: Vec<String> = queue
            .paths()
            .iter()
            .enumerate()
            .map(|(i, path)| cell(&format!("[{}] {}", i + 1, display_name(path))))
            .collect();

        for row in self.options.queue_grid.chunk(&cards) {
            writeln!(self.out, "  {}", row.concat().trim_end())?;
        }
        Ok(())
    }

    fn draw_pages(&mut self) -> io::Result<()> {
        let selection = self.app.selection();
        let Some(path) = selection.path() else {
            return Ok(());
        };

        writeln!(
            self.out,
            "Pages of {} ({} pages, {} marked):",
            display_name(path),
            selection.page_count(),
            selection.selected().len()
        )?;

        let tiles: Vec<String> = selection
            .pages()
            .iter()
            .map(|page| {
                let mark = if selection.is_selected(page.index) { "x" } else { " " };
                let size = page.size.map(|s| s.describe()).unwrap_or_default();
                cell(&format!("[{}] {:>3} {}", mark, page.index + 1, size))
            })
            .collect();

        for row in self.options.page_grid.chunk(&tiles) {
            writeln!(self.out, "  {}", row.concat().trim_end())?;
        }
        Ok(())
    }
}
