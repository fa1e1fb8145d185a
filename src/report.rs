//! Report emission to console and an append-only results file.
//!
//! Every section is duplicated to stdout and to `Results_<term>.txt` in
//! the working directory. The file receives plain text; the console gets
//! light ANSI coloring on URLs and titles.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::{Result, SearchResult};

const BLUE: &str = "\x1b[94m";
const YELLOW: &str = "\x1b[93m";
const RESET: &str = "\x1b[0m";

/// Writes report sections to the console and a per-term results file.
pub struct Reporter {
    file_name: String,
    path: PathBuf,
    file: File,
}

impl Reporter {
    /// Opens (or creates) `Results_<term>.txt` in the working directory.
    ///
    /// The file is opened in append mode, so repeated runs for the same
    /// term accumulate reports.
    pub fn new(sanitized_term: &str) -> Result<Self> {
        Self::in_dir(sanitized_term, Path::new("."))
    }

    /// Opens the results file under the given directory.
    pub fn in_dir(sanitized_term: &str, dir: &Path) -> Result<Self> {
        let file_name = format!("Results_{sanitized_term}.txt");
        let path = dir.join(&file_name);
        let file = OpenOptions::new().append(true).create(true).open(&path)?;
        Ok(Self {
            file_name,
            path,
            file,
        })
    }

    /// Returns the results file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the full path of the results file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Emits one line to both sinks.
    pub fn emit(&mut self, text: &str) -> Result<()> {
        println!("{text}");
        writeln!(self.file, "{text}")?;
        Ok(())
    }

    /// Emits the report header with the search term and a local timestamp.
    pub fn header(&mut self, sanitized_term: &str) -> Result<()> {
        let stamp = Local::now().format("%x %X");
        self.emit(&format!("SEARCH TERM: {sanitized_term}    TIME: {stamp}"))?;
        self.emit("")
    }

    /// Emits the user agent chosen for each engine.
    pub fn agents(&mut self, agents: &[(String, String)]) -> Result<()> {
        self.emit("User agent for each engine of this search:")?;
        for (name, agent) in agents {
            self.emit(&format!("{:<11}{agent}", format!("{name}:")))?;
        }
        self.emit("")
    }

    /// Emits the per-engine kept-results line.
    pub fn engine_kept(&mut self, kept: usize, name: &str, tag: &str) -> Result<()> {
        self.emit(&format!("Keeping the first {kept} results from {name} {tag}"))
    }

    /// Emits combined and unique totals.
    pub fn totals(&mut self, combined: usize, unique: usize) -> Result<()> {
        self.emit(&format!(
            "Kept {combined} total results.\n\nThere are {unique} unique results."
        ))
    }

    /// Emits the per-engine unique attribution count.
    pub fn tag_count(&mut self, count: usize, name: &str, tag: &str) -> Result<()> {
        self.emit(&format!("{count} unique results retained from {name} {tag}"))
    }

    /// Emits one result block: URL, tagged title, snippet.
    ///
    /// Console output colors the URL and title; the file copy is plain.
    pub fn result_block(&mut self, result: &SearchResult) -> Result<()> {
        println!("\n{BLUE}{}", result.url);
        println!("{YELLOW}{}{RESET}", result.title);
        println!("{}", result.snippet);
        writeln!(self.file, "\n{}", result.url)?;
        writeln!(self.file, "{}", result.title)?;
        writeln!(self.file, "{}", result.snippet)?;
        Ok(())
    }

    /// Emits the closing banner with the final unique count.
    pub fn banner(&mut self, unique: usize) -> Result<()> {
        let bar = "=".repeat(26);
        self.emit(&format!("\n{bar} END of {unique} results {bar}\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_reporter_file_name() {
        let dir = tempdir().unwrap();
        let reporter = Reporter::in_dir("rust+testing", dir.path()).unwrap();
        assert_eq!(reporter.file_name(), "Results_rust+testing.txt");
        assert!(reporter.path().ends_with("Results_rust+testing.txt"));
    }

    #[test]
    fn test_emit_writes_line_to_file() {
        let dir = tempdir().unwrap();
        let mut reporter = Reporter::in_dir("term", dir.path()).unwrap();
        reporter.emit("hello").unwrap();
        let contents = std::fs::read_to_string(reporter.path()).unwrap();
        assert_eq!(contents, "hello\n");
    }

    #[test]
    fn test_second_report_appends() {
        let dir = tempdir().unwrap();
        {
            let mut reporter = Reporter::in_dir("term", dir.path()).unwrap();
            reporter.emit("first run").unwrap();
        }
        let mut reporter = Reporter::in_dir("term", dir.path()).unwrap();
        reporter.emit("second run").unwrap();

        let contents = std::fs::read_to_string(reporter.path()).unwrap();
        assert!(contents.contains("first run"));
        assert!(contents.contains("second run"));
        assert!(contents.find("first run").unwrap() < contents.find("second run").unwrap());
    }

    #[test]
    fn test_header_contains_term() {
        let dir = tempdir().unwrap();
        let mut reporter = Reporter::in_dir("rust+lang", dir.path()).unwrap();
        reporter.header("rust+lang").unwrap();
        let contents = std::fs::read_to_string(reporter.path()).unwrap();
        assert!(contents.starts_with("SEARCH TERM: rust+lang    TIME: "));
    }

    #[test]
    fn test_result_block_file_copy_is_plain() {
        let dir = tempdir().unwrap();
        let mut reporter = Reporter::in_dir("term", dir.path()).unwrap();
        let result = SearchResult::new("https://a.com", "(DDG) Title", "A snippet");
        reporter.result_block(&result).unwrap();

        let contents = std::fs::read_to_string(reporter.path()).unwrap();
        assert!(contents.contains("https://a.com"));
        assert!(contents.contains("(DDG) Title"));
        assert!(contents.contains("A snippet"));
        assert!(!contents.contains('\x1b'), "file copy must not carry ANSI codes");
    }

    #[test]
    fn test_report_sections() {
        let dir = tempdir().unwrap();
        let mut reporter = Reporter::in_dir("term", dir.path()).unwrap();
        reporter.engine_kept(30, "DuckDuckGo", "(DDG)").unwrap();
        reporter.totals(70, 55).unwrap();
        reporter.tag_count(12, "Mojeek", "(Moj)").unwrap();
        reporter.banner(55).unwrap();

        let contents = std::fs::read_to_string(reporter.path()).unwrap();
        assert!(contents.contains("Keeping the first 30 results from DuckDuckGo (DDG)"));
        assert!(contents.contains("Kept 70 total results."));
        assert!(contents.contains("There are 55 unique results."));
        assert!(contents.contains("12 unique results retained from Mojeek (Moj)"));
        assert!(contents.contains(&format!("{} END of 55 results {}", "=".repeat(26), "=".repeat(26))));
    }

    #[test]
    fn test_agents_listing() {
        let dir = tempdir().unwrap();
        let mut reporter = Reporter::in_dir("term", dir.path()).unwrap();
        reporter
            .agents(&[("DuckDuckGo".to_string(), "Mozilla/5.0 test".to_string())])
            .unwrap();
        let contents = std::fs::read_to_string(reporter.path()).unwrap();
        assert!(contents.contains("User agent for each engine of this search:"));
        assert!(contents.contains("DuckDuckGo:"));
        assert!(contents.contains("Mozilla/5.0 test"));
    }
}
