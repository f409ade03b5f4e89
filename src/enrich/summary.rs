//! Record summarization.
//!
//! The default summarizer is deterministic and offline: it truncates to the
//! first N words. An external command (an LLM CLI, a script) can be plugged
//! in instead; it receives the text on stdin and its stdout becomes the
//! summary. Any failure of the external path falls back to the extractive
//! summary, so summarization can never fail the pipeline.

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use tracing::warn;

/// Default word cap for extractive summaries.
pub const DEFAULT_SUMMARY_WORDS: usize = 25;

/// Summarization capability. Infallible by contract; implementations fall
/// back internally instead of erroring.
pub trait Summarizer {
    fn summarize(&self, text: &str) -> String;
}

/// First-N-words extractive summary with a trailing ellipsis when truncated.
#[derive(Debug, Clone, Copy)]
pub struct ExtractiveSummary {
    max_words: usize,
}

impl ExtractiveSummary {
    pub fn new(max_words: usize) -> Self {
        Self {
            max_words: max_words.max(1),
        }
    }
}

impl Default for ExtractiveSummary {
    fn default() -> Self {
        Self::new(DEFAULT_SUMMARY_WORDS)
    }
}

impl Summarizer for ExtractiveSummary {
    fn summarize(&self, text: &str) -> String {
        let words: Vec<&str> = text.split_whitespace().collect();
        if words.len() <= self.max_words {
            words.join(" ")
        } else {
            format!("{}...", words[..self.max_words].join(" "))
        }
    }
}

/// Pipes the text into an external command and uses its stdout as the
/// summary. Falls back to [`ExtractiveSummary`] when the command is missing,
/// exits nonzero, times out, or prints nothing.
pub struct CommandSummarizer {
    program: String,
    args: Vec<String>,
    timeout: Duration,
    fallback: ExtractiveSummary,
}

impl CommandSummarizer {
    /// Parses a command line like `"summarize --short"` into program + args.
    /// Returns None for an empty command string.
    pub fn from_command_line(
        command: &str,
        timeout: Duration,
        fallback: ExtractiveSummary,
    ) -> Option<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
            timeout,
            fallback,
        })
    }

    fn invoke(&self, text: &str) -> std::io::Result<Option<String>> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()?;

        // Feed stdin from a helper thread: a command that never reads its
        // input would otherwise block write_all once the pipe fills, and the
        // timeout below would never be reached. The write fails and the
        // thread exits once the child dies or is killed.
        if let Some(mut stdin) = child.stdin.take() {
            let payload = text.as_bytes().to_vec();
            std::thread::spawn(move || {
                let _ = stdin.write_all(&payload);
            });
        }

        // std::process has no native timeout; poll like we do for any
        // external tool.
        let start = Instant::now();
        let poll = Duration::from_millis(50);
        loop {
            match child.try_wait()? {
                Some(status) => {
                    if !status.success() {
                        return Ok(None);
                    }
                    let output = child.wait_with_output()?;
                    let summary = String::from_utf8_lossy(&output.stdout).trim().to_string();
                    return Ok((!summary.is_empty()).then_some(summary));
                }
                None => {
                    if start.elapsed() >= self.timeout {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Ok(None);
                    }
                    std::thread::sleep(poll);
                }
            }
        }
    }
}

impl Summarizer for CommandSummarizer {
    fn summarize(&self, text: &str) -> String {
        match self.invoke(text) {
            Ok(Some(summary)) => summary,
            Ok(None) => {
                warn!(program = %self.program, "summary command produced no usable output");
                self.fallback.summarize(text)
            }
            Err(e) => {
                warn!(program = %self.program, error = %e, "summary command failed");
                self.fallback.summarize(text)
            }
        }
    }
}
