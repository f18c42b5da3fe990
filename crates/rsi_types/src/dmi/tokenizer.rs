//! Line tokenizer for DMI embedded metadata.
//!
//! The text is a flat list of `key = value` lines and `#` comments. There are
//! no record terminators, so the parser relies on [`Tokenizer::rewind`] to put
//! back the `state` line that closes the previous record.

use crate::error::{ParseError, ParseErrorKind};

/// Forward cursor over the non-empty, trimmed lines of a metadata blob.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
	lines: Vec<&'a str>,
	/// Position of the current line; `None` before the first `advance`
	index: Option<usize>,
}

impl<'a> Tokenizer<'a> {
	/// Splits `text` on `\n`, trimming each line and dropping empty ones.
	pub fn new(text: &'a str) -> Self {
		let lines = text.split('\n').map(str::trim).filter(|line| !line.is_empty()).collect();

		Self {
			lines,
			index: None,
		}
	}

	/// Returns true if `line` is a comment.
	#[inline]
	pub fn is_comment(line: &str) -> bool {
		line.starts_with('#')
	}

	/// Splits a line into its key and value.
	///
	/// The line is split at the first `=`; whitespace and wrapping double quotes
	/// are trimmed from both halves.
	///
	/// # Errors
	///
	/// Returns [`ParseErrorKind::MalformedTuple`] if the line has no `=`.
	pub fn parse_tuple(line: &str) -> Result<(&str, &str), ParseError> {
		let Some((key, value)) = line.split_once('=') else {
			return Err(ParseErrorKind::MalformedTuple.with_message(format!("Expected key = value, got \"{line}\"")));
		};

		Ok((key.trim().trim_matches('"'), value.trim().trim_matches('"')))
	}

	/// Moves to the next line. Returns false once the input is exhausted.
	pub fn advance(&mut self) -> bool {
		let next = self.index.map_or(0, |i| i + 1);
		if next >= self.lines.len() {
			return false;
		}

		self.index = Some(next);
		true
	}

	/// Steps back one line, undoing the last successful [`advance`](Self::advance).
	pub fn rewind(&mut self) {
		self.index = match self.index {
			Some(0) | None => None,
			Some(i) => Some(i - 1),
		};
	}

	/// The line under the cursor.
	pub fn current_line(&self) -> Option<&'a str> {
		self.lines.get(self.index?).copied()
	}

	/// Index of the line under the cursor.
	pub fn index(&self) -> Option<usize> {
		self.index
	}

	/// Total number of lines.
	pub fn len(&self) -> usize {
		self.lines.len()
	}

	/// Returns true if there are no lines at all.
	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	/// All lines, in order.
	pub fn lines(&self) -> &[&'a str] {
		&self.lines
	}
}
