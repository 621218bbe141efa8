//! Session Reader
//!
//! Drives header validation, frame reading and payload decoding over one
//! input stream.

use std::fs::File;
use std::io::{BufReader, Read};
use std::iter::FusedIterator;
use std::path::Path;

use crate::command::{Command, CommandKind};
use crate::config::ReaderConfig;
use crate::error::Result;

use super::{read_header, read_next_frame, FileHeader};

/// Reads decoded commands from a session file
///
/// The header is validated on construction. Decoding is single pass: once
/// the stream ends or an error is returned, no further commands are produced.
pub struct SnssReader<R> {
    inner: BufReader<R>,
    header: FileHeader,
    config: ReaderConfig,
    /// Frames read from the input, including skipped ones
    frames_read: u64,
    /// Frames dropped because of `skip_unknown`
    frames_skipped: u64,
    /// Commands handed to the caller
    emitted: usize,
    finished: bool,
}

impl SnssReader<File> {
    /// Open a session file with the default configuration
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, ReaderConfig::default())
    }

    pub fn open_with_config(path: impl AsRef<Path>, config: ReaderConfig) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::with_config(file, config)
    }
}

impl<R: Read> SnssReader<R> {
    pub fn new(inner: R) -> Result<Self> {
        Self::with_config(inner, ReaderConfig::default())
    }

    /// Wrap `inner` and read the file header
    pub fn with_config(inner: R, config: ReaderConfig) -> Result<Self> {
        let mut inner = BufReader::with_capacity(config.buffer_capacity, inner);
        let header = read_header(&mut inner)?;

        Ok(Self {
            inner,
            header,
            config,
            frames_read: 0,
            frames_skipped: 0,
            emitted: 0,
            finished: false,
        })
    }

    pub fn header(&self) -> FileHeader {
        self.header
    }

    /// File format version from the header
    pub fn version(&self) -> i32 {
        self.header.version
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    pub fn frames_skipped(&self) -> u64 {
        self.frames_skipped
    }

    /// Read and decode the next command
    ///
    /// Returns `Ok(None)` at the end of the stream (or once `max_commands`
    /// is reached). After an error every later call returns `Ok(None)`.
    pub fn next_command(&mut self) -> Result<Option<Command>> {
        if self.finished {
            return Ok(None);
        }
        if self.config.max_commands.is_some_and(|limit| self.emitted >= limit) {
            tracing::debug!(emitted = self.emitted, "command limit reached");
            self.finished = true;
            return Ok(None);
        }

        match self.read_command() {
            Ok(Some(command)) => {
                self.emitted += 1;
                Ok(Some(command))
            }
            Ok(None) => {
                tracing::debug!(frames = self.frames_read, "end of command stream");
                self.finished = true;
                Ok(None)
            }
            Err(err) => {
                self.finished = true;
                Err(err)
            }
        }
    }

    /// Iterate over the remaining commands
    pub fn commands(self) -> Commands<R> {
        Commands { reader: self }
    }

    fn read_command(&mut self) -> Result<Option<Command>> {
        loop {
            let Some(frame) = read_next_frame(&mut self.inner)? else {
                return Ok(None);
            };
            self.frames_read += 1;

            let decodable = CommandKind::from_tag(frame.kind).is_some_and(CommandKind::has_decoder);
            if self.config.skip_unknown && !decodable {
                tracing::debug!(kind = frame.kind, "skipping undecoded command");
                self.frames_skipped += 1;
                continue;
            }

            return frame.decode().map(Some);
        }
    }
}

/// Iterator over the commands of a session file
///
/// Yields at most one `Err`, after which it is exhausted.
pub struct Commands<R> {
    reader: SnssReader<R>,
}

impl<R> Commands<R> {
    /// The reader behind this iterator
    pub fn reader(&self) -> &SnssReader<R> {
        &self.reader
    }
}

impl<R: Read> Iterator for Commands<R> {
    type Item = Result<Command>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.next_command().transpose()
    }
}

impl<R: Read> FusedIterator for Commands<R> {}
