//! Console streams and their switches.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Set of streams that currently accept output.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct Channels: u8 {
        /// Standard output.
        const STDOUT = 1 << 0;
        /// Standard error.
        const STDERR = 1 << 1;
    }
}

impl Default for Channels {
    fn default() -> Self {
        Channels::all()
    }
}

/// One console stream.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    /// The switch controlling this stream.
    #[inline]
    pub fn channel(self) -> Channels {
        match self {
            Stream::Stdout => Channels::STDOUT,
            Stream::Stderr => Channels::STDERR,
        }
    }
}

impl fmt::Display for Stream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        })
    }
}
