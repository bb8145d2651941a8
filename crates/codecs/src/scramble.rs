//! Message scrambling strategies

use crate::{CodecError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Separator between per-character bit groups in a bitstream
pub const GROUP_SEPARATOR: &str = " ";

/// Width a bit group is padded to
pub const GROUP_WIDTH: usize = 8;

/// Turns a message into a bitstream of `'0'`, `'1'` and group separators
pub trait Scrambler {
    /// Scramble `message` into bitstream text
    fn scramble(&self, message: &str) -> Result<String>;

    /// Short identifier of the strategy
    fn name(&self) -> &'static str;
}

/// One MSB-first binary group per character, zero-padded to eight bits.
///
/// Code points above 255 are not truncated; they produce wider groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectBinaryScrambler;

impl Scrambler for DirectBinaryScrambler {
    fn scramble(&self, message: &str) -> Result<String> {
        let groups: Vec<String> = message
            .chars()
            .map(|c| format!("{:0width$b}", c as u32, width = GROUP_WIDTH))
            .collect();

        Ok(groups.join(GROUP_SEPARATOR))
    }

    fn name(&self) -> &'static str {
        "direct"
    }
}

/// Selectable scrambling strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrambleMethod {
    /// Plain binary code points
    #[default]
    Direct,
}

impl ScrambleMethod {
    /// All known methods
    pub fn all() -> &'static [ScrambleMethod] {
        &[ScrambleMethod::Direct]
    }

    /// Instantiate the strategy
    pub fn build(&self) -> Box<dyn Scrambler> {
        match self {
            ScrambleMethod::Direct => Box::new(DirectBinaryScrambler),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ScrambleMethod::Direct => "direct",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ScrambleMethod::Direct => "8-bit MSB-first code point per character, space separated",
        }
    }
}

impl fmt::Display for ScrambleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScrambleMethod {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self> {
        ScrambleMethod::all()
            .iter()
            .copied()
            .find(|m| m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CodecError::UnsupportedScrambler { name: s.to_string() })
    }
}

/// Parse one bit group into its code point
pub fn parse_group(index: usize, group: &str) -> Result<u32> {
    let malformed = || CodecError::MalformedBitGroup {
        index,
        group: group.to_string(),
    };

    if group.is_empty() || !group.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(malformed());
    }

    u32::from_str_radix(group, 2).map_err(|_| malformed())
}

/// Code points of a sequence of bit groups
pub fn code_points<S: AsRef<str>>(groups: &[S]) -> Result<Vec<u32>> {
    groups
        .iter()
        .enumerate()
        .map(|(i, g)| parse_group(i, g.as_ref()))
        .collect()
}

/// Rebuild the message carried by `groups`
pub fn assemble_message<S: AsRef<str>>(groups: &[S]) -> Result<String> {
    let mut message = String::with_capacity(groups.len());

    for (index, group) in groups.iter().enumerate() {
        let group = group.as_ref();
        let value = parse_group(index, group)?;
        let c = char::from_u32(value).ok_or_else(|| CodecError::MalformedBitGroup {
            index,
            group: group.to_string(),
        })?;
        debug!("Group {} {} -> {:?}", index, group, c);
        message.push(c);
    }

    Ok(message)
}
