//! Per-tic input sample as received from the network layer.
//!
//! Wire layout (8-byte header, then chat):
//!
//! | byte | content                                   |
//! |------|-------------------------------------------|
//! | 0    | quit (bit 7) · fire (bit 6) · id (0‥5)    |
//! | 1    | forward, `i8`                             |
//! | 2    | lateral, `i8`                             |
//! | 3‥4  | rotation, `i16`                           |
//! | 5‥6  | vertical, `i16`                           |
//! | 7    | chat length                               |
//! | 8‥   | chat bytes (at most [`MAX_CHAT`] are kept)|
//!
//! The 16-bit fields travel byte-swapped relative to the sending host, so a
//! little-endian peer reads them big-endian and vice versa.

use byteorder::ReadBytesExt;
use std::io::{self, Cursor, Read};
use thiserror::Error;

#[cfg(target_endian = "little")]
type WireOrder = byteorder::BigEndian;
#[cfg(target_endian = "big")]
type WireOrder = byteorder::LittleEndian;

pub const HEADER_LEN: usize = 8;
pub const MAX_CHAT: usize = 36;

const QUIT_BIT: u8 = 0x80;
const FIRE_BIT: u8 = 0x40;
const ID_MASK: u8 = 0x3F;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicCmd {
    pub forward: i8,
    pub lateral: i8,
    pub rotation: i16,
    pub vertical: i16,
    pub fire: bool,
    /// Player slot, 6 bits.
    pub id: u8,
    pub quit: bool,
    pub chat: String,
}

#[derive(Debug, Error)]
pub enum TicCmdError {
    #[error("tic command needs 8 header bytes, got {0}")]
    ShortHeader(usize),

    #[error("chat announces {expected} bytes but only {got} follow")]
    ShortChat { expected: usize, got: usize },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl TicCmd {
    /// Decode one command from a network buffer.
    pub fn decode(buf: &[u8]) -> Result<Self, TicCmdError> {
        if buf.len() < HEADER_LEN {
            return Err(TicCmdError::ShortHeader(buf.len()));
        }

        let mut rd = Cursor::new(buf);
        let bits = rd.read_u8()?;
        let forward = rd.read_i8()?;
        let lateral = rd.read_i8()?;
        let rotation = rd.read_i16::<WireOrder>()?;
        let vertical = rd.read_i16::<WireOrder>()?;
        let chat_len = (rd.read_u8()? as usize).min(MAX_CHAT);

        let got = buf.len() - HEADER_LEN;
        if got < chat_len {
            return Err(TicCmdError::ShortChat {
                expected: chat_len,
                got,
            });
        }
        let mut chat = vec![0u8; chat_len];
        rd.read_exact(&mut chat)?;

        Ok(Self {
            forward,
            lateral,
            rotation,
            vertical,
            fire: bits & FIRE_BIT != 0,
            id: bits & ID_MASK,
            quit: bits & QUIT_BIT != 0,
            chat: String::from_utf8_lossy(&chat).into_owned(),
        })
    }

    /// Clear the per-tic inputs.  `quit` and `id` survive.
    pub fn reset(&mut self) {
        self.forward = 0;
        self.lateral = 0;
        self.rotation = 0;
        self.vertical = 0;
        self.fire = false;
        self.chat.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.forward == 0 && self.lateral == 0 && self.rotation == 0 && self.vertical == 0
    }
}
