//! Per-channel codeword serialisation.
//!
//! Each block serialises one codeword per channel: the 4 quantised codes
//! in frequency order, written MSB-first with fixed field widths summing
//! to 16 bits. The sync layer only ever interprets the least-significant
//! bit of each field; dequantising the values belongs to the decoder
//! proper and is not done here.

use std::io;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::structs::band::Band;
use crate::structs::channel::ChannelState;

/// Field width in bits of each subband code, in frequency order.
///
/// The lowest band carries the most resolution; widths sum to
/// [`CODEWORD_BITS`].
pub const BAND_WIDTHS: [u32; Band::COUNT] = [7, 4, 3, 2];

/// Total width of one channel's codeword.
pub const CODEWORD_BITS: u32 = 16;

/// One channel's serialised quantised codes for one block.
///
/// Fields are signed two's-complement values; substitution by the sync
/// inserter only ever flips a field's LSB, so alignment recovery reads
/// nothing but bit 0 of each field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codeword {
    /// Subband codes indexed by `Band as usize`, frequency order.
    pub codes: [i32; Band::COUNT],
}

impl Codeword {
    /// Captures the channel's current codes.
    pub fn from_channel(ch: &ChannelState) -> Self {
        let mut codes = [0; Band::COUNT];
        for band in Band::ALL {
            codes[band as usize] = ch.quantiser[band].code;
        }

        Self { codes }
    }

    /// Writes the 4 fields MSB-first at their fixed widths.
    pub fn write_to<W: io::Write>(&self, writer: &mut BitWriter<W, BigEndian>) -> io::Result<()> {
        for (band, width) in Band::ALL.into_iter().zip(BAND_WIDTHS) {
            writer.write_signed_var(width, self.codes[band as usize])?;
        }

        Ok(())
    }

    /// Reads the 4 fields written by [`write_to`](Codeword::write_to).
    pub fn read_from<R: io::Read>(reader: &mut BitReader<R, BigEndian>) -> io::Result<Self> {
        let mut codes = [0; Band::COUNT];
        for (band, width) in Band::ALL.into_iter().zip(BAND_WIDTHS) {
            codes[band as usize] = reader.read_signed_var(width)?;
        }

        Ok(Self { codes })
    }

    /// XOR of the 4 code LSBs, as a decoder recomputes it per channel.
    #[inline(always)]
    pub fn lsb_parity(&self) -> u32 {
        self.codes.iter().fold(0, |acc, &code| acc ^ (code as u32 & 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::quantiser::QuantiserData;

    #[test]
    fn widths_fill_codeword() {
        assert_eq!(BAND_WIDTHS.iter().sum::<u32>(), CODEWORD_BITS);
    }

    #[test]
    fn round_trip_preserves_lsbs() -> io::Result<()> {
        let codes = [[-2, 1, 0, -1], [5, -8, 3, 1], [63, 7, -4, -2]];

        let mut bytes = Vec::new();
        let mut writer = BitWriter::endian(&mut bytes, BigEndian);
        for codes in codes {
            Codeword { codes }.write_to(&mut writer)?;
        }

        assert_eq!(bytes.len(), codes.len() * (CODEWORD_BITS as usize / 8));

        let mut reader = BitReader::endian(io::Cursor::new(&bytes), BigEndian);
        for codes in codes {
            let word = Codeword::read_from(&mut reader)?;
            assert_eq!(word.codes, codes);
            assert_eq!(word.lsb_parity(), Codeword { codes }.lsb_parity());
        }

        Ok(())
    }

    #[test]
    fn parity_matches_channel_fold() {
        let mut ch = ChannelState::default();
        for (i, band) in Band::ALL.into_iter().enumerate() {
            ch.quantiser[band] = QuantiserData {
                code: [3, -2, 1, 0][i],
                alt_code: [3, -2, 1, 0][i] ^ 1,
                dist_penalty: i as u32,
            };
        }

        let word = Codeword::from_channel(&ch);
        assert_eq!(word.lsb_parity(), ch.code_lsb_parity());
    }
}
