use icon_types::{Tag, TaggedF2Dot14};

use crate::error::Error;
use crate::icon::Icon;

/// A type that can be written out as part of an icon file.
///
/// Encoding is fallible: coordinates and colors are range checked as they
/// are converted to their fixed-point representations.
pub trait IconWrite {
    /// Write our data into this [IconWriter].
    fn write_into(&self, writer: &mut IconWriter) -> Result<(), Error>;
}

/// A growable buffer of little-endian icon data.
#[derive(Debug, Default)]
pub struct IconWriter {
    bytes: Vec<u8>,
}

/// Attempt to serialize an icon.
///
/// The icon is expected to have been [normalized][Icon::normalize] already.
/// On error nothing is returned; there is no partially written icon.
pub fn dump_icon(icon: &Icon) -> Result<Vec<u8>, Error> {
    let mut writer = IconWriter::default();
    icon.write_into(&mut writer)?;
    log::debug!(
        "wrote {} paths into {} bytes",
        icon.paths.len(),
        writer.bytes.len()
    );
    Ok(writer.into_data())
}

impl IconWriter {
    /// Write raw bytes into this buffer.
    ///
    /// The caller is responsible for ensuring bytes are in little-endian order.
    #[inline]
    pub fn write_slice(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes)
    }

    /// Write the number of items in a collection as a `uint16`.
    pub fn write_count(&mut self, what: &'static str, count: usize) -> Result<(), Error> {
        let count = u16::try_from(count).map_err(|_| Error::CountOverflow { what, count })?;
        count.write_into(self)
    }

    /// Encode a value as a [`TaggedF2Dot14`] and write it.
    pub fn write_fixed(&mut self, value: f64, tag: bool) -> Result<(), Error> {
        TaggedF2Dot14::checked_from_f64(value, tag)
            .ok_or(Error::CoordinateOverflow { value })?
            .write_into(self)
    }

    /// The number of bytes written so far.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Consume the writer, returning the written bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.bytes
    }
}

macro_rules! write_le_bytes {
    ($ty:ty) => {
        impl IconWrite for $ty {
            #[inline]
            fn write_into(&self, writer: &mut IconWriter) -> Result<(), Error> {
                writer.write_slice(&self.to_le_bytes());
                Ok(())
            }
        }
    };
}

write_le_bytes!(u16);
write_le_bytes!(TaggedF2Dot14);

// tags are byte strings, and have no endianness
impl IconWrite for Tag {
    fn write_into(&self, writer: &mut IconWriter) -> Result<(), Error> {
        writer.write_slice(&self.to_bytes());
        Ok(())
    }
}

impl<T: IconWrite> IconWrite for [T] {
    fn write_into(&self, writer: &mut IconWriter) -> Result<(), Error> {
        self.iter().try_for_each(|item| item.write_into(writer))
    }
}

impl<T: IconWrite> IconWrite for Vec<T> {
    fn write_into(&self, writer: &mut IconWriter) -> Result<(), Error> {
        self.as_slice().write_into(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_are_little_endian() {
        let mut writer = IconWriter::default();
        0x1234_u16.write_into(&mut writer).unwrap();
        let fixed = TaggedF2Dot14::from_bits(0xfffe);
        fixed.write_into(&mut writer).unwrap();
        icon_types::TTIC_MAGIC.write_into(&mut writer).unwrap();
        assert_eq!(
            writer.into_data(),
            [0x34, 0x12, 0xfe, 0xff, b'T', b'T', b'I', b'C']
        );
    }

    #[test]
    fn fixed_overflow_is_reported() {
        let mut writer = IconWriter::default();
        writer.write_fixed(-1.0, true).unwrap();
        assert_eq!(writer.len(), 2);
        assert_eq!(
            writer.write_fixed(4.0, false),
            Err(Error::CoordinateOverflow { value: 4.0 })
        );
    }

    #[test]
    fn count_overflow() {
        let mut writer = IconWriter::default();
        writer.write_count("points", 65535).unwrap();
        assert_eq!(
            writer.write_count("points", 65536),
            Err(Error::CountOverflow {
                what: "points",
                count: 65536
            })
        );
    }
}
