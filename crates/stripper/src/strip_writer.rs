use std::io::{Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::TriangleId;

fn to_u32(n: usize) -> std::io::Result<u32> {
    u32::try_from(n).map_err(|_| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} does not fit in 32 bits", n),
        )
    })
}

/// Serializes strip membership.
///
/// Everything is a little endian `u32`: the number of strips, then for every
/// strip its length followed by the ids of its triangles from head to tail.
pub fn write_strips<W: Write>(w: &mut W, strips: &[Vec<TriangleId>]) -> std::io::Result<()> {
    w.write_u32::<LittleEndian>(to_u32(strips.len())?)?;
    for strip in strips {
        w.write_u32::<LittleEndian>(to_u32(strip.len())?)?;
        for id in strip {
            w.write_u32::<LittleEndian>(to_u32(id.index())?)?;
        }
    }
    Ok(())
}

/// Reads strips written by [`write_strips`].
pub fn read_strips<R: Read>(r: &mut R) -> std::io::Result<Vec<Vec<TriangleId>>> {
    let n_strips = r.read_u32::<LittleEndian>()? as usize;
    // Lengths come from the input; let the vectors grow instead of trusting them.
    let mut strips = Vec::new();
    for _ in 0..n_strips {
        let len = r.read_u32::<LittleEndian>()? as usize;
        let mut strip = Vec::new();
        for _ in 0..len {
            strip.push(TriangleId(r.read_u32::<LittleEndian>()? as usize));
        }
        strips.push(strip);
    }
    Ok(strips)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let strips = vec![vec![TriangleId(2), TriangleId(0)], vec![TriangleId(1)]];
        let mut buf = Vec::new();
        write_strips(&mut buf, &strips).unwrap();
        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            2, 0, 0, 0,
            2, 0, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0,
            1, 0, 0, 0, 1, 0, 0, 0,
        ];
        assert_eq!(expected, buf);
        assert_eq!(strips, read_strips(&mut buf.as_slice()).unwrap());
    }

    #[test]
    fn truncated_input() {
        let buf = [1u8, 0, 0, 0, 5, 0, 0, 0, 1, 0];
        let err = read_strips(&mut &buf[..]).unwrap_err();
        assert_eq!(std::io::ErrorKind::UnexpectedEof, err.kind());
    }
}
