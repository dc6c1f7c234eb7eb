use byteorder::{ByteOrder, LittleEndian};

use volrend_lib::volumetric::{DATACUBE_MAGIC, DATACUBE_VERSION, DENSITY_DATASET};

use crate::config::Config;

/// Datacube header
/// little-endian, one `density` dataset
/// 1. magic -- 4 bytes
/// 2. container version -- 16bit
/// 3. dataset count -- 16bit
/// 4. dataset name -- 16bit length + bytes
/// 5. dimensions -- 3x 32bit ints (x,y,z)
/// 6. data -- x*y*z 32bit floats follow the header
pub fn generate_header(cfg: &Config) -> Vec<u8> {
    let name = DENSITY_DATASET.as_bytes();
    let header_len = 4 + 2 + 2 + 2 + name.len() + 3 * 4;

    let mut vec = vec![0; header_len];
    let slice = &mut vec[..];

    slice[0..4].copy_from_slice(DATACUBE_MAGIC);
    LittleEndian::write_u16(&mut slice[4..6], DATACUBE_VERSION);
    LittleEndian::write_u16(&mut slice[6..8], 1);
    LittleEndian::write_u16(&mut slice[8..10], name.len() as u16);

    let d = 10 + name.len();
    slice[10..d].copy_from_slice(name);
    LittleEndian::write_u32(&mut slice[d..d + 4], cfg.dims.x);
    LittleEndian::write_u32(&mut slice[d + 4..d + 8], cfg.dims.y);
    LittleEndian::write_u32(&mut slice[d + 8..d + 12], cfg.dims.z);

    vec
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::args::get_command;

    fn test_config() -> Config {
        let matches = get_command()
            .try_get_matches_from(["cube_gen", "--dims=4,5,6", "-g", "solid"])
            .unwrap();
        Config::from_args(matches).unwrap()
    }

    #[test]
    fn header_layout() {
        let header = generate_header(&test_config());

        assert_eq!(&header[0..4], DATACUBE_MAGIC);
        assert_eq!(LittleEndian::read_u16(&header[4..6]), DATACUBE_VERSION);
        assert_eq!(LittleEndian::read_u16(&header[6..8]), 1);
        assert_eq!(
            LittleEndian::read_u16(&header[8..10]) as usize,
            DENSITY_DATASET.len()
        );
        assert_eq!(&header[10..17], DENSITY_DATASET.as_bytes());
        assert_eq!(LittleEndian::read_u32(&header[17..21]), 4);
        assert_eq!(LittleEndian::read_u32(&header[21..25]), 5);
        assert_eq!(LittleEndian::read_u32(&header[25..29]), 6);
        assert_eq!(header.len(), 29);
    }
}
