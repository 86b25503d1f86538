#![no_main]

// Builds files with a valid signature and version so the fuzzer spends its time
// on dimensions, formats, resource tables and payload offsets instead of the
// first 16 bytes.

use libfuzzer_sys::{arbitrary, fuzz_target};

mod common;

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct FuzzResource {
    pub tag: [u8; 3],
    pub flags: u8,
    pub value: u32,
}

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct FuzzVtf {
    pub minor: u8,
    pub header_size_slack: i8,
    pub width: u16,
    pub height: u16,
    pub depth: u16,
    pub flags: u32,
    pub num_frames: u16,
    pub image_format: i8,
    pub num_mip_levels: u8,
    pub low_res_image_format: i8,
    pub low_res_image_width: u8,
    pub low_res_image_height: u8,
    pub resources: Vec<FuzzResource>,
    pub payload: Vec<u8>,
}

fn put_u32(data: &mut [u8], offset: usize, value: u32) {
    data[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

impl FuzzVtf {
    fn to_bytes(&self) -> Vec<u8> {
        let minor = u32::from(self.minor % 6);
        let record_size = if minor < 2 { 64 } else { 80 };
        let resources: &[FuzzResource] = if minor >= 3 {
            &self.resources[..self.resources.len().min(32)]
        } else {
            &[]
        };
        let header_size =
            (record_size + resources.len() * 8) as i64 + i64::from(self.header_size_slack);

        let mut data = vec![0u8; record_size + resources.len() * 8];
        data[..4].copy_from_slice(b"VTF\0");
        put_u32(&mut data, 0x04, 7);
        put_u32(&mut data, 0x08, minor);
        put_u32(&mut data, 0x0C, header_size.max(0) as u32);
        data[0x10..0x12].copy_from_slice(&self.width.to_le_bytes());
        data[0x12..0x14].copy_from_slice(&self.height.to_le_bytes());
        put_u32(&mut data, 0x14, self.flags);
        data[0x18..0x1A].copy_from_slice(&self.num_frames.to_le_bytes());
        put_u32(&mut data, 0x34, i32::from(self.image_format) as u32);
        data[0x38] = self.num_mip_levels;
        put_u32(&mut data, 0x39, i32::from(self.low_res_image_format) as u32);
        data[0x3D] = self.low_res_image_width;
        data[0x3E] = self.low_res_image_height;
        if minor >= 2 {
            data[0x3F..0x41].copy_from_slice(&self.depth.to_le_bytes());
        }
        if minor >= 3 {
            put_u32(&mut data, 0x44, resources.len() as u32);
        }

        for (index, resource) in resources.iter().enumerate() {
            let offset = record_size + index * 8;
            data[offset..offset + 3].copy_from_slice(&resource.tag);
            data[offset + 3] = resource.flags;
            put_u32(&mut data, offset + 4, resource.value);
        }

        data.extend_from_slice(&self.payload);
        data
    }
}

fuzz_target!(|input: FuzzVtf| {
    common::exercise_view(&input.to_bytes());
});
