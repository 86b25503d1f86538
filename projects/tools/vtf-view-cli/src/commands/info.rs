use crate::error::CliError;
use crate::util::{canonicalize_input_path, find_vtf_files, with_mapped_file};
use argh::FromArgs;
use bytesize::ByteSize;
use std::path::{Path, PathBuf};
use vtf_view::{flags, TextureView};

#[derive(FromArgs, Debug)]
/// Print the header and image layout of VTF files
#[argh(subcommand, name = "info")]
pub struct InfoCmd {
    /// VTF file, or directory to search for VTF files
    #[argh(option, from_str_fn(canonicalize_input_path))]
    pub input: PathBuf,

    /// also list the size and offset of every mip level
    #[argh(switch)]
    pub mips: bool,
}

pub fn handle_info_command(cmd: InfoCmd) -> Result<(), Box<dyn std::error::Error>> {
    let mut files = Vec::new();
    find_vtf_files(&cmd.input, &mut files)?;
    files.sort();
    if files.is_empty() {
        println!("No VTF files found.");
        return Ok(());
    }

    let mut failed = 0usize;
    for file in &files {
        if let Err(e) = print_info(file, cmd.mips) {
            println!("{}: {e}\n", file.display());
            failed += 1;
        }
    }

    if files.len() > 1 {
        println!("Inspected {} files, {failed} failed.", files.len());
    }
    Ok(())
}

fn print_info(path: &Path, mips: bool) -> Result<(), CliError> {
    with_mapped_file(path, |data| {
        let view = TextureView::new(data)?;
        let header = view.header();
        let layout = view.layout();

        println!("{}", path.display());
        println!("  Version:     {}.{}", header.version[0], header.version[1]);
        println!("  Header size: {}", header.header_size);
        println!(
            "  Dimensions:  {}x{}x{}",
            header.width, header.height, header.depth
        );
        println!("  Format:      {}", header.image_format);
        println!("  Flags:       {:#010x}", header.flags);
        if header.has_flag(flags::ENVMAP) {
            println!("  Cubemap:     {} faces", view.face_count());
        }
        println!(
            "  Frames:      {} (start {})",
            header.num_frames, header.start_frame
        );
        let [r, g, b] = header.reflectivity;
        println!("  Reflectivity: {r:.3} {g:.3} {b:.3}");
        println!("  Bump scale:  {}", header.bump_scale);
        println!("  Mip levels:  {}", header.num_mip_levels);
        println!(
            "  Thumbnail:   {}x{} {}",
            header.low_res_image_width, header.low_res_image_height, header.low_res_image_format
        );
        println!("  Resources:   {}", header.num_resources);
        println!(
            "  Image data:  {} ({} bytes in file)",
            ByteSize(u64::from(layout.total_size())),
            data.len()
        );

        match view.image_data_start()? {
            Some(start) => println!("  Data offset: {start}"),
            None => println!("  Data offset: <no image resource>"),
        }

        if mips {
            for mip in 0..header.num_mip_levels {
                let (width, height, depth) = layout.mip_dimensions(mip);
                println!(
                    "    Mip {mip:>2}: {width}x{height}x{depth}, {} per image, offset {}",
                    ByteSize(u64::from(layout.mip_size(mip))),
                    layout.mip_offset(mip)
                );
            }
        }

        println!();
        Ok(())
    })
}
