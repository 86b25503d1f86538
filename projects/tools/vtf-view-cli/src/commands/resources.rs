use crate::error::CliError;
use crate::util::{canonicalize_input_path, with_mapped_file};
use argh::FromArgs;
use std::path::PathBuf;
use vtf_view::resources::ChunkPayload;
use vtf_view::TextureView;

#[derive(FromArgs, Debug)]
/// List the resource table of a VTF file
#[argh(subcommand, name = "resources")]
pub struct ResourcesCmd {
    /// VTF file to inspect
    #[argh(option, from_str_fn(canonicalize_input_path))]
    pub input: PathBuf,
}

pub fn handle_resources_command(cmd: ResourcesCmd) -> Result<(), Box<dyn std::error::Error>> {
    print_resources(&cmd)?;
    Ok(())
}

fn print_resources(cmd: &ResourcesCmd) -> Result<(), CliError> {
    with_mapped_file(&cmd.input, |data| {
        let view = TextureView::new(data)?;
        let table = view.resources()?;
        if table.is_empty() {
            let [major, minor] = view.header().version;
            println!("No resources (version {major}.{minor}).");
            return Ok(());
        }

        println!("{} resources, table at offset {}:", table.len(), table.start());
        for entry in table.iter() {
            let name = match entry.resource_type() {
                Some(ty) => format!("{ty:?}"),
                None => {
                    let bytes = entry.tag.to_le_bytes();
                    format!("Unknown ({})", String::from_utf8_lossy(&bytes[..3]).escape_debug())
                }
            };
            match entry.payload {
                ChunkPayload::Inline(value) => {
                    println!("  {name:<20} inline {:#010x}", u32::from_le_bytes(value))
                }
                ChunkPayload::AtOffset(offset) => println!("  {name:<20} at offset {offset}"),
            }
        }

        if let Some(crc) = view.crc32()? {
            println!("CRC32: {crc:#010x}");
        }
        if let Some(lod) = view.lod_control_settings()? {
            println!(
                "LOD clamp: {}x{} (console {}x{})",
                lod.resolution_clamp[0],
                lod.resolution_clamp[1],
                lod.resolution_clamp_360[0],
                lod.resolution_clamp_360[1]
            );
        }
        if let Some(settings) = view.settings_ex()? {
            println!("Extended settings: {:02x?}", settings.flags);
        }
        if let Some(sheet) = view.sheet_data()? {
            println!("Sheet: {} bytes", sheet.len());
        }
        Ok(())
    })
}
