use std::process::ExitCode;

use anyhow::Context;
use extension_icons::{
    cli, icon_file_name, manifest_fragment, IconSpec, DEFAULT_COLOR, ICON_SIZES,
};

fn main() -> anyhow::Result<ExitCode> {
    let options = match cli::Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e:#}\n{}", cli::USAGE);
            return Ok(ExitCode::from(2));
        }
    };
    options.init_logger();
    let color = options.color.unwrap_or(DEFAULT_COLOR);

    for size in ICON_SIZES {
        let file_name = icon_file_name(size);
        let png = IconSpec::square(size, color).to_png();
        std::fs::write(&file_name, png).with_context(|| format!("Failed to write {file_name}"))?;
        log::info!("Wrote {file_name} in {color}");
        println!("Created {file_name} ({size}x{size})");
    }
    println!("All icons created!");

    if options.manifest {
        println!("{:#}", manifest_fragment(&ICON_SIZES));
    }
    Ok(ExitCode::SUCCESS)
}
