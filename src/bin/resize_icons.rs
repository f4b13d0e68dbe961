use std::{path::Path, process::ExitCode};

use extension_icons::{cli, manifest_fragment, resize_logo, ICON_SIZES, SOURCE_LOGO};

fn main() -> ExitCode {
    let options = match cli::Options::parse(std::env::args().skip(1)) {
        Ok(options) if options.color.is_none() => options,
        Ok(_) => {
            eprintln!("--color only applies to generate-icons\n{}", cli::USAGE);
            return ExitCode::from(2);
        }
        Err(e) => {
            eprintln!("{e:#}\n{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };
    options.init_logger();

    match resize_logo(Path::new(SOURCE_LOGO), Path::new("."), &ICON_SIZES) {
        Ok(report) => {
            println!("Source image: {SOURCE_LOGO}");
            println!("Original size: {}x{}", report.width, report.height);
            println!("Mode: {:?}", report.color);
            for (path, size) in report.written.iter().zip(ICON_SIZES) {
                let shown = path.strip_prefix(".").unwrap_or(path);
                println!("Created: {} ({size}x{size})", shown.display());
            }
            println!("\n✅ All icons generated successfully!");
            if options.manifest {
                println!("{:#}", manifest_fragment(&ICON_SIZES));
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("❌ Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
