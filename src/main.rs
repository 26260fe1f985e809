// SPDX-License-Identifier: MPL-2.0
use exif_lens::application::port::GeocodeClient;
use exif_lens::application::query::MetadataExtractor;
use exif_lens::config::{self, Config};
use exif_lens::domain::metadata::NormalizedMetadata;
use exif_lens::infrastructure::{DisabledGeocoder, ExifTagDecoder, NominatimGeocoder};
use exif_lens::media;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "Usage: exif_lens [--config-dir DIR] [--offline] <image>...";

struct Flags {
    config_dir: Option<PathBuf>,
    offline: bool,
    images: Vec<PathBuf>,
}

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    let config_dir = args.opt_value_from_str("--config-dir")?;
    let offline = args.contains("--offline");
    let images = args.finish().into_iter().map(PathBuf::from).collect();

    Ok(Flags {
        config_dir,
        offline,
        images,
    })
}

fn load_config(config_dir: Option<&Path>) -> Config {
    let loaded = match config_dir {
        Some(dir) => config::load_from_dir(dir),
        None => config::load(),
    };
    loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not read config, using defaults");
        Config::default()
    })
}

fn build_geocoder(config: &Config, offline: bool) -> Box<dyn GeocodeClient> {
    if offline || !config.geocoder.enabled {
        tracing::info!("reverse geocoding disabled");
        return Box::new(DisabledGeocoder);
    }
    match NominatimGeocoder::new(&config.geocoder) {
        Ok(geocoder) => Box::new(geocoder),
        Err(err) => {
            tracing::warn!(error = %err, "geocoder unavailable, addresses disabled");
            Box::new(DisabledGeocoder)
        }
    }
}

fn print_record(path: &Path, record: Option<&NormalizedMetadata>) {
    println!("{}", path.display());
    let Some(record) = record else {
        println!("  No metadata found");
        return;
    };
    println!(
        "  Coordinates: {}",
        media::format_gps_coordinates(record.coordinates.as_ref())
    );
    if let Some(coords) = &record.coordinates {
        println!("  Map:         {}", coords.map_url());
    }
    println!("  Address:     {}", record.address);
    println!(
        "  Captured:    {}",
        media::format_capture_date(&record.capture_date)
    );
    println!("  Make:        {}", record.camera_make);
    println!("  Model:       {}", record.camera_model);
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };
    if flags.images.is_empty() {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    }

    let config = load_config(flags.config_dir.as_deref());
    let extractor = MetadataExtractor::new(build_geocoder(&config, flags.offline));
    let decoder = ExifTagDecoder::default();

    let mut failed = false;
    for path in &flags.images {
        if !media::has_exif_extension(path) {
            tracing::warn!(
                path = %path.display(),
                "extension is not a format known to carry EXIF, reading content anyway"
            );
        }
        match media::read_image_bytes(path) {
            Ok(bytes) => {
                let record = extractor.extract_from_bytes(&decoder, &bytes);
                print_record(path, record.as_ref());
            }
            Err(err) => {
                tracing::error!(path = %path.display(), error = %err, "failed to read image");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
